use crate::core::aggregator::{avg_resolution_by_category, escalation_metrics, ticket_count_per_customer};
use crate::domain::model::{CleanTicket, GroupKey};
use crate::domain::report::{CustomerActivity, FinalReport, ReportMetadata, DEFAULT_STATUS};
use crate::utils::error::{AnalyticsError, Result};
use indexmap::IndexMap;

/// Customer with the most tickets; ties go to the customer counted first.
pub fn top_customer(counts: &IndexMap<GroupKey, usize>) -> Option<&GroupKey> {
    let mut best: Option<(&GroupKey, usize)> = None;
    for (customer, &count) in counts {
        match best {
            Some((_, best_count)) if count <= best_count => {}
            _ => best = Some((customer, count)),
        }
    }
    best.map(|(customer, _)| customer)
}

pub fn generate_final_report(records: &[CleanTicket]) -> Result<FinalReport> {
    generate_report_with_status(records, DEFAULT_STATUS)
}

pub fn generate_report_with_status(records: &[CleanTicket], status: &str) -> Result<FinalReport> {
    if records.is_empty() {
        return Err(AnalyticsError::EmptyInput {
            operation: "final report",
        });
    }

    let averages = avg_resolution_by_category(records)?;
    let escalation_stats = escalation_metrics(records)?;
    let counts = ticket_count_per_customer(records)?;

    let top = top_customer(&counts)
        .cloned()
        .ok_or(AnalyticsError::EmptyInput {
            operation: "top customer",
        })?;

    Ok(FinalReport {
        metadata: ReportMetadata {
            total_tickets: records.len(),
            status: status.to_string(),
        },
        averages,
        escalation_stats,
        customer_activity: CustomerActivity {
            unique_customers: counts.len(),
            top_customer: top,
        },
    })
}
