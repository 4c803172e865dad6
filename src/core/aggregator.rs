use crate::domain::model::{CleanTicket, FieldValue, GroupKey, CATEGORY, CUSTOMER_ID, ESCALATED};
use crate::domain::report::EscalationMetrics;
use crate::utils::error::{AnalyticsError, Result};
use indexmap::IndexMap;

#[derive(Debug, Default, Clone, Copy)]
struct Tally {
    hits: i128,
    count: usize,
}

impl Tally {
    fn ratio(&self) -> f64 {
        self.hits as f64 / self.count as f64
    }
}

fn require<'a>(value: Option<&'a FieldValue>, field: &str, index: usize) -> Result<&'a FieldValue> {
    value.ok_or_else(|| AnalyticsError::MissingField {
        field: field.to_string(),
        index,
    })
}

fn group_key(value: Option<&FieldValue>, field: &str, index: usize) -> Result<GroupKey> {
    let value = require(value, field, index)?;
    GroupKey::from_value(value).ok_or_else(|| AnalyticsError::UngroupableValue {
        field: field.to_string(),
        index,
        kind: value.kind(),
    })
}

/// Mean `resolution_minutes` per category, in first-seen category order.
pub fn avg_resolution_by_category(records: &[CleanTicket]) -> Result<IndexMap<GroupKey, f64>> {
    let mut totals: IndexMap<GroupKey, Tally> = IndexMap::new();

    for (index, record) in records.iter().enumerate() {
        let category = group_key(record.category.as_ref(), CATEGORY, index)?;
        let tally = totals.entry(category).or_default();
        tally.hits += record.resolution_minutes;
        tally.count += 1;
    }

    Ok(totals
        .into_iter()
        .map(|(category, tally)| (category, tally.ratio()))
        .collect())
}

/// Ticket count per customer, in first-seen customer order.
pub fn ticket_count_per_customer(records: &[CleanTicket]) -> Result<IndexMap<GroupKey, usize>> {
    let mut counts: IndexMap<GroupKey, usize> = IndexMap::new();

    for (index, record) in records.iter().enumerate() {
        let customer = group_key(record.customer_id.as_ref(), CUSTOMER_ID, index)?;
        *counts.entry(customer).or_insert(0) += 1;
    }

    Ok(counts)
}

/// Overall and per-category share of records whose `escalated` value is truthy.
pub fn escalation_metrics(records: &[CleanTicket]) -> Result<EscalationMetrics> {
    if records.is_empty() {
        return Err(AnalyticsError::EmptyInput {
            operation: "escalation metrics",
        });
    }

    let mut overall = Tally::default();
    let mut by_category: IndexMap<GroupKey, Tally> = IndexMap::new();

    for (index, record) in records.iter().enumerate() {
        let category = group_key(record.category.as_ref(), CATEGORY, index)?;
        let escalated = require(record.escalated.as_ref(), ESCALATED, index)?.is_truthy();

        let tally = by_category.entry(category).or_default();
        tally.count += 1;
        overall.count += 1;
        if escalated {
            tally.hits += 1;
            overall.hits += 1;
        }
    }

    Ok(EscalationMetrics {
        overall: overall.ratio(),
        by_category: by_category
            .into_iter()
            .map(|(category, tally)| (category, tally.ratio()))
            .collect(),
    })
}
