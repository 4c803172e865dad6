use crate::core::cleaner::clean_ticket_data;
use crate::core::reporter::generate_report_with_status;
use crate::core::validator::{validate_records, ValidationSummary};
use crate::core::{CleanTicket, ConfigProvider, FinalReport, TicketRecord};
use crate::utils::error::{AnalyticsError, Result};

#[derive(Debug, Clone)]
pub struct PipelineOutcome {
    pub validation: ValidationSummary,
    pub cleaned: Vec<CleanTicket>,
    pub report: FinalReport,
}

/// Validate, clean, aggregate and report, in that order.
pub struct AnalyticsPipeline<C: ConfigProvider> {
    config: C,
}

impl<C: ConfigProvider> AnalyticsPipeline<C> {
    pub fn new(config: C) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &C {
        &self.config
    }

    pub fn validate(&self, records: &[TicketRecord]) -> Result<ValidationSummary> {
        let summary = validate_records(records, self.config.required_keys());

        if !summary.missing_required.is_empty() {
            tracing::warn!(
                "⚠️ {} records missing required keys {:?} (positions {:?})",
                summary.missing_required.len(),
                self.config.required_keys(),
                summary.missing_required
            );

            if self.config.strict() {
                return Err(AnalyticsError::ValidationError {
                    message: format!(
                        "{} of {} records are missing required keys",
                        summary.missing_required.len(),
                        records.len()
                    ),
                });
            }
        }

        if !summary.invalid_resolution.is_empty() {
            tracing::warn!(
                "⚠️ {} records have invalid resolution_minutes, substituting {}",
                summary.invalid_resolution.len(),
                self.config.default_resolution()
            );
            tracing::debug!("Invalid resolution positions: {:?}", summary.invalid_resolution);
        }

        Ok(summary)
    }

    pub fn clean(&self, records: &[TicketRecord]) -> Vec<CleanTicket> {
        clean_ticket_data(records, self.config.default_resolution())
    }

    pub fn report(&self, cleaned: &[CleanTicket]) -> Result<FinalReport> {
        generate_report_with_status(cleaned, self.config.status_label())
    }

    pub fn run(&self, records: &[TicketRecord]) -> Result<PipelineOutcome> {
        tracing::info!("Validating {} records", records.len());
        let validation = self.validate(records)?;

        tracing::info!("Cleaning records");
        let cleaned = self.clean(records);

        tracing::info!("Building report");
        let report = self.report(&cleaned)?;
        tracing::info!(
            "Report ready: {} tickets, {} categories, {} customers",
            report.metadata.total_tickets,
            report.averages.len(),
            report.customer_activity.unique_customers
        );

        Ok(PipelineOutcome {
            validation,
            cleaned,
            report,
        })
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::domain::model::GroupKey;
    use serde_json::json;

    #[derive(Debug, Clone)]
    pub(crate) struct MockConfig {
        pub required_keys: Vec<String>,
        pub default_resolution: i64,
        pub strict: bool,
        pub output_path: String,
        pub output_formats: Vec<String>,
    }

    impl MockConfig {
        pub(crate) fn new() -> Self {
            Self {
                required_keys: vec![
                    "category".to_string(),
                    "resolution_minutes".to_string(),
                    "customer_id".to_string(),
                    "escalated".to_string(),
                ],
                default_resolution: 0,
                strict: false,
                output_path: "out".to_string(),
                output_formats: vec!["json".to_string()],
            }
        }
    }

    impl ConfigProvider for MockConfig {
        fn required_keys(&self) -> &[String] {
            &self.required_keys
        }

        fn default_resolution(&self) -> i64 {
            self.default_resolution
        }

        fn status_label(&self) -> &str {
            "Cleaned & Verified"
        }

        fn strict(&self) -> bool {
            self.strict
        }

        fn output_path(&self) -> &str {
            &self.output_path
        }

        fn output_formats(&self) -> &[String] {
            &self.output_formats
        }

        fn output_filename(&self) -> &str {
            "ticket_report"
        }
    }

    fn raw(value: serde_json::Value) -> Vec<TicketRecord> {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_run_reference_example() {
        let records = raw(json!([
            {"category": " bug ", "resolution_minutes": "x", "customer_id": 1, "escalated": true},
            {"category": "Bug", "resolution_minutes": 10, "customer_id": 1, "escalated": false}
        ]));
        let mut config = MockConfig::new();
        config.default_resolution = 5;

        let outcome = AnalyticsPipeline::new(config).run(&records).unwrap();

        assert_eq!(outcome.validation.invalid_resolution, vec![0]);
        assert!(outcome.validation.missing_required.is_empty());
        assert_eq!(outcome.cleaned[0].resolution_minutes, 5);
        assert_eq!(outcome.report.averages[&GroupKey::from("Bug")], 7.5);
        assert_eq!(outcome.report.escalation_stats.overall, 0.5);
        assert_eq!(outcome.report.customer_activity.top_customer, GroupKey::Integer(1));
    }

    #[test]
    fn test_strict_mode_rejects_missing_keys() {
        let records = raw(json!([
            {"category": "Bug", "resolution_minutes": 3, "customer_id": 1}
        ]));
        let mut config = MockConfig::new();
        config.strict = true;

        let err = AnalyticsPipeline::new(config).run(&records).unwrap_err();
        assert!(matches!(err, AnalyticsError::ValidationError { .. }));
    }

    #[test]
    fn test_lenient_mode_surfaces_missing_field_from_aggregation() {
        let records = raw(json!([
            {"category": "Bug", "resolution_minutes": 3, "customer_id": 1}
        ]));

        let pipeline = AnalyticsPipeline::new(MockConfig::new());
        let summary = pipeline.validate(&records).unwrap();
        assert_eq!(summary.missing_required, vec![0]);

        let err = pipeline.run(&records).unwrap_err();
        assert!(matches!(err, AnalyticsError::MissingField { .. }));
    }
}
