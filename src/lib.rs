pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::config::{cli::LocalStorage, toml_config::TomlConfig};

pub use crate::core::{
    aggregator::{avg_resolution_by_category, escalation_metrics, ticket_count_per_customer},
    cleaner::{clean_ticket_data, DEFAULT_RESOLUTION},
    engine::ReportEngine,
    pipeline::{AnalyticsPipeline, PipelineOutcome},
    reporter::{generate_final_report, generate_report_with_status},
    validator::{invalid_resolution_records, validate_records, validate_required_keys},
};
pub use crate::domain::model::{CleanTicket, FieldValue, GroupKey, TicketRecord};
pub use crate::domain::report::FinalReport;
pub use crate::utils::error::{AnalyticsError, Result};
