pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::core::ConfigProvider;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{self, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "ticket-report")]
#[command(about = "Validate, clean and summarize support-ticket records")]
pub struct CliConfig {
    /// JSON file holding an array of ticket records
    #[arg(long, default_value = "tickets.json")]
    pub input: String,

    /// TOML configuration file; replaces the flags below except --strict
    #[arg(long)]
    pub config: Option<String>,

    #[arg(long, default_value = "./output")]
    pub output_path: String,

    #[arg(
        long,
        value_delimiter = ',',
        default_values = ["category", "resolution_minutes", "customer_id", "escalated"]
    )]
    pub required_keys: Vec<String>,

    #[arg(long, default_value = "0", allow_hyphen_values = true)]
    pub default_resolution: i64,

    #[arg(long, default_value = "Cleaned & Verified")]
    pub status_label: String,

    #[arg(long, value_delimiter = ',', default_value = "json")]
    pub output_formats: Vec<String>,

    #[arg(long, default_value = "ticket_report_{timestamp}")]
    pub output_filename: String,

    #[arg(long, help = "Fail when any record is missing a required key")]
    pub strict: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn required_keys(&self) -> &[String] {
        &self.required_keys
    }

    fn default_resolution(&self) -> i64 {
        self.default_resolution
    }

    fn status_label(&self) -> &str {
        &self.status_label
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
        &self.output_filename
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_path("input", &self.input)?;
        validation::validate_path("output_path", &self.output_path)?;
        validation::validate_key_list("required_keys", &self.required_keys)?;
        validation::validate_non_empty_string("status_label", &self.status_label)?;
        validation::validate_output_formats("output_formats", &self.output_formats)?;
        validation::validate_non_empty_string("output_filename", &self.output_filename)?;
        Ok(())
    }
}
