use crate::core::cleaner::DEFAULT_RESOLUTION;
use crate::core::ConfigProvider;
use crate::domain::model::{CATEGORY, CUSTOMER_ID, ESCALATED, RESOLUTION_MINUTES};
use crate::domain::report::DEFAULT_STATUS;
use crate::utils::error::{AnalyticsError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

fn default_required_keys() -> Vec<String> {
    [CATEGORY, RESOLUTION_MINUTES, CUSTOMER_ID, ESCALATED]
        .iter()
        .map(|key| key.to_string())
        .collect()
}

fn default_status() -> String {
    DEFAULT_STATUS.to_string()
}

fn default_resolution() -> i64 {
    DEFAULT_RESOLUTION
}

fn default_output_formats() -> Vec<String> {
    vec!["json".to_string()]
}

fn default_filename() -> String {
    "ticket_report_{timestamp}".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub report: ReportConfig,
    #[serde(default)]
    pub validation: ValidationConfig,
    #[serde(default)]
    pub cleaning: CleaningConfig,
    pub load: LoadConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    pub name: String,
    pub description: Option<String>,
    #[serde(default = "default_status")]
    pub status_label: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationConfig {
    #[serde(default = "default_required_keys")]
    pub required_keys: Vec<String>,
    #[serde(default)]
    pub strict: bool,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            required_keys: default_required_keys(),
            strict: false,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CleaningConfig {
    #[serde(default = "default_resolution")]
    pub default_resolution: i64,
}

impl Default for CleaningConfig {
    fn default() -> Self {
        Self {
            default_resolution: DEFAULT_RESOLUTION,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadConfig {
    pub output_path: String,
    #[serde(default = "default_output_formats")]
    pub output_formats: Vec<String>,
    #[serde(default = "default_filename")]
    pub filename: String,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(AnalyticsError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| AnalyticsError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${OUTPUT_DIR})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = regex::Regex::new(r"\$\{([^}]+)\}").map_err(|e| AnalyticsError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        validation::validate_non_empty_string("report.name", &self.report.name)?;
        validation::validate_non_empty_string("report.status_label", &self.report.status_label)?;
        validation::validate_key_list("validation.required_keys", &self.validation.required_keys)?;
        validation::validate_path("load.output_path", &self.load.output_path)?;
        validation::validate_output_formats("load.output_formats", &self.load.output_formats)?;
        validation::validate_non_empty_string("load.filename", &self.load.filename)?;
        Ok(())
    }
}

impl ConfigProvider for TomlConfig {
    fn required_keys(&self) -> &[String] {
        &self.validation.required_keys
    }

    fn default_resolution(&self) -> i64 {
        self.cleaning.default_resolution
    }

    fn status_label(&self) -> &str {
        &self.report.status_label
    }

    fn strict(&self) -> bool {
        self.validation.strict
    }

    fn output_path(&self) -> &str {
        &self.load.output_path
    }

    fn output_formats(&self) -> &[String] {
        &self.load.output_formats
    }

    fn output_filename(&self) -> &str {
        &self.load.filename
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
