use clap::Parser;
use ticket_analytics::core::ConfigProvider;
use ticket_analytics::utils::error::{AnalyticsError, ErrorSeverity};
use ticket_analytics::utils::{logger, validation::Validate};
use ticket_analytics::{CliConfig, LocalStorage, ReportEngine, TomlConfig};

async fn run_with<C: ConfigProvider + Validate>(
    config: C,
    input: &str,
) -> Result<Vec<String>, AnalyticsError> {
    config.validate()?;
    tracing::info!("✅ Configuration validated");
    tracing::debug!(
        "Required keys: {:?}, default resolution: {}, formats: {:?}",
        config.required_keys(),
        config.default_resolution(),
        config.output_formats()
    );

    let engine = ReportEngine::new(LocalStorage::new(".".to_string()), config);
    engine.run(input).await
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    if cli.json_logs {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting ticket-report");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let input = cli.input.clone();
    let result = match cli.config.as_deref() {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path);
            let mut config = TomlConfig::from_file(path)?;
            // --strict 只能開啟，不能關閉檔案中的設定
            if cli.strict {
                config.validation.strict = true;
            }
            run_with(config, &input).await
        }
        None => run_with(cli, &input).await,
    };

    match result {
        Ok(paths) => {
            for path in &paths {
                tracing::info!("📁 Output saved to: {}", path);
                println!("📁 {}", path);
            }
        }
        Err(e) => {
            tracing::error!(
                "❌ Report failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            let exit_code = match e.severity() {
                ErrorSeverity::Low => 0,
                ErrorSeverity::Medium => 2,
                ErrorSeverity::High => 1,
                ErrorSeverity::Critical => 3,
            };

            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}
