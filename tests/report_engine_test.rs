use anyhow::Result;
use tempfile::TempDir;
use ticket_analytics::{AnalyticsError, LocalStorage, ReportEngine, TomlConfig};

const TICKETS: &str = r#"[
    {"category": "network", "resolution_minutes": 45, "customer_id": 7, "escalated": true},
    {"category": " Network", "resolution_minutes": "unknown", "customer_id": 8, "escalated": false},
    {"category": "printer", "resolution_minutes": 15, "customer_id": 7, "escalated": false}
]"#;

fn config_for(output_path: &str, extra: &str) -> Result<TomlConfig> {
    let content = format!(
        r#"
[report]
name = "engine-test"

[cleaning]
default_resolution = 5

[load]
output_path = "{}"
output_formats = ["json", "csv"]
filename = "summary"
{}
"#,
        output_path, extra
    );
    Ok(TomlConfig::from_toml_str(&content)?)
}

#[tokio::test]
async fn test_engine_writes_reports_to_disk() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let base = temp_dir.path().to_string_lossy().replace('\\', "/");
    tokio::fs::write(temp_dir.path().join("tickets.json"), TICKETS).await?;

    let engine = ReportEngine::new(LocalStorage::new(base), config_for("reports", "")?);
    let written = engine.run("tickets.json").await?;

    assert_eq!(written, vec!["reports/summary.json", "reports/summary.csv"]);

    let json = tokio::fs::read(temp_dir.path().join("reports/summary.json")).await?;
    let report: serde_json::Value = serde_json::from_slice(&json)?;
    assert_eq!(report["metadata"]["total_tickets"], 3);
    assert_eq!(report["averages"]["Network"], 25.0);
    assert_eq!(report["averages"]["Printer"], 15.0);
    assert_eq!(report["customer_activity"]["top_customer"], 7);

    let csv = tokio::fs::read_to_string(temp_dir.path().join("reports/summary.csv")).await?;
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines[0], "category,avg_resolution_minutes,escalation_rate,tickets");
    assert_eq!(lines[1], "Network,25.00,0.5000,2");
    assert_eq!(lines[2], "Printer,15.00,0.0000,1");
    Ok(())
}

#[tokio::test]
async fn test_strict_engine_rejects_incomplete_records() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let base = temp_dir.path().to_string_lossy().replace('\\', "/");
    tokio::fs::write(
        temp_dir.path().join("tickets.json"),
        r#"[{"category": "network", "resolution_minutes": 45}]"#,
    )
    .await?;

    let config = config_for("reports", "\n[validation]\nstrict = true\n")?;
    let engine = ReportEngine::new(LocalStorage::new(base), config);

    let err = engine.run("tickets.json").await.unwrap_err();
    assert!(matches!(err, AnalyticsError::ValidationError { .. }));
    assert!(!temp_dir.path().join("reports").exists());
    Ok(())
}

#[tokio::test]
async fn test_engine_empty_input() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let base = temp_dir.path().to_string_lossy().replace('\\', "/");
    tokio::fs::write(temp_dir.path().join("tickets.json"), "[]").await?;

    let engine = ReportEngine::new(LocalStorage::new(base), config_for("reports", "")?);
    let err = engine.run("tickets.json").await.unwrap_err();
    assert!(matches!(err, AnalyticsError::EmptyInput { .. }));
    Ok(())
}
