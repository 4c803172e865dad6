use crate::core::pipeline::PipelineOutcome;
use crate::core::FinalReport;
use crate::domain::model::GroupKey;
use crate::utils::error::{AnalyticsError, Result};
use indexmap::IndexMap;

pub const CSV_HEADER: [&str; 4] = [
    "category",
    "avg_resolution_minutes",
    "escalation_rate",
    "tickets",
];

pub fn render_json(report: &FinalReport) -> Result<Vec<u8>> {
    Ok(serde_json::to_vec_pretty(report)?)
}

/// One row per category, in report order.
pub fn render_category_csv(outcome: &PipelineOutcome) -> Result<Vec<u8>> {
    let mut tickets: IndexMap<GroupKey, usize> = IndexMap::new();
    for record in &outcome.cleaned {
        if let Some(key) = record.category.as_ref().and_then(GroupKey::from_value) {
            *tickets.entry(key).or_insert(0) += 1;
        }
    }

    let report = &outcome.report;
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(CSV_HEADER)?;

    for (category, average) in &report.averages {
        let rate = report
            .escalation_stats
            .by_category
            .get(category)
            .copied()
            .unwrap_or(0.0);

        writer.write_record([
            category.to_string(),
            format!("{:.2}", average),
            format!("{:.4}", rate),
            tickets.get(category).copied().unwrap_or(0).to_string(),
        ])?;
    }

    writer
        .into_inner()
        .map_err(|e| AnalyticsError::IoError(e.into_error()))
}

/// Renders the outcome as `format`; returns the file extension and the bytes.
pub fn render(format: &str, outcome: &PipelineOutcome) -> Result<(&'static str, Vec<u8>)> {
    match format {
        "json" => Ok(("json", render_json(&outcome.report)?)),
        "csv" => Ok(("csv", render_category_csv(outcome)?)),
        other => Err(AnalyticsError::InvalidConfigValueError {
            field: "output_formats".to_string(),
            value: other.to_string(),
            reason: "Unsupported format".to_string(),
        }),
    }
}
