use crate::domain::model::GroupKey;
use indexmap::IndexMap;
use serde::{Serialize, Serializer};

pub const DEFAULT_STATUS: &str = "Cleaned & Verified";

// JSON object keys must be strings. Distinct keys can render alike
// (`"1"` and `1`, `"null"` and null); both entries are written, as
// Python's json.dumps does.
fn string_keys<S, V>(map: &IndexMap<GroupKey, V>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
    V: Serialize,
{
    serializer.collect_map(map.iter().map(|(key, value)| (key.to_string(), value)))
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportMetadata {
    pub total_tickets: usize,
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EscalationMetrics {
    pub overall: f64,
    #[serde(serialize_with = "string_keys")]
    pub by_category: IndexMap<GroupKey, f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CustomerActivity {
    pub unique_customers: usize,
    pub top_customer: GroupKey,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FinalReport {
    pub metadata: ReportMetadata,
    #[serde(serialize_with = "string_keys")]
    pub averages: IndexMap<GroupKey, f64>,
    pub escalation_stats: EscalationMetrics,
    pub customer_activity: CustomerActivity,
}
