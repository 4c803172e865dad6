use crate::domain::model::TicketRecord;

/// Positions of the records that failed each check.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationSummary {
    pub missing_required: Vec<usize>,
    pub invalid_resolution: Vec<usize>,
}

impl ValidationSummary {
    pub fn is_clean(&self) -> bool {
        self.missing_required.is_empty() && self.invalid_resolution.is_empty()
    }
}

fn is_missing_any<K: AsRef<str>>(record: &TicketRecord, required_keys: &[K]) -> bool {
    required_keys
        .iter()
        .any(|key| !record.has_field(key.as_ref()))
}

/// Records lacking at least one of `required_keys`, in input order.
pub fn validate_required_keys<'a, K: AsRef<str>>(
    records: &'a [TicketRecord],
    required_keys: &[K],
) -> Vec<&'a TicketRecord> {
    records
        .iter()
        .filter(|record| is_missing_any(record, required_keys))
        .collect()
}

/// Indices whose `resolution_minutes` is absent, null or not an integer.
pub fn invalid_resolution_records(records: &[TicketRecord]) -> Vec<usize> {
    records
        .iter()
        .enumerate()
        .filter(|(_, record)| {
            record
                .resolution_minutes
                .as_ref()
                .and_then(|value| value.as_integer())
                .is_none()
        })
        .map(|(index, _)| index)
        .collect()
}

pub fn validate_records<K: AsRef<str>>(
    records: &[TicketRecord],
    required_keys: &[K],
) -> ValidationSummary {
    let missing_required = records
        .iter()
        .enumerate()
        .filter(|(_, record)| is_missing_any(record, required_keys))
        .map(|(index, _)| index)
        .collect();

    ValidationSummary {
        missing_required,
        invalid_resolution: invalid_resolution_records(records),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::FieldValue;
    use serde_json::json;

    fn records() -> Vec<TicketRecord> {
        serde_json::from_value(json!([
            {"category": "bug", "resolution_minutes": 10, "customer_id": 1, "escalated": false},
            {"category": "bug", "customer_id": 2, "escalated": true},
            {"resolution_minutes": "n/a", "customer_id": 3, "escalated": false},
            {"category": "ui", "resolution_minutes": null, "customer_id": 4, "escalated": false},
            {"category": "ui", "resolution_minutes": true, "customer_id": 5, "escalated": false},
            {"category": "ui", "resolution_minutes": 12.0, "customer_id": 6, "escalated": false}
        ]))
        .unwrap()
    }

    #[test]
    fn test_validate_required_keys_preserves_order() {
        let records = records();
        let missing = validate_required_keys(&records, &["category", "resolution_minutes"]);

        assert_eq!(missing.len(), 2);
        assert_eq!(missing[0].customer_id, Some(FieldValue::Integer(2)));
        assert_eq!(missing[1].customer_id, Some(FieldValue::Integer(3)));
    }

    #[test]
    fn test_null_value_counts_as_present() {
        let records = records();
        let missing = validate_required_keys(&records[3..4], &["resolution_minutes"]);
        assert!(missing.is_empty());
    }

    #[test]
    fn test_empty_required_keys_yields_nothing() {
        let records = records();
        let keys: [&str; 0] = [];
        assert!(validate_required_keys(&records, &keys).is_empty());
    }

    #[test]
    fn test_invalid_resolution_records() {
        let records = records();
        // absent, text, null and float are invalid; a boolean is accepted
        assert_eq!(invalid_resolution_records(&records), vec![1, 2, 3, 5]);
    }

    #[test]
    fn test_integer_beyond_i64_is_valid() {
        let records: Vec<TicketRecord> =
            serde_json::from_value(json!([{"resolution_minutes": u64::MAX}])).unwrap();
        assert!(invalid_resolution_records(&records).is_empty());
    }

    #[test]
    fn test_validate_records_summary() {
        let records = records();
        let summary = validate_records(&records, &["category".to_string()]);

        assert_eq!(summary.missing_required, vec![2]);
        assert_eq!(summary.invalid_resolution, vec![1, 2, 3, 5]);
        assert!(!summary.is_clean());
        assert!(validate_records(&records[..1], &["category"]).is_clean());
    }
}
