use crate::domain::model::{CleanTicket, FieldValue, TicketRecord};

pub const DEFAULT_RESOLUTION: i64 = 0;

/// Upper-cases the first letter of every alphabetic run and lower-cases the rest.
///
/// `"they're  ON-call"` becomes `"They'Re  On-Call"`.
pub fn title_case(value: &str) -> String {
    let mut result = String::with_capacity(value.len());
    let mut in_word = false;

    for c in value.chars() {
        if c.is_alphabetic() {
            if in_word {
                result.extend(c.to_lowercase());
            } else {
                result.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            result.push(c);
            in_word = false;
        }
    }

    result
}

fn clean_category(category: &FieldValue) -> FieldValue {
    match category.as_text() {
        Some(text) => FieldValue::Text(title_case(text.trim())),
        None => category.clone(),
    }
}

fn clean_record(record: &TicketRecord, default_res: i64) -> CleanTicket {
    let resolution_minutes = record
        .resolution_minutes
        .as_ref()
        .and_then(FieldValue::as_integer)
        .unwrap_or(i128::from(default_res));

    CleanTicket {
        category: record.category.as_ref().map(clean_category),
        resolution_minutes,
        customer_id: record.customer_id.clone(),
        escalated: record.escalated.clone(),
        extra: record.extra.clone(),
    }
}

/// Builds a normalized copy of `records`; the input is left untouched.
pub fn clean_ticket_data(records: &[TicketRecord], default_res: i64) -> Vec<CleanTicket> {
    let cleaned: Vec<CleanTicket> = records
        .iter()
        .map(|record| clean_record(record, default_res))
        .collect();

    tracing::debug!(
        "Cleaned {} records (default resolution {})",
        cleaned.len(),
        default_res
    );
    cleaned
}
