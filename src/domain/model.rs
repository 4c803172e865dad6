use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::hash::{Hash, Hasher};

pub const CATEGORY: &str = "category";
pub const RESOLUTION_MINUTES: &str = "resolution_minutes";
pub const CUSTOMER_ID: &str = "customer_id";
pub const ESCALATED: &str = "escalated";

/// A field value, typed when the record is deserialized.
///
/// Variant order matters for the untagged representation: `10` becomes
/// `Integer`, integers above `i64::MAX` become `Unsigned`, and only `10.0`
/// or `10.5` fall through to `Float`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Null,
    Bool(bool),
    Integer(i64),
    Unsigned(u64),
    Float(f64),
    Text(String),
    List(Vec<FieldValue>),
    Map(IndexMap<String, FieldValue>),
}

impl FieldValue {
    /// Integer view of the value. Booleans are integers here (true = 1).
    pub fn as_integer(&self) -> Option<i128> {
        match self {
            FieldValue::Integer(n) => Some(i128::from(*n)),
            FieldValue::Unsigned(n) => Some(i128::from(*n)),
            FieldValue::Bool(b) => Some(i128::from(*b)),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn is_truthy(&self) -> bool {
        match self {
            FieldValue::Null => false,
            FieldValue::Bool(b) => *b,
            FieldValue::Integer(n) => *n != 0,
            FieldValue::Unsigned(n) => *n != 0,
            FieldValue::Float(f) => *f != 0.0,
            FieldValue::Text(s) => !s.is_empty(),
            FieldValue::List(items) => !items.is_empty(),
            FieldValue::Map(entries) => !entries.is_empty(),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            FieldValue::Null => "null",
            FieldValue::Bool(_) => "boolean",
            FieldValue::Integer(_) | FieldValue::Unsigned(_) => "integer",
            FieldValue::Float(_) => "float",
            FieldValue::Text(_) => "text",
            FieldValue::List(_) => "list",
            FieldValue::Map(_) => "map",
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Integer(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Float(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Bool(value)
    }
}

/// The hashable subset of [`FieldValue`], used as a grouping key.
///
/// Numeric keys compare by value across variants: `true`, `1` and `1.0` are
/// the same key. A map keeps whichever form it saw first.
#[derive(Debug, Clone)]
pub enum GroupKey {
    Null,
    Bool(bool),
    Integer(i128),
    Float(f64),
    Text(String),
}

// Normalized form used for equality and hashing.
#[derive(PartialEq, Eq, Hash)]
enum Canonical<'a> {
    Null,
    Integer(i128),
    Float(u64),
    Text(&'a str),
}

impl GroupKey {
    /// Returns `None` for lists and maps.
    pub fn from_value(value: &FieldValue) -> Option<Self> {
        match value {
            FieldValue::Null => Some(GroupKey::Null),
            FieldValue::Bool(b) => Some(GroupKey::Bool(*b)),
            FieldValue::Integer(n) => Some(GroupKey::Integer(i128::from(*n))),
            FieldValue::Unsigned(n) => Some(GroupKey::Integer(i128::from(*n))),
            FieldValue::Float(f) => Some(GroupKey::Float(*f)),
            FieldValue::Text(s) => Some(GroupKey::Text(s.clone())),
            FieldValue::List(_) | FieldValue::Map(_) => None,
        }
    }

    fn canonical(&self) -> Canonical<'_> {
        match self {
            GroupKey::Null => Canonical::Null,
            GroupKey::Bool(b) => Canonical::Integer(i128::from(*b)),
            GroupKey::Integer(n) => Canonical::Integer(*n),
            GroupKey::Float(f)
                if f.fract() == 0.0 && *f >= i128::MIN as f64 && *f < i128::MAX as f64 =>
            {
                Canonical::Integer(*f as i128)
            }
            GroupKey::Float(f) => Canonical::Float(f.to_bits()),
            GroupKey::Text(s) => Canonical::Text(s),
        }
    }
}

impl PartialEq for GroupKey {
    fn eq(&self, other: &Self) -> bool {
        self.canonical() == other.canonical()
    }
}

impl Eq for GroupKey {}

impl Hash for GroupKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.canonical().hash(state);
    }
}

impl Serialize for GroupKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            GroupKey::Null => serializer.serialize_unit(),
            GroupKey::Bool(b) => serializer.serialize_bool(*b),
            GroupKey::Integer(n) => wide_integer::serialize(n, serializer),
            GroupKey::Float(f) => serializer.serialize_f64(*f),
            GroupKey::Text(s) => serializer.serialize_str(s),
        }
    }
}

impl fmt::Display for GroupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GroupKey::Null => write!(f, "null"),
            GroupKey::Bool(b) => write!(f, "{}", b),
            GroupKey::Integer(n) => write!(f, "{}", n),
            GroupKey::Float(x) => write!(f, "{}", x),
            GroupKey::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<&str> for GroupKey {
    fn from(value: &str) -> Self {
        GroupKey::Text(value.to_string())
    }
}

impl From<i64> for GroupKey {
    fn from(value: i64) -> Self {
        GroupKey::Integer(i128::from(value))
    }
}

/// Serde adapter for integers that may exceed `i64` (up to `u64::MAX`).
mod wide_integer {
    use super::FieldValue;
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &i128, serializer: S) -> Result<S::Ok, S::Error> {
        if let Ok(n) = i64::try_from(*value) {
            serializer.serialize_i64(n)
        } else if let Ok(n) = u64::try_from(*value) {
            serializer.serialize_u64(n)
        } else {
            serializer.serialize_i128(*value)
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i128, D::Error> {
        match FieldValue::deserialize(deserializer)? {
            FieldValue::Integer(n) => Ok(i128::from(n)),
            FieldValue::Unsigned(n) => Ok(i128::from(n)),
            other => Err(D::Error::custom(format!(
                "expected an integer, found {}",
                other.kind()
            ))),
        }
    }
}

// A present key always deserializes to `Some`, even when its value is null.
fn present<'de, D>(deserializer: D) -> std::result::Result<Option<FieldValue>, D::Error>
where
    D: Deserializer<'de>,
{
    FieldValue::deserialize(deserializer).map(Some)
}

/// A raw support ticket as it arrives from the caller.
///
/// `None` means the key is absent; `Some(FieldValue::Null)` means the key is
/// present with a null value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TicketRecord {
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub category: Option<FieldValue>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub resolution_minutes: Option<FieldValue>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<FieldValue>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub escalated: Option<FieldValue>,
    #[serde(flatten)]
    pub extra: IndexMap<String, FieldValue>,
}

impl TicketRecord {
    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        match key {
            CATEGORY => self.category.as_ref(),
            RESOLUTION_MINUTES => self.resolution_minutes.as_ref(),
            CUSTOMER_ID => self.customer_id.as_ref(),
            ESCALATED => self.escalated.as_ref(),
            other => self.extra.get(other),
        }
    }

    pub fn has_field(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn with_category(mut self, value: impl Into<FieldValue>) -> Self {
        self.category = Some(value.into());
        self
    }

    pub fn with_resolution_minutes(mut self, value: impl Into<FieldValue>) -> Self {
        self.resolution_minutes = Some(value.into());
        self
    }

    pub fn with_customer_id(mut self, value: impl Into<FieldValue>) -> Self {
        self.customer_id = Some(value.into());
        self
    }

    pub fn with_escalated(mut self, value: impl Into<FieldValue>) -> Self {
        self.escalated = Some(value.into());
        self
    }
}

/// A ticket after cleaning: `resolution_minutes` is always an integer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CleanTicket {
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub category: Option<FieldValue>,
    #[serde(with = "wide_integer")]
    pub resolution_minutes: i128,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<FieldValue>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub escalated: Option<FieldValue>,
    #[serde(flatten)]
    pub extra: IndexMap<String, FieldValue>,
}
