use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Bookkeeping members every entity carries; schemas may not declare them.
pub const RESERVED_FIELDS: [&str; 3] = ["_id", "_creationDate", "_updatingDate"];

pub fn is_reserved(field: &str) -> bool {
    RESERVED_FIELDS.contains(&field)
}

// Remote documents are taken as they come: a missing or non-numeric date reads
// as 0 (creation) or null (update), fractional milliseconds are truncated.
fn millis(value: &Value) -> Option<i64> {
    value
        .as_i64()
        .or_else(|| value.as_f64().map(|f| f as i64))
}

fn lenient_millis<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
    Ok(millis(&Value::deserialize(deserializer)?).unwrap_or(0))
}

fn lenient_optional_millis<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<i64>, D::Error> {
    Ok(millis(&Value::deserialize(deserializer)?))
}

/// One constructed (or fetched) document of a model.
///
/// Serializes flat: the bookkeeping members `_id`, `_creationDate` and
/// `_updatingDate` sit next to the schema fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    #[serde(rename = "_id", default)]
    id: String,

    #[serde(rename = "_creationDate", default, deserialize_with = "lenient_millis")]
    creation_date: i64,

    // Only ever set by the caller or by documents coming back from the remote side.
    #[serde(
        rename = "_updatingDate",
        default,
        deserialize_with = "lenient_optional_millis"
    )]
    updating_date: Option<i64>,

    #[serde(flatten)]
    fields: Map<String, Value>,
}

impl Entity {
    pub(crate) fn new(id: String, creation_date: i64, fields: Map<String, Value>) -> Self {
        Self {
            id,
            creation_date,
            updating_date: None,
            fields,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Epoch milliseconds.
    pub fn creation_date(&self) -> i64 {
        self.creation_date
    }

    pub fn updating_date(&self) -> Option<i64> {
        self.updating_date
    }

    pub fn set_updating_date(&mut self, date: Option<i64>) {
        self.updating_date = date;
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// Assigns a field directly, returning the previous value. No schema check is made.
    pub fn set(&mut self, field: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.fields.insert(field.into(), value.into())
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    pub fn into_fields(self) -> Map<String, Value> {
        self.fields
    }
}
