//! Record type listed by the table.

use serde::{Deserialize, Deserializer, Serialize};

/// One row of the `shipments` collection.
///
/// Only the displayed columns are kept; nested fields such as `cargo` or
/// `services` are skipped. Scalars are stored as display strings because the
/// backend is not consistent about quoting numbers (`"total": "1000"` and
/// `"total": 1000` both occur).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shipment {
    #[serde(default, deserialize_with = "scalar")]
    pub id: String,
    #[serde(default, deserialize_with = "scalar")]
    pub mode: String,
    #[serde(default, deserialize_with = "scalar")]
    pub name: String,
    #[serde(default, deserialize_with = "scalar")]
    pub origin: String,
    #[serde(default, deserialize_with = "scalar")]
    pub status: String,
    #[serde(default, deserialize_with = "scalar")]
    pub total: String,
    #[serde(rename = "type", default, deserialize_with = "scalar")]
    pub kind: String,
    #[serde(rename = "userId", default, deserialize_with = "scalar")]
    pub user_id: String,
}

fn scalar<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    use serde_json::Value;

    Ok(match Value::deserialize(deserializer)? {
        Value::Null => String::new(),
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        other => other.to_string(),
    })
}
