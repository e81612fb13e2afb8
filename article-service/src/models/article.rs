use mongodb::bson::{oid::ObjectId, Bson, Document};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// List view of a stored document: its identifier and name only.
///
/// Read from BSON as `_id`/`name`, written to JSON as `id`/`name` with the
/// identifier rendered as a 24-character hex string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    #[serde(
        rename(serialize = "id", deserialize = "_id"),
        serialize_with = "mongodb::bson::serde_helpers::serialize_object_id_as_hex_string"
    )]
    pub id: ObjectId,
    #[serde(default)]
    pub name: String,
}

/// Converts a raw document to JSON.
///
/// Relaxed extended JSON, except object ids become plain hex strings and
/// datetimes become RFC 3339 strings. Keys are emitted in sorted order at
/// every level, whatever order they were stored in.
pub fn document_to_json(document: Document) -> Value {
    bson_to_json(Bson::Document(document))
}

fn bson_to_json(value: Bson) -> Value {
    match value {
        Bson::ObjectId(oid) => Value::String(oid.to_hex()),
        Bson::DateTime(dt) => match dt.try_to_rfc3339_string() {
            Ok(s) => Value::String(s),
            Err(_) => Bson::DateTime(dt).into_relaxed_extjson(),
        },
        Bson::Document(doc) => {
            let mut fields: Vec<(String, Bson)> = doc.into_iter().collect();
            fields.sort_by(|a, b| a.0.cmp(&b.0));
            Value::Object(
                fields
                    .into_iter()
                    .map(|(key, value)| (key, bson_to_json(value)))
                    .collect(),
            )
        }
        Bson::Array(items) => Value::Array(items.into_iter().map(bson_to_json).collect()),
        other => other.into_relaxed_extjson(),
    }
}
