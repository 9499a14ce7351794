//! Document domain model.
//!
//! Contains the persisted entities of the document state model: the
//! [`Record`] (one element of a dynamic collection), the stamped
//! [`Document`] as it is appended to the local store, and the tolerant
//! [`SavedDocument`] reader used by the load/merge protocol.

use crate::error::{DocmintError, Result};
use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value, json};
use std::fmt;
use std::sync::atomic::{AtomicI64, Ordering};

/// One element of a dynamic collection.
///
/// The `id` is unique within its collection and assigned at creation;
/// the remaining sub-fields are flattened into the same JSON object:
/// `{ "id": 3, "icon": "check", "text": "..." }`. Sub-fields keep
/// their schema (insertion) order, in memory and in the persisted
/// JSON.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// Collection-local identifier, never reused within a session.
    pub id: u64,
    /// Named scalar sub-fields in schema order, fixed per collection
    /// schema.
    pub fields: Vec<(String, String)>,
}

impl Record {
    /// Creates a record from an id and (name, value) pairs.
    pub fn new<I, K, V>(id: u64, fields: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            id,
            fields: fields
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Returns the value of a sub-field, if the record has it.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Replaces the value of an existing sub-field.
    ///
    /// The sub-field set is fixed by the collection schema, so an
    /// unknown name is a no-op rather than an insert.
    pub fn set(&mut self, name: &str, value: impl Into<String>) {
        if let Some((_, slot)) = self.fields.iter_mut().find(|(n, _)| n == name) {
            *slot = value.into();
        }
    }

    /// Serializes the record into its flat JSON object, `id` first and
    /// sub-fields in schema order. Cannot fail: the shape is ids and
    /// strings only.
    pub fn to_value(&self) -> Value {
        let mut map = Map::new();
        map.insert("id".to_string(), json!(self.id));
        for (name, value) in &self.fields {
            map.insert(name.clone(), json!(value));
        }
        Value::Object(map)
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len() + 1))?;
        map.serialize_entry("id", &self.id)?;
        for (name, value) in &self.fields {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Record {
    fn deserialize<D: Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<Self, D::Error> {
        struct RecordVisitor;

        impl<'de> Visitor<'de> for RecordVisitor {
            type Value = Record;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a record object with a numeric id and string sub-fields")
            }

            fn visit_map<A: MapAccess<'de>>(
                self,
                mut access: A,
            ) -> std::result::Result<Record, A::Error> {
                let mut id: Option<u64> = None;
                let mut fields: Vec<(String, String)> = Vec::new();
                while let Some(key) = access.next_key::<String>()? {
                    if key == "id" {
                        if id.is_some() {
                            return Err(de::Error::duplicate_field("id"));
                        }
                        id = Some(access.next_value()?);
                    } else {
                        fields.push((key, access.next_value()?));
                    }
                }
                let id = id.ok_or_else(|| de::Error::missing_field("id"))?;
                Ok(Record { id, fields })
            }
        }

        deserializer.deserialize_map(RecordVisitor)
    }
}

/// A stamped document as it is appended to the local store.
///
/// Scalar fields and collections are flattened next to the metadata,
/// matching the persisted shape:
///
/// ```json
/// { "id": "1700000000000", "type": "job-offer",
///   "title": "...", "requirements": [ { "id": 1, ... } ],
///   "createdAt": "...", "updatedAt": "..." }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    /// Creation-timestamp-derived unique identifier.
    pub id: String,
    /// Template identifier, e.g. `"job-offer"`.
    pub doc_type: String,
    /// Scalar fields in template order.
    pub fields: Vec<(String, String)>,
    /// Collections in template order.
    pub collections: Vec<(String, Vec<Record>)>,
    /// ISO-8601 creation timestamp.
    pub created_at: String,
    /// ISO-8601 update timestamp, equal to `created_at` at creation.
    pub updated_at: String,
}

impl Document {
    /// Serializes the document into its flat persisted JSON object.
    pub fn to_value(&self) -> Value {
        let mut map = Map::new();
        map.insert("id".to_string(), json!(self.id));
        map.insert("type".to_string(), json!(self.doc_type));
        for (name, value) in &self.fields {
            map.insert(name.clone(), json!(value));
        }
        for (name, records) in &self.collections {
            let rows: Vec<Value> = records.iter().map(Record::to_value).collect();
            map.insert(name.clone(), Value::Array(rows));
        }
        map.insert("createdAt".to_string(), json!(self.created_at));
        map.insert("updatedAt".to_string(), json!(self.updated_at));
        Value::Object(map)
    }

    /// Serializes the document to its persisted JSON string.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(&self.to_value()).map_err(Into::into)
    }
}

/// A tolerant reader over a previously saved document.
///
/// The saved-document parameter may be partial or malformed in places;
/// every accessor treats anything unexpected as "absent" so the merge
/// protocol falls back to template defaults without erroring.
#[derive(Debug, Clone)]
pub struct SavedDocument {
    map: Map<String, Value>,
}

impl SavedDocument {
    /// Parses a saved-document JSON string.
    ///
    /// Fails only if the string is not valid JSON or not a JSON object;
    /// partial or oddly typed contents are accepted and handled by the
    /// accessors.
    pub fn parse(raw: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(raw)?;
        match value {
            Value::Object(map) => Ok(Self { map }),
            other => Err(DocmintError::json(format!(
                "saved document must be a JSON object, got {}",
                type_name(&other)
            ))),
        }
    }

    /// Returns a scalar field override: present, a string, and non-empty.
    pub fn scalar(&self, name: &str) -> Option<&str> {
        match self.map.get(name) {
            Some(Value::String(s)) if !s.is_empty() => Some(s),
            _ => None,
        }
    }

    /// Returns a saved collection: present, an array of well-formed
    /// records, and non-empty. Anything else reads as absent.
    pub fn records(&self, name: &str) -> Option<Vec<Record>> {
        let value = self.map.get(name)?;
        if !value.is_array() {
            return None;
        }
        match serde_json::from_value::<Vec<Record>>(value.clone()) {
            Ok(records) if !records.is_empty() => Some(records),
            _ => None,
        }
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

static LAST_DOCUMENT_ID: AtomicI64 = AtomicI64::new(0);

/// Returns a fresh creation-timestamp-derived document id.
///
/// Ids are millisecond epoch strings with a monotonic in-process
/// tiebreak, so documents saved within the same millisecond still get
/// distinct ids.
pub fn next_document_id() -> String {
    let now = chrono::Utc::now().timestamp_millis();
    let previous = LAST_DOCUMENT_ID
        .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| {
            Some(last.max(now - 1) + 1)
        })
        .unwrap_or(now - 1);
    (previous.max(now - 1) + 1).to_string()
}

/// Returns the current time as an ISO-8601 string.
pub fn now_timestamp() -> String {
    chrono::Utc::now().to_rfc3339()
}
