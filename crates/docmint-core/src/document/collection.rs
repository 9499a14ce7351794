//! Collection editor: one named, ordered, user-editable sequence of
//! records with stable per-record identity.

use super::model::{Record, SavedDocument};
use crate::template::CollectionSchema;

/// Manages one dynamic collection of a document.
///
/// Records keep insertion order; removal never renumbers survivors and
/// ids are never reused within an editing session. Id allocation uses a
/// watermark seeded to `max(initial ids) + 1` (1 for an empty
/// collection), so `add` behaves as `max + 1` while still refusing to
/// hand out an id that was ever live.
#[derive(Debug, Clone, PartialEq)]
pub struct CollectionEditor {
    name: String,
    record_template: Vec<(String, String)>,
    records: Vec<Record>,
    next_id: u64,
}

impl CollectionEditor {
    /// Seeds the collection from its schema, replaced wholesale by the
    /// saved document's records when present and non-empty. Unlike the
    /// field store this is whole-collection replacement, never an
    /// element-by-element merge.
    pub fn initialize(schema: &CollectionSchema, saved: Option<&SavedDocument>) -> Self {
        let records = saved
            .and_then(|s| s.records(&schema.name))
            .unwrap_or_else(|| default_records(schema));
        // Saved ids are caller-supplied; saturate so a u64::MAX id
        // cannot overflow the watermark.
        let next_id = records
            .iter()
            .map(|r| r.id)
            .max()
            .unwrap_or(0)
            .saturating_add(1);
        Self {
            name: schema.name.clone(),
            record_template: schema
                .subfields
                .iter()
                .map(|f| (f.name.clone(), f.default.clone()))
                .collect(),
            records,
            next_id,
        }
    }

    /// The collection name, e.g. `"requirements"`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The current records, in insertion order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Appends a new record seeded with the schema's sub-field defaults
    /// and returns its id.
    pub fn add(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id = self.next_id.saturating_add(1);
        self.records
            .push(Record::new(id, self.record_template.iter().cloned()));
        id
    }

    /// Replaces exactly one sub-field of the record with the given id.
    /// A missing id or unknown sub-field changes nothing.
    pub fn update(&mut self, id: u64, subfield: &str, value: impl Into<String>) {
        if let Some(record) = self.records.iter_mut().find(|r| r.id == id) {
            record.set(subfield, value);
        }
    }

    /// Removes the record with the given id, keeping the order of the
    /// survivors. A missing id changes nothing.
    pub fn remove(&mut self, id: u64) {
        self.records.retain(|r| r.id != id);
    }
}

/// Builds the schema's built-in starting records, ids 1..=n.
fn default_records(schema: &CollectionSchema) -> Vec<Record> {
    schema
        .default_rows
        .iter()
        .enumerate()
        .map(|(index, row)| {
            let fields = schema.subfields.iter().enumerate().map(|(i, spec)| {
                let value = row.get(i).unwrap_or(&spec.default);
                (spec.name.clone(), value.clone())
            });
            Record::new(index as u64 + 1, fields)
        })
        .collect()
}
