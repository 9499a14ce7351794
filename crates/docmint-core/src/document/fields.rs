//! Field store: the scalar half of the document state model.

use super::model::SavedDocument;
use crate::template::FieldSpec;

/// Holds each scalar template field as an independently settable cell.
///
/// The key set is fixed by the template definition: cells are seeded
/// from the template defaults, individually overridden by a saved
/// document, and only their values change afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldStore {
    cells: Vec<(String, String)>,
}

impl FieldStore {
    /// Seeds the store from template defaults, overriding each field
    /// with the saved document's value when one is present and
    /// non-empty. This is a per-field merge: fields missing from the
    /// saved document keep their defaults.
    pub fn initialize(defaults: &[FieldSpec], saved: Option<&SavedDocument>) -> Self {
        let cells = defaults
            .iter()
            .map(|spec| {
                let value = saved
                    .and_then(|s| s.scalar(&spec.name))
                    .unwrap_or(&spec.default);
                (spec.name.clone(), value.to_string())
            })
            .collect();
        Self { cells }
    }

    /// Returns the current value of a field.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.cells
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Replaces the value of an existing field. Unknown names are a
    /// no-op: the key set never grows at runtime.
    pub fn set(&mut self, name: &str, value: impl Into<String>) {
        if let Some((_, slot)) = self.cells.iter_mut().find(|(n, _)| n == name) {
            *slot = value.into();
        }
    }

    /// Iterates (name, value) pairs in template order, used when
    /// assembling the persisted document.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.cells.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn specs() -> Vec<FieldSpec> {
        vec![
            FieldSpec::new("title", "Job Offer"),
            FieldSpec::new("company", "Acme Inc."),
            FieldSpec::new("salary", ""),
        ]
    }

    #[test]
    fn test_initialize_without_saved_uses_defaults() {
        let store = FieldStore::initialize(&specs(), None);
        assert_eq!(store.get("title"), Some("Job Offer"));
        assert_eq!(store.get("company"), Some("Acme Inc."));
        assert_eq!(store.get("salary"), Some(""));
    }

    #[test]
    fn test_initialize_merges_per_field() {
        let saved = SavedDocument::parse(r#"{"title": "Backend Engineer", "company": ""}"#)
            .unwrap();
        let store = FieldStore::initialize(&specs(), Some(&saved));
        assert_eq!(store.get("title"), Some("Backend Engineer"));
        // Empty override keeps the default.
        assert_eq!(store.get("company"), Some("Acme Inc."));
        assert_eq!(store.get("salary"), Some(""));
    }

    #[test]
    fn test_set_replaces_only_known_fields() {
        let mut store = FieldStore::initialize(&specs(), None);
        store.set("salary", "80k");
        store.set("bonus", "10k");
        assert_eq!(store.get("salary"), Some("80k"));
        assert_eq!(store.get("bonus"), None);
        assert_eq!(store.iter().count(), 3);
    }

    #[test]
    fn test_iter_preserves_template_order() {
        let store = FieldStore::initialize(&specs(), None);
        let names: Vec<&str> = store.iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["title", "company", "salary"]);
    }
}
