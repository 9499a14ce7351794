//! Template domain model.
//!
//! Contains the static schema that parameterizes the generic document
//! state model: scalar field names with default values, plus the shape
//! and built-in starting rows of each dynamic collection.

use serde::{Deserialize, Serialize};

/// One scalar field of a template: a name and its default value.
///
/// Also used inside [`CollectionSchema`] to describe one sub-field of a
/// collection record, where `default` is the value a freshly added
/// record starts with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldSpec {
    /// Field name as it appears in the persisted JSON (e.g. `"title"`).
    pub name: String,
    /// Default value used when no saved document overrides it.
    pub default: String,
}

impl FieldSpec {
    /// Creates a new field spec.
    pub fn new(name: impl Into<String>, default: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            default: default.into(),
        }
    }
}

/// The shape of one named dynamic collection within a template.
///
/// `subfields` fixes the record shape (an ordered set of named scalar
/// sub-fields); `default_rows` holds the template's built-in starting
/// records as rows of values in sub-field order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionSchema {
    /// Collection name as it appears in the persisted JSON
    /// (e.g. `"requirements"`).
    pub name: String,
    /// Ordered sub-field specs; `default` is the value used by `add`.
    pub subfields: Vec<FieldSpec>,
    /// Built-in starting records, one row of values per record,
    /// in sub-field order. Rows shorter than `subfields` are padded
    /// with the sub-field defaults.
    pub default_rows: Vec<Vec<String>>,
}

impl CollectionSchema {
    /// Creates an empty collection schema with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            subfields: Vec::new(),
            default_rows: Vec::new(),
        }
    }

    /// Adds a sub-field to the record shape (builder style).
    pub fn subfield(mut self, name: impl Into<String>, default: impl Into<String>) -> Self {
        self.subfields.push(FieldSpec::new(name, default));
        self
    }

    /// Adds one built-in starting record as a row of values in
    /// sub-field order (builder style).
    pub fn row<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.default_rows
            .push(values.into_iter().map(Into::into).collect());
        self
    }
}

/// The static definition of one document type (one "screen" of the
/// original application), e.g. `"job-offer"`.
///
/// Field and collection order is authoring order and is preserved all
/// the way into the persisted JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateDefinition {
    /// Template identifier, persisted as the document `type`.
    pub id: String,
    /// Human-readable template name.
    pub name: String,
    /// Ordered scalar field specs.
    pub fields: Vec<FieldSpec>,
    /// Ordered collection schemas.
    pub collections: Vec<CollectionSchema>,
}

impl TemplateDefinition {
    /// Creates an empty template definition.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            fields: Vec::new(),
            collections: Vec::new(),
        }
    }

    /// Adds a scalar field (builder style).
    pub fn field(mut self, name: impl Into<String>, default: impl Into<String>) -> Self {
        self.fields.push(FieldSpec::new(name, default));
        self
    }

    /// Adds a collection schema (builder style).
    pub fn collection(mut self, schema: CollectionSchema) -> Self {
        self.collections.push(schema);
        self
    }

    /// Looks up a collection schema by name.
    pub fn collection_schema(&self, name: &str) -> Option<&CollectionSchema> {
        self.collections.iter().find(|c| c.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_preserves_order() {
        let template = TemplateDefinition::new("memo", "Memo")
            .field("title", "Untitled memo")
            .field("body", "")
            .collection(
                CollectionSchema::new("topics")
                    .subfield("text", "")
                    .row(["agenda"])
                    .row(["minutes"]),
            );

        let names: Vec<&str> = template.fields.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["title", "body"]);
        assert_eq!(template.collections.len(), 1);
        assert_eq!(template.collections[0].default_rows.len(), 2);
        assert!(template.collection_schema("topics").is_some());
        assert!(template.collection_schema("missing").is_none());
    }
}
