//! Docmint core: the generic document-template state model.
//!
//! One parameterized implementation replaces the ~20 near-identical
//! document screens of the original application: a [`template`]
//! definition describes a screen's scalar fields and dynamic
//! collections, the [`document`] module holds the editable state, and
//! the [`controller`] owns the load/merge/persist/share protocol
//! against the injected [`store`] and [`export`] boundaries.

pub mod controller;
pub mod document;
pub mod error;
pub mod export;
pub mod store;
pub mod template;

// Re-export common error type
pub use error::{DocmintError, Result};

pub use controller::{DocumentController, Notice, ViewMode};
pub use document::{CollectionEditor, Document, FieldStore, Record, SavedDocument};
pub use export::{PdfExporter, PdfPayload};
pub use store::{DOCUMENTS_KEY, KeyValueStore};
pub use template::{CollectionSchema, FieldSpec, TemplateDefinition};
