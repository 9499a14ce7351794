//! Template definitions: the static, data-driven schema of one document type.
//!
//! A template describes the scalar fields and dynamic collections of a
//! document screen. All screens share one generic implementation that is
//! parameterized by a [`TemplateDefinition`].

pub mod model;
pub mod preset;

pub use model::{CollectionSchema, FieldSpec, TemplateDefinition};
