//! Document domain: the runtime state of one filled-in template.
//!
//! A document is a set of scalar field cells plus ordered, user-editable
//! collections of records. This module holds the pure state model; the
//! load/save/share protocol around it lives in [`crate::controller`].

pub mod collection;
pub mod fields;
pub mod model;

pub use collection::CollectionEditor;
pub use fields::FieldStore;
pub use model::{Document, Record, SavedDocument};
