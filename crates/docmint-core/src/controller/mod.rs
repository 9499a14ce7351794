//! Document lifecycle controller.
//!
//! Ties the field store and collection editors to the external
//! persistence and export boundary, and owns the load/save/share
//! protocol of one document screen.

pub mod notice;


pub use notice::{Notice, ViewMode};

use crate::document::model::{next_document_id, now_timestamp};
use crate::document::{CollectionEditor, Document, FieldStore, SavedDocument};
use crate::error::Result;
use crate::export::{PdfExporter, PdfPayload, render_document_html};
use crate::store::{DOCUMENTS_KEY, KeyValueStore};
use crate::template::TemplateDefinition;
use serde_json::Value;
use std::sync::Arc;
use tokio::sync::broadcast;
use tracing::{debug, error, warn};

/// Author tag stamped into exported PDF metadata.
const PDF_AUTHOR: &str = "Docmint";

/// Capacity of the notice broadcast channel.
const NOTICE_CHANNEL_CAPACITY: usize = 16;

/// Orchestrates one document screen: initial defaults, merge of an
/// incoming saved document, in-memory edits, append-only persistence
/// and the PDF handoff.
///
/// The local store and the exporter are injected explicitly so the
/// controller is testable without real collaborators. Save performs a
/// read-then-write on the shared documents key without locking; one
/// live controller per store is the supported model.
pub struct DocumentController {
    template: TemplateDefinition,
    fields: FieldStore,
    collections: Vec<CollectionEditor>,
    mode: ViewMode,
    store: Arc<dyn KeyValueStore>,
    exporter: Arc<dyn PdfExporter>,
    notices: broadcast::Sender<Notice>,
}

impl DocumentController {
    /// Opens a document screen: seeds state from the template defaults,
    /// merged with the saved-document navigation parameter when one is
    /// present.
    ///
    /// A malformed parameter is logged and treated as absent; opening
    /// never fails.
    pub fn open(
        template: TemplateDefinition,
        saved_param: Option<&str>,
        store: Arc<dyn KeyValueStore>,
        exporter: Arc<dyn PdfExporter>,
    ) -> Self {
        let saved = saved_param.and_then(|raw| match SavedDocument::parse(raw) {
            Ok(saved) => Some(saved),
            Err(e) => {
                warn!(
                    template = %template.id,
                    error = %e,
                    "malformed saved-document parameter, falling back to template defaults"
                );
                None
            }
        });

        let fields = FieldStore::initialize(&template.fields, saved.as_ref());
        let collections = template
            .collections
            .iter()
            .map(|schema| CollectionEditor::initialize(schema, saved.as_ref()))
            .collect();
        let (notices, _) = broadcast::channel(NOTICE_CHANNEL_CAPACITY);

        Self {
            template,
            fields,
            collections,
            mode: ViewMode::Editing,
            store,
            exporter,
            notices,
        }
    }

    /// The template this screen was opened with.
    pub fn template(&self) -> &TemplateDefinition {
        &self.template
    }

    /// Current view mode.
    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    /// Switches between editing and preview. Contents are untouched.
    pub fn toggle_preview(&mut self) {
        self.mode = self.mode.toggled();
    }

    /// Subscribes to user-facing notices emitted by save/share.
    pub fn subscribe(&self) -> broadcast::Receiver<Notice> {
        self.notices.subscribe()
    }

    /// Returns the current value of a scalar field.
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name)
    }

    /// Sets a scalar field. Unknown names are a no-op.
    pub fn set_field(&mut self, name: &str, value: impl Into<String>) {
        self.fields.set(name, value);
    }

    /// Returns a collection editor by name.
    pub fn collection(&self, name: &str) -> Option<&CollectionEditor> {
        self.collections.iter().find(|c| c.name() == name)
    }

    /// Appends a fresh record to the named collection and returns its
    /// id, or `None` for an unknown collection.
    pub fn add_record(&mut self, collection: &str) -> Option<u64> {
        self.collection_mut(collection).map(CollectionEditor::add)
    }

    /// Replaces one sub-field of one record in the named collection.
    pub fn update_record(&mut self, collection: &str, id: u64, subfield: &str, value: &str) {
        if let Some(editor) = self.collection_mut(collection) {
            editor.update(id, subfield, value);
        }
    }

    /// Removes one record from the named collection.
    pub fn remove_record(&mut self, collection: &str, id: u64) {
        if let Some(editor) = self.collection_mut(collection) {
            editor.remove(id);
        }
    }

    /// Assembles the current in-memory state into a stamped document
    /// with a fresh id and creation timestamps.
    pub fn assemble_document(&self) -> Document {
        let now = now_timestamp();
        Document {
            id: next_document_id(),
            doc_type: self.template.id.clone(),
            fields: self
                .fields
                .iter()
                .map(|(n, v)| (n.to_string(), v.to_string()))
                .collect(),
            collections: self
                .collections
                .iter()
                .map(|c| (c.name().to_string(), c.records().to_vec()))
                .collect(),
            created_at: now.clone(),
            updated_at: now,
        }
    }

    /// Saves the current state by appending a freshly stamped document
    /// to the store's document list.
    ///
    /// Failures are contained here: they are logged and surfaced as
    /// [`Notice::SaveFailed`], the store is left as it was (no partial
    /// write) and the in-memory document is retained for a retry.
    pub async fn save(&self) -> Notice {
        let document = self.assemble_document();
        match self.append_to_store(&document).await {
            Ok(()) => {
                debug!(document_id = %document.id, template = %self.template.id, "document saved");
                self.emit(Notice::DocumentSaved {
                    document_id: document.id,
                })
            }
            Err(e) => {
                error!(template = %self.template.id, error = %e, "failed to save document");
                self.emit(Notice::SaveFailed)
            }
        }
    }

    /// Builds the PDF payload and hands it to the export collaborator,
    /// emitting the generating/terminal notice pair.
    pub async fn share(&self) -> Notice {
        let payload = self.pdf_payload();
        self.emit(Notice::GeneratingPdf);
        match self.exporter.share(&payload).await {
            Ok(()) => {
                debug!(template = %self.template.id, "pdf shared");
                self.emit(Notice::PdfShared)
            }
            Err(e) => {
                error!(template = %self.template.id, error = %e, "failed to share pdf");
                self.emit(Notice::ShareFailed)
            }
        }
    }

    /// Builds the export payload from the current state: the title
    /// field (template name when empty), the author tag, today's date
    /// and the full-document HTML fragment.
    pub fn pdf_payload(&self) -> PdfPayload {
        let document = self.assemble_document();
        let title = match self.fields.get("title") {
            Some(t) if !t.is_empty() => t.to_string(),
            _ => self.template.name.clone(),
        };
        PdfPayload {
            title,
            author: PDF_AUTHOR.to_string(),
            date: chrono::Utc::now().format("%Y-%m-%d").to_string(),
            content: render_document_html(&document),
        }
    }

    fn collection_mut(&mut self, name: &str) -> Option<&mut CollectionEditor> {
        self.collections.iter_mut().find(|c| c.name() == name)
    }

    /// Reads the existing document list (absent or unparsable reads as
    /// empty), appends, and writes the whole list back.
    async fn append_to_store(&self, document: &Document) -> Result<()> {
        let mut list = match self.store.get(DOCUMENTS_KEY).await? {
            Some(raw) => match serde_json::from_str::<Vec<Value>>(&raw) {
                Ok(list) => list,
                Err(e) => {
                    warn!(error = %e, "existing document list is unparsable, starting fresh");
                    Vec::new()
                }
            },
            None => Vec::new(),
        };
        list.push(document.to_value());
        let serialized = serde_json::to_string(&list)?;
        self.store.set(DOCUMENTS_KEY, &serialized).await
    }

    fn emit(&self, notice: Notice) -> Notice {
        // Nobody listening is fine; the notice is also the return value.
        let _ = self.notices.send(notice.clone());
        notice
    }
}
