//! End-to-end lifecycle tests: the document controller driving the
//! file-backed store through the full edit → save → reload flow.

use async_trait::async_trait;
use docmint_core::controller::{DocumentController, Notice};
use docmint_core::export::{PdfExporter, PdfPayload};
use docmint_core::store::{DOCUMENTS_KEY, KeyValueStore};
use docmint_core::template::preset;
use docmint_infrastructure::FileKeyValueStore;
use serde_json::Value;
use std::sync::Arc;

struct AcceptingExporter;

#[async_trait]
impl PdfExporter for AcceptingExporter {
    async fn share(&self, _payload: &PdfPayload) -> docmint_core::Result<()> {
        Ok(())
    }
}

fn open(
    template_id: &str,
    saved_param: Option<&str>,
    store: Arc<FileKeyValueStore>,
) -> DocumentController {
    DocumentController::open(
        preset::find(template_id).unwrap(),
        saved_param,
        store,
        Arc::new(AcceptingExporter),
    )
}

async fn stored_documents(store: &FileKeyValueStore) -> Vec<Value> {
    match store.get(DOCUMENTS_KEY).await.unwrap() {
        Some(raw) => serde_json::from_str(&raw).unwrap(),
        None => Vec::new(),
    }
}

#[tokio::test]
async fn test_edit_save_and_reload_through_file_store() {
    let dir = tempfile::tempdir().unwrap();
    let store = Arc::new(FileKeyValueStore::new(dir.path()).unwrap());

    let mut controller = open("job-offer", None, store.clone());
    controller.set_field("title", "Staff Engineer");
    let id = controller.add_record("requirements").unwrap();
    controller.update_record("requirements", id, "text", "Kernel experience");

    assert!(matches!(controller.save().await, Notice::DocumentSaved { .. }));

    let documents = stored_documents(&store).await;
    assert_eq!(documents.len(), 1);
    let saved = serde_json::to_string(&documents[0]).unwrap();

    // Reopen the screen with the stored document as navigation parameter.
    let reopened = open("job-offer", Some(&saved), store.clone());
    assert_eq!(reopened.field("title"), Some("Staff Engineer"));
    let requirements = reopened.collection("requirements").unwrap().records();
    assert_eq!(requirements.len(), 5);
    assert_eq!(requirements[4].get("text"), Some("Kernel experience"));
}

#[tokio::test]
async fn test_documents_from_different_templates_share_one_list() {
    let dir = tempfile::tempdir().unwrap();
    let store = Arc::new(FileKeyValueStore::new(dir.path()).unwrap());

    open("job-offer", None, store.clone()).save().await;
    open("newsletter", None, store.clone()).save().await;
    open("leave-request", None, store.clone()).save().await;

    let documents = stored_documents(&store).await;
    let types: Vec<&str> = documents
        .iter()
        .map(|d| d["type"].as_str().unwrap())
        .collect();
    assert_eq!(types, vec!["job-offer", "newsletter", "leave-request"]);
}

#[tokio::test]
async fn test_corrupted_store_file_starts_a_fresh_list() {
    let dir = tempfile::tempdir().unwrap();
    let store = Arc::new(FileKeyValueStore::new(dir.path()).unwrap());
    store.set(DOCUMENTS_KEY, "not json").await.unwrap();

    let notice = open("certificate", None, store.clone()).save().await;
    assert!(matches!(notice, Notice::DocumentSaved { .. }));
    assert_eq!(stored_documents(&store).await.len(), 1);
}
