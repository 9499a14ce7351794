//! PDF export boundary trait and payload assembly.
//!
//! PDF rasterization and the native share sheet live outside this
//! crate; the lifecycle hands a [`PdfPayload`] to a [`PdfExporter`] and
//! only observes resolve/reject.

use crate::document::Document;
use crate::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt::Write;

/// The record handed to the export collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PdfPayload {
    /// Document title shown in the PDF header.
    pub title: String,
    /// Author tag stamped into the PDF metadata.
    pub author: String,
    /// Human-readable export date.
    pub date: String,
    /// HTML fragment with the full document contents.
    pub content: String,
}

/// An abstract export collaborator that turns a payload into a
/// shareable PDF.
///
/// Failure reasons are opaque to the caller; the lifecycle only maps
/// resolve/reject onto user notifications.
#[async_trait]
pub trait PdfExporter: Send + Sync {
    /// Renders and shares the payload.
    ///
    /// # Returns
    ///
    /// - `Ok(())`: The PDF was generated and handed to the share sheet
    /// - `Err(_)`: Generation or sharing failed
    async fn share(&self, payload: &PdfPayload) -> Result<()>;
}

/// Renders the full document as an HTML fragment: title, metadata,
/// every scalar field and every collection. This deliberately embeds
/// the whole document rather than only title/date.
pub fn render_document_html(document: &Document) -> String {
    let mut html = String::new();
    let title = document
        .fields
        .iter()
        .find(|(name, _)| name == "title")
        .map(|(_, value)| value.as_str())
        .unwrap_or(&document.doc_type);

    let _ = write!(html, "<article class=\"document\">");
    let _ = write!(html, "<h1>{}</h1>", escape_html(title));
    let _ = write!(
        html,
        "<p class=\"meta\">{} &middot; {}</p>",
        escape_html(&document.doc_type),
        escape_html(&document.created_at)
    );

    html.push_str("<dl>");
    for (name, value) in &document.fields {
        if name == "title" {
            continue;
        }
        let _ = write!(
            html,
            "<dt>{}</dt><dd>{}</dd>",
            escape_html(name),
            escape_html(value)
        );
    }
    html.push_str("</dl>");

    for (name, records) in &document.collections {
        let _ = write!(html, "<h2>{}</h2><ul>", escape_html(name));
        for record in records {
            let row: Vec<String> = record
                .fields
                .iter()
                .filter(|(_, v)| !v.is_empty())
                .map(|(_, v)| escape_html(v))
                .collect();
            let _ = write!(html, "<li>{}</li>", row.join(" · "));
        }
        html.push_str("</ul>");
    }

    html.push_str("</article>");
    html
}

/// Minimal HTML escaping for text interpolated into the payload.
fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::Record;

    fn sample() -> Document {
        Document {
            id: "1700000000000".to_string(),
            doc_type: "job-offer".to_string(),
            fields: vec![
                ("title".to_string(), "Engineer <Rust>".to_string()),
                ("company".to_string(), "Acme & Co".to_string()),
            ],
            collections: vec![(
                "requirements".to_string(),
                vec![Record::new(1, [("icon", "check"), ("text", "Rust")])],
            )],
            created_at: "2024-01-01T00:00:00+00:00".to_string(),
            updated_at: "2024-01-01T00:00:00+00:00".to_string(),
        }
    }

    #[test]
    fn test_html_embeds_full_document() {
        let html = render_document_html(&sample());
        assert!(html.contains("<h1>Engineer &lt;Rust&gt;</h1>"));
        assert!(html.contains("Acme &amp; Co"));
        assert!(html.contains("<h2>requirements</h2>"));
        assert!(html.contains("Rust"));
    }

    #[test]
    fn test_html_rows_follow_schema_order() {
        let mut doc = sample();
        doc.collections = vec![(
            "actionItems".to_string(),
            vec![Record::new(1, [("owner", "Kim"), ("text", "Ship it"), ("due", "Friday")])],
        )];
        let html = render_document_html(&doc);
        assert!(html.contains("<li>Kim · Ship it · Friday</li>"), "got {}", html);
    }

    #[test]
    fn test_html_falls_back_to_type_without_title() {
        let mut doc = sample();
        doc.fields.remove(0);
        let html = render_document_html(&doc);
        assert!(html.contains("<h1>job-offer</h1>"));
    }
}
