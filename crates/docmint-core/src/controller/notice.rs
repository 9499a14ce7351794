//! User-facing notifications and the screen view mode.

use serde::{Deserialize, Serialize};

/// View mode of a document screen.
///
/// Purely a presentation switch: toggling never touches the field
/// store or collection contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewMode {
    /// The user is editing fields and collections (default on entry).
    Editing,
    /// Read-only rendering of the current in-memory state.
    Previewing,
}

impl ViewMode {
    /// Returns the other mode.
    pub fn toggled(self) -> Self {
        match self {
            ViewMode::Editing => ViewMode::Previewing,
            ViewMode::Previewing => ViewMode::Editing,
        }
    }
}

/// Notifications shown to the user by the document lifecycle.
///
/// Failures carry no cause on purpose: the lifecycle contains errors at
/// the save/share boundary and surfaces only a binary outcome, with
/// detail going to the log instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Notice {
    /// The document was appended to the local store.
    DocumentSaved { document_id: String },
    /// Saving failed; the in-memory document is untouched and the user
    /// may retry.
    SaveFailed,
    /// PDF generation started.
    GeneratingPdf,
    /// The PDF was generated and handed to the share sheet.
    PdfShared,
    /// PDF generation or sharing failed.
    ShareFailed,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggled_round_trips() {
        assert_eq!(ViewMode::Editing.toggled(), ViewMode::Previewing);
        assert_eq!(ViewMode::Editing.toggled().toggled(), ViewMode::Editing);
    }

    #[test]
    fn test_notice_serializes_tagged() {
        let notice = Notice::DocumentSaved {
            document_id: "1700000000000".to_string(),
        };
        let value = serde_json::to_value(&notice).unwrap();
        assert_eq!(value["type"], "document_saved");
        assert_eq!(value["document_id"], "1700000000000");
    }
}
