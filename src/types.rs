use serde::{Deserialize, Serialize};

/// A note as the backend returns it. The service is a MongoDB-style API:
/// the id field is `_id` and the creation timestamp is an ISO string.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Note {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    /// Rich-text HTML as authored. Unsanitized — never hand this to the
    /// webview directly; go through [`crate::sanitize::clean_html`].
    pub content: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(rename = "createdAt", default)]
    pub created_at: String,
}

/// Body sent on create (POST) and update (PUT).
#[derive(Debug, Clone, Serialize)]
pub struct NoteDraft {
    pub title: String,
    pub content: String,
    pub summary: String,
    pub tags: Vec<String>,
}

/// Wire shape of `GET /api/notes/search`.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    pub notes: Vec<Note>,
    #[serde(rename = "totalPages", default)]
    pub total_pages: Option<u32>,
}

/// One note prepared for display: content already sanitized, summary
/// normalized to `None` when the backend sent an empty string so the
/// frontend can suppress the summary panel.
#[derive(Debug, Clone, Serialize)]
pub struct NoteCard {
    pub id: String,
    pub title: String,
    pub html: String,
    pub summary: Option<String>,
    pub created_at: String,
}

/// A rendered dashboard page: cards plus the pagination window.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardPage {
    pub notes: Vec<NoteCard>,
    pub page: u32,
    pub total_pages: u32,
    pub window: crate::pagination::PageWindow,
}

/// What the frontend should show when the dashboard opens.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DashboardGate {
    /// No credential — go to the login screen instead of fetching.
    Login,
    /// First login — show the onboarding overlay instead of the note list.
    Onboarding { step: crate::onboarding::StepView },
    /// Normal path: page 1 of notes.
    Notes { page: DashboardPage },
    /// Nothing to render: the fetch was superseded by a newer one, or the
    /// user cancelled. Keep showing what is on screen.
    Unchanged,
}

/// Editor state as exposed to the frontend after every mutating command.
#[derive(Debug, Clone, Serialize)]
pub struct EditorSnapshot {
    pub note_id: Option<String>,
    pub title: String,
    pub content: String,
    pub summary: Option<String>,
    pub tags: Vec<String>,
    pub tag_input: String,
    pub is_summarizing: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn note_parses_backend_field_names() {
        let raw = r#"{
            "_id": "665f1c2ab8d3a21f5c1e9a01",
            "title": "Groceries",
            "content": "<p>milk</p>",
            "createdAt": "2026-07-01T09:30:00.000Z",
            "summary": "",
            "tags": ["home"]
        }"#;
        let note: Note = serde_json::from_str(raw).unwrap();
        assert_eq!(note.id, "665f1c2ab8d3a21f5c1e9a01");
        assert_eq!(note.created_at, "2026-07-01T09:30:00.000Z");
        assert_eq!(note.tags, vec!["home"]);
    }

    #[test]
    fn note_tolerates_missing_optional_fields() {
        let raw = r#"{"_id": "a", "title": "t", "content": "<p>c</p>"}"#;
        let note: Note = serde_json::from_str(raw).unwrap();
        assert!(note.summary.is_empty());
        assert!(note.tags.is_empty());
        assert!(note.created_at.is_empty());
    }

    #[test]
    fn search_response_total_pages_is_optional() {
        let raw = r#"{"notes": []}"#;
        let res: SearchResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(res.total_pages, None);
    }
}
