use crate::tags::TagSet;
use crate::types::{EditorSnapshot, Note, NoteDraft};
use crate::AppMutex;

/// What the editor is doing: creating a new note or updating an existing
/// one. The two screens share everything else, so one session type covers
/// both and the mode only decides seeding and the save verb.
#[derive(Debug, Clone)]
pub enum EditorMode {
    Create,
    Edit { id: String },
}

/// State of the open note editor. Lives in `AppState` while the screen is
/// up and is dropped on navigation — nothing here outlives the view.
pub struct EditorSession {
    pub mode: EditorMode,
    pub title: String,
    pub content: String,
    /// Empty string means no summary yet; the panel stays hidden.
    pub summary: String,
    pub tags: TagSet,
    /// Pending tag text, committed on Enter.
    pub tag_input: String,
    /// True for the whole summarize chain (both calls). The frontend
    /// disables the Summarize button while set.
    pub is_summarizing: bool,
}

impl EditorSession {
    pub fn create() -> Self {
        Self {
            mode: EditorMode::Create,
            title: String::new(),
            content: String::new(),
            summary: String::new(),
            tags: TagSet::default(),
            tag_input: String::new(),
            is_summarizing: false,
        }
    }

    /// Seed every field from an existing note.
    pub fn edit(note: Note) -> Self {
        Self {
            mode: EditorMode::Edit { id: note.id },
            title: note.title,
            content: note.content,
            summary: note.summary,
            tags: TagSet::from_vec(note.tags),
            tag_input: String::new(),
            is_summarizing: false,
        }
    }

    /// The Enter gesture: commit the pending input as a tag if it is
    /// non-empty (after trimming) and not already present. The input is
    /// cleared whenever a commit was attempted; whitespace-only input is
    /// left alone.
    pub fn commit_tag(&mut self) {
        let pending = std::mem::take(&mut self.tag_input);
        if pending.trim().is_empty() {
            // nothing to commit; leave the field as the user typed it
            self.tag_input = pending;
            return;
        }
        self.tags.insert(&pending);
    }

    pub fn remove_tag(&mut self, index: usize) {
        self.tags.remove(index);
    }

    /// Client-side save validation. Checked before any request is built;
    /// a failure means no network traffic at all.
    pub fn validate(&self) -> Result<NoteDraft, &'static str> {
        if self.title.trim().is_empty() {
            return Err("Title is required");
        }
        if self.content.trim().is_empty() {
            return Err("Content cannot be empty");
        }
        Ok(NoteDraft {
            title: self.title.clone(),
            content: self.content.clone(),
            summary: self.summary.clone(),
            tags: self.tags.to_vec(),
        })
    }

    pub fn snapshot(&self) -> EditorSnapshot {
        EditorSnapshot {
            note_id: match &self.mode {
                EditorMode::Create => None,
                EditorMode::Edit { id } => Some(id.clone()),
            },
            title: self.title.clone(),
            content: self.content.clone(),
            summary: (!self.summary.is_empty()).then(|| self.summary.clone()),
            tags: self.tags.to_vec(),
            tag_input: self.tag_input.clone(),
            is_summarizing: self.is_summarizing,
        }
    }
}

/// Open the editor: a blank create session, or an edit session seeded from
/// the note loaded by id. Loading requires a credential; without one the
/// screen redirects instead of calling (the `"not_authenticated"` sentinel
/// is the redirect signal).
pub async fn open(state: &AppMutex, note_id: Option<String>) -> Result<EditorSnapshot, String> {
    let session = match note_id {
        None => EditorSession::create(),
        Some(id) => {
            let (api, token) = {
                let s = state.lock().await;
                let Some(token) = s.session.token() else {
                    return Err("not_authenticated".to_string());
                };
                (s.api.clone(), token)
            };
            let note = api
                .get_note(&token, &id)
                .await
                .map_err(|e| e.user_message("Failed to load note"))?;
            EditorSession::edit(note)
        }
    };
    let mut s = state.lock().await;
    let snapshot = session.snapshot();
    s.editor = Some(session);
    Ok(snapshot)
}

/// The Summarize action: condense the content, then generate tags from the
/// summary. Two chained remote calls behind one busy flag.
///
/// The summary is written into the session as soon as the first call
/// returns, before tags are requested. A tag-generation failure therefore
/// reports an overall error while the summary stays — the documented
/// behavior of this screen.
pub async fn summarize(state: &AppMutex) -> Result<EditorSnapshot, String> {
    let (assist, content) = {
        let mut s = state.lock().await;
        let Some(editor) = s.editor.as_mut() else {
            return Err("No note is open.".to_string());
        };
        if editor.is_summarizing {
            // Trigger is disabled while busy; a stray second invoke is a no-op.
            return Ok(editor.snapshot());
        }
        if editor.content.trim().is_empty() {
            return Err("Please enter some content first.".to_string());
        }
        editor.is_summarizing = true;
        let content = editor.content.clone();
        (s.assist.clone(), content)
    };

    let condensed = assist.condense(&content).await;

    // Store the summary the moment it exists, before the tag call.
    let summary = {
        let mut s = state.lock().await;
        let Some(editor) = s.editor.as_mut() else {
            return Err("No note is open.".to_string());
        };
        match condensed {
            Ok(summary) => {
                editor.summary = summary.clone();
                summary
            }
            Err(_) => {
                editor.is_summarizing = false;
                return Err("Failed to summarize and generate tags.".to_string());
            }
        }
    };

    let tags = assist.suggest_tags(&summary).await;

    let mut s = state.lock().await;
    let Some(editor) = s.editor.as_mut() else {
        return Err("No note is open.".to_string());
    };
    editor.is_summarizing = false;
    match tags {
        Ok(tags) => {
            editor.tags.merge(tags);
            Ok(editor.snapshot())
        }
        Err(_) => Err("Failed to summarize and generate tags.".to_string()),
    }
}

/// Save the note: POST for create, PUT for edit. Requires a credential and
/// passing validation, both checked before any request is sent. Success
/// drops the session; the frontend navigates back to the dashboard.
pub async fn save(state: &AppMutex) -> Result<(), String> {
    let (api, token, mode, draft) = {
        let s = state.lock().await;
        let Some(editor) = s.editor.as_ref() else {
            return Err("No note is open.".to_string());
        };
        let Some(token) = s.session.token() else {
            return Err("You must be logged in to save a note.".to_string());
        };
        let draft = editor.validate().map_err(str::to_string)?;
        (s.api.clone(), token, editor.mode.clone(), draft)
    };

    match &mode {
        EditorMode::Create => api
            .create_note(&token, &draft)
            .await
            .map_err(|e| e.user_message("Failed to create note"))?,
        EditorMode::Edit { id } => api
            .update_note(&token, id, &draft)
            .await
            .map_err(|e| e.user_message("Failed to update note"))?,
    }

    state.lock().await.editor = None;
    Ok(())
}
