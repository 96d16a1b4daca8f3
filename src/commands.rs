use std::sync::OnceLock;

use regex::Regex;
use tauri::{Emitter, Manager};
use tauri_plugin_dialog::{DialogExt, MessageDialogButtons};

use crate::dashboard::{self, Refresh};
use crate::editor::{self, EditorSession};
use crate::types::{DashboardGate, EditorSnapshot};
use crate::AppMutex;

// ─── Auth ──────────────────────────────────────────────────────────────────────

/// Same pattern the web signup form uses.
fn is_valid_email(email: &str) -> bool {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL
        .get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex"))
        .is_match(email)
}

/// Signup form checks, in screen order. All run before any request.
fn validate_signup(
    name: &str,
    email: &str,
    password: &str,
    confirm_password: &str,
) -> Result<(), String> {
    if name.trim().is_empty() {
        return Err("Name is required.".to_string());
    }
    if !is_valid_email(email) {
        return Err("Enter a valid email.".to_string());
    }
    if password.chars().count() < 6 {
        return Err("Password must be at least 6 characters.".to_string());
    }
    if password != confirm_password {
        return Err("Passwords do not match.".to_string());
    }
    Ok(())
}

/// Register a new account. On success the returned token is stored and the
/// first-login flag is set so the dashboard shows onboarding once.
#[tauri::command]
pub async fn sign_up(
    name: String,
    email: String,
    password: String,
    confirm_password: String,
    state: tauri::State<'_, AppMutex>,
) -> Result<(), String> {
    validate_signup(&name, &email, &password, &confirm_password)?;

    let api = state.lock().await.api.clone();
    let token = api
        .signup(&name, &email, &password)
        .await
        .map_err(|e| e.user_message("Signup failed"))?;

    let mut s = state.lock().await;
    s.session
        .set_token(token)
        .map_err(|_| "Failed to save session.".to_string())?;
    s.session
        .set_first_login(true)
        .map_err(|_| "Failed to save session.".to_string())?;
    Ok(())
}

/// Log in to an existing account and store the token.
#[tauri::command]
pub async fn log_in(
    email: String,
    password: String,
    state: tauri::State<'_, AppMutex>,
) -> Result<(), String> {
    let api = state.lock().await.api.clone();
    let token = api
        .login(&email, &password)
        .await
        .map_err(|e| e.user_message("Login failed"))?;

    state
        .lock()
        .await
        .session
        .set_token(token)
        .map_err(|_| "Failed to save session.".to_string())
}

/// Drop the credential. The frontend navigates to the login screen.
#[tauri::command]
pub async fn log_out(state: tauri::State<'_, AppMutex>) -> Result<(), String> {
    state
        .lock()
        .await
        .session
        .clear_token()
        .map_err(|_| "Failed to save session.".to_string())
}

// ─── Dashboard ─────────────────────────────────────────────────────────────────

/// Dashboard mount: login redirect, onboarding overlay, or page 1 of notes.
#[tauri::command]
pub async fn open_dashboard(state: tauri::State<'_, AppMutex>) -> Result<DashboardGate, String> {
    dashboard::open(state.inner()).await
}

/// Search input changed. The query is stored immediately (the input shows
/// it right away); the fetch goes through the debouncer and lands as a
/// `dashboard-page` event when it fires.
#[tauri::command]
pub async fn set_search_query(
    query: String,
    state: tauri::State<'_, AppMutex>,
    app: tauri::AppHandle,
) -> Result<(), String> {
    let mut s = state.lock().await;
    s.dashboard.query = query.clone();
    let app = app.clone();
    s.dashboard.debounce.call(async move {
        run_search(app, query).await;
    });
    Ok(())
}

/// A debounced search firing: fetch page 1 for the query and push the
/// outcome to the frontend as an event, since no command is awaiting it.
pub async fn run_search(app: tauri::AppHandle, query: String) {
    let state = app.state::<AppMutex>();
    match dashboard::refresh(state.inner(), query, 1).await {
        Ok(Refresh::Page(page)) => {
            let _ = app.emit("dashboard-page", &page);
        }
        Ok(Refresh::Login) => {
            let _ = app.emit("redirect-login", ());
        }
        Ok(Refresh::Superseded) => {}
        Err(message) => {
            let _ = app.emit("notify-error", &message);
        }
    }
}

/// Page button, Prev, or Next. Fetches immediately — no debounce.
#[tauri::command]
pub async fn set_page(
    page: u32,
    state: tauri::State<'_, AppMutex>,
) -> Result<DashboardGate, String> {
    let query = state.lock().await.dashboard.query.clone();
    match dashboard::refresh(state.inner(), query, page).await? {
        Refresh::Page(page) => Ok(DashboardGate::Notes { page }),
        Refresh::Login => Ok(DashboardGate::Login),
        Refresh::Superseded => Ok(DashboardGate::Unchanged),
    }
}

/// Delete a note after a native confirmation dialog, then re-fetch the
/// current page so the grid reflects the removal.
#[tauri::command]
pub async fn delete_note(
    id: String,
    state: tauri::State<'_, AppMutex>,
    app: tauri::AppHandle,
) -> Result<DashboardGate, String> {
    let (tx, rx) = tokio::sync::oneshot::channel();
    app.dialog()
        .message("Are you sure you want to delete this note?")
        .title("Delete note")
        .buttons(MessageDialogButtons::OkCancel)
        .show(move |confirmed| {
            let _ = tx.send(confirmed);
        });
    if !rx.await.unwrap_or(false) {
        return Ok(DashboardGate::Unchanged);
    }

    match dashboard::delete(state.inner(), id).await? {
        Refresh::Page(page) => Ok(DashboardGate::Notes { page }),
        Refresh::Login => Ok(DashboardGate::Login),
        Refresh::Superseded => Ok(DashboardGate::Unchanged),
    }
}

/// Next/Got-it button on the onboarding overlay.
#[tauri::command]
pub async fn advance_onboarding(
    state: tauri::State<'_, AppMutex>,
) -> Result<DashboardGate, String> {
    dashboard::advance_onboarding(state.inner()).await
}

// ─── Editor ────────────────────────────────────────────────────────────────────

/// Open the editor: blank for create, seeded from the note for edit.
#[tauri::command]
pub async fn open_editor(
    note_id: Option<String>,
    state: tauri::State<'_, AppMutex>,
) -> Result<EditorSnapshot, String> {
    editor::open(state.inner(), note_id).await
}

async fn with_editor<T>(
    state: &AppMutex,
    f: impl FnOnce(&mut EditorSession) -> T,
) -> Result<T, String> {
    let mut s = state.lock().await;
    let Some(editor) = s.editor.as_mut() else {
        return Err("No note is open.".to_string());
    };
    Ok(f(editor))
}

#[tauri::command]
pub async fn set_note_title(title: String, state: tauri::State<'_, AppMutex>) -> Result<(), String> {
    with_editor(state.inner(), |e| e.title = title).await
}

#[tauri::command]
pub async fn set_note_content(
    content: String,
    state: tauri::State<'_, AppMutex>,
) -> Result<(), String> {
    with_editor(state.inner(), |e| e.content = content).await
}

#[tauri::command]
pub async fn set_tag_input(value: String, state: tauri::State<'_, AppMutex>) -> Result<(), String> {
    with_editor(state.inner(), |e| e.tag_input = value).await
}

/// Enter in the tag field.
#[tauri::command]
pub async fn commit_tag(state: tauri::State<'_, AppMutex>) -> Result<EditorSnapshot, String> {
    with_editor(state.inner(), |e| {
        e.commit_tag();
        e.snapshot()
    })
    .await
}

/// The chip's close button.
#[tauri::command]
pub async fn remove_tag(
    index: usize,
    state: tauri::State<'_, AppMutex>,
) -> Result<EditorSnapshot, String> {
    with_editor(state.inner(), |e| {
        e.remove_tag(index);
        e.snapshot()
    })
    .await
}

/// The Summarize button: condense the content, then generate tags.
#[tauri::command]
pub async fn summarize_note(
    state: tauri::State<'_, AppMutex>,
) -> Result<EditorSnapshot, String> {
    editor::summarize(state.inner()).await
}

/// Create or update, depending on the editor mode. Success means the
/// frontend navigates back to the dashboard.
#[tauri::command]
pub async fn save_note(state: tauri::State<'_, AppMutex>) -> Result<(), String> {
    editor::save(state.inner()).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_a_plain_email() {
        assert!(is_valid_email("user@example.com"));
    }

    #[test]
    fn rejects_malformed_emails() {
        for email in ["", "plain", "a@b", "a b@c.d", "a@b c.d", "@x.y"] {
            assert!(!is_valid_email(email), "accepted {email:?}");
        }
    }

    #[test]
    fn signup_validation_runs_in_screen_order() {
        assert_eq!(
            validate_signup("", "bad", "x", "y").unwrap_err(),
            "Name is required."
        );
        assert_eq!(
            validate_signup("Ada", "bad", "x", "y").unwrap_err(),
            "Enter a valid email."
        );
        assert_eq!(
            validate_signup("Ada", "ada@example.com", "short", "short").unwrap_err(),
            "Password must be at least 6 characters."
        );
        assert_eq!(
            validate_signup("Ada", "ada@example.com", "secret1", "secret2").unwrap_err(),
            "Passwords do not match."
        );
        assert!(validate_signup("Ada", "ada@example.com", "secret1", "secret1").is_ok());
    }
}
