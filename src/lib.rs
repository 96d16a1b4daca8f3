pub mod api;
pub mod assist;
pub mod commands;
pub mod dashboard;
pub mod editor;
pub mod onboarding;
pub mod pagination;
pub mod sanitize;
pub mod search;
pub mod session;
pub mod tags;
pub mod types;

use std::sync::Arc;

use tauri::Manager;
use tokio::sync::Mutex;

use crate::api::NotesApi;
use crate::assist::TextAssist;
use crate::dashboard::DashboardState;
use crate::editor::EditorSession;
use crate::session::SessionStore;

/// All runtime state shared across Tauri commands.
pub struct AppState {
    /// Bearer credential + first-login flag, file-backed. Injected here
    /// rather than read from a global so tests can point it at a temp dir.
    pub session: SessionStore,
    /// Note-service client. Arc so it can be cloned out of the mutex and
    /// used lock-free while a request is on the wire.
    pub api: Arc<NotesApi>,
    /// AI summarize/tag client, same sharing scheme.
    pub assist: Arc<TextAssist>,
    /// Dashboard view state: query, page, onboarding overlay, debouncer.
    pub dashboard: DashboardState,
    /// The open editor session, if the add/edit screen is up.
    pub editor: Option<EditorSession>,
}

impl AppState {
    pub fn new(session: SessionStore, api: Arc<NotesApi>, assist: Arc<TextAssist>) -> Self {
        Self {
            session,
            api,
            assist,
            dashboard: DashboardState::default(),
            editor: None,
        }
    }
}

/// Type alias used in Tauri command signatures and background tasks.
pub type AppMutex = Mutex<AppState>;

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    // Only log WARN and above in production to avoid leaking note content
    #[cfg(debug_assertions)]
    tracing_subscriber::fmt::init();
    #[cfg(not(debug_assertions))]
    tracing_subscriber::fmt().with_max_level(tracing::Level::WARN).init();
    tauri::Builder::default()
        .plugin(tauri_plugin_dialog::init())
        .setup(|app| {
            let data_dir = app
                .path()
                .app_data_dir()
                .unwrap_or_else(|_| std::path::PathBuf::from("."))
                .join("notecraft");
            let state = AppState::new(
                SessionStore::load(&data_dir),
                Arc::new(NotesApi::from_env()),
                Arc::new(TextAssist::new()),
            );
            app.manage(AppMutex::new(state));
            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            commands::sign_up,
            commands::log_in,
            commands::log_out,
            commands::open_dashboard,
            commands::set_search_query,
            commands::set_page,
            commands::delete_note,
            commands::advance_onboarding,
            commands::open_editor,
            commands::set_note_title,
            commands::set_note_content,
            commands::set_tag_input,
            commands::commit_tag,
            commands::remove_tag,
            commands::summarize_note,
            commands::save_note,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
