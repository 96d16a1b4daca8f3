use crate::onboarding::Onboarding;
use crate::pagination::PageWindow;
use crate::sanitize::clean_html;
use crate::search::{Debouncer, SEARCH_DEBOUNCE};
use crate::types::{DashboardGate, DashboardPage, Note, NoteCard};
use crate::AppMutex;

/// Transient dashboard view state. Query and page live here between
/// commands; note cards themselves are never cached — every view renders
/// the most recent fetch and nothing else.
pub struct DashboardState {
    pub query: String,
    pub page: u32,
    pub total_pages: u32,
    /// Bumped at the start of every fetch. A response is applied only if
    /// no newer fetch started while it was on the wire.
    generation: u64,
    pub onboarding: Option<Onboarding>,
    pub debounce: Debouncer,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self {
            query: String::new(),
            page: 1,
            total_pages: 1,
            generation: 0,
            onboarding: None,
            debounce: Debouncer::new(SEARCH_DEBOUNCE),
        }
    }
}

impl DashboardState {
    /// Back to the mount state. The generation counter survives so a fetch
    /// dispatched before the reset can never apply afterwards.
    fn reset_view(&mut self) {
        self.query.clear();
        self.page = 1;
        self.total_pages = 1;
        self.onboarding = None;
    }
}

/// Outcome of a notes fetch.
#[derive(Debug)]
pub enum Refresh {
    Page(DashboardPage),
    /// No credential — the screen should redirect to login, and no request
    /// was sent.
    Login,
    /// A newer fetch started while this one was on the wire. Nothing was
    /// applied; the newer fetch delivers its own result.
    Superseded,
}

/// Dashboard mount. First login shows onboarding instead of fetching;
/// otherwise fetch page 1 with an empty query.
pub async fn open(state: &AppMutex) -> Result<DashboardGate, String> {
    {
        let mut s = state.lock().await;
        s.dashboard.reset_view();
        if s.session.token().is_none() {
            return Ok(DashboardGate::Login);
        }
        if s.session.first_login() {
            let onboarding = Onboarding::default();
            let step = onboarding.view();
            s.dashboard.onboarding = Some(onboarding);
            return Ok(DashboardGate::Onboarding { step });
        }
    }
    match refresh(state, String::new(), 1).await? {
        Refresh::Page(page) => Ok(DashboardGate::Notes { page }),
        Refresh::Login => Ok(DashboardGate::Login),
        Refresh::Superseded => Ok(DashboardGate::Unchanged),
    }
}

/// Fetch one page of notes and apply it to the dashboard state, unless a
/// newer fetch superseded it in the meantime. The lock is released while
/// the request is on the wire: snapshot, await, re-lock.
///
/// On failure nothing is applied — the previously displayed page stays —
/// and the returned message is what the notification shows.
pub async fn refresh(state: &AppMutex, query: String, page: u32) -> Result<Refresh, String> {
    let (api, token, generation) = {
        let mut s = state.lock().await;
        let Some(token) = s.session.token() else {
            return Ok(Refresh::Login);
        };
        s.dashboard.generation += 1;
        (s.api.clone(), token, s.dashboard.generation)
    };

    let result = api.search_notes(&token, &query, page).await;

    let mut s = state.lock().await;
    if s.dashboard.generation != generation {
        return Ok(Refresh::Superseded);
    }
    let response = result.map_err(|e| e.user_message("Failed to load notes."))?;

    let total_pages = response.total_pages.unwrap_or(1).max(1);
    s.dashboard.page = page;
    s.dashboard.total_pages = total_pages;
    Ok(Refresh::Page(build_page(response.notes, page, total_pages)))
}

/// Delete a note (confirmation already happened), then re-fetch the page
/// the user is looking at so the grid reflects the removal.
pub async fn delete(state: &AppMutex, id: String) -> Result<Refresh, String> {
    let (api, token, query, page) = {
        let s = state.lock().await;
        let Some(token) = s.session.token() else {
            return Ok(Refresh::Login);
        };
        (
            s.api.clone(),
            token,
            s.dashboard.query.clone(),
            s.dashboard.page,
        )
    };

    api.delete_note(&token, &id)
        .await
        .map_err(|e| e.user_message("Failed to delete note."))?;

    refresh(state, query, page).await
}

/// Advance the onboarding overlay. Completing the last step clears the
/// first-login flag and loads the notes behind the overlay.
pub async fn advance_onboarding(state: &AppMutex) -> Result<DashboardGate, String> {
    use crate::onboarding::Advance;

    let (query, page) = {
        let mut s = state.lock().await;
        let Some(onboarding) = s.dashboard.onboarding.as_mut() else {
            return Err("Onboarding is not active.".to_string());
        };
        match onboarding.advance() {
            Advance::Next(step) => return Ok(DashboardGate::Onboarding { step }),
            Advance::Completed => {
                s.dashboard.onboarding = None;
                s.session
                    .set_first_login(false)
                    .map_err(|_| "Failed to save session.".to_string())?;
                (s.dashboard.query.clone(), s.dashboard.page)
            }
        }
    };

    match refresh(state, query, page).await? {
        Refresh::Page(page) => Ok(DashboardGate::Notes { page }),
        Refresh::Login => Ok(DashboardGate::Login),
        Refresh::Superseded => Ok(DashboardGate::Unchanged),
    }
}

/// Prepare fetched notes for the webview: sanitize every body, fold empty
/// summaries to `None`, and compute the pagination window.
fn build_page(notes: Vec<Note>, page: u32, total_pages: u32) -> DashboardPage {
    let notes = notes
        .into_iter()
        .map(|note| NoteCard {
            id: note.id,
            title: note.title,
            html: clean_html(&note.content),
            summary: (!note.summary.is_empty()).then_some(note.summary),
            created_at: note.created_at,
        })
        .collect();
    DashboardPage {
        notes,
        page,
        total_pages,
        window: PageWindow::compute(page, total_pages),
    }
}
