use std::path::{Path, PathBuf};

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// On-disk shape of the session file. Field names match the storage keys
/// the service's web client uses (`token`, `firstLogin`).
#[derive(Debug, Default, Serialize, Deserialize)]
struct SessionState {
    #[serde(default)]
    token: Option<String>,
    #[serde(rename = "firstLogin", default)]
    first_login: bool,
}

/// Bearer credential and first-login flag, persisted as a small JSON file
/// in the app data dir. Constructed once in `run()` and injected into
/// `AppState` — nothing else reads or writes the file.
///
/// There is no expiry or refresh: a stored token is trusted until the
/// backend rejects it. An absent token means "not authenticated" and the
/// caller redirects to login instead of issuing the request.
pub struct SessionStore {
    path: PathBuf,
    state: SessionState,
}

impl SessionStore {
    /// Load the session from `dir/session.json`. A missing or unreadable
    /// file yields an empty session, same as cleared browser storage.
    pub fn load(dir: &Path) -> Self {
        let path = dir.join("session.json");
        let state = std::fs::read_to_string(&path)
            .ok()
            .and_then(|raw| serde_json::from_str(&raw).ok())
            .unwrap_or_default();
        Self { path, state }
    }

    pub fn token(&self) -> Option<String> {
        self.state.token.clone()
    }

    pub fn set_token(&mut self, token: String) -> Result<()> {
        self.state.token = Some(token);
        self.persist()
    }

    pub fn clear_token(&mut self) -> Result<()> {
        self.state.token = None;
        self.persist()
    }

    pub fn first_login(&self) -> bool {
        self.state.first_login
    }

    pub fn set_first_login(&mut self, value: bool) -> Result<()> {
        self.state.first_login = value;
        self.persist()
    }

    /// Write to a temp file alongside the target, then atomically rename.
    /// Prevents a partial write from corrupting the stored credential.
    fn persist(&self) -> Result<()> {
        let raw = serde_json::to_string_pretty(&self.state)?;
        let tmp_path = self.path.with_extension("json.tmp");
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&tmp_path, raw)?;
        std::fs::rename(&tmp_path, &self.path)?;
        Ok(())
    }
}
