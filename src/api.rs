use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::types::{Note, NoteDraft, SearchResponse};

/// Default note-service base URL (the local dev server).
pub const DEFAULT_API_URL: &str = "http://localhost:5000";

/// Notes per dashboard page.
pub const PAGE_LIMIT: u32 = 6;

const REQUEST_TIMEOUT_SECS: u64 = 30;

/// A failed remote call. `Status` carries the server's `message` field when
/// the error body parses as JSON; `Transport` is everything below HTTP
/// (connection refused, timeout, malformed body).
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("server returned {status}")]
    Status {
        status: StatusCode,
        message: Option<String>,
    },
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

impl ApiError {
    /// The text shown in the notification: the server-provided message when
    /// there is one, otherwise the screen's generic fallback.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Status {
                message: Some(m), ..
            } => m.clone(),
            _ => fallback.to_string(),
        }
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

#[derive(Serialize)]
struct SignupRequest<'a> {
    name: &'a str,
    email: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Deserialize)]
struct AuthResponse {
    token: String,
}

/// Typed client for the note service. Auth endpoints are anonymous; every
/// note endpoint takes the bearer token explicitly — callers decide what a
/// missing token means (redirect vs inline error) before getting here.
pub struct NotesApi {
    client: Client,
    base_url: String,
}

impl NotesApi {
    pub fn new(base_url: String) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .expect("Failed to create HTTP client");
        Self { client, base_url }
    }

    /// Base URL from `NOTES_API_URL`, falling back to the local default.
    pub fn from_env() -> Self {
        let base_url =
            std::env::var("NOTES_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        Self::new(base_url)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn signup(&self, name: &str, email: &str, password: &str) -> Result<String, ApiError> {
        let response = self
            .client
            .post(format!("{}/api/auth/signup", self.base_url))
            .json(&SignupRequest {
                name,
                email,
                password,
            })
            .send()
            .await?;
        let auth: AuthResponse = check(response).await?.json().await?;
        Ok(auth.token)
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<String, ApiError> {
        let response = self
            .client
            .post(format!("{}/api/auth/login", self.base_url))
            .json(&LoginRequest { email, password })
            .send()
            .await?;
        let auth: AuthResponse = check(response).await?.json().await?;
        Ok(auth.token)
    }

    /// Server-side search: `q` matched against the user's notes, paginated.
    pub async fn search_notes(
        &self,
        token: &str,
        query: &str,
        page: u32,
    ) -> Result<SearchResponse, ApiError> {
        debug!(query, page, "fetching notes");
        let response = self
            .client
            .get(format!("{}/api/notes/search", self.base_url))
            .bearer_auth(token)
            .query(&[
                ("q", query.to_string()),
                ("page", page.to_string()),
                ("limit", PAGE_LIMIT.to_string()),
            ])
            .send()
            .await?;
        Ok(check(response).await?.json().await?)
    }

    pub async fn get_note(&self, token: &str, id: &str) -> Result<Note, ApiError> {
        let response = self
            .client
            .get(format!("{}/api/notes/{id}", self.base_url))
            .bearer_auth(token)
            .send()
            .await?;
        Ok(check(response).await?.json().await?)
    }

    pub async fn create_note(&self, token: &str, draft: &NoteDraft) -> Result<(), ApiError> {
        let response = self
            .client
            .post(format!("{}/api/notes", self.base_url))
            .bearer_auth(token)
            .json(draft)
            .send()
            .await?;
        check(response).await?;
        Ok(())
    }

    pub async fn update_note(
        &self,
        token: &str,
        id: &str,
        draft: &NoteDraft,
    ) -> Result<(), ApiError> {
        let response = self
            .client
            .put(format!("{}/api/notes/{id}", self.base_url))
            .bearer_auth(token)
            .json(draft)
            .send()
            .await?;
        check(response).await?;
        Ok(())
    }

    pub async fn delete_note(&self, token: &str, id: &str) -> Result<(), ApiError> {
        let response = self
            .client
            .delete(format!("{}/api/notes/{id}", self.base_url))
            .bearer_auth(token)
            .send()
            .await?;
        check(response).await?;
        Ok(())
    }
}

/// Map a non-success response to `ApiError::Status`, pulling the server's
/// `message` out of the body when it sent one.
async fn check(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let message = response
        .json::<ErrorBody>()
        .await
        .ok()
        .and_then(|body| body.message);
    Err(ApiError::Status { status, message })
}
