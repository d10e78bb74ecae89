//! HTTP client for the notes REST API.
//!
//! Every endpoint wraps its payload in a `{ "data": ... }` envelope. Error
//! responses may carry a message under `message`, `error`, or `detail`;
//! whatever is found feeds the user-facing error text.

use std::fmt;
use std::time::Duration;

use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::error::{Error, Result};
use crate::models::{Note, NoteFields, NoteId};
use crate::util::{compact_text, is_http_url, normalize_text_option};

/// How long a request may run before it is abandoned.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Operations the app needs from the notes backend.
///
/// The desktop app talks to [`NotesApiClient`]; tests swap in scripted
/// stand-ins.
#[allow(async_fn_in_trait)]
pub trait NotesApi {
    /// Fetch every note, newest first.
    async fn list(&self) -> Result<Vec<Note>>;
    /// Fetch a single note by ID.
    async fn get(&self, id: &NoteId) -> Result<Note>;
    /// Create a note and return the server's copy.
    async fn create(&self, fields: &NoteFields) -> Result<Note>;
    /// Update a note and return the server's copy.
    async fn update(&self, id: &NoteId, fields: &NoteFields) -> Result<Note>;
    /// Delete a note.
    async fn delete(&self, id: &NoteId) -> Result<()>;
    /// Full-text search over all notes.
    async fn search(&self, query: &str) -> Result<Vec<Note>>;
}

/// Response envelope used by every successful endpoint.
#[derive(Debug, Deserialize)]
struct Envelope<T> {
    data: T,
}

/// Error payload shapes we try to extract a message from.
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: Option<String>,
    error: Option<String>,
    detail: Option<String>,
}

/// Client for the notes REST API.
#[derive(Clone)]
pub struct NotesApiClient {
    http: Client,
    base_url: String,
    bearer_token: Option<String>,
}

impl NotesApiClient {
    /// Create a client for the API rooted at `base_url`.
    ///
    /// `bearer_token`, when present, is attached to every request.
    pub fn new(base_url: &str, bearer_token: Option<String>) -> Result<Self> {
        let base_url = normalize_base_url(base_url)?;
        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|error| {
                Error::InvalidConfiguration(format!("Failed to construct HTTP client: {error}"))
            })?;
        Ok(Self {
            http,
            base_url,
            bearer_token: normalize_text_option(bearer_token),
        })
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let mut request = self.http.request(method, format!("{}{path}", self.base_url));
        if let Some(token) = &self.bearer_token {
            request = request.bearer_auth(token);
        }
        request
    }

    async fn read_envelope<T: DeserializeOwned>(response: Response) -> Result<T> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(api_error(status, &body));
        }
        let envelope: Envelope<T> = response
            .json()
            .await
            .map_err(|error| Error::Decode(error.to_string()))?;
        Ok(envelope.data)
    }
}

impl NotesApi for NotesApiClient {
    async fn list(&self) -> Result<Vec<Note>> {
        let response = self
            .request(Method::GET, "/notes")
            .send()
            .await
            .map_err(transport_error)?;
        Self::read_envelope(response).await
    }

    async fn get(&self, id: &NoteId) -> Result<Note> {
        let response = self
            .request(Method::GET, &format!("/notes/{id}"))
            .send()
            .await
            .map_err(transport_error)?;
        Self::read_envelope(response).await
    }

    async fn create(&self, fields: &NoteFields) -> Result<Note> {
        let response = self
            .request(Method::POST, "/notes")
            .json(fields)
            .send()
            .await
            .map_err(transport_error)?;
        Self::read_envelope(response).await
    }

    async fn update(&self, id: &NoteId, fields: &NoteFields) -> Result<Note> {
        let response = self
            .request(Method::PUT, &format!("/notes/{id}"))
            .json(fields)
            .send()
            .await
            .map_err(transport_error)?;
        Self::read_envelope(response).await
    }

    async fn delete(&self, id: &NoteId) -> Result<()> {
        let response = self
            .request(Method::DELETE, &format!("/notes/{id}"))
            .send()
            .await
            .map_err(transport_error)?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(api_error(status, &body));
        }
        Ok(())
    }

    async fn search(&self, query: &str) -> Result<Vec<Note>> {
        let response = self
            .request(Method::GET, "/notes/search")
            .query(&[("q", query)])
            .send()
            .await
            .map_err(transport_error)?;
        Self::read_envelope(response).await
    }
}

impl fmt::Debug for NotesApiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NotesApiClient")
            .field("base_url", &self.base_url)
            .field(
                "bearer_token",
                &self.bearer_token.as_ref().map(|_| "<redacted>"),
            )
            .finish_non_exhaustive()
    }
}

/// Normalize an API base URL: trim whitespace and trailing slashes, and
/// insist on an HTTP(S) scheme.
pub fn normalize_base_url(raw: &str) -> Result<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(Error::InvalidConfiguration(
            "API base URL must not be empty".to_string(),
        ));
    }
    if !is_http_url(trimmed) {
        return Err(Error::InvalidConfiguration(
            "API base URL must include http:// or https://".to_string(),
        ));
    }
    Ok(trimmed.trim_end_matches('/').to_string())
}

fn transport_error(error: reqwest::Error) -> Error {
    if error.is_connect() {
        Error::Unreachable(error.to_string())
    } else {
        Error::Network(error.to_string())
    }
}

fn api_error(status: StatusCode, body: &str) -> Error {
    Error::Api {
        status: status.as_u16(),
        message: extract_error_message(body),
    }
}

/// Pull a human-readable message out of an error response body, if the
/// server provided one.
fn extract_error_message(body: &str) -> Option<String> {
    let parsed: ApiErrorBody = serde_json::from_str(body).ok()?;
    parsed
        .message
        .or(parsed.error)
        .or(parsed.detail)
        .map(|text| compact_text(&text))
        .filter(|text| !text.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn normalize_base_url_rejects_invalid_values() {
        assert!(normalize_base_url("").is_err());
        assert!(normalize_base_url("   ").is_err());
        assert!(normalize_base_url("localhost:8000/api").is_err());
        assert!(normalize_base_url("ftp://example.com/api").is_err());
    }

    #[test]
    fn normalize_base_url_trims_trailing_slash() {
        assert_eq!(
            normalize_base_url(" http://localhost:8000/api/ ").unwrap(),
            "http://localhost:8000/api"
        );
        assert_eq!(
            normalize_base_url("https://notes.example.com/api").unwrap(),
            "https://notes.example.com/api"
        );
    }

    #[test]
    fn client_debug_redacts_bearer_token() {
        let client =
            NotesApiClient::new("http://localhost:8000/api", Some("sekrit-token".to_string()))
                .unwrap();
        let debug = format!("{client:?}");
        assert!(!debug.contains("sekrit-token"));
        assert!(debug.contains("redacted"));
    }

    #[test]
    fn blank_bearer_tokens_are_dropped() {
        let client = NotesApiClient::new("http://localhost:8000/api", Some("  ".to_string())).unwrap();
        let debug = format!("{client:?}");
        assert!(debug.contains("None"));
    }

    #[test]
    fn extract_error_message_prefers_message_field() {
        assert_eq!(
            extract_error_message(r#"{"message":"Title is too long","error":"ignored"}"#),
            Some("Title is too long".to_string())
        );
        assert_eq!(
            extract_error_message(r#"{"error":"bad input"}"#),
            Some("bad input".to_string())
        );
        assert_eq!(
            extract_error_message(r#"{"detail":"conflicting update"}"#),
            Some("conflicting update".to_string())
        );
    }

    #[test]
    fn extract_error_message_rejects_junk_bodies() {
        assert_eq!(extract_error_message("<html>502</html>"), None);
        assert_eq!(extract_error_message("{}"), None);
        assert_eq!(extract_error_message(r#"{"message":"   "}"#), None);
    }

    #[test]
    fn api_errors_carry_status_and_message() {
        let error = api_error(StatusCode::NOT_FOUND, "no body");
        assert_eq!(
            error,
            Error::Api {
                status: 404,
                message: None,
            }
        );
        assert_eq!(error.user_message(), "The requested note was not found.");
    }

    #[test]
    fn envelope_decodes_note_payloads() {
        let body = r#"{"data":[{"id":"n-1","title":"First","content":"body","created_at":"2024-01-15T10:30:00Z","updated_at":"2024-01-16T09:00:00Z"}]}"#;
        let envelope: Envelope<Vec<Note>> = serde_json::from_str(body).unwrap();
        assert_eq!(envelope.data.len(), 1);
        assert_eq!(envelope.data[0].id, NoteId::from("n-1"));
        assert_eq!(envelope.data[0].title, "First");
    }

    #[test]
    fn envelope_defaults_missing_text_fields() {
        let body = r#"{"data":{"id":"n-2","created_at":"2024-01-15T10:30:00Z","updated_at":"2024-01-15T10:30:00Z"}}"#;
        let envelope: Envelope<Note> = serde_json::from_str(body).unwrap();
        assert!(envelope.data.title.is_empty());
        assert!(envelope.data.content.is_empty());
    }
}
