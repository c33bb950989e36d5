//! Supabase (PostgREST) call store
//!
//! # API Reference
//!
//! - Endpoint: `POST {project_url}/rest/v1/{table}`
//! - Auth: `apikey: <key>` and `Authorization: Bearer <key>`
//! - `Prefer: return=minimal` so a successful insert answers `201` with no body
//! - Errors come back as `{"code", "message", "details", "hint"}`

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, warn};
use url::Url;
use zeroize::Zeroizing;

use super::{CallRecord, CallStore, StoreError};

/// PostgREST error payload
#[derive(Debug, Deserialize)]
struct PostgrestError {
    code: Option<String>,
    message: Option<String>,
    details: Option<String>,
    hint: Option<String>,
}

pub struct SupabaseCallStore {
    client: reqwest::Client,
    endpoint: Url,
    /// Wiped from memory when the store is dropped
    api_key: Zeroizing<String>,
}

impl std::fmt::Debug for SupabaseCallStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SupabaseCallStore")
            .field("endpoint", &self.endpoint.as_str())
            .finish_non_exhaustive()
    }
}

impl SupabaseCallStore {
    /// Create a store writing into `table` of the project at `project_url`
    ///
    /// # Errors
    /// Returns [`StoreError::InvalidUrl`] when the project URL cannot be parsed, and
    /// [`StoreError::Transport`] if the HTTP client cannot be built.
    pub fn new(
        project_url: &str,
        api_key: &str,
        table: &str,
        timeout: Duration,
    ) -> Result<Self, StoreError> {
        let endpoint = rest_endpoint(project_url, table)?;
        let client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            endpoint,
            api_key: Zeroizing::new(api_key.to_string()),
        })
    }

    /// Full URL that inserts are sent to
    pub fn endpoint(&self) -> &str {
        self.endpoint.as_str()
    }
}

/// `{project_url}/rest/v1/{table}`, tolerating a trailing slash on the project URL
fn rest_endpoint(project_url: &str, table: &str) -> Result<Url, StoreError> {
    let base = project_url.trim().trim_end_matches('/');
    let raw = format!("{base}/rest/v1/{table}");
    Url::parse(&raw).map_err(|e| StoreError::InvalidUrl(format!("{raw}: {e}")))
}

/// Build the error for a non-success response body
fn api_error(status: reqwest::StatusCode, body: &str) -> StoreError {
    let parsed = serde_json::from_str::<PostgrestError>(body).ok();

    let message = parsed
        .as_ref()
        .and_then(|e| e.message.clone())
        .filter(|m| !m.trim().is_empty())
        .or_else(|| Some(body.trim().to_string()).filter(|b| !b.is_empty()))
        .unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("Unknown error")
                .to_string()
        });

    if let Some(err) = &parsed {
        debug!(
            code = ?err.code,
            details = ?err.details,
            hint = ?err.hint,
            "Supabase error details"
        );
    }

    StoreError::Api {
        status: status.as_u16(),
        code: parsed.and_then(|e| e.code),
        message,
    }
}

#[async_trait]
impl CallStore for SupabaseCallStore {
    async fn insert(&self, record: &CallRecord) -> Result<(), StoreError> {
        debug!(endpoint = %self.endpoint, room_url = %record.room_url, "Inserting call record");

        let response = self
            .client
            .post(self.endpoint.clone())
            .header("apikey", self.api_key.as_str())
            .header("Authorization", format!("Bearer {}", self.api_key.as_str()))
            .header("Content-Type", "application/json")
            .header("Prefer", "return=minimal")
            .json(record)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            warn!(status = %status, body = %error_body, "Supabase insert rejected");
            return Err(api_error(status, &error_body));
        }

        Ok(())
    }

    fn name(&self) -> &'static str {
        "supabase"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn record() -> CallRecord {
        CallRecord::with_created_at(
            "https://bearhug.daily.co/room1",
            "bearhug/room1",
            datetime!(2024-01-01 12:00:00 UTC),
        )
    }

    #[test]
    fn test_rest_endpoint_trailing_slash() {
        let url = rest_endpoint("https://project.supabase.co/", "calls").unwrap();
        assert_eq!(url.as_str(), "https://project.supabase.co/rest/v1/calls");
    }

    #[test]
    fn test_rest_endpoint_invalid() {
        let err = rest_endpoint("not a url", "calls").unwrap_err();
        assert!(matches!(err, StoreError::InvalidUrl(_)));
    }

    #[test]
    fn test_api_error_uses_postgrest_message() {
        let body = r#"{"code":"42P01","message":"relation \"public.calls\" does not exist","details":null,"hint":null}"#;
        let err = api_error(reqwest::StatusCode::NOT_FOUND, body);

        assert_eq!(err.to_string(), "relation \"public.calls\" does not exist");
        match err {
            StoreError::Api { status, code, .. } => {
                assert_eq!(status, 404);
                assert_eq!(code.as_deref(), Some("42P01"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_api_error_raw_body() {
        let err = api_error(reqwest::StatusCode::BAD_GATEWAY, "upstream down");
        assert_eq!(err.to_string(), "upstream down");
    }

    #[test]
    fn test_api_error_empty_body_uses_reason() {
        let err = api_error(reqwest::StatusCode::SERVICE_UNAVAILABLE, "");
        assert_eq!(err.to_string(), "Service Unavailable");
    }

    #[test]
    fn test_api_key_held_in_zeroizing_buffer() {
        let store = SupabaseCallStore::new(
            "https://project.supabase.co",
            "secret-key",
            "calls",
            Duration::from_secs(5),
        )
        .unwrap();

        let key: &Zeroizing<String> = &store.api_key;
        assert_eq!(key.as_str(), "secret-key");
        assert!(!format!("{store:?}").contains("secret-key"));
    }

    #[tokio::test]
    async fn test_insert_sends_record() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/rest/v1/calls"))
            .and(header("apikey", "test-key"))
            .and(header("authorization", "Bearer test-key"))
            .and(header("prefer", "return=minimal"))
            .and(body_json(serde_json::json!({
                "room_url": "https://bearhug.daily.co/room1",
                "s3_folder_dir": "bearhug/room1",
                "created_at": "2024-01-01T12:00:00.000Z"
            })))
            .respond_with(ResponseTemplate::new(201))
            .expect(1)
            .mount(&server)
            .await;

        let store =
            SupabaseCallStore::new(&server.uri(), "test-key", "calls", Duration::from_secs(5))
                .unwrap();

        store.insert(&record()).await.unwrap();
    }

    #[tokio::test]
    async fn test_insert_reports_api_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/rest/v1/calls"))
            .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
                "code": "PGRST301",
                "message": "JWT expired",
                "details": null,
                "hint": null
            })))
            .mount(&server)
            .await;

        let store =
            SupabaseCallStore::new(&server.uri(), "stale-key", "calls", Duration::from_secs(5))
                .unwrap();

        let err = store.insert(&record()).await.unwrap_err();
        assert_eq!(err.to_string(), "JWT expired");
    }
}
