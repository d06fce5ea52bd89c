//! API gateway client
//!
//! Single choke point for all network I/O against the remote profile
//! service. Attaches bearer-token authentication from the injected token
//! slot, normalizes error responses into `KontactError`, and never retries.
//!
//! Error convention: non-2xx responses carry `{"error": "<message>"}`; when
//! the field (or body) is absent the message falls back to `HTTP <status>`.
//! A 2xx response with an empty or unparsable body is an explicit
//! no-content value, never an error.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use kontactshare_core::{AdminAuthenticator, ProfileStore, TokenStore};
use kontactshare_domain::{
    ApiConfig, BulkAction, BulkItemOutcome, BulkOutcome, CreatedProfile, DashboardStats,
    KontactError, ListQuery, Profile, ProfilePage, ProfilePayload, Result,
};
use reqwest::Method;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info, instrument};

use crate::http::HttpClient;

#[derive(Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct BulkRequest<'a> {
    action: BulkAction,
    unique_codes: &'a [String],
}

/// Gateway to the remote profile service
pub struct ApiGateway {
    http: HttpClient,
    base_url: String,
    tokens: Arc<dyn TokenStore>,
}

impl ApiGateway {
    /// Create a gateway from the API configuration and a token slot.
    ///
    /// # Errors
    ///
    /// Returns `KontactError::Internal` if the HTTP client cannot be built.
    pub fn new(config: &ApiConfig, tokens: Arc<dyn TokenStore>) -> Result<Self> {
        let http = HttpClient::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;

        Ok(Self { http, base_url: config.base_url.trim_end_matches('/').to_string(), tokens })
    }

    /// Core request path shared by every endpoint.
    ///
    /// When `requires_auth` is set and no token is stored, fails with
    /// `Unauthenticated` before any network call is made.
    #[instrument(skip(self, body), fields(path = %path))]
    async fn request_json(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
        requires_auth: bool,
    ) -> Result<Value> {
        let mut request = self
            .http
            .request(method, format!("{}{}", self.base_url, path))
            .header("Content-Type", "application/json");

        if requires_auth {
            let token = self.tokens.get()?.ok_or(KontactError::Unauthenticated)?;
            request = request.header("Authorization", format!("Bearer {token}"));
        }

        if let Some(body) = body {
            request = request.json(body);
        }

        let response = self.http.send(request).await?;
        let status = response.status();
        let text = response.text().await.unwrap_or_default();

        if !status.is_success() {
            let message = serde_json::from_str::<Value>(&text)
                .ok()
                .and_then(|v| v.get("error").and_then(Value::as_str).map(str::to_string))
                .unwrap_or_else(|| format!("HTTP {}", status.as_u16()));
            return Err(KontactError::Remote(message));
        }

        // Empty or unparsable success bodies are an explicit no-content value.
        Ok(serde_json::from_str(&text).unwrap_or(Value::Null))
    }

    fn parse<T: serde::de::DeserializeOwned>(value: Value) -> Result<T> {
        serde_json::from_value(value)
            .map_err(|err| KontactError::Internal(format!("unexpected response shape: {err}")))
    }

    fn encode(code: &str) -> String {
        urlencoding::encode(code).into_owned()
    }
}

#[async_trait]
impl AdminAuthenticator for ApiGateway {
    async fn login(&self, email: &str, password: &str) -> Result<String> {
        let body = serde_json::to_value(LoginRequest { email, password })
            .map_err(|err| KontactError::Internal(err.to_string()))?;
        let value =
            self.request_json(Method::POST, "/admin/login", Some(&body), false).await?;

        let token = value
            .get("token")
            .and_then(Value::as_str)
            .ok_or_else(|| KontactError::Remote("login response had no token".to_string()))?;
        info!("admin login accepted by backend");
        Ok(token.to_string())
    }
}

#[async_trait]
impl ProfileStore for ApiGateway {
    async fn create(&self, payload: &ProfilePayload) -> Result<CreatedProfile> {
        let body = serde_json::to_value(payload)
            .map_err(|err| KontactError::Internal(err.to_string()))?;
        let value = self.request_json(Method::POST, "/profiles", Some(&body), true).await?;
        Self::parse(value)
    }

    async fn delete(&self, unique_code: &str) -> Result<()> {
        let path = format!("/profiles/{}", Self::encode(unique_code));
        self.request_json(Method::DELETE, &path, None, true).await?;
        Ok(())
    }

    async fn ban(&self, unique_code: &str) -> Result<()> {
        let path = format!("/admin/profiles/{}/ban", Self::encode(unique_code));
        self.request_json(Method::POST, &path, None, true).await?;
        Ok(())
    }

    async fn unban(&self, unique_code: &str) -> Result<()> {
        let path = format!("/admin/profiles/{}/unban", Self::encode(unique_code));
        self.request_json(Method::POST, &path, None, true).await?;
        Ok(())
    }

    async fn get_public(&self, unique_code: &str) -> Result<Profile> {
        let path = format!("/profiles/{}", Self::encode(unique_code));
        let value = self.request_json(Method::GET, &path, None, false).await?;
        Self::parse(value)
    }

    async fn list(&self, query: &ListQuery) -> Result<ProfilePage> {
        let mut path = format!("/admin/profiles?page={}&limit={}", query.page, query.limit);
        if let Some(search) = &query.search {
            path.push_str("&search=");
            path.push_str(&Self::encode(search));
        }
        if let Some(status) = query.status {
            path.push_str("&status=");
            path.push_str(status.as_str());
        }

        let value = self.request_json(Method::GET, &path, None, true).await?;
        Self::parse(value)
    }

    async fn stats(&self) -> Result<DashboardStats> {
        let value = self.request_json(Method::GET, "/admin/stats", None, true).await?;
        Self::parse(value)
    }

    async fn bulk(&self, action: BulkAction, unique_codes: &[String]) -> Result<BulkOutcome> {
        let body = serde_json::to_value(BulkRequest { action, unique_codes })
            .map_err(|err| KontactError::Internal(err.to_string()))?;
        let value =
            self.request_json(Method::POST, "/admin/profiles/bulk", Some(&body), true).await?;

        // A backend that reports per-item results sends `{"results": [...]}`.
        // The original contract answers with a bare success, which cannot
        // express partial failure, so it becomes an all-ok outcome.
        if let Some(results) = value.get("results").cloned() {
            let items: Vec<BulkItemOutcome> = Self::parse(results)?;
            return Ok(BulkOutcome { items });
        }

        debug!(action = %action, count = unique_codes.len(), "bulk response had no per-item results");
        Ok(BulkOutcome::all_ok(unique_codes))
    }
}
