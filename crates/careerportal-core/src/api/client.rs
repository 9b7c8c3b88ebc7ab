//! Portal REST API client.
//!
//! Uses reqwest to call the backend. Every call honours the configured
//! timeout and the client's cancellation token.

use std::future::Future;
use std::path::{Path, PathBuf};
use std::time::Duration;

use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue, USER_AGENT};
use reqwest::multipart::{Form, Part};
use reqwest::{Method, RequestBuilder, Response, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use super::types::{EmployerRegistration, JobSeekerRegistration, LoginRequest, UploadedFile};
use crate::config::ClientConfig;
use crate::session::{Authenticator, SessionStore};

const USER_AGENT_VALUE: &str = concat!("careerportal/", env!("CARGO_PKG_VERSION"));

/// API client errors.
#[derive(Debug, Error)]
pub enum ApiError {
    /// No response arrived (connection refused, DNS, TLS, reset).
    #[error("No response from server. Please check your connection.")]
    Network(#[source] reqwest::Error),

    #[error("Request timed out after {}s", .0.as_secs())]
    Timeout(Duration),

    /// The view that issued the request was torn down.
    #[error("Request cancelled")]
    Cancelled,

    /// The server answered with a non-success status.
    #[error("{message}")]
    Api { status: u16, message: String },

    #[error("Unexpected response from server: {0}")]
    InvalidResponse(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ApiError {
    /// HTTP status for server-side failures.
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Portal REST API client.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    timeout: Duration,
    token: Option<String>,
    cancel: CancellationToken,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("authenticated", &self.token.is_some())
            .finish_non_exhaustive()
    }
}

impl ApiClient {
    /// Create a new API client.
    pub fn new(config: &ClientConfig) -> Result<Self, ApiError> {
        let base_url = config.api_base_url.trim().trim_end_matches('/').to_string();
        if base_url.is_empty() {
            return Err(ApiError::Config("api_base_url is empty".into()));
        }
        Url::parse(&base_url)
            .map_err(|e| ApiError::Config(format!("invalid api_base_url '{base_url}': {e}")))?;
        if config.timeout_secs == 0 {
            return Err(ApiError::Config("timeout_secs must be positive".into()));
        }

        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE));

        // Ensure a TLS crypto provider is installed (reqwest uses rustls-no-provider).
        // The `Err` case just means it was already installed.
        let _ = rustls::crypto::ring::default_provider().install_default();

        let timeout = config.timeout();
        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()
            .map_err(|e| ApiError::Config(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            http,
            base_url,
            timeout,
            token: None,
            cancel: CancellationToken::new(),
        })
    }

    /// Attach the session's credential to authenticated requests.
    #[must_use]
    pub fn with_session(mut self, session: &SessionStore) -> Self {
        self.token = session.credential().map(str::to_owned);
        self
    }

    pub fn set_token(&mut self, token: Option<String>) {
        self.token = token;
    }

    /// Token that aborts every in-flight and future request when cancelled.
    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancel.clone()
    }

    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build the URL for an API path (`path` starts with `/`).
    pub(crate) fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Build a URL with query parameters, skipping absent and blank values.
    pub(crate) fn url_with_query(
        &self,
        path: &str,
        params: &[(&str, Option<String>)],
    ) -> Result<Url, ApiError> {
        let mut url = Url::parse(&self.api_url(path))
            .map_err(|e| ApiError::Config(format!("invalid URL for {path}: {e}")))?;
        let present: Vec<(&str, &str)> = params
            .iter()
            .filter_map(|(key, value)| {
                value
                    .as_deref()
                    .map(str::trim)
                    .filter(|v| !v.is_empty())
                    .map(|v| (*key, v))
            })
            .collect();
        if !present.is_empty() {
            url.query_pairs_mut().extend_pairs(present);
        }
        Ok(url)
    }

    /// Start a request carrying the session credential, if any.
    ///
    /// The stored token already contains its `Bearer ` prefix and is sent verbatim.
    pub(crate) fn request(&self, method: Method, url: impl reqwest::IntoUrl) -> RequestBuilder {
        let builder = self.http.request(method, url);
        match &self.token {
            Some(token) => builder.header(AUTHORIZATION, token.as_str()),
            None => builder,
        }
    }

    /// Start a request that never carries credentials.
    pub(crate) fn public_request(
        &self,
        method: Method,
        url: impl reqwest::IntoUrl,
    ) -> RequestBuilder {
        self.http.request(method, url)
    }

    /// Run `fut` unless the client is cancelled first.
    pub(crate) async fn run<T, F>(&self, fut: F) -> Result<T, ApiError>
    where
        F: Future<Output = Result<T, ApiError>>,
    {
        tokio::select! {
            biased;
            () = self.cancel.cancelled() => Err(ApiError::Cancelled),
            result = fut => result,
        }
    }

    /// Send a request and return the response when the status is a success.
    pub(crate) async fn send(&self, builder: RequestBuilder) -> Result<Response, ApiError> {
        let resp = builder.send().await.map_err(|e| self.transport_error(e))?;
        Self::check_status(resp).await
    }

    /// Send and decode a JSON body.
    pub(crate) async fn send_json<T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
    ) -> Result<T, ApiError> {
        self.run(async {
            let resp = self.send(builder).await?;
            resp.json()
                .await
                .map_err(|e| ApiError::InvalidResponse(e.to_string()))
        })
        .await
    }

    /// Send and return the body as text.
    pub(crate) async fn send_text(&self, builder: RequestBuilder) -> Result<String, ApiError> {
        self.run(async {
            let resp = self.send(builder).await?;
            resp.text().await.map_err(|e| self.transport_error(e))
        })
        .await
    }

    /// Send and discard the body.
    pub(crate) async fn send_empty(&self, builder: RequestBuilder) -> Result<(), ApiError> {
        self.run(async { self.send(builder).await.map(drop) }).await
    }

    fn transport_error(&self, err: reqwest::Error) -> ApiError {
        if err.is_timeout() {
            ApiError::Timeout(self.timeout)
        } else if err.is_decode() {
            ApiError::InvalidResponse(err.to_string())
        } else {
            ApiError::Network(err)
        }
    }

    /// Check HTTP response status, returning the server's message for non-success codes.
    async fn check_status(resp: Response) -> Result<Response, ApiError> {
        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }
        let body = resp.text().await.unwrap_or_default();
        Err(ApiError::Api {
            status: status.as_u16(),
            message: server_message(status, &body),
        })
    }

    // =========================================================================
    // Auth
    // =========================================================================

    /// Exchange credentials for a bearer token (`POST /auth/login`).
    pub async fn login(&self, username_or_email: &str, password: &str) -> Result<String, ApiError> {
        let url = self.api_url("/auth/login");
        debug!(url = %url, "logging in");
        let body = LoginRequest {
            username_or_email,
            password,
        };
        let text = self
            .send_text(self.public_request(Method::POST, &url).json(&body))
            .await?;
        let token = plain_text(&text);
        if token.is_empty() {
            return Err(ApiError::InvalidResponse("login returned an empty token".into()));
        }
        Ok(token)
    }

    /// Register a job seeker; returns the server's confirmation message.
    pub async fn register_job_seeker(
        &self,
        registration: &JobSeekerRegistration,
    ) -> Result<String, ApiError> {
        let url = self.api_url("/auth/register/jobseeker");
        debug!(url = %url, username = %registration.username, "registering job seeker");
        let text = self
            .send_text(self.public_request(Method::POST, &url).json(registration))
            .await?;
        Ok(plain_text(&text))
    }

    /// Register an employer; returns the server's confirmation message.
    pub async fn register_employer(
        &self,
        registration: &EmployerRegistration,
    ) -> Result<String, ApiError> {
        let url = self.api_url("/auth/register/employer");
        debug!(url = %url, username = %registration.username, "registering employer");
        let text = self
            .send_text(self.public_request(Method::POST, &url).json(registration))
            .await?;
        Ok(plain_text(&text))
    }

    // =========================================================================
    // Files
    // =========================================================================

    /// Upload a resume (`POST /files/upload/resume`, no credentials).
    pub async fn upload_resume(&self, path: &Path) -> Result<UploadedFile, ApiError> {
        self.upload("/files/upload/resume", path).await
    }

    /// Upload a profile photo (`POST /files/upload/photo`, no credentials).
    pub async fn upload_photo(&self, path: &Path) -> Result<UploadedFile, ApiError> {
        self.upload("/files/upload/photo", path).await
    }

    async fn upload(&self, endpoint: &str, path: &Path) -> Result<UploadedFile, ApiError> {
        let url = self.api_url(endpoint);
        debug!(url = %url, file = %path.display(), "uploading file");
        let form = Form::new().part("file", file_part(path).await?);
        let uploaded: UploadedFile = self
            .send_json(self.public_request(Method::POST, &url).multipart(form))
            .await?;
        if uploaded.file_path.is_empty() {
            return Err(ApiError::InvalidResponse(
                "upload response has no filePath".into(),
            ));
        }
        Ok(uploaded)
    }
}

impl Authenticator for ApiClient {
    fn authenticate(
        &self,
        identifier: &str,
        secret: &str,
    ) -> impl Future<Output = Result<String, ApiError>> + Send {
        self.login(identifier, secret)
    }
}

/// Read a local file into a multipart part named after the file.
pub(crate) async fn file_part(path: &Path) -> Result<Part, ApiError> {
    let content = tokio::fs::read(path).await.map_err(|source| ApiError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let filename = path
        .file_name()
        .map_or_else(|| "upload".to_string(), |n| n.to_string_lossy().into_owned());
    Part::bytes(content)
        .file_name(filename)
        .mime_str(mime_for(path))
        .map_err(|e| ApiError::Config(format!("invalid content type: {e}")))
}

pub(crate) fn mime_for(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_ascii_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "pdf" => "application/pdf",
        "doc" => "application/msword",
        "docx" => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        _ => "application/octet-stream",
    }
}

/// Text body as the user should see it: a JSON string literal is unwrapped.
fn plain_text(body: &str) -> String {
    let body = body.trim();
    match serde_json::from_str::<Value>(body) {
        Ok(Value::String(s)) => s.trim().to_string(),
        _ => body.to_string(),
    }
}

/// Message to surface for an error response: the server's own message when
/// it sent one, else the status line.
pub(crate) fn server_message(status: StatusCode, body: &str) -> String {
    let body = body.trim();
    match serde_json::from_str::<Value>(body) {
        Ok(Value::Object(map)) => {
            if let Some(message) = ["message", "error"]
                .iter()
                .filter_map(|key| map.get(*key).and_then(Value::as_str))
                .map(str::trim)
                .find(|m| !m.is_empty())
            {
                return message.to_string();
            }
        }
        Ok(Value::String(s)) if !s.trim().is_empty() => return s.trim().to_string(),
        _ if !body.is_empty() && !body.starts_with('<') => return body.to_string(),
        _ => {}
    }
    format!("Server error: {status}")
}
