//! Result-wrapping request layer.
//!
//! Every call resolves to an [`ApiResult`]; transport failures, non-2xx
//! statuses and unparsable bodies are reported in-band instead of as `Err`,
//! so a section can always render *something* for the operator.

use std::sync::Arc;

use reqwest::cookie::Jar;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Method, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::config::AppConfig;
use crate::error::AppResult;

/// Uniform outcome of one request.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResult<T> {
    pub ok: bool,
    /// HTTP status, or 0 when no response arrived at all.
    pub status: u16,
    pub data: Option<T>,
    pub error: Option<String>,
    /// Parsed body of a failed response, kept for operator diagnosis.
    pub error_data: Option<Value>,
}

impl<T> ApiResult<T> {
    pub fn success(status: u16, data: Option<T>) -> Self {
        Self { ok: true, status, data, error: None, error_data: None }
    }

    pub fn failure(status: u16, error: impl Into<String>, error_data: Option<Value>) -> Self {
        Self { ok: false, status, data: None, error: Some(error.into()), error_data }
    }

    pub fn is_forbidden(&self) -> bool {
        !self.ok && self.status == 403
    }

    /// Error message with any structured payload pretty-printed underneath.
    pub fn error_text(&self, fallback: &str) -> String {
        let message = self.error.clone().unwrap_or_else(|| fallback.to_string());
        match format_error_details(self.error_data.as_ref()) {
            Some(detail) => format!("{}\n{}", message, detail),
            None => message,
        }
    }
}

pub fn format_error_details(data: Option<&Value>) -> Option<String> {
    match data {
        None | Some(Value::Null) => None,
        Some(value) => Some(serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())),
    }
}

/// Optional parts of a request.
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    pub method: Option<Method>,
    pub body: Option<Value>,
    pub headers: Vec<(String, String)>,
}

impl RequestOptions {
    pub fn method(method: Method) -> Self {
        Self { method: Some(method), ..Self::default() }
    }

    pub fn json<B: Serialize>(method: Method, body: &B) -> Self {
        Self {
            method: Some(method),
            body: Some(serde_json::to_value(body).unwrap_or(Value::Null)),
            headers: Vec::new(),
        }
    }
}

/// HTTP client bound to one API base URL, carrying the session cookie on every call.
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    cookie_name: String,
    http: reqwest::Client,
    jar: Arc<Jar>,
}

impl ApiClient {
    pub fn new(config: &AppConfig) -> AppResult<Self> {
        let jar = Arc::new(Jar::default());
        let http = reqwest::Client::builder()
            .cookie_provider(jar.clone())
            .user_agent(concat!("ctfdash/", env!("CARGO_PKG_VERSION")))
            .build()?;

        let client = Self {
            base_url: config.api_base_url.clone(),
            cookie_name: config.session_cookie_name.clone(),
            http,
            jar,
        };
        if let Some(cookie) = &config.session_cookie {
            client.set_session_cookie(cookie);
        }
        Ok(client)
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Seeds the jar with a session cookie obtained from a browser sign-in.
    pub fn set_session_cookie(&self, value: &str) {
        match Url::parse(&self.base_url) {
            Ok(url) => {
                let cookie = format!("{}={}; Path=/", self.cookie_name, value.trim());
                self.jar.add_cookie_str(&cookie, &url);
                tracing::debug!(cookie = %self.cookie_name, "session cookie set");
            }
            Err(e) => tracing::warn!("cannot attach session cookie to '{}': {}", self.base_url, e),
        }
    }

    pub fn clear_session_cookie(&self) {
        if let Ok(url) = Url::parse(&self.base_url) {
            let cookie = format!("{}=; Path=/; Max-Age=0", self.cookie_name);
            self.jar.add_cookie_str(&cookie, &url);
        }
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        self.request(path, RequestOptions::default()).await
    }

    pub async fn request<T: DeserializeOwned>(&self, path: &str, options: RequestOptions) -> ApiResult<T> {
        let method = options.method.unwrap_or(Method::GET);
        let url = self.url(path);

        let mut builder = self
            .http
            .request(method.clone(), &url)
            .header(CONTENT_TYPE, "application/json");
        for (name, value) in &options.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = &options.body {
            builder = builder.json(body);
        }

        let response = match builder.send().await {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!(%method, path, "request failed: {}", e);
                return ApiResult::failure(0, e.to_string(), None);
            }
        };

        let status = response.status();
        let has_json = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(|ct| ct.contains("application/json"))
            .unwrap_or(false);

        let bytes = match response.bytes().await {
            Ok(bytes) => bytes,
            Err(e) => {
                tracing::warn!(%method, path, status = status.as_u16(), "failed to read body: {}", e);
                return ApiResult::failure(status.as_u16(), e.to_string(), None);
            }
        };

        let body: Option<Value> = if has_json && !bytes.is_empty() {
            match serde_json::from_slice(&bytes) {
                Ok(value) => Some(value),
                Err(e) if status.is_success() => {
                    tracing::warn!(%method, path, "unparsable JSON body: {}", e);
                    return ApiResult::failure(status.as_u16(), format!("Invalid JSON response: {}", e), None);
                }
                Err(_) => None,
            }
        } else {
            None
        };

        if !status.is_success() {
            let message = body
                .as_ref()
                .and_then(|b| b.get("message"))
                .and_then(Value::as_str)
                .map(str::to_string)
                .unwrap_or_else(|| format!("HTTP {}", status.as_u16()));
            tracing::info!(%method, path, status = status.as_u16(), "request rejected: {}", message);
            return ApiResult::failure(status.as_u16(), message, body);
        }

        tracing::debug!(%method, path, status = status.as_u16(), "request ok");
        match body {
            None => ApiResult::success(status.as_u16(), None),
            Some(value) => match serde_json::from_value::<T>(value) {
                Ok(data) => ApiResult::success(status.as_u16(), Some(data)),
                Err(e) => {
                    tracing::warn!(%method, path, "unexpected response shape: {}", e);
                    ApiResult::failure(status.as_u16(), format!("Unexpected response: {}", e), None)
                }
            },
        }
    }
}
