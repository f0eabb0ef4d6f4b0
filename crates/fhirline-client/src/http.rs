//! HTTP plumbing: one-shot requests with error classification, and a
//! retrying wrapper that honors `Retry-After` and re-authorizes on 401.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use chrono::{DateTime, Utc};
use reqwest::header::HeaderMap;
use reqwest::{Method, StatusCode};
use serde_json::Value;
use tokio::sync::{OwnedSemaphorePermit, Semaphore};
use url::Url;

use crate::error::{CapturedResponse, Error, NetworkError, Result};

/// EHRs are busy; keep concurrent connections low by default
pub const DEFAULT_MAX_CONNECTIONS: usize = 5;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(300);

/// Statuses where a retry may succeed. 500 is included because some
/// vendors use it for transient failures.
const TEMPORARY_STATUSES: [u16; 6] = [408, 429, 500, 502, 503, 504];

/// Pooled HTTP client plus a cap on in-flight attempts
#[derive(Clone, Debug)]
pub struct Session {
    client: reqwest::Client,
    permits: Arc<Semaphore>,
    max_connections: usize,
}

impl Session {
    /// Redirects are followed; every attempt is bounded by `timeout`.
    pub fn new(max_connections: usize, timeout: Duration) -> Result<Self> {
        let max_connections = max_connections.max(1);
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .redirect(reqwest::redirect::Policy::limited(10))
            .pool_max_idle_per_host(max_connections)
            .build()?;
        Ok(Self {
            client,
            permits: Arc::new(Semaphore::new(max_connections)),
            max_connections,
        })
    }

    pub fn client(&self) -> &reqwest::Client {
        &self.client
    }

    pub fn max_connections(&self) -> usize {
        self.max_connections
    }
}

/// A successful response. It keeps one of the session's connection slots
/// until the body has been read or the response is dropped.
#[derive(Debug)]
pub struct Response {
    inner: reqwest::Response,
    _permit: OwnedSemaphorePermit,
}

impl Response {
    pub fn status(&self) -> StatusCode {
        self.inner.status()
    }

    pub fn headers(&self) -> &HeaderMap {
        self.inner.headers()
    }

    /// Final URL, after redirects
    pub fn url(&self) -> &Url {
        self.inner.url()
    }

    pub async fn bytes(self) -> reqwest::Result<Bytes> {
        self.inner.bytes().await
    }

    pub async fn text(self) -> reqwest::Result<String> {
        self.inner.text().await
    }

    /// Next piece of the body, or `None` at the end
    pub async fn chunk(&mut self) -> reqwest::Result<Option<Bytes>> {
        self.inner.chunk().await
    }
}

/// Seconds to wait according to a `Retry-After` value.
///
/// Accepts delta-seconds or an HTTP-date. Dates in the past and negative
/// numbers clamp to 0; missing or unparseable values give `default`.
pub fn parse_retry_after(value: Option<&str>, default: u64) -> u64 {
    let Some(value) = value.map(str::trim) else {
        return default;
    };
    if let Ok(seconds) = value.parse::<i64>() {
        return seconds.max(0) as u64;
    }
    match DateTime::parse_from_rfc2822(value) {
        Ok(when) => (when.with_timezone(&Utc) - Utc::now()).num_seconds().max(0) as u64,
        Err(_) => default,
    }
}

/// Minutes to wait between attempts. A final attempt always follows the
/// last delay, so `[1, 1]` means three tries over two minutes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RetryPlan {
    delays: Vec<u64>,
}

impl RetryPlan {
    pub fn new(delays: impl IntoIterator<Item = u64>) -> Self {
        Self {
            delays: delays.into_iter().collect(),
        }
    }

    /// Single attempt, no retries
    pub fn none() -> Self {
        Self { delays: Vec::new() }
    }

    pub fn delays(&self) -> &[u64] {
        &self.delays
    }

    pub fn attempts(&self) -> usize {
        self.delays.len() + 1
    }
}

impl Default for RetryPlan {
    fn default() -> Self {
        Self::new([1, 1])
    }
}

/// Per-call inputs for [`http_request`]
#[derive(Clone, Debug, Default)]
pub struct RequestOptions {
    pub headers: HeaderMap,
    /// URL-encoded form body, re-sent on every attempt
    pub form: Option<Vec<(String, String)>>,
    pub retry: RetryPlan,
}

/// Observation and control points for [`http_request`]. Every method has a
/// no-op default.
#[async_trait]
pub trait RetryHooks: Send + Sync {
    /// Before each attempt (not before the immediate retry after a 401)
    fn on_request(&self) {}

    /// After each failed attempt, including the last one
    fn on_error(&self, _error: &NetworkError) {}

    /// Right before waiting out a retry delay
    fn on_retry(&self, _response: Option<&CapturedResponse>, _delay: Duration) {}

    /// Fresh headers after a 401. `None` means re-authorization is not
    /// available and the 401 is handled like any other error.
    async fn reauthorize(&self) -> Option<Result<HeaderMap>> {
        None
    }

    async fn sleep(&self, delay: Duration) {
        tokio::time::sleep(delay).await;
    }
}

/// [`RetryHooks`] with nothing overridden
#[derive(Clone, Copy, Debug, Default)]
pub struct NoHooks;

impl RetryHooks for NoHooks {}

/// Send one request and classify the outcome.
///
/// Transport failures are fatal with no response. Non-2xx responses are
/// drained, turned into a readable message, and classified as temporary or
/// fatal by status. A successful response holds its connection slot until
/// its body is consumed, so at most `max_connections` bodies are in flight.
pub async fn request_once(
    session: &Session,
    method: &Method,
    url: &str,
    headers: &HeaderMap,
    form: Option<&[(String, String)]>,
) -> Result<Response, NetworkError> {
    let permit = Arc::clone(&session.permits)
        .acquire_owned()
        .await
        .map_err(|e| NetworkError::Fatal {
            message: e.to_string(),
            response: None,
        })?;

    let mut request = session
        .client
        .request(method.clone(), url)
        .headers(headers.clone());
    if let Some(form) = form {
        request = request.form(form);
    }

    log::debug!("{method} {url}");
    let response = request.send().await.map_err(|e| NetworkError::Fatal {
        message: e.to_string(),
        response: None,
    })?;

    let status = response.status();
    if status.is_success() {
        return Ok(Response {
            inner: response,
            _permit: permit,
        });
    }

    let fallback = match response.error_for_status_ref() {
        Err(e) => e.to_string(),
        Ok(_) => status.to_string(),
    };
    let captured = CapturedResponse {
        status,
        headers: response.headers().clone(),
        url: response.url().to_string(),
        body: response.bytes().await.unwrap_or_default(),
    };
    let detail = describe_failure(&captured)
        .filter(|m| !m.is_empty())
        .unwrap_or(fallback);
    let message = format!(
        "An error occurred when connecting to \"{url}\": [{}] {detail}",
        status.as_u16()
    );

    if TEMPORARY_STATUSES.contains(&status.as_u16()) {
        Err(NetworkError::Temporary {
            message,
            response: Some(captured),
        })
    } else {
        Err(NetworkError::Fatal {
            message,
            response: Some(captured),
        })
    }
}

fn value_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

/// Best human-readable explanation in an error body: OperationOutcome
/// issue, then OAuth2 `error_description` / `error_uri`, then raw text
fn describe_failure(response: &CapturedResponse) -> Option<String> {
    let Ok(Value::Object(body)) = response.json() else {
        return Some(response.text());
    };

    if body.get("resourceType").and_then(Value::as_str) == Some("OperationOutcome") {
        let issue = body.get("issue")?.get(0)?;
        let text = issue
            .get("details")
            .and_then(|d| d.get("text"))
            .and_then(value_text)
            .filter(|t| !t.is_empty());
        return text.or_else(|| issue.get("diagnostics").and_then(value_text));
    }
    if let Some(description) = body.get("error_description") {
        return value_text(description);
    }
    if let Some(uri) = body.get("error_uri") {
        let uri = value_text(uri).unwrap_or_else(|| "None".to_string());
        return Some(format!("visit \"{uri}\" for more details"));
    }
    None
}

/// Issue a request, retrying per `options.retry`.
///
/// Temporary failures wait out the plan's delay (shortened, never
/// lengthened, by `Retry-After`) and try again. Fatal failures and the
/// failure of the last attempt are returned. A 401 gets one immediate
/// retry with re-authorized headers that does not use up a plan slot.
pub async fn http_request(
    session: &Session,
    method: Method,
    url: &str,
    options: RequestOptions,
    hooks: &dyn RetryHooks,
) -> Result<Response> {
    let RequestOptions {
        mut headers,
        form,
        retry,
    } = options;
    let delays = retry.delays();

    let mut attempt = 0;
    loop {
        hooks.on_request();

        let mut error =
            match request_once(session, &method, url, &headers, form.as_deref()).await {
                Ok(response) => return Ok(response),
                Err(e) => e,
            };

        if error.status() == Some(StatusCode::UNAUTHORIZED) {
            if let Some(fresh) = hooks.reauthorize().await {
                for (name, value) in &fresh? {
                    headers.insert(name.clone(), value.clone());
                }
                match request_once(session, &method, url, &headers, form.as_deref()).await {
                    Ok(response) => return Ok(response),
                    Err(e) => error = e,
                }
            }
        }

        hooks.on_error(&error);

        let minutes = match delays.get(attempt) {
            Some(&minutes) if !error.is_fatal() => minutes,
            _ => return Err(Error::Network(error)),
        };
        attempt += 1;

        let ceiling = minutes.saturating_mul(60);
        let seconds = match error.response() {
            Some(response) => response.retry_after(ceiling).min(ceiling),
            None => ceiling,
        };
        let wait = Duration::from_secs(seconds);

        log::warn!(
            "{} (attempt {attempt} of {}), retrying in {seconds}s",
            error.message(),
            retry.attempts()
        );
        hooks.on_retry(error.response(), wait);
        hooks.sleep(wait).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn captured(body: &str) -> CapturedResponse {
        CapturedResponse {
            status: StatusCode::BAD_REQUEST,
            headers: HeaderMap::new(),
            url: "https://example.com/".to_string(),
            body: bytes::Bytes::from(body.to_string()),
        }
    }

    #[test]
    fn retry_after_seconds() {
        assert_eq!(parse_retry_after(Some("10"), 60), 10);
        assert_eq!(parse_retry_after(Some(" 0 "), 60), 0);
        assert_eq!(parse_retry_after(Some("-5"), 60), 0);
    }

    #[test]
    fn retry_after_dates() {
        assert_eq!(
            parse_retry_after(Some("Wed, 21 Oct 2015 07:28:00 GMT"), 60),
            0
        );

        let soon = (Utc::now() + chrono::Duration::seconds(600)).to_rfc2822();
        let parsed = parse_retry_after(Some(&soon), 60);
        assert!((595..=600).contains(&parsed), "got {parsed}");
    }

    #[test]
    fn retry_after_fallback() {
        assert_eq!(parse_retry_after(None, 42), 42);
        assert_eq!(parse_retry_after(Some("soon"), 42), 42);
        assert_eq!(parse_retry_after(Some(""), 42), 42);
        assert_eq!(parse_retry_after(Some("1.5"), 42), 42);
    }

    #[test]
    fn retry_plan_defaults() {
        let plan = RetryPlan::default();
        assert_eq!(plan.delays(), &[1, 1]);
        assert_eq!(plan.attempts(), 3);
        assert_eq!(RetryPlan::none().attempts(), 1);
    }

    #[test]
    fn failure_messages() {
        let outcome = r#"{"resourceType": "OperationOutcome", "issue": [{"details": {"text": "bad scope"}, "diagnostics": "ignored"}]}"#;
        assert_eq!(describe_failure(&captured(outcome)).as_deref(), Some("bad scope"));

        let diagnostics =
            r#"{"resourceType": "OperationOutcome", "issue": [{"diagnostics": "no such patient"}]}"#;
        assert_eq!(
            describe_failure(&captured(diagnostics)).as_deref(),
            Some("no such patient")
        );

        let oauth = r#"{"error": "invalid_client", "error_description": "Unknown client"}"#;
        assert_eq!(describe_failure(&captured(oauth)).as_deref(), Some("Unknown client"));

        let uri = r#"{"error_uri": "https://example.com/why"}"#;
        assert_eq!(
            describe_failure(&captured(uri)).as_deref(),
            Some("visit \"https://example.com/why\" for more details")
        );

        assert_eq!(describe_failure(&captured("[1, 2]")).as_deref(), Some("[1, 2]"));
        assert_eq!(describe_failure(&captured("oops")).as_deref(), Some("oops"));
        assert_eq!(describe_failure(&captured("")).as_deref(), Some(""));
        assert_eq!(describe_failure(&captured(r#"{"error": "x"}"#)), None);
    }

    #[test]
    fn session_clamps_connections() {
        let session = Session::new(0, DEFAULT_TIMEOUT).unwrap();
        assert_eq!(session.max_connections(), 1);
    }
}
