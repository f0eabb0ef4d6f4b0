//! Authenticated FHIR server client

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, ACCEPT_CHARSET};
use reqwest::Method;
use serde_json::{Map, Value};
use tokio::sync::Mutex;
use url::Url;

use crate::auth::{Auth, AuthConfig};
use crate::error::{AuthError, CapturedResponse, Error, NetworkError, Result};
use crate::http::{
    http_request, NoHooks, RequestOptions, Response, RetryHooks, Session,
    DEFAULT_MAX_CONNECTIONS, DEFAULT_TIMEOUT,
};

const EPIC_CLIENT_ID: HeaderName = HeaderName::from_static("epic-client-id");

/// Vendor detected from the server's CapabilityStatement
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ServerType {
    #[default]
    Unknown,
    Epic,
    Oracle,
}

#[derive(Clone, Debug)]
pub struct ClientOptions {
    /// Concurrent connection cap; `None` or 0 uses the default of 5
    pub max_connections: Option<usize>,
    pub timeout: Duration,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            max_connections: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

/// Resolve `path` against `base`. Absolute URLs pass through untouched.
pub fn urljoin(base: Option<&str>, path: &str) -> Result<String, AuthError> {
    if Url::parse(path).is_ok_and(|url| url.has_host()) {
        return Ok(path.to_string());
    }
    let Some(base) = base.filter(|b| !b.is_empty()) else {
        return Err(AuthError::BadArguments(
            "You must provide a FHIR server URL.".into(),
        ));
    };
    Url::parse(base)
        .and_then(|base| base.join(path))
        .map(String::from)
        .map_err(|e| AuthError::BadArguments(format!("Invalid FHIR server URL '{base}': {e}")))
}

/// Talks to one FHIR server with a fixed set of credentials.
///
/// Call [`FhirClient::open`] before issuing requests and
/// [`FhirClient::close`] when done (dropping the client also closes it).
///
/// ```no_run
/// # async fn demo() -> fhirline_client::Result<()> {
/// use fhirline_client::{AuthConfig, ClientOptions, FhirClient, NoHooks, RequestOptions};
///
/// let auth = AuthConfig {
///     bearer_token: Some("token".into()),
///     ..Default::default()
/// };
/// let mut client = FhirClient::new(
///     Some("https://fhir.example.com/r4"),
///     ["Patient"],
///     auth,
///     ClientOptions::default(),
/// )?;
/// client.open().await?;
/// let response = client
///     .request(reqwest::Method::GET, "Patient/123", RequestOptions::default(), &NoHooks)
///     .await?;
/// println!("{}", response.text().await?);
/// client.close();
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct FhirClient {
    server_root: Option<String>,
    client_id: Option<String>,
    max_connections: usize,
    timeout: Duration,
    auth: Mutex<Auth>,
    session: Option<Session>,
    server_type: ServerType,
    capabilities: Map<String, Value>,
}

impl FhirClient {
    /// Validate credentials and prepare a client. No network traffic happens
    /// until [`FhirClient::open`].
    ///
    /// `resources` scopes the SMART permissions requested.
    pub fn new<I, S>(
        url: Option<&str>,
        resources: I,
        auth: AuthConfig,
        options: ClientOptions,
    ) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        // Keep the last path segment when joining relative paths
        let server_root = url.filter(|u| !u.is_empty()).map(|u| {
            if u.ends_with('/') {
                u.to_string()
            } else {
                format!("{u}/")
            }
        });
        let resources: Vec<String> = resources.into_iter().map(Into::into).collect();
        let max_connections = options
            .max_connections
            .filter(|&n| n >= 1)
            .unwrap_or(DEFAULT_MAX_CONNECTIONS);

        let client_id = auth.smart_client_id.clone().filter(|id| !id.is_empty());
        let auth = Auth::from_config(server_root.as_deref(), &resources, auth)?;

        Ok(Self {
            server_root,
            client_id,
            max_connections,
            timeout: options.timeout,
            auth: Mutex::new(auth),
            session: None,
            server_type: ServerType::Unknown,
            capabilities: Map::new(),
        })
    }

    /// Start a session, probe the server's capabilities, and authorize.
    ///
    /// On failure the session is released and the client stays closed.
    pub async fn open(&mut self) -> Result<()> {
        let session = Session::new(self.max_connections, self.timeout)?;
        self.read_capabilities(&session).await;
        self.auth.get_mut().authorize(&session, false).await?;
        self.session = Some(session);
        Ok(())
    }

    /// Release the session. Safe to call more than once.
    pub fn close(&mut self) {
        self.session = None;
    }

    pub fn is_open(&self) -> bool {
        self.session.is_some()
    }

    /// Issue a request to `path` (relative to the server root, or absolute).
    ///
    /// Defaults to `Accept: application/fhir+json`; headers in `options`
    /// override the defaults. A 401 triggers one re-authorization.
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        options: RequestOptions,
        hooks: &dyn RetryHooks,
    ) -> Result<Response> {
        let session = self.session.as_ref().ok_or(Error::NotConnected)?;
        let url = urljoin(self.server_root.as_deref(), path)?;

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/fhir+json"));
        headers.insert(ACCEPT_CHARSET, HeaderValue::from_static("UTF-8"));
        headers.extend(options.headers);

        // Epic asks for this header even outside OAuth flows
        if self.server_type == ServerType::Epic {
            if let Some(value) = self
                .client_id
                .as_deref()
                .and_then(|id| HeaderValue::from_str(id).ok())
            {
                headers.insert(EPIC_CLIENT_ID, value);
            }
        }
        headers.extend(self.auth.lock().await.sign_headers());

        let attempts = options.retry.attempts();
        let hooks = ClientHooks {
            inner: hooks,
            auth: &self.auth,
            session,
        };
        let options = RequestOptions {
            headers,
            form: options.form,
            retry: options.retry,
        };
        let result = http_request(session, method, &url, options, &hooks).await;
        if let Err(Error::Network(NetworkError::Temporary { message, .. })) = &result {
            log::error!("Giving up after {attempts} attempts: {message}");
        }
        result
    }

    pub fn server_type(&self) -> ServerType {
        self.server_type
    }

    /// The server's CapabilityStatement, or an empty map if it could not be
    /// read
    pub fn capabilities(&self) -> &Map<String, Value> {
        &self.capabilities
    }

    pub fn server_root(&self) -> Option<&str> {
        self.server_root.as_deref()
    }

    /// Best effort: any failure leaves the vendor unknown
    async fn read_capabilities(&mut self, session: &Session) {
        let Some(root) = self.server_root.as_deref() else {
            return;
        };
        let Ok(url) = urljoin(Some(root), "metadata") else {
            return;
        };

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT_CHARSET, HeaderValue::from_static("UTF-8"));
        let options = RequestOptions {
            headers,
            ..Default::default()
        };
        let response = match http_request(session, Method::GET, &url, options, &NoHooks).await {
            Ok(response) => response,
            Err(e) => {
                log::debug!("Skipping server capabilities: {e}");
                return;
            }
        };
        let Ok(body) = response.bytes().await else {
            return;
        };
        let Ok(Value::Object(capabilities)) = serde_json::from_slice::<Value>(&body) else {
            return;
        };

        let publisher = capabilities.get("publisher").and_then(Value::as_str);
        let software = capabilities
            .get("software")
            .and_then(|s| s.get("name"))
            .and_then(Value::as_str);
        self.server_type = if matches!(publisher, Some("Cerner" | "Oracle Health")) {
            ServerType::Oracle
        } else if software == Some("Epic") {
            ServerType::Epic
        } else {
            ServerType::Unknown
        };
        log::debug!("Detected server type {:?}", self.server_type);
        self.capabilities = capabilities;
    }
}

/// Forwards the caller's hooks and re-authorizes through the client's auth
struct ClientHooks<'a> {
    inner: &'a dyn RetryHooks,
    auth: &'a Mutex<Auth>,
    session: &'a Session,
}

#[async_trait]
impl<'a> RetryHooks for ClientHooks<'a> {
    fn on_request(&self) {
        self.inner.on_request();
    }

    fn on_error(&self, error: &NetworkError) {
        self.inner.on_error(error);
    }

    fn on_retry(&self, response: Option<&CapturedResponse>, delay: Duration) {
        self.inner.on_retry(response, delay);
    }

    async fn reauthorize(&self) -> Option<Result<HeaderMap>> {
        let mut auth = self.auth.lock().await;
        let result = auth.authorize(self.session, true).await;
        Some(result.map(|()| auth.sign_headers()))
    }

    async fn sleep(&self, delay: Duration) {
        self.inner.sleep(delay).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_relative_paths() {
        assert_eq!(
            urljoin(Some("https://example.com/fhir/"), "Patient/1").unwrap(),
            "https://example.com/fhir/Patient/1"
        );
        assert_eq!(
            urljoin(Some("https://example.com/fhir/"), "https://other.example.com/x").unwrap(),
            "https://other.example.com/x"
        );
        assert_eq!(
            urljoin(None, "https://other.example.com/x").unwrap(),
            "https://other.example.com/x"
        );
    }

    #[test]
    fn relative_path_needs_a_root() {
        assert_eq!(
            urljoin(None, "Patient").unwrap_err(),
            AuthError::BadArguments("You must provide a FHIR server URL.".into())
        );
        assert!(urljoin(Some(""), "Patient").is_err());
    }

    #[test]
    fn root_gets_trailing_slash() {
        let client = FhirClient::new(
            Some("https://example.com/fhir"),
            ["Patient"],
            AuthConfig::default(),
            ClientOptions::default(),
        )
        .unwrap();
        assert_eq!(client.server_root(), Some("https://example.com/fhir/"));
        assert_eq!(client.max_connections, DEFAULT_MAX_CONNECTIONS);
    }

    #[test]
    fn zero_connections_means_default() {
        let client = FhirClient::new(
            None,
            Vec::<String>::new(),
            AuthConfig::default(),
            ClientOptions {
                max_connections: Some(0),
                ..Default::default()
            },
        )
        .unwrap();
        assert_eq!(client.max_connections, DEFAULT_MAX_CONNECTIONS);
    }

    #[tokio::test]
    async fn request_before_open_fails() {
        let client = FhirClient::new(
            None,
            ["Patient"],
            AuthConfig::default(),
            ClientOptions::default(),
        )
        .unwrap();
        let err = client
            .request(Method::GET, "https://example.com/", RequestOptions::default(), &NoHooks)
            .await
            .unwrap_err();
        assert!(matches!(err, Error::NotConnected));
    }
}
