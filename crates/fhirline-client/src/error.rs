use bytes::Bytes;
use reqwest::header::HeaderMap;
use reqwest::StatusCode;

/// A failed response, fully read so its connection can be reused
#[derive(Clone, Debug)]
pub struct CapturedResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub url: String,
    pub body: Bytes,
}

impl CapturedResponse {
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    pub fn json(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::from_slice(&self.body)
    }

    /// Seconds requested by the `Retry-After` header, or `default`
    pub fn retry_after(&self, default: u64) -> u64 {
        let value = self
            .headers
            .get(reqwest::header::RETRY_AFTER)
            .and_then(|v| v.to_str().ok());
        crate::http::parse_retry_after(value, default)
    }
}

/// One failed request attempt.
///
/// `response` is `None` when nothing came back (DNS, refused connection,
/// timeout).
#[derive(Debug, thiserror::Error)]
pub enum NetworkError {
    /// Retrying won't help
    #[error("{message}")]
    Fatal {
        message: String,
        response: Option<CapturedResponse>,
    },
    /// Retrying might help; still surfaced once retries run out
    #[error("{message}")]
    Temporary {
        message: String,
        response: Option<CapturedResponse>,
    },
}

impl NetworkError {
    pub fn response(&self) -> Option<&CapturedResponse> {
        match self {
            Self::Fatal { response, .. } | Self::Temporary { response, .. } => response.as_ref(),
        }
    }

    pub fn status(&self) -> Option<StatusCode> {
        self.response().map(|r| r.status)
    }

    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::Fatal { .. })
    }

    pub fn message(&self) -> &str {
        match self {
            Self::Fatal { message, .. } | Self::Temporary { message, .. } => message,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    /// Missing, conflicting, or malformed credentials
    #[error("{0}")]
    BadArguments(String),
    /// The server turned us away during the auth handshake
    #[error("{0}")]
    Failed(String),
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Network(#[from] NetworkError),

    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error("FhirClient is not open; call open() before request()")]
    NotConnected,

    /// Failure reading a successful response body
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
