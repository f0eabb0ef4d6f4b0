//! Client for FHIR servers: authentication (Basic, bearer, SMART Backend
//! Services), retries with `Retry-After` support, and vendor detection.

pub mod auth;
pub mod client;
pub mod error;
pub mod http;
pub mod secrets;

pub use auth::{Auth, AuthConfig, SmartKey};
pub use client::{urljoin, ClientOptions, FhirClient, ServerType};
pub use error::{AuthError, CapturedResponse, Error, NetworkError, Result};
pub use http::{
    http_request, parse_retry_after, request_once, NoHooks, RequestOptions, Response,
    RetryHooks, RetryPlan, Session,
};
pub use secrets::CliAuthArgs;
