//! Retry, Retry-After, and re-authorization behavior against a mock server

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use fhirline_client::{
    http_request, AuthError, CapturedResponse, Error, NetworkError, NoHooks, RequestOptions,
    RetryHooks, RetryPlan, Session,
};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use reqwest::Method;
use serde_json::json;
use wiremock::matchers::{body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Records every hook call; sleeps return immediately
#[derive(Default)]
struct Recorder {
    requests: AtomicUsize,
    errors: Mutex<Vec<Option<u16>>>,
    retries: Mutex<Vec<(Option<u16>, Duration)>>,
    sleeps: Mutex<Vec<Duration>>,
    reauth_calls: AtomicUsize,
    reauth: Option<Result<HeaderMap, AuthError>>,
}

impl Recorder {
    fn reauthorizing_with(token: &str) -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {token}")).unwrap(),
        );
        Self {
            reauth: Some(Ok(headers)),
            ..Default::default()
        }
    }

    fn sleeps(&self) -> Vec<Duration> {
        self.sleeps.lock().unwrap().clone()
    }
}

#[async_trait]
impl RetryHooks for Recorder {
    fn on_request(&self) {
        self.requests.fetch_add(1, Ordering::SeqCst);
    }

    fn on_error(&self, error: &NetworkError) {
        self.errors
            .lock()
            .unwrap()
            .push(error.status().map(|s| s.as_u16()));
    }

    fn on_retry(&self, response: Option<&CapturedResponse>, delay: Duration) {
        self.retries
            .lock()
            .unwrap()
            .push((response.map(|r| r.status.as_u16()), delay));
    }

    async fn reauthorize(&self) -> Option<fhirline_client::Result<HeaderMap>> {
        self.reauth_calls.fetch_add(1, Ordering::SeqCst);
        self.reauth
            .clone()
            .map(|result| result.map_err(Error::from))
    }

    async fn sleep(&self, delay: Duration) {
        self.sleeps.lock().unwrap().push(delay);
    }
}

fn session() -> Session {
    Session::new(5, Duration::from_secs(30)).unwrap()
}

fn plan(delays: &[u64]) -> RequestOptions {
    RequestOptions {
        retry: RetryPlan::new(delays.iter().copied()),
        ..Default::default()
    }
}

#[tokio::test]
async fn success_needs_one_attempt() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/ok"))
        .respond_with(ResponseTemplate::new(200).set_body_string("hi"))
        .expect(1)
        .mount(&server)
        .await;

    let hooks = Recorder::default();
    let url = format!("{}/ok", server.uri());
    let response = http_request(&session(), Method::GET, &url, RequestOptions::default(), &hooks)
        .await
        .unwrap();

    assert_eq!(response.text().await.unwrap(), "hi");
    assert_eq!(hooks.requests.load(Ordering::SeqCst), 1);
    assert!(hooks.errors.lock().unwrap().is_empty());
}

#[tokio::test]
async fn temporary_errors_follow_the_plan() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .expect(3)
        .mount(&server)
        .await;

    let hooks = Recorder::default();
    let url = format!("{}/busy", server.uri());
    let err = http_request(&session(), Method::GET, &url, plan(&[1, 2]), &hooks)
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Network(NetworkError::Temporary { .. })));
    assert_eq!(
        hooks.sleeps(),
        vec![Duration::from_secs(60), Duration::from_secs(120)]
    );
    assert_eq!(hooks.requests.load(Ordering::SeqCst), 3);
    assert_eq!(*hooks.errors.lock().unwrap(), vec![Some(503); 3]);
    assert_eq!(
        *hooks.retries.lock().unwrap(),
        vec![
            (Some(503), Duration::from_secs(60)),
            (Some(503), Duration::from_secs(120))
        ]
    );
}

#[tokio::test]
async fn shorter_retry_after_wins() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(429).insert_header("Retry-After", "10"))
        .mount(&server)
        .await;

    let hooks = Recorder::default();
    let url = format!("{}/slow", server.uri());
    http_request(&session(), Method::GET, &url, plan(&[2]), &hooks)
        .await
        .unwrap_err();

    assert_eq!(hooks.sleeps(), vec![Duration::from_secs(10)]);
}

#[tokio::test]
async fn longer_retry_after_is_capped() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(429).insert_header("Retry-After", "200"))
        .mount(&server)
        .await;

    let hooks = Recorder::default();
    let url = format!("{}/slow", server.uri());
    http_request(&session(), Method::GET, &url, plan(&[2]), &hooks)
        .await
        .unwrap_err();

    assert_eq!(hooks.sleeps(), vec![Duration::from_secs(120)]);
}

#[tokio::test]
async fn recovers_after_temporary_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/token"))
        .respond_with(ResponseTemplate::new(500))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/token"))
        .and(body_string_contains("grant_type=client_credentials"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
        .mount(&server)
        .await;

    let hooks = Recorder::default();
    let url = format!("{}/token", server.uri());
    let options = RequestOptions {
        form: Some(vec![(
            "grant_type".to_string(),
            "client_credentials".to_string(),
        )]),
        ..plan(&[1])
    };
    let response = http_request(&session(), Method::POST, &url, options, &hooks)
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
    assert_eq!(hooks.sleeps(), vec![Duration::from_secs(60)]);

    // Both attempts carried the form body
    let received = server.received_requests().await.unwrap();
    assert_eq!(received.len(), 2);
    for request in received {
        assert_eq!(
            String::from_utf8_lossy(&request.body),
            "grant_type=client_credentials"
        );
    }
}

#[tokio::test]
async fn huge_delays_saturate() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let hooks = Recorder::default();
    let url = format!("{}/Patient", server.uri());
    let response = http_request(&session(), Method::GET, &url, plan(&[u64::MAX]), &hooks)
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
    assert_eq!(hooks.sleeps(), vec![Duration::from_secs(u64::MAX)]);
}

#[tokio::test]
async fn unread_body_keeps_its_connection_slot() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("bundle"))
        .mount(&server)
        .await;

    let session = &Session::new(1, Duration::from_secs(30)).unwrap();
    let url = &format!("{}/Patient", server.uri());
    let get = || http_request(session, Method::GET, url, RequestOptions::default(), &NoHooks);

    let first = get().await.unwrap();
    let queued = tokio::time::timeout(Duration::from_millis(200), get()).await;
    assert!(queued.is_err(), "second request ran while a body was open");
    assert_eq!(server.received_requests().await.unwrap().len(), 1);

    // Reading the body frees the slot
    assert_eq!(first.text().await.unwrap(), "bundle");
    let second = get().await.unwrap();

    // So does dropping the response
    drop(second);
    let third = get().await.unwrap();
    assert_eq!(third.text().await.unwrap(), "bundle");
    assert_eq!(server.received_requests().await.unwrap().len(), 3);
}

#[tokio::test]
async fn fatal_errors_are_not_retried() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "resourceType": "OperationOutcome",
            "issue": [{"severity": "error", "code": "not-found", "diagnostics": "No such patient"}],
        })))
        .expect(1)
        .mount(&server)
        .await;

    let hooks = Recorder::default();
    let url = format!("{}/Patient/x", server.uri());
    let err = http_request(&session(), Method::GET, &url, plan(&[1, 1]), &hooks)
        .await
        .unwrap_err();

    let Error::Network(network) = err else {
        panic!("expected a network error");
    };
    assert!(network.is_fatal());
    assert_eq!(
        network.to_string(),
        format!("An error occurred when connecting to \"{url}\": [404] No such patient")
    );
    assert_eq!(network.response().unwrap().json().unwrap()["issue"][0]["code"], "not-found");
    assert!(hooks.sleeps().is_empty());
    assert_eq!(hooks.requests.load(Ordering::SeqCst), 1);
    assert_eq!(hooks.errors.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn error_message_falls_back_to_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(400))
        .mount(&server)
        .await;

    let url = format!("{}/bad", server.uri());
    let err = http_request(&session(), Method::GET, &url, plan(&[]), &Recorder::default())
        .await
        .unwrap_err();

    let message = err.to_string();
    assert!(
        message.starts_with(&format!("An error occurred when connecting to \"{url}\": [400] ")),
        "{message}"
    );
    assert!(message.contains("400 Bad Request"), "{message}");
}

#[tokio::test]
async fn transport_failure_is_fatal_without_response() {
    let hooks = Recorder::default();
    // Nothing listens on port 1
    let err = http_request(
        &session(),
        Method::GET,
        "http://127.0.0.1:1/metadata",
        plan(&[1]),
        &hooks,
    )
    .await
    .unwrap_err();

    let Error::Network(network) = err else {
        panic!("expected a network error");
    };
    assert!(network.is_fatal());
    assert!(network.response().is_none());
    assert!(hooks.sleeps().is_empty());
    assert_eq!(*hooks.errors.lock().unwrap(), vec![None]);
}

#[tokio::test]
async fn unauthorized_reauthorizes_once() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(header("authorization", "Bearer fresh"))
        .respond_with(ResponseTemplate::new(200).set_body_string("welcome"))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(401))
        .expect(1)
        .mount(&server)
        .await;

    let hooks = Recorder::reauthorizing_with("fresh");
    let mut options = plan(&[1]);
    options
        .headers
        .insert(AUTHORIZATION, HeaderValue::from_static("Bearer stale"));
    let url = format!("{}/Patient", server.uri());
    let response = http_request(&session(), Method::GET, &url, options, &hooks)
        .await
        .unwrap();

    assert_eq!(response.text().await.unwrap(), "welcome");
    assert_eq!(hooks.reauth_calls.load(Ordering::SeqCst), 1);
    // The immediate retry is not a new plan attempt
    assert_eq!(hooks.requests.load(Ordering::SeqCst), 1);
    assert!(hooks.errors.lock().unwrap().is_empty());
    assert!(hooks.sleeps().is_empty());
}

#[tokio::test]
async fn persistent_unauthorized_is_fatal() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(401))
        .expect(2)
        .mount(&server)
        .await;

    let hooks = Recorder::reauthorizing_with("still-bad");
    let url = format!("{}/Patient", server.uri());
    let err = http_request(&session(), Method::GET, &url, plan(&[1, 1]), &hooks)
        .await
        .unwrap_err();

    let Error::Network(network) = err else {
        panic!("expected a network error");
    };
    assert!(network.is_fatal());
    assert_eq!(network.status().map(|s| s.as_u16()), Some(401));
    assert_eq!(hooks.reauth_calls.load(Ordering::SeqCst), 1);
    assert_eq!(*hooks.errors.lock().unwrap(), vec![Some(401)]);
    assert!(hooks.sleeps().is_empty());
}

#[tokio::test]
async fn unauthorized_without_reauth_is_fatal() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(401))
        .expect(1)
        .mount(&server)
        .await;

    let hooks = Recorder::default();
    let url = format!("{}/Patient", server.uri());
    let err = http_request(&session(), Method::GET, &url, plan(&[1]), &hooks)
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Network(NetworkError::Fatal { .. })));
    assert_eq!(hooks.reauth_calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn reauth_failure_propagates() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(401))
        .expect(1)
        .mount(&server)
        .await;

    let hooks = Recorder {
        reauth: Some(Err(AuthError::Failed("token endpoint said no".into()))),
        ..Default::default()
    };
    let url = format!("{}/Patient", server.uri());
    let err = http_request(&session(), Method::GET, &url, plan(&[1]), &hooks)
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Auth(AuthError::Failed(ref m)) if m == "token endpoint said no"));
}
