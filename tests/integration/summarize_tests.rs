use std::sync::Arc;

use article_digest::client::{HttpBackend, SummarizeBackend, FALLBACK_API_ERROR};
use article_digest::config::Config;
use article_digest::form::{mount, MemoryView, Orchestrator, ViewEvent};
use article_digest::{DigestError, ValidationError};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Creates an orchestrator posting to the given endpoint
fn create_orchestrator(endpoint: String) -> Orchestrator<HttpBackend> {
    let mut config = Config::default();
    config.backend.endpoint = endpoint;
    Orchestrator::new(HttpBackend::new(&config).expect("Failed to build backend"))
}

fn success_body(original: u64, extractive: u64) -> serde_json::Value {
    json!({
        "status": "success",
        "original_text": "The council met on Tuesday to vote on the new budget.",
        "extractive_summary": "The council met on Tuesday.",
        "abstractive_summary": "Council votes on budget.",
        "original_stats": { "word_count": original, "sentence_count": 12 },
        "extractive_stats": { "word_count": extractive, "sentence_count": 3 }
    })
}

/// Returns an endpoint on a port nothing listens on
fn dead_endpoint() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("Failed to bind");
    let port = listener.local_addr().expect("No local addr").port();
    drop(listener);
    format!("http://127.0.0.1:{}/summarize", port)
}

/// Asserts loading was shown once, hidden once, and never left on
fn assert_loading_cycle(view: &MemoryView) {
    assert_eq!(view.count(&ViewEvent::LoadingShown), 1);
    assert_eq!(view.count(&ViewEvent::LoadingHidden), 1);
    assert!(view.position(&ViewEvent::LoadingShown) < view.position(&ViewEvent::LoadingHidden));
    assert!(!view.state.loading_visible);
    assert!(view.state.submit_enabled);
}

#[tokio::test]
async fn test_url_submit_renders_results() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/summarize"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({ "url": "https://news.example.com/budget" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(success_body(1000, 250)))
        .expect(1)
        .mount(&mock_server)
        .await;

    let orchestrator = create_orchestrator(format!("{}/summarize", mock_server.uri()));
    let mut view = MemoryView::new("  https://news.example.com/budget  ", "");

    let report = orchestrator
        .submit(&mut view)
        .await
        .expect("Submit should succeed");

    assert_eq!(report.original_words_display(), "1,000");
    assert_eq!(report.extractive_words_display(), "250");
    assert_eq!(report.reduction_display(), "75.0%");
    assert_eq!(report.abstractive_summary, "Council votes on budget.");

    assert!(view.state.results_visible);
    assert!(!view.state.error_visible);
    assert_loading_cycle(&view);
}

#[tokio::test]
async fn test_text_payload_has_only_text_key() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/summarize"))
        .respond_with(ResponseTemplate::new(200).set_body_json(success_body(80, 20)))
        .mount(&mock_server)
        .await;

    let orchestrator = create_orchestrator(format!("{}/summarize", mock_server.uri()));
    let mut view = MemoryView::new("", "\n  A pasted article body.  \n");

    orchestrator.submit(&mut view).await.unwrap();

    let requests = mock_server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    let body: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
    assert_eq!(body, json!({ "text": "A pasted article body." }));
}

#[tokio::test]
async fn test_validation_errors_send_nothing() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(success_body(10, 5)))
        .expect(0)
        .mount(&mock_server)
        .await;

    let orchestrator = create_orchestrator(format!("{}/summarize", mock_server.uri()));

    let mut both = MemoryView::new("https://news.example.com/a", "and some text");
    let err = orchestrator.submit(&mut both).await.unwrap_err();
    assert!(matches!(
        err,
        DigestError::Validation(ValidationError::MutuallyExclusive)
    ));
    assert!(both.state.error_visible);

    let mut neither = MemoryView::new(" \t ", "   ");
    let err = orchestrator.submit(&mut neither).await.unwrap_err();
    assert!(matches!(err, DigestError::Validation(ValidationError::NoInput)));
    assert_eq!(neither.count(&ViewEvent::LoadingShown), 0);

    assert!(mock_server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_api_error_message_is_surfaced() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/summarize"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({ "error": "invalid URL" })))
        .mount(&mock_server)
        .await;

    let orchestrator = create_orchestrator(format!("{}/summarize", mock_server.uri()));
    let mut view = MemoryView::new("ftp://nope", "");

    let err = orchestrator.submit(&mut view).await.unwrap_err();

    assert!(matches!(err, DigestError::Api { status: 400, .. }));
    assert_eq!(view.error_text, "invalid URL");
    assert!(view.state.error_visible);
    assert!(!view.state.results_visible);
    assert_loading_cycle(&view);
}

#[tokio::test]
async fn test_server_error_with_unparseable_body_falls_back() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/summarize"))
        .respond_with(ResponseTemplate::new(500).set_body_string("<h1>Internal Server Error</h1>"))
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/empty"))
        .respond_with(ResponseTemplate::new(502))
        .mount(&mock_server)
        .await;

    for route in ["/summarize", "/empty"] {
        let orchestrator = create_orchestrator(format!("{}{}", mock_server.uri(), route));
        let mut view = MemoryView::new("", "Some article text.");

        orchestrator.submit(&mut view).await.unwrap_err();

        assert_eq!(view.error_text, FALLBACK_API_ERROR);
        assert_loading_cycle(&view);
    }
}

#[tokio::test]
async fn test_transport_failure_names_endpoint() {
    let endpoint = dead_endpoint();
    let orchestrator = create_orchestrator(endpoint.clone());
    let mut view = MemoryView::new("https://news.example.com/a", "");

    let err = orchestrator.submit(&mut view).await.unwrap_err();

    assert!(matches!(err, DigestError::Connection { .. }));
    assert!(view.error_text.contains(&endpoint));
    assert!(!view.state.results_visible);
    assert_loading_cycle(&view);
}

#[tokio::test]
async fn test_zero_word_original_renders_na() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(success_body(0, 0)))
        .mount(&mock_server)
        .await;

    let orchestrator = create_orchestrator(format!("{}/summarize", mock_server.uri()));
    let mut view = MemoryView::new("", "x");

    let report = orchestrator.submit(&mut view).await.unwrap();
    assert_eq!(report.reduction_display(), "N/A");
}

#[tokio::test]
async fn test_error_then_success_hides_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/summarize"))
        .respond_with(ResponseTemplate::new(200).set_body_json(success_body(400, 100)))
        .mount(&mock_server)
        .await;

    let orchestrator = Arc::new(create_orchestrator(format!(
        "{}/summarize",
        mock_server.uri()
    )));
    let form = mount(
        MemoryView::new("https://news.example.com/a", "also text"),
        Arc::clone(&orchestrator),
    );

    assert!(form.submit().await.unwrap().is_err());
    let view = form.dispose().await.unwrap();
    assert!(view.state.error_visible);

    let form = mount(
        MemoryView {
            text: String::new(),
            ..view
        },
        Arc::clone(&orchestrator),
    );
    let report = form.submit().await.unwrap().unwrap();
    let view = form.dispose().await.unwrap();

    assert_eq!(report.reduction_display(), "75.0%");
    assert!(view.state.results_visible);
    assert!(!view.state.error_visible);
    assert!(view.error_text.is_empty());
    assert_eq!(orchestrator.backend().endpoint(), format!("{}/summarize", mock_server.uri()));
}
