use std::io::Write;

use article_digest::client::{HttpBackend, SummarizeBackend};
use article_digest::config::load_config;
use article_digest::SummarizeRequest;
use serde_json::json;
use tempfile::NamedTempFile;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[tokio::test]
async fn test_configured_backend_sends_user_agent() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/summarize"))
        .and(header("user-agent", "NewsroomDigest/3.2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "original_text": "text",
            "extractive_summary": "text",
            "abstractive_summary": "text",
            "original_stats": { "word_count": 1 },
            "extractive_stats": { "word_count": 1 }
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let file = write_config(&format!(
        r#"
[backend]
endpoint = "{}/api/summarize"
timeout-secs = 5

[client]
name = "NewsroomDigest"
version = "3.2"
"#,
        mock_server.uri()
    ));

    let config = load_config(file.path()).expect("Config should load");
    let backend = HttpBackend::new(&config).unwrap();

    let response = backend
        .summarize(&SummarizeRequest::Text("text".to_string()))
        .await
        .expect("Backend should answer");

    assert_eq!(response.original_stats.word_count, 1);
    assert_eq!(response.status, None);
}

#[test]
fn test_config_rejects_non_http_endpoint() {
    let file = write_config("[backend]\nendpoint = \"ftp://127.0.0.1/summarize\"\n");
    assert!(load_config(file.path()).is_err());
}
