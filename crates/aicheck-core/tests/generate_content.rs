use aicheck_core::{CheckConfig, build_client, build_generate_content, send};
use aicheck_protocol::generate_content::{
    Content, GenerateContentPath, GenerateContentRequest, GenerateContentRequestBody, Part,
};
use serde_json::json;

fn smoke_request() -> GenerateContentRequest {
    GenerateContentRequest {
        path: GenerateContentPath {
            model: "gemini-1.5-flash".to_string(),
        },
        body: GenerateContentRequestBody {
            contents: vec![Content {
                parts: vec![Part::text("Hello, how are you?")],
                role: None,
            }],
        },
    }
}

fn config_for(base_url: &str) -> CheckConfig {
    CheckConfig {
        api_key: "test-key".to_string(),
        base_url: base_url.to_string(),
        proxy: None,
    }
}

#[tokio::test]
async fn posts_fixed_body_and_returns_status_and_body() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/v1beta/models/gemini-1.5-flash:generateContent")
        .match_query(mockito::Matcher::UrlEncoded(
            "key".to_string(),
            "test-key".to_string(),
        ))
        .match_header("content-type", "application/json")
        .match_body(mockito::Matcher::Json(json!({
            "contents": [{ "parts": [{ "text": "Hello, how are you?" }] }]
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"ok":true}"#)
        .create_async()
        .await;

    let config = config_for(&server.url());
    let upstream = build_generate_content(&config, &smoke_request()).expect("build request");
    let client = build_client(None).expect("build client");
    let resp = send(&client, upstream).await.expect("send");

    mock.assert_async().await;
    assert_eq!(resp.status, 200);
    let value: serde_json::Value = serde_json::from_slice(&resp.body).expect("parse body");
    assert_eq!(value, json!({ "ok": true }));
}

#[tokio::test]
async fn non_success_status_is_data_not_error() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/v1beta/models/gemini-1.5-flash:generateContent")
        .match_query(mockito::Matcher::Any)
        .with_status(429)
        .with_header("content-type", "application/json")
        .with_body(r#"{"error":{"code":429,"status":"RESOURCE_EXHAUSTED"}}"#)
        .create_async()
        .await;

    let config = config_for(&server.url());
    let upstream = build_generate_content(&config, &smoke_request()).expect("build request");
    let client = build_client(None).expect("build client");
    let resp = send(&client, upstream).await.expect("send");

    mock.assert_async().await;
    assert_eq!(resp.status, 429);
    let value: serde_json::Value = serde_json::from_slice(&resp.body).expect("parse body");
    assert_eq!(value["error"]["status"], "RESOURCE_EXHAUSTED");
}

#[tokio::test]
async fn connection_failure_surfaces_as_transport_error() {
    // Nothing listens on the discard port.
    let config = config_for("http://127.0.0.1:9");
    let upstream = build_generate_content(&config, &smoke_request()).expect("build request");
    let client = build_client(None).expect("build client");

    let err = send(&client, upstream).await.unwrap_err();
    assert!(!err.message.is_empty());
}
