use bytes::Bytes;

use aicheck_protocol::generate_content::GenerateContentRequest;

use crate::config::CheckConfig;
use crate::headers::{Headers, header_set};

/// A fully built upstream POST, ready to hand to the client.
#[derive(Debug, Clone)]
pub struct UpstreamHttpRequest {
    pub url: String,
    pub headers: Headers,
    pub body: Bytes,
}

pub fn build_generate_content(
    config: &CheckConfig,
    req: &GenerateContentRequest,
) -> Result<UpstreamHttpRequest, serde_json::Error> {
    let path = format!(
        "/v1beta/{}:generateContent",
        normalize_model_name(&req.path.model)
    );
    let url = format!(
        "{}?key={}",
        build_url(&config.base_url, &path),
        urlencoding::encode(&config.api_key)
    );
    let body = serde_json::to_vec(&req.body)?;
    let mut headers = Headers::new();
    header_set(&mut headers, "Content-Type", "application/json");
    header_set(&mut headers, "Accept", "application/json");
    Ok(UpstreamHttpRequest {
        url,
        headers,
        body: Bytes::from(body),
    })
}

fn normalize_model_name(model: &str) -> String {
    if model.starts_with("models/") {
        model.to_string()
    } else {
        format!("models/{model}")
    }
}

fn build_url(base_url: &str, path: &str) -> String {
    let base = base_url.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    format!("{base}/{path}")
}
