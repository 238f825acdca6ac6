use bytes::Bytes;
use tracing::info;

use aicheck_protocol::generate_content::GenerateContentResponse;

/// Best-effort typed view of a response body. Bodies that do not decode
/// into the generateContent shape yield nothing.
pub fn parse_generate_response(body: &Bytes) -> Option<GenerateContentResponse> {
    serde_json::from_slice(body).ok()
}

/// Emits one usage log line when the body carries token accounting.
pub fn log_usage(body: &Bytes) {
    let Some(resp) = parse_generate_response(body) else {
        return;
    };
    let Some(usage) = resp.usage_metadata else {
        return;
    };
    info!(
        event = "usage",
        model_version = resp.model_version.as_deref().unwrap_or(""),
        prompt_tokens = usage.prompt_token_count.unwrap_or(0),
        candidates_tokens = usage.candidates_token_count.unwrap_or(0),
        total_tokens = usage.total_token_count.unwrap_or(0)
    );
}
