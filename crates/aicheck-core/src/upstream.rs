use std::fmt;
use std::time::Instant;

use bytes::Bytes;
use tracing::{info, warn};

use crate::request::UpstreamHttpRequest;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportErrorKind {
    Dns,
    Connect,
    Tls,
    Timeout,
    Other,
}

impl fmt::Display for TransportErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TransportErrorKind::Dns => "dns",
            TransportErrorKind::Connect => "connect",
            TransportErrorKind::Tls => "tls",
            TransportErrorKind::Timeout => "timeout",
            TransportErrorKind::Other => "other",
        };
        f.write_str(name)
    }
}

#[derive(Debug, thiserror::Error)]
#[error("transport failure ({kind}): {message}")]
pub struct TransportError {
    pub kind: TransportErrorKind,
    pub message: String,
}

#[derive(Debug, Clone)]
pub struct UpstreamHttpResponse {
    pub status: u16,
    pub body: Bytes,
}

/// Sends the built request exactly once and reads the full body. Any status
/// code is returned as data; only transport-level failures are errors.
pub async fn send(
    client: &wreq::Client,
    req: UpstreamHttpRequest,
) -> Result<UpstreamHttpResponse, TransportError> {
    // The query string carries the API key, keep it out of the logs.
    let path = req.url.split('?').next().unwrap_or(&req.url).to_string();
    info!(event = "upstream_request", method = "POST", path = %path);
    let started_at = Instant::now();

    let mut builder = client.request(wreq::Method::POST, &req.url);
    for (k, v) in &req.headers {
        builder = builder.header(k, v);
    }
    builder = builder.body(req.body);

    let resp = match builder.send().await {
        Ok(resp) => resp,
        Err(err) => {
            let err = map_wreq_error(err);
            warn!(
                event = "upstream_response",
                status = "error",
                elapsed_ms = started_at.elapsed().as_millis() as u64,
                error = %err
            );
            return Err(err);
        }
    };

    let status = resp.status().as_u16();
    let body = resp.bytes().await.map_err(map_wreq_error)?;
    info!(
        event = "upstream_response",
        status = status,
        elapsed_ms = started_at.elapsed().as_millis() as u64,
        bytes = body.len()
    );
    Ok(UpstreamHttpResponse { status, body })
}

fn map_wreq_error(err: wreq::Error) -> TransportError {
    TransportError {
        kind: classify_wreq_error(&err),
        message: err.to_string(),
    }
}

fn classify_wreq_error(err: &wreq::Error) -> TransportErrorKind {
    let message = err.to_string().to_ascii_lowercase();
    if err.is_timeout() {
        return TransportErrorKind::Timeout;
    }
    if err.is_connect() {
        if message.contains("dns") || message.contains("resolve") {
            return TransportErrorKind::Dns;
        }
        if message.contains("tls") || message.contains("ssl") {
            return TransportErrorKind::Tls;
        }
        return TransportErrorKind::Connect;
    }
    if err.is_connection_reset() {
        return TransportErrorKind::Connect;
    }
    if message.contains("tls") || message.contains("ssl") {
        return TransportErrorKind::Tls;
    }
    TransportErrorKind::Other
}
