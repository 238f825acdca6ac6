pub mod client;
pub mod config;
pub mod headers;
pub mod request;
pub mod upstream;
pub mod usage;

pub use client::build_client;
pub use config::{CheckConfig, CheckConfigPatch, ConfigError, DEFAULT_BASE_URL};
pub use headers::{Headers, header_get, header_set};
pub use request::{UpstreamHttpRequest, build_generate_content};
pub use upstream::{TransportError, TransportErrorKind, UpstreamHttpResponse, send};
pub use usage::{log_usage, parse_generate_response};
