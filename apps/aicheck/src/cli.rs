use clap::Parser;

use aicheck_core::CheckConfigPatch;

#[derive(Parser)]
#[command(name = "aicheck")]
pub(crate) struct Cli {
    /// API key for the generative-language service. Falls back to GEMINI_API_KEY.
    #[arg(long)]
    pub(crate) api_key: Option<String>,
    /// Endpoint base URL.
    #[arg(long)]
    pub(crate) base_url: Option<String>,
    /// Outbound proxy URL.
    #[arg(long)]
    pub(crate) proxy: Option<String>,
}

impl Cli {
    pub(crate) fn into_patch(self) -> CheckConfigPatch {
        CheckConfigPatch {
            api_key: self.api_key,
            base_url: self.base_url,
            proxy: self.proxy,
        }
    }
}
