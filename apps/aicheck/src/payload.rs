use aicheck_protocol::generate_content::{
    Content, GenerateContentPath, GenerateContentRequest, GenerateContentRequestBody, Part,
};

pub(crate) const MODEL: &str = "gemini-1.5-flash";
pub(crate) const PROMPT: &str = "Hello, how are you?";

/// The fixed smoke-test request. Takes no outside input.
pub(crate) fn smoke_request() -> GenerateContentRequest {
    GenerateContentRequest {
        path: GenerateContentPath {
            model: MODEL.to_string(),
        },
        body: GenerateContentRequestBody {
            contents: vec![Content {
                parts: vec![Part::text(PROMPT)],
                role: None,
            }],
        },
    }
}
