use thiserror::Error;

/// Everything that can go wrong while asking the model for text.
///
/// The `Display` output is what clients see after "Translation failed: " or
/// "Enhancement failed: ", so it is kept readable and carries the upstream
/// detail verbatim.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("GOOGLE_API_KEY is not configured")]
    MissingApiKey,

    #[error("Failed to send request to Gemini API: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Gemini API error ({status}): {body}")]
    Api {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("Failed to parse Gemini response: {0}")]
    Decode(#[source] reqwest::Error),

    #[error("Prompt was blocked by Gemini: {0}")]
    Blocked(String),

    #[error("Gemini response contained no text (finish reason: {0})")]
    EmptyResponse(String),

    /// Failure from a non-Gemini backend.
    #[error("{0}")]
    Other(String),
}
