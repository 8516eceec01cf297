use async_trait::async_trait;

use crate::error::GenerationError;

/// Sampling temperature used for every request.
pub const DEFAULT_TEMPERATURE: f32 = 0.7;

/// Output cap used for every request, in model tokens.
pub const DEFAULT_MAX_OUTPUT_TOKENS: u32 = 512;

/// Tuning parameters passed alongside each prompt.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationSettings {
    pub temperature: f32,
    pub max_output_tokens: u32,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            temperature: DEFAULT_TEMPERATURE,
            max_output_tokens: DEFAULT_MAX_OUTPUT_TOKENS,
        }
    }
}

/// A backend that turns a prompt into free-form text.
///
/// Handlers only see this trait, so tests can swap in a stub without any
/// network access.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(
        &self,
        prompt: &str,
        settings: &GenerationSettings,
    ) -> Result<String, GenerationError>;
}
