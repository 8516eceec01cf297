//! Request pipeline shared by the HTTP handlers.
//!
//! Each operation is one straight pass: validate the enum parameter, build
//! the prompt, make a single upstream call, map the outcome to an
//! [`ApiResponse`]. Nothing here returns `Err`; every failure becomes an
//! `Error` body.

use tracing::{info, warn};

use crate::catalog::{EnhancementType, TargetLanguage};
use crate::generator::{GenerationSettings, TextGenerator};
use crate::prompt::{build_enhancement_prompt, build_translation_prompt};
use crate::response::ApiResponse;

pub const INVALID_LANGUAGE: &str = "Invalid target_language. Please provide a valid language.";
pub const INVALID_ENHANCEMENT_TYPE: &str =
    "Invalid enhancement_type. Please provide a valid enhancement type.";

/// Translate `text` into `target_language`.
pub async fn translate(
    generator: &dyn TextGenerator,
    text: &str,
    target_language: &str,
) -> ApiResponse {
    let Some(language) = TargetLanguage::parse(target_language) else {
        info!("Rejected translation to unsupported language: {:?}", target_language);
        return ApiResponse::Error(INVALID_LANGUAGE.to_string());
    };

    let prompt = build_translation_prompt(text, language);

    match generator.generate(&prompt, &GenerationSettings::default()).await {
        Ok(translated) => {
            info!("Translated {} chars into {}", text.len(), language);
            ApiResponse::Translated(translated)
        }
        Err(e) => {
            warn!("Translation to {} failed: {}", language, e);
            ApiResponse::Error(format!("Translation failed: {}", e))
        }
    }
}

/// Rewrite `text` in the requested style.
pub async fn enhance(
    generator: &dyn TextGenerator,
    text: &str,
    enhancement_type: &str,
) -> ApiResponse {
    let Some(kind) = EnhancementType::parse(enhancement_type) else {
        info!("Rejected unsupported enhancement type: {:?}", enhancement_type);
        return ApiResponse::Error(INVALID_ENHANCEMENT_TYPE.to_string());
    };

    let prompt = build_enhancement_prompt(text, kind);

    match generator.generate(&prompt, &GenerationSettings::default()).await {
        Ok(enhanced) => {
            info!("Enhanced {} chars ({})", text.len(), kind);
            ApiResponse::Enhanced(enhanced)
        }
        Err(e) => {
            warn!("Enhancement ({}) failed: {}", kind, e);
            ApiResponse::Error(format!("Enhancement failed: {}", e))
        }
    }
}
