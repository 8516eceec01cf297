use crate::catalog::{EnhancementType, TargetLanguage};

/// Build the instruction sent upstream for `/translate`.
///
/// The user text is embedded as-is: no escaping and no length limit.
pub fn build_translation_prompt(text: &str, target_language: TargetLanguage) -> String {
    format!(
        "Translate the following text into {}:\n\n{}",
        target_language.name(),
        text
    )
}

/// Build the instruction sent upstream for `/enhance`.
pub fn build_enhancement_prompt(text: &str, enhancement_type: EnhancementType) -> String {
    format!(
        "Enhance the following text to make it more {}:\n\n{}",
        enhancement_type.adjective(),
        text
    )
}
