use serde::Serialize;
use utoipa::ToSchema;

pub const WELCOME_MESSAGE: &str = "Welcome to the ExpressAbleAI API";

/// Body returned by every endpoint.
///
/// Each variant serializes as a single-key object, e.g.
/// `{"translated_text": "Hola"}` or `{"Error": "..."}`. Failures are
/// reported in the body only; the HTTP status stays 200.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub enum ApiResponse {
    #[serde(rename = "message")]
    Message(String),
    #[serde(rename = "translated_text")]
    Translated(String),
    #[serde(rename = "enhanced_text")]
    Enhanced(String),
    #[serde(rename = "Error")]
    Error(String),
}

impl ApiResponse {
    pub fn welcome() -> Self {
        ApiResponse::Message(WELCOME_MESSAGE.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_welcome_shape() {
        let json = serde_json::to_value(ApiResponse::welcome()).expect("Should serialize");
        assert_eq!(json, json!({"message": "Welcome to the ExpressAbleAI API"}));
    }

    #[test]
    fn test_translated_shape() {
        let json = serde_json::to_value(ApiResponse::Translated("Hola".to_string()))
            .expect("Should serialize");
        assert_eq!(json, json!({"translated_text": "Hola"}));
    }

    #[test]
    fn test_enhanced_shape() {
        let json = serde_json::to_value(ApiResponse::Enhanced("Greetings.".to_string()))
            .expect("Should serialize");
        assert_eq!(json, json!({"enhanced_text": "Greetings."}));
    }

    #[test]
    fn test_error_shape_uses_capitalised_key() {
        let json =
            serde_json::to_value(ApiResponse::Error("nope".to_string())).expect("Should serialize");
        assert_eq!(json, json!({"Error": "nope"}));
    }
}
