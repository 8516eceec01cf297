//! Enhancement styles for rewriting text.

use std::fmt;

use utoipa::ToSchema;

/// A style the service can rewrite text towards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ToSchema)]
pub enum EnhancementType {
    Formal,
    Friendly,
    Concise,
    Detailed,
}

impl EnhancementType {
    pub const ALL: [EnhancementType; 4] = [
        EnhancementType::Formal,
        EnhancementType::Friendly,
        EnhancementType::Concise,
        EnhancementType::Detailed,
    ];

    pub const NAMES: [&'static str; 4] = ["Formal", "Friendly", "Concise", "Detailed"];

    /// Accepted path value, e.g. "Formal".
    pub fn name(&self) -> &'static str {
        match self {
            EnhancementType::Formal => "Formal",
            EnhancementType::Friendly => "Friendly",
            EnhancementType::Concise => "Concise",
            EnhancementType::Detailed => "Detailed",
        }
    }

    /// Lowercased form used inside the prompt, e.g. "formal".
    pub fn adjective(&self) -> String {
        self.name().to_lowercase()
    }

    pub fn parse(value: &str) -> Option<EnhancementType> {
        super::allowed_index(value, &Self::NAMES).map(|i| Self::ALL[i])
    }
}

impl fmt::Display for EnhancementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
