//! Target languages for translation.

use std::fmt;

use utoipa::ToSchema;

/// A language the service will translate into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ToSchema)]
pub enum TargetLanguage {
    Spanish,
    French,
    English,
    Arabic,
}

impl TargetLanguage {
    /// Every accepted language, in the order they are advertised.
    pub const ALL: [TargetLanguage; 4] = [
        TargetLanguage::Spanish,
        TargetLanguage::French,
        TargetLanguage::English,
        TargetLanguage::Arabic,
    ];

    /// Accepted path values, matching `ALL`.
    pub const NAMES: [&'static str; 4] = ["Spanish", "French", "English", "Arabic"];

    /// The English name of the language, also its accepted path value.
    pub fn name(&self) -> &'static str {
        match self {
            TargetLanguage::Spanish => "Spanish",
            TargetLanguage::French => "French",
            TargetLanguage::English => "English",
            TargetLanguage::Arabic => "Arabic",
        }
    }

    /// Look up a language by its exact name.
    ///
    /// # Returns
    /// * `Some(TargetLanguage)` if `value` is one of `NAMES`
    /// * `None` otherwise, including for other capitalisations
    pub fn parse(value: &str) -> Option<TargetLanguage> {
        super::allowed_index(value, &Self::NAMES).map(|i| Self::ALL[i])
    }
}

impl fmt::Display for TargetLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
