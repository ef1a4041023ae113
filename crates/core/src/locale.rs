//! Interface language selection.

use crate::error::CoreError;

pub const LANG_EN: &str = "en";
pub const LANG_FR: &str = "fr";
pub const LANG_AR: &str = "ar";
pub const LANG_ES: &str = "es";

pub const SUPPORTED_LANGUAGES: &[&str] = &[LANG_EN, LANG_FR, LANG_AR, LANG_ES];

pub const DEFAULT_LANGUAGE: &str = LANG_EN;

pub fn validate_language(lang: &str) -> Result<(), CoreError> {
    if SUPPORTED_LANGUAGES.contains(&lang) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Unsupported language: '{lang}'. Supported: {}",
            SUPPORTED_LANGUAGES.join(", ")
        )))
    }
}

/// Whether the language is written right-to-left.
pub fn is_rtl(lang: &str) -> bool {
    lang == LANG_AR
}
