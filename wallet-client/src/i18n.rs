//! # Localization
//!
//! The dashboard ships Arabic-first with an English fallback. The full UI
//! string catalog lives with the presentation layer; this module carries only
//! what the data layer itself surfaces: the user-facing error messages and
//! the persisted language preference (with its RTL flag).

use crate::core::error::ApiError;
use crate::storage::{KeyValueStore, LANGUAGE_KEY};

/// Supported UI languages. Arabic is the product default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    Ar,
    En,
}

impl Language {
    pub fn code(&self) -> &'static str {
        match self {
            Language::Ar => "ar",
            Language::En => "en",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "ar" => Some(Language::Ar),
            "en" => Some(Language::En),
            _ => None,
        }
    }

    /// Arabic renders right-to-left.
    pub fn is_rtl(&self) -> bool {
        matches!(self, Language::Ar)
    }
}

/// Read the persisted language preference, defaulting to Arabic.
pub fn load(store: &dyn KeyValueStore) -> Language {
    store
        .get(LANGUAGE_KEY)
        .and_then(|code| Language::from_code(&code))
        .unwrap_or_default()
}

/// Persist a language preference.
pub fn persist(store: &dyn KeyValueStore, language: Language) {
    store.set(LANGUAGE_KEY, language.code());
}

/// One human-readable message per error. Server-sourced messages pass through
/// untouched (the backend localizes its own payloads); everything else gets a
/// generic text in the selected language.
pub fn error_message(error: &ApiError, language: Language) -> String {
    match error {
        ApiError::Server(msg) | ApiError::Validation(msg) => msg.clone(),
        ApiError::Network(_) => match language {
            Language::Ar => "خطأ في الاتصال. يرجى التحقق من الإنترنت والمحاولة مرة أخرى.",
            Language::En => "Connection error. Please check your internet and try again.",
        }
        .to_string(),
        ApiError::Unauthorized => match language {
            Language::Ar => "انتهت صلاحية الجلسة. يرجى تسجيل الدخول مرة أخرى.",
            Language::En => "Your session has expired. Please log in again.",
        }
        .to_string(),
        ApiError::NotFound | ApiError::Unexpected(_) => match language {
            Language::Ar => "حدث خطأ غير متوقع. يرجى المحاولة مرة أخرى.",
            Language::En => "An unexpected error occurred. Please try again.",
        }
        .to_string(),
    }
}

/// Inline message shown by the login form on failure.
pub fn login_failed(language: Language) -> &'static str {
    match language {
        Language::Ar => "فشل في تسجيل الدخول. يرجى التحقق من البيانات.",
        Language::En => "Login failed. Please check your credentials.",
    }
}

/// Inline message shown by the registration form on failure.
pub fn register_failed(language: Language) -> &'static str {
    match language {
        Language::Ar => "فشل في إنشاء الحساب. يرجى المحاولة مرة أخرى.",
        Language::En => "Failed to create the account. Please try again.",
    }
}

/// Raised when starting pool-mode mining without a selected pool.
pub fn pool_required(language: Language) -> &'static str {
    match language {
        Language::Ar => "يرجى اختيار مجمع تعدين قبل البدء.",
        Language::En => "Select a mining pool before starting.",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn arabic_is_the_default_and_rtl() {
        let store = MemoryStore::new();
        let language = load(&store);
        assert_eq!(language, Language::Ar);
        assert!(language.is_rtl());
        assert!(!Language::En.is_rtl());
    }

    #[test]
    fn preference_round_trips_through_storage() {
        let store = MemoryStore::new();
        persist(&store, Language::En);
        assert_eq!(load(&store), Language::En);
    }

    #[test]
    fn unknown_code_falls_back_to_arabic() {
        let store = MemoryStore::new();
        store.set(LANGUAGE_KEY, "fr");
        assert_eq!(load(&store), Language::Ar);
    }

    #[test]
    fn server_message_passes_through() {
        let err = ApiError::Server("رصيد غير كافٍ".to_string());
        assert_eq!(error_message(&err, Language::Ar), "رصيد غير كافٍ");
    }

    #[test]
    fn network_error_gets_generic_text_per_language() {
        let err = ApiError::Network("timeout".to_string());
        assert!(error_message(&err, Language::Ar).contains("الاتصال"));
        assert!(error_message(&err, Language::En).contains("Connection"));
    }
}
