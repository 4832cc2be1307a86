/// Validation utilities for the login and registration forms.
///
/// Messages are localized here so forms can render them inline without
/// another translation pass.
use crate::i18n::Language;

pub struct ValidationResult {
    pub is_valid: bool,
    pub error: Option<String>,
}

impl ValidationResult {
    pub fn ok() -> Self {
        Self {
            is_valid: true,
            error: None,
        }
    }

    pub fn err(message: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            error: Some(message.into()),
        }
    }
}

/// Validate email format
pub fn validate_email(email: &str, language: Language) -> ValidationResult {
    let invalid = match language {
        Language::Ar => "يرجى إدخال بريد إلكتروني صحيح.",
        Language::En => "Please enter a valid email address.",
    };

    if email.is_empty() {
        return ValidationResult::err(invalid);
    }

    let parts: Vec<&str> = email.split('@').collect();
    if parts.len() != 2 || parts[0].is_empty() || parts[1].is_empty() || !parts[1].contains('.') {
        return ValidationResult::err(invalid);
    }

    ValidationResult::ok()
}

/// Validate password length
pub fn validate_password(password: &str, language: Language) -> ValidationResult {
    if password.len() < 6 {
        return ValidationResult::err(match language {
            Language::Ar => "يجب أن تتكون كلمة المرور من 6 أحرف على الأقل.",
            Language::En => "Password must be at least 6 characters.",
        });
    }
    ValidationResult::ok()
}

/// Validate that the password and its confirmation match
pub fn validate_passwords_match(
    password: &str,
    confirm: &str,
    language: Language,
) -> ValidationResult {
    if password != confirm {
        return ValidationResult::err(match language {
            Language::Ar => "كلمتا المرور غير متطابقتين.",
            Language::En => "Passwords do not match.",
        });
    }
    ValidationResult::ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_validation() {
        assert!(validate_email("test@example.com", Language::En).is_valid);
        assert!(validate_email("user@domain.co.uk", Language::En).is_valid);
        assert!(!validate_email("", Language::En).is_valid);
        assert!(!validate_email("invalid", Language::En).is_valid);
        assert!(!validate_email("@example.com", Language::En).is_valid);
        assert!(!validate_email("test@", Language::En).is_valid);
    }

    #[test]
    fn test_password_validation() {
        assert!(validate_password("secret1", Language::En).is_valid);
        assert!(!validate_password("short", Language::En).is_valid);
    }

    #[test]
    fn test_passwords_match() {
        assert!(validate_passwords_match("secret1", "secret1", Language::En).is_valid);
        let result = validate_passwords_match("secret1", "secret2", Language::Ar);
        assert!(!result.is_valid);
        assert!(result.error.unwrap().contains("غير متطابقتين"));
    }
}
