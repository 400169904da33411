//! Field and group validators for the registration form.
//!
//! Field validators receive the raw control value and return the error they
//! detect, if any. Group validators look at several sibling controls at once.

use super::RegistrationForm;
use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

/// Field-level validator: `None` when the value passes.
pub type Validator = Box<dyn Fn(&str) -> Option<ValidationError> + Send + Sync>;

/// Email-shaped pattern. The dot between domain labels is escaped.
pub static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9_.+-]+@[a-zA-Z0-9-]+\.[a-zA-Z0-9.-]+$").expect("valid email pattern")
});

pub static DIGIT_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[0-9]").expect("valid digit pattern"));

pub static LOWERCASE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[a-z]").expect("valid lowercase pattern"));

pub static UPPERCASE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[A-Z]").expect("valid uppercase pattern"));

pub static SPECIAL_CHARACTER_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[!@#$%^&*]").expect("valid special character pattern"));

pub static MIN_LENGTH_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^.{8,}$").expect("valid length pattern"));

/// Everything that can be wrong with the registration form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ValidationError {
    #[error("This field is required")]
    Required,

    #[error("Enter a valid email address")]
    Pattern,

    #[error("Password must contain at least one digit")]
    AtLeastOneDigit,

    #[error("Password must contain at least one lowercase letter")]
    AtLeastOneLowercase,

    #[error("Password must contain at least one uppercase letter")]
    AtLeastOneUppercase,

    #[error("Password must contain at least one special character (!@#$%^&*)")]
    AtLeastOneSpecialCharacter,

    #[error("Password must be at least 8 characters long")]
    AtLeastEightCharacters,

    #[error("Passwords do not match")]
    NotSame,
}

impl ValidationError {
    /// Stable error key, as used by form clients.
    pub fn tag(&self) -> &'static str {
        match self {
            ValidationError::Required => "required",
            ValidationError::Pattern => "pattern",
            ValidationError::AtLeastOneDigit => "at-least-one-digit",
            ValidationError::AtLeastOneLowercase => "at-least-one-lowercase",
            ValidationError::AtLeastOneUppercase => "at-least-one-uppercase",
            ValidationError::AtLeastOneSpecialCharacter => "at-least-one-special-character",
            ValidationError::AtLeastEightCharacters => "at-least-eight-characters",
            ValidationError::NotSame => "notSame",
        }
    }
}

/// Fails on an empty value.
pub fn required() -> Validator {
    Box::new(|value: &str| value.is_empty().then_some(ValidationError::Required))
}

/// Fails with [`ValidationError::Pattern`] when a non-empty value does not match.
pub fn pattern(regex: Regex) -> Validator {
    regex_validator(regex, ValidationError::Pattern)
}

/// Builds a validator that reports `error` when `regex` finds no match.
///
/// Empty values pass; presence is the job of [`required`].
pub fn regex_validator(regex: Regex, error: ValidationError) -> Validator {
    Box::new(move |value: &str| {
        if value.is_empty() {
            return None;
        }
        (!regex.is_match(value)).then_some(error)
    })
}

/// The five password rules, in display order.
pub fn password_rules() -> Vec<Validator> {
    vec![
        regex_validator(DIGIT_PATTERN.clone(), ValidationError::AtLeastOneDigit),
        regex_validator(LOWERCASE_PATTERN.clone(), ValidationError::AtLeastOneLowercase),
        regex_validator(UPPERCASE_PATTERN.clone(), ValidationError::AtLeastOneUppercase),
        regex_validator(
            SPECIAL_CHARACTER_PATTERN.clone(),
            ValidationError::AtLeastOneSpecialCharacter,
        ),
        regex_validator(
            MIN_LENGTH_PATTERN.clone(),
            ValidationError::AtLeastEightCharacters,
        ),
    ]
}

/// Group validator: password and confirmation must be identical.
pub fn check_passwords(group: &RegistrationForm) -> Option<ValidationError> {
    if group.password.value() == group.password_confirmation.value() {
        None
    } else {
        Some(ValidationError::NotSame)
    }
}
