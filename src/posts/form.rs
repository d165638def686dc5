//! Validation of submitted post bodies.
use derive_more::Display;

/// Number of characters a post body must exceed to be accepted.
const MIN_BODY_CHARS: usize = 5;

/// A rejected post body.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// The submitted body does not exceed [`MIN_BODY_CHARS`] characters.
    #[display(fmt = "Message is too short")]
    TooShort,
}

/// Validates a submitted post body.
///
/// Accepts any body longer than [`MIN_BODY_CHARS`] characters and
/// returns it unchanged. Length is measured in characters (Unicode
/// code points), not bytes. A missing field is submitted as the empty
/// string and is rejected like any other short body.
///
/// # Errors
/// Errors with [`ValidationError::TooShort`] if the body is too short.
pub fn validate(raw_body: &str) -> Result<&str, ValidationError> {
    if raw_body.chars().count() > MIN_BODY_CHARS {
        Ok(raw_body)
    } else {
        Err(ValidationError::TooShort)
    }
}
