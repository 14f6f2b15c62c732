//! Audience identifier supplied by the user.

use std::fmt;

use crate::domain::AppError;

/// Warning shown when the audience field is left empty.
pub const EMPTY_AUDIENCE_WARNING: &str = "Please specify a target community.";

/// Name of the professional community a guide targets.
///
/// Surrounding whitespace is trimmed; no other format or length rule applies.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Audience(String);

impl Audience {
    pub fn parse(input: &str) -> Result<Self, AppError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(AppError::Validation(EMPTY_AUDIENCE_WARNING.to_string()));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Audience {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Audience {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
