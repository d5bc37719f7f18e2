use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt::Display;

/// A short identifier standing in for an original URL.
///
/// Generated identifiers are exactly 8 lowercase hexadecimal characters.
/// Lookups accept any string (see [`Borrow<str>`]), so an arbitrary path
/// segment resolves to "not found" rather than a validation error.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ShortId(String);

/// Number of characters in a generated short id.
pub const SHORT_ID_LENGTH: usize = 8;

impl ShortId {
    /// Creates a new `ShortId` after validating the input.
    ///
    /// Valid ids are exactly 8 characters of `[0-9a-f]`.
    pub fn new(id: impl Into<String>) -> std::result::Result<Self, CoreError> {
        let id = id.into();
        Self::validate(&id)?;
        Ok(Self(id))
    }

    /// Creates a `ShortId` without validation.
    ///
    /// Use this only for ids produced by trusted internal sources
    /// (e.g. generators that are guaranteed to produce valid output).
    pub fn new_unchecked(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Builds the full short URL by appending the id to `host_domain`.
    ///
    /// The host domain is used verbatim.
    pub fn to_url(&self, host_domain: &str) -> String {
        format!("{}/{}", host_domain, self.0)
    }

    /// Returns the short id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn validate(id: &str) -> std::result::Result<(), CoreError> {
        if id.len() != SHORT_ID_LENGTH {
            return Err(CoreError::InvalidShortId(format!(
                "length must be {}, got {}",
                SHORT_ID_LENGTH,
                id.len()
            )));
        }

        if !id.chars().all(|c| matches!(c, '0'..='9' | 'a'..='f')) {
            return Err(CoreError::InvalidShortId(format!(
                "must contain only lowercase hexadecimal characters: '{}'",
                id
            )));
        }

        Ok(())
    }
}

impl Display for ShortId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for ShortId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ShortId {
    type Error = CoreError;

    fn try_from(value: String) -> std::result::Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ShortId> for String {
    fn from(value: ShortId) -> Self {
        value.0
    }
}
