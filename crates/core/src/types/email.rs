//! Email address validation for the registration flow.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing an [`Email`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum EmailError {
    /// The input string is empty.
    #[error("email cannot be empty")]
    Empty,
    /// The input does not contain exactly one @ symbol.
    #[error("email must contain exactly one @ symbol")]
    MissingAtSymbol,
    /// The local part (before @) is empty or contains whitespace.
    #[error("email local part is invalid")]
    InvalidLocalPart,
    /// The domain part (after @) is empty, has no dot, or contains whitespace.
    #[error("email domain is invalid")]
    InvalidDomain,
}

/// A syntactically valid email address.
///
/// Validation is intentionally shallow - one local part, one domain with at
/// least one dot, no whitespace. The backend does not verify addresses, so
/// anything stricter here would only reject real users.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct Email(String);

impl Email {
    /// Parse and validate an email address.
    ///
    /// # Errors
    ///
    /// Returns an [`EmailError`] describing the first structural problem found.
    pub fn parse(input: &str) -> Result<Self, EmailError> {
        if input.is_empty() {
            return Err(EmailError::Empty);
        }

        let mut parts = input.splitn(2, '@');
        let local = parts.next().unwrap_or_default();
        let Some(domain) = parts.next() else {
            return Err(EmailError::MissingAtSymbol);
        };

        if local.is_empty() || local.chars().any(char::is_whitespace) {
            return Err(EmailError::InvalidLocalPart);
        }
        if domain.is_empty()
            || !domain.contains('.')
            || domain.contains('@')
            || domain.chars().any(char::is_whitespace)
        {
            return Err(EmailError::InvalidDomain);
        }

        Ok(Self(input.to_string()))
    }

    /// The validated address as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_emails() {
        assert!(Email::parse("user@example.com").is_ok());
        assert!(Email::parse("user.name+tag@domain.co.uk").is_ok());
    }

    #[test]
    fn test_empty_is_rejected() {
        assert_eq!(Email::parse(""), Err(EmailError::Empty));
    }

    #[test]
    fn test_missing_at_symbol() {
        assert_eq!(Email::parse("no-at-symbol"), Err(EmailError::MissingAtSymbol));
    }

    #[test]
    fn test_invalid_parts() {
        assert_eq!(Email::parse("@domain.com"), Err(EmailError::InvalidLocalPart));
        assert_eq!(Email::parse("user@"), Err(EmailError::InvalidDomain));
        // A dotless domain is rejected; the backend stores the raw string.
        assert_eq!(Email::parse("user@localhost"), Err(EmailError::InvalidDomain));
        assert_eq!(Email::parse("us er@example.com"), Err(EmailError::InvalidLocalPart));
        assert_eq!(Email::parse("user@exa mple.com"), Err(EmailError::InvalidDomain));
        assert_eq!(Email::parse("a@b@c.com"), Err(EmailError::InvalidDomain));
    }

    #[test]
    fn test_display_and_serde_are_transparent() {
        let email = Email::parse("lan@example.com").unwrap();
        assert_eq!(email.to_string(), "lan@example.com");
        assert_eq!(
            serde_json::to_string(&email).unwrap(),
            "\"lan@example.com\""
        );
    }
}
