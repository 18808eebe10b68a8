//! Email Address

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref EMAIL_REGEX: Regex = Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap();
}

use std::fmt;

use thiserror::Error;

use EmailAddressError::*;

/// An error that can occur when creating an email address
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EmailAddressError {
    /// The email address is empty
    #[error("email is empty")]
    EmptyEmailAddress,

    /// The email address is invalid
    #[error("email is invalid")]
    InvalidEmailAddress,
}

/// An email address
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Create a new email address.
    ///
    /// The raw value is matched as given, so surrounding whitespace makes it invalid.
    pub fn new(raw: &str) -> Result<Self, EmailAddressError> {
        if raw.is_empty() {
            return Err(EmptyEmailAddress);
        }

        if !EMAIL_REGEX.is_match(raw) {
            return Err(InvalidEmailAddress);
        }

        Ok(Self(raw.to_string()))
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<EmailAddress> for String {
    fn from(email: EmailAddress) -> Self {
        email.0
    }
}

impl std::str::FromStr for EmailAddress {
    type Err = EmailAddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
