//! Form submission errors

use thiserror::Error;
use tracing::debug;

use crate::domain::communication::{email_addresses::EmailAddressError, mailer::MailerError};

/// Errors raised while validating a submission
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is absent or empty
    #[error("required field \"{0}\" is missing")]
    MissingField(&'static str),

    /// An email field does not hold a valid address
    #[error("field \"{0}\" is not a valid email address")]
    InvalidEmailAddress(&'static str),
}

/// Errors raised while relaying a valid submission
#[derive(Debug, Error)]
pub enum SubmissionError {
    /// The email body could not be rendered
    #[error("could not render email: {0}")]
    Composition(#[from] askama::Error),

    /// The mailer failed to deliver the email
    #[error("could not send email: {0}")]
    Delivery(#[from] MailerError),
}

impl ValidationError {
    pub(super) fn from_email_error(field: &'static str, err: EmailAddressError) -> Self {
        debug!("EmailAddressError -> ValidationError");

        match err {
            EmailAddressError::EmptyEmailAddress => ValidationError::MissingField(field),
            EmailAddressError::InvalidEmailAddress => ValidationError::InvalidEmailAddress(field),
        }
    }
}
