//! Mailer errors

use lettre::address::AddressError;
use thiserror::Error;

/// Mailer errors
#[derive(Debug, Error)]
pub enum MailerError {
    /// An error occurred while sending the email
    #[error("An error occurred while sending the email")]
    SendError,

    /// Invalid email address
    #[error("Invalid email address")]
    InvalidEmail,

    /// Unknown error
    #[error(transparent)]
    UnknownError(anyhow::Error),
}

impl From<anyhow::Error> for MailerError {
    fn from(err: anyhow::Error) -> Self {
        MailerError::UnknownError(err)
    }
}

impl From<AddressError> for MailerError {
    fn from(_err: AddressError) -> Self {
        MailerError::InvalidEmail
    }
}

impl From<lettre::error::Error> for MailerError {
    fn from(err: lettre::error::Error) -> Self {
        MailerError::UnknownError(err.into())
    }
}

impl From<lettre::transport::smtp::Error> for MailerError {
    fn from(err: lettre::transport::smtp::Error) -> Self {
        MailerError::UnknownError(err.into())
    }
}
