//! Email service module

use async_trait::async_trait;

#[cfg(test)]
use mockall::mock;

mod errors;
mod message;

pub use errors::MailerError;
pub use message::Message;

/// Email service
#[async_trait]
pub trait Mailer: Clone + Send + Sync + 'static {
    /// Send an email
    ///
    /// # Arguments
    /// * `message` - The [`Message`] to deliver. When it has no sender, the
    ///   mailer's configured sender is used.
    ///
    /// # Returns
    /// A [`Result`] indicating success or failure.
    async fn send(&self, message: &Message) -> Result<(), MailerError>;
}

#[cfg(test)]
mock! {
    pub Mailer {}

    impl Clone for Mailer {
        fn clone(&self) -> Self;
    }

    #[async_trait]
    impl Mailer for Mailer {
        async fn send(&self, message: &Message) -> Result<(), MailerError>;
    }
}
