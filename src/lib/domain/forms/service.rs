//! Form relay service

use std::sync::Arc;

use tracing::info;

use crate::domain::communication::{
    email_addresses::EmailAddress,
    mailer::{Mailer, Message},
};

use super::{errors::SubmissionError, Form, Submission};

/// Sends validated form submissions to a fixed inbox
#[derive(Debug, Clone)]
pub struct FormRelay<M>
where
    M: Mailer,
{
    mailer: Arc<M>,
    recipient: EmailAddress,
}

impl<M> FormRelay<M>
where
    M: Mailer,
{
    /// Creates a new form relay delivering to `recipient`.
    pub fn new(mailer: Arc<M>, recipient: EmailAddress) -> Self {
        Self { mailer, recipient }
    }

    /// The inbox every submission is sent to
    pub fn recipient(&self) -> &EmailAddress {
        &self.recipient
    }

    /// Composes the email for `submission` and sends it once.
    ///
    /// # Returns
    /// - [`Ok`] once the mailer has accepted the email.
    /// - [`Err`] with a [`SubmissionError`] if rendering or delivery failed. Nothing is retried.
    pub async fn submit<F: Form>(&self, submission: &Submission) -> Result<(), SubmissionError> {
        let rendered = F::render(submission)?;

        let message = Message {
            to: self.recipient.clone(),
            from: None,
            reply_to: submission.reply_to().cloned(),
            subject: F::subject(submission),
            html_body: rendered.html,
            plain_body: rendered.plain,
        };

        self.mailer.send(&message).await?;

        info!(form = F::NAME, "form submission sent");

        Ok(())
    }
}
