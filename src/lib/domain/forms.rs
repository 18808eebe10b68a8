//! Form submissions relayed by email.
//!
//! Every form follows the same pipeline: extract the fields named by its
//! [`Form`] schema, validate them into a [`Submission`], render the email and
//! hand it to a [`Mailer`](crate::domain::communication::mailer::Mailer)
//! through the [`FormRelay`].

pub mod contact;
pub mod errors;
pub mod partnership;

mod service;
mod submission;

pub use service::FormRelay;
pub use submission::Submission;

/// The rendered bodies of a form email
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderedEmail {
    /// The HTML body
    pub html: String,

    /// The plain text body
    pub plain: String,
}

/// Declarative schema of a form relayed by email
pub trait Form: Send + Sync + 'static {
    /// Name used in logs
    const NAME: &'static str;

    /// Fields that must be present and non-empty, in display order
    const REQUIRED_FIELDS: &'static [&'static str];

    /// Fields that must hold a valid email address
    const EMAIL_FIELDS: &'static [&'static str];

    /// Field whose value becomes the email's reply-to address
    const REPLY_TO_FIELD: Option<&'static str>;

    /// Message returned to the submitter once the email has been sent
    const SUCCESS_MESSAGE: &'static str;

    /// Message returned to the submitter when the email could not be sent
    const FAILURE_MESSAGE: &'static str;

    /// Builds the subject line of the email
    fn subject(submission: &Submission) -> String;

    /// Renders the HTML and plain text bodies of the email
    fn render(submission: &Submission) -> Result<RenderedEmail, askama::Error>;
}
