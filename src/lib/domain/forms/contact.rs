//! Contact form

use askama::Template;

use super::{Form, RenderedEmail, Submission};

/// The website's contact form
#[derive(Debug)]
pub struct ContactForm;

/// Contact form email template
#[derive(Debug, Template)]
#[template(path = "emails/forms/contact.html")]
pub struct ContactEmailTemplate<'a> {
    /// The submitter's name
    pub name: &'a str,

    /// The submitter's email address
    pub email: &'a str,

    /// The subject the submitter chose
    pub subject: &'a str,

    /// The message, split on newlines
    pub message_lines: Vec<&'a str>,
}

impl<'a> ContactEmailTemplate<'a> {
    /// Creates the template for a validated contact submission
    pub fn new(submission: &'a Submission) -> Self {
        Self {
            name: submission.get("name"),
            email: submission.get("email"),
            subject: submission.get("subject"),
            message_lines: submission.get("message").split('\n').collect(),
        }
    }

    /// Renders the plain text version of the email
    pub fn render_plain(&self) -> String {
        format!(
            "Name: {name}\nEmail: {email}\nSubject: {subject}\n\nMessage:\n{message}\n",
            name = self.name,
            email = self.email,
            subject = self.subject,
            message = self.message_lines.join("\n"),
        )
    }
}

impl Form for ContactForm {
    const NAME: &'static str = "contact";
    const REQUIRED_FIELDS: &'static [&'static str] = &["name", "email", "subject", "message"];
    const EMAIL_FIELDS: &'static [&'static str] = &["email"];
    const REPLY_TO_FIELD: Option<&'static str> = Some("email");
    const SUCCESS_MESSAGE: &'static str =
        "Your message has been sent successfully! We will get back to you soon.";
    const FAILURE_MESSAGE: &'static str = "Failed to send message. Please try again later.";

    fn subject(submission: &Submission) -> String {
        format!("Contact Form Submission: {}", submission.get("subject"))
    }

    fn render(submission: &Submission) -> Result<RenderedEmail, askama::Error> {
        let template = ContactEmailTemplate::new(submission);

        Ok(RenderedEmail {
            html: template.render()?,
            plain: template.render_plain(),
        })
    }
}
