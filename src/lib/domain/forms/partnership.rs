//! Partnership application form

use askama::Template;

use super::{Form, RenderedEmail, Submission};

/// The partnership application form
#[derive(Debug)]
pub struct PartnershipForm;

/// Returns the readable label for a partnership type code.
///
/// Unknown codes are returned unchanged.
pub fn partnership_type_label(code: &str) -> &str {
    match code {
        "school" => "School/University",
        "contentCreator" => "Content Creator",
        "examBoard" => "Exam Board",
        "other" => "Other",
        _ => code,
    }
}

/// Partnership application email template
#[derive(Debug, Template)]
#[template(path = "emails/forms/partnership.html")]
pub struct PartnershipEmailTemplate<'a> {
    /// The applying organization
    pub organization_name: &'a str,

    /// The person to contact at the organization
    pub contact_person: &'a str,

    /// The applicant's email address
    pub email: &'a str,

    /// The readable partnership type
    pub partnership_type: &'a str,

    /// The message, split on newlines
    pub message_lines: Vec<&'a str>,
}

impl<'a> PartnershipEmailTemplate<'a> {
    /// Creates the template for a validated partnership submission
    pub fn new(submission: &'a Submission) -> Self {
        Self {
            organization_name: submission.get("organizationName"),
            contact_person: submission.get("contactPerson"),
            email: submission.get("email"),
            partnership_type: partnership_type_label(submission.get("partnershipType")),
            message_lines: submission.get("message").split('\n').collect(),
        }
    }

    /// Renders the plain text version of the email
    pub fn render_plain(&self) -> String {
        format!(
            "New Partnership Application\n\n\
             Organization/Company: {organization}\n\
             Contact Person: {contact}\n\
             Email: {email}\n\
             Partnership Type: {partnership_type}\n\n\
             Message:\n{message}\n",
            organization = self.organization_name,
            contact = self.contact_person,
            email = self.email,
            partnership_type = self.partnership_type,
            message = self.message_lines.join("\n"),
        )
    }
}

impl Form for PartnershipForm {
    const NAME: &'static str = "partnership";
    const REQUIRED_FIELDS: &'static [&'static str] = &[
        "organizationName",
        "contactPerson",
        "email",
        "partnershipType",
        "message",
    ];
    const EMAIL_FIELDS: &'static [&'static str] = &["email"];
    const REPLY_TO_FIELD: Option<&'static str> = Some("email");
    const SUCCESS_MESSAGE: &'static str = "Your partnership application has been submitted successfully! We will review it and get back to you soon.";
    const FAILURE_MESSAGE: &'static str = "Failed to submit application. Please try again later.";

    fn subject(submission: &Submission) -> String {
        format!(
            "Partnership Application: {} - {}",
            submission.get("organizationName"),
            partnership_type_label(submission.get("partnershipType"))
        )
    }

    fn render(submission: &Submission) -> Result<RenderedEmail, askama::Error> {
        let template = PartnershipEmailTemplate::new(submission);

        Ok(RenderedEmail {
            html: template.render()?,
            plain: template.render_plain(),
        })
    }
}
