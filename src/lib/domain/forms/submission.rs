//! Validated form submission

use std::collections::HashMap;

use crate::domain::communication::email_addresses::EmailAddress;

use super::{errors::ValidationError, Form};

/// The validated fields of one form post
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Submission {
    fields: Vec<(&'static str, String)>,
    reply_to: Option<EmailAddress>,
}

impl Submission {
    /// Extracts and validates the fields of form `F` from the posted values.
    ///
    /// Every required field must be present and non-empty before any email
    /// field is checked. Posted values not named by the form are dropped.
    pub fn extract<F: Form>(mut raw: HashMap<String, String>) -> Result<Self, ValidationError> {
        let mut fields = Vec::with_capacity(F::REQUIRED_FIELDS.len());

        for &name in F::REQUIRED_FIELDS {
            match raw.remove(name) {
                Some(value) if !value.is_empty() => fields.push((name, value)),
                _ => return Err(ValidationError::MissingField(name)),
            }
        }

        let mut submission = Self {
            fields,
            reply_to: None,
        };

        for &name in F::EMAIL_FIELDS {
            EmailAddress::new(submission.get(name))
                .map_err(|err| ValidationError::from_email_error(name, err))?;
        }

        if let Some(name) = F::REPLY_TO_FIELD {
            let address = EmailAddress::new(submission.get(name))
                .map_err(|err| ValidationError::from_email_error(name, err))?;

            submission.reply_to = Some(address);
        }

        Ok(submission)
    }

    /// Returns the value of `name`, or an empty string when the form has no such field.
    pub fn get(&self, name: &str) -> &str {
        self.fields
            .iter()
            .find(|(field, _)| *field == name)
            .map(|(_, value)| value.as_str())
            .unwrap_or_default()
    }

    /// The fields in the order the form declares them
    pub fn fields(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        self.fields.iter().map(|(name, value)| (*name, value.as_str()))
    }

    /// The submitter's address, when the form collects one
    pub fn reply_to(&self) -> Option<&EmailAddress> {
        self.reply_to.as_ref()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use std::collections::HashMap;

    use testresult::TestResult;

    use crate::domain::forms::{errors::ValidationError, Form, RenderedEmail};

    use super::Submission;

    #[derive(Debug)]
    pub(crate) struct TestForm;

    impl Form for TestForm {
        const NAME: &'static str = "test";
        const REQUIRED_FIELDS: &'static [&'static str] = &["name", "email", "note"];
        const EMAIL_FIELDS: &'static [&'static str] = &["email"];
        const REPLY_TO_FIELD: Option<&'static str> = Some("email");
        const SUCCESS_MESSAGE: &'static str = "sent";
        const FAILURE_MESSAGE: &'static str = "not sent";

        fn subject(submission: &Submission) -> String {
            format!("Test: {}", submission.get("name"))
        }

        fn render(submission: &Submission) -> Result<RenderedEmail, askama::Error> {
            Ok(RenderedEmail {
                html: format!("<p>{}</p>", submission.get("note")),
                plain: submission.get("note").to_string(),
            })
        }
    }

    pub(crate) fn fields(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(name, value)| (name.to_string(), value.to_string()))
            .collect()
    }

    #[test]
    fn test_extract_valid_submission() -> TestResult {
        let submission = Submission::extract::<TestForm>(fields(&[
            ("note", "hello"),
            ("email", "jo@x.com"),
            ("name", "Jo"),
            ("unexpected", "dropped"),
        ]))?;

        assert_eq!(
            submission.fields().collect::<Vec<_>>(),
            vec![("name", "Jo"), ("email", "jo@x.com"), ("note", "hello")]
        );
        assert_eq!(
            submission.reply_to().map(ToString::to_string),
            Some("jo@x.com".to_string())
        );
        assert_eq!(submission.get("unexpected"), "");

        Ok(())
    }

    #[test]
    fn test_missing_field_is_rejected() {
        let result = Submission::extract::<TestForm>(fields(&[("name", "Jo"), ("note", "hi")]));

        assert_eq!(result, Err(ValidationError::MissingField("email")));
    }

    #[test]
    fn test_empty_field_is_rejected() {
        let result = Submission::extract::<TestForm>(fields(&[
            ("name", ""),
            ("email", "jo@x.com"),
            ("note", "hi"),
        ]));

        assert_eq!(result, Err(ValidationError::MissingField("name")));
    }

    #[test]
    fn test_whitespace_only_field_counts_as_present() -> TestResult {
        let submission = Submission::extract::<TestForm>(fields(&[
            ("name", " "),
            ("email", "jo@x.com"),
            ("note", "hi"),
        ]))?;

        assert_eq!(submission.get("name"), " ");

        Ok(())
    }

    #[test]
    fn test_presence_is_checked_before_email_format() {
        let result = Submission::extract::<TestForm>(fields(&[("email", "not an email")]));

        assert_eq!(result, Err(ValidationError::MissingField("name")));
    }

    #[test]
    fn test_invalid_email_is_rejected() {
        let result = Submission::extract::<TestForm>(fields(&[
            ("name", "Jo"),
            ("email", "jo@x"),
            ("note", "hi"),
        ]));

        assert_eq!(result, Err(ValidationError::InvalidEmailAddress("email")));
    }
}
