//! Contact form handler

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    domain::{communication::mailer::Mailer, forms::contact::ContactForm},
    infrastructure::http::{
        errors::{ApiError, MessageResponse},
        extract::FormFields,
        handlers::api::forms,
        state::AppState,
    },
};

/// Contact form request body
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct ContactBody {
    /// The submitter's name
    #[schema(example = "Jo Bloggs")]
    name: String,

    /// The submitter's email address
    #[schema(example = "jo@example.com")]
    email: String,

    /// The subject of the message
    #[schema(example = "Hello")]
    subject: String,

    /// The message
    #[schema(example = "I have a question about your courses.")]
    message: String,
}

/// Send a contact form message
#[utoipa::path(
    post,
    operation_id = "submit_contact",
    tag = "Forms",
    path = "/api/contact",
    request_body = ContactBody,
    responses(
        (status = StatusCode::OK, description = "Message sent", body = MessageResponse),
        (status = StatusCode::BAD_REQUEST, description = "Missing field or invalid email address", body = MessageResponse),
        (status = StatusCode::METHOD_NOT_ALLOWED, description = "Method not allowed", body = MessageResponse),
        (status = StatusCode::INTERNAL_SERVER_ERROR, description = "The email could not be sent", body = MessageResponse),
    )
)]
pub async fn handler<M: Mailer>(
    State(state): State<AppState<M>>,
    fields: FormFields,
) -> Result<Json<MessageResponse>, ApiError> {
    forms::submit::<ContactForm, M>(&state, fields).await
}

#[cfg(test)]
mod tests {
    use axum::http::{Method, StatusCode};
    use axum_test::TestServer;
    use serde_json::json;
    use testresult::TestResult;

    use crate::{
        domain::communication::mailer::{MailerError, MockMailer},
        infrastructure::http::{
            errors::MessageResponse,
            handlers::api::contact::ContactBody,
            router,
            state::tests::{test_state, TEST_RECIPIENT},
        },
    };

    impl ContactBody {
        /// Create a new `ContactBody` instance
        fn new(name: &str, email: &str, subject: &str, message: &str) -> Self {
            Self {
                name: name.to_string(),
                email: email.to_string(),
                subject: subject.to_string(),
                message: message.to_string(),
            }
        }
    }

    fn assert_cors_headers(response: &axum_test::TestResponse) {
        assert_eq!(response.header("access-control-allow-origin"), "*");
        assert_eq!(
            response.header("access-control-allow-methods"),
            "POST, OPTIONS"
        );
        assert_eq!(
            response.header("access-control-allow-headers"),
            "Content-Type"
        );
    }

    #[tokio::test]
    async fn test_contact_success() -> TestResult {
        let mut mailer = MockMailer::new();

        mailer
            .expect_send()
            .withf(|message| {
                message.to.to_string() == TEST_RECIPIENT
                    && message.reply_to.as_ref().map(ToString::to_string)
                        == Some("jo@x.com".to_string())
                    && message.subject == "Contact Form Submission: Hi"
                    && message.html_body.contains("Line1<br>Line2")
            })
            .times(1)
            .returning(|_| Ok(()));

        let response = TestServer::new(router(test_state(Some(mailer))))?
            .post("/api/contact")
            .json(&ContactBody::new("Jo", "jo@x.com", "Hi", "Line1\nLine2"))
            .await;

        response.assert_status_ok();
        assert_cors_headers(&response);

        let json = response.json::<MessageResponse>();

        assert!(json.success);
        assert_eq!(
            json.message,
            "Your message has been sent successfully! We will get back to you soon."
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_contact_url_encoded_form() -> TestResult {
        let mut mailer = MockMailer::new();

        mailer.expect_send().times(1).returning(|_| Ok(()));

        let response = TestServer::new(router(test_state(Some(mailer))))?
            .post("/api/contact")
            .form(&ContactBody::new("Jo", "jo@x.com", "Hi", "Hello"))
            .await;

        response.assert_status_ok();

        Ok(())
    }

    #[tokio::test]
    async fn test_contact_preflight() -> TestResult {
        let response = TestServer::new(router(test_state(None)))?
            .method(Method::OPTIONS, "/api/contact")
            .await;

        response.assert_status_ok();
        assert_cors_headers(&response);
        assert!(response.text().is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn test_contact_method_not_allowed() -> TestResult {
        let server = TestServer::new(router(test_state(None)))?;

        for method in [Method::GET, Method::PUT, Method::DELETE, Method::PATCH] {
            let response = server.method(method, "/api/contact").await;

            assert_eq!(response.status_code(), StatusCode::METHOD_NOT_ALLOWED);
            assert_eq!(response.header("allow"), "POST");
            assert_cors_headers(&response);

            let json = response.json::<MessageResponse>();

            assert!(!json.success);
            assert_eq!(json.message, "Method Not Allowed");
        }

        Ok(())
    }

    #[tokio::test]
    async fn test_contact_missing_field() -> TestResult {
        let server = TestServer::new(router(test_state(None)))?;

        for body in [
            json!({ "email": "jo@x.com", "subject": "Hi", "message": "Hello" }),
            json!({ "name": "Jo", "subject": "Hi", "message": "Hello" }),
            json!({ "name": "Jo", "email": "jo@x.com", "message": "Hello" }),
            json!({ "name": "Jo", "email": "jo@x.com", "subject": "Hi", "message": "" }),
            json!({ "name": 7, "email": "jo@x.com", "subject": "Hi", "message": "Hello" }),
        ] {
            let response = server.post("/api/contact").json(&body).await;

            assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
            assert_cors_headers(&response);

            let json = response.json::<MessageResponse>();

            assert!(!json.success);
            assert_eq!(json.message, "All fields are required.");
        }

        Ok(())
    }

    #[tokio::test]
    async fn test_contact_malformed_body() -> TestResult {
        let response = TestServer::new(router(test_state(None)))?
            .post("/api/contact")
            .text("name=Jo")
            .await;

        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            response.json::<MessageResponse>().message,
            "All fields are required."
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_contact_invalid_email() -> TestResult {
        let response = TestServer::new(router(test_state(None)))?
            .post("/api/contact")
            .json(&ContactBody::new("Jo", "jo@x", "Hi", "Hello"))
            .await;

        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);

        let json = response.json::<MessageResponse>();

        assert!(!json.success);
        assert_eq!(json.message, "Please provide a valid email address.");

        Ok(())
    }

    #[tokio::test]
    async fn test_contact_send_failure() -> TestResult {
        let mut mailer = MockMailer::new();

        mailer.expect_send().times(1).returning(|_| {
            Err(MailerError::UnknownError(anyhow::anyhow!(
                "535 authentication failed for user@example.com"
            )))
        });

        let response = TestServer::new(router(test_state(Some(mailer))))?
            .post("/api/contact")
            .json(&ContactBody::new("Jo", "jo@x.com", "Hi", "Hello"))
            .await;

        assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!response.text().contains("535"));

        let json = response.json::<MessageResponse>();

        assert!(!json.success);
        assert_eq!(
            json.message,
            "Failed to send message. Please try again later."
        );

        Ok(())
    }
}
