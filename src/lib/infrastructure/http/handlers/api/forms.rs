//! Shared form endpoint behaviour

use axum::{
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use tracing::error;

use crate::{
    domain::{
        communication::mailer::Mailer,
        forms::{Form, Submission},
    },
    infrastructure::http::{
        errors::{ApiError, MessageResponse},
        extract::FormFields,
        state::AppState,
    },
};

/// Validates the posted fields as form `F` and relays them by email.
pub async fn submit<F: Form, M: Mailer>(
    state: &AppState<M>,
    FormFields(fields): FormFields,
) -> Result<Json<MessageResponse>, ApiError> {
    let submission = Submission::extract::<F>(fields)?;

    state
        .forms
        .submit::<F>(&submission)
        .await
        .map_err(|err| {
            error!(form = F::NAME, error = %err, "form submission failed");
            ApiError::new_500(F::FAILURE_MESSAGE)
        })?;

    Ok(Json(MessageResponse::success(F::SUCCESS_MESSAGE)))
}

/// Answers a CORS preflight request
pub async fn preflight() -> StatusCode {
    StatusCode::OK
}

/// Rejects any method other than `POST` and `OPTIONS`
pub async fn method_not_allowed() -> impl IntoResponse {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        [(header::ALLOW, "POST")],
        Json(MessageResponse::failure("Method Not Allowed")),
    )
}
