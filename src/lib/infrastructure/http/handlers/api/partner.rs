//! Partnership application handler

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    domain::{communication::mailer::Mailer, forms::partnership::PartnershipForm},
    infrastructure::http::{
        errors::{ApiError, MessageResponse},
        extract::FormFields,
        handlers::api::forms,
        state::AppState,
    },
};

/// Partnership application request body
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PartnershipBody {
    /// The applying organization
    #[schema(example = "Acme Academy")]
    organization_name: String,

    /// The person to contact at the organization
    #[schema(example = "Sam Smith")]
    contact_person: String,

    /// The applicant's email address
    #[schema(example = "sam@acme.org")]
    email: String,

    /// One of `school`, `contentCreator`, `examBoard` or `other`
    #[schema(example = "school")]
    partnership_type: String,

    /// The application message
    #[schema(example = "We would like to use your materials in our classes.")]
    message: String,
}

/// Submit a partnership application
#[utoipa::path(
    post,
    operation_id = "submit_partnership",
    tag = "Forms",
    path = "/api/partner",
    request_body = PartnershipBody,
    responses(
        (status = StatusCode::OK, description = "Application sent", body = MessageResponse),
        (status = StatusCode::BAD_REQUEST, description = "Missing field or invalid email address", body = MessageResponse),
        (status = StatusCode::METHOD_NOT_ALLOWED, description = "Method not allowed", body = MessageResponse),
        (status = StatusCode::INTERNAL_SERVER_ERROR, description = "The email could not be sent", body = MessageResponse),
    )
)]
pub async fn handler<M: Mailer>(
    State(state): State<AppState<M>>,
    fields: FormFields,
) -> Result<Json<MessageResponse>, ApiError> {
    forms::submit::<PartnershipForm, M>(&state, fields).await
}
