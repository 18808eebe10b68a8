//! OpenAPI module

use utoipa::OpenApi;

use crate::infrastructure::http::{errors::MessageResponse, handlers::api::*};

#[derive(Debug, OpenApi)]
#[openapi(
    info(title = "Form Relay"),
    paths(contact::handler, partner::handler, uptime::handler),
    components(schemas(
        contact::ContactBody,
        partner::PartnershipBody,
        uptime::UptimeResponse,
        MessageResponse,
    ))
)]
pub struct ApiDocs;
