use axum::{
    routing::{get, post},
    Json, Router,
};
use utoipa::OpenApi;

use crate::{
    domain::communication::mailer::Mailer,
    infrastructure::http::{open_api::ApiDocs, state::AppState},
};

pub mod contact;
pub mod forms;
pub mod partner;
pub mod stoplight;
pub mod uptime;

pub fn router<M: Mailer>() -> Router<AppState<M>> {
    Router::new()
        .route("/", get(stoplight::handler))
        .route("/openapi.json", get(Json(ApiDocs::openapi())))
        .route("/uptime", get(uptime::handler))
        .route(
            "/contact",
            post(contact::handler::<M>)
                .options(forms::preflight)
                .fallback(forms::method_not_allowed),
        )
        .route(
            "/partner",
            post(partner::handler::<M>)
                .options(forms::preflight)
                .fallback(forms::method_not_allowed),
        )
}
