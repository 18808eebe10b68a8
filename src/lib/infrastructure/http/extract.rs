//! Form field extraction

use std::{collections::HashMap, convert::Infallible};

use axum::{
    async_trait,
    extract::{FromRequest, Request},
    http::header::CONTENT_TYPE,
    Form, Json,
};
use serde_json::{Map, Value};
use tracing::debug;

/// The string fields posted to a form endpoint.
///
/// Accepts a JSON object or an URL-encoded form body. Non-string JSON values
/// are dropped, and a body that cannot be read yields no fields at all, so
/// validation reports the missing fields instead of the parse failure.
#[derive(Debug, Default)]
pub struct FormFields(pub HashMap<String, String>);

fn is_url_encoded(req: &Request) -> bool {
    req.headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.starts_with("application/x-www-form-urlencoded"))
}

#[async_trait]
impl<S> FromRequest<S> for FormFields
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if is_url_encoded(&req) {
            return match Form::<HashMap<String, String>>::from_request(req, state).await {
                Ok(Form(fields)) => Ok(Self(fields)),
                Err(rejection) => {
                    debug!(%rejection, "unreadable form body");
                    Ok(Self::default())
                }
            };
        }

        match Json::<Map<String, Value>>::from_request(req, state).await {
            Ok(Json(object)) => Ok(Self(
                object
                    .into_iter()
                    .filter_map(|(name, value)| match value {
                        Value::String(value) => Some((name, value)),
                        _ => None,
                    })
                    .collect(),
            )),
            Err(rejection) => {
                debug!(%rejection, "unreadable JSON body");
                Ok(Self::default())
            }
        }
    }
}
