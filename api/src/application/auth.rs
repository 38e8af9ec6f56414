use axum::{
    RequestPartsExt,
    extract::{FromRef, FromRequestParts, Request, State},
    http::request::Parts,
    middleware::Next,
    response::Response,
};
use axum_extra::{
    TypedHeader,
    headers::{Authorization, authorization::Bearer},
};
use gutcheck_core::domain::authentication::{
    ports::AuthService,
    value_objects::{AuthorizeRequestInput, Identity},
};
use tracing::debug;

use super::http::server::{api_entities::api_error::ApiError, app_state::AppState};

pub async fn extract_token_from_bearer(parts: &mut Parts) -> Result<String, ApiError> {
    let TypedHeader(Authorization(bearer)) = parts
        .extract::<TypedHeader<Authorization<Bearer>>>()
        .await
        .map_err(|_| ApiError::Unauthorized("missing bearer token".to_string()))?;

    Ok(bearer.token().to_string())
}

/// Verifies the bearer token, if any, and attaches the caller's `Identity`.
///
/// Requests without a valid token pass through untouched; handlers that need a caller
/// reject them through [`RequiredIdentity`].
pub async fn auth(State(state): State<AppState>, req: Request, next: Next) -> Response {
    let (mut parts, body) = req.into_parts();

    if let Ok(token) = extract_token_from_bearer(&mut parts).await {
        match state
            .service
            .authorize_request(AuthorizeRequestInput { token })
            .await
        {
            Ok(output) => {
                parts.extensions.insert(output.identity);
            }
            Err(e) => {
                debug!("bearer token rejected: {}", e);
                parts.extensions.insert(AuthFailure(e.to_string()));
            }
        }
    }

    next.run(Request::from_parts(parts, body)).await
}

/// Why the token attached to the request was rejected.
#[derive(Debug, Clone)]
struct AuthFailure(String);

/// Extractor for handlers that need an authenticated caller.
pub struct RequiredIdentity(pub Identity);

impl<S> FromRequestParts<S> for RequiredIdentity
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        if let Some(identity) = parts.extensions.get::<Identity>().cloned() {
            return Ok(RequiredIdentity(identity));
        }

        let message = parts
            .extensions
            .get::<AuthFailure>()
            .map(|failure| failure.0.clone())
            .unwrap_or_else(|| "authentication required".to_string());

        Err(ApiError::Unauthorized(message))
    }
}
