//! Authentication middleware and extractors

use std::sync::Arc;

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{request::Parts, HeaderMap},
    middleware::Next,
    response::Response,
};
use thiserror::Error;

use crate::auth::{Maker, Payload};
use crate::error::Error;

/// Header carrying the credentials
pub const AUTHORIZATION_HEADER: &str = "authorization";

/// The only supported authorization scheme
pub const BEARER_SCHEME: &str = "Bearer";

/// Reasons a request is rejected before the token is verified
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("authorization header is not provided")]
    MissingHeader,

    #[error("invalid authorization header format")]
    MalformedHeader,

    #[error("unsupported authorization type {0}")]
    UnsupportedScheme(String),

    #[error("authentication required")]
    NotAuthenticated,
}

/// Pull the token out of an `Authorization: Bearer <token>` header
pub fn extract_bearer_token(headers: &HeaderMap) -> Result<&str, AuthError> {
    let value = headers
        .get(AUTHORIZATION_HEADER)
        .ok_or(AuthError::MissingHeader)?
        .to_str()
        .map_err(|_| AuthError::MalformedHeader)?;

    let fields: Vec<&str> = value.split_whitespace().collect();
    let [scheme, token] = fields.as_slice() else {
        return Err(AuthError::MalformedHeader);
    };

    if *scheme != BEARER_SCHEME {
        return Err(AuthError::UnsupportedScheme(scheme.to_string()));
    }

    Ok(*token)
}

/// Middleware requiring a valid bearer token.
///
/// The verified [`Payload`] is stored in the request extensions and can be
/// read by handlers through [`AuthPayload`].
pub async fn require_auth(
    State(maker): State<Arc<dyn Maker>>,
    mut req: Request,
    next: Next,
) -> Result<Response, Error> {
    let payload = {
        let token = extract_bearer_token(req.headers())?;
        maker.verify_token(token)?
    };

    req.extensions_mut().insert(payload);
    Ok(next.run(req).await)
}

/// Extractor for the payload published by [`require_auth`]
#[derive(Debug, Clone)]
pub struct AuthPayload(pub Payload);

impl<S> FromRequestParts<S> for AuthPayload
where
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Payload>()
            .cloned()
            .map(AuthPayload)
            .ok_or(Error::Auth(AuthError::NotAuthenticated))
    }
}
