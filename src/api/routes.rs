//! API route handlers

use axum::{
    extract::{rejection::JsonRejection, State},
    response::IntoResponse,
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::server::AppState;
use crate::auth::AuthPayload;
use crate::error::Result;

// Request/Response types

#[derive(Debug, Deserialize)]
pub struct RenewAccessTokenRequest {
    pub refresh_token: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RenewAccessTokenResponse {
    pub access_token: String,
    pub access_token_expires_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }
}

impl ApiResponse<()> {
    pub fn err(message: impl Into<String>) -> Self {
        ApiResponse {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}

// Health check

pub async fn health() -> impl IntoResponse {
    Json(ApiResponse::ok("healthy"))
}

// Authenticated identity

pub async fn me(AuthPayload(payload): AuthPayload) -> impl IntoResponse {
    Json(ApiResponse::ok(payload))
}

// Tokens

/// Exchange a refresh token for a fresh access token.
///
/// Refresh-token sessions are tracked outside this service, so only the
/// token itself is checked here.
pub async fn renew_access_token(
    State(state): State<AppState>,
    body: std::result::Result<Json<RenewAccessTokenRequest>, JsonRejection>,
) -> Result<Json<ApiResponse<RenewAccessTokenResponse>>> {
    let Json(req) = body?;
    let refresh_payload = state.token_maker.verify_token(&req.refresh_token)?;

    let (access_token, access_payload) = state.token_maker.create_token(
        refresh_payload.username(),
        state.config.token.access_token_duration(),
    )?;

    tracing::debug!("Renewed access token for {}", refresh_payload.username());

    Ok(Json(ApiResponse::ok(RenewAccessTokenResponse {
        access_token,
        access_token_expires_at: access_payload.expired_at(),
    })))
}
