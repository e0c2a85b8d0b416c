use std::sync::Arc;

use authn::TokenIssuer;
use axum::extract::Request;
use axum::extract::State;
use axum::http::{self};
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::response::Response;

use crate::domain::identity::models::IdentityId;
use crate::inbound::http::handlers::ApiError;

/// Extension type carrying the verified identity id of the caller
#[derive(Debug, Clone)]
pub struct AuthenticatedIdentity {
    pub identity_id: IdentityId,
}

/// Middleware that verifies bearer session tokens and stores the caller's
/// identity id in request extensions
pub async fn authenticate(
    State(token_issuer): State<Arc<TokenIssuer>>,
    mut req: Request,
    next: Next,
) -> Result<Response, Response> {
    let token = extract_token_from_header(&req)?;

    let claims = token_issuer.verify(token).map_err(|e| {
        tracing::warn!(error = %e, "Session token rejected");
        unauthorized("Invalid or expired token")
    })?;

    let identity_id = IdentityId::from_string(&claims.sub).map_err(|e| {
        tracing::warn!(error = %e, "Session token carried a malformed subject");
        unauthorized("Invalid token format")
    })?;

    req.extensions_mut()
        .insert(AuthenticatedIdentity { identity_id });

    Ok(next.run(req).await)
}

fn extract_token_from_header(req: &Request) -> Result<&str, Response> {
    let auth_header = req
        .headers()
        .get(http::header::AUTHORIZATION)
        .ok_or_else(|| unauthorized("Missing Authorization header"))?;

    let auth_str = auth_header
        .to_str()
        .map_err(|_| unauthorized("Invalid Authorization header"))?;

    auth_str.strip_prefix("Bearer ").ok_or_else(|| {
        unauthorized("Invalid Authorization header format. Expected: Bearer <token>")
    })
}

fn unauthorized(message: &str) -> Response {
    ApiError::Unauthorized(message.to_string()).into_response()
}
