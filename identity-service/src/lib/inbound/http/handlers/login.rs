use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use super::ApiError;
use super::ApiSuccess;
use super::SessionResponseData;
use crate::domain::identity::models::Credentials;
use crate::domain::identity::models::EmailAddress;
use crate::domain::identity::models::Password;
use crate::identity::ports::AuthenticatorPort;
use crate::identity::ports::IdentityStore;
use crate::inbound::http::router::AppState;

pub async fn login<IS: IdentityStore>(
    State(state): State<AppState<IS>>,
    Json(body): Json<LoginRequest>,
) -> Result<ApiSuccess<SessionResponseData>, ApiError> {
    // A malformed email cannot match any stored identity, so it earns the
    // same rejection as a wrong password rather than a validation error.
    let email = EmailAddress::new(body.email)
        .map_err(|_| ApiError::Unauthorized("Invalid credentials".to_string()))?;

    let credentials = Credentials {
        email,
        password: Password::new(body.password),
    };

    state
        .authenticator
        .login(credentials)
        .await
        .map_err(ApiError::from)
        .map(|session| ApiSuccess::new(StatusCode::OK, session.into()))
}

/// HTTP request body for login (raw JSON).
///
/// No Debug derive: the body carries a plaintext password.
#[derive(Deserialize)]
pub struct LoginRequest {
    email: String,
    password: String,
}
