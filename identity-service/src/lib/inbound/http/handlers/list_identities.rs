use axum::extract::State;
use axum::http::StatusCode;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::identity::models::IdentityView;
use crate::identity::ports::AuthenticatorPort;
use crate::identity::ports::IdentityStore;
use crate::inbound::http::router::AppState;

pub async fn list_identities<IS: IdentityStore>(
    State(state): State<AppState<IS>>,
) -> Result<ApiSuccess<Vec<IdentityView>>, ApiError> {
    state
        .authenticator
        .list_all()
        .await
        .map_err(ApiError::from)
        .map(|views| ApiSuccess::new(StatusCode::OK, views))
}
