use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::identity::models::IdentityId;
use crate::domain::identity::models::IdentityView;
use crate::identity::ports::AuthenticatorPort;
use crate::identity::ports::IdentityStore;
use crate::inbound::http::router::AppState;

pub async fn get_identity<IS: IdentityStore>(
    State(state): State<AppState<IS>>,
    Path(identity_id): Path<String>,
) -> Result<ApiSuccess<IdentityView>, ApiError> {
    let identity_id =
        IdentityId::from_string(&identity_id).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    state
        .authenticator
        .find_by_id(&identity_id)
        .await
        .map_err(ApiError::from)
        .map(|view| ApiSuccess::new(StatusCode::OK, view))
}
