use std::sync::Arc;
use std::time::Duration;

use authn::TokenIssuer;
use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::get;
use axum::routing::post;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::get_identity::get_identity;
use super::handlers::list_identities::list_identities;
use super::handlers::login::login;
use super::handlers::register::register;
use super::middleware::authenticate as auth_middleware;
use crate::domain::identity::service::CredentialAuthenticator;
use crate::identity::ports::IdentityStore;

/// Shared state handed to every request handler.
pub struct AppState<IS: IdentityStore> {
    pub authenticator: Arc<CredentialAuthenticator<IS>>,
    pub token_issuer: Arc<TokenIssuer>,
}

// Derived Clone would demand IS: Clone; the fields are Arcs.
impl<IS: IdentityStore> Clone for AppState<IS> {
    fn clone(&self) -> Self {
        Self {
            authenticator: Arc::clone(&self.authenticator),
            token_issuer: Arc::clone(&self.token_issuer),
        }
    }
}

pub fn create_router<IS: IdentityStore>(
    authenticator: Arc<CredentialAuthenticator<IS>>,
    token_issuer: Arc<TokenIssuer>,
) -> Router {
    let state = AppState {
        authenticator,
        token_issuer,
    };

    let public_routes = Router::new()
        .route("/api/auth/register", post(register::<IS>))
        .route("/api/auth/login", post(login::<IS>));

    let protected_routes = Router::new()
        .route("/api/identities", get(list_identities::<IS>))
        .route("/api/identities/:identity_id", get(get_identity::<IS>))
        .route_layer(middleware::from_fn_with_state(
            Arc::clone(&state.token_issuer),
            auth_middleware,
        ));

    // Headers are not recorded in spans; Authorization carries bearer tokens.
    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
