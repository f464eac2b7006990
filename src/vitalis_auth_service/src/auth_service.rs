use axum::{
    Router,
    routing::{get, post},
};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use vitalis_core::{CredentialHasher, MailRelay, TokenIssuer, UserStore, VerificationStore};

use crate::routes::{google_login, login, profile, register, request_otp};
use crate::tracing::{make_span_with_request_id, on_request, on_response};

/// Shared state for all routes: the five adapter implementations behind the
/// ports. Adapters are cheap to clone (pool handles or `Arc`s inside), so
/// each use case takes its own copies.
#[derive(Clone)]
pub struct AppState<U, V, M, H, T> {
    pub user_store: U,
    pub verification_store: V,
    pub mail_relay: M,
    pub hasher: H,
    pub token_issuer: T,
}

/// The credential service: registration, password login, standalone OTP
/// requests, federated Google login and profile lookup.
pub struct AuthService {
    router: Router,
}

impl AuthService {
    pub fn new<U, V, M, H, T>(state: AppState<U, V, M, H, T>) -> Self
    where
        U: UserStore + Clone + Send + Sync + 'static,
        V: VerificationStore + Clone + Send + Sync + 'static,
        M: MailRelay + Clone + Send + Sync + 'static,
        H: CredentialHasher + Clone + Send + Sync + 'static,
        T: TokenIssuer + Clone + Send + Sync + 'static,
    {
        let router = Router::new()
            .route("/auth/register", post(register::<U, V, M, H, T>))
            .route("/auth/login", post(login::<U, V, M, H, T>))
            .route("/auth/otp/request", post(request_otp::<U, V, M, H, T>))
            .route("/auth/google/login", post(google_login::<U, V, M, H, T>))
            .route("/auth/profile", get(profile::<U, V, M, H, T>))
            .with_state(state);

        Self { router }
    }

    fn with_trace_layer(mut self) -> Self {
        self.router = self.router.layer(
            TraceLayer::new_for_http()
                .make_span_with(make_span_with_request_id)
                .on_request(on_request)
                .on_response(on_response),
        );
        self
    }

    /// Convert into a router that can be mounted on another application.
    pub fn into_router(self) -> Router {
        self.with_trace_layer().router
    }

    /// Run as a standalone server on the given listener.
    pub async fn run(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let router = self.into_router();

        tracing::info!("Credential service listening on {}", listener.local_addr()?);

        axum::serve(listener, router).await
    }
}
