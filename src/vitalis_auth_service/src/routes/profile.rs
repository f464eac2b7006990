use axum::{
    Json,
    extract::State,
    http::{HeaderMap, header::AUTHORIZATION},
    response::IntoResponse,
};
use vitalis_application::{ProfileUseCase, ValidateSessionUseCase};
use vitalis_core::{CredentialHasher, MailRelay, TokenIssuer, UserStore, VerificationStore};

use super::error::AuthApiError;
use crate::auth_service::AppState;

fn bearer_token(headers: &HeaderMap) -> Result<&str, AuthApiError> {
    headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .ok_or(AuthApiError::MissingToken)
}

#[tracing::instrument(name = "Profile", skip_all)]
pub async fn profile<U, V, M, H, T>(
    State(state): State<AppState<U, V, M, H, T>>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AuthApiError>
where
    U: UserStore + Clone + Send + Sync + 'static,
    V: VerificationStore + Clone + Send + Sync + 'static,
    M: MailRelay + Clone + Send + Sync + 'static,
    H: CredentialHasher + Clone + Send + Sync + 'static,
    T: TokenIssuer + Clone + Send + Sync + 'static,
{
    let token = bearer_token(&headers)?;

    let claims = ValidateSessionUseCase::new(state.user_store.clone(), state.token_issuer)
        .execute(token)
        .await?;

    let profile = ProfileUseCase::new(state.user_store)
        .execute(claims.sub)
        .await?;

    Ok(Json(profile))
}
