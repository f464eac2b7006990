use axum::{Json, extract::State, response::IntoResponse};
use secrecy::Secret;
use serde::Deserialize;
use vitalis_application::{GoogleLoginRequest, GoogleLoginUseCase};
use vitalis_core::{
    CredentialHasher, Email, MailRelay, TokenIssuer, UserStore, VerificationStore,
};

use super::error::AuthApiError;
use crate::auth_service::AppState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoogleLoginBody {
    pub google_id: String,
    pub email: Secret<String>,
    pub name: String,
    #[serde(default)]
    pub picture: Option<String>,
}

#[tracing::instrument(name = "Google login", skip_all)]
pub async fn google_login<U, V, M, H, T>(
    State(state): State<AppState<U, V, M, H, T>>,
    Json(body): Json<GoogleLoginBody>,
) -> Result<impl IntoResponse, AuthApiError>
where
    U: UserStore + Clone + Send + Sync + 'static,
    V: VerificationStore + Clone + Send + Sync + 'static,
    M: MailRelay + Clone + Send + Sync + 'static,
    H: CredentialHasher + Clone + Send + Sync + 'static,
    T: TokenIssuer + Clone + Send + Sync + 'static,
{
    let use_case = GoogleLoginUseCase::new(state.user_store, state.token_issuer);

    let request = GoogleLoginRequest {
        federated_id: body.google_id,
        email: Email::try_from(body.email)?,
        name: body.name,
        picture: body.picture,
    };

    let response = use_case.execute(request).await?;

    Ok(Json(serde_json::json!({
        "message": "Google login successful",
        "access_token": response.token,
        "user": response.user,
        "isNewAccount": response.is_new_account,
    })))
}
