use axum::{Json, extract::State, response::IntoResponse};
use secrecy::Secret;
use serde::Deserialize;
use vitalis_application::{LoginResponse, LoginUseCase};
use vitalis_core::{
    CredentialHasher, MailRelay, NationalId, Password, TokenIssuer, UserStore, VerificationStore,
};

use super::error::AuthApiError;
use crate::auth_service::AppState;

#[derive(Deserialize)]
pub struct LoginBody {
    pub nik: String,
    pub password: Secret<String>,
}

#[tracing::instrument(name = "Login", skip_all)]
pub async fn login<U, V, M, H, T>(
    State(state): State<AppState<U, V, M, H, T>>,
    Json(body): Json<LoginBody>,
) -> Result<impl IntoResponse, AuthApiError>
where
    U: UserStore + Clone + Send + Sync + 'static,
    V: VerificationStore + Clone + Send + Sync + 'static,
    M: MailRelay + Clone + Send + Sync + 'static,
    H: CredentialHasher + Clone + Send + Sync + 'static,
    T: TokenIssuer + Clone + Send + Sync + 'static,
{
    let use_case = LoginUseCase::new(
        state.user_store,
        state.verification_store,
        state.mail_relay,
        state.hasher,
        state.token_issuer,
    );

    let national_id = NationalId::try_from(body.nik)?;
    let password = Password::try_from(body.password)?;

    match use_case.execute(national_id, password).await? {
        LoginResponse::LoggedIn { token, otp, user } => Ok(Json(serde_json::json!({
            "message": "Login successful",
            "access_token": token,
            "otp": otp,
            "user": user,
        }))),
        LoginResponse::MailRejected { otp } => Ok(Json(serde_json::json!({
            "code": 206,
            "otp": otp,
            "mail-status": "Failed to send email",
        }))),
    }
}
