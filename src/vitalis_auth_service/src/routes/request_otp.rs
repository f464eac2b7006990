use axum::{Json, extract::State, response::IntoResponse};
use secrecy::Secret;
use serde::Deserialize;
use vitalis_application::{OtpRequestResponse, RequestOtpUseCase};
use vitalis_core::{
    CredentialHasher, Email, MailRelay, TokenIssuer, UserStore, VerificationStore,
};

use super::error::AuthApiError;
use crate::auth_service::AppState;

#[derive(Deserialize)]
pub struct OtpRequestBody {
    pub email: Secret<String>,
}

#[tracing::instrument(name = "Request OTP", skip_all)]
pub async fn request_otp<U, V, M, H, T>(
    State(state): State<AppState<U, V, M, H, T>>,
    Json(body): Json<OtpRequestBody>,
) -> Result<impl IntoResponse, AuthApiError>
where
    U: UserStore + Clone + Send + Sync + 'static,
    V: VerificationStore + Clone + Send + Sync + 'static,
    M: MailRelay + Clone + Send + Sync + 'static,
    H: CredentialHasher + Clone + Send + Sync + 'static,
    T: TokenIssuer + Clone + Send + Sync + 'static,
{
    let use_case = RequestOtpUseCase::new(
        state.user_store,
        state.verification_store,
        state.mail_relay,
    );

    let email = Email::try_from(body.email)?;

    match use_case.execute(email).await? {
        OtpRequestResponse::Sent { name, email, otp } => Ok(Json(serde_json::json!({
            "code": 200,
            "name": name,
            "email": email,
            "otp": otp,
            "mail-status": "Email Sent",
        }))),
        OtpRequestResponse::MailRejected { name, email, otp } => Ok(Json(serde_json::json!({
            "code": 206,
            "name": name,
            "email": email,
            "otp": otp,
            "mail-status": "Failed to send email",
        }))),
    }
}
