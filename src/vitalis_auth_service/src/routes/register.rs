use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use chrono::NaiveDate;
use secrecy::Secret;
use serde::Deserialize;
use vitalis_application::{RegisterRequest, RegisterResponse, RegisterUseCase};
use vitalis_core::{
    CredentialHasher, Email, MailRelay, NationalId, Password, TokenIssuer, UserStore,
    VerificationStore,
};

use super::error::AuthApiError;
use crate::auth_service::AppState;

/// Register payload with the mobile app's wire names (`nik`, `dob`,
/// `link_photo`, `tokenFcm`). `agreement` is optional and defaults to false.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterBody {
    pub name: String,
    pub nik: String,
    pub email: Secret<String>,
    #[serde(rename = "dob")]
    pub date_of_birth: NaiveDate,
    pub gender: String,
    #[serde(default)]
    pub agreement: bool,
    pub password: Secret<String>,
    #[serde(default, rename = "link_photo")]
    pub photo_url: Option<String>,
    pub phone_code: String,
    pub phone_number: String,
    #[serde(default)]
    pub token_fcm: Option<String>,
}

#[tracing::instrument(name = "Register", skip_all)]
pub async fn register<U, V, M, H, T>(
    State(state): State<AppState<U, V, M, H, T>>,
    Json(body): Json<RegisterBody>,
) -> Result<impl IntoResponse, AuthApiError>
where
    U: UserStore + Clone + Send + Sync + 'static,
    V: VerificationStore + Clone + Send + Sync + 'static,
    M: MailRelay + Clone + Send + Sync + 'static,
    H: CredentialHasher + Clone + Send + Sync + 'static,
    T: TokenIssuer + Clone + Send + Sync + 'static,
{
    let use_case = RegisterUseCase::new(
        state.user_store,
        state.verification_store,
        state.mail_relay,
        state.hasher,
        state.token_issuer,
    );

    let request = RegisterRequest {
        name: body.name,
        national_id: NationalId::try_from(body.nik)?,
        email: Email::try_from(body.email)?,
        date_of_birth: body.date_of_birth,
        gender: body.gender,
        agreement_accepted: body.agreement,
        password: Password::try_from(body.password)?,
        photo_url: body.photo_url,
        phone_code: body.phone_code,
        phone_number: body.phone_number,
        push_token: body.token_fcm,
    };

    match use_case.execute(request).await? {
        RegisterResponse::Registered { token, otp, user } => Ok((
            StatusCode::CREATED,
            Json(serde_json::json!({
                "message": "User registered successfully",
                "access_token": token,
                "otp": otp,
                "user": user,
            })),
        )),
        RegisterResponse::MailRejected { otp } => Ok((
            StatusCode::OK,
            Json(serde_json::json!({
                "code": 206,
                "otp": otp,
                "mail-status": "Failed to send email",
            })),
        )),
    }
}
