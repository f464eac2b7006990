use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use vitalis_application::CredentialError;
use vitalis_core::{EmailError, NationalIdError, PasswordError};

#[derive(Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Error)]
pub enum AuthApiError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Missing token")]
    MissingToken,

    #[error(transparent)]
    Credential(#[from] CredentialError),
}

impl IntoResponse for AuthApiError {
    fn into_response(self) -> Response {
        let (status_code, error_message) = match &self {
            AuthApiError::InvalidInput(_) | AuthApiError::MissingToken => {
                (StatusCode::BAD_REQUEST, self.to_string())
            }

            AuthApiError::Credential(error) => match error {
                CredentialError::DuplicateIdentity => (StatusCode::CONFLICT, error.to_string()),

                CredentialError::InvalidCredentials
                | CredentialError::FederatedAccountOnly
                | CredentialError::InvalidToken
                | CredentialError::StaleSession => (StatusCode::UNAUTHORIZED, error.to_string()),

                CredentialError::UnknownAccount => (StatusCode::NOT_FOUND, error.to_string()),

                CredentialError::NotificationUnavailable(_) => {
                    (StatusCode::SERVICE_UNAVAILABLE, error.to_string())
                }

                _ => (StatusCode::INTERNAL_SERVER_ERROR, error.to_string()),
            },
        };

        let body = Json(ErrorResponse {
            error: error_message,
        });

        (status_code, body).into_response()
    }
}

impl From<EmailError> for AuthApiError {
    fn from(error: EmailError) -> Self {
        AuthApiError::InvalidInput(error.to_string())
    }
}

impl From<PasswordError> for AuthApiError {
    fn from(error: PasswordError) -> Self {
        AuthApiError::InvalidInput(error.to_string())
    }
}

impl From<NationalIdError> for AuthApiError {
    fn from(error: NationalIdError) -> Self {
        AuthApiError::InvalidInput(error.to_string())
    }
}
