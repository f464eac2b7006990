pub mod error;
pub mod notification;
pub mod use_cases;

#[cfg(test)]
pub(crate) mod test_fixtures;

pub use error::CredentialError;
pub use use_cases::{
    google_login::{GoogleLoginRequest, GoogleLoginResponse, GoogleLoginUseCase},
    login::{LoginResponse, LoginUseCase},
    profile::ProfileUseCase,
    register::{RegisterRequest, RegisterResponse, RegisterUseCase},
    request_otp::{OtpRequestResponse, RequestOtpUseCase},
    validate_session::ValidateSessionUseCase,
};
