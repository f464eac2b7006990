use vitalis_core::{HasherError, TokenError, UserStoreError, VerificationStoreError};

/// Unified failure taxonomy for the credential flows.
///
/// Everything here is a hard failure surfaced to the caller. A mail-relay
/// *application* rejection is deliberately not in this list: the flows return
/// it as a soft-failure response variant carrying the generated OTP.
#[derive(Debug, thiserror::Error)]
pub enum CredentialError {
    #[error("User with this national ID already exists")]
    DuplicateIdentity,
    #[error("Invalid credentials")]
    InvalidCredentials,
    #[error("This account uses social login. Please use Google login.")]
    FederatedAccountOnly,
    #[error("No account exists for this email")]
    UnknownAccount,
    /// Mail transport fault during registration or login; the write sequence
    /// is abandoned.
    #[error("Notification service unavailable: {0}")]
    NotificationUnavailable(String),
    /// Mail transport fault during a standalone OTP request.
    #[error("Error occurred while sending email: {0}")]
    NotificationFailure(String),
    #[error("Session refers to a user that no longer exists")]
    StaleSession,
    #[error("Invalid token")]
    InvalidToken,
    #[error("User store error: {0}")]
    UserStore(#[from] UserStoreError),
    #[error("Verification store error: {0}")]
    VerificationStore(#[from] VerificationStoreError),
    #[error("Password hashing error: {0}")]
    Hasher(#[from] HasherError),
    #[error("Token error: {0}")]
    Token(String),
    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

impl From<TokenError> for CredentialError {
    fn from(error: TokenError) -> Self {
        match error {
            TokenError::InvalidToken => CredentialError::InvalidToken,
            TokenError::Signing(message) => CredentialError::Token(message),
        }
    }
}
