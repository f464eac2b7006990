use async_trait::async_trait;
use secrecy::Secret;
use thiserror::Error;

use crate::domain::{claims::SessionClaims, email::Email, password::Password};

/// The only application code the relay reports for accepted mail.
pub const MAIL_ACCEPTED_CODE: u16 = 200;

/// What the relay answered after accepting the request at transport level.
#[derive(Debug, Clone)]
pub struct MailReceipt {
    /// Application-level code from the relay's response body.
    pub code: u16,
    /// The raw response body, kept for diagnostics.
    pub raw: serde_json::Value,
}

impl MailReceipt {
    pub fn accepted(&self) -> bool {
        self.code == MAIL_ACCEPTED_CODE
    }
}

#[derive(Debug, Error)]
pub enum MailRelayError {
    #[error("Mail relay transport error: {0}")]
    Transport(String),
}

/// The external mail relay. A returned receipt means the transport worked;
/// whether the relay actually sent the mail is in the receipt's code.
#[async_trait]
pub trait MailRelay: Send + Sync {
    async fn send(
        &self,
        to: &Email,
        display_name: &str,
        subject: &str,
        html_body: &str,
    ) -> Result<MailReceipt, MailRelayError>;
}

#[derive(Debug, Error)]
pub enum HasherError {
    #[error("Password hashing error: {0}")]
    Hash(String),
}

/// One-way password hashing. `verify` distinguishes "wrong password"
/// (`Ok(false)`) from a broken stored hash (`Err`).
#[async_trait]
pub trait CredentialHasher: Send + Sync {
    async fn hash(&self, password: &Password) -> Result<Secret<String>, HasherError>;
    async fn verify(
        &self,
        candidate: &Password,
        hash: &Secret<String>,
    ) -> Result<bool, HasherError>;
}

#[derive(Debug, Error)]
pub enum TokenError {
    #[error("Invalid token")]
    InvalidToken,
    #[error("Token signing error: {0}")]
    Signing(String),
}

impl PartialEq for TokenError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::InvalidToken, Self::InvalidToken) => true,
            (Self::Signing(_), Self::Signing(_)) => true,
            _ => false,
        }
    }
}

/// Signs a claims payload into a bearer token and validates presented ones.
/// Signing is CPU-bound and synchronous.
pub trait TokenIssuer: Send + Sync {
    fn sign(&self, claims: SessionClaims) -> Result<String, TokenError>;
    fn verify(&self, token: &str) -> Result<SessionClaims, TokenError>;
}
