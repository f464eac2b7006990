use secrecy::ExposeSecret;
use vitalis_core::{Email, MailRelay, Otp, UserStore, VerificationStore};

use crate::{error::CredentialError, notification};

/// Response from the standalone OTP request use case
#[derive(Debug, PartialEq)]
pub enum OtpRequestResponse {
    /// The relay accepted the mail and the stored OTP was overwritten.
    Sent { name: String, email: String, otp: u64 },
    /// The relay rejected the mail; nothing was written.
    MailRejected { name: String, email: String, otp: u64 },
}

/// Standalone OTP request use case - re-issue a code for a known email.
///
/// Unlike registration and login, a relay transport fault here surfaces as
/// [`CredentialError::NotificationFailure`], a server-side error.
pub struct RequestOtpUseCase<U, V, M>
where
    U: UserStore,
    V: VerificationStore,
    M: MailRelay,
{
    user_store: U,
    verification_store: V,
    mail_relay: M,
}

impl<U, V, M> RequestOtpUseCase<U, V, M>
where
    U: UserStore,
    V: VerificationStore,
    M: MailRelay,
{
    pub fn new(user_store: U, verification_store: V, mail_relay: M) -> Self {
        Self {
            user_store,
            verification_store,
            mail_relay,
        }
    }

    #[tracing::instrument(name = "RequestOtpUseCase::execute", skip_all)]
    pub async fn execute(&self, email: Email) -> Result<OtpRequestResponse, CredentialError> {
        let user = self
            .user_store
            .find_by_email(&email)
            .await?
            .ok_or(CredentialError::UnknownAccount)?;

        let otp = Otp::generate();
        let body = notification::otp_email(&user.name, &otp)?;

        let receipt = self
            .mail_relay
            .send(&user.email, &user.name, notification::OTP_MAIL_SUBJECT, &body)
            .await
            .map_err(|e| CredentialError::NotificationFailure(e.to_string()))?;

        let address = user.email.as_ref().expose_secret().clone();

        if !receipt.accepted() {
            return Ok(OtpRequestResponse::MailRejected {
                name: user.name,
                email: address,
                otp: otp.value(),
            });
        }

        self.verification_store
            .update_all_for_user(user.id, &otp)
            .await?;

        Ok(OtpRequestResponse::Sent {
            name: user.name,
            email: address,
            otp: otp.value(),
        })
    }
}
