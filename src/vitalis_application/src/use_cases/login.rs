use vitalis_core::{
    CredentialHasher, MailRelay, NationalId, Otp, Password, PublicUser, SessionClaims, TokenIssuer,
    UserStore, VerificationStore,
};

use crate::{error::CredentialError, notification};

/// Response from the login use case
#[derive(Debug)]
pub enum LoginResponse {
    /// Credentials matched and the relay accepted the notification. Unlike
    /// registration, the signed token embeds the OTP.
    LoggedIn {
        token: String,
        otp: u64,
        user: PublicUser,
    },
    /// Credentials matched but the relay rejected the mail; no token is
    /// minted and the stored OTP is left as it was.
    MailRejected { otp: u64 },
}

/// Login use case - password check gated behind a fresh OTP notification.
pub struct LoginUseCase<U, V, M, H, T>
where
    U: UserStore,
    V: VerificationStore,
    M: MailRelay,
    H: CredentialHasher,
    T: TokenIssuer,
{
    user_store: U,
    verification_store: V,
    mail_relay: M,
    hasher: H,
    token_issuer: T,
}

impl<U, V, M, H, T> LoginUseCase<U, V, M, H, T>
where
    U: UserStore,
    V: VerificationStore,
    M: MailRelay,
    H: CredentialHasher,
    T: TokenIssuer,
{
    pub fn new(
        user_store: U,
        verification_store: V,
        mail_relay: M,
        hasher: H,
        token_issuer: T,
    ) -> Self {
        Self {
            user_store,
            verification_store,
            mail_relay,
            hasher,
            token_issuer,
        }
    }

    #[tracing::instrument(name = "LoginUseCase::execute", skip(self, password))]
    pub async fn execute(
        &self,
        national_id: NationalId,
        password: Password,
    ) -> Result<LoginResponse, CredentialError> {
        // Absent user and wrong password return the same error so responses
        // do not leak which national IDs exist.
        let user = self
            .user_store
            .find_by_national_id(&national_id)
            .await?
            .ok_or(CredentialError::InvalidCredentials)?;

        let Some(password_hash) = user.password_hash.as_ref() else {
            return Err(CredentialError::FederatedAccountOnly);
        };

        if !self.hasher.verify(&password, password_hash).await? {
            return Err(CredentialError::InvalidCredentials);
        }

        let otp = Otp::generate();
        let body = notification::otp_email(&user.name, &otp)?;

        let receipt = self
            .mail_relay
            .send(&user.email, &user.name, notification::OTP_MAIL_SUBJECT, &body)
            .await
            .map_err(|e| CredentialError::NotificationUnavailable(e.to_string()))?;

        if !receipt.accepted() {
            return Ok(LoginResponse::MailRejected { otp: otp.value() });
        }

        // Overwrite, never append: the new code invalidates all prior ones.
        self.verification_store
            .update_all_for_user(user.id, &otp)
            .await?;

        let token = self
            .token_issuer
            .sign(SessionClaims::for_user(&user).with_otp(&otp))?;

        Ok(LoginResponse::LoggedIn {
            token,
            otp: otp.value(),
            user: PublicUser::from(&user),
        })
    }
}
