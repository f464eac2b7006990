use chrono::NaiveDate;
use vitalis_core::{
    AuthProvider, CredentialHasher, Email, MailRelay, NationalId, NewUser, Otp, Password,
    PublicUser, SessionClaims, TokenIssuer, UserStore, UserStoreError, VerificationStore,
};

use crate::{error::CredentialError, notification};

/// Pre-validated registration input; the boundary layer has already checked
/// shapes and presence.
#[derive(Debug, Clone)]
pub struct RegisterRequest {
    pub name: String,
    pub national_id: NationalId,
    pub email: Email,
    pub date_of_birth: NaiveDate,
    pub gender: String,
    pub agreement_accepted: bool,
    pub password: Password,
    pub photo_url: Option<String>,
    pub phone_code: String,
    pub phone_number: String,
    pub push_token: Option<String>,
}

/// Response from the register use case
#[derive(Debug)]
pub enum RegisterResponse {
    /// The relay accepted the notification and the account was created.
    /// The signed token does not embed the OTP.
    Registered {
        token: String,
        otp: u64,
        user: PublicUser,
    },
    /// The relay answered with a non-success application code. No account
    /// was created; the generated OTP is echoed back for diagnostics.
    MailRejected { otp: u64 },
}

/// Register use case - OTP-gated account creation.
///
/// Mail-relay success is a precondition for persisting anything: a transport
/// fault or an application-level rejection both leave the store untouched.
pub struct RegisterUseCase<U, V, M, H, T>
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

impl<U, V, M, H, T> RegisterUseCase<U, V, M, H, T>
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

    #[tracing::instrument(name = "RegisterUseCase::execute", skip(self, request))]
    pub async fn execute(
        &self,
        request: RegisterRequest,
    ) -> Result<RegisterResponse, CredentialError> {
        if self
            .user_store
            .find_by_national_id(&request.national_id)
            .await?
            .is_some()
        {
            return Err(CredentialError::DuplicateIdentity);
        }

        let otp = Otp::generate();
        let body = notification::otp_email(&request.name, &otp)?;

        let receipt = self
            .mail_relay
            .send(
                &request.email,
                &request.name,
                notification::OTP_MAIL_SUBJECT,
                &body,
            )
            .await
            .map_err(|e| CredentialError::NotificationUnavailable(e.to_string()))?;

        if !receipt.accepted() {
            return Ok(RegisterResponse::MailRejected { otp: otp.value() });
        }

        let password_hash = self.hasher.hash(&request.password).await?;

        // A concurrent registration may have won the race since the lookup;
        // the store's uniqueness enforcement is the tie-break.
        let user = self
            .user_store
            .create(NewUser {
                name: request.name,
                national_id: Some(request.national_id),
                email: request.email,
                date_of_birth: Some(request.date_of_birth),
                gender: Some(request.gender),
                agreement_accepted: request.agreement_accepted,
                password_hash: Some(password_hash),
                photo_url: request.photo_url,
                phone_code: Some(request.phone_code),
                phone_number: Some(request.phone_number),
                push_token: request.push_token,
                federated_id: None,
                auth_provider: AuthProvider::Local,
            })
            .await
            .map_err(|e| match e {
                UserStoreError::DuplicateUser => CredentialError::DuplicateIdentity,
                other => CredentialError::from(other),
            })?;

        self.verification_store
            .create_for_user(user.id, &otp)
            .await?;

        let token = self.token_issuer.sign(SessionClaims::for_user(&user))?;

        Ok(RegisterResponse::Registered {
            token,
            otp: otp.value(),
            user: PublicUser::from(&user),
        })
    }
}
