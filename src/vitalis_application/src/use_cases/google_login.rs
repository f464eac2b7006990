use vitalis_core::{
    AuthProvider, Email, NewUser, PublicUser, SessionClaims, TokenIssuer, UserPatch, UserStore,
};

use crate::error::CredentialError;

/// A caller-verified Google identity assertion. Verifying the provider
/// token's signature is the caller's job; this flow trusts the fields as
/// given.
#[derive(Debug, Clone)]
pub struct GoogleLoginRequest {
    pub federated_id: String,
    pub email: Email,
    pub name: String,
    pub picture: Option<String>,
}

#[derive(Debug)]
pub struct GoogleLoginResponse {
    pub token: String,
    pub user: PublicUser,
    /// No national ID on the record means the account has never completed a
    /// local registration.
    pub is_new_account: bool,
}

/// Federated login use case - find, link or create, then mint a session.
///
/// No OTP, no mail relay, no verification row anywhere in this path.
pub struct GoogleLoginUseCase<U, T>
where
    U: UserStore,
    T: TokenIssuer,
{
    user_store: U,
    token_issuer: T,
}

impl<U, T> GoogleLoginUseCase<U, T>
where
    U: UserStore,
    T: TokenIssuer,
{
    pub fn new(user_store: U, token_issuer: T) -> Self {
        Self {
            user_store,
            token_issuer,
        }
    }

    #[tracing::instrument(name = "GoogleLoginUseCase::execute", skip(self, request))]
    pub async fn execute(
        &self,
        request: GoogleLoginRequest,
    ) -> Result<GoogleLoginResponse, CredentialError> {
        let user = match self
            .user_store
            .find_by_federated_id(&request.federated_id)
            .await?
        {
            // Known federated identity: refresh the mutable display fields.
            Some(user) => {
                self.user_store
                    .update(
                        user.id,
                        UserPatch {
                            name: Some(request.name),
                            photo_url: request.picture,
                            ..UserPatch::default()
                        },
                    )
                    .await?
            }
            None => match self.user_store.find_by_email(&request.email).await? {
                // Existing local account: link the federated identity onto it.
                Some(user) => {
                    self.user_store
                        .update(
                            user.id,
                            UserPatch {
                                name: Some(request.name),
                                photo_url: request.picture,
                                federated_id: Some(request.federated_id),
                                auth_provider: Some(AuthProvider::Google),
                            },
                        )
                        .await?
                }
                None => {
                    self.user_store
                        .create(NewUser::federated(
                            request.federated_id,
                            request.email,
                            request.name,
                            request.picture,
                        ))
                        .await?
                }
            },
        };

        let token = self.token_issuer.sign(SessionClaims::for_user(&user))?;
        let is_new_account = user.national_id.is_none();

        Ok(GoogleLoginResponse {
            token,
            user: PublicUser::from(&user),
            is_new_account,
        })
    }
}
