use vitalis_core::{SessionClaims, TokenIssuer, UserStore};

use crate::error::CredentialError;

/// Session validation use case - decode a presented token and confirm its
/// subject still exists. A lookup-and-confirm step, never a mutation.
pub struct ValidateSessionUseCase<U, T>
where
    U: UserStore,
    T: TokenIssuer,
{
    user_store: U,
    token_issuer: T,
}

impl<U, T> ValidateSessionUseCase<U, T>
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

    #[tracing::instrument(name = "ValidateSessionUseCase::execute", skip_all)]
    pub async fn execute(&self, token: &str) -> Result<SessionClaims, CredentialError> {
        let claims = self.token_issuer.verify(token)?;

        if self.user_store.find_by_id(claims.sub).await?.is_none() {
            return Err(CredentialError::StaleSession);
        }

        Ok(claims)
    }
}
