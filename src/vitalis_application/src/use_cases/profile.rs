use vitalis_core::{UserProfile, UserStore};

use crate::error::CredentialError;

/// Profile use case - the authenticated user's record minus the password
/// hash.
pub struct ProfileUseCase<U>
where
    U: UserStore,
{
    user_store: U,
}

impl<U> ProfileUseCase<U>
where
    U: UserStore,
{
    pub fn new(user_store: U) -> Self {
        Self { user_store }
    }

    #[tracing::instrument(name = "ProfileUseCase::execute", skip(self))]
    pub async fn execute(&self, user_id: i64) -> Result<UserProfile, CredentialError> {
        let user = self
            .user_store
            .find_by_id(user_id)
            .await?
            .ok_or(CredentialError::StaleSession)?;

        Ok(UserProfile::from(&user))
    }
}
