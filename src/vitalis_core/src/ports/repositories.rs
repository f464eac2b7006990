use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{
    email::Email,
    national_id::NationalId,
    otp::Otp,
    user::{NewUser, User, UserPatch},
};

// UserStore port trait and errors
#[derive(Debug, Error)]
pub enum UserStoreError {
    #[error("User already exists")]
    DuplicateUser,
    #[error("User not found")]
    UserNotFound,
    #[error("Unexpected error: {0}")]
    UnexpectedError(String),
}

impl PartialEq for UserStoreError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::DuplicateUser, Self::DuplicateUser) => true,
            (Self::UserNotFound, Self::UserNotFound) => true,
            (Self::UnexpectedError(_), Self::UnexpectedError(_)) => true,
            _ => false,
        }
    }
}

/// Persistence for [`User`] records.
///
/// Implementations enforce uniqueness of email, national ID and federated ID
/// at the storage layer; concurrent writers race on that enforcement and the
/// loser receives [`UserStoreError::DuplicateUser`].
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, UserStoreError>;
    async fn find_by_national_id(
        &self,
        national_id: &NationalId,
    ) -> Result<Option<User>, UserStoreError>;
    async fn find_by_email(&self, email: &Email) -> Result<Option<User>, UserStoreError>;
    async fn find_by_federated_id(
        &self,
        federated_id: &str,
    ) -> Result<Option<User>, UserStoreError>;
    async fn create(&self, new_user: NewUser) -> Result<User, UserStoreError>;
    async fn update(&self, id: i64, patch: UserPatch) -> Result<User, UserStoreError>;
}

// VerificationStore port trait and errors
#[derive(Debug, Error)]
pub enum VerificationStoreError {
    #[error("Unexpected error: {0}")]
    UnexpectedError(String),
}

/// Persistence for per-user OTP records.
///
/// Overwrite semantics only: there is no selection by OTP value, and
/// `update_all_for_user` affecting zero rows is a silent no-op, matching a
/// relational update-many.
#[async_trait]
pub trait VerificationStore: Send + Sync {
    async fn create_for_user(&self, user_id: i64, otp: &Otp)
    -> Result<(), VerificationStoreError>;
    async fn update_all_for_user(
        &self,
        user_id: i64,
        otp: &Otp,
    ) -> Result<(), VerificationStoreError>;
}
