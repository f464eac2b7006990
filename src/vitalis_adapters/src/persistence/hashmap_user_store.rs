use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use tokio::sync::RwLock;
use vitalis_core::{
    Email, NationalId, NewUser, User, UserPatch, UserStore, UserStoreError,
};

#[derive(Default)]
struct Inner {
    users: HashMap<i64, User>,
    next_id: i64,
}

/// In-memory user store for tests and local runs. Uniqueness of email,
/// national ID and federated ID is enforced under a single write lock, the
/// same tie-break a relational store gives via unique constraints.
#[derive(Default, Clone)]
pub struct HashMapUserStore {
    inner: Arc<RwLock<Inner>>,
}

impl HashMapUserStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl UserStore for HashMapUserStore {
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, UserStoreError> {
        let inner = self.inner.read().await;
        Ok(inner.users.get(&id).cloned())
    }

    async fn find_by_national_id(
        &self,
        national_id: &NationalId,
    ) -> Result<Option<User>, UserStoreError> {
        let inner = self.inner.read().await;
        Ok(inner
            .users
            .values()
            .find(|u| u.national_id.as_ref() == Some(national_id))
            .cloned())
    }

    async fn find_by_email(&self, email: &Email) -> Result<Option<User>, UserStoreError> {
        let inner = self.inner.read().await;
        Ok(inner.users.values().find(|u| u.email == *email).cloned())
    }

    async fn find_by_federated_id(
        &self,
        federated_id: &str,
    ) -> Result<Option<User>, UserStoreError> {
        let inner = self.inner.read().await;
        Ok(inner
            .users
            .values()
            .find(|u| u.federated_id.as_deref() == Some(federated_id))
            .cloned())
    }

    async fn create(&self, new_user: NewUser) -> Result<User, UserStoreError> {
        let mut inner = self.inner.write().await;

        let duplicate = inner.users.values().any(|u| {
            u.email == new_user.email
                || (new_user.national_id.is_some() && u.national_id == new_user.national_id)
                || (new_user.federated_id.is_some() && u.federated_id == new_user.federated_id)
        });
        if duplicate {
            return Err(UserStoreError::DuplicateUser);
        }

        inner.next_id += 1;
        let now = Utc::now();
        let user = User {
            id: inner.next_id,
            name: new_user.name,
            national_id: new_user.national_id,
            email: new_user.email,
            date_of_birth: new_user.date_of_birth,
            gender: new_user.gender,
            agreement_accepted: new_user.agreement_accepted,
            password_hash: new_user.password_hash,
            photo_url: new_user.photo_url,
            phone_code: new_user.phone_code,
            phone_number: new_user.phone_number,
            push_token: new_user.push_token,
            federated_id: new_user.federated_id,
            auth_provider: new_user.auth_provider,
            created_at: now,
            updated_at: now,
        };
        inner.users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn update(&self, id: i64, patch: UserPatch) -> Result<User, UserStoreError> {
        let mut inner = self.inner.write().await;
        let user = inner
            .users
            .get_mut(&id)
            .ok_or(UserStoreError::UserNotFound)?;

        if let Some(name) = patch.name {
            user.name = name;
        }
        if let Some(photo_url) = patch.photo_url {
            user.photo_url = Some(photo_url);
        }
        if let Some(federated_id) = patch.federated_id {
            user.federated_id = Some(federated_id);
        }
        if let Some(auth_provider) = patch.auth_provider {
            user.auth_provider = auth_provider;
        }
        user.updated_at = Utc::now();

        Ok(user.clone())
    }
}
