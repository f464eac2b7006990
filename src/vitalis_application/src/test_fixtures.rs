//! Hand-rolled port implementations shared by the use-case tests. The stores
//! count their write calls so tests can assert on side effects, not just on
//! returned envelopes.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use secrecy::{ExposeSecret, Secret};
use tokio::sync::RwLock;
use vitalis_core::{
    AuthProvider, CredentialHasher, Email, HasherError, MailReceipt, MailRelay, MailRelayError,
    NationalId, NewUser, Otp, Password, SessionClaims, TokenError, TokenIssuer, User, UserPatch,
    UserStore, UserStoreError, VerificationStore, VerificationStoreError,
};

pub fn email(address: &str) -> Email {
    Email::try_from(Secret::from(address.to_owned())).unwrap()
}

pub fn national_id(id: &str) -> NationalId {
    NationalId::try_from(id.to_owned()).unwrap()
}

pub fn password(raw: &str) -> Password {
    Password::try_from(Secret::from(raw.to_owned())).unwrap()
}

/// A local account whose password verifies as `raw_password` under
/// [`MockHasher`].
pub fn local_new_user(name: &str, nik: &str, address: &str, raw_password: &str) -> NewUser {
    NewUser {
        name: name.to_owned(),
        national_id: Some(national_id(nik)),
        email: email(address),
        date_of_birth: None,
        gender: Some("female".to_owned()),
        agreement_accepted: true,
        password_hash: Some(Secret::from(format!("hashed:{raw_password}"))),
        photo_url: None,
        phone_code: Some("+62".to_owned()),
        phone_number: Some("8123456789".to_owned()),
        push_token: None,
        federated_id: None,
        auth_provider: AuthProvider::Local,
    }
}

// ---------------------------------------------------------------------------
// User store
// ---------------------------------------------------------------------------

#[derive(Default)]
struct UsersInner {
    users: HashMap<i64, User>,
    next_id: i64,
    create_calls: usize,
    update_calls: usize,
}

#[derive(Clone, Default)]
pub struct MockUserStore {
    inner: Arc<RwLock<UsersInner>>,
}

impl MockUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a user without counting it as a flow-made write.
    pub async fn seed(&self, new_user: NewUser) -> User {
        let mut inner = self.inner.write().await;
        insert(&mut inner, new_user)
    }

    pub async fn user_count(&self) -> usize {
        self.inner.read().await.users.len()
    }

    pub async fn create_calls(&self) -> usize {
        self.inner.read().await.create_calls
    }

    pub async fn update_calls(&self) -> usize {
        self.inner.read().await.update_calls
    }

    pub async fn get(&self, id: i64) -> Option<User> {
        self.inner.read().await.users.get(&id).cloned()
    }
}

fn insert(inner: &mut UsersInner, new_user: NewUser) -> User {
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
    user
}

#[async_trait]
impl UserStore for MockUserStore {
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, UserStoreError> {
        Ok(self.inner.read().await.users.get(&id).cloned())
    }

    async fn find_by_national_id(
        &self,
        national_id: &NationalId,
    ) -> Result<Option<User>, UserStoreError> {
        Ok(self
            .inner
            .read()
            .await
            .users
            .values()
            .find(|u| u.national_id.as_ref() == Some(national_id))
            .cloned())
    }

    async fn find_by_email(&self, email: &Email) -> Result<Option<User>, UserStoreError> {
        Ok(self
            .inner
            .read()
            .await
            .users
            .values()
            .find(|u| u.email == *email)
            .cloned())
    }

    async fn find_by_federated_id(
        &self,
        federated_id: &str,
    ) -> Result<Option<User>, UserStoreError> {
        Ok(self
            .inner
            .read()
            .await
            .users
            .values()
            .find(|u| u.federated_id.as_deref() == Some(federated_id))
            .cloned())
    }

    async fn create(&self, new_user: NewUser) -> Result<User, UserStoreError> {
        let mut inner = self.inner.write().await;
        inner.create_calls += 1;
        let duplicate = inner.users.values().any(|u| {
            u.email == new_user.email
                || (new_user.national_id.is_some() && u.national_id == new_user.national_id)
                || (new_user.federated_id.is_some() && u.federated_id == new_user.federated_id)
        });
        if duplicate {
            return Err(UserStoreError::DuplicateUser);
        }
        Ok(insert(&mut inner, new_user))
    }

    async fn update(&self, id: i64, patch: UserPatch) -> Result<User, UserStoreError> {
        let mut inner = self.inner.write().await;
        inner.update_calls += 1;
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

// ---------------------------------------------------------------------------
// Verification store
// ---------------------------------------------------------------------------

#[derive(Default)]
struct VerificationsInner {
    rows: HashMap<i64, String>,
    create_calls: usize,
    update_calls: usize,
}

#[derive(Clone, Default)]
pub struct MockVerificationStore {
    inner: Arc<RwLock<VerificationsInner>>,
}

impl MockVerificationStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn current_otp(&self, user_id: i64) -> Option<String> {
        self.inner.read().await.rows.get(&user_id).cloned()
    }

    pub async fn row_count(&self) -> usize {
        self.inner.read().await.rows.len()
    }

    pub async fn create_calls(&self) -> usize {
        self.inner.read().await.create_calls
    }

    pub async fn update_calls(&self) -> usize {
        self.inner.read().await.update_calls
    }
}

#[async_trait]
impl VerificationStore for MockVerificationStore {
    async fn create_for_user(
        &self,
        user_id: i64,
        otp: &Otp,
    ) -> Result<(), VerificationStoreError> {
        let mut inner = self.inner.write().await;
        inner.create_calls += 1;
        inner.rows.insert(user_id, otp.code());
        Ok(())
    }

    async fn update_all_for_user(
        &self,
        user_id: i64,
        otp: &Otp,
    ) -> Result<(), VerificationStoreError> {
        let mut inner = self.inner.write().await;
        inner.update_calls += 1;
        if let Some(row) = inner.rows.get_mut(&user_id) {
            *row = otp.code();
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Mail relay
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct SentMail {
    pub to: String,
    pub display_name: String,
    pub subject: String,
    pub body: String,
}

/// Relay double answering with a fixed application code, or failing at
/// transport level when constructed with [`MockMailRelay::unreachable`].
#[derive(Clone)]
pub struct MockMailRelay {
    code: Option<u16>,
    sent: Arc<RwLock<Vec<SentMail>>>,
}

impl MockMailRelay {
    pub fn accepting() -> Self {
        Self::answering(200)
    }

    pub fn answering(code: u16) -> Self {
        Self {
            code: Some(code),
            sent: Arc::default(),
        }
    }

    pub fn unreachable() -> Self {
        Self {
            code: None,
            sent: Arc::default(),
        }
    }

    pub async fn sent(&self) -> Vec<SentMail> {
        self.sent.read().await.clone()
    }
}

#[async_trait]
impl MailRelay for MockMailRelay {
    async fn send(
        &self,
        to: &Email,
        display_name: &str,
        subject: &str,
        html_body: &str,
    ) -> Result<MailReceipt, MailRelayError> {
        let Some(code) = self.code else {
            return Err(MailRelayError::Transport("connection refused".to_owned()));
        };
        self.sent.write().await.push(SentMail {
            to: to.as_ref().expose_secret().clone(),
            display_name: display_name.to_owned(),
            subject: subject.to_owned(),
            body: html_body.to_owned(),
        });
        Ok(MailReceipt {
            code,
            raw: serde_json::json!({ "code": code }),
        })
    }
}

// ---------------------------------------------------------------------------
// Hasher and token issuer
// ---------------------------------------------------------------------------

#[derive(Clone, Default)]
pub struct MockHasher;

#[async_trait]
impl CredentialHasher for MockHasher {
    async fn hash(&self, password: &Password) -> Result<Secret<String>, HasherError> {
        Ok(Secret::from(format!(
            "hashed:{}",
            password.as_ref().expose_secret()
        )))
    }

    async fn verify(
        &self,
        candidate: &Password,
        hash: &Secret<String>,
    ) -> Result<bool, HasherError> {
        let expected = format!("hashed:{}", candidate.as_ref().expose_secret());
        Ok(hash.expose_secret() == &expected)
    }
}

/// "Signs" by serializing the claims to JSON so tests can inspect exactly
/// what would go into a real token.
#[derive(Clone, Default)]
pub struct MockTokenIssuer;

impl TokenIssuer for MockTokenIssuer {
    fn sign(&self, claims: SessionClaims) -> Result<String, TokenError> {
        serde_json::to_string(&claims).map_err(|e| TokenError::Signing(e.to_string()))
    }

    fn verify(&self, token: &str) -> Result<SessionClaims, TokenError> {
        serde_json::from_str(token).map_err(|_| TokenError::InvalidToken)
    }
}

pub fn decode_claims(token: &str) -> SessionClaims {
    MockTokenIssuer.verify(token).unwrap()
}
