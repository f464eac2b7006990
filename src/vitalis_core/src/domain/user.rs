use chrono::{DateTime, NaiveDate, Utc};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};

use super::{email::Email, national_id::NationalId};

/// Which identity provider vouches for an account's primary credential.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthProvider {
    Local,
    Google,
}

impl AuthProvider {
    pub fn as_str(&self) -> &'static str {
        match self {
            AuthProvider::Local => "local",
            AuthProvider::Google => "google",
        }
    }
}

impl TryFrom<&str> for AuthProvider {
    type Error = String;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "local" => Ok(AuthProvider::Local),
            "google" => Ok(AuthProvider::Google),
            other => Err(format!("Unknown auth provider: {other}")),
        }
    }
}

/// A stored identity record.
///
/// Invariants upheld by the stores: `email` is globally unique, and
/// `national_id`/`federated_id` are unique when present. A valid record has
/// at least one login path (`password_hash` or `federated_id`); a set
/// `federated_id` implies [`AuthProvider::Google`].
#[derive(Debug, Clone)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub national_id: Option<NationalId>,
    pub email: Email,
    pub date_of_birth: Option<NaiveDate>,
    pub gender: Option<String>,
    pub agreement_accepted: bool,
    pub password_hash: Option<Secret<String>>,
    pub photo_url: Option<String>,
    pub phone_code: Option<String>,
    pub phone_number: Option<String>,
    pub push_token: Option<String>,
    pub federated_id: Option<String>,
    pub auth_provider: AuthProvider,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields for a record that does not exist yet; the store assigns id and
/// timestamps. Same invariants as [`User`].
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub national_id: Option<NationalId>,
    pub email: Email,
    pub date_of_birth: Option<NaiveDate>,
    pub gender: Option<String>,
    pub agreement_accepted: bool,
    pub password_hash: Option<Secret<String>>,
    pub photo_url: Option<String>,
    pub phone_code: Option<String>,
    pub phone_number: Option<String>,
    pub push_token: Option<String>,
    pub federated_id: Option<String>,
    pub auth_provider: AuthProvider,
}

impl NewUser {
    /// A federated-only account: no password, no national ID, consent is
    /// implied by the social signup.
    pub fn federated(
        federated_id: String,
        email: Email,
        name: String,
        photo_url: Option<String>,
    ) -> Self {
        Self {
            name,
            national_id: None,
            email,
            date_of_birth: None,
            gender: None,
            agreement_accepted: true,
            password_hash: None,
            photo_url,
            phone_code: None,
            phone_number: None,
            push_token: None,
            federated_id: Some(federated_id),
            auth_provider: AuthProvider::Google,
        }
    }
}

/// Partial update applied by `UserStore::update`; `None` fields keep their
/// stored value.
#[derive(Debug, Clone, Default)]
pub struct UserPatch {
    pub name: Option<String>,
    pub photo_url: Option<String>,
    pub federated_id: Option<String>,
    pub auth_provider: Option<AuthProvider>,
}

/// The user projection embedded in response envelopes: identity and contact
/// fields only, never the password hash.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicUser {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone_number: Option<String>,
    pub phone_code: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&User> for PublicUser {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            email: user.email.as_ref().expose_secret().clone(),
            phone_number: user.phone_number.clone(),
            phone_code: user.phone_code.clone(),
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

/// The full profile view: everything but the password hash.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: i64,
    pub name: String,
    pub national_id: Option<String>,
    pub email: String,
    pub date_of_birth: Option<NaiveDate>,
    pub gender: Option<String>,
    pub agreement_accepted: bool,
    pub photo_url: Option<String>,
    pub phone_code: Option<String>,
    pub phone_number: Option<String>,
    pub push_token: Option<String>,
    pub federated_id: Option<String>,
    pub auth_provider: AuthProvider,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&User> for UserProfile {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            national_id: user.national_id.as_ref().map(|n| n.as_str().to_owned()),
            email: user.email.as_ref().expose_secret().clone(),
            date_of_birth: user.date_of_birth,
            gender: user.gender.clone(),
            agreement_accepted: user.agreement_accepted,
            photo_url: user.photo_url.clone(),
            phone_code: user.phone_code.clone(),
            phone_number: user.phone_number.clone(),
            push_token: user.push_token.clone(),
            federated_id: user.federated_id.clone(),
            auth_provider: user.auth_provider,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}
