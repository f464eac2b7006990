use chrono::{DateTime, Utc};
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};

use super::{otp::Otp, user::User};

/// The claims payload signed into a session token.
///
/// A denormalized snapshot of the user at signing time plus, for password
/// logins only, the OTP issued alongside the token. `exp` is filled in by the
/// token issuer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionClaims {
    pub sub: i64,
    pub id: i64,
    pub name: String,
    pub national_id: Option<String>,
    pub email: String,
    pub phone_number: Option<String>,
    pub phone_code: Option<String>,
    pub push_token: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub otp: Option<u64>,
    #[serde(default)]
    pub exp: usize,
}

impl SessionClaims {
    pub fn for_user(user: &User) -> Self {
        Self {
            sub: user.id,
            id: user.id,
            name: user.name.clone(),
            national_id: user.national_id.as_ref().map(|n| n.as_str().to_owned()),
            email: user.email.as_ref().expose_secret().clone(),
            phone_number: user.phone_number.clone(),
            phone_code: user.phone_code.clone(),
            push_token: user.push_token.clone(),
            created_at: user.created_at,
            updated_at: user.updated_at,
            otp: None,
            exp: 0,
        }
    }

    pub fn with_otp(mut self, otp: &Otp) -> Self {
        self.otp = Some(otp.value());
        self
    }
}
