use chrono::Utc;
use jsonwebtoken::{DecodingKey, EncodingKey, Validation, decode, encode};
use secrecy::{ExposeSecret, Secret};
use vitalis_core::{SessionClaims, TokenError, TokenIssuer};

#[derive(Clone)]
pub struct JwtConfig {
    pub jwt_secret: Secret<String>,
    pub token_ttl_in_seconds: i64,
}

impl JwtConfig {
    pub fn as_bytes(&self) -> &[u8] {
        self.jwt_secret.expose_secret().as_bytes()
    }
}

/// HMAC-signed bearer tokens. The expiry is stamped at signing time from the
/// configured TTL; whatever `exp` the caller put in the claims is replaced.
#[derive(Clone)]
pub struct JwtTokenIssuer {
    config: JwtConfig,
}

impl JwtTokenIssuer {
    pub fn new(config: JwtConfig) -> Self {
        Self { config }
    }
}

impl TokenIssuer for JwtTokenIssuer {
    fn sign(&self, mut claims: SessionClaims) -> Result<String, TokenError> {
        let delta = chrono::Duration::try_seconds(self.config.token_ttl_in_seconds)
            .ok_or_else(|| TokenError::Signing("Failed to create token duration".to_owned()))?;

        let exp = Utc::now()
            .checked_add_signed(delta)
            .ok_or_else(|| TokenError::Signing("Duration out of range".to_owned()))?
            .timestamp();

        claims.exp = exp
            .try_into()
            .map_err(|_| TokenError::Signing("Failed to cast i64 to usize".to_owned()))?;

        encode(
            &jsonwebtoken::Header::default(),
            &claims,
            &EncodingKey::from_secret(self.config.as_bytes()),
        )
        .map_err(|e| TokenError::Signing(e.to_string()))
    }

    fn verify(&self, token: &str) -> Result<SessionClaims, TokenError> {
        decode::<SessionClaims>(
            token,
            &DecodingKey::from_secret(self.config.as_bytes()),
            &Validation::default(),
        )
        .map(|data| data.claims)
        .map_err(|_| TokenError::InvalidToken)
    }
}
