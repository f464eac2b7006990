use argon2::{
    Algorithm, Argon2, Params, PasswordHash, PasswordVerifier, Version,
    password_hash::{PasswordHasher, SaltString, rand_core},
};
use secrecy::{ExposeSecret, Secret};
use vitalis_core::{CredentialHasher, HasherError, Password};

/// Argon2id hasher. The work happens on the blocking pool so a burst of
/// logins does not starve the async runtime.
#[derive(Debug, Clone, Default)]
pub struct Argon2Hasher;

impl Argon2Hasher {
    pub fn new() -> Self {
        Self
    }
}

fn argon2() -> Result<Argon2<'static>, HasherError> {
    Ok(Argon2::new(
        Algorithm::Argon2id,
        Version::V0x13,
        Params::new(15000, 2, 1, None).map_err(|e| HasherError::Hash(e.to_string()))?,
    ))
}

#[async_trait::async_trait]
impl CredentialHasher for Argon2Hasher {
    #[tracing::instrument(name = "Computing password hash", skip_all)]
    async fn hash(&self, password: &Password) -> Result<Secret<String>, HasherError> {
        let password = password.clone();
        let current_span: tracing::Span = tracing::Span::current();

        tokio::task::spawn_blocking(move || {
            current_span.in_scope(move || {
                let salt: SaltString = SaltString::generate(rand_core::OsRng);
                argon2()?
                    .hash_password(password.as_ref().expose_secret().as_bytes(), &salt)
                    .map(|h| Secret::from(h.to_string()))
                    .map_err(|e| HasherError::Hash(e.to_string()))
            })
        })
        .await
        .map_err(|e| HasherError::Hash(e.to_string()))?
    }

    #[tracing::instrument(name = "Verifying password hash", skip_all)]
    async fn verify(
        &self,
        candidate: &Password,
        hash: &Secret<String>,
    ) -> Result<bool, HasherError> {
        let candidate = candidate.clone();
        let hash = hash.clone();
        let current_span: tracing::Span = tracing::Span::current();

        tokio::task::spawn_blocking(move || {
            current_span.in_scope(|| {
                let parsed: PasswordHash<'_> = PasswordHash::new(hash.expose_secret())
                    .map_err(|e| HasherError::Hash(e.to_string()))?;

                match argon2()?
                    .verify_password(candidate.as_ref().expose_secret().as_bytes(), &parsed)
                {
                    Ok(()) => Ok(true),
                    Err(argon2::password_hash::Error::Password) => Ok(false),
                    Err(e) => Err(HasherError::Hash(e.to_string())),
                }
            })
        })
        .await
        .map_err(|e| HasherError::Hash(e.to_string()))?
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn password(raw: &str) -> Password {
        Password::try_from(Secret::from(raw.to_owned())).unwrap()
    }

    #[tokio::test]
    async fn hash_then_verify_round_trips() {
        let hasher = Argon2Hasher::new();
        let hash = hasher.hash(&password("hunter22")).await.unwrap();

        assert!(hasher.verify(&password("hunter22"), &hash).await.unwrap());
    }

    #[tokio::test]
    async fn wrong_password_is_a_clean_false() {
        let hasher = Argon2Hasher::new();
        let hash = hasher.hash(&password("hunter22")).await.unwrap();

        assert!(!hasher.verify(&password("hunter23"), &hash).await.unwrap());
    }

    #[tokio::test]
    async fn garbage_hash_is_an_error_not_a_mismatch() {
        let hasher = Argon2Hasher::new();
        let result = hasher
            .verify(&password("hunter22"), &Secret::from("not-a-phc-string".to_owned()))
            .await;

        assert!(matches!(result, Err(HasherError::Hash(_))));
    }

    #[tokio::test]
    async fn hashes_are_salted() {
        let hasher = Argon2Hasher::new();
        let first = hasher.hash(&password("hunter22")).await.unwrap();
        let second = hasher.hash(&password("hunter22")).await.unwrap();

        assert_ne!(first.expose_secret(), second.expose_secret());
    }
}
