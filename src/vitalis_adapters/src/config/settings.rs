use secrecy::Secret;
use serde::Deserialize;
use thiserror::Error;

use super::constants::{env, prod};

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Configuration error: {0}")]
    Load(#[from] config::ConfigError),
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppSettings {
    pub address: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PostgresSettings {
    pub url: Secret<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct JwtSettings {
    pub secret: Secret<String>,
    pub time_to_live: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MailRelaySettings {
    pub base_url: String,
    pub timeout_in_millis: u64,
}

/// Runtime configuration, defaults overridden by environment variables.
/// `dotenvy::dotenv()` in the binary loads a local `.env` first, so the
/// same loader serves development and deployment.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub app: AppSettings,
    pub postgres: PostgresSettings,
    pub jwt: JwtSettings,
    pub mail_relay: MailRelaySettings,
}

impl Settings {
    pub fn load() -> Result<Self, SettingsError> {
        let mut builder = config::Config::builder()
            .set_default("app.address", prod::APP_ADDRESS)?
            .set_default("jwt.time_to_live", prod::JWT_TTL_IN_SECONDS)?
            .set_default("mail_relay.base_url", prod::mail_relay::BASE_URL)?
            .set_default(
                "mail_relay.timeout_in_millis",
                prod::mail_relay::TIMEOUT.as_millis() as u64,
            )?;

        for (var, key) in [
            (env::APP_ADDRESS_ENV_VAR, "app.address"),
            (env::DATABASE_URL_ENV_VAR, "postgres.url"),
            (env::JWT_SECRET_ENV_VAR, "jwt.secret"),
            (env::JWT_TTL_ENV_VAR, "jwt.time_to_live"),
            (env::MAIL_RELAY_BASE_URL_ENV_VAR, "mail_relay.base_url"),
        ] {
            if let Ok(value) = std::env::var(var) {
                builder = builder.set_override(key, value)?;
            }
        }

        Ok(builder.build()?.try_deserialize()?)
    }
}
