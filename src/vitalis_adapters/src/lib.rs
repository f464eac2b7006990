pub mod auth_validation;
pub mod config;
pub mod email;
pub mod hashing;
pub mod persistence;

pub use auth_validation::{JwtConfig, JwtTokenIssuer};
pub use email::{HttpMailRelay, MockMailRelay};
pub use hashing::Argon2Hasher;
pub use persistence::{
    HashMapUserStore, HashMapVerificationStore, PostgresUserStore, PostgresVerificationStore,
};
