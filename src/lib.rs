//! # Vitalis - Credential Service Library
//!
//! This is a facade crate that re-exports all public APIs from the credential
//! service components. Use this crate to get access to the full OTP-gated
//! credential lifecycle in one place.
//!
//! ## Usage
//!
//! Add to your `Cargo.toml`:
//! ```toml
//! [dependencies]
//! vitalis = { path = "../vitalis" }
//! ```
//!
//! ## Structure
//!
//! - **Core domain types**: `Email`, `Password`, `NationalId`, `Otp`, `User`, etc.
//! - **Repository traits**: `UserStore`, `VerificationStore`
//! - **Use cases**: `RegisterUseCase`, `LoginUseCase`, `RequestOtpUseCase`, etc.
//! - **Adapters**: `PostgresUserStore`, `HttpMailRelay`, `Argon2Hasher`, etc.
//! - **Service**: `AuthService` - the HTTP entry point

// ============================================================================
// Core Domain Types
// ============================================================================

/// Core domain types and value objects
pub mod core {
    pub use vitalis_core::*;
}

// Re-export most commonly used core types at the root level
pub use vitalis_core::{
    AuthProvider, Email, EmailError, NationalId, NationalIdError, NewUser, Otp, Password,
    PasswordError, PublicUser, SessionClaims, User, UserPatch, UserProfile,
};

// ============================================================================
// Ports
// ============================================================================

/// Repository and service trait definitions
pub mod ports {
    pub use vitalis_core::ports::*;
}

// Re-export port traits at root level
pub use vitalis_core::{
    CredentialHasher, MailRelay, TokenIssuer, UserStore, UserStoreError, VerificationStore,
    VerificationStoreError,
};

// ============================================================================
// Use Cases (Application Layer)
// ============================================================================

/// Application use cases
pub mod use_cases {
    pub use vitalis_application::*;
}

// Re-export use cases at root level
pub use vitalis_application::{
    CredentialError, GoogleLoginUseCase, LoginUseCase, ProfileUseCase, RegisterUseCase,
    RequestOtpUseCase, ValidateSessionUseCase,
};

// ============================================================================
// Adapters (Infrastructure)
// ============================================================================

/// Infrastructure adapters
pub mod adapters {
    /// Persistence implementations
    pub mod persistence {
        pub use vitalis_adapters::persistence::*;
    }

    /// Mail relay clients
    pub mod email {
        pub use vitalis_adapters::email::*;
    }

    /// Password hashing
    pub mod hashing {
        pub use vitalis_adapters::hashing::*;
    }

    /// JWT token utilities
    pub mod auth {
        pub use vitalis_adapters::auth_validation::*;
    }

    /// Configuration
    pub mod config {
        pub use vitalis_adapters::config::*;
    }
}

// Re-export commonly used adapters at root level
pub use vitalis_adapters::{
    Argon2Hasher, HttpMailRelay, JwtConfig, JwtTokenIssuer, MockMailRelay,
    persistence::{
        HashMapUserStore, HashMapVerificationStore, PostgresUserStore, PostgresVerificationStore,
    },
};

// ============================================================================
// Auth Service (Main Entry Point)
// ============================================================================

/// HTTP service entry point
pub use vitalis_auth_service::{AppState, AuthService, init_tracing};

// ============================================================================
// Re-export common external dependencies
// ============================================================================

/// Re-export async-trait for implementing the port traits
pub use async_trait::async_trait;

/// Re-export secrecy for working with secrets
pub use secrecy::{ExposeSecret, Secret};
