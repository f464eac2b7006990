//! Axum route handlers for the credential flows.
//!
//! Handlers validate wire input, hand off to the use cases, and translate
//! the outcome back to the mobile app's response envelopes.

pub mod error;
pub mod google_login;
pub mod login;
pub mod profile;
pub mod register;
pub mod request_otp;

pub use google_login::google_login;
pub use login::login;
pub use profile::profile;
pub use register::register;
pub use request_otp::request_otp;
