pub mod google_login;
pub mod login;
pub mod profile;
pub mod register;
pub mod request_otp;
pub mod validate_session;
