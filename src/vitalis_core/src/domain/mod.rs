pub mod claims;
pub mod email;
pub mod national_id;
pub mod otp;
pub mod password;
pub mod user;
pub mod verification;
