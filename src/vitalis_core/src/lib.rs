pub mod domain;
pub mod ports;

// Re-export commonly used types for convenience
pub use domain::{
    claims::SessionClaims,
    email::{Email, EmailError},
    national_id::{NationalId, NationalIdError},
    otp::{DEFAULT_OTP_DIGITS, Otp},
    password::{Password, PasswordError},
    user::{AuthProvider, NewUser, PublicUser, User, UserPatch, UserProfile},
    verification::Verification,
};

pub use ports::{
    repositories::{UserStore, UserStoreError, VerificationStore, VerificationStoreError},
    services::{
        CredentialHasher, HasherError, MAIL_ACCEPTED_CODE, MailReceipt, MailRelay, MailRelayError,
        TokenError, TokenIssuer,
    },
};
