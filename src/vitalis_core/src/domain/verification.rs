use chrono::{DateTime, Utc};

/// The OTP record kept per user.
///
/// Each new issuance overwrites the stored code; only the most recently
/// written value is semantically valid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verification {
    pub otp: String,
    pub user_id: i64,
    pub issued_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
