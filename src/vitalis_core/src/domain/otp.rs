use rand::Rng;

pub const DEFAULT_OTP_DIGITS: u32 = 6;

const MAX_OTP_DIGITS: u32 = 18;

/// A one-time numeric passcode.
///
/// An n-digit code is drawn uniformly from `[10^(n-1), 10^n - 1]`, so the
/// leading digit is never zero and the rendered code always has exactly n
/// digits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Otp {
    value: u64,
    digits: u32,
}

impl Otp {
    /// Generate a code with the default digit count.
    pub fn generate() -> Self {
        Self::generate_with_digits(DEFAULT_OTP_DIGITS)
    }

    /// Generate a code with exactly `digits` digits (clamped to 1..=18).
    ///
    /// `rand::rng()` is a CSPRNG reseeded from the OS, which is what a
    /// verification code needs.
    pub fn generate_with_digits(digits: u32) -> Self {
        let digits = digits.clamp(1, MAX_OTP_DIGITS);
        let (min, max) = Self::bounds(digits);
        let value = rand::rng().random_range(min..=max);
        Self { value, digits }
    }

    fn bounds(digits: u32) -> (u64, u64) {
        let min = if digits == 1 { 1 } else { 10u64.pow(digits - 1) };
        let max = 10u64.pow(digits) - 1;
        (min, max)
    }

    /// The code as the numeric value returned in response bodies.
    pub fn value(&self) -> u64 {
        self.value
    }

    pub fn digits(&self) -> u32 {
        self.digits
    }

    /// The code as the fixed-length digit string stored alongside the user.
    pub fn code(&self) -> String {
        self.value.to_string()
    }
}

impl std::fmt::Display for Otp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}
