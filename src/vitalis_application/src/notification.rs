use askama::Template;
use vitalis_core::Otp;

use crate::error::CredentialError;

pub const OTP_MAIL_SUBJECT: &str = "Your verification code";

#[derive(Template)]
#[template(path = "otp_email.html")]
struct OtpEmail<'a> {
    name: &'a str,
    otp: &'a str,
}

/// Render the OTP notification body sent through the mail relay.
pub fn otp_email(name: &str, otp: &Otp) -> Result<String, CredentialError> {
    let code = otp.code();
    OtpEmail { name, otp: &code }
        .render()
        .map_err(|e| CredentialError::Unexpected(e.to_string()))
}
