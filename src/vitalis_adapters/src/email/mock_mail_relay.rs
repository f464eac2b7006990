use vitalis_core::{Email, MailReceipt, MailRelay, MailRelayError, MAIL_ACCEPTED_CODE};

/// Mail relay stand-in that always answers with a fixed code. Useful for
/// local runs and black-box tests where no relay is reachable.
#[derive(Debug, Clone)]
pub struct MockMailRelay {
    code: u16,
}

impl MockMailRelay {
    pub fn new() -> Self {
        Self::answering(MAIL_ACCEPTED_CODE)
    }

    pub fn answering(code: u16) -> Self {
        Self { code }
    }
}

impl Default for MockMailRelay {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl MailRelay for MockMailRelay {
    async fn send(
        &self,
        _to: &Email,
        _display_name: &str,
        _subject: &str,
        _html_body: &str,
    ) -> Result<MailReceipt, MailRelayError> {
        Ok(MailReceipt {
            code: self.code,
            raw: serde_json::json!({ "code": self.code }),
        })
    }
}
