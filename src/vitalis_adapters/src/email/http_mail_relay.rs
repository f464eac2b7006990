use reqwest::{Client, Url};
use secrecy::ExposeSecret;
use vitalis_core::{Email, MailReceipt, MailRelay, MailRelayError};

/// Client for the hospital mail relay. The relay takes everything as query
/// parameters on a GET and reports delivery through a `code` field in its
/// JSON body rather than the HTTP status line.
#[derive(Clone)]
pub struct HttpMailRelay {
    http_client: Client,
    base_url: String,
}

impl HttpMailRelay {
    pub fn new(base_url: String, http_client: Client) -> Self {
        Self {
            http_client,
            base_url,
        }
    }
}

#[async_trait::async_trait]
impl MailRelay for HttpMailRelay {
    #[tracing::instrument(name = "Sending mail through relay", skip_all)]
    async fn send(
        &self,
        to: &Email,
        display_name: &str,
        subject: &str,
        html_body: &str,
    ) -> Result<MailReceipt, MailRelayError> {
        let base = Url::parse(&self.base_url).map_err(|e| MailRelayError::Transport(e.to_string()))?;
        let url = base
            .join("mail")
            .map_err(|e| MailRelayError::Transport(e.to_string()))?;

        let response = self
            .http_client
            .get(url)
            .query(&[
                ("email", to.as_ref().expose_secret().as_str()),
                ("ename", display_name),
                ("subjek", subject),
                ("ebody", html_body),
            ])
            .send()
            .await
            .map_err(|e| MailRelayError::Transport(e.to_string()))?
            .error_for_status()
            .map_err(|e| MailRelayError::Transport(e.to_string()))?;

        let raw: serde_json::Value = response
            .json()
            .await
            .map_err(|e| MailRelayError::Transport(e.to_string()))?;

        let code = raw
            .get("code")
            .and_then(|c| c.as_u64())
            .ok_or_else(|| {
                MailRelayError::Transport("relay response is missing a numeric code".to_owned())
            })?;
        let code = u16::try_from(code).map_err(|_| {
            MailRelayError::Transport(format!("relay answered with out-of-range code {code}"))
        })?;

        Ok(MailReceipt { code, raw })
    }
}
