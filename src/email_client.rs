use reqwest::Client;
use secrecy::{ExposeSecret, Secret};

/// REST client for the transactional email delivery service.
pub struct EmailClient {
    http_client: Client,
    base_url: String,
    sender: String,
    authorization_token: Secret<String>,
}

#[derive(thiserror::Error, Debug)]
pub enum SendEmailError {
    /// The request never produced a response the service vouched for:
    /// connection failures, timeouts, malformed URLs.
    #[error("Failed to reach the email delivery service")]
    Transport(#[from] reqwest::Error),
    /// The service answered and refused the message.
    #[error("The email delivery service rejected the message: {0}")]
    Rejected(reqwest::StatusCode),
}

impl EmailClient {
    pub fn new(
        base_url: String,
        sender: String,
        authorization_token: Secret<String>,
        timeout: std::time::Duration,
    ) -> Self {
        let http_client = Client::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to build the HTTP client.");
        Self {
            http_client,
            base_url,
            sender,
            authorization_token,
        }
    }

    pub async fn send_email(
        &self,
        recipient: &str,
        reply_to: &str,
        subject: &str,
        html_content: &str,
        text_content: &str,
    ) -> Result<(), SendEmailError> {
        let url = format!("{}/emails", self.base_url);
        let request_body = SendEmailRequest {
            from: &self.sender,
            to: vec![recipient],
            subject,
            reply_to,
            html: html_content,
            text: text_content,
        };
        let response = self
            .http_client
            .post(&url)
            .bearer_auth(self.authorization_token.expose_secret())
            .json(&request_body)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(SendEmailError::Rejected(response.status()));
        }
        Ok(())
    }
}

#[derive(serde::Serialize)]
struct SendEmailRequest<'a> {
    from: &'a str,
    to: Vec<&'a str>,
    subject: &'a str,
    reply_to: &'a str,
    html: &'a str,
    text: &'a str,
}
