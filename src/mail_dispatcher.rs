use htmlescape::encode_minimal;

use crate::contact_form::ContactGateway;
use crate::domain::ContactSubmission;
use crate::email_client::{EmailClient, SendEmailError};

const SUBJECT_PREFIX: &str = "Contact Form: ";

/// Turns a contact submission into one outbound email to the configured
/// recipient, with the submitter's address as reply-to.
pub struct MailDispatcher {
    email_client: EmailClient,
    recipient: String,
}

/// The normalized outcome returned to whoever triggered the submission.
/// Failures carry one of two generic user-facing strings; the underlying
/// detail only ever reaches the logs.
#[derive(Debug, Clone, serde::Serialize)]
pub struct ContactResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ContactResponse {
    pub fn success() -> Self {
        Self {
            success: true,
            error: None,
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(error.into()),
        }
    }
}

impl MailDispatcher {
    pub fn new(email_client: EmailClient, recipient: String) -> Self {
        Self {
            email_client,
            recipient,
        }
    }

    /// Send the contact notification. Presence validation is the caller's
    /// job; empty fields are forwarded as-is. Every outcome, including a
    /// transport fault, comes back as a `ContactResponse` value.
    #[tracing::instrument(
        name = "Dispatching a contact notification",
        skip(self, name, email, subject, message),
        fields(submitter_email = %email, subject = %subject)
    )]
    pub async fn dispatch(
        &self,
        name: &str,
        email: &str,
        subject: &str,
        message: &str,
    ) -> ContactResponse {
        let subject_line = format!("{}{}", SUBJECT_PREFIX, subject);
        let text_body = text_body(name, email, message);
        let html_body = html_body(name, email, subject, message);

        match self
            .email_client
            .send_email(&self.recipient, email, &subject_line, &html_body, &text_body)
            .await
        {
            Ok(()) => {
                tracing::info!("Contact notification delivered to the email service");
                ContactResponse::success()
            }
            Err(e @ SendEmailError::Rejected(_)) => {
                tracing::error!(
                    error.cause_chain = ?e,
                    error.message = %e,
                    "The email service rejected the contact notification"
                );
                ContactResponse::failure("Failed to send email. Please try again later.")
            }
            Err(e) => {
                tracing::error!(
                    error.cause_chain = ?e,
                    error.message = %e,
                    "Failed to deliver the contact notification"
                );
                ContactResponse::failure("An unexpected error occurred. Please try again later.")
            }
        }
    }
}

impl ContactGateway for MailDispatcher {
    async fn send_contact_notification(&self, submission: &ContactSubmission) -> ContactResponse {
        self.dispatch(
            submission.name.as_ref(),
            submission.email.as_ref(),
            submission.subject.as_ref(),
            submission.message.as_ref(),
        )
        .await
    }
}

fn text_body(name: &str, email: &str, message: &str) -> String {
    format!(
        "Name: {}\nEmail: {}\n\nMessage:\n{}",
        name, email, message
    )
}

fn html_body(name: &str, email: &str, subject: &str, message: &str) -> String {
    // Literal newlines in the message become `<br>` after escaping.
    let message = encode_minimal(message).replace('\n', "<br>");
    format!(
        "<div style=\"font-family: sans-serif; max-width: 600px; margin: 0 auto;\">\
         <h2 style=\"color: #b8860b;\">New message from the Era Trio website</h2>\
         <p><strong>From:</strong> {} ({})</p>\
         <p><strong>Subject:</strong> {}</p>\
         <div style=\"margin-top: 20px; padding: 15px; background-color: #f5f5f5; \
         border-left: 4px solid #b8860b;\"><p>{}</p></div></div>",
        encode_minimal(name),
        encode_minimal(email),
        encode_minimal(subject),
        message,
    )
}
