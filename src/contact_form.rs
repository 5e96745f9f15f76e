use crate::domain::ContactSubmission;
use crate::mail_dispatcher::ContactResponse;

/// The seam between the form and whatever delivers the submission. The
/// in-process implementation is `MailDispatcher`; presentation layers that
/// talk to the server over HTTP implement this over their transport instead.
#[allow(async_fn_in_trait)]
pub trait ContactGateway {
    async fn send_contact_notification(&self, submission: &ContactSubmission) -> ContactResponse;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormState {
    Idle,
    Submitting,
    Submitted,
}

/// Owns the contact-form fields and the submission lifecycle. Defined once
/// here so every rendering surface adapts over the same state machine
/// instead of duplicating it.
pub struct ContactForm<G> {
    gateway: G,
    name: String,
    email: String,
    subject: String,
    message: String,
    state: FormState,
    error: Option<String>,
}

impl<G: ContactGateway> ContactForm<G> {
    pub fn new(gateway: G) -> Self {
        Self {
            gateway,
            name: String::new(),
            email: String::new(),
            subject: String::new(),
            message: String::new(),
            state: FormState::Idle,
            error: None,
        }
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
    }

    pub fn set_subject(&mut self, subject: impl Into<String>) {
        self.subject = subject.into();
    }

    pub fn set_message(&mut self, message: impl Into<String>) {
        self.message = message.into();
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn subject(&self) -> &str {
        &self.subject
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn state(&self) -> FormState {
        self.state
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Attempt a submission with the current field values.
    ///
    /// Ignored outside `Idle` (the submit control is disabled while a
    /// submission is in flight and hidden once one has succeeded). The
    /// gateway is invoked at most once, and only after all four fields
    /// pass the presence check.
    pub async fn submit(&mut self) {
        if self.state != FormState::Idle {
            return;
        }
        self.error = None;

        let submission = match ContactSubmission::parse(
            self.name.clone(),
            self.email.clone(),
            self.subject.clone(),
            self.message.clone(),
        ) {
            Ok(submission) => submission,
            Err(_) => {
                self.error = Some("Please fill out all fields".to_string());
                return;
            }
        };

        self.state = FormState::Submitting;
        let response = self.gateway.send_contact_notification(&submission).await;

        if response.success {
            self.state = FormState::Submitted;
            self.clear_fields();
        } else {
            self.state = FormState::Idle;
            self.error = Some(response.error.unwrap_or_else(|| {
                "An unexpected error occurred. Please try again later.".to_string()
            }));
        }
    }

    /// The "send another message" action: back to a pristine `Idle` form.
    pub fn reset(&mut self) {
        self.state = FormState::Idle;
        self.error = None;
        self.clear_fields();
    }

    fn clear_fields(&mut self) {
        self.name.clear();
        self.email.clear();
        self.subject.clear();
        self.message.clear();
    }
}
