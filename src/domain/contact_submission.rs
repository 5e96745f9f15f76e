use crate::domain::{MessageBody, MessageSubject, SubmitterEmail, SubmitterName};

/// One contact-form interaction, with every field known to be present.
/// Lives in memory for a single submission attempt and is never persisted.
#[derive(Debug)]
pub struct ContactSubmission {
    pub name: SubmitterName,
    pub email: SubmitterEmail,
    pub subject: MessageSubject,
    pub message: MessageBody,
}

impl ContactSubmission {
    pub fn parse(
        name: String,
        email: String,
        subject: String,
        message: String,
    ) -> Result<ContactSubmission, String> {
        let name = SubmitterName::parse(name)?;
        let email = SubmitterEmail::parse(email)?;
        let subject = MessageSubject::parse(subject)?;
        let message = MessageBody::parse(message)?;
        Ok(Self {
            name,
            email,
            subject,
            message,
        })
    }
}
