#[derive(Debug)]
pub struct SubmitterEmail(String);

impl SubmitterEmail {
    /// Presence is the only requirement. The address doubles as the
    /// reply-to of the outbound notification, and an overly strict format
    /// check here would reject unusual-but-deliverable addresses, so the
    /// format is deliberately not validated.
    pub fn parse(s: String) -> Result<SubmitterEmail, String> {
        if s.trim().is_empty() {
            Err(format!("{} is not a valid submitter email.", s))
        } else {
            Ok(Self(s))
        }
    }
}

impl AsRef<str> for SubmitterEmail {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
