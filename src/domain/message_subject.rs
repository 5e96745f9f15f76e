#[derive(Debug)]
pub struct MessageSubject(String);

impl MessageSubject {
    pub fn parse(s: String) -> Result<MessageSubject, String> {
        if s.trim().is_empty() {
            Err(format!("{} is not a valid message subject.", s))
        } else {
            Ok(Self(s))
        }
    }
}

impl AsRef<str> for MessageSubject {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
