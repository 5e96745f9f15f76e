#[derive(Debug)]
pub struct MessageBody(String);

impl MessageBody {
    pub fn parse(s: String) -> Result<MessageBody, String> {
        if s.trim().is_empty() {
            Err("The message body is empty.".to_string())
        } else {
            Ok(Self(s))
        }
    }
}

impl AsRef<str> for MessageBody {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
