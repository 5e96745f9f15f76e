#[derive(Debug)]
pub struct SubmitterName(String);

impl SubmitterName {
    /// Returns `Ok` when the input contains at least one non-whitespace
    /// character. No length or character-set restrictions apply.
    pub fn parse(s: String) -> Result<SubmitterName, String> {
        if s.trim().is_empty() {
            Err(format!("{} is not a valid submitter name.", s))
        } else {
            Ok(Self(s))
        }
    }
}

impl AsRef<str> for SubmitterName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
