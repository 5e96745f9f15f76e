pub mod contact_submission;
pub mod message_body;
pub mod message_subject;
pub mod submitter_email;
pub mod submitter_name;

pub use contact_submission::ContactSubmission;
pub use message_body::MessageBody;
pub use message_subject::MessageSubject;
pub use submitter_email::SubmitterEmail;
pub use submitter_name::SubmitterName;
