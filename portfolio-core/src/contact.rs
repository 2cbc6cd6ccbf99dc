use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use thiserror::Error;

/// Characters `encodeURIComponent` leaves alone besides ASCII alphanumerics.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Simulated processing time before the mail client is opened (ms).
pub const SUBMIT_DELAY_MS: u32 = 1000;
pub const SUCCESS_MESSAGE: &str = "Thank you for your message! Your email client should open now.";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ContactError {
    #[error("Please fill in your {0}.")]
    MissingField(&'static str),
    #[error("\"{0}\" does not look like an email address.")]
    InvalidEmail(String),
}

/// The four fields of the contact form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

pub fn encode_component(s: &str) -> String {
    utf8_percent_encode(s, COMPONENT).to_string()
}

impl ContactMessage {
    pub fn validate(&self) -> Result<(), ContactError> {
        for (label, value) in [
            ("name", &self.name),
            ("email", &self.email),
            ("message", &self.message),
        ] {
            if value.trim().is_empty() {
                return Err(ContactError::MissingField(label));
            }
        }
        let email = self.email.trim();
        match email.split_once('@') {
            Some((user, host)) if !user.is_empty() && !host.is_empty() && !host.contains('@') => {
                Ok(())
            }
            _ => Err(ContactError::InvalidEmail(email.to_string())),
        }
    }

    pub fn body(&self) -> String {
        format!(
            "Name: {}\nEmail: {}\n\nMessage:\n{}",
            self.name, self.email, self.message
        )
    }

    /// `mailto:` URI that pre-fills the subject and body in the user's mail
    /// client.
    pub fn mailto_uri(&self, recipient: &str) -> String {
        format!(
            "mailto:{}?subject={}&body={}",
            recipient,
            encode_component(&self.subject),
            encode_component(&self.body())
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn msg() -> ContactMessage {
        ContactMessage {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            subject: "Hi & bye".into(),
            message: "50% done?".into(),
        }
    }

    #[test]
    fn encodes_like_encode_uri_component() {
        assert_eq!(encode_component("a b&c=d/é"), "a%20b%26c%3Dd%2F%C3%A9");
        assert_eq!(encode_component("-_.!~*'()"), "-_.!~*'()");
    }

    #[test]
    fn builds_mailto() {
        assert_eq!(
            msg().mailto_uri("me@site.dev"),
            "mailto:me@site.dev?subject=Hi%20%26%20bye&body=Name%3A%20Ada%0AEmail%3A%20ada%40example.com%0A%0AMessage%3A%0A50%25%20done%3F"
        );
    }

    #[test]
    fn empty_subject_is_allowed() {
        let mut m = msg();
        m.subject.clear();
        assert!(m.validate().is_ok());
        assert!(m.mailto_uri("x@y").contains("?subject=&body="));
    }

    #[test]
    fn validation_errors() {
        let mut m = msg();
        m.name = "  ".into();
        assert_eq!(m.validate(), Err(ContactError::MissingField("name")));
        let mut m = msg();
        m.email = "ada.example.com".into();
        assert_eq!(
            m.validate(),
            Err(ContactError::InvalidEmail("ada.example.com".into()))
        );
        assert_eq!(
            ContactError::MissingField("message").to_string(),
            "Please fill in your message."
        );
    }
}
