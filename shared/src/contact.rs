//! Contact form model.
//!
//! The site has no mail backend; a valid submission is only logged in the
//! browser.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A problem with one contact form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ContactFieldError {
    /// Name left blank.
    #[error("Please enter your name")]
    MissingName,
    /// Email blank or not shaped like an address.
    #[error("Please enter a valid email address")]
    InvalidEmail,
    /// Message left blank.
    #[error("Please write a message")]
    MissingMessage,
}

/// Values typed into the contact form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    /// Sender name.
    pub name: String,
    /// Reply address.
    pub email: String,
    /// Message body.
    pub message: String,
}

impl ContactForm {
    /// Every problem with the form, in field order. Empty when the form can
    /// be submitted.
    pub fn validate(&self) -> Vec<ContactFieldError> {
        let mut errors = Vec::new();
        if self.name.trim().is_empty() {
            errors.push(ContactFieldError::MissingName);
        }
        if !looks_like_email(self.email.trim()) {
            errors.push(ContactFieldError::InvalidEmail);
        }
        if self.message.trim().is_empty() {
            errors.push(ContactFieldError::MissingMessage);
        }
        errors
    }

    /// Whether [`Self::validate`] finds nothing.
    pub fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}

fn looks_like_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && !email.contains(char::is_whitespace)
        && domain
            .split_once('.')
            .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(name: &str, email: &str, message: &str) -> ContactForm {
        ContactForm {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        }
    }

    #[test]
    fn complete_form_is_valid() {
        assert!(form("Ada", "ada@example.com", "Hi there").is_valid());
    }

    #[test]
    fn reports_every_problem_in_order() {
        assert_eq!(
            ContactForm::default().validate(),
            vec![
                ContactFieldError::MissingName,
                ContactFieldError::InvalidEmail,
                ContactFieldError::MissingMessage,
            ]
        );
    }

    #[test]
    fn rejects_malformed_addresses() {
        for email in ["ada", "@example.com", "ada@", "ada@example", "a b@example.com", "a@b@c.com"] {
            assert_eq!(
                form("Ada", email, "Hi").validate(),
                vec![ContactFieldError::InvalidEmail],
                "{email}"
            );
        }
    }
}
