//! Structured form records and their validation.
//!
//! Every required field is checked the same way: trimmed, then tested for
//! emptiness. A whitespace-only value counts as missing.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormField {
    Name,
    Email,
    Subject,
    Message,
    Content,
}

impl FormField {
    pub fn label(self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::Email => "email",
            FormField::Subject => "subject",
            FormField::Message => "message",
            FormField::Content => "comment",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("missing required fields: {}", join_fields(.0))]
    MissingFields(Vec<FormField>),
    #[error("`{0}` is not a valid email address")]
    InvalidEmail(String),
}

impl FormError {
    /// Short user-facing title, as shown in the form's error banner.
    pub fn title(&self) -> &'static str {
        match self {
            FormError::MissingFields(_) => "Missing fields",
            FormError::InvalidEmail(_) => "Invalid email",
        }
    }
}

fn join_fields(fields: &[FormField]) -> String {
    fields
        .iter()
        .map(|field| field.label())
        .collect::<Vec<_>>()
        .join(", ")
}

pub(crate) fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Collect the blank fields out of `(field, value)` pairs.
pub(crate) fn require(fields: &[(FormField, &str)]) -> Result<(), FormError> {
    let missing = fields
        .iter()
        .filter(|(_, value)| is_blank(value))
        .map(|(field, _)| *field)
        .collect::<Vec<_>>();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(FormError::MissingFields(missing))
    }
}

/// Contact page form. `subject` is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// Snapshot of a successfully submitted contact form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: Option<String>,
    pub message: String,
}

impl ContactForm {
    pub fn validate(&self) -> Result<(), FormError> {
        require(&[
            (FormField::Name, self.name.as_str()),
            (FormField::Email, self.email.as_str()),
            (FormField::Message, self.message.as_str()),
        ])
    }

    /// Validate, hand back the message and reset the form. On failure the
    /// form keeps what the visitor typed.
    pub fn submit(&mut self) -> Result<ContactMessage, FormError> {
        self.validate()?;
        let form = std::mem::take(self);
        let subject = Some(form.subject).filter(|subject| !is_blank(subject));
        tracing::debug!(has_subject = subject.is_some(), "contact form submitted");
        Ok(ContactMessage {
            name: form.name,
            email: form.email,
            subject,
            message: form.message,
        })
    }
}

/// Footer newsletter box.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsletterForm {
    pub email: String,
}

impl NewsletterForm {
    pub fn validate(&self) -> Result<(), FormError> {
        require(&[(FormField::Email, self.email.as_str())])?;
        if looks_like_email(self.email.trim()) {
            Ok(())
        } else {
            Err(FormError::InvalidEmail(self.email.trim().to_string()))
        }
    }

    /// Returns the trimmed, lowercased address and clears the field.
    pub fn submit(&mut self) -> Result<String, FormError> {
        self.validate()?;
        let email = std::mem::take(&mut self.email).trim().to_lowercase();
        tracing::debug!("newsletter subscription accepted");
        Ok(email)
    }
}

// One `@`, text on both sides, no whitespace.
fn looks_like_email(value: &str) -> bool {
    match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && !domain.contains('@')
                && !value.chars().any(char::is_whitespace)
        },
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_contact() -> ContactForm {
        ContactForm {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            subject: String::new(),
            message: "Hello there".to_string(),
        }
    }

    #[test]
    fn contact_requires_name_email_message() {
        let err = ContactForm::default().validate().expect_err("empty form");
        assert_eq!(
            err,
            FormError::MissingFields(vec![FormField::Name, FormField::Email, FormField::Message])
        );
        assert_eq!(err.to_string(), "missing required fields: name, email, message");
        assert_eq!(err.title(), "Missing fields");
    }

    #[test]
    fn whitespace_only_counts_as_missing() {
        let mut form = filled_contact();
        form.message = "   \n\t".to_string();
        let before = form.clone();
        assert_eq!(
            form.submit(),
            Err(FormError::MissingFields(vec![FormField::Message]))
        );
        assert_eq!(form, before, "failed submit keeps input");
    }

    #[test]
    fn contact_submit_resets_form() {
        let mut form = filled_contact();
        let sent = form.submit().expect("valid form");
        assert_eq!(sent.subject, None);
        assert_eq!(sent.name, "Ada");
        assert_eq!(form, ContactForm::default());

        let mut form = ContactForm {
            subject: "Collab".to_string(),
            ..filled_contact()
        };
        assert_eq!(form.submit().expect("valid form").subject.as_deref(), Some("Collab"));
    }

    #[test]
    fn newsletter_normalizes_email() {
        let mut form = NewsletterForm {
            email: "  Reader@Example.COM ".to_string(),
        };
        assert_eq!(form.submit().expect("valid email"), "reader@example.com");
        assert!(form.email.is_empty());
    }

    #[test]
    fn newsletter_rejects_malformed_addresses() {
        for bad in ["plainaddress", "@example.com", "user@", "a@b@c", "a b@c.d"] {
            let mut form = NewsletterForm {
                email: bad.to_string(),
            };
            assert!(
                matches!(form.submit(), Err(FormError::InvalidEmail(_))),
                "{bad} should be rejected"
            );
            assert_eq!(form.email, bad);
        }
        assert_eq!(
            NewsletterForm::default().validate(),
            Err(FormError::MissingFields(vec![FormField::Email]))
        );
    }
}
