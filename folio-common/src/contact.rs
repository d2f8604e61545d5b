//! Contact form validation.

use thiserror::Error;

/// Why a contact form submission was rejected before sending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ContactError {
    #[error("Please complete all fields.")]
    MissingFields,
    #[error("Please enter a valid email address.")]
    InvalidEmail,
    #[error("Contact form is not configured. Please email me directly.")]
    NotConfigured,
}

/// One contact form submission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn validate(&self) -> Result<(), ContactError> {
        if self.name.is_empty() || self.email.is_empty() || self.message.is_empty() {
            return Err(ContactError::MissingFields);
        }
        if !is_valid_email(&self.email) {
            return Err(ContactError::InvalidEmail);
        }
        Ok(())
    }
}

/// Shape check only: one `@`, no whitespace, and a dot strictly inside the
/// domain part. Deliverability is the mail provider's problem.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    // Byte indexing would split multi-byte characters; walk chars instead.
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
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
    fn test_all_fields_required() {
        assert_eq!(
            form("", "a@b.com", "hi").validate(),
            Err(ContactError::MissingFields)
        );
        assert_eq!(
            form("Ana", "", "hi").validate(),
            Err(ContactError::MissingFields)
        );
        assert_eq!(
            form("Ana", "a@b.com", "").validate(),
            Err(ContactError::MissingFields)
        );
    }

    #[test]
    fn test_valid_submission() {
        assert_eq!(form("Ana", "ana@example.com", "hello").validate(), Ok(()));
    }

    #[test]
    fn test_email_shapes() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("first.last@sub.domain.org"));

        assert!(!is_valid_email("plain"));
        assert!(!is_valid_email("no@dot"));
        assert!(!is_valid_email("two@@at.com"));
        assert!(!is_valid_email("white space@b.co"));
        assert!(!is_valid_email("@b.co"));
        assert!(!is_valid_email("a@.co"));
        assert!(!is_valid_email("a@co."));
    }

    #[test]
    fn test_email_with_non_ascii_domain() {
        // Multi-byte characters at the domain edges must not panic the
        // inner-dot check.
        assert!(is_valid_email("a@é.com"));
        assert!(is_valid_email("a@b.cé"));
        assert!(is_valid_email("ñandú@müller.de"));
        assert!(!is_valid_email("a@é."));
        assert!(!is_valid_email("a@.é"));
    }
}
