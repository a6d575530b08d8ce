// web_app/model/forms.rs - Form payloads and inline validation
//
// Validation errors are reported per field, next to the offending input,
// and block the (simulated) submission until resolved.

use std::collections::BTreeMap;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Artificial latency of every simulated form submission
pub const SUBMIT_DELAY: Duration = Duration::from_millis(1000);

/// Minimum length of a contact message
pub const MIN_MESSAGE_LEN: usize = 10;

/// Minimum length of a signup password
pub const MIN_PASSWORD_LEN: usize = 8;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum FormField {
    Name,
    Email,
    Subject,
    Message,
    Password,
    ConfirmPassword,
    Terms,
}

impl FormField {
    /// HTML id/name attribute of the input
    pub fn as_str(&self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::Email => "email",
            FormField::Subject => "subject",
            FormField::Message => "message",
            FormField::Password => "password",
            FormField::ConfirmPassword => "confirm_password",
            FormField::Terms => "terms",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Name is required")]
    NameRequired,
    #[error("Full name is required")]
    FullNameRequired,
    #[error("Email is required")]
    EmailRequired,
    #[error("Invalid email format")]
    InvalidEmail,
    #[error("Subject is required")]
    SubjectRequired,
    #[error("Message is required")]
    MessageRequired,
    #[error("Message must be at least {min} characters")]
    MessageTooShort { min: usize },
    #[error("Password is required")]
    PasswordRequired,
    #[error("Password must be at least {min} characters")]
    PasswordTooShort { min: usize },
    #[error("Please confirm your password")]
    ConfirmationRequired,
    #[error("Passwords do not match")]
    PasswordMismatch,
    #[error("You must accept the terms")]
    TermsNotAccepted,
}

/// First validation error of each offending field
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<FormField, ValidationError>);

impl FieldErrors {
    /// Record `error` unless the field already has one
    pub fn add(&mut self, field: FormField, error: ValidationError) {
        self.0.entry(field).or_insert(error);
    }

    pub fn get(&self, field: FormField) -> Option<&ValidationError> {
        self.0.get(&field)
    }

    /// Display message for `field`, if it failed validation
    pub fn message(&self, field: FormField) -> Option<String> {
        self.get(field).map(ToString::to_string)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn fields(&self) -> impl Iterator<Item = FormField> + '_ {
        self.0.keys().copied()
    }

    fn into_result(self) -> Result<(), FieldErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

/// Loose structural e-mail check: `local@domain.tld`, no whitespace
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
    let labels: Vec<&str> = domain.split('.').collect();
    labels.len() >= 2 && labels.iter().all(|label| !label.is_empty())
}

// Surrounding whitespace is ignored for required fields and e-mail shape
fn check_email(errors: &mut FieldErrors, email: &str) {
    if email.trim().is_empty() {
        errors.add(FormField::Email, ValidationError::EmailRequired);
    } else if !is_valid_email(email.trim()) {
        errors.add(FormField::Email, ValidationError::InvalidEmail);
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::default();

        if self.name.trim().is_empty() {
            errors.add(FormField::Name, ValidationError::NameRequired);
        }
        check_email(&mut errors, &self.email);
        if self.subject.trim().is_empty() {
            errors.add(FormField::Subject, ValidationError::SubjectRequired);
        }
        if self.message.trim().is_empty() {
            errors.add(FormField::Message, ValidationError::MessageRequired);
        } else if self.message.chars().count() < MIN_MESSAGE_LEN {
            errors.add(
                FormField::Message,
                ValidationError::MessageTooShort { min: MIN_MESSAGE_LEN },
            );
        }

        errors.into_result()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    pub remember_me: bool,
}

impl LoginForm {
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::default();
        check_email(&mut errors, &self.email);
        if self.password.is_empty() {
            errors.add(FormField::Password, ValidationError::PasswordRequired);
        }
        errors.into_result()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignupForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub accept_terms: bool,
}

impl SignupForm {
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::default();

        if self.name.trim().is_empty() {
            errors.add(FormField::Name, ValidationError::FullNameRequired);
        }
        check_email(&mut errors, &self.email);
        if self.password.is_empty() {
            errors.add(FormField::Password, ValidationError::PasswordRequired);
        } else if self.password.chars().count() < MIN_PASSWORD_LEN {
            errors.add(
                FormField::Password,
                ValidationError::PasswordTooShort { min: MIN_PASSWORD_LEN },
            );
        }
        if self.confirm_password.is_empty() {
            errors.add(FormField::ConfirmPassword, ValidationError::ConfirmationRequired);
        } else if self.confirm_password != self.password {
            errors.add(FormField::ConfirmPassword, ValidationError::PasswordMismatch);
        }
        if !self.accept_terms {
            errors.add(FormField::Terms, ValidationError::TermsNotAccepted);
        }

        errors.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_contact() -> ContactForm {
        ContactForm {
            name: "Priya Singh".to_string(),
            email: "priya@example.com".to_string(),
            subject: "Demo".to_string(),
            message: "Please schedule a demo for our team.".to_string(),
        }
    }

    #[test]
    fn test_valid_contact_form() {
        assert!(valid_contact().validate().is_ok());
    }

    #[test]
    fn test_empty_name_is_required() {
        let form = ContactForm {
            name: String::new(),
            ..valid_contact()
        };
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.message(FormField::Name).as_deref(), Some("Name is required"));
    }

    #[test]
    fn test_whitespace_name_is_required() {
        let form = ContactForm {
            name: "   ".to_string(),
            ..valid_contact()
        };
        assert_eq!(form.validate().unwrap_err().get(FormField::Name), Some(&ValidationError::NameRequired));
    }

    #[test]
    fn test_padded_email_is_accepted() {
        let form = ContactForm {
            email: "  priya@example.com ".to_string(),
            ..valid_contact()
        };
        assert!(form.validate().is_ok());

        let inner_space = ContactForm {
            email: "priya @example.com".to_string(),
            ..valid_contact()
        };
        assert_eq!(
            inner_space.validate().unwrap_err().get(FormField::Email),
            Some(&ValidationError::InvalidEmail)
        );
    }

    #[test]
    fn test_short_message() {
        let form = ContactForm {
            message: "Hi there".to_string(),
            ..valid_contact()
        };
        let errors = form.validate().unwrap_err();
        assert_eq!(
            errors.message(FormField::Message).as_deref(),
            Some("Message must be at least 10 characters")
        );
    }

    #[test]
    fn test_empty_form_reports_every_field() {
        let errors = ContactForm::default().validate().unwrap_err();
        let fields: Vec<_> = errors.fields().collect();
        assert_eq!(
            fields,
            vec![FormField::Name, FormField::Email, FormField::Subject, FormField::Message]
        );
        assert_eq!(errors.message(FormField::Email).as_deref(), Some("Email is required"));
    }

    #[test]
    fn test_email_format() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("first.last+tag@mail.example.org"));
        assert!(!is_valid_email("plainaddress"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("user@localhost"));
        assert!(!is_valid_email("user@example..com"));
        assert!(!is_valid_email("user@@example.com"));
        assert!(!is_valid_email("us er@example.com"));
    }

    #[test]
    fn test_first_error_wins() {
        let mut errors = FieldErrors::default();
        errors.add(FormField::Email, ValidationError::EmailRequired);
        errors.add(FormField::Email, ValidationError::InvalidEmail);
        assert_eq!(errors.get(FormField::Email), Some(&ValidationError::EmailRequired));
    }

    #[test]
    fn test_login_form() {
        let form = LoginForm {
            email: "not-an-email".to_string(),
            password: String::new(),
            remember_me: false,
        };
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.message(FormField::Email).as_deref(), Some("Invalid email format"));
        assert_eq!(errors.message(FormField::Password).as_deref(), Some("Password is required"));

        let ok = LoginForm {
            email: "hr@example.com".to_string(),
            password: "secret".to_string(),
            remember_me: true,
        };
        assert!(ok.validate().is_ok());
    }

    #[test]
    fn test_signup_form() {
        let form = SignupForm {
            name: "Vikram".to_string(),
            email: "vikram@example.com".to_string(),
            password: "short".to_string(),
            confirm_password: "different".to_string(),
            accept_terms: false,
        };
        let errors = form.validate().unwrap_err();
        assert_eq!(
            errors.message(FormField::Password).as_deref(),
            Some("Password must be at least 8 characters")
        );
        assert_eq!(errors.get(FormField::ConfirmPassword), Some(&ValidationError::PasswordMismatch));
        assert_eq!(errors.get(FormField::Terms), Some(&ValidationError::TermsNotAccepted));

        let ok = SignupForm {
            password: "long enough".to_string(),
            confirm_password: "long enough".to_string(),
            accept_terms: true,
            ..form
        };
        assert!(ok.validate().is_ok());
    }

    #[test]
    fn test_field_names() {
        assert_eq!(FormField::ConfirmPassword.as_str(), "confirm_password");
        assert_eq!(FormField::Name.as_str(), "name");
    }
}
