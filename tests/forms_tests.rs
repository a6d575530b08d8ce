// Form validation tests for the contact, login and signup forms

use hrgptai_site::web_app::model::forms::{is_valid_email, MIN_MESSAGE_LEN, SUBMIT_DELAY};
use hrgptai_site::web_app::model::{
    ContactForm, FieldErrors, FormField, LoginForm, SignupForm, ValidationError,
};
use std::time::Duration;

fn contact(name: &str, email: &str, subject: &str, message: &str) -> ContactForm {
    ContactForm {
        name: name.to_string(),
        email: email.to_string(),
        subject: subject.to_string(),
        message: message.to_string(),
    }
}

fn signup() -> SignupForm {
    SignupForm {
        name: "Arjun Mehta".to_string(),
        email: "arjun@techcorp.in".to_string(),
        password: "hunter2hunter2".to_string(),
        confirm_password: "hunter2hunter2".to_string(),
        accept_terms: true,
    }
}

// ===== Contact =====

#[test]
fn test_contact_empty_name_blocks_submission() {
    let form = contact("", "a@b.co", "Demo", "I would like a demo please");

    let mut submitted = false;
    match form.validate() {
        Ok(()) => submitted = true,
        Err(errors) => {
            assert_eq!(errors.message(FormField::Name).as_deref(), Some("Name is required"));
        }
    }
    assert!(!submitted);
}

#[test]
fn test_contact_reports_every_invalid_field() {
    let errors = contact("", "", "", "").validate().unwrap_err();
    let fields: Vec<FormField> = errors.fields().collect();
    assert_eq!(
        fields,
        vec![FormField::Name, FormField::Email, FormField::Subject, FormField::Message]
    );
    assert_eq!(errors.get(FormField::Message), Some(&ValidationError::MessageRequired));
}

#[test]
fn test_contact_message_length() {
    let short = "x".repeat(MIN_MESSAGE_LEN - 1);
    let errors = contact("Priya", "priya@example.com", "Hi", &short).validate().unwrap_err();
    assert_eq!(
        errors.message(FormField::Message).as_deref(),
        Some("Message must be at least 10 characters")
    );

    let exact = "x".repeat(MIN_MESSAGE_LEN);
    assert!(contact("Priya", "priya@example.com", "Hi", &exact).validate().is_ok());
}

#[test]
fn test_contact_invalid_email_message() {
    let errors = contact("Priya", "not-an-email", "Hi", "Long enough message")
        .validate()
        .unwrap_err();
    assert_eq!(errors.message(FormField::Email).as_deref(), Some("Invalid email format"));
    assert_eq!(errors.len(), 1);
}

// ===== Login =====

#[test]
fn test_login_requires_email_and_password() {
    let errors = LoginForm::default().validate().unwrap_err();
    assert_eq!(errors.message(FormField::Email).as_deref(), Some("Email is required"));
    assert_eq!(errors.message(FormField::Password).as_deref(), Some("Password is required"));
}

#[test]
fn test_login_valid() {
    let form = LoginForm {
        email: "hr@company.com".to_string(),
        password: "x".to_string(),
        remember_me: true,
    };
    assert!(form.validate().is_ok());
}

// ===== Signup =====

#[test]
fn test_signup_valid() {
    assert!(signup().validate().is_ok());
}

#[test]
fn test_signup_password_rules() {
    let short = SignupForm {
        password: "short".to_string(),
        confirm_password: "short".to_string(),
        ..signup()
    };
    assert_eq!(
        short.validate().unwrap_err().message(FormField::Password).as_deref(),
        Some("Password must be at least 8 characters")
    );

    let mismatch = SignupForm {
        confirm_password: "different-password".to_string(),
        ..signup()
    };
    assert_eq!(
        mismatch.validate().unwrap_err().message(FormField::ConfirmPassword).as_deref(),
        Some("Passwords do not match")
    );

    let unconfirmed = SignupForm {
        confirm_password: String::new(),
        ..signup()
    };
    assert_eq!(
        unconfirmed.validate().unwrap_err().message(FormField::ConfirmPassword).as_deref(),
        Some("Please confirm your password")
    );
}

#[test]
fn test_signup_terms_and_name() {
    let form = SignupForm {
        name: " ".to_string(),
        accept_terms: false,
        ..signup()
    };
    let errors = form.validate().unwrap_err();
    assert_eq!(errors.message(FormField::Name).as_deref(), Some("Full name is required"));
    assert_eq!(errors.message(FormField::Terms).as_deref(), Some("You must accept the terms"));
    assert_eq!(errors.len(), 2);
}

// ===== Shared =====

#[test]
fn test_email_shapes() {
    for ok in ["a@b.co", "first.last@sub.example.org", "hr+jobs@company.in"] {
        assert!(is_valid_email(ok), "{} should be valid", ok);
    }
    for bad in ["", "plain", "@example.com", "a@", "a@b", "a@@b.com", "a b@c.com", "a@b..com"] {
        assert!(!is_valid_email(bad), "{} should be invalid", bad);
    }
}

#[test]
fn test_field_errors_keep_first_error() {
    let mut errors = FieldErrors::default();
    errors.add(FormField::Email, ValidationError::EmailRequired);
    errors.add(FormField::Email, ValidationError::InvalidEmail);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors.get(FormField::Email), Some(&ValidationError::EmailRequired));
}

#[test]
fn test_submit_delay() {
    assert_eq!(SUBMIT_DELAY, Duration::from_millis(1000));
}

#[test]
fn test_form_payload_roundtrips_through_json() {
    let json = serde_json::to_string(&signup()).unwrap();
    let back: SignupForm = serde_json::from_str(&json).unwrap();
    assert_eq!(back, signup());
}
