//! Form validation run before any remote call is made.

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use crate::models::UserForm;

static EMAIL_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    // Permissive and unanchored: some local part, an '@', and a dotted domain.
    Regex::new(r"\S+@\S+\.\S+").expect("email pattern is valid")
});

/// First rule a form breaks. The `Display` text is shown to the user as is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("First Name is required.")]
    FirstNameRequired,
    #[error("Last Name is required.")]
    LastNameRequired,
    #[error("Email is required.")]
    EmailRequired,
    #[error("Department is required.")]
    DepartmentRequired,
    #[error("Please enter a valid email address.")]
    InvalidEmail,
}

/// Check a form, returning the first failing rule.
pub fn validate(form: &UserForm) -> Result<(), ValidationError> {
    if form.first_name.trim().is_empty() {
        return Err(ValidationError::FirstNameRequired);
    }
    if form.last_name.trim().is_empty() {
        return Err(ValidationError::LastNameRequired);
    }
    if form.email.trim().is_empty() {
        return Err(ValidationError::EmailRequired);
    }
    if form.department.trim().is_empty() {
        return Err(ValidationError::DepartmentRequired);
    }
    if !EMAIL_SHAPE.is_match(&form.email) {
        return Err(ValidationError::InvalidEmail);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete() -> UserForm {
        UserForm {
            id: None,
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            department: "Engineering".to_string(),
        }
    }

    #[test]
    fn test_complete_form_is_valid() {
        assert_eq!(validate(&complete()), Ok(()));
    }

    #[test]
    fn test_blank_fields_fail_in_order() {
        let mut form = complete();
        form.department = "   ".to_string();
        form.last_name = "\t".to_string();
        assert_eq!(validate(&form), Err(ValidationError::LastNameRequired));

        form.first_name = String::new();
        assert_eq!(validate(&form), Err(ValidationError::FirstNameRequired));
    }

    #[test]
    fn test_each_blank_field_is_named() {
        let cases = [
            (crate::Field::FirstName, "First Name is required."),
            (crate::Field::LastName, "Last Name is required."),
            (crate::Field::Email, "Email is required."),
            (crate::Field::Department, "Department is required."),
        ];
        for (field, message) in cases {
            let mut form = complete();
            form.set(field, "  ".to_string());
            let err = validate(&form).unwrap_err();
            assert_eq!(err.to_string(), message);
        }
    }

    #[test]
    fn test_malformed_email_rejected() {
        for email in ["ada.example.com", "ada@example", "@example.com", "ada@.com"] {
            let mut form = complete();
            form.email = email.to_string();
            assert_eq!(
                validate(&form),
                Err(ValidationError::InvalidEmail),
                "{email} should be rejected"
            );
        }
    }

    #[test]
    fn test_email_pattern_is_permissive() {
        let mut form = complete();
        form.email = "a@b.c".to_string();
        assert_eq!(validate(&form), Ok(()));
    }
}
