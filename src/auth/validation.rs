//! Request validation.
//!
//! Every auth operation validates its input before any business logic runs.
//! Failures collect into the field-error list carried by
//! `ApiError::Validation`, so a request with a bad email AND a short
//! password reports both at once.

use crate::error::FieldError;

/// Minimum accepted password length.
pub const MIN_PASSWORD_LEN: usize = 8;

/// Basic well-formedness check: non-empty local part, an `@`, and a domain
/// with a dot that is neither leading nor trailing.
pub fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() {
        return false;
    }
    match domain.split_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

fn check_email(email: &str, errors: &mut Vec<FieldError>) {
    if !is_valid_email(email) {
        errors.push(FieldError::new("email", "Must be a valid email address"));
    }
}

fn check_password(field: &str, password: &str, errors: &mut Vec<FieldError>) {
    if password.len() < MIN_PASSWORD_LEN {
        errors.push(FieldError::new(
            field,
            format!("Must be at least {} characters", MIN_PASSWORD_LEN),
        ));
    }
}

/// Validate an email/password pair (registration and login).
pub fn validate_credentials(email: &str, password: &str) -> Vec<FieldError> {
    let mut errors = Vec::new();
    check_email(email, &mut errors);
    check_password("password", password, &mut errors);
    errors
}

/// Validate a change-password request.
pub fn validate_password_change(
    email: &str,
    password: &str,
    new_password: &str,
) -> Vec<FieldError> {
    let mut errors = validate_credentials(email, password);
    check_password("newPassword", new_password, &mut errors);
    errors
}

/// Validate that a favorite's recipe id is present.
pub fn validate_recipe_id(recipe_id: &str) -> Vec<FieldError> {
    if recipe_id.trim().is_empty() {
        vec![FieldError::new("recipeId", "Recipe id is required")]
    } else {
        Vec::new()
    }
}
