//! Account form validation.

use crate::domain::{
    accounts::models::{NewAccount, ProfileUpdate},
    validation::{FieldError, is_single_word, is_valid_email},
};

pub(crate) const MIN_PASSWORD_LEN: usize = 6;

pub(crate) fn validate_registration(account: &NewAccount) -> Result<(), Vec<FieldError>> {
    let mut errors = Vec::new();

    if !is_single_word(&account.username) {
        errors.push(FieldError::new(
            "username",
            format!("\"{}\" must be one word string", account.username),
        ));
    }

    if !is_valid_email(&account.email) {
        errors.push(FieldError::new("email", "enter a valid email address"));
    }

    if account.password.len() < MIN_PASSWORD_LEN {
        errors.push(FieldError::new(
            "password",
            format!("password must be at least {MIN_PASSWORD_LEN} characters"),
        ));
    }

    if account.password != account.confirm_password {
        errors.push(FieldError::new("confirm_password", "passwords do not match"));
    }

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

pub(crate) fn validate_profile(update: &ProfileUpdate) -> Result<(), Vec<FieldError>> {
    let mut errors = Vec::new();

    if let Some(first_name) = &update.first_name
        && !is_single_word(first_name)
    {
        errors.push(FieldError::new(
            "first_name",
            format!("\"{first_name}\" must be one word string"),
        ));
    }

    if let Some(last_name) = &update.last_name
        && !is_single_word(last_name)
    {
        errors.push(FieldError::new(
            "last_name",
            format!("\"{last_name}\" must be one word string"),
        ));
    }

    if let Some(email) = &update.email
        && !is_valid_email(email)
    {
        errors.push(FieldError::new("email", "enter a valid email address"));
    }

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}
