//! Form-invalid response payload shared by validated endpoints.

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

use bookery_app::domain::validation::FieldError;

/// Body returned with 422 when form-style input fails validation.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct FormInvalidResponse {
    /// Always `"form_invalid"`.
    pub status: String,

    /// Field-scoped validation failures.
    pub errors: Vec<FieldErrorResponse>,
}

/// One field-scoped validation failure.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct FieldErrorResponse {
    pub field: String,
    pub message: String,
}

impl FormInvalidResponse {
    #[must_use]
    pub(crate) fn from_errors(errors: Vec<FieldError>) -> Self {
        Self {
            status: "form_invalid".to_string(),
            errors: errors
                .into_iter()
                .map(|error| FieldErrorResponse {
                    field: error.field.to_string(),
                    message: error.message,
                })
                .collect(),
        }
    }
}
