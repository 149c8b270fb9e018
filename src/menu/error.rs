//! Validation errors raised when adding a dish.

/// Form field a validation error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Price,
}

/// Why a candidate entry was rejected.
///
/// The `Display` text is the message shown to the user in the alert dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Name empty or whitespace-only
    #[error("Please enter a dish name.")]
    MissingName,

    /// Price empty or whitespace-only
    #[error("Please enter a price.")]
    MissingPrice,

    /// Price present but not a finite non-negative number
    #[error("Price must be a valid non-negative number.")]
    InvalidPrice,
}

impl ValidationError {
    /// Stable machine-readable tag
    pub fn code(&self) -> &'static str {
        match self {
            ValidationError::MissingName => "missing_name",
            ValidationError::MissingPrice => "missing_price",
            ValidationError::InvalidPrice => "invalid_price",
        }
    }

    /// The form field that needs correcting
    pub fn field(&self) -> Field {
        match self {
            ValidationError::MissingName => Field::Name,
            ValidationError::MissingPrice | ValidationError::InvalidPrice => Field::Price,
        }
    }
}
