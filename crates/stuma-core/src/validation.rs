//! # Validation Module
//!
//! Input validation for the sell and registration forms. Runs before any
//! request is built, so obviously-bad input never reaches the network.
//!
//! ## Usage
//! ```rust
//! use stuma_core::validation::validate_listing_name;
//!
//! assert!(validate_listing_name("Standing Desk").is_ok());
//! assert!(validate_listing_name("").is_err());
//! ```

use crate::error::ValidationError;
use crate::types::{ItemDraft, Registration};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Longest accepted listing name.
pub const MAX_NAME_LEN: usize = 200;

/// Shortest accepted password.
pub const MIN_PASSWORD_LEN: usize = 8;

// =============================================================================
// Field Validators
// =============================================================================

/// Validates a listing name: required, at most [`MAX_NAME_LEN`] characters.
pub fn validate_listing_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.len() > MAX_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_NAME_LEN,
        });
    }

    Ok(())
}

/// Validates a price: must be a finite, non-negative number.
/// Zero is allowed (give-away listings).
pub fn validate_price(price: f64) -> ValidationResult<()> {
    if !price.is_finite() {
        return Err(ValidationError::InvalidFormat {
            field: "price".to_string(),
            reason: "must be a finite number".to_string(),
        });
    }

    if price < 0.0 {
        return Err(ValidationError::MustBeNonNegative {
            field: "price".to_string(),
        });
    }

    Ok(())
}

/// Validates an email address. Only the coarsest shape is checked here; the
/// server remains the authority.
pub fn validate_email(email: &str) -> ValidationResult<()> {
    let email = email.trim();

    if email.is_empty() {
        return Err(ValidationError::Required {
            field: "email".to_string(),
        });
    }

    if !email.contains('@') {
        return Err(ValidationError::InvalidFormat {
            field: "email".to_string(),
            reason: "must contain '@'".to_string(),
        });
    }

    Ok(())
}

fn validate_required(field: &str, value: &str) -> ValidationResult<()> {
    if value.trim().is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }
    Ok(())
}

// =============================================================================
// Form Validators
// =============================================================================

/// Validates a sell-flow draft before it is submitted.
pub fn validate_item_draft(draft: &ItemDraft) -> ValidationResult<()> {
    validate_listing_name(&draft.name)?;
    validate_required("category", &draft.category)?;
    validate_price(draft.price)?;
    Ok(())
}

/// Validates a registration form before it is submitted.
pub fn validate_registration(registration: &Registration) -> ValidationResult<()> {
    validate_required("name", &registration.name)?;
    validate_required("phone", &registration.phone)?;
    validate_required("address", &registration.address)?;
    validate_email(&registration.email)?;

    if registration.password.len() < MIN_PASSWORD_LEN {
        return Err(ValidationError::TooShort {
            field: "password".to_string(),
            min: MIN_PASSWORD_LEN,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
