//! Marketplace error types.
//!
//! Only boundary operations fail: loading a catalog, building a price range
//! from raw bounds, and validating the registration and listing forms.
//! Filtering, sorting and cart mutation are total.

use std::fmt;

use thiserror::Error;

/// Errors that can occur at the edges of the marketplace core.
#[derive(Error, Debug)]
pub enum MarketError {
    /// A product references a farmer that is not in the catalog.
    #[error("Product {product_id} references unknown farmer {farmer_id}")]
    UnknownFarmer {
        product_id: String,
        farmer_id: String,
    },

    /// Two products share an id.
    #[error("Duplicate product id: {0}")]
    DuplicateProduct(String),

    /// Two farmers share an id.
    #[error("Duplicate farmer id: {0}")]
    DuplicateFarmer(String),

    /// Product rating outside 0-5.
    #[error("Rating {rating} for product {product_id} is outside 0-5")]
    InvalidRating { product_id: String, rating: f64 },

    /// Negative product price.
    #[error("Negative price for product {0}")]
    NegativePrice(String),

    /// Price range with the lower bound above the upper bound.
    #[error("Invalid price range: lower bound {low} exceeds upper bound {high}")]
    InvalidPriceRange { low: i64, high: i64 },

    /// Listing form rejected.
    #[error("Invalid listing: {0}")]
    InvalidListing(String),

    /// Registration form rejected.
    #[error(transparent)]
    Registration(#[from] RegistrationError),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for MarketError {
    fn from(e: serde_json::Error) -> Self {
        MarketError::SerializationError(e.to_string())
    }
}

/// A single reason a registration form was rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistrationIssue {
    #[error("terms and conditions must be accepted")]
    TermsNotAccepted,

    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("email address is not valid")]
    InvalidEmail,

    #[error("passwords do not match")]
    PasswordMismatch,
}

/// All issues found while validating a registration form.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub struct RegistrationError {
    pub issues: Vec<RegistrationIssue>,
}

impl RegistrationError {
    /// Whether a specific issue was reported.
    pub fn has(&self, issue: &RegistrationIssue) -> bool {
        self.issues.contains(issue)
    }
}

impl fmt::Display for RegistrationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Registration rejected: ")?;
        for (i, issue) in self.issues.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{}", issue)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registration_error_display() {
        let err = RegistrationError {
            issues: vec![
                RegistrationIssue::MissingField("email"),
                RegistrationIssue::PasswordMismatch,
            ],
        };
        assert_eq!(
            err.to_string(),
            "Registration rejected: email is required; passwords do not match"
        );
        assert!(err.has(&RegistrationIssue::PasswordMismatch));
        assert!(!err.has(&RegistrationIssue::TermsNotAccepted));
    }

    #[test]
    fn test_market_error_wraps_registration() {
        let err: MarketError = RegistrationError {
            issues: vec![RegistrationIssue::InvalidEmail],
        }
        .into();
        assert!(err.to_string().contains("email address is not valid"));
    }
}
