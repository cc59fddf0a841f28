//! Registration forms and their validation.

use crate::account::{Account, Role};
use crate::error::{RegistrationError, RegistrationIssue};
use crate::ids::AccountId;
use serde::{Deserialize, Serialize};

/// Buyer sign-up form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuyerRegistration {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub business_type: String,
    pub password: String,
    pub confirm_password: String,
    #[serde(default)]
    pub accepted_terms: bool,
}

/// Farmer sign-up form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FarmerRegistration {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub farm_name: String,
    pub primary_crops: String,
    #[serde(default)]
    pub farm_size: String,
    #[serde(default)]
    pub farming_method: String,
    #[serde(default)]
    pub experience: String,
    #[serde(default)]
    pub description: String,
    pub password: String,
    pub confirm_password: String,
    #[serde(default)]
    pub accepted_terms: bool,
}

/// A registration submission, keyed by role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "role", rename_all = "lowercase")]
pub enum Registration {
    Buyer(BuyerRegistration),
    Farmer(FarmerRegistration),
}

impl Registration {
    pub fn role(&self) -> Role {
        match self {
            Registration::Buyer(_) => Role::Buyer,
            Registration::Farmer(_) => Role::Farmer,
        }
    }

    /// Check the form and produce an account.
    ///
    /// Every problem is reported at once, terms first.
    pub fn validate(&self) -> Result<Account, RegistrationError> {
        let mut issues = Vec::new();
        let common = self.common();

        if !common.accepted_terms {
            issues.push(RegistrationIssue::TermsNotAccepted);
        }

        for (field, value) in self.required_fields() {
            if value.trim().is_empty() {
                issues.push(RegistrationIssue::MissingField(field));
            }
        }

        let email = common.email.trim();
        if !email.is_empty() && !email.contains('@') {
            issues.push(RegistrationIssue::InvalidEmail);
        }

        if common.password != common.confirm_password {
            issues.push(RegistrationIssue::PasswordMismatch);
        }

        if !issues.is_empty() {
            tracing::debug!(role = %self.role(), issues = issues.len(), "registration rejected");
            return Err(RegistrationError { issues });
        }

        let display_name = match self {
            Registration::Farmer(f) => f.farm_name.trim().to_string(),
            Registration::Buyer(_) => {
                format!("{} {}", common.first_name.trim(), common.last_name.trim())
            }
        };

        let account = Account {
            id: AccountId::generate(),
            role: self.role(),
            display_name,
            email: email.to_string(),
            location: common.location.trim().to_string(),
        };
        tracing::info!(account_id = %account.id, role = %account.role, "account registered");
        Ok(account)
    }

    fn common(&self) -> Common<'_> {
        match self {
            Registration::Buyer(b) => Common {
                first_name: &b.first_name,
                last_name: &b.last_name,
                email: &b.email,
                location: &b.location,
                password: &b.password,
                confirm_password: &b.confirm_password,
                accepted_terms: b.accepted_terms,
            },
            Registration::Farmer(f) => Common {
                first_name: &f.first_name,
                last_name: &f.last_name,
                email: &f.email,
                location: &f.location,
                password: &f.password,
                confirm_password: &f.confirm_password,
                accepted_terms: f.accepted_terms,
            },
        }
    }

    fn required_fields(&self) -> Vec<(&'static str, &str)> {
        match self {
            Registration::Buyer(b) => vec![
                ("first name", b.first_name.as_str()),
                ("last name", b.last_name.as_str()),
                ("email", b.email.as_str()),
                ("phone", b.phone.as_str()),
                ("location", b.location.as_str()),
                ("password", b.password.as_str()),
            ],
            Registration::Farmer(f) => vec![
                ("first name", f.first_name.as_str()),
                ("last name", f.last_name.as_str()),
                ("email", f.email.as_str()),
                ("phone", f.phone.as_str()),
                ("farm name", f.farm_name.as_str()),
                ("location", f.location.as_str()),
                ("primary crops", f.primary_crops.as_str()),
                ("password", f.password.as_str()),
            ],
        }
    }
}

struct Common<'a> {
    first_name: &'a str,
    last_name: &'a str,
    email: &'a str,
    location: &'a str,
    password: &'a str,
    confirm_password: &'a str,
    accepted_terms: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buyer() -> BuyerRegistration {
        BuyerRegistration {
            first_name: "Dana".into(),
            last_name: "Okafor".into(),
            email: "dana@example.com".into(),
            phone: "555-0100".into(),
            location: "Portland, OR".into(),
            company: "Corner Bistro".into(),
            business_type: "restaurant".into(),
            password: "hunter22".into(),
            confirm_password: "hunter22".into(),
            accepted_terms: true,
        }
    }

    fn farmer() -> FarmerRegistration {
        FarmerRegistration {
            first_name: "Maria".into(),
            last_name: "Santos".into(),
            email: "maria@greenvalley.example".into(),
            phone: "555-0199".into(),
            location: "California, USA".into(),
            farm_name: "Green Valley Farm".into(),
            primary_crops: "Tomatoes, strawberries".into(),
            password: "s3cret!".into(),
            confirm_password: "s3cret!".into(),
            accepted_terms: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_valid_buyer() {
        let account = Registration::Buyer(buyer()).validate().unwrap();
        assert_eq!(account.role, Role::Buyer);
        assert_eq!(account.display_name, "Dana Okafor");
        assert_eq!(account.email, "dana@example.com");
        assert_eq!(account.location, "Portland, OR");
    }

    #[test]
    fn test_valid_farmer_uses_farm_name() {
        let account = Registration::Farmer(farmer()).validate().unwrap();
        assert_eq!(account.role, Role::Farmer);
        assert_eq!(account.display_name, "Green Valley Farm");
    }

    #[test]
    fn test_terms_required() {
        let mut form = buyer();
        form.accepted_terms = false;
        let err = Registration::Buyer(form).validate().unwrap_err();
        assert_eq!(err.issues, vec![RegistrationIssue::TermsNotAccepted]);
    }

    #[test]
    fn test_password_mismatch() {
        let mut form = farmer();
        form.confirm_password = "different".into();
        let err = Registration::Farmer(form).validate().unwrap_err();
        assert!(err.has(&RegistrationIssue::PasswordMismatch));
    }

    #[test]
    fn test_collects_every_issue() {
        let form = FarmerRegistration {
            email: "not-an-email".into(),
            password: "a".into(),
            confirm_password: "b".into(),
            ..Default::default()
        };
        let err = Registration::Farmer(form).validate().unwrap_err();
        assert!(err.has(&RegistrationIssue::TermsNotAccepted));
        assert!(err.has(&RegistrationIssue::MissingField("farm name")));
        assert!(err.has(&RegistrationIssue::MissingField("primary crops")));
        assert!(err.has(&RegistrationIssue::InvalidEmail));
        assert!(err.has(&RegistrationIssue::PasswordMismatch));
        assert!(!err.has(&RegistrationIssue::MissingField("email")));
    }

    #[test]
    fn test_blank_fields_count_as_missing() {
        let mut form = buyer();
        form.phone = "   ".into();
        let err = Registration::Buyer(form).validate().unwrap_err();
        assert_eq!(err.issues, vec![RegistrationIssue::MissingField("phone")]);
    }

    #[test]
    fn test_tagged_json() {
        let json = serde_json::to_value(Registration::Buyer(buyer())).unwrap();
        assert_eq!(json["role"], "buyer");
        assert_eq!(json["first_name"], "Dana");
    }
}
