//! Accounts and role-keyed registration.
//!
//! Registration only checks the form and hands back an [`Account`]. Nothing
//! is stored and no credentials are issued.

mod registration;

pub use registration::{BuyerRegistration, FarmerRegistration, Registration};

use crate::ids::AccountId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which side of the marketplace an account is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Buyer,
    Farmer,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Buyer => "buyer",
            Role::Farmer => "farmer",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A successfully registered account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub id: AccountId,
    pub role: Role,
    /// Full name for buyers, farm name for farmers.
    pub display_name: String,
    pub email: String,
    pub location: String,
}
