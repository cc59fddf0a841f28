//! Promo codes.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A recognized promo code. Each maps to a fixed percentage off the subtotal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PromoCode {
    /// 10% off.
    Fresh10,
    /// 20% off.
    Harvest20,
}

impl PromoCode {
    pub const ALL: [PromoCode; 2] = [PromoCode::Fresh10, PromoCode::Harvest20];

    /// The code as typed by buyers.
    pub fn code(&self) -> &'static str {
        match self {
            PromoCode::Fresh10 => "FRESH10",
            PromoCode::Harvest20 => "HARVEST20",
        }
    }

    /// Fraction of the subtotal taken off.
    pub fn rate(&self) -> f64 {
        match self {
            PromoCode::Fresh10 => 0.10,
            PromoCode::Harvest20 => 0.20,
        }
    }

    /// Case-insensitive lookup. Unknown codes are `None`, never an error.
    pub fn parse(input: &str) -> Option<Self> {
        let upper = input.to_uppercase();
        let found = Self::ALL.into_iter().find(|c| c.code() == upper);
        if found.is_none() && !input.is_empty() {
            tracing::debug!(code = input, "unrecognized promo code");
        }
        found
    }

    /// Whole percentage for display, e.g. 10.
    pub fn percent(&self) -> u32 {
        (self.rate() * 100.0).round() as u32
    }
}

impl fmt::Display for PromoCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Discount rate for whatever the buyer typed; 0.0 for unknown codes.
pub fn discount_rate(input: &str) -> f64 {
    PromoCode::parse(input).map_or(0.0, |c| c.rate())
}
