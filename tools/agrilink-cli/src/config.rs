//! CLI configuration.

use agrilink_market::cart::PricingPolicy;
use agrilink_market::money::{Currency, Money};
use anyhow::{anyhow, bail, Context, Result};
use serde::{Deserialize, Serialize};

/// CLI configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CliConfig {
    /// Catalog source.
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Shipping and tax.
    #[serde(default)]
    pub pricing: PricingConfig,

    /// Display preferences.
    #[serde(default)]
    pub display: DisplayConfig,
}

impl CliConfig {
    /// Load config from a file.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;

        if path.ends_with(".json") {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path))
        }
    }

    /// Currency named by `display.currency`.
    pub fn currency(&self) -> Result<Currency> {
        Currency::from_code(&self.display.currency)
            .ok_or_else(|| anyhow!("Unsupported currency: {}", self.display.currency))
    }

    /// Pricing policy in the configured currency.
    ///
    /// Fails on anything [`CliConfig::check`] reports as an error.
    pub fn pricing_policy(&self) -> Result<PricingPolicy> {
        let (errors, _) = self.check();
        if !errors.is_empty() {
            bail!("Invalid config: {}", errors.join("; "));
        }
        Ok(PricingPolicy {
            shipping_fee: Money::from_decimal(self.pricing.shipping_fee, self.currency()?),
            tax_rate: self.pricing.tax_rate,
        })
    }

    /// Problems that make the config unusable, then ones worth a warning.
    pub fn check(&self) -> (Vec<String>, Vec<String>) {
        let mut errors = Vec::new();
        let mut warnings = Vec::new();

        if Currency::from_code(&self.display.currency).is_none() {
            errors.push(format!(
                "display.currency '{}' is not supported",
                self.display.currency
            ));
        }

        let fee = self.pricing.shipping_fee;
        if !fee.is_finite() || fee < 0.0 {
            errors.push("pricing.shipping_fee must be zero or more".to_string());
        }

        let rate = self.pricing.tax_rate;
        if !rate.is_finite() || rate < 0.0 {
            errors.push("pricing.tax_rate must be zero or more".to_string());
        } else if rate >= 1.0 {
            warnings.push(format!(
                "pricing.tax_rate {} looks like a percentage; use 0.08 for 8%",
                rate
            ));
        }

        if let Some(ref path) = self.catalog.path {
            if !path.ends_with(".json") {
                warnings.push(format!("catalog.path '{}' is not a .json file", path));
            }
        }

        (errors, warnings)
    }
}

/// Where products and farmers come from.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// JSON catalog file. The built-in sample is used when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

/// Shipping and tax settings, as decimal amounts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricingConfig {
    #[serde(default = "default_shipping_fee")]
    pub shipping_fee: f64,

    #[serde(default = "default_tax_rate")]
    pub tax_rate: f64,
}

fn default_shipping_fee() -> f64 {
    PricingPolicy::DEFAULT_SHIPPING_CENTS as f64 / 100.0
}

fn default_tax_rate() -> f64 {
    PricingPolicy::DEFAULT_TAX_RATE
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            shipping_fee: default_shipping_fee(),
            tax_rate: default_tax_rate(),
        }
    }
}

/// Display preferences.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// ISO currency code (default: USD).
    #[serde(default = "default_currency")]
    pub currency: String,
}

fn default_currency() -> String {
    Currency::USD.code().to_string()
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            currency: default_currency(),
        }
    }
}

/// Generate a default agrilink.toml config file.
pub fn generate_default_config() -> String {
    r#"# Agrilink marketplace configuration

[catalog]
# JSON file with "farmers" and "products"; the built-in sample is used when unset
# path = "catalog.json"

[pricing]
shipping_fee = 5.99
tax_rate = 0.08

[display]
currency = "USD"
"#
    .to_string()
}
