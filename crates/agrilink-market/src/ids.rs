//! Newtype IDs for type-safe identifiers.
//!
//! Keeps a `FarmerId` from ever being looked up in the product table.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Declares a string-backed id newtype.
macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Fresh id for records created at runtime.
            pub fn generate() -> Self {
                Self(generate_id())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }
    };
}

define_id!(
    /// Identifies a product listing.
    ProductId
);
define_id!(
    /// Identifies a farmer.
    FarmerId
);
define_id!(
    /// Identifies a registered account.
    AccountId
);

/// Timestamp-derived id, made unique within the process by a counter.
fn generate_id() -> String {
    use std::sync::atomic::{AtomicU64, Ordering};
    use std::time::{SystemTime, UNIX_EPOCH};

    static COUNTER: AtomicU64 = AtomicU64::new(0);

    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);
    let counter = COUNTER.fetch_add(1, Ordering::Relaxed);

    format!("{:x}-{:04x}", timestamp, counter)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_creation() {
        let id = ProductId::new("tomatoes");
        assert_eq!(id.as_str(), "tomatoes");
    }

    #[test]
    fn test_id_generation() {
        let id1 = AccountId::generate();
        let id2 = AccountId::generate();
        assert_ne!(id1, id2);
    }

    #[test]
    fn test_id_from_str() {
        let id: FarmerId = "green-valley".into();
        assert_eq!(id.to_string(), "green-valley");
    }

    #[test]
    fn test_id_serializes_as_plain_string() {
        let id = ProductId::new("p-1");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"p-1\"");
    }
}
