//! Farmer profiles.

use crate::ids::FarmerId;
use serde::{Deserialize, Serialize};

/// A farmer selling on the marketplace.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Farmer {
    /// Unique farmer identifier.
    pub id: FarmerId,
    /// Display name of the farmer.
    pub name: String,
    /// Farm name.
    pub farm_name: String,
    /// Farm size label (e.g., "50 acres").
    #[serde(default)]
    pub farm_size: String,
    /// Farm location.
    pub location: String,
    /// Identity checked by the marketplace.
    pub verified: bool,
    /// Average rating (0-5).
    pub rating: f64,
    #[serde(default)]
    pub certifications: Vec<String>,
    #[serde(default)]
    pub farming_methods: Vec<String>,
    #[serde(default)]
    pub specialties: Vec<String>,
    #[serde(default)]
    pub description: String,
}

impl Farmer {
    /// Case-insensitive certification check.
    pub fn has_certification(&self, name: &str) -> bool {
        self.certifications
            .iter()
            .any(|c| c.eq_ignore_ascii_case(name))
    }

    /// Add a specialty, ignoring duplicates.
    pub fn add_specialty(&mut self, specialty: impl Into<String>) {
        let specialty = specialty.into();
        if !self.specialties.contains(&specialty) {
            self.specialties.push(specialty);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_certifications_and_specialties() {
        let mut farmer = Farmer {
            id: FarmerId::new("f1"),
            name: "Maria Santos".to_string(),
            farm_name: "Green Valley Farm".to_string(),
            farm_size: "50 acres".to_string(),
            location: "California, USA".to_string(),
            verified: true,
            rating: 4.8,
            certifications: vec!["USDA Organic".to_string()],
            farming_methods: Vec::new(),
            specialties: Vec::new(),
            description: String::new(),
        };

        assert!(farmer.has_certification("usda organic"));
        assert!(!farmer.has_certification("Fair Trade"));

        farmer.add_specialty("Tomatoes");
        farmer.add_specialty("Tomatoes");
        assert_eq!(farmer.specialties, vec!["Tomatoes".to_string()]);
    }

    #[test]
    fn test_optional_fields_default_on_deserialize() {
        let json = r#"{
            "id": "f9",
            "name": "Ana",
            "farm_name": "Hilltop",
            "location": "Vermont, USA",
            "verified": false,
            "rating": 4.1
        }"#;
        let farmer: Farmer = serde_json::from_str(json).unwrap();
        assert!(farmer.certifications.is_empty());
        assert_eq!(farmer.farm_size, "");
    }
}
