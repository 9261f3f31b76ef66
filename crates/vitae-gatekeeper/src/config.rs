//! Gatekeeper configuration

use serde::{Deserialize, Serialize};

/// Configuration for validation rules
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationConfig {
    /// Terms that mark a field as a placeholder rather than real data
    /// (case-insensitive, FR/EN)
    pub placeholder_terms: Vec<String>,

    /// Fraction of the expected experience count that earns the
    /// sufficiency bonus (0.0-1.0)
    pub sufficiency_ratio: f64,

    /// Fraction of the expected experience count below which an
    /// extraction counts as failed (0.0-1.0)
    pub success_ratio: f64,

    /// Floor on the expected experience count, applied even when the
    /// evidence suggests fewer
    pub min_expected: usize,

    /// Minimum digit count for a phone number to score
    pub min_phone_digits: usize,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            placeholder_terms: [
                "non spécifié",
                "non specifie",
                "non renseigné",
                "non renseigne",
                "inconnu",
                "à compléter",
                "nom prénom",
                "not specified",
                "not provided",
                "unknown",
                "n/a",
                "none",
                "null",
                "placeholder",
                "xxx",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            sufficiency_ratio: 0.8,
            success_ratio: 0.7,
            min_expected: 2,
            min_phone_digits: 6,
        }
    }
}

impl ValidationConfig {
    /// Permissive preset: lower sufficiency bars, shorter phone numbers
    pub fn permissive() -> Self {
        Self {
            sufficiency_ratio: 0.5,
            success_ratio: 0.5,
            min_expected: 1,
            min_phone_digits: 4,
            ..Self::default()
        }
    }

    /// Strict preset: full sufficiency required
    pub fn strict() -> Self {
        Self {
            sufficiency_ratio: 1.0,
            success_ratio: 0.9,
            min_expected: 2,
            min_phone_digits: 8,
            ..Self::default()
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if !(0.0..=1.0).contains(&self.sufficiency_ratio) {
            return Err("sufficiency_ratio must be in [0.0, 1.0]".to_string());
        }
        if !(0.0..=1.0).contains(&self.success_ratio) {
            return Err("success_ratio must be in [0.0, 1.0]".to_string());
        }
        if self.min_expected == 0 {
            return Err("min_expected must be greater than 0".to_string());
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}
