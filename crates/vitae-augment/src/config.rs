//! Augmenter configuration

use serde::{Deserialize, Serialize};

/// Configuration for the semantic augmenter
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AugmentConfig {
    /// Substrings of model names the augmenter acts on
    /// (case-insensitive)
    pub model_markers: Vec<String>,

    /// Markers that introduce the document inside a user turn, tried
    /// in order; the content after the first hit is the document
    pub document_markers: Vec<String>,

    /// Lifted documents shorter than this are left alone
    pub min_document_chars: usize,

    /// When no marker matches, this many trailing characters of the
    /// user turn are treated as the document
    pub fallback_tail_chars: usize,

    /// `max_tokens` forced onto augmented requests
    pub max_tokens_override: u32,

    /// `temperature` forced onto augmented requests
    pub temperature_override: f64,

    /// Whether the augmenter starts active
    pub start_enabled: bool,
}

impl Default for AugmentConfig {
    fn default() -> Self {
        Self {
            model_markers: ["gpt", "claude", "mistral", "llama"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            document_markers: [
                "CV À ANALYSER :",
                "CV A ANALYSER :",
                "CV À ANALYSER:",
                "CV :",
                "CV:",
                "CURRICULUM VITAE :",
                "RÉSUMÉ :",
                "RESUME:",
                "DOCUMENT :",
                "DOCUMENT:",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            min_document_chars: 100,
            fallback_tail_chars: 2000,
            max_tokens_override: 4000,
            temperature_override: 0.1,
            start_enabled: true,
        }
    }
}

impl AugmentConfig {
    /// Aggressive preset: shorter minimum, longer fallback tail
    pub fn aggressive() -> Self {
        Self {
            min_document_chars: 50,
            fallback_tail_chars: 4000,
            ..Self::default()
        }
    }

    /// Conservative preset: starts disabled, higher minimum
    pub fn conservative() -> Self {
        Self {
            min_document_chars: 200,
            start_enabled: false,
            ..Self::default()
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.model_markers.is_empty() {
            return Err("model_markers must not be empty".to_string());
        }
        if self.min_document_chars == 0 {
            return Err("min_document_chars must be greater than 0".to_string());
        }
        if self.fallback_tail_chars < self.min_document_chars {
            return Err("fallback_tail_chars cannot be below min_document_chars".to_string());
        }
        if self.max_tokens_override == 0 {
            return Err("max_tokens_override must be greater than 0".to_string());
        }
        if !(0.0..=2.0).contains(&self.temperature_override) {
            return Err("temperature_override must be in [0.0, 2.0]".to_string());
        }
        Ok(())
    }

    /// Whether a model name falls under augmentation
    pub fn is_eligible_model(&self, model: &str) -> bool {
        let lower = model.to_lowercase();
        self.model_markers
            .iter()
            .any(|marker| lower.contains(&marker.to_lowercase()))
    }

    /// Lift the document out of a user turn
    ///
    /// The first configured marker found wins; without one, the
    /// trailing [`AugmentConfig::fallback_tail_chars`] characters stand
    /// in for the document.
    pub fn lift_document<'a>(&self, content: &'a str) -> &'a str {
        for marker in &self.document_markers {
            if let Some(position) = content.find(marker.as_str()) {
                return content[position + marker.len()..].trim_start();
            }
        }
        tail_chars(content, self.fallback_tail_chars)
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

/// Last `count` characters of `text`, split on a char boundary
fn tail_chars(text: &str, count: usize) -> &str {
    if count == 0 {
        return "";
    }
    let total = text.chars().count();
    if total <= count {
        return text;
    }
    let skip = total - count;
    match text.char_indices().nth(skip) {
        Some((index, _)) => &text[index..],
        None => text,
    }
}
