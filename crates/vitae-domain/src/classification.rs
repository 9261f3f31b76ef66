//! Classification module - document type and complexity axes

use serde::{Deserialize, Serialize};

/// Profile family a CV belongs to
///
/// Types are tested in a fixed priority order (assistant before tech
/// before luxe_mode before commercial); the first family whose
/// vocabulary appears wins, and `General` is the fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CvType {
    /// Administrative and assistant profiles
    Assistant,

    /// Software and engineering profiles
    Tech,

    /// Luxury retail and hospitality profiles
    LuxeMode,

    /// Sales and business-development profiles
    Commercial,

    /// Fallback when no family vocabulary matches
    General,
}

impl CvType {
    /// All families, in classification priority order
    pub const ALL: [CvType; 5] = [
        CvType::Assistant,
        CvType::Tech,
        CvType::LuxeMode,
        CvType::Commercial,
        CvType::General,
    ];

    /// Get the family name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            CvType::Assistant => "assistant",
            CvType::Tech => "tech",
            CvType::LuxeMode => "luxe_mode",
            CvType::Commercial => "commercial",
            CvType::General => "general",
        }
    }

    /// Parse a family from a string
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "assistant" => Some(CvType::Assistant),
            "tech" => Some(CvType::Tech),
            "luxe_mode" => Some(CvType::LuxeMode),
            "commercial" => Some(CvType::Commercial),
            "general" => Some(CvType::General),
            _ => None,
        }
    }

    /// Minimum number of work experiences the extraction directive
    /// demands for this family
    ///
    /// Assistant and luxury CVs tend to list many short engagements;
    /// tech and commercial CVs fewer, longer ones.
    pub fn experience_floor(&self) -> usize {
        match self {
            CvType::Assistant => 3,
            CvType::Tech => 2,
            CvType::LuxeMode => 4,
            CvType::Commercial => 2,
            CvType::General => 2,
        }
    }
}

impl std::str::FromStr for CvType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid CV type: {}", s))
    }
}

impl std::fmt::Display for CvType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Document complexity grade, derived from total signal volume
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Complexity {
    /// Sparse document, few detectable structures
    Low,

    /// Typical single-page CV
    Medium,

    /// Dense or multi-page CV
    High,
}

impl Complexity {
    /// Get the grade name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Complexity::Low => "low",
            Complexity::Medium => "medium",
            Complexity::High => "high",
        }
    }

    /// Parse a grade from a string
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "low" => Some(Complexity::Low),
            "medium" => Some(Complexity::Medium),
            "high" => Some(Complexity::High),
            _ => None,
        }
    }
}

impl std::str::FromStr for Complexity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid complexity: {}", s))
    }
}

impl std::fmt::Display for Complexity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Full classification of one document
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    /// Profile family
    pub cv_type: CvType,

    /// Complexity grade
    pub complexity: Complexity,

    /// Global confidence over all six signals, always in [0, 1]
    pub confidence: f64,
}

impl Classification {
    /// Create a classification, clamping confidence into [0, 1]
    pub fn new(cv_type: CvType, complexity: Complexity, confidence: f64) -> Self {
        Self {
            cv_type,
            complexity,
            confidence: confidence.clamp(0.0, 1.0),
        }
    }
}
