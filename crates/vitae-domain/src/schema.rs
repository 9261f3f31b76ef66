//! Structured CV record returned by the generation collaborator
//!
//! The collaborator answers with JSON matching this shape. Every
//! collection field tolerates absence so that partial answers still
//! deserialize; validation of content happens downstream.

use serde::{Deserialize, Serialize};

/// The complete structured record extracted from a CV
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CvDocument {
    /// Identity block
    #[serde(default)]
    pub personal_info: PersonalInfo,

    /// Work history, most recent first
    #[serde(default)]
    pub work_experience: Vec<WorkExperience>,

    /// Free-form skill labels
    #[serde(default)]
    pub skills: Vec<String>,

    /// Degrees and training
    #[serde(default)]
    pub education: Vec<Education>,

    /// Spoken languages with levels
    #[serde(default)]
    pub languages: Vec<LanguageSkill>,

    /// Software and tool names
    #[serde(default)]
    pub software: Vec<String>,
}

/// Identity block of a CV
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PersonalInfo {
    /// Full name
    #[serde(default)]
    pub name: String,

    /// Contact email
    #[serde(default)]
    pub email: String,

    /// Contact phone number
    #[serde(default)]
    pub phone: String,
}

/// One work engagement
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkExperience {
    /// Position title
    #[serde(default)]
    pub title: String,

    /// Employer name
    #[serde(default)]
    pub company: String,

    /// Start date as written in the source
    #[serde(default)]
    pub start_date: String,

    /// End date as written, or an in-progress marker
    #[serde(default)]
    pub end_date: String,

    /// Role description
    #[serde(default)]
    pub description: String,
}

/// One degree or training entry
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Education {
    /// Degree or certification name
    #[serde(default)]
    pub degree: String,

    /// Issuing institution
    #[serde(default)]
    pub institution: String,

    /// Year as written in the source
    #[serde(default)]
    pub year: String,
}

/// One spoken language with proficiency
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LanguageSkill {
    /// Language name
    #[serde(default)]
    pub language: String,

    /// Proficiency level as written
    #[serde(default)]
    pub level: String,
}
