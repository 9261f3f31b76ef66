//! Vitae Domain Layer
//!
//! This crate contains the core vocabulary for semantic CV analysis.
//! It defines the value objects and trait interfaces that all other
//! layers depend upon; heuristics, transports, and stores live in
//! other crates.
//!
//! ## Key Concepts
//!
//! - **Signal**: the outcome of one analysis method - a confidence plus
//!   the evidence fragments that produced it
//! - **Analysis**: the six signals computed for one document
//! - **Classification**: document type and complexity, with a global
//!   confidence
//! - **CvDocument**: the structured record the generation collaborator
//!   returns
//! - **ChatTransport**: the single outbound boundary to that collaborator
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture:
//! - Value objects and pure invariants only
//! - No I/O, no heuristics, no HTTP
//! - Trait definitions for the one external interaction

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod chat;
pub mod classification;
pub mod extraction;
pub mod schema;
pub mod signal;

// Re-exports for convenience
pub use chat::{ChatChoice, ChatMessage, ChatRequest, ChatResponse, ChatTransport};
pub use classification::{Classification, Complexity, CvType};
pub use extraction::ExtractionId;
pub use schema::{CvDocument, Education, LanguageSkill, PersonalInfo, WorkExperience};
pub use signal::{Analysis, Fragment, Signal, SignalKind};
