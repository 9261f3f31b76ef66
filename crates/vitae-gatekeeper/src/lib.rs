//! Vitae Gatekeeper
//!
//! Evaluates structured extraction results for quality control.
//!
//! The Gatekeeper provides:
//! - Response parsing (tolerating markdown code fences)
//! - Sufficiency checking against evidence-based expectations
//! - Quality scoring on a 0-100 scale
//!
//! # Examples
//!
//! ```no_run
//! use vitae_gatekeeper::{Gatekeeper, ValidationConfig};
//! use vitae_domain::ExtractionId;
//!
//! let gatekeeper = Gatekeeper::new(ValidationConfig::default());
//!
//! // Validate a collaborator response against the analysis
//! // let report = gatekeeper.validate(ExtractionId::new(), response, &analysis);
//! ```

#![warn(missing_docs)]

mod config;
mod validator;

pub use config::ValidationConfig;
pub use validator::{ExtractionReport, Gatekeeper};
