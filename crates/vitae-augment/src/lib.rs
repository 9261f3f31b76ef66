//! Vitae Augment
//!
//! The semantic augmentation decorator.
//!
//! `SemanticAugmenter<T>` wraps any [`vitae_domain::ChatTransport`] and
//! rewrites CV-bearing requests in flight: the document is lifted from
//! the last user turn, analyzed, and replaced with a synthesized
//! extraction prompt before the request reaches the wrapped transport.
//! The response is validated and folded into the shared ledger on the
//! way back.
//!
//! The decorator is fail-open: any reason it cannot augment - inactive,
//! ineligible model, no document, document too short - forwards the
//! request unchanged. It never alters or suppresses a response.
//!
//! # Examples
//!
//! ```no_run
//! use std::sync::Arc;
//! use vitae_augment::{AugmentConfig, SemanticAugmenter};
//!
//! # fn demo<T: vitae_domain::ChatTransport>(transport: Arc<T>) {
//! let augmenter = SemanticAugmenter::new(transport, AugmentConfig::default());
//! assert!(augmenter.is_active());
//! # }
//! ```

#![warn(missing_docs)]

mod augmenter;
mod config;
mod selftest;

pub use augmenter::SemanticAugmenter;
pub use config::AugmentConfig;
pub use selftest::{run_self_test, SelfTestCheck, SelfTestReport};
