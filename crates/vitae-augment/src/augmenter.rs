//! The request-rewriting decorator

use crate::config::AugmentConfig;
use crate::selftest::{self, SelfTestReport};
use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::{debug, info, warn};
use vitae_analysis::Analyzer;
use vitae_domain::{ChatRequest, ChatResponse, ChatTransport, ExtractionId};
use vitae_gatekeeper::Gatekeeper;
use vitae_ledger::{DocumentMetrics, Ledger, StatisticsSnapshot};

/// Transport decorator that rewrites CV-bearing requests
///
/// The wrapped transport is set at construction and never replaced.
/// Activity is toggled at runtime; an inactive augmenter forwards every
/// request untouched.
pub struct SemanticAugmenter<T: ChatTransport> {
    inner: Arc<T>,
    analyzer: Analyzer,
    gatekeeper: Gatekeeper,
    ledger: Arc<Mutex<Ledger>>,
    config: AugmentConfig,
    active: AtomicBool,
}

impl<T: ChatTransport> SemanticAugmenter<T> {
    /// Wrap a transport with a fresh analyzer, gatekeeper, and ledger
    pub fn new(inner: Arc<T>, config: AugmentConfig) -> Self {
        let active = AtomicBool::new(config.start_enabled);
        Self {
            inner,
            analyzer: Analyzer::new(),
            gatekeeper: Gatekeeper::default_config(),
            ledger: Arc::new(Mutex::new(Ledger::new())),
            config,
            active,
        }
    }

    /// Replace the analyzer, keeping everything else
    pub fn with_analyzer(mut self, analyzer: Analyzer) -> Self {
        self.analyzer = analyzer;
        self
    }

    /// Replace the gatekeeper, keeping everything else
    pub fn with_gatekeeper(mut self, gatekeeper: Gatekeeper) -> Self {
        self.gatekeeper = gatekeeper;
        self
    }

    /// Share an existing ledger instead of the private one
    pub fn with_ledger(mut self, ledger: Arc<Mutex<Ledger>>) -> Self {
        self.ledger = ledger;
        self
    }

    /// Start augmenting requests; repeat calls are no-ops
    pub fn enable(&self) {
        if !self.active.swap(true, Ordering::SeqCst) {
            info!("semantic augmentation enabled");
        }
    }

    /// Stop augmenting requests; repeat calls are no-ops
    pub fn disable(&self) {
        if self.active.swap(false, Ordering::SeqCst) {
            info!("semantic augmentation disabled");
        }
    }

    /// Whether requests are currently augmented
    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::SeqCst)
    }

    /// The wrapped transport, identity-preserved
    pub fn transport(&self) -> Arc<T> {
        Arc::clone(&self.inner)
    }

    /// Snapshot of the accumulated statistics
    pub fn statistics(&self) -> StatisticsSnapshot {
        self.lock_ledger().statistics()
    }

    /// Run the embedded self-test against this augmenter's analyzer and
    /// gatekeeper; the live ledger is never touched
    pub fn run_self_test(&self) -> SelfTestReport {
        selftest::run_with(&self.analyzer, &self.gatekeeper)
    }

    fn lock_ledger(&self) -> MutexGuard<'_, Ledger> {
        // A poisoned lock only means another thread panicked mid-write;
        // the counters are still usable
        self.ledger
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[async_trait]
impl<T: ChatTransport> ChatTransport for SemanticAugmenter<T> {
    type Error = T::Error;

    async fn send(&self, request: ChatRequest) -> Result<ChatResponse, Self::Error> {
        if !self.is_active() || !self.config.is_eligible_model(&request.model) {
            return self.inner.send(request).await;
        }

        let document = match request.last_user_content() {
            Some(content) => self.config.lift_document(content).to_string(),
            None => return self.inner.send(request).await,
        };
        if document.chars().count() < self.config.min_document_chars {
            debug!(
                chars = document.chars().count(),
                "document below minimum, forwarding unchanged"
            );
            return self.inner.send(request).await;
        }

        let id = ExtractionId::new();
        let outcome = self.analyzer.run(&document);
        debug!(
            %id,
            cv_type = %outcome.classification.cv_type,
            complexity = %outcome.classification.complexity,
            confidence = outcome.classification.confidence,
            "request augmented"
        );

        let mut rewritten = request.clone();
        if !rewritten.set_last_user_content(&outcome.prompt) {
            // Cannot happen once a user turn yielded the document, but
            // the original request must survive if it somehow does
            warn!(%id, "no user turn to rewrite, forwarding unchanged");
            return self.inner.send(request).await;
        }
        rewritten.max_tokens = Some(self.config.max_tokens_override);
        rewritten.temperature = Some(self.config.temperature_override);

        self.lock_ledger()
            .record_analysis(&outcome.classification, &outcome.analysis);

        let response = self.inner.send(rewritten).await?;

        // Validate and fold in one breath - no await point between the
        // response resolving and the ledger update
        let report = self.gatekeeper.validate(
            id,
            response.content().unwrap_or_default(),
            &outcome.analysis,
        );
        self.lock_ledger().record_extraction(
            &outcome.classification,
            &report,
            DocumentMetrics::from_text(&document),
        );

        Ok(response)
    }
}
