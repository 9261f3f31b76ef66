//! Command implementations.

use crate::cli::{AnalyzeArgs, ExtractArgs, PromptArgs};
use anyhow::Context;
use std::path::Path;
use std::sync::Arc;
use vitae_analysis::{Analyzer, RuleSet};
use vitae_augment::{AugmentConfig, SemanticAugmenter};
use vitae_domain::{ChatRequest, ChatTransport};
use vitae_llm::OpenAiTransport;

fn read_document(path: &Path) -> anyhow::Result<String> {
    std::fs::read_to_string(path)
        .with_context(|| format!("failed to read document {}", path.display()))
}

fn analyzer_for(rules_dir: Option<&Path>) -> anyhow::Result<Analyzer> {
    match rules_dir {
        Some(dir) => {
            let rules = RuleSet::from_dir(dir)
                .with_context(|| format!("failed to load rule tables from {}", dir.display()))?;
            Ok(Analyzer::with_rules(rules))
        }
        None => Ok(Analyzer::new()),
    }
}

pub fn execute_analyze(args: AnalyzeArgs) -> anyhow::Result<()> {
    let text = read_document(&args.file)?;
    let analyzer = analyzer_for(args.rules.as_deref())?;
    let outcome = analyzer.run(&text);

    if args.json {
        let payload = serde_json::json!({
            "classification": outcome.classification,
            "analysis": outcome.analysis,
        });
        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }

    println!("Type:       {}", outcome.classification.cv_type);
    println!("Complexity: {}", outcome.classification.complexity);
    println!("Confidence: {:.3}", outcome.classification.confidence);
    println!("Signals:");
    for signal in outcome.analysis.signals() {
        println!(
            "  {:<13} confidence {:.2}  evidence {}",
            signal.kind,
            signal.confidence,
            signal.volume()
        );
    }
    Ok(())
}

pub fn execute_prompt(args: PromptArgs) -> anyhow::Result<()> {
    let text = read_document(&args.file)?;
    let analyzer = analyzer_for(args.rules.as_deref())?;
    let outcome = analyzer.run(&text);
    println!("{}", outcome.prompt);
    Ok(())
}

pub fn execute_selftest() -> anyhow::Result<()> {
    let report = vitae_augment::run_self_test();
    println!("{}", report.summary());
    if !report.passed {
        anyhow::bail!("self-test failed");
    }
    Ok(())
}

pub async fn execute_extract(args: ExtractArgs) -> anyhow::Result<()> {
    let text = read_document(&args.file)?;

    let mut transport = OpenAiTransport::new(&args.endpoint)
        .map_err(|e| anyhow::anyhow!("failed to build transport: {}", e))?;
    if let Ok(api_key) = std::env::var(&args.api_key_env) {
        transport = transport.with_api_key(api_key);
    }

    let augmenter = SemanticAugmenter::new(Arc::new(transport), AugmentConfig::default());
    let request = ChatRequest::user(&args.model, format!("CV À ANALYSER :\n{}", text));

    let response = augmenter
        .send(request)
        .await
        .map_err(|e| anyhow::anyhow!("extraction call failed: {}", e))?;

    match response.content() {
        Some(content) => println!("{}", content),
        None => println!("(empty response)"),
    }

    let statistics = augmenter.statistics();
    if let Some(entry) = statistics.history.last() {
        eprintln!(
            "extraction {}: success={} experiences={} quality={}",
            entry.id, entry.success, entry.experience_count, entry.quality_score
        );
    }
    eprintln!("{}", serde_json::to_string_pretty(&statistics)?);
    Ok(())
}
