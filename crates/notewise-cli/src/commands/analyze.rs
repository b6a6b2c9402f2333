//! `notewise analyze`: run the hosted analyzer over note text.

use std::io::Read;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use clap::Args;
use tracing::info;

use notewise_core::{AnalysisRequest, CandidateCategory, NoteAnalyzer, DEFAULT_CATEGORIES};
use notewise_inference::{HuggingFaceAnalyzer, HuggingFaceConfig};

#[derive(Args, Debug, Default)]
pub struct AnalyzeArgs {
    /// Read the note from a file
    #[arg(short, long, conflicts_with = "text")]
    pub file: Option<PathBuf>,

    /// Note text given inline (stdin is read when neither --text nor --file is set)
    #[arg(short, long)]
    pub text: Option<String>,

    /// Candidate category as ID=NAME (repeatable)
    #[arg(short, long = "category", value_name = "ID=NAME", value_parser = parse_category)]
    pub categories: Vec<CandidateCategory>,

    /// Also offer the built-in default categories
    #[arg(long)]
    pub defaults: bool,

    /// Minimum classifier score (exclusive) for a suggestion
    #[arg(long)]
    pub threshold: Option<f64>,

    /// Attempts per request while the model is warming up
    #[arg(long)]
    pub max_attempts: Option<u32>,

    /// Delay between warm-up retries, in milliseconds
    #[arg(long)]
    pub retry_delay_ms: Option<u64>,

    /// Pretty-print the JSON result
    #[arg(long)]
    pub pretty: bool,
}

/// Parse `ID=NAME`. The name may itself contain `=`.
fn parse_category(s: &str) -> std::result::Result<CandidateCategory, String> {
    let (id, name) = s
        .split_once('=')
        .ok_or_else(|| format!("expected ID=NAME, got '{}'", s))?;
    let (id, name) = (id.trim(), name.trim());
    if id.is_empty() || name.is_empty() {
        return Err(format!("category id and name must be non-empty in '{}'", s));
    }
    Ok(CandidateCategory::new(id, name))
}

/// Candidates from explicit flags, then defaults not already named.
fn build_candidates(args: &AnalyzeArgs) -> Vec<CandidateCategory> {
    let mut candidates = args.categories.clone();
    if args.defaults {
        for default in DEFAULT_CATEGORIES.iter() {
            let taken = candidates
                .iter()
                .any(|c| c.name.eq_ignore_ascii_case(default.name));
            if !taken {
                candidates.push(CandidateCategory::new(
                    format!("default-{}", default.name.to_lowercase()),
                    default.name,
                ));
            }
        }
    }
    candidates
}

fn read_content(args: &AnalyzeArgs) -> Result<String> {
    if let Some(text) = &args.text {
        return Ok(text.clone());
    }
    if let Some(path) = &args.file {
        return std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read note from {}", path.display()));
    }
    let mut content = String::new();
    std::io::stdin()
        .read_to_string(&mut content)
        .context("Failed to read note from stdin")?;
    Ok(content)
}

fn build_config(args: &AnalyzeArgs) -> HuggingFaceConfig {
    let mut config = HuggingFaceConfig::from_env();
    if let Some(threshold) = args.threshold {
        config.confidence_threshold = threshold;
    }
    if let Some(max_attempts) = args.max_attempts {
        config.max_attempts = max_attempts;
    }
    if let Some(delay) = args.retry_delay_ms {
        config.retry_delay = Duration::from_millis(delay);
    }
    config
}

/// Analyze `content` and render the result as JSON.
pub async fn execute(
    analyzer: &dyn NoteAnalyzer,
    content: String,
    candidates: Vec<CandidateCategory>,
    pretty: bool,
) -> Result<String> {
    if content.trim().is_empty() {
        bail!("Note content is empty, nothing to analyze");
    }

    let request = AnalysisRequest::new(content, candidates);
    let result = analyzer.analyze(&request).await?;

    info!(
        analyzer = analyzer.name(),
        suggestion_count = result.suggested_category_ids.len(),
        "Analysis finished"
    );

    let rendered = if pretty {
        serde_json::to_string_pretty(&result)?
    } else {
        serde_json::to_string(&result)?
    };
    Ok(rendered)
}

pub async fn run(args: AnalyzeArgs) -> Result<()> {
    let content = read_content(&args)?;
    let candidates = build_candidates(&args);
    let analyzer = HuggingFaceAnalyzer::new(build_config(&args))?;

    let output = execute(&analyzer, content, candidates, args.pretty).await?;
    println!("{}", output);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use notewise_inference::mock::MockAnalyzer;

    #[test]
    fn test_parse_category() {
        assert_eq!(
            parse_category("42=Work").unwrap(),
            CandidateCategory::new("42", "Work")
        );
        assert_eq!(
            parse_category(" 7 = Side = Projects ").unwrap(),
            CandidateCategory::new("7", "Side = Projects")
        );
        assert!(parse_category("Work").is_err());
        assert!(parse_category("=Work").is_err());
        assert!(parse_category("1=").is_err());
    }

    #[test]
    fn test_build_candidates_with_defaults() {
        let args = AnalyzeArgs {
            categories: vec![CandidateCategory::new("9", "work")],
            defaults: true,
            ..Default::default()
        };
        let candidates = build_candidates(&args);
        let names: Vec<_> = candidates.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["work", "Personal", "Study", "Important", "Ideas"]);
        assert_eq!(candidates[1].id, "default-personal");
    }

    #[test]
    fn test_build_candidates_without_defaults() {
        let args = AnalyzeArgs::default();
        assert!(build_candidates(&args).is_empty());
    }

    #[test]
    fn test_read_content_prefers_inline_text() {
        let args = AnalyzeArgs {
            text: Some("inline".to_string()),
            ..Default::default()
        };
        assert_eq!(read_content(&args).unwrap(), "inline");
    }

    #[test]
    fn test_read_content_missing_file() {
        let args = AnalyzeArgs {
            file: Some(PathBuf::from("/nonexistent/notewise/note.txt")),
            ..Default::default()
        };
        let err = read_content(&args).unwrap_err();
        assert!(err.to_string().contains("Failed to read note"));
    }

    #[test]
    fn test_build_config_applies_overrides() {
        let args = AnalyzeArgs {
            threshold: Some(0.6),
            max_attempts: Some(5),
            retry_delay_ms: Some(10),
            ..Default::default()
        };
        let config = build_config(&args);
        assert_eq!(config.confidence_threshold, 0.6);
        assert_eq!(config.max_attempts, 5);
        assert_eq!(config.retry_delay, Duration::from_millis(10));
    }

    #[tokio::test]
    async fn test_execute_renders_json() {
        let analyzer = MockAnalyzer::new().with_fixed_summary("Plan the week.");
        let output = execute(
            &analyzer,
            "Plan the work week".to_string(),
            vec![CandidateCategory::new("1", "Work")],
            false,
        )
        .await
        .unwrap();

        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["summary"], "Plan the week.");
        assert_eq!(value["suggested_category_ids"], serde_json::json!(["1"]));
    }

    #[tokio::test]
    async fn test_execute_rejects_blank_content() {
        let analyzer = MockAnalyzer::new();
        let err = execute(&analyzer, "  ".to_string(), vec![], false)
            .await
            .unwrap_err();
        assert!(err.to_string().contains("empty"));
        assert_eq!(analyzer.call_count(), 0);
    }
}
