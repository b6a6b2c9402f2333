//! Mock analyzer for deterministic testing.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use notewise_inference::mock::MockAnalyzer;
//!
//! let analyzer = MockAnalyzer::new().with_fixed_summary("Test summary");
//! let result = analyzer.analyze(&request).await.unwrap();
//! assert_eq!(analyzer.call_count(), 1);
//! ```

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use notewise_core::defaults::SUMMARY_FALLBACK;
use notewise_core::{AnalysisRequest, AnalysisResult, Error, NoteAnalyzer, Result};

/// Longest summary the mock produces, in characters.
const MOCK_SUMMARY_CHARS: usize = 100;

/// Analyzer that derives its answer from the request text alone.
///
/// The summary is the first sentence of the content; a candidate is
/// suggested when its name occurs in the content (ignoring case).
#[derive(Clone, Default)]
pub struct MockAnalyzer {
    fixed_summary: Option<String>,
    failure: Option<String>,
    call_log: Arc<Mutex<Vec<AnalysisRequest>>>,
}

impl MockAnalyzer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Always answer with `summary`.
    pub fn with_fixed_summary(mut self, summary: impl Into<String>) -> Self {
        self.fixed_summary = Some(summary.into());
        self
    }

    /// Fail every call with an analysis error carrying `message`.
    pub fn with_failure(mut self, message: impl Into<String>) -> Self {
        self.failure = Some(message.into());
        self
    }

    /// Requests seen so far, oldest first.
    pub fn calls(&self) -> Vec<AnalysisRequest> {
        self.call_log.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.call_log.lock().unwrap().len()
    }

    fn summarize(content: &str) -> String {
        let trimmed = content.trim();
        let end = trimmed
            .find(['.', '!', '?', '\n'])
            .map(|i| i + 1)
            .unwrap_or(trimmed.len());
        let sentence: String = trimmed[..end]
            .trim()
            .chars()
            .take(MOCK_SUMMARY_CHARS)
            .collect();
        if sentence.is_empty() {
            SUMMARY_FALLBACK.to_string()
        } else {
            sentence
        }
    }
}

#[async_trait]
impl NoteAnalyzer for MockAnalyzer {
    async fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisResult> {
        self.call_log.lock().unwrap().push(request.clone());

        if let Some(message) = &self.failure {
            return Err(Error::Analysis(message.clone()));
        }

        let summary = self
            .fixed_summary
            .clone()
            .unwrap_or_else(|| Self::summarize(&request.content));

        let content = request.content.to_lowercase();
        let mut suggested_category_ids: Vec<String> = Vec::new();
        for candidate in &request.candidate_categories {
            let name = candidate.name.to_lowercase();
            if !name.is_empty()
                && content.contains(&name)
                && !suggested_category_ids.contains(&candidate.id)
            {
                suggested_category_ids.push(candidate.id.clone());
            }
        }

        Ok(AnalysisResult {
            summary,
            suggested_category_ids,
        })
    }

    fn name(&self) -> &str {
        "mock"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use notewise_core::CandidateCategory;

    fn request(content: &str) -> AnalysisRequest {
        AnalysisRequest::new(
            content,
            vec![
                CandidateCategory::new("1", "Work"),
                CandidateCategory::new("2", "Ideas"),
            ],
        )
    }

    #[tokio::test]
    async fn test_mock_summary_is_first_sentence() {
        let analyzer = MockAnalyzer::new();
        let result = analyzer
            .analyze(&request("Finish the work report. Then relax."))
            .await
            .unwrap();
        assert_eq!(result.summary, "Finish the work report.");
        assert_eq!(result.suggested_category_ids, vec!["1"]);
    }

    #[tokio::test]
    async fn test_mock_is_deterministic() {
        let analyzer = MockAnalyzer::new();
        let req = request("Some IDEAS about work");
        let first = analyzer.analyze(&req).await.unwrap();
        let second = analyzer.analyze(&req).await.unwrap();
        assert_eq!(first, second);
        assert_eq!(first.suggested_category_ids, vec!["1", "2"]);
        assert_eq!(analyzer.call_count(), 2);
    }

    #[tokio::test]
    async fn test_mock_blank_content_uses_fallback() {
        let analyzer = MockAnalyzer::new();
        let result = analyzer.analyze(&request("   ")).await.unwrap();
        assert_eq!(result.summary, SUMMARY_FALLBACK);
        assert!(result.suggested_category_ids.is_empty());
    }

    #[tokio::test]
    async fn test_mock_fixed_summary_and_failure() {
        let analyzer = MockAnalyzer::new().with_fixed_summary("fixed");
        let result = analyzer.analyze(&request("anything")).await.unwrap();
        assert_eq!(result.summary, "fixed");

        let analyzer = MockAnalyzer::new().with_failure("boom");
        let err = analyzer.analyze(&request("anything")).await.unwrap_err();
        assert!(matches!(err, Error::Analysis(ref m) if m == "boom"));
        assert_eq!(analyzer.calls().len(), 1);
    }
}
