//! Hugging Face Inference API analyzer.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, error, info, instrument, trace, warn};

use notewise_core::defaults::SUMMARY_FALLBACK;
use notewise_core::{AnalysisRequest, AnalysisResult, Error, NoteAnalyzer, Result};

use super::config::HuggingFaceConfig;
use super::types::*;

/// Which of the two hosted models a request targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Summary,
    Classification,
}

impl Endpoint {
    /// Name used in upstream error messages.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Summary => "Summary",
            Self::Classification => "Classification",
        }
    }
}

/// Why a response was judged "model not warm yet".
#[derive(Debug, Clone, PartialEq)]
enum WarmupSignal {
    /// HTTP 503.
    Unavailable,
    /// HTTP 2xx with a loading error in the body.
    Loading(LoadingNotice),
}

/// Analyzer backed by a summarization model and a zero-shot classifier.
///
/// Holds only immutable configuration and a pooled HTTP client, so one
/// instance can serve concurrent requests.
#[derive(Debug, Clone)]
pub struct HuggingFaceAnalyzer {
    client: Client,
    config: HuggingFaceConfig,
}

impl HuggingFaceAnalyzer {
    /// Create a new analyzer with the given configuration.
    pub fn new(config: HuggingFaceConfig) -> Result<Self> {
        config.validate()?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| Error::Config(format!("Failed to create HTTP client: {}", e)))?;

        info!(
            subsystem = "inference",
            component = "huggingface",
            url = %config.base_url,
            summary_model = %config.summary_model,
            classifier_model = %config.classifier_model,
            max_attempts = config.max_attempts,
            token_configured = config.api_token.is_some(),
            "Initializing Hugging Face analyzer"
        );

        Ok(Self { client, config })
    }

    /// Create from environment variables.
    pub fn from_env() -> Result<Self> {
        Self::new(HuggingFaceConfig::from_env())
    }

    /// Get the current configuration.
    pub fn config(&self) -> &HuggingFaceConfig {
        &self.config
    }

    /// Summarize `content`, falling back to a placeholder when the model
    /// answers with an unrecognized shape.
    #[instrument(skip(self, token, content), fields(subsystem = "inference", component = "huggingface", op = "summarize", model = %self.config.summary_model, content_len = content.len()))]
    pub async fn summarize(&self, token: &str, content: &str) -> Result<String> {
        let body = SummarizationRequest {
            inputs: content,
            parameters: SummarizationParameters {
                max_length: self.config.summary_max_length,
                min_length: self.config.summary_min_length,
            },
        };

        let value = self
            .post_with_warmup_retry(Endpoint::Summary, &self.config.summary_model, token, &body)
            .await?;

        match SummaryResponse::from_value(value).into_summary_text() {
            Some(summary) => {
                debug!(response_len = summary.len(), "Summary received");
                Ok(summary)
            }
            None => {
                warn!("Summary response had no summary_text, using fallback");
                Ok(SUMMARY_FALLBACK.to_string())
            }
        }
    }

    /// Score the request's candidate names against its content and return
    /// the ids above the configured threshold.
    ///
    /// No request is sent when there are no candidates.
    #[instrument(skip(self, token, request), fields(subsystem = "inference", component = "huggingface", op = "classify", model = %self.config.classifier_model, candidate_count = request.candidate_categories.len()))]
    pub async fn classify(&self, token: &str, request: &AnalysisRequest) -> Result<Vec<String>> {
        if request.candidate_categories.is_empty() {
            debug!("No candidate categories, skipping classification");
            return Ok(Vec::new());
        }

        let labels = request.candidate_names();
        let body = ClassificationRequest {
            inputs: &request.content,
            parameters: ClassificationParameters {
                candidate_labels: &labels,
            },
        };

        let value = self
            .post_with_warmup_retry(
                Endpoint::Classification,
                &self.config.classifier_model,
                token,
                &body,
            )
            .await?;

        let response = ClassificationResponse::from_value(value);
        if response.labels.is_none() || response.scores.is_none() {
            warn!("Classification response had no labels/scores, suggesting nothing");
        }
        for (label, score) in response.scored_labels() {
            trace!(label, score, "Classifier score");
        }

        Ok(response.suggested_ids(request, self.config.confidence_threshold))
    }

    /// POST `body` to `model`, reissuing it while the model is warming up.
    ///
    /// HTTP 503 and a 2xx loading notice draw on the same attempt budget.
    /// Any other non-success status fails at once.
    async fn post_with_warmup_retry<B>(
        &self,
        endpoint: Endpoint,
        model: &str,
        token: &str,
        body: &B,
    ) -> Result<Value>
    where
        B: Serialize + ?Sized,
    {
        let url = self.config.model_url(model);
        let max_attempts = self.config.max_attempts;

        for attempt in 1..=max_attempts {
            let response = self
                .client
                .post(&url)
                .bearer_auth(token)
                .header("Content-Type", "application/json")
                .json(body)
                .send()
                .await?;

            let status = response.status();
            let signal = if status == StatusCode::SERVICE_UNAVAILABLE {
                WarmupSignal::Unavailable
            } else if !status.is_success() {
                return Err(Error::UpstreamStatus {
                    endpoint: endpoint.label().to_string(),
                    status: status.as_u16(),
                    reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
                });
            } else {
                let bytes = response.bytes().await?;
                let value: Value = serde_json::from_slice(&bytes)?;
                match LoadingNotice::detect(&value) {
                    Some(notice) => WarmupSignal::Loading(notice),
                    None => return Ok(value),
                }
            };

            match &signal {
                WarmupSignal::Unavailable => warn!(
                    attempt,
                    max_attempts,
                    status = status.as_u16(),
                    "Model is loading (503)"
                ),
                WarmupSignal::Loading(notice) => warn!(
                    attempt,
                    max_attempts,
                    estimated_time = notice.estimated_time,
                    error = %notice.message,
                    "Model is loading"
                ),
            }

            if attempt < max_attempts {
                tokio::time::sleep(self.config.retry_delay).await;
            }
        }

        Err(Error::ModelWarmupExhausted {
            attempts: max_attempts,
        })
    }

    async fn run(&self, request: &AnalysisRequest) -> Result<AnalysisResult> {
        let token = self.config.require_token()?;

        let summary = self.summarize(token, &request.content).await?;
        let suggested_category_ids = self.classify(token, request).await?;

        Ok(AnalysisResult {
            summary,
            suggested_category_ids,
        })
    }
}

#[async_trait]
impl NoteAnalyzer for HuggingFaceAnalyzer {
    #[instrument(skip(self, request), fields(subsystem = "inference", component = "huggingface", op = "analyze", content_len = request.content.len(), candidate_count = request.candidate_categories.len()))]
    async fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisResult> {
        let start = Instant::now();

        match self.run(request).await {
            Ok(result) => {
                info!(
                    suggestion_count = result.suggested_category_ids.len(),
                    duration_ms = start.elapsed().as_millis() as u64,
                    "Analysis complete"
                );
                Ok(result)
            }
            Err(e) => {
                error!(
                    error = %e,
                    duration_ms = start.elapsed().as_millis() as u64,
                    "AI analysis failed"
                );
                Err(e.into_analysis())
            }
        }
    }

    fn name(&self) -> &str {
        "huggingface"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_labels() {
        assert_eq!(Endpoint::Summary.label(), "Summary");
        assert_eq!(Endpoint::Classification.label(), "Classification");
    }

    #[test]
    fn test_analyzer_creation() {
        let analyzer = HuggingFaceAnalyzer::new(HuggingFaceConfig::default());
        assert!(analyzer.is_ok());
        assert_eq!(analyzer.unwrap().name(), "huggingface");
    }

    #[test]
    fn test_analyzer_rejects_invalid_config() {
        let config = HuggingFaceConfig {
            max_attempts: 0,
            ..Default::default()
        };
        assert!(matches!(
            HuggingFaceAnalyzer::new(config),
            Err(Error::Config(_))
        ));
    }

    #[tokio::test]
    async fn test_missing_token_fails_before_network() {
        // Unroutable base URL: any request attempt would surface as a
        // request error instead of a configuration error.
        let config = HuggingFaceConfig {
            base_url: "http://127.0.0.1:9".to_string(),
            ..Default::default()
        };
        let analyzer = HuggingFaceAnalyzer::new(config).unwrap();
        let request = AnalysisRequest::new("text", vec![]);

        let err = analyzer.analyze(&request).await.unwrap_err();
        assert!(matches!(err, Error::Config(_)), "got {:?}", err);
    }
}
