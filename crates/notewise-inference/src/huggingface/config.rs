//! Hugging Face analyzer configuration.
//!
//! Configuration comes from [`HuggingFaceConfig::default`] or from
//! environment variables via [`HuggingFaceConfig::from_env`]:
//!
//! | Variable | Default |
//! |----------|---------|
//! | `HUGGING_FACE_TOKEN` (or `NEXT_PUBLIC_HUGGING_FACE_TOKEN`) | required |
//! | `HF_INFERENCE_URL` | `https://api-inference.huggingface.co/models` |
//! | `HF_SUMMARY_MODEL` | `facebook/bart-large-cnn` |
//! | `HF_CLASSIFIER_MODEL` | `facebook/bart-large-mnli` |
//! | `HF_MAX_ATTEMPTS` | `3` |
//! | `HF_RETRY_DELAY_MS` | `5000` |
//! | `HF_CONFIDENCE_THRESHOLD` | `0.3` |
//! | `HF_TIMEOUT_SECS` | `60` |
//!
//! A missing token does not fail construction; the analyzer reports it as a
//! configuration error on first use, before any request is sent.

use std::time::Duration;

use notewise_core::defaults;
use notewise_core::{Error, Result};

/// Configuration for [`super::HuggingFaceAnalyzer`].
#[derive(Debug, Clone)]
pub struct HuggingFaceConfig {
    /// Base URL; the model id is appended as a path.
    pub base_url: String,
    /// Bearer token.
    pub api_token: Option<String>,
    /// Summarization model id.
    pub summary_model: String,
    /// Zero-shot classification model id.
    pub classifier_model: String,
    /// `parameters.max_length` of the summarization request.
    pub summary_max_length: u32,
    /// `parameters.min_length` of the summarization request.
    pub summary_min_length: u32,
    /// Total attempts per outbound call, shared by both warm-up signals.
    pub max_attempts: u32,
    /// Pause before reissuing a request to a loading model.
    pub retry_delay: Duration,
    /// Scores strictly above this suggest a category.
    pub confidence_threshold: f64,
    /// Per-request HTTP timeout in seconds.
    pub timeout_seconds: u64,
}

impl Default for HuggingFaceConfig {
    fn default() -> Self {
        Self {
            base_url: defaults::HF_INFERENCE_URL.to_string(),
            api_token: None,
            summary_model: defaults::SUMMARY_MODEL.to_string(),
            classifier_model: defaults::CLASSIFIER_MODEL.to_string(),
            summary_max_length: defaults::SUMMARY_MAX_LENGTH,
            summary_min_length: defaults::SUMMARY_MIN_LENGTH,
            max_attempts: defaults::MAX_ATTEMPTS,
            retry_delay: Duration::from_millis(defaults::RETRY_DELAY_MS),
            confidence_threshold: defaults::CONFIDENCE_THRESHOLD,
            timeout_seconds: defaults::HF_TIMEOUT_SECS,
        }
    }
}

impl HuggingFaceConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// Unparseable numeric values fall back to their defaults.
    pub fn from_lookup<F>(get: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let base = Self::default();

        Self {
            base_url: get(defaults::ENV_HF_INFERENCE_URL).unwrap_or(base.base_url),
            api_token: get(defaults::ENV_HF_TOKEN)
                .or_else(|| get(defaults::ENV_HF_TOKEN_PUBLIC))
                .filter(|t| !t.trim().is_empty()),
            summary_model: get(defaults::ENV_HF_SUMMARY_MODEL).unwrap_or(base.summary_model),
            classifier_model: get(defaults::ENV_HF_CLASSIFIER_MODEL)
                .unwrap_or(base.classifier_model),
            max_attempts: get(defaults::ENV_HF_MAX_ATTEMPTS)
                .and_then(|s| s.parse().ok())
                .unwrap_or(base.max_attempts),
            retry_delay: get(defaults::ENV_HF_RETRY_DELAY_MS)
                .and_then(|s| s.parse().ok())
                .map(Duration::from_millis)
                .unwrap_or(base.retry_delay),
            confidence_threshold: get(defaults::ENV_HF_CONFIDENCE_THRESHOLD)
                .and_then(|s| s.parse().ok())
                .unwrap_or(base.confidence_threshold),
            timeout_seconds: get(defaults::ENV_HF_TIMEOUT_SECS)
                .and_then(|s| s.parse().ok())
                .unwrap_or(base.timeout_seconds),
            ..base
        }
    }

    /// Set the bearer token.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.api_token = Some(token.into());
        self
    }

    /// The bearer token, or a configuration error when none is set.
    pub fn require_token(&self) -> Result<&str> {
        match self.api_token.as_deref().map(str::trim) {
            Some(token) if !token.is_empty() => Ok(token),
            _ => Err(Error::Config(
                "Hugging Face API token is not configured".to_string(),
            )),
        }
    }

    /// URL of the inference endpoint for `model`.
    pub fn model_url(&self, model: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            model.trim_start_matches('/')
        )
    }

    /// Validate everything except the token.
    pub fn validate(&self) -> Result<()> {
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(Error::Config(format!(
                "Inference base_url must start with http:// or https://, got: {}",
                self.base_url
            )));
        }

        if self.summary_model.trim().is_empty() || self.classifier_model.trim().is_empty() {
            return Err(Error::Config("Model ids cannot be empty".to_string()));
        }

        if self.max_attempts == 0 {
            return Err(Error::Config(
                "max_attempts must be at least 1".to_string(),
            ));
        }

        if self.summary_min_length > self.summary_max_length {
            return Err(Error::Config(format!(
                "summary_min_length ({}) exceeds summary_max_length ({})",
                self.summary_min_length, self.summary_max_length
            )));
        }

        if !(0.0..=1.0).contains(&self.confidence_threshold) {
            return Err(Error::Config(format!(
                "confidence_threshold must be within [0, 1], got: {}",
                self.confidence_threshold
            )));
        }

        Ok(())
    }
}
