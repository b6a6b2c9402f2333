//! Centralized default constants for notewise.
//!
//! **This module is the single source of truth** for shared default values.
//! Crates reference these constants instead of defining their own magic
//! numbers.

// =============================================================================
// HUGGING FACE INFERENCE API
// =============================================================================

/// Base URL of the hosted inference API; a model id is appended per request.
pub const HF_INFERENCE_URL: &str = "https://api-inference.huggingface.co/models";

/// Summarization model.
pub const SUMMARY_MODEL: &str = "facebook/bart-large-cnn";

/// Zero-shot classification model.
pub const CLASSIFIER_MODEL: &str = "facebook/bart-large-mnli";

/// Upper bound on generated summary length (model tokens).
pub const SUMMARY_MAX_LENGTH: u32 = 100;

/// Lower bound on generated summary length (model tokens).
pub const SUMMARY_MIN_LENGTH: u32 = 30;

/// Summary returned when the model answers with an unrecognized shape.
pub const SUMMARY_FALLBACK: &str = "No summary available";

/// Per-request HTTP timeout in seconds.
pub const HF_TIMEOUT_SECS: u64 = 60;

// =============================================================================
// WARM-UP RETRY
// =============================================================================

/// Total attempts per outbound call (the original plus two retries).
pub const MAX_ATTEMPTS: u32 = 3;

/// Delay before reissuing a request to a model that is still loading.
pub const RETRY_DELAY_MS: u64 = 5_000;

/// Substring of an in-band error message that marks a loading model.
pub const LOADING_MARKER: &str = "loading";

// =============================================================================
// CLASSIFICATION
// =============================================================================

/// Minimum classifier score (exclusive) for a category to be suggested.
pub const CONFIDENCE_THRESHOLD: f64 = 0.3;

// =============================================================================
// ENVIRONMENT VARIABLE NAMES
// =============================================================================

/// Bearer token for the inference API (required).
pub const ENV_HF_TOKEN: &str = "HUGGING_FACE_TOKEN";

/// Token variable name used by the browser build; accepted as a fallback.
pub const ENV_HF_TOKEN_PUBLIC: &str = "NEXT_PUBLIC_HUGGING_FACE_TOKEN";

/// Override for [`HF_INFERENCE_URL`].
pub const ENV_HF_INFERENCE_URL: &str = "HF_INFERENCE_URL";

/// Override for [`SUMMARY_MODEL`].
pub const ENV_HF_SUMMARY_MODEL: &str = "HF_SUMMARY_MODEL";

/// Override for [`CLASSIFIER_MODEL`].
pub const ENV_HF_CLASSIFIER_MODEL: &str = "HF_CLASSIFIER_MODEL";

/// Override for [`MAX_ATTEMPTS`].
pub const ENV_HF_MAX_ATTEMPTS: &str = "HF_MAX_ATTEMPTS";

/// Override for [`RETRY_DELAY_MS`].
pub const ENV_HF_RETRY_DELAY_MS: &str = "HF_RETRY_DELAY_MS";

/// Override for [`CONFIDENCE_THRESHOLD`].
pub const ENV_HF_CONFIDENCE_THRESHOLD: &str = "HF_CONFIDENCE_THRESHOLD";

/// Override for [`HF_TIMEOUT_SECS`].
pub const ENV_HF_TIMEOUT_SECS: &str = "HF_TIMEOUT_SECS";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_bounds_are_ordered() {
        assert!(SUMMARY_MIN_LENGTH < SUMMARY_MAX_LENGTH);
    }

    #[test]
    fn test_threshold_is_a_probability() {
        assert!((0.0..=1.0).contains(&CONFIDENCE_THRESHOLD));
    }

    #[test]
    fn test_retry_budget() {
        assert_eq!(MAX_ATTEMPTS, 3);
        assert_eq!(RETRY_DELAY_MS, 5_000);
    }
}
