//! Hugging Face Inference API request/response types.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use notewise_core::defaults::LOADING_MARKER;
use notewise_core::AnalysisRequest;

// =============================================================================
// REQUESTS
// =============================================================================

/// Body of a summarization call.
#[derive(Debug, Serialize)]
pub struct SummarizationRequest<'a> {
    pub inputs: &'a str,
    pub parameters: SummarizationParameters,
}

#[derive(Debug, Serialize)]
pub struct SummarizationParameters {
    pub max_length: u32,
    pub min_length: u32,
}

/// Body of a zero-shot classification call.
#[derive(Debug, Serialize)]
pub struct ClassificationRequest<'a> {
    pub inputs: &'a str,
    pub parameters: ClassificationParameters<'a>,
}

#[derive(Debug, Serialize)]
pub struct ClassificationParameters<'a> {
    pub candidate_labels: &'a [String],
}

// =============================================================================
// RESPONSES
// =============================================================================

/// One summarization output.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SummaryItem {
    #[serde(default)]
    pub summary_text: Option<String>,
}

/// Summarization body, decoded in precedence order: array form, object form,
/// anything else.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum SummaryResponse {
    Many(Vec<Value>),
    One(SummaryItem),
    Other(Value),
}

impl SummaryResponse {
    pub fn from_value(value: Value) -> Self {
        serde_json::from_value(value).unwrap_or(SummaryResponse::Other(Value::Null))
    }

    /// The summary text, if the response carries a non-empty one.
    ///
    /// Only the first element of the array form is consulted.
    pub fn into_summary_text(self) -> Option<String> {
        let text = match self {
            SummaryResponse::Many(items) => items
                .into_iter()
                .next()
                .filter(Value::is_object)
                .and_then(|first| serde_json::from_value::<SummaryItem>(first).ok())
                .and_then(|item| item.summary_text),
            SummaryResponse::One(item) => item.summary_text,
            SummaryResponse::Other(_) => None,
        };
        text.filter(|t| !t.is_empty())
    }
}

/// Zero-shot classification body. `labels[i]` is scored by `scores[i]`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ClassificationResponse {
    #[serde(default)]
    pub labels: Option<Vec<String>>,
    #[serde(default)]
    pub scores: Option<Vec<f64>>,
}

impl ClassificationResponse {
    /// Decode a classifier body; unknown shapes carry no labels.
    pub fn from_value(value: Value) -> Self {
        serde_json::from_value(value).unwrap_or_default()
    }

    /// Label/score pairs in response order. Labels without a score are dropped.
    pub fn scored_labels(&self) -> Vec<(&str, f64)> {
        match (&self.labels, &self.scores) {
            (Some(labels), Some(scores)) => labels
                .iter()
                .map(String::as_str)
                .zip(scores.iter().copied())
                .collect(),
            _ => Vec::new(),
        }
    }

    /// Candidate ids whose label scored strictly above `threshold`.
    ///
    /// Labels are matched to candidate names ignoring case; unmatched labels
    /// are dropped and each id appears once, in classifier order.
    pub fn suggested_ids(&self, request: &AnalysisRequest, threshold: f64) -> Vec<String> {
        let mut ids: Vec<String> = Vec::new();
        for (label, score) in self.scored_labels() {
            if score <= threshold {
                continue;
            }
            if let Some(id) = request.candidate_id_for_label(label) {
                if !ids.iter().any(|existing| existing == id) {
                    ids.push(id.to_string());
                }
            }
        }
        ids
    }
}

/// In-band "model is loading" error carried by an otherwise successful body.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadingNotice {
    pub message: String,
    /// Provider's estimate of the remaining warm-up, in seconds.
    pub estimated_time: Option<f64>,
}

impl LoadingNotice {
    /// Detect `{"error": "... loading ...", "estimated_time": n}`.
    pub fn detect(body: &Value) -> Option<Self> {
        let message = body.get("error")?.as_str()?;
        if !message.contains(LOADING_MARKER) {
            return None;
        }
        Some(Self {
            message: message.to_string(),
            estimated_time: body.get("estimated_time").and_then(Value::as_f64),
        })
    }
}
