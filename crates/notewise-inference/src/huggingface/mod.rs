//! Hugging Face Inference API analyzer.
//!
//! Summaries come from a summarization model, category suggestions from a
//! zero-shot classification model. Both hosted models may be cold; a cold
//! model answers with HTTP 503 or with a 200 whose body reads
//! `{"error": "... is currently loading", "estimated_time": ...}`. Either
//! signal triggers a delayed retry from one shared attempt budget.
//!
//! # Example
//!
//! ```rust,no_run
//! use notewise_core::{AnalysisRequest, CandidateCategory, NoteAnalyzer};
//! use notewise_inference::huggingface::{HuggingFaceAnalyzer, HuggingFaceConfig};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = HuggingFaceConfig::from_env().with_token("hf_...");
//!     let analyzer = HuggingFaceAnalyzer::new(config).unwrap();
//!
//!     let request = AnalysisRequest::new(
//!         "Prepare the slides for Monday's planning meeting.",
//!         vec![CandidateCategory::new("1", "Work"), CandidateCategory::new("2", "Ideas")],
//!     );
//!     let result = analyzer.analyze(&request).await.unwrap();
//!     println!("{} {:?}", result.summary, result.suggested_category_ids);
//! }
//! ```

mod backend;
mod config;
mod types;

pub use backend::{Endpoint, HuggingFaceAnalyzer};
pub use config::HuggingFaceConfig;
pub use types::*;
