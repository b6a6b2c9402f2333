//! # notewise-inference
//!
//! AI analysis of note content for notewise.
//!
//! This crate provides:
//! - A Hugging Face Inference API analyzer (summary plus zero-shot category
//!   suggestions) with warm-up retry
//! - Note-level orchestration producing an update request
//! - A deterministic mock analyzer (feature `mock`)
//!
//! # Example
//!
//! ```rust,no_run
//! use notewise_inference::HuggingFaceAnalyzer;
//! use notewise_core::{AnalysisRequest, NoteAnalyzer};
//!
//! #[tokio::main]
//! async fn main() {
//!     let analyzer = HuggingFaceAnalyzer::from_env().unwrap();
//!     let request = AnalysisRequest::new("Buy milk and eggs.", vec![]);
//!     let result = analyzer.analyze(&request).await.unwrap();
//! }
//! ```

pub mod analysis;
pub mod huggingface;

// Mock analyzer for testing
#[cfg(any(test, feature = "mock"))]
pub mod mock;

pub use analysis::analyze_note;
pub use huggingface::{HuggingFaceAnalyzer, HuggingFaceConfig};
