//! Core traits for notewise abstractions.
//!
//! These traits define the interfaces that concrete implementations
//! must satisfy, enabling pluggable backends and testability.

use async_trait::async_trait;

use crate::error::Result;
use crate::models::{AnalysisRequest, AnalysisResult};

// =============================================================================
// ANALYSIS TRAITS
// =============================================================================

/// Produces a summary and category suggestions for note content.
///
/// Implementations hold no per-call state and may be shared across tasks.
/// A failed call never yields a partial result.
#[async_trait]
pub trait NoteAnalyzer: Send + Sync {
    /// Summarize `request.content` and pick matching candidate ids.
    async fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisResult>;

    /// Short name for logs.
    fn name(&self) -> &str;
}
