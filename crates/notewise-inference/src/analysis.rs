//! Note-level analysis: run an analyzer over a stored note and turn the
//! outcome into an update request.

use chrono::Utc;
use tracing::{debug, instrument};

use notewise_core::{
    AnalysisRequest, CandidateCategory, Category, Error, Note, NoteAnalyzer, Result,
    UpdateNoteInput,
};

/// Analyze `note` against the user's `categories`.
///
/// Blank content is rejected before the analyzer is called. On failure the
/// error is returned as-is and nothing is produced, so the stored note stays
/// untouched.
#[instrument(skip(analyzer, note, categories), fields(subsystem = "inference", component = "analyze_note", op = "analyze", note_id = %note.id, analyzer = analyzer.name()))]
pub async fn analyze_note(
    analyzer: &dyn NoteAnalyzer,
    note: &Note,
    categories: &[Category],
) -> Result<UpdateNoteInput> {
    if note.content.trim().is_empty() {
        return Err(Error::InvalidInput(
            "Note content is empty, nothing to analyze".to_string(),
        ));
    }

    let request = AnalysisRequest::new(
        note.content.clone(),
        categories.iter().map(CandidateCategory::from).collect(),
    );
    let result = analyzer.analyze(&request).await?;

    debug!(
        suggestion_count = result.suggested_category_ids.len(),
        "Applying analysis to note"
    );
    Ok(UpdateNoteInput::from_note(note).apply_analysis(&result, Utc::now()))
}
