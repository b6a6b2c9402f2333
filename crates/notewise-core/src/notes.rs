//! Note write-path helpers.

use chrono::{DateTime, Utc};

use crate::error::{Error, Result};
use crate::models::{AnalysisResult, CreateNoteInput, Note, UpdateNoteInput};

impl CreateNoteInput {
    /// A note needs a title or some content.
    pub fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() && self.content.trim().is_empty() {
            return Err(Error::InvalidInput(
                "Note must have a title or content".to_string(),
            ));
        }
        Ok(())
    }
}

impl UpdateNoteInput {
    /// Update request that rewrites `note` unchanged.
    pub fn from_note(note: &Note) -> Self {
        Self {
            id: note.id.clone(),
            title: note.title.clone(),
            content: note.content.clone(),
            categories: note.categories.clone(),
            ai_summary: None,
            last_analyzed: None,
        }
    }

    /// Record an analysis outcome.
    ///
    /// Suggested ids not already assigned are appended after the existing
    /// ones.
    pub fn apply_analysis(mut self, result: &AnalysisResult, analyzed_at: DateTime<Utc>) -> Self {
        for id in &result.suggested_category_ids {
            if !self.categories.contains(id) {
                self.categories.push(id.clone());
            }
        }
        self.ai_summary = Some(result.summary.clone());
        self.last_analyzed = Some(analyzed_at);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn note() -> Note {
        let created = Utc.with_ymd_and_hms(2024, 3, 1, 10, 0, 0).unwrap();
        Note {
            id: "n1".to_string(),
            title: "Quarterly plan".to_string(),
            content: "Draft the roadmap".to_string(),
            created_at: created,
            updated_at: created,
            user_id: "u1".to_string(),
            categories: vec!["c1".to_string()],
            ai_summary: Some("old summary".to_string()),
            last_analyzed: None,
        }
    }

    #[test]
    fn test_validate_accepts_title_only() {
        let input = CreateNoteInput {
            title: "Title".to_string(),
            ..Default::default()
        };
        assert!(input.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_blank_note() {
        let input = CreateNoteInput {
            title: " ".to_string(),
            content: "\n".to_string(),
            categories: vec![],
        };
        assert!(matches!(input.validate(), Err(Error::InvalidInput(_))));
    }

    #[test]
    fn test_from_note_does_not_resend_summary() {
        let input = UpdateNoteInput::from_note(&note());
        assert_eq!(input.id, "n1");
        assert_eq!(input.categories, vec!["c1"]);
        assert!(input.ai_summary.is_none());
        assert!(input.last_analyzed.is_none());
    }

    #[test]
    fn test_apply_analysis_merges_categories() {
        let at = Utc.with_ymd_and_hms(2024, 3, 2, 9, 30, 0).unwrap();
        let result = AnalysisResult {
            summary: "Roadmap drafting.".to_string(),
            suggested_category_ids: vec!["c2".to_string(), "c1".to_string()],
        };

        let input = UpdateNoteInput::from_note(&note()).apply_analysis(&result, at);

        assert_eq!(input.categories, vec!["c1", "c2"]);
        assert_eq!(input.ai_summary.as_deref(), Some("Roadmap drafting."));
        assert_eq!(input.last_analyzed, Some(at));
    }
}
