//! Core data models for notewise.
//!
//! These types mirror the rows owned by the hosted backend and the
//! request/response shapes of AI analysis. Identifiers are opaque strings
//! assigned by the backend.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// =============================================================================
// NOTE TYPES
// =============================================================================

/// A stored note.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    pub id: String,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub user_id: String,
    /// Ids of the categories assigned to this note.
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_analyzed: Option<DateTime<Utc>>,
}

/// Request for creating a new note.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateNoteInput {
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub categories: Vec<String>,
}

/// Request for updating an existing note.
///
/// `last_analyzed` is only ever set together with `ai_summary`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateNoteInput {
    pub id: String,
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_analyzed: Option<DateTime<Utc>>,
}

// =============================================================================
// CATEGORY TYPES
// =============================================================================

/// A user-defined category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    /// Hex color, `#RRGGBB`.
    pub color: String,
    pub user_id: String,
}

/// Request for creating a category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateCategoryInput {
    pub name: String,
    pub color: String,
}

/// A category every new account starts with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DefaultCategory {
    pub name: &'static str,
    pub color: &'static str,
}

impl DefaultCategory {
    /// Insert request for this default.
    pub fn to_input(&self) -> CreateCategoryInput {
        CreateCategoryInput {
            name: self.name.to_string(),
            color: self.color.to_string(),
        }
    }
}

/// Predefined categories with their colors.
pub const DEFAULT_CATEGORIES: [DefaultCategory; 5] = [
    DefaultCategory {
        name: "Work",
        color: "#FF5733",
    },
    DefaultCategory {
        name: "Personal",
        color: "#33FF57",
    },
    DefaultCategory {
        name: "Study",
        color: "#3357FF",
    },
    DefaultCategory {
        name: "Important",
        color: "#FF33F5",
    },
    DefaultCategory {
        name: "Ideas",
        color: "#33FFF5",
    },
];

// =============================================================================
// ANALYSIS TYPES
// =============================================================================

/// A category offered to the classifier as a possible suggestion.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CandidateCategory {
    pub id: String,
    pub name: String,
}

impl CandidateCategory {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

impl From<&Category> for CandidateCategory {
    fn from(category: &Category) -> Self {
        Self {
            id: category.id.clone(),
            name: category.name.clone(),
        }
    }
}

/// Input to one analysis run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisRequest {
    pub content: String,
    pub candidate_categories: Vec<CandidateCategory>,
}

impl AnalysisRequest {
    pub fn new(content: impl Into<String>, candidate_categories: Vec<CandidateCategory>) -> Self {
        Self {
            content: content.into(),
            candidate_categories,
        }
    }

    /// Candidate names in input order, used as classifier labels.
    pub fn candidate_names(&self) -> Vec<String> {
        self.candidate_categories
            .iter()
            .map(|c| c.name.clone())
            .collect()
    }

    /// Id of the first candidate whose name equals `label`, ignoring case.
    pub fn candidate_id_for_label(&self, label: &str) -> Option<&str> {
        let label = label.to_lowercase();
        self.candidate_categories
            .iter()
            .find(|c| c.name.to_lowercase() == label)
            .map(|c| c.id.as_str())
    }
}

/// Outcome of one analysis run.
///
/// Every id in `suggested_category_ids` comes from the request's candidates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub summary: String,
    pub suggested_category_ids: Vec<String>,
}
