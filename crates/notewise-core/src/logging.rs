//! Structured logging field name constants for notewise.
//!
//! All crates use these constants for consistent structured logging fields,
//! so log aggregation can query by the same field names everywhere.
//!
//! ## Log Level Contract
//!
//! | Level | Usage |
//! |-------|-------|
//! | ERROR | Operation failed and the failure is returned to the caller |
//! | WARN  | Recoverable issue (model warming up, unexpected response shape) |
//! | INFO  | Lifecycle events, operation completions |
//! | DEBUG | Decision points, request sizes, config choices |
//! | TRACE | Per-label classifier scores |

// ─── Identity fields ───────────────────────────────────────────────────────

/// Subsystem originating the log event.
/// Values: "inference", "cli"
pub const SUBSYSTEM: &str = "subsystem";

/// Component within a subsystem.
/// Examples: "huggingface", "mock", "analyze_note"
pub const COMPONENT: &str = "component";

/// Logical operation name.
/// Examples: "summarize", "classify", "analyze"
pub const OPERATION: &str = "op";

// ─── Entity fields ─────────────────────────────────────────────────────────

/// Note id being analyzed.
pub const NOTE_ID: &str = "note_id";

// ─── Measurement fields ────────────────────────────────────────────────────

/// Wall-clock duration in milliseconds.
pub const DURATION_MS: &str = "duration_ms";

/// Byte length of the note content sent to a model.
pub const CONTENT_LEN: &str = "content_len";

/// Number of candidate categories offered to the classifier.
pub const CANDIDATE_COUNT: &str = "candidate_count";

/// Number of suggested categories returned.
pub const SUGGESTION_COUNT: &str = "suggestion_count";

// ─── Inference fields ──────────────────────────────────────────────────────

/// Model id used for inference.
pub const MODEL: &str = "model";

/// 1-based attempt number of an outbound call.
pub const ATTEMPT: &str = "attempt";

/// Attempt budget shared by all warm-up signals of one call.
pub const MAX_ATTEMPTS: &str = "max_attempts";

/// HTTP status code returned by an upstream endpoint.
pub const STATUS: &str = "status";

/// Provider's own estimate of the remaining warm-up time, in seconds.
pub const ESTIMATED_TIME: &str = "estimated_time";

// ─── Outcome fields ────────────────────────────────────────────────────────

/// Boolean success/failure indicator.
pub const SUCCESS: &str = "success";

/// Error message when an operation fails.
pub const ERROR_MSG: &str = "error";
