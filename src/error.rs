//! Error type for progress computations

use chrono::{DateTime, Utc};

/// Errors raised by the progress engine.
///
/// All of them are local to a single call. The host should reject the
/// activity and keep its previous [`UserProgress`](crate::UserProgress).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProgressError {
    #[error("Invalid activity kind: {0}")]
    InvalidActivityKind(String),

    #[error("Activity at {now} precedes last study date {previous}")]
    InvalidTimestamp {
        previous: DateTime<Utc>,
        now: DateTime<Utc>,
    },

    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}
