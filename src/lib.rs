//! lingo-progress - learner progress engine
//!
//! Computes XP, levels, daily streaks and milestone targets for a
//! language-learning application. Every operation is a pure function over a
//! [`UserProgress`] snapshot: the engine returns new records and never holds
//! state between calls, so the host decides how records are stored and how
//! concurrent updates for one learner are serialized.
//!
//! ## Usage
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use lingo_progress::{ActivityKind, ProgressEngine, UserProgress};
//!
//! let engine = ProgressEngine::new();
//! let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
//! let progress = UserProgress::new(start);
//!
//! let next_day = Utc.with_ymd_and_hms(2024, 1, 2, 0, 0, 0).unwrap();
//! let updated = engine
//!     .apply_activity(&progress, ActivityKind::Quiz, true, next_day)
//!     .unwrap();
//! assert_eq!(updated.xp_points, 25);
//! assert_eq!(updated.daily_streak, 1);
//! ```

pub mod config;
pub mod error;
pub mod progress;

pub use error::ProgressError;
pub use progress::*;
