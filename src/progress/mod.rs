//! Progress tracking: XP, levels, streaks and milestones
//!
//! Every function here is pure. [`ProgressEngine`] bundles the configurable
//! parts (reward table, milestone ladders, clock-skew policy); the free
//! functions use the built-in tables.

mod activity;
mod engine;
mod levels;
mod milestones;
mod model;
mod streaks;

pub use activity::{compute_activity_xp, ActivityKind, Reward, RewardTable};
pub use engine::{ActivityOutcome, ProgressEngine, ProgressEvent};
pub use levels::{derive_level, LevelProgress, XP_PER_LEVEL};
pub use milestones::{
    next_milestone, Ladder, Ladders, Milestone, MilestoneKind, LESSON_LADDER, STREAK_LADDER,
    XP_LADDER,
};
pub use model::{ActivityEvent, UserProgress};
pub use streaks::{compute_streak, day_difference, ClockSkewPolicy, StreakChange};
