//! Progress engine - applies learning activities to progress records
//!
//! Handles XP awards, level derivation, streak updates and milestone checks.
//! The engine only holds its configuration; every call takes a record and
//! returns a new one.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, info, warn};

use super::activity::{ActivityKind, RewardTable};
use super::levels::derive_level;
use super::milestones::{Ladders, Milestone, MilestoneKind};
use super::model::{ActivityEvent, UserProgress};
use super::streaks::{classify, ClockSkewPolicy, StreakChange};
use crate::error::ProgressError;

/// Events that can happen while applying an activity
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum ProgressEvent {
    XpAwarded {
        amount: u32,
        kind: ActivityKind,
        succeeded: bool,
    },
    LevelUp {
        old_level: u64,
        new_level: u64,
    },
    StreakExtended {
        count: u32,
    },
    StreakBroken {
        previous: u32,
    },
    MilestoneReached {
        kind: MilestoneKind,
        threshold: u64,
    },
}

/// Result of applying an [`ActivityEvent`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityOutcome {
    pub progress: UserProgress,
    pub events: Vec<ProgressEvent>,
}

/// Stateless calculator for learner progress.
///
/// Safe to share between threads; it never mutates after construction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProgressEngine {
    rewards: RewardTable,
    ladders: Ladders,
    clock_skew: ClockSkewPolicy,
}

impl ProgressEngine {
    /// Engine with the built-in reward table and ladders
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rewards(mut self, rewards: RewardTable) -> Self {
        self.rewards = rewards;
        self
    }

    pub fn with_ladders(mut self, ladders: Ladders) -> Self {
        self.ladders = ladders;
        self
    }

    pub fn with_clock_skew(mut self, policy: ClockSkewPolicy) -> Self {
        self.clock_skew = policy;
        self
    }

    pub fn ladders(&self) -> &Ladders {
        &self.ladders
    }

    pub fn clock_skew(&self) -> ClockSkewPolicy {
        self.clock_skew
    }

    // ========================================
    // XP & STREAK
    // ========================================

    /// XP awarded for an activity outcome
    pub fn compute_activity_xp(&self, kind: ActivityKind, succeeded: bool) -> u32 {
        self.rewards.xp(kind, succeeded)
    }

    /// XP for an activity identifier coming from untrusted input
    pub fn activity_xp(&self, kind: &str, succeeded: bool) -> Result<u32, ProgressError> {
        let kind: ActivityKind = kind.parse()?;
        Ok(self.compute_activity_xp(kind, succeeded))
    }

    /// Streak after an activity at `now`, honouring the clock-skew policy
    pub fn compute_streak(
        &self,
        previous: &UserProgress,
        now: DateTime<Utc>,
    ) -> Result<u32, ProgressError> {
        let change = classify(previous.last_study_date, now, self.clock_skew)?;
        Ok(change.apply(previous.daily_streak))
    }

    // ========================================
    // UPDATES
    // ========================================

    /// Apply one activity and return the updated record.
    ///
    /// The input record is left untouched; on error the caller keeps it.
    pub fn apply_activity(
        &self,
        progress: &UserProgress,
        kind: ActivityKind,
        succeeded: bool,
        now: DateTime<Utc>,
    ) -> Result<UserProgress, ProgressError> {
        let (updated, _) = self.advance(progress, kind, succeeded, now)?;
        Ok(updated)
    }

    /// Apply an activity event reported by the host.
    ///
    /// Parses the activity kind, records the lesson on success and reports
    /// every event the update produced.
    pub fn apply_event(
        &self,
        progress: &UserProgress,
        event: &ActivityEvent,
    ) -> Result<ActivityOutcome, ProgressError> {
        let kind: ActivityKind = event.kind.parse()?;
        let (mut updated, change) =
            self.advance(progress, kind, event.succeeded, event.timestamp)?;

        if event.succeeded {
            if let Some(lesson_id) = &event.lesson_id {
                updated.completed_lessons.push(lesson_id.clone());
            }
        }

        let xp_gained = updated.xp_points - progress.xp_points;
        let mut events = vec![ProgressEvent::XpAwarded {
            amount: u32::try_from(xp_gained).unwrap_or(u32::MAX),
            kind,
            succeeded: event.succeeded,
        }];

        if updated.level > progress.level {
            info!(
                "Level up: {} -> {} ({} XP)",
                progress.level, updated.level, updated.xp_points
            );
            events.push(ProgressEvent::LevelUp {
                old_level: progress.level,
                new_level: updated.level,
            });
        }

        match change {
            StreakChange::Extended => events.push(ProgressEvent::StreakExtended {
                count: updated.daily_streak,
            }),
            StreakChange::Reset if progress.daily_streak > 0 => {
                events.push(ProgressEvent::StreakBroken {
                    previous: progress.daily_streak,
                })
            }
            _ => {}
        }

        for ladder in self.ladders.iter() {
            let before = ladder.kind().current(progress);
            let after = ladder.kind().current(&updated);
            for threshold in ladder.crossed(before, after) {
                info!("Milestone reached: {} {}", ladder.kind(), threshold);
                events.push(ProgressEvent::MilestoneReached {
                    kind: ladder.kind(),
                    threshold,
                });
            }
        }

        Ok(ActivityOutcome {
            progress: updated,
            events,
        })
    }

    fn advance(
        &self,
        progress: &UserProgress,
        kind: ActivityKind,
        succeeded: bool,
        now: DateTime<Utc>,
    ) -> Result<(UserProgress, StreakChange), ProgressError> {
        let change = classify(progress.last_study_date, now, self.clock_skew)?;
        // A kept skew must not move the study date backward
        let last_study_date = if matches!(change, StreakChange::Skewed) {
            warn!(
                "Activity at {} precedes last study date {} (clock_skew = {}); keeping streak",
                now,
                progress.last_study_date,
                self.clock_skew.as_str()
            );
            progress.last_study_date.max(now)
        } else {
            now
        };

        let xp = self.compute_activity_xp(kind, succeeded);
        let xp_points = progress.xp_points.saturating_add(u64::from(xp));
        let daily_streak = change.apply(progress.daily_streak);

        debug!(
            "Applied {} (succeeded: {}): +{} XP, streak {} -> {}",
            kind, succeeded, xp, progress.daily_streak, daily_streak
        );

        let updated = UserProgress {
            xp_points,
            level: derive_level(xp_points),
            daily_streak,
            last_study_date,
            completed_lessons: progress.completed_lessons.clone(),
        };
        Ok((updated, change))
    }

    // ========================================
    // MILESTONES
    // ========================================

    /// Milestone the learner is proportionally closest to
    pub fn next_milestone(&self, progress: &UserProgress) -> Milestone {
        self.ladders.next(progress)
    }

    /// Every ladder's milestone in tie-break order (XP, streak, lessons)
    pub fn milestone_candidates(&self, progress: &UserProgress) -> [Milestone; 3] {
        self.ladders.candidates(progress)
    }
}
