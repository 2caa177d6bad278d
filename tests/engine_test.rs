//! Integration tests for applying activities and ranking milestones

mod common;

use common::{at, progress};
use lingo_progress::{
    compute_streak, next_milestone, ActivityEvent, ActivityKind, ClockSkewPolicy, Milestone,
    MilestoneKind, ProgressEngine, ProgressError, ProgressEvent, UserProgress,
};

fn starting_record() -> UserProgress {
    progress(950, 3, "2024-01-01T00:00:00Z", 0)
}

#[test]
fn test_quiz_success_next_day() {
    let engine = ProgressEngine::new();
    let updated = engine
        .apply_activity(
            &starting_record(),
            ActivityKind::Quiz,
            true,
            at("2024-01-02T00:00:00Z"),
        )
        .expect("Activity should apply");

    assert_eq!(
        updated,
        UserProgress {
            xp_points: 975,
            level: 0,
            daily_streak: 4,
            last_study_date: at("2024-01-02T00:00:00Z"),
            completed_lessons: vec![],
        }
    );
}

#[test]
fn test_three_day_gap_resets_streak() {
    let engine = ProgressEngine::new();
    let updated = engine
        .apply_activity(
            &starting_record(),
            ActivityKind::Quiz,
            true,
            at("2024-01-05T00:00:00Z"),
        )
        .expect("Activity should apply");

    assert_eq!(updated.daily_streak, 0);
    assert_eq!(updated.xp_points, 975);
    assert_eq!(updated.last_study_date, at("2024-01-05T00:00:00Z"));
}

#[test]
fn test_same_day_keeps_streak() {
    let record = starting_record();
    assert_eq!(compute_streak(&record, at("2024-01-01T21:45:00Z")), 3);
}

#[test]
fn test_xp_milestone_is_closest() {
    let record = progress(4800, 25, "2024-01-01T00:00:00Z", 9);
    assert_eq!(
        next_milestone(&record),
        Milestone {
            kind: MilestoneKind::Xp,
            target: 5000,
            current: 4800,
        }
    );
}

#[test]
fn test_next_milestone_is_stable() {
    let engine = ProgressEngine::new();
    let record = progress(12_345, 42, "2024-01-01T00:00:00Z", 77);
    assert_eq!(engine.next_milestone(&record), engine.next_milestone(&record));
}

#[test]
fn test_candidates_cover_every_ladder() {
    let engine = ProgressEngine::new();
    let record = progress(4800, 25, "2024-01-01T00:00:00Z", 9);
    let [xp, streak, lessons] = engine.milestone_candidates(&record);

    assert_eq!((xp.kind, xp.target, xp.current), (MilestoneKind::Xp, 5000, 4800));
    assert_eq!(
        (streak.kind, streak.target, streak.current),
        (MilestoneKind::Streak, 30, 25)
    );
    assert_eq!(
        (lessons.kind, lessons.target, lessons.current),
        (MilestoneKind::Lessons, 10, 9)
    );
}

#[test]
fn test_unknown_activity_kind_is_an_error() {
    let engine = ProgressEngine::new();
    let record = starting_record();
    let event = ActivityEvent::new("unknown", true, at("2024-01-02T00:00:00Z"));

    let err = engine.apply_event(&record, &event).unwrap_err();
    assert_eq!(err, ProgressError::InvalidActivityKind("unknown".to_string()));
    assert_eq!(err.to_string(), "Invalid activity kind: unknown");
}

#[test]
fn test_rejected_skew_leaves_caller_record_alone() {
    let engine = ProgressEngine::new().with_clock_skew(ClockSkewPolicy::Reject);
    let record = progress(950, 3, "2024-01-10T12:00:00Z", 0);
    let event = ActivityEvent::new("writing", true, at("2024-01-08T12:00:00Z"));

    let err = engine.apply_event(&record, &event).unwrap_err();
    assert_eq!(
        err,
        ProgressError::InvalidTimestamp {
            previous: at("2024-01-10T12:00:00Z"),
            now: at("2024-01-08T12:00:00Z"),
        }
    );
    assert_eq!(record, progress(950, 3, "2024-01-10T12:00:00Z", 0));
}

#[test]
fn test_week_of_study_reaches_streak_milestone() {
    let engine = ProgressEngine::new();
    let mut record = progress(0, 0, "2024-03-01T09:00:00Z", 0);
    let mut reached = Vec::new();

    for day in 2..=8 {
        let event = ActivityEvent::new("vocabulary", true, at(&format!("2024-03-{day:02}T09:00:00Z")))
            .with_lesson(format!("vocab-{day}"));
        let outcome = engine.apply_event(&record, &event).expect("Activity should apply");
        reached.extend(outcome.events.into_iter().filter(|e| {
            matches!(e, ProgressEvent::MilestoneReached { .. })
        }));
        record = outcome.progress;
    }

    assert_eq!(record.daily_streak, 7);
    assert_eq!(record.xp_points, 7 * 8);
    assert_eq!(record.completed_lessons.len(), 7);
    assert_eq!(
        reached,
        vec![ProgressEvent::MilestoneReached {
            kind: MilestoneKind::Streak,
            threshold: 7,
        }]
    );
}

#[test]
fn test_engine_is_shareable_across_threads() {
    let engine = std::sync::Arc::new(ProgressEngine::new());
    let handles: Vec<_> = ActivityKind::all()
        .iter()
        .map(|&kind| {
            let engine = std::sync::Arc::clone(&engine);
            std::thread::spawn(move || {
                engine
                    .apply_activity(&starting_record(), kind, true, at("2024-01-02T00:00:00Z"))
                    .expect("Activity should apply")
                    .xp_points
            })
        })
        .collect();

    let totals: Vec<u64> = handles
        .into_iter()
        .map(|h| h.join().expect("Worker panicked"))
        .collect();
    assert_eq!(totals, vec![960, 965, 958, 962, 970, 975, 965]);
}

#[test]
fn test_kept_skew_does_not_break_next_day_streak() {
    let engine = ProgressEngine::new().with_clock_skew(ClockSkewPolicy::Keep);
    let record = progress(2000, 10, "2024-01-05T12:00:00Z", 0);

    let skewed = engine
        .apply_activity(&record, ActivityKind::Grammar, true, at("2024-01-03T12:00:00Z"))
        .expect("Skewed activity should apply");
    assert_eq!(skewed.daily_streak, 10);
    assert_eq!(skewed.last_study_date, at("2024-01-05T12:00:00Z"));

    let next = engine
        .apply_activity(&skewed, ActivityKind::Grammar, true, at("2024-01-06T08:00:00Z"))
        .expect("Next-day activity should apply");
    assert_eq!(next.daily_streak, 11);
    assert_eq!(next.last_study_date, at("2024-01-06T08:00:00Z"));
}
