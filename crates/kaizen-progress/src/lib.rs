//! Derived progress statistics. Every function here is a pure read over the
//! action history; nothing caches and nothing mutates. Callers inject
//! `today` the same way the selector takes an `Rng`, so the whole crate is
//! deterministic under test.

use std::collections::{HashMap, HashSet};

use serde::Serialize;
use time::{Date, Duration};

use kaizen_core::{DailyAction, SubscriptionTier};

/// Compounding base of the growth index.
const GROWTH_BASE: f64 = 100.0;
/// One percent per completed step.
const GROWTH_RATE: f64 = 1.01;
/// Below this many chart points the series is padded with projections.
const MIN_CHART_POINTS: usize = 5;
const PROJECTED_POINTS: usize = 3;
/// Completed steps per level.
const STEPS_PER_LEVEL: usize = 10;
/// Trailing days shown in the calendar heatmap.
const CALENDAR_WINDOW_DAYS: i64 = 84;
/// Journal entries visible on the free tier.
const FREE_JOURNAL_DEPTH: usize = 5;

/// Headline numbers for the progress screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProgressSummary {
    pub streak: u32,
    pub completed_count: usize,
    /// `round(100 * completed / total)`; 0 for an empty history.
    pub completion_rate: u8,
    pub level: u32,
    pub next_milestone: u32,
}

/// Consecutive completed calendar days, walking backward from today.
///
/// A day counts when any record for it is completed (rest days included).
/// If today has no completion yet the walk anchors at yesterday instead, so
/// a user who simply has not acted yet today keeps their run.
pub fn streak(actions: &[DailyAction], today: Date) -> u32 {
    let done: HashSet<Date> = actions
        .iter()
        .filter(|a| a.completed)
        .map(|a| a.date)
        .collect();

    let mut anchor = None;
    if done.contains(&today) {
        anchor = Some(today);
    } else if let Some(yesterday) = today.previous_day() {
        if done.contains(&yesterday) {
            anchor = Some(yesterday);
        }
    }

    let Some(mut day) = anchor else { return 0 };
    let mut run = 0u32;
    while done.contains(&day) {
        run += 1;
        match day.previous_day() {
            Some(prev) => day = prev,
            None => break,
        }
    }
    run
}

pub fn summary(actions: &[DailyAction], today: Date) -> ProgressSummary {
    let total = actions.len();
    let completed = actions.iter().filter(|a| a.completed).count();
    let completion_rate = if total == 0 {
        0
    } else {
        (100.0 * completed as f64 / total as f64).round() as u8
    };
    let level = (completed / STEPS_PER_LEVEL) as u32 + 1;

    ProgressSummary {
        streak: streak(actions, today),
        completed_count: completed,
        completion_rate,
        level,
        next_milestone: level * STEPS_PER_LEVEL as u32,
    }
}

/// One point of the growth chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GrowthPoint {
    pub step: usize,
    /// Rounded to 2 decimals for display.
    pub value: f64,
    /// True for the synthetic continuation appended to short histories.
    pub projected: bool,
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// The synthetic compounding index: starts at 100.0, grows 1% per completed
/// action in ascending date order, one point per action processed. Short
/// series get three projected points continuing the same compounding. This
/// is a display fiction, not a measured quantity.
pub fn growth_series(actions: &[DailyAction]) -> Vec<GrowthPoint> {
    let mut ordered: Vec<&DailyAction> = actions.iter().collect();
    ordered.sort_by_key(|a| a.date);

    let mut value = GROWTH_BASE;
    let mut points = vec![GrowthPoint {
        step: 0,
        value: GROWTH_BASE,
        projected: false,
    }];
    for action in ordered {
        if action.completed {
            value *= GROWTH_RATE;
        }
        points.push(GrowthPoint {
            step: points.len(),
            value: round2(value),
            projected: false,
        });
    }

    if points.len() < MIN_CHART_POINTS {
        for i in 1..=PROJECTED_POINTS {
            points.push(GrowthPoint {
                step: points.len(),
                value: round2(value * GROWTH_RATE.powi(i as i32)),
                projected: true,
            });
        }
    }
    points
}

/// How one calendar day renders in the heatmap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DayStatus {
    Completed,
    Skipped,
    /// A record exists but was never resolved.
    Missed,
    /// No record for this day. Past gaps and never-engaged days look the
    /// same by design.
    Empty,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarDay {
    #[serde(with = "kaizen_core::date::day")]
    pub date: Date,
    pub status: DayStatus,
    pub is_today: bool,
}

/// The trailing [`CALENDAR_WINDOW_DAYS`]-day window ending today, oldest
/// first.
pub fn calendar_window(actions: &[DailyAction], today: Date) -> Vec<CalendarDay> {
    let mut by_date: HashMap<Date, &DailyAction> = HashMap::new();
    for action in actions {
        by_date.entry(action.date).or_insert(action);
    }

    let mut days = Vec::with_capacity(CALENDAR_WINDOW_DAYS as usize);
    for offset in (0..CALENDAR_WINDOW_DAYS).rev() {
        let Some(date) = today.checked_sub(Duration::days(offset)) else {
            continue;
        };
        let status = match by_date.get(&date) {
            Some(a) if a.completed => DayStatus::Completed,
            Some(a) if a.skipped => DayStatus::Skipped,
            Some(_) => DayStatus::Missed,
            None => DayStatus::Empty,
        };
        days.push(CalendarDay {
            date,
            status,
            is_today: date == today,
        });
    }
    days
}

/// The journal: completed steps, newest first, depth-gated by tier.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JournalView {
    pub visible: Vec<DailyAction>,
    /// Older entries hidden from the free tier.
    pub hidden_count: usize,
}

pub fn journal(actions: &[DailyAction], tier: SubscriptionTier) -> JournalView {
    let mut completed: Vec<DailyAction> = actions.iter().filter(|a| a.completed).cloned().collect();
    completed.sort_by(|a, b| b.date.cmp(&a.date));

    if tier.is_premium() {
        return JournalView {
            visible: completed,
            hidden_count: 0,
        };
    }
    let hidden_count = completed.len().saturating_sub(FREE_JOURNAL_DEPTH);
    completed.truncate(FREE_JOURNAL_DEPTH);
    JournalView {
        visible: completed,
        hidden_count,
    }
}
