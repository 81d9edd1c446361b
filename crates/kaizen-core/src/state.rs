//! The per-user aggregate root. One instance per authenticated user, owned
//! by that user's session; persisted whole after every mutation.

use serde::{Deserialize, Serialize};
use time::Date;

use crate::action::{DailyAction, Outcome};
use crate::date;
use crate::error::StateError;
use crate::types::{Domain, PurchasedPack, SubscriptionTier, Theme, TimePreference};

pub const DEFAULT_THEME_COLOR: &str = "#4A5D4E";
pub const DEFAULT_REMINDER_TIME: &str = "09:00";
pub const INITIAL_DIFFICULTY_SCORE: u8 = 50;

/// Everything Kaizen knows about one user. Unknown fields in an older
/// persisted blob fall back to these defaults on load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserState {
    pub has_onboarded: bool,
    pub selected_domain: Option<Domain>,
    pub time_preference: Option<TimePreference>,
    /// `HH:MM`, stored only; nothing fires it.
    pub reminder_time: Option<String>,
    /// Append-only history in insertion order. Date order is established by
    /// sorting on read; it is not guaranteed here.
    pub actions: Vec<DailyAction>,
    /// Rolling 0–100 difficulty score, nudged by completion feedback.
    /// Tracked and persisted, not yet consulted by the selector.
    pub internal_difficulty_score: u8,
    /// RFC3339; stamped on first login.
    pub join_date: String,
    pub subscription_tier: SubscriptionTier,
    pub purchased_packs: Vec<PurchasedPack>,
    /// At most one pack is active; while set it overrides domain selection.
    pub active_pack_id: Option<String>,
    pub theme: Theme,
    /// Hex color. Legacy named tokens are normalized on load by the store.
    pub theme_color: String,
    pub is_minimalist: bool,
    /// RFC3339; refreshed on every session start.
    pub last_active_date: Option<String>,
}

impl Default for UserState {
    fn default() -> Self {
        UserState {
            has_onboarded: false,
            selected_domain: None,
            time_preference: None,
            reminder_time: Some(DEFAULT_REMINDER_TIME.to_string()),
            actions: Vec::new(),
            internal_difficulty_score: INITIAL_DIFFICULTY_SCORE,
            join_date: String::new(),
            subscription_tier: SubscriptionTier::Free,
            purchased_packs: Vec::new(),
            active_pack_id: None,
            theme: Theme::Light,
            theme_color: DEFAULT_THEME_COLOR.to_string(),
            is_minimalist: false,
            last_active_date: None,
        }
    }
}

impl UserState {
    /// Fresh state for a user's first login, join date stamped now.
    pub fn initial() -> Self {
        UserState {
            join_date: date::now_rfc3339(),
            ..UserState::default()
        }
    }

    /// The record generated for `date`, if any. "No action today" is a
    /// normal checked state, not an error.
    pub fn action_for(&self, date: Date) -> Option<&DailyAction> {
        self.actions.iter().find(|a| a.date == date)
    }

    /// Append a freshly generated record. Rejects a second record for the
    /// same calendar day; one record per day is a data invariant here, not
    /// caller discipline.
    pub fn record_action(&mut self, action: DailyAction) -> Result<(), StateError> {
        if self.action_for(action.date).is_some() {
            return Err(StateError::DuplicateDate { date: action.date });
        }
        self.actions.push(action);
        Ok(())
    }

    /// Resolve the record with `action_id`. Errors if the id is unknown or
    /// the record already carries a terminal outcome; resolved records are
    /// immutable. Completing with feedback nudges the difficulty score.
    pub fn commit_outcome(&mut self, action_id: &str, outcome: Outcome) -> Result<(), StateError> {
        let idx = self
            .actions
            .iter()
            .position(|a| a.id == action_id)
            .ok_or_else(|| StateError::UnknownAction {
                id: action_id.to_string(),
            })?;
        if self.actions[idx].is_resolved() {
            return Err(StateError::AlreadyResolved {
                id: action_id.to_string(),
            });
        }
        let delta = match &outcome {
            Outcome::Completed { difficulty, .. } => difficulty.score_delta(),
            _ => 0,
        };
        self.actions[idx].apply(outcome);
        self.adjust_difficulty(delta);
        Ok(())
    }

    /// Nudge the rolling difficulty score, clamped into `[0, 100]`.
    pub fn adjust_difficulty(&mut self, delta: i8) {
        let next = i16::from(self.internal_difficulty_score) + i16::from(delta);
        self.internal_difficulty_score = next.clamp(0, 100) as u8;
    }

    /// Titles of the last `n` records in insertion order, for the selector's
    /// recency exclusion.
    pub fn recent_titles(&self, n: usize) -> Vec<String> {
        let start = self.actions.len().saturating_sub(n);
        self.actions[start..].iter().map(|a| a.title.clone()).collect()
    }

    /// Whether `pack_id` can be activated: purchased, or any pack on the
    /// Lifetime tier.
    pub fn owns_pack(&self, pack_id: &str) -> bool {
        self.subscription_tier == SubscriptionTier::Lifetime
            || self.purchased_packs.iter().any(|p| p.id == pack_id)
    }
}
