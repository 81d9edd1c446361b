//! The daily action record: created once per engaged calendar day, resolved
//! exactly once (completed, skipped, or rest), then immutable forever.

use serde::{Deserialize, Serialize};
use time::Date;

use crate::date;
use crate::types::{DifficultyRating, Domain, EnergyLevel, Mood};

/// Card shown when the user takes a conscious rest day.
pub const REST_DAY_TITLE: &str = "Rest Day";
pub const REST_DAY_NOTE: &str = "Taking a conscious pause to recharge.";

fn new_action_id() -> String {
    format!("act_{}", ulid::Ulid::new().to_string().to_lowercase())
}

/// One day's micro-action and its eventual outcome. Everything except the
/// outcome fields is fixed at creation; the outcome fields are written once,
/// through [`Outcome`], by the state aggregate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyAction {
    /// `act_<ulid>`
    pub id: String,
    /// The calendar day this record was generated for. At most one record
    /// per day per user, enforced by [`crate::UserState::record_action`].
    #[serde(with = "date::day")]
    pub date: Date,
    pub title: String,
    pub description: String,
    pub duration_text: String,
    pub domain: Domain,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pack_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub energy_at_generation: Option<EnergyLevel>,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub skipped: bool,
    #[serde(default)]
    pub is_rest_day: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty_rating: Option<DifficultyRating>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reflection: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mood: Option<Mood>,
}

/// Parameters for materializing a freshly chosen action.
pub struct NewActionParams<'a> {
    pub date: Date,
    pub title: &'a str,
    pub description: &'a str,
    pub duration_text: &'a str,
    pub domain: Domain,
    pub pack_id: Option<&'a str>,
    pub energy: Option<EnergyLevel>,
}

/// Terminal outcome of a daily action. A rest day counts as completed.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Completed {
        difficulty: DifficultyRating,
        reflection: Option<String>,
        mood: Mood,
    },
    Skipped,
    RestDay,
}

impl DailyAction {
    pub fn new(params: &NewActionParams<'_>) -> Self {
        DailyAction {
            id: new_action_id(),
            date: params.date,
            title: params.title.to_string(),
            description: params.description.to_string(),
            duration_text: params.duration_text.to_string(),
            domain: params.domain,
            pack_id: params.pack_id.map(|s| s.to_string()),
            energy_at_generation: params.energy,
            completed: false,
            skipped: false,
            is_rest_day: false,
            difficulty_rating: None,
            reflection: None,
            mood: None,
        }
    }

    /// Whether a terminal outcome has been recorded.
    pub fn is_resolved(&self) -> bool {
        self.completed || self.skipped
    }

    /// Write the outcome fields. Callers must check [`Self::is_resolved`]
    /// first; the state aggregate does.
    pub(crate) fn apply(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Completed {
                difficulty,
                reflection,
                mood,
            } => {
                self.completed = true;
                self.difficulty_rating = Some(difficulty);
                self.reflection = reflection;
                self.mood = Some(mood);
            }
            Outcome::Skipped => {
                self.skipped = true;
            }
            Outcome::RestDay => {
                self.completed = true;
                self.is_rest_day = true;
                self.title = REST_DAY_TITLE.to_string();
                self.description = REST_DAY_NOTE.to_string();
                self.mood = Some(Mood::Calm);
            }
        }
    }
}
