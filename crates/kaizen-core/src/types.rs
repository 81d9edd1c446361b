use serde::{Deserialize, Serialize};

/// A life area the user is working on. `Career` and `Organization` are
/// premium-gated (the catalog crate carries the gating table).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Domain {
    Health,
    Learning,
    MentalClarity,
    Relationships,
    Career,
    Organization,
}

impl Domain {
    /// Product display name.
    pub fn label(&self) -> &'static str {
        match self {
            Domain::Health => "Health",
            Domain::Learning => "Learning",
            Domain::MentalClarity => "Mental Clarity",
            Domain::Relationships => "Relationships",
            Domain::Career => "Career",
            Domain::Organization => "Personal Organization",
        }
    }
}

impl std::fmt::Display for Domain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Self-reported daily capacity. Ordered: a higher level admits every action
/// a lower level admits.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum EnergyLevel {
    Depleted,
    Low,
    Normal,
    High,
}

impl EnergyLevel {
    /// Ordinal used by the selector's energy gate: Depleted=1 .. High=4.
    pub fn ordinal(&self) -> u8 {
        match self {
            EnergyLevel::Depleted => 1,
            EnergyLevel::Low => 2,
            EnergyLevel::Normal => 3,
            EnergyLevel::High => 4,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mood {
    Calm,
    Happy,
    Neutral,
    Tired,
    Stressed,
}

/// Post-completion feedback on how the action landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DifficultyRating {
    TooEasy,
    JustRight,
    BitHard,
}

impl DifficultyRating {
    /// Nudge applied to the rolling difficulty score on completion.
    /// Too-easy pushes the score up, a-bit-hard pushes it down.
    pub fn score_delta(&self) -> i8 {
        match self {
            DifficultyRating::TooEasy => 5,
            DifficultyRating::JustRight => 0,
            DifficultyRating::BitHard => -5,
        }
    }
}

/// Subscription tiers, ordered by value.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum SubscriptionTier {
    #[default]
    Free,
    WeeklySprout,
    PremiumMonthly,
    PremiumYearly,
    Lifetime,
}

impl SubscriptionTier {
    pub fn is_premium(&self) -> bool {
        *self != SubscriptionTier::Free
    }
}

/// When the user wants their daily reminder. Stored only; nothing fires it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimePreference {
    Morning,
    Afternoon,
    Evening,
    Custom,
    NoReminders,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

/// Payload handed over by the identity provider. The core only relies on
/// `id` being stable; it is the persistence partition key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

/// A one-time content purchase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchasedPack {
    pub id: String,
    pub name: String,
    /// RFC3339 purchase timestamp.
    pub purchased_at: String,
}
