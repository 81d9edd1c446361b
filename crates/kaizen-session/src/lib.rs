//! The session controller: one instance per logged-in user, owning that
//! user's state aggregate from login to logout. It orchestrates the daily
//! flow (today's status → energy check-in → option selection → outcome
//! commit), applies monetization and preference events, and persists the
//! whole aggregate after every mutation.
//!
//! Persistence failures never block the user: a failed load starts from the
//! initial state, a failed save keeps the in-memory state and logs a
//! diagnostic. The persisted copy is last-write-wins per user; logout is
//! simply dropping the session.

use rand::Rng;
use time::{Date, Duration, OffsetDateTime};
use tracing::warn;

use kaizen_catalog::{find_pack, is_premium_domain, LIBRARY};
use kaizen_core::{
    date, DailyAction, DifficultyRating, Domain, EnergyLevel, Mood, NewActionParams, Outcome,
    PurchasedPack, StateError, SubscriptionTier, Theme, TimePreference, UserProfile, UserState,
};
use kaizen_engine::{select_options, ActionOption, SelectionRequest};
use kaizen_progress::{journal, summary, JournalView, ProgressSummary};
use kaizen_store::StateStore;

/// How many historical titles feed the selector's recency exclusion.
const RECENT_TITLE_WINDOW: usize = 10;

/// Gap after which a login greets the user as returning.
const RETURNING_AFTER_DAYS: i64 = 3;

/// Feedback captured when the user completes today's action.
#[derive(Debug, Clone)]
pub struct CompletionFeedback {
    pub difficulty: DifficultyRating,
    pub reflection: Option<String>,
    pub mood: Mood,
}

pub struct Session<S: StateStore> {
    user: UserProfile,
    state: UserState,
    store: S,
    returning: bool,
}

impl<S: StateStore> Session<S> {
    /// Open a session for `user`: load their blob (or start from the
    /// initial state on first login or a failed load), detect a returning
    /// user, stamp the activity timestamp, and persist.
    pub fn start(store: S, user: UserProfile) -> Self {
        let state = match store.load(&user.id) {
            Ok(Some(state)) => state,
            Ok(None) => UserState::initial(),
            Err(err) => {
                warn!(user = %user.id, %err, "state load failed, starting from defaults");
                UserState::initial()
            }
        };

        let returning = state
            .last_active_date
            .as_deref()
            .map(is_stale)
            .unwrap_or(false);

        let mut session = Session {
            user,
            state,
            store,
            returning,
        };
        session.state.last_active_date = Some(date::now_rfc3339());
        session.persist();
        session
    }

    pub fn user(&self) -> &UserProfile {
        &self.user
    }

    pub fn state(&self) -> &UserState {
        &self.state
    }

    /// True when more than [`RETURNING_AFTER_DAYS`] passed since the
    /// previous session.
    pub fn is_returning(&self) -> bool {
        self.returning
    }

    // ── daily flow ──

    pub fn today_action(&self, today: Date) -> Option<&DailyAction> {
        self.state.action_for(today)
    }

    /// Whether the home screen should open with the energy check-in.
    pub fn needs_energy_check(&self, today: Date) -> bool {
        self.state.has_onboarded
            && self.state.selected_domain.is_some()
            && self.today_action(today).is_none()
    }

    /// Candidate options for the reported energy. Empty when no focus area
    /// is selected yet; the selector is never reached with invalid input.
    pub fn propose_options(&self, energy: EnergyLevel, rng: &mut impl Rng) -> Vec<ActionOption> {
        let Some(domain) = self.state.selected_domain else {
            return Vec::new();
        };
        let recent = self.state.recent_titles(RECENT_TITLE_WINDOW);
        let request = SelectionRequest {
            domain,
            energy,
            recent_titles: &recent,
            active_pack: self.state.active_pack_id.as_deref(),
        };
        select_options(LIBRARY, &request, rng)
    }

    /// Commit the chosen option as today's action record.
    pub fn accept_option(
        &mut self,
        option: &ActionOption,
        energy: EnergyLevel,
        today: Date,
    ) -> Result<(), StateError> {
        let domain = self
            .state
            .selected_domain
            .ok_or(StateError::NoDomainSelected)?;
        let action = DailyAction::new(&NewActionParams {
            date: today,
            title: &option.title,
            description: &option.description,
            duration_text: &option.duration_text,
            domain,
            pack_id: self.state.active_pack_id.as_deref(),
            energy: Some(energy),
        });
        self.state.record_action(action)?;
        self.persist();
        Ok(())
    }

    pub fn complete_today(
        &mut self,
        today: Date,
        feedback: CompletionFeedback,
    ) -> Result<(), StateError> {
        self.resolve_today(
            today,
            Outcome::Completed {
                difficulty: feedback.difficulty,
                reflection: feedback.reflection,
                mood: feedback.mood,
            },
        )
    }

    pub fn skip_today(&mut self, today: Date) -> Result<(), StateError> {
        self.resolve_today(today, Outcome::Skipped)
    }

    /// Take a conscious rest day; counts as completed.
    pub fn rest_today(&mut self, today: Date) -> Result<(), StateError> {
        self.resolve_today(today, Outcome::RestDay)
    }

    fn resolve_today(&mut self, today: Date, outcome: Outcome) -> Result<(), StateError> {
        let id = self
            .today_action(today)
            .ok_or(StateError::NoActionFor { date: today })?
            .id
            .clone();
        self.state.commit_outcome(&id, outcome)?;
        self.persist();
        Ok(())
    }

    // ── onboarding & preferences ──

    pub fn complete_onboarding(
        &mut self,
        domain: Domain,
        time_preference: TimePreference,
        reminder_time: &str,
    ) -> Result<(), StateError> {
        self.ensure_domain_unlocked(domain)?;
        self.state.has_onboarded = true;
        self.state.selected_domain = Some(domain);
        self.state.time_preference = Some(time_preference);
        self.state.reminder_time = Some(reminder_time.to_string());
        self.persist();
        Ok(())
    }

    pub fn set_domain(&mut self, domain: Domain) -> Result<(), StateError> {
        self.ensure_domain_unlocked(domain)?;
        self.state.selected_domain = Some(domain);
        self.persist();
        Ok(())
    }

    fn ensure_domain_unlocked(&self, domain: Domain) -> Result<(), StateError> {
        if is_premium_domain(domain) && !self.state.subscription_tier.is_premium() {
            return Err(StateError::PremiumRequired { domain });
        }
        Ok(())
    }

    pub fn set_reminder_time(&mut self, time: &str) {
        self.state.reminder_time = Some(time.to_string());
        self.persist();
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.state.theme = theme;
        self.persist();
    }

    /// Custom theme colors are a premium feature.
    pub fn set_theme_color(&mut self, color: &str) -> Result<(), StateError> {
        if !self.state.subscription_tier.is_premium() {
            return Err(StateError::ThemeLocked);
        }
        self.state.theme_color = color.to_string();
        self.persist();
        Ok(())
    }

    pub fn toggle_minimalist(&mut self) {
        self.state.is_minimalist = !self.state.is_minimalist;
        self.persist();
    }

    // ── monetization events ──
    //
    // The caller reports "purchase succeeded"; no payment processing
    // happens here.

    pub fn purchase_subscription(&mut self, tier: SubscriptionTier) {
        self.state.subscription_tier = tier;
        self.persist();
    }

    /// Record a one-time pack purchase. Buying an already-owned pack is a
    /// no-op.
    pub fn purchase_pack(&mut self, pack_id: &str) -> Result<(), StateError> {
        let pack = find_pack(pack_id).ok_or_else(|| StateError::UnknownPack {
            pack_id: pack_id.to_string(),
        })?;
        if self.state.purchased_packs.iter().any(|p| p.id == pack.id) {
            return Ok(());
        }
        self.state.purchased_packs.push(PurchasedPack {
            id: pack.id.to_string(),
            name: pack.name.to_string(),
            purchased_at: date::now_rfc3339(),
        });
        self.persist();
        Ok(())
    }

    /// Make a pack the active journey. Requires ownership; the Lifetime
    /// tier owns every pack.
    pub fn activate_pack(&mut self, pack_id: &str) -> Result<(), StateError> {
        if find_pack(pack_id).is_none() {
            return Err(StateError::UnknownPack {
                pack_id: pack_id.to_string(),
            });
        }
        if !self.state.owns_pack(pack_id) {
            return Err(StateError::PackNotOwned {
                pack_id: pack_id.to_string(),
            });
        }
        self.state.active_pack_id = Some(pack_id.to_string());
        self.persist();
        Ok(())
    }

    pub fn deactivate_pack(&mut self) {
        self.state.active_pack_id = None;
        self.persist();
    }

    // ── derived views ──

    pub fn progress(&self, today: Date) -> ProgressSummary {
        summary(&self.state.actions, today)
    }

    /// The tier-gated journal of completed steps.
    pub fn journal(&self) -> JournalView {
        journal(&self.state.actions, self.state.subscription_tier)
    }

    /// Persist the whole aggregate. A failed save is logged and dropped;
    /// the session keeps serving the in-memory state.
    fn persist(&self) {
        if let Err(err) = self.store.save(&self.user.id, &self.state) {
            warn!(user = %self.user.id, %err, "dropping state save");
        }
    }
}

fn is_stale(last_active: &str) -> bool {
    match date::parse_rfc3339(last_active) {
        Ok(then) => OffsetDateTime::now_utc() - then > Duration::days(RETURNING_AFTER_DAYS),
        Err(_) => false,
    }
}
