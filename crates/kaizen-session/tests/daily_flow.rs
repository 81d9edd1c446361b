//! End-to-end daily flow over an in-memory store: login, onboarding, energy
//! check-in, option selection, outcome commits, derived progress, and a
//! session restart over the persisted blob.

use kaizen_catalog::LIBRARY;
use kaizen_core::{
    DifficultyRating, Domain, EnergyLevel, Mood, SubscriptionTier, TimePreference, UserProfile,
};
use kaizen_progress::{calendar_window, growth_series, DayStatus};
use kaizen_session::{CompletionFeedback, Session};
use kaizen_store::{MemoryStore, StateStore};
use rand::rngs::StdRng;
use rand::SeedableRng;
use time::{Date, Duration, Month};

fn profile() -> UserProfile {
    UserProfile {
        id: "user_google_002".to_string(),
        name: "Alex Chen".to_string(),
        email: "alex.chen@gmail.com".to_string(),
        avatar: Some("G".to_string()),
    }
}

fn day(d: u8) -> Date {
    Date::from_calendar_date(2026, Month::August, d).unwrap()
}

#[test]
fn fresh_user_gets_two_health_options_within_energy() {
    let store = MemoryStore::new();
    let mut session = Session::start(&store, profile());
    session
        .complete_onboarding(Domain::Health, TimePreference::Morning, "08:30")
        .unwrap();

    assert!(session.needs_energy_check(day(3)));
    let options = session.propose_options(EnergyLevel::Normal, &mut StdRng::seed_from_u64(1));

    assert_eq!(options.len(), 2);
    assert_ne!(options[0].title, options[1].title);
    for opt in &options {
        let entry = LIBRARY.iter().find(|e| e.title == opt.title).unwrap();
        assert!(entry.in_domain(Domain::Health));
        assert!(entry.min_energy <= EnergyLevel::Normal);
    }
}

#[test]
fn a_week_of_engagement_builds_streak_growth_and_journal() {
    let store = MemoryStore::new();
    let mut session = Session::start(&store, profile());
    session
        .complete_onboarding(Domain::MentalClarity, TimePreference::Evening, "20:00")
        .unwrap();

    let mut rng = StdRng::seed_from_u64(5);

    // Three completed days, one skip, one rest.
    for d in 1..=3 {
        let options = session.propose_options(EnergyLevel::Normal, &mut rng);
        session
            .accept_option(&options[0], EnergyLevel::Normal, day(d))
            .unwrap();
        session
            .complete_today(
                day(d),
                CompletionFeedback {
                    difficulty: DifficultyRating::JustRight,
                    reflection: Some("quiet minute".to_string()),
                    mood: Mood::Calm,
                },
            )
            .unwrap();
    }
    let options = session.propose_options(EnergyLevel::Low, &mut rng);
    session
        .accept_option(&options[0], EnergyLevel::Low, day(4))
        .unwrap();
    session.skip_today(day(4)).unwrap();

    let options = session.propose_options(EnergyLevel::Depleted, &mut rng);
    session
        .accept_option(&options[0], EnergyLevel::Depleted, day(5))
        .unwrap();
    session.rest_today(day(5)).unwrap();

    let progress = session.progress(day(5));
    // Day 4 was skipped, so the run is day 5's rest day only.
    assert_eq!(progress.streak, 1);
    assert_eq!(progress.completed_count, 4);
    assert_eq!(progress.completion_rate, 80);
    assert_eq!(progress.level, 1);
    assert_eq!(progress.next_milestone, 10);

    let series = growth_series(&session.state().actions);
    // 100 * 1.01^4, rounded per step.
    let last_real = series.iter().rev().find(|p| !p.projected).unwrap();
    assert!((last_real.value - 104.06).abs() < 0.01);

    let days = calendar_window(&session.state().actions, day(5));
    let status_of = |d: Date| days.iter().find(|c| c.date == d).unwrap().status;
    assert_eq!(status_of(day(3)), DayStatus::Completed);
    assert_eq!(status_of(day(4)), DayStatus::Skipped);
    assert_eq!(status_of(day(5)), DayStatus::Completed);

    let journal = session.journal();
    assert_eq!(journal.visible.len(), 4);
    assert_eq!(journal.visible[0].date, day(5));
    assert_eq!(journal.hidden_count, 0);
}

#[test]
fn restart_resumes_from_the_persisted_blob() {
    let store = MemoryStore::new();
    {
        let mut session = Session::start(&store, profile());
        session
            .complete_onboarding(Domain::Relationships, TimePreference::Afternoon, "14:00")
            .unwrap();
        let options = session.propose_options(EnergyLevel::Normal, &mut StdRng::seed_from_u64(2));
        session
            .accept_option(&options[0], EnergyLevel::Normal, day(10))
            .unwrap();
        session
            .complete_today(
                day(10),
                CompletionFeedback {
                    difficulty: DifficultyRating::TooEasy,
                    reflection: None,
                    mood: Mood::Happy,
                },
            )
            .unwrap();
    }

    let session = Session::start(&store, profile());
    assert!(session.state().has_onboarded);
    assert_eq!(
        session.state().selected_domain,
        Some(Domain::Relationships)
    );
    assert_eq!(session.state().internal_difficulty_score, 55);
    assert_eq!(session.progress(day(10)).completed_count, 1);
    assert!(!session.needs_energy_check(day(10)));
    assert!(session.needs_energy_check(day(11)));
}

#[test]
fn pack_journey_overrides_domain_until_deactivated() {
    let store = MemoryStore::new();
    let mut session = Session::start(&store, profile());
    session
        .complete_onboarding(Domain::Health, TimePreference::Morning, "09:00")
        .unwrap();
    session.purchase_subscription(SubscriptionTier::PremiumMonthly);
    session.purchase_pack("pack_mindfulness").unwrap();
    session.activate_pack("pack_mindfulness").unwrap();

    let mut rng = StdRng::seed_from_u64(9);
    let options = session.propose_options(EnergyLevel::High, &mut rng);
    for opt in &options {
        let entry = LIBRARY.iter().find(|e| e.title == opt.title).unwrap();
        assert!(entry.in_pack("pack_mindfulness"));
    }

    session.deactivate_pack();
    let options = session.propose_options(EnergyLevel::High, &mut rng);
    for opt in &options {
        let entry = LIBRARY.iter().find(|e| e.title == opt.title).unwrap();
        assert!(entry.in_domain(Domain::Health));
    }
}

#[test]
fn history_survives_a_long_absence() {
    let store = MemoryStore::new();
    {
        let mut session = Session::start(&store, profile());
        session
            .complete_onboarding(Domain::Health, TimePreference::Morning, "09:00")
            .unwrap();
        let options = session.propose_options(EnergyLevel::Normal, &mut StdRng::seed_from_u64(3));
        session
            .accept_option(&options[0], EnergyLevel::Normal, day(1))
            .unwrap();
        session.skip_today(day(1)).unwrap();
    }

    // Simulate coming back after a long gap.
    {
        let mut blob = store.load(&profile().id).unwrap().unwrap();
        let then = time::OffsetDateTime::now_utc() - Duration::days(14);
        blob.last_active_date = Some(
            then.format(&time::format_description::well_known::Rfc3339)
                .unwrap(),
        );
        store.save(&profile().id, &blob).unwrap();
    }

    let session = Session::start(&store, profile());
    assert!(session.is_returning());
    // The skip is still on record; history is never truncated.
    assert_eq!(session.state().actions.len(), 1);
    assert!(session.state().actions[0].skipped);
    assert_eq!(session.progress(day(1)).completion_rate, 0);
}
