//! The daily action selector: a pure function from (domain-or-pack, reported
//! energy, recent history) to at most two candidate options. All randomness
//! flows through the injected `Rng`, so a seeded generator makes selection
//! fully deterministic.

use kaizen_core::{Domain, EnergyLevel};
use kaizen_catalog::CatalogEntry;
use rand::seq::SliceRandom;
use rand::Rng;

/// How many options a check-in offers.
pub const OPTION_COUNT: usize = 2;

/// Pool used when a domain (or a stale pack id) has nothing to offer.
const RESCUE_DOMAIN: Domain = Domain::MentalClarity;

/// One candidate presented to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionOption {
    pub title: String,
    pub description: String,
    pub duration_text: String,
}

impl From<&CatalogEntry> for ActionOption {
    fn from(entry: &CatalogEntry) -> Self {
        ActionOption {
            title: entry.title.to_string(),
            description: entry.description.to_string(),
            duration_text: entry.duration_text.to_string(),
        }
    }
}

/// Inputs to one selection round.
pub struct SelectionRequest<'a> {
    pub domain: Domain,
    pub energy: EnergyLevel,
    /// Titles to avoid repeating (callers pass the last 10). The exclusion
    /// is soft: it is dropped entirely rather than returning fewer than
    /// [`OPTION_COUNT`] options when more exist.
    pub recent_titles: &'a [String],
    /// While a pack is active its entries replace the domain pool outright.
    pub active_pack: Option<&'a str>,
}

/// Pick up to [`OPTION_COUNT`] options from `library`.
///
/// Pool construction, in order: the active pack's entries (or the domain's
/// non-pack entries); entries above the reported energy are dropped; an
/// empty result falls back to the unfiltered pool, then to the rescue
/// domain. Never fails — with a non-empty library the rescue pool always
/// has candidates. The user's rolling difficulty score is not consulted
/// here; reported energy is the only gate for now.
pub fn select_options(
    library: &[CatalogEntry],
    request: &SelectionRequest<'_>,
    rng: &mut impl Rng,
) -> Vec<ActionOption> {
    let pool: Vec<&CatalogEntry> = match request.active_pack {
        Some(pack_id) => library.iter().filter(|e| e.in_pack(pack_id)).collect(),
        None => library
            .iter()
            .filter(|e| e.in_domain(request.domain))
            .collect(),
    };

    let mut eligible: Vec<&CatalogEntry> = pool
        .iter()
        .copied()
        .filter(|e| e.min_energy <= request.energy)
        .collect();

    if eligible.is_empty() {
        eligible = if pool.is_empty() {
            library
                .iter()
                .filter(|e| e.in_domain(RESCUE_DOMAIN))
                .collect()
        } else {
            pool
        };
    }

    let fresh: Vec<&CatalogEntry> = eligible
        .iter()
        .copied()
        .filter(|e| !request.recent_titles.iter().any(|t| t == e.title))
        .collect();
    let mut candidates = if fresh.len() < OPTION_COUNT { eligible } else { fresh };

    candidates.shuffle(rng);
    candidates.truncate(OPTION_COUNT);
    candidates.into_iter().map(ActionOption::from).collect()
}
