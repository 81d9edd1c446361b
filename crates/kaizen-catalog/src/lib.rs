//! The static action catalog. Seeded at compile time, never mutated at
//! runtime. Every entry is tagged with a domain or a content pack, never
//! both; titles are the identity key the selector uses for recency
//! exclusion, so they are unique within a source.

use kaizen_core::{Domain, EnergyLevel};

/// What an entry belongs to: a life domain, or a purchasable content pack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Source {
    Domain(Domain),
    Pack(&'static str),
}

/// One candidate micro-action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogEntry {
    pub source: Source,
    /// Lowest reported energy this entry is offered at.
    pub min_energy: EnergyLevel,
    pub title: &'static str,
    pub description: &'static str,
    pub duration_text: &'static str,
}

impl CatalogEntry {
    pub fn in_domain(&self, domain: Domain) -> bool {
        self.source == Source::Domain(domain)
    }

    pub fn in_pack(&self, pack_id: &str) -> bool {
        matches!(self.source, Source::Pack(id) if id == pack_id)
    }
}

const fn domain_entry(
    domain: Domain,
    min_energy: EnergyLevel,
    title: &'static str,
    description: &'static str,
    duration_text: &'static str,
) -> CatalogEntry {
    CatalogEntry {
        source: Source::Domain(domain),
        min_energy,
        title,
        description,
        duration_text,
    }
}

const fn pack_entry(
    pack_id: &'static str,
    title: &'static str,
    description: &'static str,
    duration_text: &'static str,
) -> CatalogEntry {
    CatalogEntry {
        source: Source::Pack(pack_id),
        // Pack journeys are sequenced content; none of them gate on energy.
        min_energy: EnergyLevel::Normal,
        title,
        description,
        duration_text,
    }
}

/// The full action library.
///
/// Learning has no entries of its own yet; the selector's rescue pool
/// (Mental Clarity) covers it.
pub const LIBRARY: &[CatalogEntry] = &[
    domain_entry(
        Domain::Health,
        EnergyLevel::Normal,
        "Glass of Water",
        "Drink a full glass of water right now. Notice the temperature.",
        "1 min",
    ),
    domain_entry(
        Domain::Health,
        EnergyLevel::Normal,
        "Shoulder Rolls",
        "Do 10 slow shoulder rolls forward and 10 backward.",
        "2 mins",
    ),
    domain_entry(
        Domain::Health,
        EnergyLevel::Normal,
        "Sunlight Catch",
        "Stand by a window or step outside for 2 minutes of light.",
        "2 mins",
    ),
    domain_entry(
        Domain::Health,
        EnergyLevel::Normal,
        "Post Check",
        "Notice if you are slouching and gently align your spine.",
        "30s",
    ),
    domain_entry(
        Domain::Health,
        EnergyLevel::High,
        "Plank Hold",
        "Hold a plank for 30 seconds. Feel your core engage.",
        "1 min",
    ),
    domain_entry(
        Domain::Health,
        EnergyLevel::High,
        "Stair Climb",
        "Walk up and down a flight of stairs twice.",
        "3 mins",
    ),
    domain_entry(
        Domain::MentalClarity,
        EnergyLevel::Depleted,
        "One Breath",
        "Take just one deep breath. Inhale for 4, exhale for 6.",
        "30s",
    ),
    domain_entry(
        Domain::MentalClarity,
        EnergyLevel::Low,
        "Sky Gaze",
        "Look out a window and find one interesting cloud or bird.",
        "1 min",
    ),
    domain_entry(
        Domain::MentalClarity,
        EnergyLevel::Normal,
        "Digital De-clutter",
        "Delete 5 unnecessary photos from your camera roll.",
        "2 mins",
    ),
    domain_entry(
        Domain::MentalClarity,
        EnergyLevel::Normal,
        "Box Breathing",
        "Do 4 rounds of 4-4-4-4 breathing.",
        "2 mins",
    ),
    domain_entry(
        Domain::Relationships,
        EnergyLevel::Normal,
        "Quick Text",
        "Send a 'Thinking of you' text to one person.",
        "1 min",
    ),
    domain_entry(
        Domain::Relationships,
        EnergyLevel::Normal,
        "Gratitude Note",
        "Tell someone one small thing you appreciate about them.",
        "2 mins",
    ),
    domain_entry(
        Domain::Career,
        EnergyLevel::Normal,
        "Clean Desktop",
        "Move 3 random files into their proper folders.",
        "3 mins",
    ),
    domain_entry(
        Domain::Career,
        EnergyLevel::Normal,
        "Unsubscribe",
        "Find one promotional email and unsubscribe from it.",
        "1 min",
    ),
    domain_entry(
        Domain::Organization,
        EnergyLevel::Normal,
        "One Surface",
        "Clear everything off one small surface, like a nightstand.",
        "3 mins",
    ),
    domain_entry(
        Domain::Organization,
        EnergyLevel::Low,
        "Trash Hunt",
        "Find 3 pieces of trash and throw them away.",
        "2 mins",
    ),
    pack_entry(
        "pack_mindfulness",
        "Scent Check",
        "Find something with a scent. Describe it in one word.",
        "2 mins",
    ),
    pack_entry(
        "pack_mindfulness",
        "Texture Walk",
        "Touch 3 different surfaces in your room.",
        "2 mins",
    ),
    pack_entry(
        "pack_creativity",
        "Blind Contour",
        "Draw your hand without looking at the paper.",
        "3 mins",
    ),
];

/// Purchasable content pack metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentPack {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub price: &'static str,
}

pub const CONTENT_PACKS: &[ContentPack] = &[
    ContentPack {
        id: "pack_mindfulness",
        name: "Mindfulness Sprint",
        description: "A 7-day sensory reset for clarity.",
        price: "$4.99",
    },
    ContentPack {
        id: "pack_creativity",
        name: "Creative Spark",
        description: "Unblock your inner artist flow.",
        price: "$4.99",
    },
    ContentPack {
        id: "pack_sleep",
        name: "Better Sleep",
        description: "Cozy rituals for a restful night.",
        price: "$3.99",
    },
];

pub fn find_pack(pack_id: &str) -> Option<&'static ContentPack> {
    CONTENT_PACKS.iter().find(|p| p.id == pack_id)
}

/// Domains locked behind a paid tier.
pub const PREMIUM_DOMAINS: [Domain; 2] = [Domain::Career, Domain::Organization];

pub fn is_premium_domain(domain: Domain) -> bool {
    PREMIUM_DOMAINS.contains(&domain)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn titles_are_unique_within_a_source() {
        let mut seen = HashSet::new();
        for entry in LIBRARY {
            assert!(
                seen.insert((entry.source, entry.title)),
                "duplicate title {:?} in {:?}",
                entry.title,
                entry.source
            );
        }
    }

    #[test]
    fn rescue_domain_is_never_empty() {
        assert!(LIBRARY.iter().any(|e| e.in_domain(Domain::MentalClarity)));
    }

    #[test]
    fn every_pack_entry_belongs_to_a_known_pack() {
        for entry in LIBRARY {
            if let Source::Pack(id) = entry.source {
                assert!(find_pack(id).is_some(), "unknown pack {id}");
            }
        }
    }

    #[test]
    fn find_pack_by_id() {
        assert_eq!(find_pack("pack_sleep").unwrap().name, "Better Sleep");
        assert!(find_pack("pack_unknown").is_none());
    }

    #[test]
    fn premium_domains_table() {
        assert!(is_premium_domain(Domain::Career));
        assert!(is_premium_domain(Domain::Organization));
        assert!(!is_premium_domain(Domain::Health));
    }

    #[test]
    fn depleted_user_has_something_to_do() {
        assert!(LIBRARY
            .iter()
            .any(|e| e.min_energy == EnergyLevel::Depleted));
    }
}
