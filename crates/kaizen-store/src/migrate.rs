//! Load-time normalization of persisted blobs. Applied on every load;
//! idempotent.

use kaizen_core::state::DEFAULT_THEME_COLOR;
use kaizen_core::{date, UserState};

/// Theme colors were once stored as named tokens. Loads translate them to
/// the hex values the palette generator expects.
pub const LEGACY_THEME_COLORS: &[(&str, &str)] = &[
    ("default", "#4A5D4E"),
    ("ocean", "#1E40AF"),
    ("sunset", "#C2410C"),
    ("lavender", "#7E22CE"),
    ("rose", "#BE123C"),
    ("midnight", "#0F172A"),
];

/// Normalize a freshly deserialized state: legacy theme-color tokens become
/// hex (unknown tokens and empty values fall back to the default), and a
/// blob that predates join-date stamping gets one now.
pub fn normalize_loaded(state: &mut UserState) {
    if !state.theme_color.starts_with('#') {
        state.theme_color = LEGACY_THEME_COLORS
            .iter()
            .find(|(name, _)| *name == state.theme_color)
            .map(|(_, hex)| *hex)
            .unwrap_or(DEFAULT_THEME_COLOR)
            .to_string();
    }
    if state.join_date.is_empty() {
        state.join_date = date::now_rfc3339();
    }
}
