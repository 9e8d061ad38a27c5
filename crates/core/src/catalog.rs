//! Static option catalogs offered to clients for form population.
//!
//! These lists are suggestions only. Kite writes never check values against
//! them.

use serde::Serialize;

/// Suggested kite designs.
pub const DESIGNS: &[&str] = &["Delfines", "Alcones", "Aviones", "Estrellas", "Cruces"];

/// Thread gauges, thickest first.
pub const THREAD_TYPES: &[&str] = &["10", "4", "0", "00", "000"];

/// Hex colors shown as quick picks.
pub const POPULAR_COLORS: &[&str] = &[
    "#ff0000", "#0000ff", "#ffff00", "#00ff00", "#ffffff", "#000000", "#ff6b6b", "#4ecdc4",
    "#45b7d1", "#feca57",
];

/// The three catalogs bundled together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Catalogs {
    pub designs: &'static [&'static str],
    pub thread_types: &'static [&'static str],
    pub popular_colors: &'static [&'static str],
}

/// Return the fixed catalogs.
pub const fn catalogs() -> Catalogs {
    Catalogs {
        designs: DESIGNS,
        thread_types: THREAD_TYPES,
        popular_colors: POPULAR_COLORS,
    }
}
