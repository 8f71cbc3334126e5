/**
 * table.rs
 * Port label and color tables shared by the UI pages
 *
 * Two parallel maps keyed by Meshtastic port number:
 * - PORT_LABEL_MAP: code => human-readable label
 * - PORT_COLOR_MAP: code => `#rrggbb` display color
 *
 * PORT_MAP and PORT_COLORS are aliases for pages that expect those names.
 * They point at the canonical statics; there is only one copy of each map.
 *
 * Both maps carry the same key set. Neither is ever mutated after first access.
 */

use once_cell::sync::Lazy;
use serde::Serialize;
use std::collections::BTreeMap;

use crate::errors::{PortmapError, Result};

/// Numeric port/channel identifier (Meshtastic `PortNum` value)
pub type PortCode = u32;

/// Human-readable port name
pub type PortLabel = &'static str;

/// Display color in `#rrggbb` form
pub type PortColor = &'static str;

/// Map type shared by both tables
pub type PortTable<V> = BTreeMap<PortCode, V>;

const LABELS: [(PortCode, PortLabel); 13] = [
    (0, "UNKNOWN"),
    (1, "Text"),
    (3, "Position"),
    (4, "Node Info"),
    (5, "Routing"),
    (6, "Admin"),
    (8, "Waypoint"),
    (35, "Store Forward++"),
    (65, "Store & Forward"),
    (67, "Telemetry"),
    (70, "Traceroute"),
    (71, "Neighbor"),
    (73, "Map Report"),
];

const COLORS: [(PortCode, PortColor); 13] = [
    (0, "#6c757d"),
    (1, "#007bff"),
    (3, "#28a745"),
    (4, "#ffc107"),
    (5, "#dc3545"),
    (6, "#20c997"),
    (8, "#fd7e14"),
    (35, "#8bc34a"),
    (65, "#6610f2"),
    (67, "#17a2b8"),
    (70, "#ff4444"),
    (71, "#ff66cc"),
    (73, "#9999ff"),
];

/// Canonical label table
pub static PORT_LABEL_MAP: Lazy<PortTable<PortLabel>> = Lazy::new(|| LABELS.into_iter().collect());

/// Canonical color table
pub static PORT_COLOR_MAP: Lazy<PortTable<PortColor>> = Lazy::new(|| COLORS.into_iter().collect());

/// Alias of [`PORT_LABEL_MAP`]
pub static PORT_MAP: &Lazy<PortTable<PortLabel>> = &PORT_LABEL_MAP;

/// Alias of [`PORT_COLOR_MAP`]
pub static PORT_COLORS: &Lazy<PortTable<PortColor>> = &PORT_COLOR_MAP;

/// One row of the table: code with its label and color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PortEntry {
    pub code: PortCode,
    pub label: PortLabel,
    pub color: PortColor,
}

/// Look up the label for a port code
///
/// Returns `None` for codes the table does not define.
pub fn label_of(code: PortCode) -> Option<PortLabel> {
    PORT_LABEL_MAP.get(&code).copied()
}

/// Look up the display color for a port code
///
/// Returns `None` for codes the table does not define.
pub fn color_of(code: PortCode) -> Option<PortColor> {
    PORT_COLOR_MAP.get(&code).copied()
}

/// Like [`label_of`], but absent codes become `PortmapError::PortNotFound`
pub fn try_label_of(code: PortCode) -> Result<PortLabel> {
    label_of(code).ok_or(PortmapError::PortNotFound(code))
}

/// Like [`color_of`], but absent codes become `PortmapError::PortNotFound`
pub fn try_color_of(code: PortCode) -> Result<PortColor> {
    color_of(code).ok_or(PortmapError::PortNotFound(code))
}

/// Check whether a code has table entries
pub fn contains(code: PortCode) -> bool {
    PORT_LABEL_MAP.contains_key(&code)
}

/// All known codes, ascending
pub fn codes() -> impl Iterator<Item = PortCode> {
    PORT_LABEL_MAP.keys().copied()
}

/// All rows, ascending by code
pub fn entries() -> impl Iterator<Item = PortEntry> {
    PORT_LABEL_MAP.iter().filter_map(|(&code, &label)| {
        color_of(code).map(|color| PortEntry { code, label, color })
    })
}
