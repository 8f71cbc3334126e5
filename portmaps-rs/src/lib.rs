//! # meshview-portmaps
//!
//! Port label and color tables for the meshview UI pages.
//!
//! Meshtastic packets carry a numeric `portnum` naming the application that
//! produced them (text, position, telemetry, traceroute, ...). Pages that list
//! or chart packets render that number through two shared tables:
//!
//! - [`PORT_LABEL_MAP`]: code to human-readable label
//! - [`PORT_COLOR_MAP`]: code to `#rrggbb` color
//!
//! [`PORT_MAP`] and [`PORT_COLORS`] alias the same two maps for pages that use
//! those names. Both tables hold the same 13 codes and never change at runtime.
//!
//! ```
//! use portmaps::{label_of, color_of};
//!
//! assert_eq!(label_of(73), Some("Map Report"));
//! assert_eq!(color_of(73), Some("#9999ff"));
//! assert_eq!(label_of(999), None);
//! ```

pub mod config;
pub mod errors;
pub mod export;
pub mod port;
pub mod traffic;

pub use config::{DisplayConfig, Fallback};
pub use errors::{PortmapError, Result};
pub use export::{render, OutputFormat};
pub use port::{
    color_of, entries, label_of, try_color_of, try_label_of, PortCode, PortColor, PortEntry,
    PortLabel, PortNum, Rgb, PORT_COLORS, PORT_COLOR_MAP, PORT_LABEL_MAP, PORT_MAP,
};
pub use traffic::{annotate, AnnotatedTraffic, TrafficRow};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
