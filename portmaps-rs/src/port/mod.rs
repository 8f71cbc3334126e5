/**
 * port module
 * Meshtastic port labels and colors for the UI pages
 */

pub mod color;
pub mod portnum;
pub mod table;

pub use color::{is_hex_color, Rgb};
pub use portnum::PortNum;
pub use table::{
    codes, color_of, contains, entries, label_of, try_color_of, try_label_of, PortCode, PortColor,
    PortEntry, PortLabel, PortTable, PORT_COLORS, PORT_COLOR_MAP, PORT_LABEL_MAP, PORT_MAP,
};
