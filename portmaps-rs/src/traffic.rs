//! Per-port packet counts with labels and colors attached
//!
//! The node traffic query returns one row per `(node, portnum)` with a packet
//! count. Charts need those rows merged per port and decorated with the table
//! label and color, falling back to the configured rendering for unmapped ports.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::config::DisplayConfig;
use crate::port::{color_of, label_of, PortCode};

/// Row as returned by the node traffic query
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrafficRow {
    #[serde(default)]
    pub long_name: Option<String>,
    #[serde(default)]
    pub portnum: Option<PortCode>,
    pub packet_count: u64,
}

/// Merged per-port count with display attributes
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnnotatedTraffic {
    pub portnum: PortCode,
    pub label: String,
    pub color: String,
    pub packet_count: u64,
    /// False when label and color came from the fallback
    pub known: bool,
}

/// Merge rows per port, attach labels/colors, sort by count descending
///
/// Rows without a portnum are counted under port 0.
pub fn annotate(rows: &[TrafficRow], config: &DisplayConfig) -> Vec<AnnotatedTraffic> {
    let mut counts: BTreeMap<PortCode, u64> = BTreeMap::new();
    for row in rows {
        let code = row.portnum.unwrap_or(0);
        let count = counts.entry(code).or_insert(0);
        *count = count.saturating_add(row.packet_count);
    }

    let mut annotated: Vec<AnnotatedTraffic> = counts
        .into_iter()
        .map(|(code, packet_count)| match (label_of(code), color_of(code)) {
            (Some(label), Some(color)) => AnnotatedTraffic {
                portnum: code,
                label: label.to_string(),
                color: color.to_string(),
                packet_count,
                known: true,
            },
            _ => {
                tracing::debug!("No table entry for port {}, using fallback", code);
                AnnotatedTraffic {
                    portnum: code,
                    label: config.fallback_label(code),
                    color: config.fallback_color().to_string(),
                    packet_count,
                    known: false,
                }
            }
        })
        .collect();

    annotated.sort_by(|a, b| {
        b.packet_count
            .cmp(&a.packet_count)
            .then(a.portnum.cmp(&b.portnum))
    });
    annotated
}

/// Sum of all counts, saturating at `u64::MAX`
pub fn total_packets(annotated: &[AnnotatedTraffic]) -> u64 {
    annotated
        .iter()
        .map(|a| a.packet_count)
        .fold(0, u64::saturating_add)
}
