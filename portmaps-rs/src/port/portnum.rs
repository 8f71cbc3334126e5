//! Typed view of the table codes, named after the Meshtastic `PortNum` protobuf enum

use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::errors::{PortmapError, Result};
use crate::port::table::{PortCode, PortColor, PortLabel, PORT_COLOR_MAP, PORT_LABEL_MAP};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u32)]
pub enum PortNum {
    UnknownApp = 0,
    TextMessageApp = 1,
    PositionApp = 3,
    NodeinfoApp = 4,
    RoutingApp = 5,
    AdminApp = 6,
    WaypointApp = 8,
    StoreForwardPlusplusApp = 35,
    StoreForwardApp = 65,
    TelemetryApp = 67,
    TracerouteApp = 70,
    NeighborinfoApp = 71,
    MapReportApp = 73,
}

impl PortNum {
    /// Every variant, ascending by code
    pub const ALL: [PortNum; 13] = [
        PortNum::UnknownApp,
        PortNum::TextMessageApp,
        PortNum::PositionApp,
        PortNum::NodeinfoApp,
        PortNum::RoutingApp,
        PortNum::AdminApp,
        PortNum::WaypointApp,
        PortNum::StoreForwardPlusplusApp,
        PortNum::StoreForwardApp,
        PortNum::TelemetryApp,
        PortNum::TracerouteApp,
        PortNum::NeighborinfoApp,
        PortNum::MapReportApp,
    ];

    pub fn code(self) -> PortCode {
        self as PortCode
    }

    /// Protobuf enum value name (e.g. `TEXT_MESSAGE_APP`)
    pub fn proto_name(self) -> &'static str {
        match self {
            PortNum::UnknownApp => "UNKNOWN_APP",
            PortNum::TextMessageApp => "TEXT_MESSAGE_APP",
            PortNum::PositionApp => "POSITION_APP",
            PortNum::NodeinfoApp => "NODEINFO_APP",
            PortNum::RoutingApp => "ROUTING_APP",
            PortNum::AdminApp => "ADMIN_APP",
            PortNum::WaypointApp => "WAYPOINT_APP",
            PortNum::StoreForwardPlusplusApp => "STORE_FORWARD_PLUSPLUS_APP",
            PortNum::StoreForwardApp => "STORE_FORWARD_APP",
            PortNum::TelemetryApp => "TELEMETRY_APP",
            PortNum::TracerouteApp => "TRACEROUTE_APP",
            PortNum::NeighborinfoApp => "NEIGHBORINFO_APP",
            PortNum::MapReportApp => "MAP_REPORT_APP",
        }
    }

    /// Table label; every variant has one
    pub fn label(self) -> PortLabel {
        PORT_LABEL_MAP
            .get(&self.code())
            .copied()
            .expect("every PortNum variant has a label table entry")
    }

    /// Table color; every variant has one
    pub fn color(self) -> PortColor {
        PORT_COLOR_MAP
            .get(&self.code())
            .copied()
            .expect("every PortNum variant has a color table entry")
    }
}

impl TryFrom<PortCode> for PortNum {
    type Error = PortmapError;

    fn try_from(code: PortCode) -> Result<Self> {
        PortNum::ALL
            .into_iter()
            .find(|p| p.code() == code)
            .ok_or(PortmapError::UnknownPortNum(code))
    }
}

impl From<PortNum> for PortCode {
    fn from(port: PortNum) -> Self {
        port.code()
    }
}

impl FromStr for PortNum {
    type Err = PortmapError;

    /// Accepts a protobuf name (any case) or a decimal code
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if let Ok(code) = s.parse::<PortCode>() {
            return PortNum::try_from(code);
        }

        PortNum::ALL
            .into_iter()
            .find(|p| p.proto_name().eq_ignore_ascii_case(s))
            .ok_or_else(|| PortmapError::InvalidFormat(format!("unknown PortNum name: {}", s)))
    }
}

impl fmt::Display for PortNum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.proto_name())
    }
}

impl Serialize for PortNum {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.proto_name())
    }
}
