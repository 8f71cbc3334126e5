//! Render the port tables for browsers, APIs and terminals
//!
//! The `js` rendering reproduces the `static/portmaps.js` asset the UI pages load,
//! so the script can be regenerated from this crate instead of edited by hand.

use colored::Colorize;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Write as _};
use std::fs;
use std::path::Path;
use std::str::FromStr;

use crate::errors::{PortmapError, Result};
use crate::port::{entries, PortColor, PortLabel, PortNum, PortTable, Rgb, PORT_COLOR_MAP, PORT_LABEL_MAP};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Js,
    Json,
    Yaml,
    #[default]
    Table,
}

impl OutputFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            OutputFormat::Js => "js",
            OutputFormat::Json => "json",
            OutputFormat::Yaml => "yaml",
            OutputFormat::Table => "table",
        }
    }
}

impl FromStr for OutputFormat {
    type Err = PortmapError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "js" | "javascript" => Ok(OutputFormat::Js),
            "json" => Ok(OutputFormat::Json),
            "yaml" | "yml" => Ok(OutputFormat::Yaml),
            "table" => Ok(OutputFormat::Table),
            other => Err(PortmapError::InvalidFormat(format!(
                "{} (expected js, json, yaml or table)",
                other
            ))),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// JSON/YAML document shape: `{labels: {...}, colors: {...}}`
#[derive(Debug, Serialize)]
pub struct TableDocument<'a> {
    pub labels: &'a PortTable<PortLabel>,
    pub colors: &'a PortTable<PortColor>,
}

impl TableDocument<'static> {
    pub fn current() -> Self {
        TableDocument {
            labels: &PORT_LABEL_MAP,
            colors: &PORT_COLOR_MAP,
        }
    }
}

/// Render the tables in the given format
pub fn render(format: OutputFormat) -> Result<String> {
    render_with(format, false)
}

/// Render the tables; `swatches` adds a colored block per row in table output
pub fn render_with(format: OutputFormat, swatches: bool) -> Result<String> {
    match format {
        OutputFormat::Js => Ok(render_js()),
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(&TableDocument::current())?;
            json.push('\n');
            Ok(json)
        }
        OutputFormat::Yaml => Ok(serde_yaml::to_string(&TableDocument::current())?),
        OutputFormat::Table => Ok(render_table(swatches)),
    }
}

/// Render and write to a file
pub fn write_to<P: AsRef<Path>>(format: OutputFormat, path: P) -> Result<()> {
    let path = path.as_ref();
    let content = render(format)?;
    fs::write(path, content)?;
    tracing::info!("Wrote {} port table to {}", format, path.display());
    Ok(())
}

fn js_object<V: AsRef<str>>(out: &mut String, name: &str, table: &PortTable<V>) {
    let _ = writeln!(out, "window.{} = {{", name);
    for (code, value) in table {
        // JSON string literals are valid JS string literals
        let literal = serde_json::Value::from(value.as_ref()).to_string();
        let _ = writeln!(out, "    {}: {},", code, literal);
    }
    out.push_str("};\n");
}

fn render_js() -> String {
    let mut out = String::new();
    out.push_str("// Shared port label/color definitions for UI pages.\n");
    js_object(&mut out, "PORT_LABEL_MAP", &*PORT_LABEL_MAP);
    out.push('\n');
    js_object(&mut out, "PORT_COLOR_MAP", &*PORT_COLOR_MAP);
    out.push('\n');
    out.push_str("// Aliases for pages that expect different names.\n");
    out.push_str("window.PORT_MAP = window.PORT_LABEL_MAP;\n");
    out.push_str("window.PORT_COLORS = window.PORT_COLOR_MAP;\n");
    out
}

fn render_table(swatches: bool) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{:<6} {:<28} {:<18} {:<8}", "CODE", "PORTNUM", "LABEL", "COLOR");
    let _ = writeln!(out, "{}", "-".repeat(63));

    for entry in entries() {
        let portnum = PortNum::try_from(entry.code)
            .map(|p| p.proto_name())
            .unwrap_or("-");
        let _ = write!(out, "{:<6} {:<28} {:<18} {:<8}", entry.code, portnum, entry.label, entry.color);

        if swatches {
            if let Ok(rgb) = Rgb::parse(entry.color) {
                let _ = write!(out, " {}", "    ".on_truecolor(rgb.r, rgb.g, rgb.b));
            }
        }
        out.push('\n');
    }
    out
}
