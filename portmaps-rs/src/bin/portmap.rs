//! portmap - inspect and export the meshview port tables

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use std::io::{IsTerminal, Read};
use std::path::PathBuf;

use portmaps::config::CONFIG_FILE_NAME;
use portmaps::export::{self, OutputFormat};
use portmaps::traffic::{self, TrafficRow};
use portmaps::{color_of, label_of, DisplayConfig, PortCode};

#[derive(Parser)]
#[command(name = "portmap")]
#[command(version)]
#[command(about = "Meshtastic port labels and colors", long_about = None)]
struct Cli {
    /// Display config file
    #[arg(long, global = true, default_value = CONFIG_FILE_NAME)]
    config: PathBuf,
    /// Enable verbose logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the port table
    List {
        /// Output format (js, json, yaml, table); defaults to the config value
        #[arg(long)]
        format: Option<OutputFormat>,
    },
    /// Print the label for a port number
    Label {
        code: PortCode,
        /// Fail instead of printing the fallback for unmapped ports
        #[arg(long)]
        strict: bool,
    },
    /// Print the color for a port number
    Color {
        code: PortCode,
        /// Fail instead of printing the fallback for unmapped ports
        #[arg(long)]
        strict: bool,
    },
    /// Write the port table to a file
    Export {
        /// Output format (js, json, yaml, table)
        #[arg(long, default_value = "js")]
        format: OutputFormat,
        /// Destination path
        #[arg(long)]
        out: PathBuf,
    },
    /// Annotate node traffic rows (JSON array, `-` for stdin)
    Annotate {
        input: String,
    },
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .with_target(false)
        .init();
}

fn read_input(input: &str) -> anyhow::Result<String> {
    if input == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read traffic rows from stdin")?;
        return Ok(buf);
    }
    std::fs::read_to_string(input).with_context(|| format!("Failed to read {}", input))
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = DisplayConfig::load(&cli.config)
        .with_context(|| format!("Failed to load config {}", cli.config.display()))?;

    match cli.command {
        Commands::List { format } => {
            let format = format.unwrap_or(config.format);
            let swatches = format == OutputFormat::Table && std::io::stdout().is_terminal();
            print!("{}", export::render_with(format, swatches)?);
        }

        Commands::Label { code, strict } => match label_of(code) {
            Some(label) => println!("{}", label),
            None if strict => bail!("Port {} has no label", code),
            None => {
                tracing::warn!("Port {} has no label, using fallback", code);
                println!("{}", config.fallback_label(code));
            }
        },

        Commands::Color { code, strict } => match color_of(code) {
            Some(color) => println!("{}", color),
            None if strict => bail!("Port {} has no color", code),
            None => {
                tracing::warn!("Port {} has no color, using fallback", code);
                println!("{}", config.fallback_color());
            }
        },

        Commands::Export { format, out } => {
            export::write_to(format, &out)
                .with_context(|| format!("Failed to export to {}", out.display()))?;
            println!("✓ Wrote {} ({})", out.display(), format);
        }

        Commands::Annotate { input } => {
            let content = read_input(&input)?;
            let rows: Vec<TrafficRow> =
                serde_json::from_str(&content).context("Invalid traffic rows JSON")?;
            let annotated = traffic::annotate(&rows, &config);
            tracing::debug!(
                "Annotated {} rows into {} ports ({} packets)",
                rows.len(),
                annotated.len(),
                traffic::total_packets(&annotated)
            );
            println!("{}", serde_json::to_string_pretty(&annotated)?);
        }
    }

    Ok(())
}
