//! CLI command definitions using Clap.
//!
//! Running `splitwall` without a subcommand is the same as `splitwall run`.

use std::io;
use std::path::{Path, PathBuf};

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{Generator, Shell, generate};
use colored::Colorize;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;
use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Modify, Style};
use tabled::{Table, Tabled};

use super::output;
use crate::config::{self, SplitwallConfig};
use crate::error::SplitwallError;
use crate::geometry::{Orientation, VirtualCanvas};
use crate::platform::{DesktopWallpaper, NativeMonitors};
use crate::schema;
use crate::wallpaper::{MonitorDescriptor, Topology, WallpaperLoop, discover};

/// Application version from Cargo.toml.
const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Splitwall - a different wallpaper on every monitor.
#[derive(Parser, Debug)]
#[command(name = "splitwall")]
#[command(author, version = APP_VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to a configuration file.
    ///
    /// Supports JSONC format (JSON with comments). Without it the built-in
    /// defaults are used.
    #[arg(long, short, global = true, value_name = "PATH", env = "SPLITWALL_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Rotate wallpapers on every monitor (default).
    ///
    /// Composes one image per monitor into a single canvas, writes it to the
    /// output file and applies it as the desktop background, over and over.
    Run {
        /// Stop after this many cycles instead of running forever.
        #[arg(long, value_name = "N", value_parser = clap::value_parser!(u64).range(1..))]
        cycles: Option<u64>,
    },

    /// Show the detected monitors and the combined canvas.
    Monitors {
        /// Output as JSON.
        #[arg(long, short)]
        json: bool,
    },

    /// Output the configuration JSON Schema.
    Schema,

    /// Generate shell completions.
    ///
    /// Usage:
    ///   eval "$(splitwall completions --shell zsh)"
    Completions {
        /// The shell to generate completions for.
        #[arg(long, short, value_enum)]
        shell: Shell,
    },
}

impl Cli {
    /// Execute the CLI command.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be loaded, no monitor is
    /// found, or the rotation loop gives up.
    pub fn execute(&self) -> Result<(), SplitwallError> {
        match &self.command {
            None => self.execute_run(None),
            Some(Commands::Run { cycles }) => self.execute_run(*cycles),
            Some(Commands::Monitors { json }) => self.execute_monitors(*json),
            Some(Commands::Schema) => {
                println!("{}", schema::generate_schema_json());
                Ok(())
            }
            Some(Commands::Completions { shell }) => {
                Self::print_completions(*shell);
                Ok(())
            }
        }
    }

    fn load_config(&self) -> Result<SplitwallConfig, SplitwallError> {
        Ok(config::load(self.config.as_deref())?)
    }

    fn execute_run(&self, cycles: Option<u64>) -> Result<(), SplitwallError> {
        let config = self.load_config()?;
        let base_dir = std::env::current_dir()?;

        let topology = discover_native(&config, &base_dir)?;
        let mut wallpaper = WallpaperLoop::new(topology, DesktopWallpaper::new(), &config, &base_dir);
        wallpaper.run(cycles)?;
        Ok(())
    }

    fn execute_monitors(&self, json: bool) -> Result<(), SplitwallError> {
        let config = self.load_config()?;
        let base_dir = std::env::current_dir()?;
        let topology = discover_native(&config, &base_dir)?;

        if json {
            output::print_json(&TopologyReport::from(&topology))?;
        } else {
            print_topology_table(&topology);
        }
        Ok(())
    }

    /// Print shell completions to stdout.
    fn print_completions<G: Generator>(generator: G) {
        let mut cmd = Self::command();
        generate(generator, &mut cmd, "splitwall", &mut io::stdout());
    }
}

fn discover_native(config: &SplitwallConfig, base_dir: &Path) -> Result<Topology, SplitwallError> {
    let mut rng = StdRng::from_rng(&mut rand::rng());
    Ok(discover(&NativeMonitors::new(), config, base_dir, &mut rng)?)
}

/// Serializable view of a discovered topology.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct TopologyReport {
    canvas: VirtualCanvas,
    monitors: Vec<MonitorReport>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct MonitorReport {
    name: String,
    x: i32,
    y: i32,
    width: u32,
    height: u32,
    orientation: Orientation,
    images: usize,
}

impl From<&MonitorDescriptor> for MonitorReport {
    fn from(monitor: &MonitorDescriptor) -> Self {
        Self {
            name: monitor.name().to_string(),
            x: monitor.x(),
            y: monitor.y(),
            width: monitor.width(),
            height: monitor.height(),
            orientation: monitor.orientation(),
            images: monitor.queue().pool_len(),
        }
    }
}

impl From<&Topology> for TopologyReport {
    fn from(topology: &Topology) -> Self {
        Self {
            canvas: *topology.canvas(),
            monitors: topology.monitors().iter().map(MonitorReport::from).collect(),
        }
    }
}

fn print_topology_table(topology: &Topology) {
    #[derive(Tabled)]
    struct MonitorRow {
        #[tabled(rename = "#")]
        index: usize,
        #[tabled(rename = "Name")]
        name: String,
        #[tabled(rename = "Resolution")]
        resolution: String,
        #[tabled(rename = "Position")]
        position: String,
        #[tabled(rename = "Orientation")]
        orientation: String,
        #[tabled(rename = "Images")]
        images: String,
    }

    let rows: Vec<MonitorRow> = topology
        .monitors()
        .iter()
        .enumerate()
        .map(|(index, m)| MonitorRow {
            index,
            name: m.name().to_string(),
            resolution: format!("{}x{}", m.width(), m.height()),
            position: format!("{}, {}", m.x(), m.y()),
            orientation: m.orientation().to_string(),
            images: output::format_image_count(m.queue().pool_len()),
        })
        .collect();

    let table = Table::new(rows)
        .with(Style::rounded())
        .with(Modify::new(Columns::first()).with(Alignment::right()))
        .with(Modify::new(Columns::new(2..4)).with(Alignment::right()))
        .with(Modify::new(Columns::new(5..6)).with(Alignment::right()))
        .to_string();

    let canvas = topology.canvas();
    println!("{}", format!("Monitors ({})", topology.monitors().len()).bold());
    println!("{table}");
    println!(
        "{} {}x{} at {}, {}",
        "Canvas:".bold(),
        canvas.width,
        canvas.height,
        canvas.origin_x,
        canvas.origin_y
    );
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;
    use crate::geometry::Rect;
    use crate::platform::StaticMonitors;

    #[test]
    fn test_cli_without_subcommand_runs() {
        let cli = Cli::try_parse_from(["splitwall"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_cli_parses_run_cycles() {
        let cli = Cli::try_parse_from(["splitwall", "run", "--cycles", "4"]).unwrap();
        match cli.command {
            Some(Commands::Run { cycles }) => assert_eq!(cycles, Some(4)),
            _ => panic!("Expected Run command"),
        }
    }

    #[test]
    fn test_cli_rejects_zero_cycles() {
        assert!(Cli::try_parse_from(["splitwall", "run", "--cycles", "0"]).is_err());
    }

    #[test]
    fn test_cli_parses_global_config() {
        let cli = Cli::try_parse_from(["splitwall", "monitors", "--config", "/tmp/splitwall.jsonc"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/splitwall.jsonc")));
        assert!(matches!(cli.command, Some(Commands::Monitors { json: false })));
    }

    #[test]
    fn test_cli_parses_monitors_json() {
        let cli = Cli::try_parse_from(["splitwall", "monitors", "--json"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Monitors { json: true })));
    }

    #[test]
    fn test_cli_parses_schema() {
        let cli = Cli::try_parse_from(["splitwall", "schema"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Schema)));
    }

    #[test]
    fn test_cli_parses_completions_zsh() {
        let cli = Cli::try_parse_from(["splitwall", "completions", "--shell", "zsh"]).unwrap();
        match cli.command {
            Some(Commands::Completions { shell }) => assert_eq!(shell, Shell::Zsh),
            _ => panic!("Expected Completions command"),
        }
    }

    #[test]
    fn test_cli_rejects_unknown_command() {
        assert!(Cli::try_parse_from(["splitwall", "bogus"]).is_err());
    }

    #[test]
    fn test_execute_with_missing_config_fails() {
        let cli = Cli::try_parse_from(["splitwall", "run", "--config", "/nonexistent/splitwall.jsonc"]).unwrap();
        assert!(matches!(cli.execute(), Err(SplitwallError::Config(_))));
    }

    #[test]
    fn test_cli_debug_assert() { Cli::command().debug_assert(); }

    #[test]
    fn test_topology_report_serializes_camel_case() {
        let temp_dir = TempDir::new().unwrap();
        let source = StaticMonitors::new([
            Rect::from_origin_size(-1080, 0, 1080, 1920),
            Rect::from_origin_size(0, 0, 1920, 1080),
        ]);
        let topology = discover(
            &source,
            &SplitwallConfig::default(),
            temp_dir.path(),
            &mut StdRng::seed_from_u64(0),
        )
        .unwrap();

        let value = serde_json::to_value(TopologyReport::from(&topology)).unwrap();
        assert_eq!(value["canvas"]["originX"], -1080);
        assert_eq!(value["canvas"]["width"], 3000);
        assert_eq!(value["monitors"][0]["orientation"], "portrait");
        assert_eq!(value["monitors"][1]["orientation"], "landscape");
        assert_eq!(value["monitors"][1]["images"], 0);
    }
}
