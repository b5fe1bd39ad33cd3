//! schemer CLI: Command-line interface for the schemer color-scheme explorer

use clap::{Parser, Subcommand};
use schemer_engine::{
    random_hex, Config, CurlTransport, ModeCatalog, SchemeError, SchemeFetcher, SchemeResponse,
};
use std::path::PathBuf;

/// Explore color schemes from a base color
#[derive(Parser)]
#[command(name = "schemer")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to a JSON config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the TUI (default when no command specified)
    Tui {
        /// Base color to start from (random when omitted)
        #[arg(long)]
        hex: Option<String>,

        /// Mode query fragment to request first (e.g. mode=triad)
        #[arg(long)]
        mode: Option<String>,
    },

    /// Fetch one scheme and print its colors
    Fetch {
        /// Base color, with or without a leading '#'
        #[arg(long)]
        hex: String,

        /// Mode query fragment (defaults to the configured mode)
        #[arg(long)]
        mode: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the scheme modes the API offers
    Modes {
        /// Base color used for the discovery request (random when omitted)
        #[arg(long)]
        hex: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print a random color
    Random,
}

fn main() {
    let cli = Cli::parse();

    let config = match Config::load_or_default(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    match cli.command {
        None => run_tui(config, None, None),
        Some(Commands::Tui { hex, mode }) => run_tui(config, hex, mode),
        Some(Commands::Fetch { hex, mode, json }) => {
            cmd_fetch(&config, &hex, mode.as_deref(), json);
        }
        Some(Commands::Modes { hex, json }) => {
            cmd_modes(&config, hex.as_deref(), json);
        }
        Some(Commands::Random) => {
            println!("#{}", random_hex());
        }
    }
}

fn run_tui(mut config: Config, hex: Option<String>, mode: Option<String>) {
    if let Some(mode) = mode {
        config.default_mode = mode;
    }

    let rt = tokio::runtime::Runtime::new().expect("Failed to create tokio runtime");
    if let Err(e) = rt.block_on(schemer_tui::run_tui(config, hex)) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

/// Issue a single request with the curl transport.
fn fetch_once(config: &Config, hex: &str, mode: &str) -> Result<SchemeResponse, SchemeError> {
    let transport = CurlTransport::discover()?.timeout(config.timeout());
    let fetcher = SchemeFetcher::from_config(config, transport);

    let rt = tokio::runtime::Runtime::new().expect("Failed to create tokio runtime");
    rt.block_on(fetcher.fetch_scheme(hex, mode))
}

fn exit_with(e: &SchemeError) -> ! {
    eprintln!("Error: {e}");
    std::process::exit(if e.is_network() { 2 } else { 3 });
}

fn cmd_fetch(config: &Config, hex: &str, mode: Option<&str>, json: bool) {
    let mode = mode.unwrap_or(&config.default_mode);
    let response = fetch_once(config, hex, mode).unwrap_or_else(|e| exit_with(&e));

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&response).expect("failed to serialize")
        );
        return;
    }

    for color in &response.colors {
        println!("  {}  {}", color.hex, color.name);
    }
    println!("\n{} color(s)", response.colors.len());
}

fn cmd_modes(config: &Config, hex: Option<&str>, json: bool) {
    let hex = hex.map_or_else(random_hex, str::to_string);
    let response =
        fetch_once(config, &hex, &config.default_mode).unwrap_or_else(|e| exit_with(&e));

    let mut catalog = ModeCatalog::new();
    catalog.populate(&response.available_modes);

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(catalog.options()).expect("failed to serialize")
        );
        return;
    }

    println!("Available modes\n");
    for option in catalog.options() {
        println!("  {:<22} {}", option.label, option.value);
    }
    println!("\n{} mode(s)", catalog.len());
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_command_opens_tui() {
        let cli = Cli::try_parse_from(["schemer"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_fetch_arguments() {
        let cli = Cli::try_parse_from([
            "schemer", "fetch", "--hex", "#0047AB", "--mode", "mode=triad", "--json",
        ])
        .unwrap();

        match cli.command {
            Some(Commands::Fetch { hex, mode, json }) => {
                assert_eq!(hex, "#0047AB");
                assert_eq!(mode.as_deref(), Some("mode=triad"));
                assert!(json);
            }
            _ => panic!("expected fetch"),
        }
    }

    #[test]
    fn test_config_is_global() {
        let cli = Cli::try_parse_from(["schemer", "modes", "--config", "schemer.json"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("schemer.json")));
        assert!(matches!(
            cli.command,
            Some(Commands::Modes { hex: None, json: false })
        ));
    }

    #[test]
    fn test_fetch_requires_hex() {
        assert!(Cli::try_parse_from(["schemer", "fetch"]).is_err());
    }
}
