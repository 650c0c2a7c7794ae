//! CLI entry point for the `tgraph` command-line tool.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use town_graph::cli::commands;
use town_graph::{Config, GraphError, GraphResult, OutputFormat};

#[derive(Parser)]
#[command(
    name = "tgraph",
    about = "Town graph CLI — shortest routes over a road map"
)]
struct Cli {
    /// Output format: "text" or "json" (default from config, else text)
    #[arg(long)]
    format: Option<String>,

    /// Distance unit printed after each leg (default from config, else "mi")
    #[arg(long)]
    unit: Option<String>,

    /// Path to a TOML config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Find the shortest route between two towns
    Route {
        /// Path to the map file
        file: PathBuf,
        /// Starting town
        from: String,
        /// Destination town
        to: String,
    },
    /// List all towns in the map
    Towns {
        /// Path to the map file
        file: PathBuf,
    },
    /// List roads, optionally only those touching one town
    Roads {
        /// Path to the map file
        file: PathBuf,
        /// Only roads touching this town
        #[arg(long)]
        town: Option<String>,
    },
    /// Display counts for a map file
    Info {
        /// Path to the map file
        file: PathBuf,
    },
    /// Export the map as JSON
    Export {
        /// Path to the map file
        file: PathBuf,
        /// Pretty-print JSON
        #[arg(long)]
        pretty: bool,
    },
    /// Print the effective configuration
    Config,
}

fn resolve_config(cli: &Cli) -> GraphResult<Config> {
    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(name) = &cli.format {
        config.format = OutputFormat::from_name(name)
            .ok_or_else(|| GraphError::Config(format!("invalid format: {}", name)))?;
    }
    if let Some(unit) = &cli.unit {
        config.distance_unit = unit.clone();
    }
    if cli.verbose {
        config.log_level = "debug".to_string();
    }
    config.validate()?;
    Ok(config)
}

fn run(cli: Cli, config: &Config) -> GraphResult<()> {
    let json = config.format == OutputFormat::Json;
    match cli.command {
        Commands::Route { file, from, to } => {
            commands::cmd_route(&file, &from, &to, &config.distance_unit, json)
        }
        Commands::Towns { file } => commands::cmd_towns(&file, json),
        Commands::Roads { file, town } => commands::cmd_roads(&file, town.as_deref(), json),
        Commands::Info { file } => commands::cmd_info(&file, json),
        Commands::Export { file, pretty } => commands::cmd_export(&file, pretty),
        Commands::Config => commands::cmd_config(config),
    }
}

fn main() {
    let cli = Cli::parse();

    let config = match resolve_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(e.exit_code());
        }
    };

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.log_level.as_str()),
    )
    .init();
    log::debug!("effective config: {:?}", config);

    if let Err(e) = run(cli, &config) {
        eprintln!("Error: {}", e);
        process::exit(e.exit_code());
    }
}
