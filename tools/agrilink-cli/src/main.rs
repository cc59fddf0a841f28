//! Agrilink CLI - Browse the produce marketplace from the terminal.
//!
//! Commands:
//! - `agrilink browse` - Filter and sort the catalog
//! - `agrilink cart` - Build a cart and price it
//! - `agrilink farmers` - List farmers or show a profile
//! - `agrilink register` - Register as a buyer or farmer
//! - `agrilink dashboard` - Farmer and buyer overviews
//! - `agrilink config` - Manage configuration

mod commands;
mod config;
mod context;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, registry, EnvFilter};

use commands::{BrowseArgs, CartArgs, ConfigArgs, DashboardArgs, FarmersArgs, RegisterArgs};

/// Agrilink CLI - Fresh produce straight from the farm
#[derive(Parser)]
#[command(name = "agrilink")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search, filter and sort the catalog
    Browse(BrowseArgs),

    /// Fill a cart and show the order summary
    Cart(CartArgs),

    /// Browse farmer profiles
    Farmers(FarmersArgs),

    /// Register a buyer or farmer account
    Register(RegisterArgs),

    /// Show dashboard figures
    Dashboard(DashboardArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let output = output::Output::new(cli.verbose, cli.json);

    let config_path = cli.config.as_deref();
    let ctx = context::Context::load(config_path, output)?;

    let result = match cli.command {
        Commands::Browse(args) => commands::browse::run(args, &ctx),
        Commands::Cart(args) => commands::cart::run(args, &ctx),
        Commands::Farmers(args) => commands::farmers::run(args, &ctx),
        Commands::Register(args) => commands::register::run(args, &ctx),
        Commands::Dashboard(args) => commands::dashboard::run(args, &ctx),
        Commands::Config(args) => commands::config::run(args, &ctx),
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}

/// Library events go to stderr. `RUST_LOG` wins over `--verbose`.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = registry()
        .with(env_filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .try_init();
}
