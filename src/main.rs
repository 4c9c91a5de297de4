use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};
use traitmap::cli::{Cli, Commands};
use traitmap::commands::{self, CatalogListConfig, ScoreConfig};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbosity);

    match cli.command {
        Commands::Score {
            responses,
            catalog,
            config,
            format,
            output,
            plain,
        } => commands::handle_score(ScoreConfig {
            responses,
            catalog,
            config,
            format,
            output,
            plain,
        }),
        Commands::Catalog {
            catalog,
            factor,
            format,
            plain,
        } => commands::list_catalog(CatalogListConfig {
            catalog,
            factor,
            format,
            plain,
        }),
        Commands::ValidateCatalog { path } => commands::validate_catalog_file(&path),
        Commands::Progress { snapshot, catalog } => commands::show_progress(&snapshot, catalog),
        Commands::Init { force } => commands::init_config(force),
    }
}

// RUST_LOG applies only when no -v flag is given
fn init_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
