//! Point d'entrée CLI pour parcel-area

use anyhow::Result;
use clap::Parser;
use tracing::{debug, Level};
use tracing_subscriber::{fmt, EnvFilter};

use parcel_area::config::Settings;

// Charger .env au démarrage
fn load_env() {
    // Chercher .env dans le répertoire courant ou parent
    if dotenvy::dotenv().is_err() {
        // Essayer depuis le répertoire du binaire
        if let Ok(exe) = std::env::current_exe() {
            if let Some(dir) = exe.parent() {
                let _ = dotenvy::from_path(dir.join(".env"));
            }
        }
    }
}

mod cli;

use cli::{Commands, ComputeArgs};

/// Surface d'une parcelle à quatre sommets saisis en DMS
#[derive(Parser)]
#[command(name = "parcel-area")]
#[command(author, version)]
#[command(about = "Compute the area of a four-corner land parcel from DMS coordinates")]
#[command(long_about = "Projects four WGS84 corners (degrees-minutes-seconds) into the UTM zone of their mean longitude and computes the enclosed area in m², km², feddan and qirat.\n\nBy default, prints the area report. Use 'to-kml' or 'to-geojson' to export the outline.")]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    /// Augmenter la verbosité (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Mode silencieux
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Sous-commande (défaut: calcul de surface)
    #[command(subcommand)]
    command: Option<Commands>,

    /// Arguments du calcul (commande par défaut)
    #[command(flatten)]
    compute: ComputeArgs,
}

fn main() -> Result<()> {
    // Charger .env avant tout
    load_env();

    let cli = Cli::parse();

    // Configurer le logging
    init_logging(cli.verbose, cli.quiet);

    let settings = Settings::from_env();
    debug!(backend = %settings.backend, "Settings loaded");

    match cli.command {
        Some(Commands::ToKml { parcel, output }) => {
            cli::cmd_to_kml(&parcel, &output, &settings)?;
        }
        Some(Commands::ToGeojson {
            parcel,
            output,
            projected,
        }) => {
            cli::cmd_to_geojson(&parcel, &output, projected, &settings)?;
        }
        None => {
            cli::cmd_compute(&cli.compute, &settings)?;
        }
    }

    Ok(())
}

fn init_logging(verbose: u8, quiet: bool) {
    let level = match (quiet, verbose) {
        (true, _) => Level::WARN,
        (_, 0) => Level::INFO,
        (_, 1) => Level::DEBUG,
        (_, _) => Level::TRACE,
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .init();
}
