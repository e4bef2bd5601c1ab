mod commands;

use bizloc_core::{AppConfig, ConfigError, Coordinates};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "bizloc-cli")]
#[command(about = "Look up your location and search for businesses from the terminal")]
struct Cli {
    /// Emit raw provider payloads instead of typed records.
    #[arg(long, global = true)]
    raw: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Look up this machine's approximate location via ipstack.
    Locate,
    /// Autocomplete a business name near a point.
    Search {
        text: String,
        /// Bias latitude. Defaults to the ipstack location when both are omitted.
        #[arg(long, requires = "lng", allow_hyphen_values = true)]
        lat: Option<f64>,
        /// Bias longitude.
        #[arg(long, requires = "lat", allow_hyphen_values = true)]
        lng: Option<f64>,
    },
    /// Fetch details for one place.
    Details { place_id: String },
    /// Build a business record from one place.
    Business { place_id: String },
    /// Print the blank business record.
    Template,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let output = run(cli, bizloc_core::load_app_config_from_env).await?;
    println!("{output}");
    Ok(())
}

/// Dispatches one command. `template` needs no provider, so configuration is
/// only loaded for the commands that talk to ipstack or Google.
async fn run<F>(cli: Cli, load_config: F) -> anyhow::Result<String>
where
    F: FnOnce() -> Result<AppConfig, ConfigError>,
{
    if let Commands::Template = cli.command {
        return commands::template();
    }

    let config = load_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))?;

    let ctx = commands::Context::from_config(&config, cli.raw)?;
    match cli.command {
        Commands::Locate => ctx.locate().await,
        Commands::Search { text, lat, lng } => {
            let bias = lat.zip(lng).map(|(lat, lng)| Coordinates { lat, lng });
            ctx.search(&text, bias).await
        }
        Commands::Details { place_id } => ctx.details(&place_id).await,
        Commands::Business { place_id } => ctx.business(&place_id).await,
        Commands::Template => commands::template(),
    }
}
