//! Binary entrypoint for the questboard CLI.
//!
//! Commands:
//! - `init` - create a starter `config.toml`
//! - `table` - aggregate all profiles over all quests and print the status table as JSON
//! - `render --quest <id>` - render the status block for one quest; with
//!   `--merge`, read host text from stdin and print it with the block injected
//!
//! Every invocation re-reads the catalog and re-scans the profile directory;
//! there is no cached state between runs.

use std::io::Read;

use anyhow::Result;
use clap::{Parser, Subcommand};
use log::info;

use questboard::aggregate::aggregate;
use questboard::config::Config;
use questboard::loader::{load_catalog_from_json, scan_profiles};
use questboard::prereq::PrerequisiteIndex;
use questboard::render::StatusRenderer;

#[derive(Parser)]
#[command(name = "questboard")]
#[command(about = "Party quest-status aggregation for co-op game profiles")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file path (can be used before or after subcommand)
    #[arg(short, long, default_value = "config.toml", global = true)]
    config: String,

    /// Verbose logging (-v, -vv for more; may appear before or after subcommand)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a starter configuration file
    Init,
    /// Print the full status table (all profiles, all quests) as JSON
    Table,
    /// Render the status block for a single quest
    Render {
        /// Quest id to render the block for
        #[arg(short, long)]
        quest: String,

        /// Read host text from stdin and print it with the block merged in
        #[arg(short, long)]
        merge: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match cli.command {
        Commands::Init => None,
        _ => Some(Config::load(&cli.config).await?),
    };
    init_logging(&config, cli.verbose);

    match cli.command {
        Commands::Init => {
            Config::create_default(&cli.config).await?;
            info!("Wrote starter configuration to {}", cli.config);
            println!("Created {}. Point catalog.path and profiles.dir at your data.", cli.config);
        }
        Commands::Table => {
            let config = config.unwrap_or_default();
            let table = build_table(&config)?;
            println!("{}", serde_json::to_string_pretty(&table)?);
        }
        Commands::Render { quest, merge } => {
            let config = config.unwrap_or_default();
            let table = build_table(&config)?;
            let renderer = StatusRenderer::new(config.display.enabled);
            let display = config.display.clone();
            let visible = move |name: &str| display.is_visible(name);

            if merge {
                let mut host = String::new();
                std::io::stdin().read_to_string(&mut host)?;
                println!("{}", renderer.merge(&host, &quest, &table, visible));
            } else {
                println!("{}", renderer.render_block(&quest, &table, visible));
            }
        }
    }

    Ok(())
}

/// Fresh catalog load + profile scan + aggregation for one invocation.
fn build_table(config: &Config) -> Result<questboard::aggregate::StatusTable> {
    let catalog = load_catalog_from_json(&config.catalog.path)?;
    let index = PrerequisiteIndex::build(&catalog);
    let profiles = scan_profiles(&config.profiles.dir)?;
    info!(
        "aggregating {} profile(s) over {} quest(s)",
        profiles.len(),
        catalog.len()
    );
    Ok(aggregate(&profiles, &catalog, &index))
}

fn init_logging(config: &Option<Config>, verbosity: u8) {
    use std::io::Write;
    let mut builder = env_logger::Builder::new();
    // Base level from CLI verbosity overrides config
    let base_level = match verbosity {
        0 => config
            .as_ref()
            .and_then(|c| c.logging.level.parse().ok())
            .unwrap_or(log::LevelFilter::Info),
        1 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    builder.filter_level(base_level);
    builder.format(|fmt, record| {
        writeln!(
            fmt,
            "{} [{}] {}",
            chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ"),
            record.level(),
            record.args()
        )
    });
    let _ = builder.try_init();
}
