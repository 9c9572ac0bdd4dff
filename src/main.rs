use anyhow::Result;
use clap::{Parser, Subcommand};

use salesdash::cli::{handle_export_command, handle_summary_command, ExportArgs, SummaryArgs};
use salesdash::config::{DashboardPaths, Settings};
use salesdash::logging::{self, LogTarget};
use salesdash::models::SalesCollection;
use salesdash::services::SalesGenerator;

#[derive(Parser)]
#[command(
    name = "salesdash",
    version,
    about = "Terminal sales analytics dashboard",
    long_about = "salesdash generates seasonal monthly sales data for the last few \
                  years and shows it as an interactive dashboard: totals with \
                  year-over-year growth, bar/line/pie charts with a sales threshold, \
                  and a year comparison."
)]
struct Cli {
    /// Seed for data generation (random when neither this nor the config sets one)
    #[arg(long, global = true, env = "SALESDASH_SEED")]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive dashboard (default)
    #[command(alias = "ui")]
    Tui,

    /// Print the dashboard as text
    Summary(SummaryArgs),

    /// Export the generated data set
    Export(ExportArgs),

    /// Write a default configuration file
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Tui);

    let paths = DashboardPaths::new()?;
    let target = match command {
        Commands::Tui => LogTarget::File,
        _ => LogTarget::Stderr,
    };
    logging::init(&paths, target)?;

    let settings = Settings::load_or_create(&paths)?;

    match command {
        Commands::Tui => {
            let (collection, seed) = generate(cli.seed, &settings)?;
            salesdash::tui::run_tui(&collection, &settings, Some(seed))?;
        }
        Commands::Summary(args) => {
            let (collection, _) = generate(cli.seed, &settings)?;
            handle_summary_command(&collection, &settings, args)?;
        }
        Commands::Export(args) => {
            let (collection, seed) = generate(cli.seed, &settings)?;
            handle_export_command(&collection, Some(seed), args)?;
        }
        Commands::Init => {
            if paths.is_initialized() {
                println!(
                    "Configuration already exists at: {}",
                    paths.settings_file().display()
                );
            } else {
                settings.save(&paths)?;
                println!("Created configuration at: {}", paths.settings_file().display());
                println!();
                println!("Edit it to fix a seed, change the years or the currency symbol.");
            }
        }
        Commands::Config => {
            println!("salesdash Configuration");
            println!("=======================");
            println!("Config directory: {}", paths.base_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!("Log file:         {}", paths.log_file().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            match settings.seed {
                Some(seed) => println!("  Seed:            {}", seed),
                None => println!("  Seed:            random"),
            }
            println!("  Latest year:     {}", settings.resolved_latest_year());
            println!("  Base amounts:    {:?}", settings.base_amounts);
            println!("  Chart type:      {}", settings.default_chart_type);
            println!("  Threshold:       {}", settings.default_threshold);
        }
    }

    Ok(())
}

/// Resolve the seed and generate the data set
fn generate(cli_seed: Option<u64>, settings: &Settings) -> Result<(SalesCollection, u64)> {
    let seed = cli_seed
        .or(settings.seed)
        .unwrap_or_else(rand::random::<u64>);
    log::info!("generating data with seed {}", seed);

    let collection = SalesGenerator::seeded(seed).generate_collection(&settings.year_plan())?;
    Ok((collection, seed))
}
