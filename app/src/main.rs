//! FILENAME: app/src/main.rs
// PURPOSE: Command-line entry point for the supermarket dashboard backend.
// FORMAT: log lines are seq|level|category|message

use std::path::PathBuf;
use std::process::ExitCode;

use app_lib::{
    init_logging, log_error, log_info, Dashboard, DashboardConfig, DashboardError,
    FilterSelection, Report,
};
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use engine::{Category, CustomerType, PaymentMethod};
use generator::generate_to_file;

#[derive(Parser)]
#[command(name = "supermarket")]
#[command(version)]
#[command(about = "Supermarket purchase analysis", long_about = None)]
struct Cli {
    /// JSON settings file
    #[arg(long, global = true, env = "SUPERMARKET_CONFIG", default_value = "dashboard.json")]
    config: PathBuf,

    /// Workbook holding the dataset (overrides the settings file)
    #[arg(long, global = true)]
    data: Option<PathBuf>,

    /// off, error, warn, info, debug or trace (overrides the settings file)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate the synthetic dataset and print its summary
    Generate {
        /// Number of purchases to generate
        #[arg(short = 'n', long)]
        count: Option<usize>,

        /// Seed for a reproducible dataset
        #[arg(long)]
        seed: Option<u64>,

        /// Overwrite an existing workbook
        #[arg(long, default_value_t = false)]
        force: bool,
    },

    /// Print metrics and breakdowns for the filtered dataset
    Report {
        #[command(flatten)]
        filters: FilterArgs,
    },

    /// Write the filtered dataset as CSV
    Export {
        #[command(flatten)]
        filters: FilterArgs,

        /// Destination file (default: the configured export file name)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Omitted lists select every value present in the dataset; omitted dates
/// select its full range.
#[derive(Args, Debug, Default)]
struct FilterArgs {
    /// Category label, e.g. "Dairy & Eggs" (repeatable)
    #[arg(long = "category")]
    categories: Vec<Category>,

    /// Payment method label, e.g. "Credit Card" (repeatable)
    #[arg(long = "payment")]
    payment_methods: Vec<PaymentMethod>,

    /// Customer type label, e.g. "Member" (repeatable)
    #[arg(long = "customer")]
    customer_types: Vec<CustomerType>,

    /// First day included (YYYY-MM-DD)
    #[arg(long)]
    from: Option<NaiveDate>,

    /// Last day included (YYYY-MM-DD)
    #[arg(long)]
    to: Option<NaiveDate>,
}

impl FilterArgs {
    fn into_selection(self) -> FilterSelection {
        FilterSelection {
            categories: self.categories,
            payment_methods: self.payment_methods,
            customer_types: self.customer_types,
            start_date: self.from,
            end_date: self.to,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut config = match DashboardConfig::load(&cli.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };
    if let Some(data) = cli.data {
        config.data_path = data;
    }
    if let Some(level) = cli.log_level {
        config.log_level = level;
    }

    let level = match config.log_level_filter() {
        Ok(level) => level,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };
    if let Err(e) = init_logging(config.log_path.as_deref(), level) {
        eprintln!("{}", e);
        return ExitCode::FAILURE;
    }

    match run(cli.command, config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log_error!("APP", "{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(command: Command, mut config: DashboardConfig) -> Result<(), DashboardError> {
    match command {
        Command::Generate { count, seed, force } => {
            if let Some(count) = count {
                config.record_count = count;
            }
            if seed.is_some() {
                config.seed = seed;
            }
            if config.data_path.exists() && !force {
                log_info!(
                    "APP",
                    "{} already exists; pass --force to regenerate",
                    config.data_path.display()
                );
                return Ok(());
            }

            let summary = generate_to_file(
                &config.generator_config(),
                &config.data_path,
                &config.sheet_name,
            )
            .map_err(DashboardError::Write)?;
            println!("Dataset saved to {}", config.data_path.display());
            println!("{}", summary);
        }

        Command::Report { filters } => {
            let mut dashboard = Dashboard::new(&config);
            let criteria = dashboard.resolve(&filters.into_selection())?;
            let snapshot = dashboard.refresh(&criteria)?;
            print!("{}", Report(&snapshot));
        }

        Command::Export { filters, output } => {
            let mut dashboard = Dashboard::new(&config);
            let criteria = dashboard.resolve(&filters.into_selection())?;
            let path = dashboard.export_csv(&criteria, output.as_deref())?;
            println!("Filtered data written to {}", path.display());
        }
    }
    Ok(())
}
