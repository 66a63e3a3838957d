mod dashboard;
mod render;

use clap::{Parser, Subcommand};
use dashboard::{Dashboard, DashboardOptions};
use fitlog_core::*;
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "fitlog")]
#[command(about = "Personal fitness activity and health metric tracker", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Read configuration from this file instead of the default location
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the interactive dashboard (default)
    Dashboard {
        /// Start with an empty log instead of the sample data
        #[arg(long)]
        no_sample_data: bool,

        /// Also write chart data as CSV into this directory
        #[arg(long)]
        chart_dir: Option<PathBuf>,
    },

    /// Show the calorie rates applied to newly logged activities
    Rates,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    fitlog_core::logging::init_with_level(if cli.verbose { "debug" } else { "warn" });

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    match cli.command {
        Some(Commands::Dashboard {
            no_sample_data,
            chart_dir,
        }) => cmd_dashboard(&config, no_sample_data, chart_dir),
        Some(Commands::Rates) => cmd_rates(&config),
        None => {
            // Default to the dashboard
            cmd_dashboard(&config, false, None)
        }
    }
}

fn cmd_dashboard(config: &Config, no_sample_data: bool, chart_dir: Option<PathBuf>) -> Result<()> {
    let mut log = ActivityLog::with_rates(config.calories.clone());

    let options = DashboardOptions {
        tracked_metric: config.dashboard.tracked_metric.clone(),
        chart_width: config.dashboard.chart_width,
        export_dir: chart_dir.or_else(|| config.charts.export_dir.clone()),
    };

    println!("Welcome to the Personal Fitness Tracker Dashboard!");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut dashboard = Dashboard::new(&mut log, stdin.lock(), stdout.lock(), options);
    if config.dashboard.sample_data && !no_sample_data {
        dashboard.seed_sample_data()?;
    }

    dashboard.run()
}

fn cmd_rates(config: &Config) -> Result<()> {
    let rates = &config.calories;
    let width = rates
        .rates
        .keys()
        .map(|name| name.chars().count())
        .max()
        .unwrap_or(0)
        .max("(any other)".len());

    println!("Calorie rates (calories per minute):");
    for (activity_type, rate) in &rates.rates {
        println!("  {:<width$}  {:>6.1}", activity_type, rate);
    }
    println!("  {:<width$}  {:>6.1}", "(any other)", rates.default_rate);

    Ok(())
}
