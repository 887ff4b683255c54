use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

use budget_buddy::cli::{
    handle_expense_command, handle_export_command, handle_goal_command, handle_report_command,
};
use budget_buddy::config::paths::DATA_DIR_ENV;
use budget_buddy::config::{BuddyPaths, Settings};
use budget_buddy::storage::open_ledger;

#[derive(Parser)]
#[command(
    name = "budgetbuddy",
    version,
    about = "Track expenses against a budget goal",
    long_about = "BudgetBuddy records your expenses and a spending goal, and shows \
                  how much you have spent, how much is left, and where it went."
)]
struct Cli {
    /// Base directory for settings and ledger data
    #[arg(long, global = true, env = DATA_DIR_ENV)]
    data_dir: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace). RUST_LOG takes precedence.
    #[arg(long, global = true, default_value = "warn")]
    log_level: LevelFilter,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Expense management commands
    #[command(subcommand, alias = "exp")]
    Expense(budget_buddy::cli::ExpenseCommands),

    /// Budget goal commands
    #[command(subcommand)]
    Goal(budget_buddy::cli::GoalCommands),

    /// Summary and chart reports
    #[command(subcommand)]
    Report(budget_buddy::cli::ReportCommands),

    /// Export data to CSV or JSON
    #[command(subcommand)]
    Export(budget_buddy::cli::ExportCommands),

    /// Show current configuration and paths
    Config,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logger(cli.log_level);
    debug!("Log level set to {}", cli.log_level);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            debug!("Exiting with error: {e:?}");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let paths = match cli.data_dir {
        Some(dir) => BuddyPaths::with_base_dir(dir),
        None => BuddyPaths::new()?,
    };
    debug!("Using base directory {}", paths.base_dir().display());

    let settings = Settings::load_or_create(&paths)?;
    settings.validate()?;

    match cli.command {
        Some(Commands::Expense(cmd)) => {
            let mut ledger = open_ledger(&paths)?;
            handle_expense_command(&mut ledger, &settings, cmd)?;
        }
        Some(Commands::Goal(cmd)) => {
            let mut ledger = open_ledger(&paths)?;
            handle_goal_command(&mut ledger, &settings, cmd)?;
        }
        Some(Commands::Report(cmd)) => {
            let ledger = open_ledger(&paths)?;
            handle_report_command(&ledger, &settings, cmd)?;
        }
        Some(Commands::Export(cmd)) => {
            let ledger = open_ledger(&paths)?;
            handle_export_command(&ledger, cmd)?;
        }
        Some(Commands::Config) => {
            println!("BudgetBuddy Configuration");
            println!("=========================");
            println!("Base directory:   {}", paths.base_dir().display());
            println!("Data directory:   {}", paths.data_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol:     {}", settings.currency_symbol);
            println!("  Chart window (days): {}", settings.chart_window_days);
            println!("  Default goal period: {}", settings.default_goal_period);
            println!("  Date format:         {}", settings.date_format);
        }
        None => {
            println!("BudgetBuddy - expense tracking against a budget goal");
            println!();
            println!("Run 'budgetbuddy --help' for usage information.");
        }
    }

    Ok(())
}

/// Log to stderr, honouring RUST_LOG when it is set
fn init_logger(level: LevelFilter) {
    let filter = match std::env::var("RUST_LOG").ok() {
        Some(_) => EnvFilter::from_default_env(),
        None => EnvFilter::new(format!(
            "budget_buddy={level},{}={level}",
            env!("CARGO_BIN_NAME")
        )),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
