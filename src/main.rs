use anyhow::Result;
use clap::{Parser, Subcommand};

use mpesa_dashboard::cli::{handle_export_command, handle_show_command, ExportArgs, ShowArgs};
use mpesa_dashboard::config::{paths::DashboardPaths, settings::Settings};
use mpesa_dashboard::data;
use mpesa_dashboard::logging::{self, LogTarget};
use mpesa_dashboard::tui::run_tui;

#[derive(Parser)]
#[command(
    name = "mpesa-dash",
    author = "Kaylee Beyene",
    version,
    about = "Terminal dashboard of M-Pesa performance, FY2021-FY2025",
    long_about = "mpesa-dash presents Safaricom M-Pesa metrics for fiscal years \
                  2021 to 2025 across three views: Executive Summary, Usage & \
                  Velocity, and the Merchant Ecosystem. Run without a command to \
                  open the interactive dashboard."
)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive TUI
    #[command(alias = "ui")]
    Tui,

    /// Print one or all views as text
    Show(ShowArgs),

    /// Export the dashboard tables
    Export(ExportArgs),

    /// Show current configuration and paths
    Config {
        /// Write the settings file with the current values
        #[arg(long)]
        init: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = DashboardPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    let filter = logging::build_filter(&settings, cli.verbose);

    match cli.command.unwrap_or(Commands::Tui) {
        Commands::Tui => {
            // The alternate screen owns the terminal, so logs go to a file
            paths.ensure_directories()?;
            logging::init(&LogTarget::File(paths.log_file()), filter)?;
            run_tui(&settings)?;
        }
        Commands::Show(args) => {
            logging::init(&LogTarget::Stderr, filter)?;
            handle_show_command(data::load(), args)?;
        }
        Commands::Export(args) => {
            logging::init(&LogTarget::Stderr, filter)?;
            handle_export_command(data::load(), args)?;
        }
        Commands::Config { init } => {
            logging::init(&LogTarget::Stderr, filter)?;
            if init {
                settings.save(&paths)?;
                tracing::info!(path = %paths.settings_file().display(), "Wrote settings");
            }

            println!("M-Pesa Dashboard Configuration");
            println!("==============================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!("Log file:       {}", paths.log_file().display());
            println!();
            println!("Settings:");
            println!("  Tick rate:     {} ms", settings.tick_rate_ms);
            println!("  Log filter:    {}", settings.log_filter);
            println!("  Sidebar width: {}", settings.sidebar_width);
        }
    }

    Ok(())
}
