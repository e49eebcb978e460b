// Group Order - command-line entry point

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use group_order::commands::{self, messages::MessagesRequest};
use group_order::storage::{ConfigService, SessionStore};
use group_order::{AppError, SettingsUpdate, StatsMode};

#[derive(Parser)]
#[command(name = "group-order")]
#[command(about = "Group-buy order sheet, order message, and order counter tools", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Session file holding the order table (default: ~/.group-order/session.json)
    #[arg(long, global = true)]
    session: Option<PathBuf>,

    /// Config file (default: ~/.group-order/config.json)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the buyer × item order table
    Sheet {
        #[command(subcommand)]
        action: SheetAction,
    },
    /// Render per-buyer order messages
    Messages {
        /// Order sheet (xlsx/xls/ods or tab-separated); defaults to the session table
        #[arg(long)]
        sheet: Option<PathBuf>,
        /// Only list buyers whose name contains this text
        #[arg(long)]
        search: Option<String>,
        /// List buyers who ordered this item first
        #[arg(long)]
        sort_by: Option<String>,
        /// Print one buyer's message
        #[arg(long)]
        buyer: Option<String>,
        /// Write every message to this file
        #[arg(long)]
        export: Option<PathBuf>,
        /// Date shown in the message title (default: today)
        #[arg(long)]
        date: Option<String>,
    },
    /// Count product codes or the grand total in comment text
    Count {
        /// product or total (default from config)
        #[arg(short, long)]
        mode: Option<StatsMode>,
        /// Comment text file (default: stdin)
        #[arg(short, long)]
        input: Option<PathBuf>,
    },
    /// Show or change settings
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum SheetAction {
    /// Parse comments for one item and merge them into the table
    Add {
        /// Item name
        #[arg(short, long)]
        item: String,
        /// Comment text file (default: stdin)
        #[arg(short = 'f', long)]
        input: Option<PathBuf>,
    },
    /// Set or clear an item's unit price
    Price {
        item: String,
        /// Leave out to clear the price
        price: Option<f64>,
    },
    /// Print the table
    Show,
    /// Write the table as tab-separated text
    Export {
        #[arg(short, long)]
        out: PathBuf,
    },
    /// Remove every buyer and item
    Clear,
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the current settings
    Show,
    /// Restore default settings
    Reset,
    /// Change one or more settings
    Set {
        #[arg(long)]
        date_format: Option<String>,
        #[arg(long)]
        stats_mode: Option<StatsMode>,
        #[arg(long)]
        title: Option<String>,
        /// Repeat for several lines
        #[arg(long)]
        notice: Vec<String>,
        #[arg(long)]
        footer: Option<String>,
        #[arg(long)]
        no_price: Option<String>,
        #[arg(long)]
        show_total: Option<bool>,
    },
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read stdin")?;
            Ok(text)
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let store = match cli.session {
        Some(path) => SessionStore::new(path),
        None => SessionStore::default_location()?,
    };
    let mut config = match cli.config {
        Some(path) => ConfigService::open(path)?,
        None => ConfigService::new()?,
    };

    let result = match cli.command {
        Commands::Sheet { action } => match action {
            SheetAction::Add { item, input } => {
                let text = read_input(input.as_deref())?;
                commands::sheet::add_item(&store, &item, &text)
            }
            SheetAction::Price { item, price } => commands::sheet::set_price(&store, &item, price),
            SheetAction::Show => commands::sheet::show(&store),
            SheetAction::Export { out } => commands::sheet::export(&store, &out),
            SheetAction::Clear => commands::sheet::clear(&store),
        },
        Commands::Messages {
            sheet,
            search,
            sort_by,
            buyer,
            export,
            date,
        } => {
            let request = MessagesRequest {
                sheet,
                search,
                sort_by,
                buyer,
                export,
                date,
            };
            commands::messages::run(&store, config.get_config(), &request)
        }
        Commands::Count { mode, input } => {
            let text = read_input(input.as_deref())?;
            let mode = mode.unwrap_or(config.get_config().default_stats_mode);
            Ok(commands::count::run(&text, mode))
        }
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::settings::show(&config),
            ConfigAction::Reset => commands::settings::reset(&mut config),
            ConfigAction::Set {
                date_format,
                stats_mode,
                title,
                notice,
                footer,
                no_price,
                show_total,
            } => {
                let update = SettingsUpdate {
                    date_format,
                    default_stats_mode: stats_mode,
                    title,
                    notice_lines: (!notice.is_empty()).then_some(notice),
                    footer,
                    no_price,
                    show_total,
                };
                commands::settings::update(&mut config, update)
            }
        },
    };

    match result {
        Ok(output) => {
            println!("{}", output);
            Ok(())
        }
        Err(AppError::Core(err)) if err.is_recoverable() => {
            eprintln!("{}", err);
            std::process::exit(2);
        }
        Err(err) => Err(err.into()),
    }
}
