//! Trade Journal - Main Entry Point
//!
//! Command line front end: `add` records a trade, `show` prints recent activity.

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use std::path::PathBuf;
use tracing::debug;
use trade_journal::*;

/// Personal trade journal
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Journal file (default: TRADE_JOURNAL_FILE or trade_journal.csv)
    #[arg(short, long, value_name = "FILE", global = true)]
    file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Record a new trade, then show recent activity
    Add(AddArgs),

    /// Show the most recent trades and the total count
    Show {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(clap::Args)]
struct AddArgs {
    /// Trade date, YYYY-MM-DD (default: today)
    #[arg(long)]
    date: Option<NaiveDate>,

    /// Market segment: NIFTY OPT, NIFTY FUT, STOCK OPT, STOCK FUT, MCX FUT
    #[arg(long, default_value = "NIFTY OPT")]
    segment: Segment,

    #[arg(long, default_value = "NIFTY")]
    instrument: String,

    /// CE, PE or FUT
    #[arg(long = "type", default_value = "CE")]
    option_type: OptionType,

    /// Expiry date, YYYY-MM-DD (default: today)
    #[arg(long)]
    expiry: Option<NaiveDate>,

    /// Strike price, 0 for futures
    #[arg(long, default_value = "0", allow_negative_numbers = true)]
    strike: Decimal,

    /// BUY or SELL
    #[arg(long, default_value = "BUY")]
    action: Action,

    /// Quantity (total shares/units)
    #[arg(long, default_value_t = 1)]
    qty: u32,

    #[arg(long, allow_negative_numbers = true)]
    price: Decimal,

    /// Reason for the trade
    #[arg(long, default_value = "")]
    notes: String,
}

impl AddArgs {
    fn into_record(self) -> TradeRecord {
        let today = Local::now().date_naive();
        TradeRecord {
            date: self.date.unwrap_or(today),
            segment: self.segment,
            instrument: self.instrument,
            option_type: self.option_type,
            expiry: self.expiry.unwrap_or(today),
            strike: self.strike,
            action: self.action,
            qty: self.qty,
            price: self.price,
            notes: self.notes,
        }
    }
}

fn main() -> Result<()> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    // Load configuration
    let config = CONFIG.clone();

    // Initialize logging
    utils::setup_output_directories(&config)?;
    let _logging_guard = utils::setup_logging(config.log_dir.as_deref())?;

    let store = match &cli.file {
        Some(path) => RecordStore::new(path),
        None => RecordStore::from_config(&config),
    };
    debug!(path = %store.path().display(), "Using trade journal");

    run(&store, cli.command)
}

fn run(store: &RecordStore, command: Commands) -> Result<()> {
    let table = store
        .load()
        .with_context(|| format!("loading {}", store.path().display()))?;

    match command {
        Commands::Add(args) => {
            let table = store.append(&table, args.into_record())?;
            println!("Trade saved!\n");
            print!("{}", utils::format_snapshot(&store.snapshot(&table)));
        }
        Commands::Show { json } => {
            let snapshot = store.snapshot(&table);
            if json {
                println!("{}", serde_json::to_string_pretty(&snapshot)?);
            } else {
                print!("{}", utils::format_snapshot(&snapshot));
            }
        }
    }

    Ok(())
}
