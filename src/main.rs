//! fiximports main entry point
//!
//! 1. Parse the command line.
//! 2. Read the rules file.
//! 3. Open the ledger session.
//! 4. Run the fixing pass over the account to fix.
//! 5. Log the stats and save the session (unless --no-change).

use anyhow::Context;
use clap::Parser;
use regex::Regex;
use std::path::PathBuf;

use fiximports_core::{fix_account, resolve_account, FixOptions};
use fiximports_ledger::Session;
use fiximports_rules::load_rules;

#[derive(Parser, Debug)]
#[command(name = "fiximports")]
#[command(version)]
#[command(about = "Recategorize imbalance splits in a ledger file using pattern rules", long_about = None)]
struct Args {
    /// Imbalance account name pattern
    #[arg(short, long, default_value = "Imbalance-[A-Z]{3}")]
    imbalance_ac: String,

    /// Use memo field instead of description field to match rules
    #[arg(short = 'm', long)]
    use_memo: bool,

    /// Verbose (debug) logging
    #[arg(short, long)]
    verbose: bool,

    /// Suppress normal output (except warnings and errors)
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Do not modify the ledger file
    #[arg(short = 'n', long)]
    no_change: bool,

    /// Full path of the account to fix, e.g. Liabilities:CreditCard
    account: String,

    /// Rules file. See the docs for the format
    rules_file: PathBuf,

    /// Ledger file to modify
    ledger_file: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let level = if args.verbose {
        log::LevelFilter::Debug
    } else if args.quiet {
        log::LevelFilter::Warn
    } else {
        log::LevelFilter::Info
    };
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();

    let rules = load_rules(&args.rules_file)
        .with_context(|| format!("Failed to load rules from {}", args.rules_file.display()))?;
    log::debug!("Loaded {} rules", rules.len());

    let options = FixOptions {
        imbalance_pattern: Regex::new(&args.imbalance_ac)
            .context("Invalid imbalance account pattern")?,
        use_memo: args.use_memo,
    };

    let mut session = Session::open(&args.ledger_file, args.no_change)
        .with_context(|| format!("Failed to open ledger {}", args.ledger_file.display()))?;

    let origin = resolve_account(session.book(), &args.account)?;

    let stats = fix_account(session.book_mut(), origin, &rules, &options);

    if !args.no_change {
        session.save().context("Failed to save ledger")?;
    }
    session.end().context("Failed to close ledger session")?;

    log::info!("{}", stats);
    Ok(())
}
