use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use kosh_categorize::{
    CategorizationEngine, ExtractedDetails, KeywordRules, SmsExtractor, SmsPipeline,
};
use kosh_core::{default_categories, Category, SmsMessage, TransactionDirection};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "kosh", version, about = "Parse and categorize bank SMS alerts")]
struct Cli {
    /// TOML keyword table replacing the built-in rules
    #[arg(long, global = true)]
    rules: Option<PathBuf>,

    /// JSON array of candidate categories (defaults to the built-in set)
    #[arg(long, global = true)]
    categories: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Extract amount, merchant and direction from one SMS body
    Extract { body: String },

    /// Pick a category for one SMS body
    Categorize {
        body: String,

        /// Merchant name (extracted from the body when omitted)
        #[arg(long)]
        merchant: Option<String>,

        /// Amount (extracted from the body when omitted)
        #[arg(long)]
        amount: Option<f64>,

        /// debit, credit or transfer (inferred from the body when omitted)
        #[arg(long)]
        direction: Option<TransactionDirection>,
    },

    /// Run a JSON-lines file of {"sender", "body"} messages through the pipeline
    Scan { file: PathBuf },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let engine = build_engine(cli.rules.as_deref())?;
    let categories = load_categories(cli.categories.as_deref())?;

    match cli.command {
        Command::Extract { body } => {
            print_json(&SmsExtractor::extract_details(&body))?;
        }

        Command::Categorize {
            body,
            merchant,
            amount,
            direction,
        } => {
            let details = SmsExtractor::extract_details(&body);
            let result = engine.categorize(
                &body,
                merchant_for(merchant.as_deref(), &details),
                amount.unwrap_or(details.amount),
                direction.unwrap_or(details.direction),
                &categories,
            )?;
            print_json(&result)?;
        }

        Command::Scan { file } => {
            let messages = read_messages(&file)?;
            let pipeline = SmsPipeline::new(engine, categories)?;
            print_json(&pipeline.process_batch(&messages)?)?;
        }
    }

    Ok(())
}

/// Explicit merchant, else the extracted one. The unknown-merchant sentinel
/// is not a name and is passed on as empty.
fn merchant_for<'a>(explicit: Option<&'a str>, details: &'a ExtractedDetails) -> &'a str {
    match explicit {
        Some(m) => m,
        None if details.has_known_merchant() => &details.merchant,
        None => "",
    }
}

fn build_engine(rules: Option<&Path>) -> Result<CategorizationEngine> {
    let rules = match rules {
        Some(path) => KeywordRules::from_path(path)
            .with_context(|| format!("Failed to load rules from {}", path.display()))?,
        None => KeywordRules::builtin(),
    };
    Ok(CategorizationEngine::new(rules))
}

fn load_categories(path: Option<&Path>) -> Result<Vec<Category>> {
    let Some(path) = path else {
        return Ok(default_categories());
    };
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let categories: Vec<Category> = serde_json::from_str(&content)
        .with_context(|| format!("Invalid category list in {}", path.display()))?;
    if categories.is_empty() {
        bail!("{} contains no categories", path.display());
    }
    Ok(categories)
}

fn read_messages(path: &Path) -> Result<Vec<SmsMessage>> {
    let file =
        std::fs::File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
    parse_messages(BufReader::new(file))
        .with_context(|| format!("Failed to parse {}", path.display()))
}

/// One JSON object per line; blank lines are skipped.
fn parse_messages<R: BufRead>(reader: R) -> Result<Vec<SmsMessage>> {
    let mut messages = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let sms: SmsMessage =
            serde_json::from_str(&line).with_context(|| format!("line {}", idx + 1))?;
        messages.push(sms);
    }
    tracing::debug!("Read {} messages", messages.len());
    Ok(messages)
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
