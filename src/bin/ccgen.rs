//! `ccgen`: command-line host for test-card-gen.

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing::{debug, info};

use test_card_gen::fields::{MONTH_OPTIONS, YEAR_OPTIONS};
use test_card_gen::networks::{all_prefixes, Network};
use test_card_gen::{
    luhn, sanitize_cvv, CardGenerator, GenerationConfig, MonthChoice, NetworkChoice, OutputFormat,
    YearChoice, QUANTITY_OPTIONS,
};

#[derive(Parser)]
#[command(name = "ccgen")]
#[command(about = "Generate synthetic, Luhn-valid card numbers for testing", long_about = None)]
struct Cli {
    /// Log at debug level (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a batch of card records, one per line
    Generate(GenerateArgs),
    /// Check card numbers against the Luhn checksum
    Check {
        /// Numbers to check
        #[arg(required = true)]
        numbers: Vec<String>,
    },
    /// List networks and their prefixes
    Networks,
}

#[derive(Args)]
struct GenerateArgs {
    /// JSON configuration file; flags below override it
    #[arg(long, env = "CCGEN_CONFIG")]
    config: Option<PathBuf>,

    /// Network name, or "Random"
    #[arg(long)]
    network: Option<NetworkChoice>,

    /// Output format: CARD, PIPE, CSV, SQL, JSON or XML
    #[arg(long)]
    format: Option<OutputFormat>,

    /// Leave expiration month and year empty
    #[arg(long)]
    no_expiration: bool,

    /// Expiration month name or number, or "Random"
    #[arg(long)]
    month: Option<MonthChoice>,

    /// Four-digit expiration year, or "Random"
    #[arg(long)]
    year: Option<YearChoice>,

    /// Leave the CVV empty
    #[arg(long, conflicts_with = "cvv")]
    no_cvv: bool,

    /// Fixed CVV; non-digits are dropped, at most four digits kept
    #[arg(long)]
    cvv: Option<String>,

    /// Number of records
    #[arg(short, long)]
    quantity: Option<usize>,

    /// Allow quantities outside the standard list
    #[arg(long)]
    any_quantity: bool,

    /// Seed for a reproducible batch
    #[arg(long)]
    seed: Option<u64>,

    /// Write to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl GenerateArgs {
    fn to_config(&self) -> Result<GenerationConfig> {
        let mut config = match &self.config {
            Some(path) => {
                let json = fs::read_to_string(path)
                    .with_context(|| format!("reading {}", path.display()))?;
                GenerationConfig::from_json(&json)
                    .with_context(|| format!("parsing {}", path.display()))?
            }
            None => GenerationConfig::default(),
        };

        if let Some(network) = self.network {
            config = config.with_network(network);
        }
        if let Some(format) = self.format {
            config = config.with_format(format);
        }
        if let Some(month) = self.month {
            config.expiration_month = month;
        }
        if let Some(year) = &self.year {
            config.expiration_year = year.clone();
        }
        if self.no_expiration {
            config = config.without_expiration();
        }
        if let Some(cvv) = &self.cvv {
            let cvv = sanitize_cvv(cvv);
            config = config.with_cvv((!cvv.is_empty()).then_some(cvv));
        }
        if self.no_cvv {
            config = config.without_cvv();
        }
        if let Some(quantity) = self.quantity {
            config = config.with_quantity(quantity);
        }

        if self.any_quantity {
            config.validate()?;
        } else {
            config.validate_strict().with_context(|| {
                format!("supported quantities are {QUANTITY_OPTIONS:?}; pass --any-quantity to override")
            })?;
        }

        Ok(config)
    }
}

fn run_generate(args: &GenerateArgs) -> Result<()> {
    let config = args.to_config()?;

    let mut generator = match args.seed {
        Some(seed) => CardGenerator::with_seed(seed),
        None => CardGenerator::new(),
    };
    debug!(seed = generator.seed(), "generator ready");

    let lines = generator.generate(&config)?;
    let mut text = lines.join("\n");
    text.push('\n');

    match &args.output {
        Some(path) => {
            fs::write(path, text).with_context(|| format!("writing {}", path.display()))?;
            info!(count = lines.len(), path = %path.display(), "wrote cards");
        }
        None => io::stdout().lock().write_all(text.as_bytes())?,
    }

    Ok(())
}

fn run_check(numbers: &[String], out: &mut impl Write) -> Result<bool> {
    let mut all_valid = true;

    for number in numbers {
        let valid = luhn::is_valid(number);
        all_valid &= valid;
        writeln!(out, "{number}\t{}", if valid { "valid" } else { "invalid" })?;
    }

    Ok(all_valid)
}

fn run_networks() -> Result<()> {
    let mut stdout = io::stdout().lock();
    for network in Network::ALL {
        writeln!(stdout, "{:<28}{}", network.name(), network.prefixes().join(", "))?;
    }
    writeln!(stdout, "{:<28}{} pooled prefixes", "Random", all_prefixes().len())?;
    writeln!(stdout)?;
    writeln!(stdout, "months: {}", MONTH_OPTIONS.join(", "))?;
    writeln!(stdout, "years:  {}", YEAR_OPTIONS.join(", "))?;
    Ok(())
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "ccgen=debug,test_card_gen=debug" } else { "ccgen=info" };
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| default_filter.to_string()),
        ))
        .init();

    match &cli.command {
        Commands::Generate(args) => run_generate(args)?,
        Commands::Check { numbers } => {
            if !run_check(numbers, &mut io::stdout().lock())? {
                return Ok(ExitCode::FAILURE);
            }
        }
        Commands::Networks => run_networks()?,
    }

    Ok(ExitCode::SUCCESS)
}
