//! Cab Billing — CLI
//!
//! Prices ride entries from the command line.
//!
//! ```sh
//! # Bill every entry in a JSON file (one object or an array)
//! cab-billing bill entries.json
//!
//! # Quote a single ride
//! cab-billing quote --slot 4hr --start 09:00 --end 14:00 --rate 1200 --extra-per-hour 150
//!
//! # Show the slot table, or check how a time string is read
//! cab-billing slots
//! cab-billing parse-time "2:30 PM"
//!
//! # Validate config without doing anything
//! cab-billing --check
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use tracing::{error, info};

use cab_billing::config::{AppConfig, OutputFormat};
use cab_billing::infrastructure::load_entries;
use cab_billing::logging::init_tracing;
use cab_billing::support::errors::AppResult;
use cab_billing::support::money::format_amount;
use cab_billing::support::serializations::parse_decimal;
use cab_billing::{
    bill_entries, compute_billing, parse_time_of_day, slot_catalogue, BillingInput,
    BillingResult, BillingStatement, UsageInput,
};

/// Cab Billing — slot-based pricing for corporate cab entries.
#[derive(Parser, Debug)]
#[command(
    name = "cab-billing",
    version,
    about = "Bill corporate cab ride entries",
    long_about = "Computes slot overage (extra hours and kilometres) and \
                  whole-unit totals for cab ride entries.\n\n\
                  Default config: ~/.config/cab-billing/config.toml"
)]
struct Cli {
    /// Path to the configuration file (TOML).
    #[arg(short, long, env = "CAB_BILLING_CONFIG", global = true)]
    config: Option<PathBuf>,

    /// Override the log level (trace, debug, info, warn, error).
    #[arg(short, long, global = true)]
    log_level: Option<String>,

    /// Override the output format.
    #[arg(short, long, value_enum, global = true)]
    format: Option<FormatArg>,

    /// Print the effective configuration and exit.
    #[arg(long)]
    check: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Bill entry records from a JSON file.
    Bill {
        /// File holding one entry object or an array of entries.
        file: PathBuf,
    },
    /// Bill a single ride described by flags.
    Quote(QuoteArgs),
    /// List the known slots and their allowances.
    Slots,
    /// Show how a time-of-day string is read.
    ParseTime {
        text: String,
    },
}

/// Numeric flags are read the same way entry forms are: anything that is
/// not a number counts as absent.
#[derive(clap::Args, Debug)]
struct QuoteArgs {
    #[arg(long)]
    slot: Option<String>,
    #[arg(long)]
    start: Option<String>,
    #[arg(long)]
    end: Option<String>,
    #[arg(long, allow_hyphen_values = true)]
    odometer_start: Option<String>,
    #[arg(long, allow_hyphen_values = true)]
    odometer_end: Option<String>,
    #[arg(long, allow_hyphen_values = true)]
    rate: Option<String>,
    #[arg(long, allow_hyphen_values = true)]
    extra_per_hour: Option<String>,
    #[arg(long, allow_hyphen_values = true)]
    extra_per_km: Option<String>,
    #[arg(long, allow_hyphen_values = true)]
    tolls: Option<String>,
}

impl QuoteArgs {
    fn into_input(self) -> BillingInput {
        let number = |value: Option<String>| value.as_deref().and_then(parse_decimal);
        BillingInput {
            usage: UsageInput {
                slot: self.slot,
                start_time: self.start,
                end_time: self.end,
                odometer_start: number(self.odometer_start),
                odometer_end: number(self.odometer_end),
            },
            rate: number(self.rate),
            extra_per_hour: number(self.extra_per_hour),
            extra_per_km: number(self.extra_per_km),
            tolls: number(self.tolls),
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum FormatArg {
    Text,
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // ── Load configuration ─────────────────────────────────────
    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(cab_billing::default_config_path);

    let (mut config, load_error) = match AppConfig::load(&config_path) {
        Ok(cfg) => (cfg, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    // ── Apply CLI overrides ────────────────────────────────────
    if let Some(ref level) = cli.log_level {
        config.logging.level = level.clone();
    }
    if let Some(format) = cli.format {
        config.output.format = format.into();
    }

    init_tracing(&config);
    match load_error {
        None => info!("Configuration loaded from {}", config_path.display()),
        // A missing default file is normal; only an explicit path is worth an error.
        Some(e) if cli.config.is_some() => {
            error!("Failed to load config from {}: {}", config_path.display(), e);
            error!("Using default configuration.");
        }
        Some(e) => info!("Using default configuration ({})", e),
    }

    // ── Config validation mode ─────────────────────────────────
    if cli.check {
        println!("Configuration is valid");
        println!("   Config file : {}", config_path.display());
        println!("   Log level   : {}", config.logging.level);
        println!("   Log format  : {}", config.logging.format);
        println!("   Currency    : {}", config.billing.currency);
        println!("   Output      : {}", config.output.format);
        return ExitCode::SUCCESS;
    }

    let Some(command) = cli.command else {
        error!("No command given; see --help");
        return ExitCode::from(2);
    };

    match run(command, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(command: Command, config: &AppConfig) -> AppResult<()> {
    match command {
        Command::Bill { file } => {
            let records = load_entries(&file)?;
            let statement = bill_entries(&records);
            print_statement(&statement, config);
        }
        Command::Quote(args) => {
            let result = compute_billing(&args.into_input());
            print_result(&result, config);
        }
        Command::Slots => match config.output.format {
            OutputFormat::Json => {
                let slots: serde_json::Map<String, serde_json::Value> = slot_catalogue()
                    .iter()
                    .map(|(name, limit)| {
                        (name.to_string(), serde_json::json!({ "hours": limit.hours, "kms": limit.kms }))
                    })
                    .collect();
                print_json(&slots, config);
            }
            OutputFormat::Text => {
                for (name, limit) in slot_catalogue() {
                    println!("{:<6} {:>3} h  {:>4} km", name, limit.hours, limit.kms);
                }
            }
        },
        Command::ParseTime { text } => {
            let minutes = parse_time_of_day(&text);
            match config.output.format {
                OutputFormat::Json => print_json(&serde_json::json!({ "minutes": minutes }), config),
                OutputFormat::Text => match minutes {
                    Some(m) => println!("{:02}:{:02} ({} minutes)", m / 60, m % 60, m),
                    None => println!("unparseable"),
                },
            }
        }
    }
    Ok(())
}

fn print_json<T: serde::Serialize + ?Sized>(value: &T, config: &AppConfig) {
    let rendered = if config.output.pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    match rendered {
        Ok(text) => println!("{}", text),
        Err(e) => error!("Failed to render JSON: {}", e),
    }
}

fn print_result(result: &BillingResult, config: &AppConfig) {
    if config.output.format == OutputFormat::Json {
        print_json(result, config);
        return;
    }

    let currency = &config.billing.currency;
    let usage = &result.usage;
    match usage.limits {
        Some(limit) => println!("Slot allowance : {} h / {} km", limit.hours, limit.kms),
        None => println!("Slot allowance : none"),
    }
    match usage.travelled_minutes {
        Some(m) => println!("Travelled time : {}h {:02}m", m / 60, m % 60),
        None => println!("Travelled time : unknown"),
    }
    match usage.travelled_kms {
        Some(kms) => println!("Travelled     : {} km", kms.normalize()),
        None => println!("Travelled     : unknown"),
    }
    println!("Rate           : {}", format_amount(result.rate, currency));
    println!(
        "Extra hours    : {} x {} = {}",
        usage.extra_hours,
        result.extra_per_hour,
        format_amount(result.extra_time_cost, currency)
    );
    println!(
        "Extra km       : {} x {} = {}",
        usage.extra_kms,
        result.extra_per_km,
        format_amount(result.extra_kms_cost, currency)
    );
    println!("Tolls          : {}", format_amount(result.tolls, currency));
    println!("Total          : {}", result.format_total(currency));
}

fn print_statement(statement: &BillingStatement, config: &AppConfig) {
    if config.output.format == OutputFormat::Json {
        print_json(statement, config);
        return;
    }

    let currency = &config.billing.currency;
    println!(
        "{:<12} {:<10} {:<5} {:>6} {:>6} {:>10}",
        "ENTRY", "DATE", "SLOT", "+HRS", "+KMS", "TOTAL"
    );
    for (index, line) in statement.lines.iter().enumerate() {
        let id = line
            .id
            .clone()
            .unwrap_or_else(|| format!("#{}", index + 1));
        let date = line
            .date
            .map(|d| d.to_string())
            .unwrap_or_else(|| "-".to_string());
        let slot = line
            .billing
            .usage
            .limits
            .map(|l| format!("{}h", l.hours))
            .unwrap_or_else(|| "-".to_string());
        println!(
            "{:<12} {:<10} {:<5} {:>6} {:>6} {:>10}",
            id, date, slot, line.billing.usage.extra_hours, line.billing.usage.extra_kms, line.billing.total
        );
    }
    println!(
        "{} entries, grand total {}",
        statement.entry_count,
        statement.format_grand_total(currency)
    );
}
