use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use monarch_finance::{ExtractionReport, extract_statement_csvs};
use monarch_ingest::{AccountType, PdfExtractSource};
use std::path::{Path, PathBuf};
use tracing::error;
use tracing_subscriber::EnvFilter;

mod config;
mod state;

use config::Config;

#[derive(Parser, Debug)]
#[command(name = "monarch", version, about = "Credit card statement extraction")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Extract the account summary and activity ledger from a statement PDF
    Extract {
        /// Statement layout
        #[arg(value_enum)]
        account_type: Account,

        /// Path to the statement PDF
        account_pdf: PathBuf,

        /// Print the result as JSON instead of the footer lines
        #[arg(long)]
        json: bool,
    },

    /// Manage ~/.monarch/config.toml
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Write the default config if none exists
    Init,

    /// Print the effective config
    Show,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Account {
    Chase,
}

impl From<Account> for AccountType {
    fn from(a: Account) -> Self {
        match a {
            Account::Chase => AccountType::Chase,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    let cfg = config::load_config();

    let filter = cfg.as_ref().map(|c| c.log.filter.as_str()).unwrap_or("info");
    init_tracing(filter);

    if let Err(err) = cfg.and_then(|cfg| run(cli, &cfg)) {
        error!(error = %err, "command failed");
        for cause in err.chain().skip(1) {
            error!(cause = %cause, "caused by");
        }
        std::process::exit(1);
    }
}

fn run(cli: Cli, cfg: &Config) -> Result<()> {
    match cli.command {
        Command::Extract {
            account_type,
            account_pdf,
            json,
        } => {
            let report = extract(account_type.into(), &account_pdf, cfg)?;
            print_report(&report, json)?;
        }

        Command::Config { command } => match command {
            ConfigCommand::Init => config::init_config()?,
            ConfigCommand::Show => {
                println!("# {}", config::config_path()?.display());
                print!("{}", toml::to_string_pretty(cfg).context("serialize config")?);
            }
        },
    }

    Ok(())
}

fn extract(account: AccountType, pdf: &Path, cfg: &Config) -> Result<ExtractionReport> {
    let parser = account.parser();
    extract_statement_csvs(pdf, parser.as_ref(), &PdfExtractSource, &cfg.extract_options())
        .with_context(|| format!("extracting {account} statement {}", pdf.display()))
}

fn print_report(report: &ExtractionReport, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
        return Ok(());
    }

    println!("Wrote {}", report.paths.summary.display());
    println!("Wrote {}", report.paths.activity.display());
    for (label, value) in report.totals.footer() {
        println!("{label},,{value}");
    }
    Ok(())
}

fn init_tracing(default_filter: &str) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
