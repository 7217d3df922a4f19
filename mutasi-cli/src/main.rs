use anyhow::Result;
use clap::{Parser, Subcommand};
use mutasi_ingest::{Extractor, Registry};
use std::path::{Path, PathBuf};

mod config;
mod convert;
mod input;
mod state;

const VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), " (", env!("MUTASI_BUILD_SHA"), ")");

#[derive(Parser, Debug)]
#[command(name = "mutasi", version = VERSION, about = "Turn Indonesian bank statements into transaction tables")]
struct Cli {
    /// Log more (-v info, -vv debug); RUST_LOG takes precedence
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Parse statements and export their transactions
    Convert(convert::ConvertArgs),

    /// Print the reconstructed text of a statement
    Raw {
        input: PathBuf,

        #[arg(long)]
        password: Option<String>,
    },

    /// Show which issuer a statement is recognized as
    Detect {
        input: PathBuf,

        #[arg(long)]
        password: Option<String>,
    },

    /// List supported issuers in classification order
    Issuers,

    /// Manage ~/.mutasi/config.toml
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Write a default config file if none exists
    Init,

    /// Print the effective configuration
    Show,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .target(env_logger::Target::Stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Command::Convert(args) => {
            let cfg = config::load_config()?;
            convert::run(args, &cfg).await?;
        }

        Command::Raw { input, password } => {
            let doc = input::load_document(&input, password.as_deref())?;
            print!("{doc}");
        }

        Command::Detect { input, password } => {
            let extractor = config::load_config()?.extractor()?;
            detect(&extractor, &input, password.as_deref())?;
        }

        Command::Issuers => {
            let extractor = config::load_config()?.extractor()?;
            list_issuers(extractor.registry());
        }

        Command::Config { command } => match command {
            ConfigCommand::Init => config::init_config()?,
            ConfigCommand::Show => config::show_config()?,
        },
    }

    Ok(())
}

fn detect(extractor: &Extractor, input: &Path, password: Option<&str>) -> Result<()> {
    let doc = input::load_document(input, password)?;
    let registry = extractor.registry();
    let matched = registry.fingerprint_matches(&doc);

    match registry.classify(&doc) {
        Some(profile) => println!("issuer: {} ({})", profile.variant(), profile.variant().bank_name()),
        None => println!("issuer: unsupported"),
    }
    if matched.len() > 1 {
        let all: Vec<&str> = matched.iter().map(|v| v.key()).collect();
        println!("fingerprints found: {}", all.join(", "));
    }
    Ok(())
}

fn list_issuers(registry: &Registry) {
    for profile in registry.profiles() {
        let p = profile.profile();
        println!(
            "{:<8} {:<24} amounts: {:<14} numbers: {:<13} fingerprint: \"{}\"",
            p.variant.key(),
            p.variant.bank_name(),
            p.amount.name(),
            p.number_policy.key(),
            p.fingerprints.join("\", \"")
        );
    }
}
