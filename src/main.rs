use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use contractscan::{
    catalog::Catalog,
    config::Config,
    matcher::Matcher,
    output::{print_records, OutputFormat},
    server,
};
use std::path::PathBuf;
use std::process::ExitCode;
use std::str::FromStr;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "contractscan")]
#[command(
    author,
    version,
    about = "Scan smart-contract source for known vulnerability patterns"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP upload service
    Serve {
        /// Port to listen on (overrides config)
        #[arg(short, long)]
        port: Option<u16>,

        /// Ledger gateway URL (overrides config)
        #[arg(long)]
        gateway: Option<String>,

        /// Directory for staging uploads (overrides config)
        #[arg(long)]
        upload_dir: Option<PathBuf>,

        /// Skip seeding the ledger store on startup
        #[arg(long)]
        no_seed: bool,
    },

    /// Scan a local source file against the catalog
    Scan {
        /// Path to the source file
        file: PathBuf,

        /// Output format (table, json)
        #[arg(short, long, default_value = "table")]
        format: String,

        /// Write the JSON report to a file instead of printing
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List the builtin vulnerability catalog
    Catalog {
        /// Output format (table, json)
        #[arg(short, long, default_value = "table")]
        format: String,
    },

    /// Show or create config file
    Config {
        /// Generate default config file
        #[arg(long)]
        init: bool,

        /// Show config file path
        #[arg(long)]
        path: bool,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load().unwrap_or_default();

    match cli.command {
        Commands::Serve {
            port,
            gateway,
            upload_dir,
            no_seed,
        } => {
            let mut config = config;
            if let Some(port) = port {
                config.port = port;
            }
            if let Some(gateway) = gateway {
                config.ledger_gateway = gateway;
            }
            if let Some(dir) = upload_dir {
                config.upload_dir = dir;
            }
            if no_seed {
                config.seed_on_start = false;
            }

            server::start_server(&config, Catalog::builtin()).await
        }
        Commands::Scan {
            file,
            format,
            output,
        } => run_scan(&file, &format, output),
        Commands::Catalog { format } => {
            let format = OutputFormat::from_str(&format).map_err(|e| anyhow::anyhow!(e))?;
            let catalog = Catalog::builtin();
            print_records(catalog.records(), format)
        }
        Commands::Config { init, path } => handle_config(init, path),
    }
}

fn run_scan(file: &PathBuf, format: &str, output_file: Option<PathBuf>) -> Result<()> {
    let format = OutputFormat::from_str(format).map_err(|e| anyhow::anyhow!(e))?;

    let text = std::fs::read_to_string(file)
        .with_context(|| format!("failed to read {}", file.display()))?;

    let matcher = Matcher::new(Arc::new(Catalog::builtin()));
    let matches = matcher.scan(&text);

    if let Some(path) = output_file {
        let report = contractscan::ScanReport::new(matches);
        let json = serde_json::to_string_pretty(&report)?;
        std::fs::write(&path, json)?;
        println!("Report written to: {}", path.display());
        return Ok(());
    }

    print_records(&matches, format)
}

fn handle_config(init: bool, show_path: bool) -> Result<()> {
    let config_path = Config::config_path();

    if show_path {
        println!("{}", config_path.display());
        return Ok(());
    }

    if init {
        if config_path.exists() {
            println!("Config file already exists at: {}", config_path.display());
            return Ok(());
        }

        let config = Config::default();
        config.save()?;
        println!("Created config file at: {}", config_path.display());
        println!();
        println!("Default configuration:");
        println!("{}", Config::generate_default_config());
        return Ok(());
    }

    // Show current config
    if config_path.exists() {
        let content = std::fs::read_to_string(&config_path)?;
        println!("Config file: {}", config_path.display());
        println!();
        println!("{}", content);
    } else {
        println!("No config file found.");
        println!("Run 'contractscan config --init' to create one.");
        println!();
        println!("Config path: {}", config_path.display());
    }

    Ok(())
}
