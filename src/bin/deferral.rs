use clap::{Parser, Subcommand};
use deferral::{
    config::DeferralConfig,
    defer_async,
    patterns::{fallback::value_or_async, guard::Gate, require::require},
    Error,
};
use std::cell::Cell;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tracing::{debug, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to config file
    #[arg(short, long, default_value = "deferral.json", global = true)]
    config: PathBuf,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Supply a default only when no value is given
    Fallback {
        /// The primary value, if any
        #[arg(long)]
        value: Option<i64>,

        /// The value the fallback produces
        #[arg(long, default_value_t = 25)]
        default: i64,
    },

    /// Fail with a missing-name error only when no name is given
    Require {
        #[arg(long)]
        name: Option<String>,
    },

    /// Run an expression through a gate
    Gate {
        /// Close the gate regardless of config
        #[arg(long)]
        disabled: bool,
    },

    /// Force a counting thunk built from the configured policy
    Policy {
        #[arg(long, default_value_t = 3)]
        times: usize,
    },
}

fn load_config(path: &Path) -> Result<DeferralConfig, Error> {
    let config = if path.exists() {
        DeferralConfig::from_file(path)?
    } else {
        DeferralConfig::default()
    };
    info!("Config loaded.");
    debug!("config: {:?}", config);
    Ok(config)
}

async fn run(cli: &Cli) -> Result<(), Error> {
    let config = load_config(&cli.config)?;

    match &cli.command {
        Commands::Fallback { value, default } => {
            let runs = Arc::new(AtomicUsize::new(0));
            let counter = Arc::clone(&runs);
            let default = *default;
            let fallback = defer_async(move || {
                let counter = Arc::clone(&counter);
                async move {
                    counter.fetch_add(1, Ordering::SeqCst);
                    default
                }
            });

            let result = value_or_async(*value, &fallback).await;
            println!("value: {}", result);
            println!("fallback runs: {}", runs.load(Ordering::SeqCst));
        }

        Commands::Require { name } => {
            let name = require(name.clone(), || {
                Error::internal("missing name: pass --name to greet someone")
            })?;
            println!("Hello, {}!", name);
        }

        Commands::Gate { disabled } => {
            let mut gate = Gate::from_config(&config.gate);
            if *disabled {
                gate.set_enabled(false);
            }
            let ran = Cell::new(false);
            let result = gate.run(|| {
                ran.set(true);
                "expression evaluated"
            });
            println!("gate enabled: {}", gate.is_enabled());
            println!("result: {}", result.unwrap_or("suppressed"));
            println!("ran: {}", ran.get());
        }

        Commands::Policy { times } => {
            let runs = Cell::new(0usize);
            let thunk = config.thunk(|| {
                runs.set(runs.get() + 1);
                runs.get()
            });
            for _ in 0..*times {
                thunk.force();
            }
            println!("policy: {}", thunk.policy());
            println!("forces: {}", times);
            println!("runs: {}", runs.get());
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()))
        .with(fmt::layer())
        .init();

    if let Err(e) = run(&cli).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
