use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use pattern_primer::demo::{self, DemoConfig};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "pattern-primer", about = "Iterator, Template Method and Adapter demos")]
struct Cli {
    /// Log at debug level (overridden by RUST_LOG).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Shelve books and walk them with a cursor.
    Iterator {
        /// Book title to shelve (repeatable; defaults to three sample titles).
        #[arg(long = "title")]
        titles: Vec<String>,
    },
    /// Run the char display followed by the string display.
    Template {
        /// Symbol repeated by the char display.
        #[arg(long, default_value_t = 'C')]
        symbol: char,
        /// Text framed by the string display.
        #[arg(long, default_value = "Hello World!!")]
        text: String,
    },
    /// Print a strong and a weak banner through the adapter.
    Adapter {
        /// Text printed with strong emphasis.
        #[arg(long, default_value = "HELLO!")]
        strong: String,
        /// Text printed with weak emphasis.
        #[arg(long, default_value = "bye...")]
        weak: String,
    },
    /// Run all three demos with their defaults.
    All,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Iterator { titles } => {
            let mut config = DemoConfig::default();
            if !titles.is_empty() {
                config = config.with_titles(titles);
            }
            demo::run_iterator(&config, &mut out).context("iterator demo failed")?;
        }
        Commands::Template { symbol, text } => {
            let config = DemoConfig::default().with_symbol(symbol).with_text(text);
            demo::run_template(&config, &mut out).context("template demo failed")?;
        }
        Commands::Adapter { strong, weak } => {
            let config = DemoConfig::default().with_banner(strong, weak);
            demo::run_adapter(&config, &mut out).context("adapter demo failed")?;
        }
        Commands::All => {
            demo::run_all(&DemoConfig::default(), &mut out).context("demo failed")?;
        }
    }

    out.flush().context("failed to flush stdout")?;
    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
