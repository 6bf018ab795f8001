//! triespell interactive spelling lookup.

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use env_logger::Builder;
use log::{info, warn, LevelFilter};

use triespell::loader;
use triespell::repl::Session;
use triespell::{VocabularyIndex, DEFAULT_THRESHOLD};

/// Look up words in a vocabulary and suggest close matches for misspellings
#[derive(Parser, Debug, Clone)]
#[command(name = "triespell")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
struct Args {
    /// Newline-delimited word list to load at startup
    #[arg(short, long, env = "TRIESPELL_DICTIONARY", default_value = "DICT.txt")]
    dictionary: PathBuf,

    /// Maximum edit distance for suggestions
    #[arg(short, long, default_value_t = DEFAULT_THRESHOLD)]
    threshold: usize,

    /// Verbosity level (repeat for more detail)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only report errors
    #[arg(short, long)]
    quiet: bool,
}

impl Args {
    fn log_level(&self) -> LevelFilter {
        if self.quiet {
            return LevelFilter::Error;
        }
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    Builder::new()
        .filter_level(args.log_level())
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .init();

    // A missing word list is reported once; the session still runs.
    let index = match loader::load_path(&args.dictionary) {
        Ok(index) => {
            println!("Dictionary created successfully! ({} words)", index.len());
            index
        }
        Err(e) => {
            warn!("{e}; continuing with an empty vocabulary");
            VocabularyIndex::new()
        }
    };

    let session = Session::with_threshold(&index, args.threshold);
    let stats = session
        .run(io::stdin().lock(), io::stdout().lock())
        .context("interactive session failed")?;
    info!(
        "{} lookups: {} found, {} not found, {} rejected",
        stats.queries, stats.found, stats.not_found, stats.rejected
    );
    Ok(())
}
