use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;

use dna_analyzer::io::fasta::{load_fasta, LoadedSequence};
use dna_analyzer::kmer::{KmerOpt, Strategy};
use dna_analyzer::search::Algorithm;

mod commands;
mod shell;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

#[derive(Parser, Debug)]
#[command(name = "dna-analyzer", author, version, about = "Exact pattern search and k-mer analysis for DNA sequences", arg_required_else_help = true)]
struct Cli {
    /// Debug-level logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Find every occurrence of a pattern
    Search {
        /// FASTA file (first record is used)
        fasta: String,
        pattern: String,
        /// kmp, bm, rk or naive
        #[arg(short, long, default_value = "kmp")]
        algorithm: Algorithm,
        /// Number of positions to print
        #[arg(long, default_value_t = 10)]
        show: usize,
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Run all four search algorithms and rank them by time
    Compare {
        fasta: String,
        pattern: String,
        /// Worker threads (0 = all available cores)
        #[arg(short = 't', long = "threads", default_value_t = 1)]
        threads: usize,
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Count k-mers and report the most frequent ones
    Kmers {
        fasta: String,
        /// K-mer length
        #[arg(short, long)]
        k: usize,
        /// Number of top k-mers to report
        #[arg(short = 'n', long, default_value_t = 10)]
        top: usize,
        /// Top-N selection: sort or heap
        #[arg(short, long, default_value = "sort")]
        strategy: Strategy,
        /// K-mer looked up in the ordered index
        #[arg(long, default_value = "ATG")]
        probe: String,
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
    /// GC content percentage
    Gc { fasta: String },
    /// Look for the SRY gene marker
    Sry { fasta: String },
    /// Header, length and base composition
    Info {
        fasta: String,
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Alphabet validation and sequence hash
    Validate { fasta: String },
    /// Interactive session with operation history
    Shell {
        /// FASTA file to load at startup
        fasta: Option<String>,
    },
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default)),
        )
        .init();
}

fn load(path: &str) -> Result<LoadedSequence> {
    load_fasta(path).with_context(|| format!("cannot load FASTA '{}'", path))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Search { fasta, pattern, algorithm, show, json } => {
            let loaded = load(&fasta)?;
            let pattern = pattern.to_ascii_uppercase();
            let opt = commands::SearchOpt { algorithm, show };
            commands::run_search(&loaded.seq, pattern.as_bytes(), opt, json)?;
        }
        Commands::Compare { fasta, pattern, threads, json } => {
            let loaded = load(&fasta)?;
            let pattern = pattern.to_ascii_uppercase();
            commands::run_compare(&loaded.seq, pattern.as_bytes(), threads, json)?;
        }
        Commands::Kmers { fasta, k, top, strategy, probe, json } => {
            let loaded = load(&fasta)?;
            let opt = KmerOpt { k, top, strategy, probe: probe.to_ascii_uppercase().into_bytes() };
            commands::run_kmers(&loaded.seq, &opt, json)?;
        }
        Commands::Gc { fasta } => {
            commands::run_gc(&load(&fasta)?.seq);
        }
        Commands::Sry { fasta } => {
            commands::run_sry(&load(&fasta)?.seq);
        }
        Commands::Info { fasta, json } => {
            let loaded = load(&fasta)?;
            commands::run_info(&loaded.header, &loaded.seq, json)?;
        }
        Commands::Validate { fasta } => {
            commands::run_validate(&load(&fasta)?.seq);
        }
        Commands::Shell { fasta } => {
            let stdin = std::io::stdin();
            let mut session = shell::Session::new();
            if let Some(path) = fasta {
                session.load(&path);
            }
            shell::run(&mut session, stdin.lock())?;
            info!(operations = session.history.len(), "session finished");
        }
    }
    Ok(())
}
