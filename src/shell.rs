use std::io::{BufRead, Write};

use anyhow::{bail, Result};
use tracing::debug;

use dna_analyzer::history::OperationHistory;
use dna_analyzer::io::fasta::{load_fasta, LoadedSequence};
use dna_analyzer::kmer::{KmerOpt, Strategy};
use dna_analyzer::search::Algorithm;

use crate::commands::{self, SearchOpt};

const HELP: &str = "\
Commands:
  load <fasta>              load the first record of a FASTA file
  search <pattern> [algo]   find a pattern (algo: kmp, bm, rk, naive; default kmp)
  compare <pattern>         run all algorithms and rank them by time
  kmers <k> [top]           most frequent k-mers (default top 10)
  gc | sry | info | validate
  toggle                    switch k-mer ranking between sort and heap
  history [n]               show the last n operations (default 10)
  help | quit";

/// State owned by one interactive session.
#[derive(Default)]
pub struct Session {
    pub loaded: Option<LoadedSequence>,
    pub strategy: Strategy,
    pub history: OperationHistory,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load errors are reported and leave the current sequence in place.
    pub fn load(&mut self, path: &str) {
        match load_fasta(path) {
            Ok(seq) => {
                println!("Loaded {} ({} bp)", seq.header, seq.seq.len());
                self.loaded = Some(seq);
                self.history.record("Load FASTA", path);
            }
            Err(e) => eprintln!("error: {}", e),
        }
    }

    fn sequence(&self) -> Result<&LoadedSequence> {
        match &self.loaded {
            Some(s) => Ok(s),
            None => bail!("please load a FASTA first"),
        }
    }

    /// Execute one command line. Returns `false` when the session should end.
    pub fn execute(&mut self, line: &str) -> Result<bool> {
        let words: Vec<&str> = line.split_whitespace().collect();
        let Some((&cmd, args)) = words.split_first() else {
            return Ok(true);
        };
        debug!(cmd, ?args, "shell command");

        match cmd.to_ascii_lowercase().as_str() {
            "quit" | "exit" => return Ok(false),
            "help" => println!("{}", HELP),
            "load" => match args.first() {
                Some(path) => self.load(path),
                None => bail!("usage: load <fasta>"),
            },
            "search" => {
                let Some(pattern) = args.first() else {
                    bail!("usage: search <pattern> [algo]");
                };
                let algorithm = match args.get(1) {
                    Some(a) => a.parse::<Algorithm>()?,
                    None => Algorithm::Kmp,
                };
                let pattern = pattern.to_ascii_uppercase();
                let opt = SearchOpt { algorithm, show: 10 };
                let params = commands::run_search(&self.sequence()?.seq, pattern.as_bytes(), opt, false)?;
                self.history.record("Pattern Search", params);
            }
            "compare" => {
                let Some(pattern) = args.first() else {
                    bail!("usage: compare <pattern>");
                };
                let pattern = pattern.to_ascii_uppercase();
                let params = commands::run_compare(&self.sequence()?.seq, pattern.as_bytes(), 1, false)?;
                self.history.record("Pattern Search Compare", params);
            }
            "kmers" => {
                let k: usize = match args.first() {
                    Some(k) => k.parse()?,
                    None => bail!("usage: kmers <k> [top]"),
                };
                let top: usize = match args.get(1) {
                    Some(n) => n.parse()?,
                    None => 10,
                };
                let opt = KmerOpt { k, top, strategy: self.strategy, ..KmerOpt::default() };
                let params = commands::run_kmers(&self.sequence()?.seq, &opt, false)?;
                self.history.record("K-mer Analysis", params);
            }
            "gc" => {
                let params = commands::run_gc(&self.sequence()?.seq);
                self.history.record("GC Content", params);
            }
            "sry" => {
                let params = commands::run_sry(&self.sequence()?.seq);
                self.history.record("SRY Detection", params);
            }
            "info" => {
                let s = self.sequence()?;
                let params = commands::run_info(&s.header, &s.seq, false)?;
                self.history.record("Sequence Info", params);
            }
            "validate" => {
                let params = commands::run_validate(&self.sequence()?.seq);
                self.history.record("Sequence Validation", params);
            }
            "toggle" => {
                self.strategy = self.strategy.toggled();
                println!("K-mer ranking set to: {}", self.strategy);
                self.history.record("Toggle Algorithm", self.strategy.name());
            }
            "history" => {
                let n: usize = match args.first() {
                    Some(n) => n.parse()?,
                    None => 10,
                };
                if self.history.is_empty() {
                    println!("No operations recorded.");
                } else {
                    for op in self.history.recent(n) {
                        println!("{}", op);
                    }
                }
            }
            other => bail!("unknown command '{}' (try 'help')", other),
        }
        Ok(true)
    }
}

/// Read commands from `input` until EOF or `quit`. Command errors are
/// reported and the session continues.
pub fn run<R: BufRead>(session: &mut Session, input: R) -> Result<()> {
    let mut stdout = std::io::stdout();
    print!("dna> ");
    stdout.flush()?;
    for line in input.lines() {
        match session.execute(&line?) {
            Ok(true) => {}
            Ok(false) => break,
            Err(e) => eprintln!("error: {:#}", e),
        }
        print!("dna> ");
        stdout.flush()?;
    }
    println!();
    Ok(())
}
