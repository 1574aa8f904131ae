use std::time::Instant;

use anyhow::Result;
use rayon::prelude::*;
use serde::Serialize;
use tracing::{debug, warn};

use dna_analyzer::kmer::{self, KmerOpt};
use dna_analyzer::search::{self, Algorithm};
use dna_analyzer::util::dna;

/// Options for a single-algorithm search.
#[derive(Debug, Clone, Copy)]
pub struct SearchOpt {
    pub algorithm: Algorithm,
    /// How many positions to print in text mode.
    pub show: usize,
}

#[derive(Debug, Serialize)]
pub struct SearchRun {
    pub algorithm: Algorithm,
    pub name: &'static str,
    pub matches: usize,
    pub seconds: f64,
    pub positions: Vec<usize>,
}

fn timed_search(seq: &[u8], pattern: &[u8], algorithm: Algorithm) -> SearchRun {
    let start = Instant::now();
    let positions = search::search(seq, pattern, algorithm);
    let seconds = start.elapsed().as_secs_f64();
    SearchRun { algorithm, name: algorithm.name(), matches: positions.len(), seconds, positions }
}

#[derive(Debug, Serialize)]
pub struct CompareReport {
    pub pattern: String,
    pub seq_len: usize,
    pub consistent: bool,
    /// Fastest first.
    pub runs: Vec<SearchRun>,
}

/// Run every algorithm on the same input in a rayon pool of `threads`
/// workers (0 = all cores) and rank them by wall-clock time.
pub fn compare_all(seq: &[u8], pattern: &[u8], threads: usize) -> Result<CompareReport> {
    let pool = rayon::ThreadPoolBuilder::new().num_threads(threads).build()?;
    let mut runs: Vec<SearchRun> = pool.install(|| {
        Algorithm::ALL[..]
            .par_iter()
            .map(|&a| timed_search(seq, pattern, a))
            .collect()
    });

    let consistent = runs.windows(2).all(|w| w[0].positions == w[1].positions);
    if !consistent {
        warn!("search algorithms disagree on match positions");
    }
    runs.sort_by(|a, b| a.seconds.total_cmp(&b.seconds));

    Ok(CompareReport {
        pattern: String::from_utf8_lossy(pattern).into_owned(),
        seq_len: seq.len(),
        consistent,
        runs,
    })
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Each `run_*` prints its result and returns the parameter string recorded
/// in the operation history.
pub fn run_search(seq: &[u8], pattern: &[u8], opt: SearchOpt, json: bool) -> Result<String> {
    let run = timed_search(seq, pattern, opt.algorithm);
    debug!(algorithm = %opt.algorithm, matches = run.matches, "search finished");
    let pat = String::from_utf8_lossy(pattern);

    if json {
        print_json(&run)?;
    } else {
        println!("Searching for pattern '{}' using {}...", pat, run.name);
        println!("Found {} matches in {:.6} seconds.", run.matches, run.seconds);
        if !run.positions.is_empty() {
            let shown = run.positions.len().min(opt.show);
            println!("First {} positions:", shown);
            for p in &run.positions[..shown] {
                println!("  {}", p);
            }
            if run.positions.len() > shown {
                println!("  ... and {} more", run.positions.len() - shown);
            }
        }
    }

    Ok(format!(
        "Pattern: {}, Algorithm: {}, Found: {}, Time: {:.6}s",
        pat, run.name, run.matches, run.seconds
    ))
}

pub fn run_compare(seq: &[u8], pattern: &[u8], threads: usize, json: bool) -> Result<String> {
    let report = compare_all(seq, pattern, threads)?;

    if json {
        print_json(&report)?;
    } else {
        println!("=== Comparing All Search Algorithms ===");
        println!("Pattern: '{}' in sequence of length {}", report.pattern, report.seq_len);
        if !report.consistent {
            println!("WARNING: Algorithms found different matches!");
        }
        println!("Performance Ranking:");
        for (i, r) in report.runs.iter().enumerate() {
            println!("  {}. {}: {:.6} seconds ({} matches)", i + 1, r.name, r.seconds, r.matches);
        }
    }

    let best = &report.runs[0];
    Ok(format!("Pattern: {}, Best: {}, Time: {:.6}s", report.pattern, best.name, best.seconds))
}

pub fn run_kmers(seq: &[u8], opt: &KmerOpt, json: bool) -> Result<String> {
    let report = kmer::analyze(seq, opt);

    if json {
        print_json(&report)?;
    } else if report.top.is_empty() {
        println!("No {}-mers (sequence length {}).", opt.k, seq.len());
    } else {
        println!("Top {} most frequent {}-mers [{}]:", report.top.len(), opt.k, report.strategy);
        for (i, e) in report.top.iter().enumerate() {
            println!("{:>3}. {} : {} times", i + 1, String::from_utf8_lossy(&e.kmer), e.count);
        }
        println!("Distinct: {}, total windows: {}", report.distinct, report.total);
        match report.probe_count {
            Some(c) => println!("Index contains '{}': yes (count {})", report.probe, c),
            None => println!("Index contains '{}': no", report.probe),
        }
    }

    Ok(format!("k={}, Algorithm={}", opt.k, opt.strategy))
}

pub fn run_gc(seq: &[u8]) -> String {
    let gc = dna::gc_content(seq);
    println!("GC Content: {:.2}% ({} GC content)", gc, dna::gc_class(gc));
    format!("Result: {:.2}%", gc)
}

pub fn run_sry(seq: &[u8]) -> String {
    let found = dna::contains_sry(seq);
    if found {
        println!("SRY gene marker found. Likely MALE.");
    } else {
        println!("SRY gene marker not found. Likely FEMALE or no Y chromosome.");
    }
    let answer = if found { "Yes" } else { "No" };
    answer.to_string()
}

#[derive(Debug, Serialize)]
pub struct InfoReport {
    pub header: String,
    pub length: usize,
    pub gc_percent: f64,
    pub composition: dna::BaseComposition,
}

pub fn info_report(header: &str, seq: &[u8]) -> InfoReport {
    InfoReport {
        header: header.to_string(),
        length: seq.len(),
        gc_percent: dna::gc_content(seq),
        composition: dna::base_composition(seq),
    }
}

pub fn run_info(header: &str, seq: &[u8], json: bool) -> Result<String> {
    let report = info_report(header, seq);
    let len = report.length;

    if json {
        print_json(&report)?;
    } else {
        let pct = |n: usize| if len == 0 { 0.0 } else { n as f64 * 100.0 / len as f64 };
        let comp = report.composition;
        println!("Header: {}", report.header);
        println!("Length: {} bp ({:.6} Mbp)", len, len as f64 / 1_000_000.0);
        println!("Base composition:");
        for (base, n) in [('A', comp.a), ('C', comp.c), ('G', comp.g), ('T', comp.t)] {
            println!("  {}: {} ({:.2}%)", base, n, pct(n));
        }
        if comp.n > 0 {
            println!("  N: {} ({:.2}%)", comp.n, pct(comp.n));
        }
    }
    Ok(format!("Length: {}", len))
}

pub fn run_validate(seq: &[u8]) -> String {
    let full = dna::is_valid_dna(seq);
    let quick = dna::quick_validation(seq);
    let verdict = |ok: bool| if ok { "VALID" } else { "INVALID" };
    println!("Full Validation: {}", verdict(full));
    println!("Quick Validation: {}", verdict(quick));
    println!("Sequence Hash: {}", dna::sequence_hash(seq));
    format!("Full: {}, Quick: {}", verdict(full), verdict(quick))
}
