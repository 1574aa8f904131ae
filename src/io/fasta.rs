use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::{info, warn};

use crate::error::{AnalyzerError, Result};
use crate::util::dna;

#[derive(Debug, Clone)]
pub struct FastaRecord {
    /// Header line exactly as written, without the leading '>' and line ending.
    pub header: String,
    pub id: String,
    pub desc: Option<String>,
    pub seq: Vec<u8>,
}

pub struct FastaReader<R: BufRead> {
    reader: R,
    buf: Vec<u8>,
    done: bool,
    peek_header: Option<String>,
    leading: Vec<u8>,
}

fn header_text(line: &[u8]) -> String {
    let mut end = line.len();
    while end > 1 && matches!(line[end - 1], b'\n' | b'\r') {
        end -= 1;
    }
    String::from_utf8_lossy(&line[1..end]).into_owned()
}

fn push_bases(seq: &mut Vec<u8>, line: &[u8]) {
    for &b in line {
        if !b.is_ascii_whitespace() {
            seq.push(b.to_ascii_uppercase());
        }
    }
}

impl<R: BufRead> FastaReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: Vec::new(),
            done: false,
            peek_header: None,
            leading: Vec::new(),
        }
    }

    /// True when a header for another record has already been seen.
    pub fn has_more(&self) -> bool {
        self.peek_header.is_some()
    }

    /// Sequence bytes found before the first header line.
    pub fn take_leading(&mut self) -> Vec<u8> {
        std::mem::take(&mut self.leading)
    }

    pub fn next_record(&mut self) -> Result<Option<FastaRecord>> {
        if self.done && self.peek_header.is_none() {
            return Ok(None);
        }

        // Find header line; anything before it is kept aside in `leading`
        let header = if let Some(h) = self.peek_header.take() {
            h
        } else {
            loop {
                self.buf.clear();
                let n = self.reader.read_until(b'\n', &mut self.buf)?;
                if n == 0 {
                    self.done = true;
                    return Ok(None);
                }
                if self.buf.first() == Some(&b'>') {
                    break header_text(&self.buf);
                }
                push_bases(&mut self.leading, &self.buf);
            }
        };

        let mut parts = header.trim().splitn(2, char::is_whitespace);
        let id = parts.next().unwrap_or("").to_string();
        let desc = parts
            .next()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        // Read sequence lines
        let mut seq: Vec<u8> = Vec::new();
        loop {
            self.buf.clear();
            let n = self.reader.read_until(b'\n', &mut self.buf)?;
            if n == 0 {
                self.done = true;
                break;
            }
            if self.buf.first() == Some(&b'>') {
                self.peek_header = Some(header_text(&self.buf));
                break;
            }
            push_bases(&mut seq, &self.buf);
        }

        Ok(Some(FastaRecord { header, id, desc, seq }))
    }
}

/// A sanitized sequence ready for analysis.
#[derive(Debug, Clone)]
pub struct LoadedSequence {
    pub header: String,
    pub seq: Vec<u8>,
    /// Number of bytes outside {A,C,G,T,N} that were replaced with 'N'.
    pub replaced: usize,
}

/// Load the first record of a FASTA file, uppercased, with every byte
/// outside {A,C,G,T,N} replaced by 'N'. Sequence lines that precede the
/// first header are kept at the front of the sequence.
pub fn load_fasta<P: AsRef<Path>>(path: P) -> Result<LoadedSequence> {
    let path = path.as_ref();
    let shown = path.display().to_string();
    if !path.exists() {
        return Err(AnalyzerError::FileNotFound(shown));
    }
    info!(path = %shown, "loading FASTA");

    let fh = File::open(path)?;
    let mut reader = FastaReader::new(BufReader::new(fh));
    let rec = reader
        .next_record()?
        .ok_or_else(|| AnalyzerError::MissingHeader(shown.clone()))?;
    if reader.has_more() {
        warn!(path = %shown, "multiple sequences in file, loading only the first");
    }

    let mut raw = reader.take_leading();
    if !raw.is_empty() {
        warn!(bases = raw.len(), "sequence data before the first header");
    }
    raw.extend_from_slice(&rec.seq);
    let header = rec.header;
    let (seq, replaced) = dna::sanitize_seq(&raw);
    if seq.is_empty() {
        return Err(AnalyzerError::EmptySequence(shown));
    }
    if replaced > 0 {
        warn!(replaced, "replaced invalid characters with 'N'");
    }
    info!(bases = seq.len(), "loaded sequence");

    Ok(LoadedSequence { header, seq, replaced })
}
