use std::collections::VecDeque;
use std::fmt;

use chrono::{DateTime, Local};

pub const DEFAULT_CAPACITY: usize = 50;

#[derive(Debug, Clone)]
pub struct Operation {
    /// 1-based sequence number, keeps counting after eviction
    pub seq: usize,
    pub name: String,
    pub params: String,
    pub at: DateTime<Local>,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:>2}. [{}] {}", self.seq, self.at.format("%H:%M:%S"), self.name)?;
        if !self.params.is_empty() {
            write!(f, " - {}", self.params)?;
        }
        Ok(())
    }
}

/// Bounded record of operations performed in a session. Once full, the
/// oldest entry is evicted for each new one.
#[derive(Debug)]
pub struct OperationHistory {
    entries: VecDeque<Operation>,
    capacity: usize,
    recorded: usize,
}

impl Default for OperationHistory {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
}

impl OperationHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self { entries: VecDeque::with_capacity(capacity), capacity, recorded: 0 }
    }

    pub fn record(&mut self, name: impl Into<String>, params: impl Into<String>) {
        if self.capacity == 0 {
            return;
        }
        self.recorded += 1;
        self.entries.push_back(Operation {
            seq: self.recorded,
            name: name.into(),
            params: params.into(),
            at: Local::now(),
        });
        while self.entries.len() > self.capacity {
            self.entries.pop_front();
        }
    }

    /// The last `n` operations, oldest first.
    pub fn recent(&self, n: usize) -> impl Iterator<Item = &Operation> {
        let skip = self.entries.len().saturating_sub(n);
        self.entries.iter().skip(skip)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
