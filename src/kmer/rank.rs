use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use super::count::KmerTable;
use crate::error::AnalyzerError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedEntry {
    #[serde(serialize_with = "bytes_as_text")]
    pub kmer: Vec<u8>,
    pub count: usize,
}

fn bytes_as_text<S: Serializer>(bytes: &[u8], s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(&String::from_utf8_lossy(bytes))
}

/// Top-N 选取策略
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// 全量排序后截断：O(d log d) 时间，O(d) 额外空间
    #[default]
    Sort,
    /// 容量为 N 的最小堆：O(d log N) 时间，O(N) 额外空间
    Heap,
}

impl Strategy {
    pub fn toggled(self) -> Self {
        match self {
            Strategy::Sort => Strategy::Heap,
            Strategy::Heap => Strategy::Sort,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Strategy::Sort => "sort",
            Strategy::Heap => "heap",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = AnalyzerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sort" | "sorting" => Ok(Strategy::Sort),
            "heap" => Ok(Strategy::Heap),
            _ => Err(AnalyzerError::UnknownStrategy(s.to_string())),
        }
    }
}

/// 按出现次数降序返回至多 `n` 个 k-mer。
///
/// 两种策略在每个名次上的计数一致；当并列计数跨越第 N 名边界时，
/// 入选的具体 k-mer 可能不同。
pub fn top_kmers(table: &KmerTable, n: usize, strategy: Strategy) -> Vec<RankedEntry> {
    match strategy {
        Strategy::Sort => top_by_sort(table, n),
        Strategy::Heap => top_by_heap(table, n),
    }
}

/// 全量排序（稳定排序，并列时保留表的迭代顺序）
pub fn top_by_sort(table: &KmerTable, n: usize) -> Vec<RankedEntry> {
    let mut all: Vec<(&Vec<u8>, usize)> = table.iter().map(|(k, &c)| (k, c)).collect();
    all.sort_by(|a, b| b.1.cmp(&a.1));
    all.truncate(n);
    all.into_iter()
        .map(|(kmer, count)| RankedEntry { kmer: kmer.clone(), count })
        .collect()
}

/// 有界最小堆：堆未满直接入堆；否则仅当计数严格大于堆顶最小值时替换堆顶。
/// 最后依次弹出（升序）再反转得到降序。
pub fn top_by_heap(table: &KmerTable, n: usize) -> Vec<RankedEntry> {
    if n == 0 {
        return Vec::new();
    }
    let mut heap: BinaryHeap<Reverse<(usize, &[u8])>> = BinaryHeap::with_capacity(n + 1);
    for (kmer, &count) in table {
        if heap.len() < n {
            heap.push(Reverse((count, kmer.as_slice())));
        } else if let Some(Reverse((min, _))) = heap.peek() {
            if count > *min {
                heap.pop();
                heap.push(Reverse((count, kmer.as_slice())));
            }
        }
    }

    let mut out = Vec::with_capacity(heap.len());
    while let Some(Reverse((count, kmer))) = heap.pop() {
        out.push(RankedEntry { kmer: kmer.to_vec(), count });
    }
    out.reverse();
    out
}
