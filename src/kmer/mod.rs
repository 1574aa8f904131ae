//! k-mer 计数、Top-N 选取与有序索引。

use serde::Serialize;
use tracing::debug;

pub mod bst;
pub mod count;
pub mod rank;

pub use bst::KmerIndex;
pub use count::{count_kmers, total_occurrences, KmerTable};
pub use rank::{top_kmers, RankedEntry, Strategy};

/// k-mer 分析参数
#[derive(Debug, Clone)]
pub struct KmerOpt {
    pub k: usize,
    pub top: usize,
    pub strategy: Strategy,
    /// 在 KmerIndex 中查询的 k-mer
    pub probe: Vec<u8>,
}

impl Default for KmerOpt {
    fn default() -> Self {
        Self { k: 3, top: 10, strategy: Strategy::Sort, probe: b"ATG".to_vec() }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct KmerReport {
    pub k: usize,
    /// 窗口总数，即 L - k + 1（k 越界时为 0）
    pub total: usize,
    pub distinct: usize,
    pub strategy: Strategy,
    pub top: Vec<RankedEntry>,
    pub probe: String,
    /// probe 在索引中的计数；不在索引中为 None
    pub probe_count: Option<usize>,
}

/// 计数 -> Top-N -> 建索引并查询 probe。
pub fn analyze(seq: &[u8], opt: &KmerOpt) -> KmerReport {
    let table = count_kmers(seq, opt.k);
    let total = total_occurrences(&table);
    let top = top_kmers(&table, opt.top, opt.strategy);

    let index = KmerIndex::from_table(&table);
    let probe_count = index.contains(&opt.probe).then(|| index.get(&opt.probe));
    debug!(k = opt.k, distinct = table.len(), depth = index.depth(), "k-mer index built");

    KmerReport {
        k: opt.k,
        total,
        distinct: table.len(),
        strategy: opt.strategy,
        top,
        probe: String::from_utf8_lossy(&opt.probe).into_owned(),
        probe_count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn analyze_reports_probe_and_totals() {
        let opt = KmerOpt { k: 3, top: 2, strategy: Strategy::Heap, probe: b"ATG".to_vec() };
        let r = analyze(b"ATGATGCATG", &opt);
        assert_eq!(r.total, 8);
        assert_eq!(r.probe_count, Some(3));
        assert_eq!(r.top[0].kmer, b"ATG");
        assert_eq!(r.top[0].count, 3);
        assert_eq!(r.top.len(), 2);
    }

    #[test]
    fn analyze_with_oversized_k_is_empty() {
        let opt = KmerOpt { k: 20, ..KmerOpt::default() };
        let r = analyze(b"ACGT", &opt);
        assert_eq!(r.total, 0);
        assert_eq!(r.distinct, 0);
        assert!(r.top.is_empty());
        assert_eq!(r.probe_count, None);
    }
}
