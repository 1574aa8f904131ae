//! # dna-analyzer
//!
//! DNA 序列的精确模式搜索与 k-mer 频率分析。
//!
//! 本 crate 提供：
//!
//! - **模式搜索**：KMP、Boyer-Moore（坏字符）、Rabin-Karp、朴素扫描，四者结果一致
//! - **k-mer 计数**：滑动窗口频率表
//! - **Top-N 选取**：全量排序或有界最小堆两种策略
//! - **k-mer 索引**：按字典序的二叉搜索树，支持点查询与有序遍历
//!
//! ## 快速示例
//!
//! ```rust
//! use dna_analyzer::search::{search, Algorithm};
//! use dna_analyzer::kmer::{count_kmers, top_kmers, KmerIndex, Strategy};
//!
//! let seq = b"ACGTACGTAGCTGATCGTAG";
//! assert_eq!(search(seq, b"CGTA", Algorithm::BoyerMoore), vec![1, 5, 15]);
//!
//! let table = count_kmers(seq, 3);
//! let top = top_kmers(&table, 3, Strategy::Heap);
//! assert_eq!(top[0].count, 3);
//!
//! let index = KmerIndex::from_table(&table);
//! assert_eq!(index.get(b"CGT"), 3);
//! ```
//!
//! ## 模块说明
//!
//! - [`search`] — 四种精确匹配算法与统一入口 [`search::search`]
//! - [`kmer`] — k-mer 计数、排名与有序索引
//! - [`io`] — FASTA 解析与序列加载
//! - [`util`] — GC 含量、SRY 标记、校验等工具函数
//! - [`history`] — 会话操作记录

pub mod error;
pub mod history;
pub mod io;
pub mod kmer;
pub mod search;
pub mod util;

pub use error::{AnalyzerError, Result};
