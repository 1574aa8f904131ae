//! 精确模式匹配：KMP、Boyer-Moore、Rabin-Karp 与朴素扫描。
//!
//! 四种算法都是 `(text, pattern) -> 起始位置` 的纯函数，结果严格递增并包含重叠匹配。
//! 空模式、空文本或模式长于文本时返回空结果（不是错误）。

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::AnalyzerError;

pub mod boyer_moore;
pub mod kmp;
pub mod naive;
pub mod rabin_karp;

pub use boyer_moore::boyer_moore;
pub use kmp::kmp;
pub use naive::naive;
pub use rabin_karp::rabin_karp;

/// 匹配起始位置（0-based），按扫描顺序严格递增。
pub type MatchResult = Vec<usize>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Algorithm {
    Kmp,
    BoyerMoore,
    RabinKarp,
    Naive,
}

impl Algorithm {
    pub const ALL: [Algorithm; 4] = [
        Algorithm::Kmp,
        Algorithm::BoyerMoore,
        Algorithm::RabinKarp,
        Algorithm::Naive,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Kmp => "KMP (Knuth-Morris-Pratt)",
            Algorithm::BoyerMoore => "Boyer-Moore",
            Algorithm::RabinKarp => "Rabin-Karp",
            Algorithm::Naive => "Naive Search",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = AnalyzerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "kmp" | "1" => Ok(Algorithm::Kmp),
            "bm" | "boyer-moore" | "boyermoore" | "2" => Ok(Algorithm::BoyerMoore),
            "rk" | "rabin-karp" | "rabinkarp" | "3" => Ok(Algorithm::RabinKarp),
            "naive" | "4" => Ok(Algorithm::Naive),
            _ => Err(AnalyzerError::UnknownAlgorithm(s.to_string())),
        }
    }
}

/// 用指定算法搜索 `pattern` 在 `text` 中的全部出现位置。
pub fn search(text: &[u8], pattern: &[u8], algorithm: Algorithm) -> MatchResult {
    match algorithm {
        Algorithm::Kmp => kmp(text, pattern),
        Algorithm::BoyerMoore => boyer_moore(text, pattern),
        Algorithm::RabinKarp => rabin_karp(text, pattern),
        Algorithm::Naive => naive(text, pattern),
    }
}
