use serde::Serialize;

use crate::search::kmp;

/// SRY 基因标记片段
pub const SRY_MARKER: &[u8] = b"TCCAGTTTTGTTACAGGG";

#[inline]
fn is_base(b: u8) -> bool {
    matches!(b, b'A' | b'C' | b'G' | b'T' | b'N')
}

/// 转大写，{A,C,G,T,N} 以外的字节替换为 N；返回 (序列, 替换个数)。
pub fn sanitize_seq(seq: &[u8]) -> (Vec<u8>, usize) {
    let mut out = Vec::with_capacity(seq.len());
    let mut replaced = 0usize;
    for &b in seq {
        let up = b.to_ascii_uppercase();
        if is_base(up) {
            out.push(up);
        } else {
            replaced += 1;
            out.push(b'N');
        }
    }
    (out, replaced)
}

/// GC 含量百分比，空序列为 0
pub fn gc_content(seq: &[u8]) -> f64 {
    if seq.is_empty() {
        return 0.0;
    }
    let gc = seq.iter().filter(|&&b| b == b'G' || b == b'C').count();
    gc as f64 * 100.0 / seq.len() as f64
}

pub fn gc_class(gc: f64) -> &'static str {
    if gc < 40.0 {
        "low"
    } else if gc > 55.0 {
        "high"
    } else {
        "moderate"
    }
}

pub fn contains_sry(seq: &[u8]) -> bool {
    !kmp(seq, SRY_MARKER).is_empty()
}

#[inline]
pub fn complement(base: u8) -> u8 {
    match base {
        b'A' => b'T',
        b'C' => b'G',
        b'G' => b'C',
        b'T' => b'A',
        _ => b'N',
    }
}

pub fn revcomp(seq: &[u8]) -> Vec<u8> {
    seq.iter().rev().map(|&b| complement(b)).collect()
}

/// 严格校验：仅允许大写 ACGTN
pub fn is_valid_dna(seq: &[u8]) -> bool {
    seq.iter().all(|&b| is_base(b))
}

const VALID_LUT: [bool; 256] = {
    let mut t = [false; 256];
    let chars = *b"ACGTNacgtn";
    let mut i = 0;
    while i < chars.len() {
        t[chars[i] as usize] = true;
        i += 1;
    }
    t
};

/// 查表校验，大小写 ACGTN 均接受
pub fn quick_validation(seq: &[u8]) -> bool {
    seq.iter().all(|&b| VALID_LUT[b as usize])
}

/// 多项式哈希（素数 31，A=1 C=2 G=3 T=4 其他=5），溢出回绕
pub fn sequence_hash(seq: &[u8]) -> u64 {
    seq.iter().fold(0u64, |h, &b| {
        let v = match b.to_ascii_uppercase() {
            b'A' => 1,
            b'C' => 2,
            b'G' => 3,
            b'T' => 4,
            _ => 5,
        };
        h.wrapping_mul(31).wrapping_add(v)
    })
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BaseComposition {
    pub a: usize,
    pub c: usize,
    pub g: usize,
    pub t: usize,
    pub n: usize,
}

pub fn base_composition(seq: &[u8]) -> BaseComposition {
    let mut comp = BaseComposition::default();
    for &b in seq {
        match b {
            b'A' => comp.a += 1,
            b'C' => comp.c += 1,
            b'G' => comp.g += 1,
            b'T' => comp.t += 1,
            b'N' => comp.n += 1,
            _ => {}
        }
    }
    comp
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_counts_replacements() {
        let (s, n) = sanitize_seq(b"acgtURx-N");
        assert_eq!(s, b"ACGTNNNNN");
        assert_eq!(n, 4);
    }

    #[test]
    fn gc_content_and_class() {
        assert_eq!(gc_content(b""), 0.0);
        assert!((gc_content(b"GGCCAATT") - 50.0).abs() < 1e-9);
        assert_eq!(gc_class(30.0), "low");
        assert_eq!(gc_class(50.0), "moderate");
        assert_eq!(gc_class(60.0), "high");
    }

    #[test]
    fn sry_marker_detection() {
        let mut seq = b"ACGTACGT".to_vec();
        assert!(!contains_sry(&seq));
        seq.extend_from_slice(SRY_MARKER);
        seq.extend_from_slice(b"AAAA");
        assert!(contains_sry(&seq));
    }

    #[test]
    fn revcomp_maps_unknown_to_n() {
        assert_eq!(revcomp(b"AACGTX"), b"NACGTT");
    }

    #[test]
    fn validation_modes() {
        assert!(is_valid_dna(b"ACGTN"));
        assert!(!is_valid_dna(b"acgt"));
        assert!(quick_validation(b"acgtNN"));
        assert!(!quick_validation(b"ACGU"));
    }

    #[test]
    fn hash_is_case_insensitive_polynomial() {
        assert_eq!(sequence_hash(b"AC"), 31 + 2);
        assert_eq!(sequence_hash(b"ac"), sequence_hash(b"AC"));
        assert_eq!(sequence_hash(b""), 0);
    }

    #[test]
    fn composition_counts() {
        let c = base_composition(b"AACGTTTN");
        assert_eq!(c, BaseComposition { a: 2, c: 1, g: 1, t: 3, n: 1 });
    }
}
