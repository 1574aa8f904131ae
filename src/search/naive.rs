/// 朴素逐位比较，O(n * m)。作为其他算法的正确性参照和性能基线。
pub fn naive(text: &[u8], pat: &[u8]) -> Vec<usize> {
    let n = text.len();
    let m = pat.len();
    let mut out = Vec::new();
    if m == 0 || n == 0 || m > n {
        return out;
    }
    for i in 0..=n - m {
        let mut found = true;
        for j in 0..m {
            if text[i + j] != pat[j] {
                found = false;
                break;
            }
        }
        if found {
            out.push(i);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn naive_basic() {
        assert_eq!(naive(b"AAAA", b"AA"), vec![0, 1, 2]);
        assert_eq!(naive(b"ACGTACGT", b"CGT"), vec![1, 5]);
        assert!(naive(b"ACGT", b"").is_empty());
        assert!(naive(b"", b"A").is_empty());
        assert!(naive(b"A", b"AC").is_empty());
    }
}
