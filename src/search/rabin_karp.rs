const BASE: u64 = 256;
const PRIME: u64 = 101;

/// Rabin-Karp 精确匹配。
///
/// 滚动多项式哈希（基数 256，模 101）；哈希相等时逐字节确认以排除碰撞。
/// 窗口移动为 O(1)：减去移出字节的贡献（先加 PRIME 保持在 [0, PRIME) 内），
/// 乘以基数后加入新字节。
pub fn rabin_karp(text: &[u8], pat: &[u8]) -> Vec<usize> {
    let n = text.len();
    let m = pat.len();
    let mut out = Vec::new();
    if m == 0 || n == 0 || m > n {
        return out;
    }

    // h = BASE^(m-1) mod PRIME，即窗口最高位的权重
    let mut h = 1u64;
    for _ in 0..m - 1 {
        h = (h * BASE) % PRIME;
    }

    let mut pat_hash = 0u64;
    let mut win_hash = 0u64;
    for i in 0..m {
        pat_hash = (BASE * pat_hash + pat[i] as u64) % PRIME;
        win_hash = (BASE * win_hash + text[i] as u64) % PRIME;
    }

    for i in 0..=n - m {
        if pat_hash == win_hash && text[i..i + m] == *pat {
            out.push(i);
        }
        if i < n - m {
            let outgoing = (text[i] as u64 * h) % PRIME;
            win_hash = (win_hash + PRIME - outgoing) % PRIME;
            win_hash = (win_hash * BASE + text[i + m] as u64) % PRIME;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn direct_hash(s: &[u8]) -> u64 {
        s.iter().fold(0u64, |acc, &b| (acc * BASE + b as u64) % PRIME)
    }

    #[test]
    fn rk_basic() {
        assert_eq!(rabin_karp(b"AAAA", b"AA"), vec![0, 1, 2]);
        assert_eq!(rabin_karp(b"ABABDABACDABABCABAB", b"ABABCABAB"), vec![10]);
        assert_eq!(rabin_karp(b"TTTTT", b"G"), Vec::<usize>::new());
    }

    #[test]
    fn rk_rejects_hash_collisions() {
        // 找一对哈希相同但内容不同的 2 字节串
        let target = direct_hash(b"AC");
        let mut collider = None;
        'outer: for a in b'A'..=b'Z' {
            for b in b'A'..=b'Z' {
                let cand = [a, b];
                if &cand != b"AC" && direct_hash(&cand) == target {
                    collider = Some(cand);
                    break 'outer;
                }
            }
        }
        let collider = collider.expect("a collision exists for modulus 101");
        let mut text = collider.to_vec();
        text.extend_from_slice(b"AC");
        assert_eq!(rabin_karp(&text, b"AC"), vec![2]);
    }

    #[test]
    fn rk_single_byte_pattern() {
        assert_eq!(rabin_karp(b"ACGTACGT", b"G"), vec![2, 6]);
    }

    #[test]
    fn rk_degenerate_inputs() {
        assert!(rabin_karp(b"ACGT", b"").is_empty());
        assert!(rabin_karp(b"", b"A").is_empty());
        assert!(rabin_karp(b"ACG", b"ACGT").is_empty());
    }
}
