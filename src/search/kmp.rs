/// 构建 KMP 失败函数（LPS 表）。
/// `lps[i]` 为 `pat[..=i]` 的最长真前缀（同时也是后缀）的长度，O(m) 时间。
pub fn build_lps(pat: &[u8]) -> Vec<usize> {
    let m = pat.len();
    let mut lps = vec![0usize; m];
    let mut len = 0usize;
    let mut i = 1usize;
    while i < m {
        if pat[i] == pat[len] {
            len += 1;
            lps[i] = len;
            i += 1;
        } else if len != 0 {
            // 回退到次长的前后缀，i 不动
            len = lps[len - 1];
        } else {
            lps[i] = 0;
            i += 1;
        }
    }
    lps
}

/// Knuth-Morris-Pratt 精确匹配，返回所有（含重叠）出现的起始位置。
/// 文本指针只前进不回退，总复杂度 O(n + m)。
pub fn kmp(text: &[u8], pat: &[u8]) -> Vec<usize> {
    let n = text.len();
    let m = pat.len();
    let mut out = Vec::new();
    if m == 0 || n == 0 || m > n {
        return out;
    }

    let lps = build_lps(pat);
    let mut i = 0usize; // text
    let mut j = 0usize; // pattern
    while i < n {
        if text[i] == pat[j] {
            i += 1;
            j += 1;
            if j == m {
                out.push(i - j);
                j = lps[j - 1];
            }
        } else if j != 0 {
            j = lps[j - 1];
        } else {
            i += 1;
        }
    }
    out
}
