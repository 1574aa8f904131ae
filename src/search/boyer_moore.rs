/// 坏字符表：每个字节在模式中最右出现的下标，未出现为 -1。
fn last_occurrence(pat: &[u8]) -> [isize; 256] {
    let mut last = [-1isize; 256];
    for (i, &b) in pat.iter().enumerate() {
        last[b as usize] = i as isize;
    }
    last
}

/// Boyer-Moore 精确匹配（仅坏字符启发式，无好后缀表）。
///
/// 每个对齐位置从右向左比较：
/// - 失配于下标 j 时，右移 `max(1, j - last[text[s + j]])`；
/// - 完全匹配时，用窗口后一个字节 `text[s + m]` 查表右移 `m - last[..]`，
///   到达文本末尾则右移 1。两种位移都钳制为至少 1，保证前进且不漏掉重叠匹配。
pub fn boyer_moore(text: &[u8], pat: &[u8]) -> Vec<usize> {
    let n = text.len();
    let m = pat.len();
    let mut out = Vec::new();
    if m == 0 || n == 0 || m > n {
        return out;
    }

    let last = last_occurrence(pat);
    let mut s = 0usize;
    while s <= n - m {
        // 从右向左找第一个失配位置
        let mut j = m;
        while j > 0 && pat[j - 1] == text[s + j - 1] {
            j -= 1;
        }

        let step = if j == 0 {
            out.push(s);
            if s + m < n {
                m as isize - last[text[s + m] as usize]
            } else {
                1
            }
        } else {
            let mis = j - 1;
            mis as isize - last[text[s + mis] as usize]
        };
        s += step.max(1) as usize;
    }
    out
}
