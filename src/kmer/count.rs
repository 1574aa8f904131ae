use std::collections::HashMap;

/// k-mer -> 出现次数。键唯一，迭代顺序无保证。
pub type KmerTable = HashMap<Vec<u8>, usize>;

/// 以长度 k 的滑动窗口统计 `seq` 中所有 k-mer（步长 1，按原始字节区分大小写）。
/// `k == 0` 或 `k > seq.len()` 时返回空表。
pub fn count_kmers(seq: &[u8], k: usize) -> KmerTable {
    let mut table = KmerTable::new();
    if k == 0 || k > seq.len() {
        return table;
    }
    for win in seq.windows(k) {
        // 命中已有键时不分配
        if let Some(c) = table.get_mut(win) {
            *c += 1;
        } else {
            table.insert(win.to_vec(), 1);
        }
    }
    table
}

/// 表中记录的 k-mer 出现总数（对长度 L 的序列应为 L - k + 1）。
pub fn total_occurrences(table: &KmerTable) -> usize {
    table.values().sum()
}
