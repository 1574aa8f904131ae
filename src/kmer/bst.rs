use std::cmp::Ordering;

use super::count::KmerTable;

#[derive(Debug)]
struct Node {
    kmer: Vec<u8>,
    count: usize,
    left: Option<Box<Node>>,
    right: Option<Box<Node>>,
}

impl Node {
    fn new(kmer: Vec<u8>, count: usize) -> Self {
        Self { kmer, count, left: None, right: None }
    }
}

/// 按字典序组织的 k-mer 二叉搜索树，键为 k-mer，值为累计计数。
///
/// 不做再平衡：随机插入顺序下深度期望 O(log n)，有序插入时退化为 O(n) 的链。
/// 这是有意接受的取舍。为避免退化树在深链上递归爆栈，插入、查找、
/// 中序遍历与释放均为迭代实现。
///
/// 每个节点独占其左右子树；树本身独占根节点，节点从不对外暴露。
#[derive(Debug, Default)]
pub struct KmerIndex {
    root: Option<Box<Node>>,
    len: usize,
}

impl KmerIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// 将频率表中的每个 (k-mer, count) 插入一棵新树。
    pub fn from_table(table: &KmerTable) -> Self {
        let mut idx = Self::new();
        for (kmer, &count) in table {
            idx.insert(kmer, count);
        }
        idx
    }

    /// 累加 `kmer` 的计数；不存在时新建节点。
    pub fn insert(&mut self, kmer: &[u8], count: usize) {
        let mut slot = &mut self.root;
        while let Some(node) = slot {
            match kmer.cmp(node.kmer.as_slice()) {
                Ordering::Less => slot = &mut node.left,
                Ordering::Greater => slot = &mut node.right,
                Ordering::Equal => {
                    node.count += count;
                    return;
                }
            }
        }
        *slot = Some(Box::new(Node::new(kmer.to_vec(), count)));
        self.len += 1;
    }

    fn find(&self, kmer: &[u8]) -> Option<&Node> {
        let mut cur = self.root.as_deref();
        while let Some(node) = cur {
            cur = match kmer.cmp(node.kmer.as_slice()) {
                Ordering::Less => node.left.as_deref(),
                Ordering::Greater => node.right.as_deref(),
                Ordering::Equal => return Some(node),
            };
        }
        None
    }

    pub fn contains(&self, kmer: &[u8]) -> bool {
        self.find(kmer).is_some()
    }

    /// 累计计数，不存在返回 0。
    pub fn get(&self, kmer: &[u8]) -> usize {
        self.find(kmer).map_or(0, |n| n.count)
    }

    /// 中序遍历，按键严格升序返回全部 (k-mer, count)。
    pub fn all_entries(&self) -> Vec<(Vec<u8>, usize)> {
        let mut out = Vec::with_capacity(self.len);
        let mut stack: Vec<&Node> = Vec::new();
        let mut cur = self.root.as_deref();
        loop {
            while let Some(node) = cur {
                stack.push(node);
                cur = node.left.as_deref();
            }
            match stack.pop() {
                Some(node) => {
                    out.push((node.kmer.clone(), node.count));
                    cur = node.right.as_deref();
                }
                None => break,
            }
        }
        out
    }

    /// 不同 k-mer 的个数（节点数）
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// 树高（空树为 0）
    pub fn depth(&self) -> usize {
        let mut max = 0usize;
        let mut stack: Vec<(&Node, usize)> = self.root.as_deref().map(|n| (n, 1)).into_iter().collect();
        while let Some((node, d)) = stack.pop() {
            max = max.max(d);
            if let Some(l) = node.left.as_deref() {
                stack.push((l, d + 1));
            }
            if let Some(r) = node.right.as_deref() {
                stack.push((r, d + 1));
            }
        }
        max
    }

    /// 释放全部节点；之后可继续插入。
    pub fn clear(&mut self) {
        // 先摘下子树再丢弃节点，使 Box 的析构不发生递归
        let mut pending: Vec<Box<Node>> = self.root.take().into_iter().collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
        }
        self.len = 0;
    }
}

impl Drop for KmerIndex {
    fn drop(&mut self) {
        self.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kmer::count::count_kmers;

    #[test]
    fn insert_accumulates_existing_key() {
        let mut idx = KmerIndex::new();
        idx.insert(b"ACG", 2);
        idx.insert(b"ACG", 3);
        idx.insert(b"TTT", 1);
        assert_eq!(idx.len(), 2);
        assert_eq!(idx.get(b"ACG"), 5);
        assert!(idx.contains(b"TTT"));
        assert!(!idx.contains(b"GGG"));
        assert_eq!(idx.get(b"GGG"), 0);
    }

    #[test]
    fn entries_are_in_ascending_order() {
        let t = count_kmers(b"GATTACAGATTACACCGT", 3);
        let idx = KmerIndex::from_table(&t);
        let entries = idx.all_entries();
        assert_eq!(entries.len(), t.len());
        assert!(entries.windows(2).all(|w| w[0].0 < w[1].0));
        for (kmer, count) in &entries {
            assert_eq!(t[kmer], *count);
            assert_eq!(idx.get(kmer), *count);
        }
    }

    #[test]
    fn prefix_keys_order_before_extensions() {
        let mut idx = KmerIndex::new();
        for k in [&b"AC"[..], b"A", b"ACG", b"B"] {
            idx.insert(k, 1);
        }
        let keys: Vec<Vec<u8>> = idx.all_entries().into_iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec![b"A".to_vec(), b"AC".to_vec(), b"ACG".to_vec(), b"B".to_vec()]);
    }

    #[test]
    fn sorted_insertion_degenerates_to_chain() {
        let mut idx = KmerIndex::new();
        for i in 0..200u32 {
            idx.insert(format!("{:05}", i).as_bytes(), 1);
        }
        assert_eq!(idx.depth(), 200);
        assert_eq!(idx.all_entries().len(), 200);
    }

    #[test]
    fn deep_chain_clear_and_drop() {
        let mut idx = KmerIndex::new();
        for i in 0..20_000u32 {
            idx.insert(&i.to_be_bytes(), 1);
        }
        assert_eq!(idx.len(), 20_000);
        assert_eq!(idx.get(&19_999u32.to_be_bytes()), 1);
        drop(idx);
    }

    #[test]
    fn clear_then_reuse() {
        let mut idx = KmerIndex::from_table(&count_kmers(b"ACGTACGT", 2));
        assert!(!idx.is_empty());
        idx.clear();
        assert!(idx.all_entries().is_empty());
        assert_eq!(idx.depth(), 0);
        assert!(!idx.contains(b"AC"));
        idx.insert(b"GG", 7);
        assert_eq!(idx.all_entries(), vec![(b"GG".to_vec(), 7)]);
    }
}
