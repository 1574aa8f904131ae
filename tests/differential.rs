use std::collections::HashMap;

use dna_analyzer::kmer::{count_kmers, top_kmers, KmerIndex, Strategy as Ranking};
use dna_analyzer::search::{naive, search, Algorithm};
use proptest::prelude::*;

fn dna(max: usize) -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(prop::sample::select(b"ACGTN".to_vec()), 0..max)
}

/// Small alphabet so that repeats and overlaps are frequent.
fn binary(max: usize) -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(prop::sample::select(b"AB".to_vec()), 0..max)
}

proptest! {
    #[test]
    fn prop_matchers_agree_with_naive(text in dna(300), pattern in dna(8)) {
        let expected = naive(&text, &pattern);
        for algo in Algorithm::ALL {
            prop_assert_eq!(search(&text, &pattern, algo), expected.clone(), "{}", algo);
        }
    }

    #[test]
    fn prop_matchers_agree_on_repetitive_text(text in binary(200), pattern in binary(6)) {
        let expected = naive(&text, &pattern);
        for algo in Algorithm::ALL {
            let got = search(&text, &pattern, algo);
            prop_assert!(got.windows(2).all(|w| w[0] < w[1]));
            prop_assert_eq!(got, expected.clone(), "{}", algo);
        }
    }

    #[test]
    fn prop_pattern_taken_from_text_is_found(text in dna(200), start in 0usize..200, len in 1usize..12) {
        prop_assume!(start + len <= text.len());
        let pattern = &text[start..start + len];
        for algo in Algorithm::ALL {
            prop_assert!(search(&text, pattern, algo).contains(&start), "{}", algo);
        }
    }

    #[test]
    fn prop_kmer_total_is_window_count(seq in dna(300), k in 0usize..12) {
        let table = count_kmers(&seq, k);
        let total: usize = table.values().sum();
        if k == 0 || k > seq.len() {
            prop_assert!(table.is_empty());
        } else {
            prop_assert_eq!(total, seq.len() - k + 1);
            prop_assert!(table.keys().all(|key| key.len() == k));
        }
    }

    #[test]
    fn prop_sort_and_heap_rank_counts_match(seq in dna(400), k in 1usize..5, n in 0usize..20) {
        let table = count_kmers(&seq, k);
        let by_sort = top_kmers(&table, n, Ranking::Sort);
        let by_heap = top_kmers(&table, n, Ranking::Heap);
        let sc: Vec<usize> = by_sort.iter().map(|e| e.count).collect();
        let hc: Vec<usize> = by_heap.iter().map(|e| e.count).collect();
        prop_assert_eq!(sc, hc);
        prop_assert_eq!(by_sort.len(), n.min(table.len()));
        for e in by_sort.iter().chain(by_heap.iter()) {
            prop_assert_eq!(table[&e.kmer], e.count);
        }
    }

    #[test]
    fn prop_index_round_trip(seq in dna(300), k in 1usize..6) {
        let table = count_kmers(&seq, k);
        let index = KmerIndex::from_table(&table);
        let entries = index.all_entries();
        prop_assert!(entries.windows(2).all(|w| w[0].0 < w[1].0));
        let back: HashMap<Vec<u8>, usize> = entries.into_iter().collect();
        prop_assert_eq!(&back, &table);
        for (kmer, &count) in &table {
            prop_assert!(index.contains(kmer));
            prop_assert_eq!(index.get(kmer), count);
        }
    }

    #[test]
    fn prop_index_accumulates_double_insert(seq in dna(200), k in 1usize..4) {
        let table = count_kmers(&seq, k);
        let mut index = KmerIndex::from_table(&table);
        for (kmer, &count) in &table {
            index.insert(kmer, count);
        }
        prop_assert_eq!(index.len(), table.len());
        for (kmer, &count) in &table {
            prop_assert_eq!(index.get(kmer), 2 * count);
        }
        index.clear();
        prop_assert!(index.all_entries().is_empty());
    }
}
