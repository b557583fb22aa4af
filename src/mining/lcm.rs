//! Closed frequent-itemset enumeration in the LCM family.
//!
//! An itemset is closed iff no proper superset has the same support. The
//! miner enumerates exactly the closed frequent itemsets by
//! prefix-preserving closure extension: each recursion step extends a
//! closed itemset with one item larger than its core item, takes the
//! closure over the new occurrence set, and descends only when the closure
//! adds no item below the extension (which would mean the set is reachable
//! from a different prefix).
//!
//! Transactions must be sorted ascending and duplicate-free; membership
//! checks use binary search throughout.

use std::collections::BTreeMap;

use super::Itemset;
use crate::index::Transaction;

/// Closed frequent-itemset miner with relative minimum support.
#[derive(Debug, Clone, Copy)]
pub struct LcmMiner {
    /// Minimum support as a fraction of the transaction count, in `(0, 1]`.
    pub min_support: f64,
}

impl LcmMiner {
    pub fn new(min_support: f64) -> Self {
        Self { min_support }
    }

    /// Absolute support threshold for `count` transactions:
    /// `max(1, ceil(min_support * count))`.
    pub fn support_count(&self, count: usize) -> usize {
        ((self.min_support * count as f64).ceil() as usize).max(1)
    }

    /// Mine all closed frequent itemsets from `transactions`.
    ///
    /// The result is grouped by itemset size and flattened in
    /// ascending-size order; discovery order is preserved within a size.
    /// Singletons are included. An empty transaction list yields an empty
    /// result.
    pub fn mine(&self, transactions: &[Transaction]) -> Vec<Itemset> {
        if transactions.is_empty() {
            return Vec::new();
        }
        let min_count = self.support_count(transactions.len());

        let occurrences: Vec<usize> = (0..transactions.len()).collect();
        let root = closure(transactions, &occurrences);

        let mut found = Vec::new();
        expand(transactions, min_count, &root, None, &occurrences, &mut found);

        // Flatten levels in ascending-size order; the sort is stable, so
        // discovery order survives within each size.
        found.sort_by_key(|itemset: &Itemset| itemset.items.len());
        found
    }
}

/// Recursively emit `p` and its prefix-preserving closed extensions.
fn expand(
    transactions: &[Transaction],
    min_count: usize,
    p: &[u32],
    core: Option<u32>,
    occurrences: &[usize],
    out: &mut Vec<Itemset>,
) {
    if !p.is_empty() {
        out.push(Itemset::new(p.to_vec(), occurrences.len()));
    }

    // Support of each candidate extension item within the occurrence set,
    // in ascending item order for deterministic enumeration.
    let mut frequencies: BTreeMap<u32, usize> = BTreeMap::new();
    for &t in occurrences {
        for &item in &transactions[t] {
            if p.binary_search(&item).is_err() {
                *frequencies.entry(item).or_insert(0) += 1;
            }
        }
    }

    for (&extension, &count) in &frequencies {
        if count < min_count {
            continue;
        }
        if let Some(core_item) = core {
            if extension <= core_item {
                continue;
            }
        }

        let extended_occurrences: Vec<usize> = occurrences
            .iter()
            .copied()
            .filter(|&t| transactions[t].binary_search(&extension).is_ok())
            .collect();
        let q = closure(transactions, &extended_occurrences);

        // Prefix-preserving check: every closure member below the extension
        // must already be in `p`, else this closed set belongs to another
        // branch of the enumeration tree.
        let prefix_preserved = q
            .iter()
            .take_while(|&&item| item < extension)
            .all(|item| p.binary_search(item).is_ok());

        if prefix_preserved {
            expand(
                transactions,
                min_count,
                &q,
                Some(extension),
                &extended_occurrences,
                out,
            );
        }
    }
}

/// Items present in every transaction of `occurrences` (ascending).
fn closure(transactions: &[Transaction], occurrences: &[usize]) -> Vec<u32> {
    let Some((&first, rest)) = occurrences.split_first() else {
        return Vec::new();
    };
    let mut common = transactions[first].clone();
    for &t in rest {
        common = intersect_sorted(&common, &transactions[t]);
        if common.is_empty() {
            break;
        }
    }
    common
}

/// Intersection of two sorted ascending duplicate-free slices.
fn intersect_sorted(a: &[u32], b: &[u32]) -> Vec<u32> {
    let mut out = Vec::with_capacity(a.len().min(b.len()));
    let (mut i, mut j) = (0, 0);
    while i < a.len() && j < b.len() {
        match a[i].cmp(&b[j]) {
            std::cmp::Ordering::Less => i += 1,
            std::cmp::Ordering::Greater => j += 1,
            std::cmp::Ordering::Equal => {
                out.push(a[i]);
                i += 1;
                j += 1;
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mine(transactions: &[&[u32]], min_support: f64) -> Vec<Itemset> {
        let owned: Vec<Transaction> = transactions.iter().map(|t| t.to_vec()).collect();
        LcmMiner::new(min_support).mine(&owned)
    }

    fn items(found: &[Itemset]) -> Vec<Vec<u32>> {
        found.iter().map(|i| i.items.clone()).collect()
    }

    #[test]
    fn test_empty_input() {
        assert!(mine(&[], 0.5).is_empty());
    }

    #[test]
    fn test_support_count_threshold() {
        let miner = LcmMiner::new(0.01);
        assert_eq!(miner.support_count(1), 1);
        assert_eq!(miner.support_count(100), 1);
        assert_eq!(miner.support_count(101), 2);
        assert_eq!(LcmMiner::new(1.0).support_count(7), 7);
    }

    #[test]
    fn test_single_transaction_yields_its_closure() {
        let found = mine(&[&[0]], 0.01);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].items, vec![0]);
        assert_eq!(found[0].support, 1);
    }

    #[test]
    fn test_identical_transactions_collapse() {
        // Every subset has the same occurrence set, so only the full set
        // is closed.
        let found = mine(&[&[0, 1, 2], &[0, 1, 2]], 0.01);
        assert_eq!(items(&found), vec![vec![0, 1, 2]]);
        assert_eq!(found[0].support, 2);
    }

    #[test]
    fn test_classic_closed_sets() {
        // {0} occurs in all three, {0,1} in the first two, {0,2} in the
        // last. {1} alone is not closed ({0,1} has equal support), nor is
        // {2} ({0,2} does).
        let found = mine(&[&[0, 1], &[0, 1], &[0, 2]], 0.01);
        let got = items(&found);
        assert!(got.contains(&vec![0]));
        assert!(got.contains(&vec![0, 1]));
        assert!(got.contains(&vec![0, 2]));
        assert_eq!(got.len(), 3);

        let zero = found.iter().find(|i| i.items == vec![0]).unwrap();
        assert_eq!(zero.support, 3);
        let zero_one = found.iter().find(|i| i.items == vec![0, 1]).unwrap();
        assert_eq!(zero_one.support, 2);
    }

    #[test]
    fn test_min_support_prunes() {
        // With min support 0.6 of 3 transactions the threshold is 2, so
        // {0,2} (support 1) disappears and {2} never closes.
        let found = mine(&[&[0, 1], &[0, 1], &[0, 2]], 0.6);
        let got = items(&found);
        assert!(got.contains(&vec![0]));
        assert!(got.contains(&vec![0, 1]));
        assert_eq!(got.len(), 2);
    }

    #[test]
    fn test_output_ascending_by_size() {
        let found = mine(&[&[0, 1, 2], &[0, 1], &[0, 2], &[3]], 0.01);
        let sizes: Vec<usize> = found.iter().map(|i| i.items.len()).collect();
        let mut sorted = sizes.clone();
        sorted.sort_unstable();
        assert_eq!(sizes, sorted);
    }

    #[test]
    fn test_no_duplicate_itemsets() {
        let found = mine(
            &[&[0, 1, 2, 3], &[0, 1, 2], &[0, 1], &[2, 3], &[0, 3]],
            0.01,
        );
        let mut got = items(&found);
        let before = got.len();
        got.sort();
        got.dedup();
        assert_eq!(got.len(), before);
    }

    #[test]
    fn test_closedness() {
        // Brute-force check: no found itemset has a found proper superset
        // with equal support, and every found set's support is exact.
        let db: Vec<Transaction> = vec![
            vec![0, 1, 2],
            vec![0, 1],
            vec![1, 2],
            vec![0, 2, 3],
            vec![1, 2, 3],
        ];
        let found = LcmMiner::new(0.2).mine(&db);
        for itemset in &found {
            let actual = db
                .iter()
                .filter(|t| itemset.items.iter().all(|i| t.binary_search(i).is_ok()))
                .count();
            assert_eq!(itemset.support, actual, "support mismatch for {:?}", itemset);
            for other in &found {
                if other.items.len() > itemset.items.len()
                    && itemset.items.iter().all(|i| other.items.binary_search(i).is_ok())
                {
                    assert!(
                        other.support < itemset.support,
                        "{:?} is not closed: superset {:?} has equal support",
                        itemset,
                        other
                    );
                }
            }
        }
    }

    #[test]
    fn test_items_strictly_ascending() {
        let found = mine(&[&[0, 1, 2, 3], &[1, 2, 3], &[0, 2]], 0.01);
        for itemset in &found {
            for pair in itemset.items.windows(2) {
                assert!(pair[0] < pair[1]);
            }
        }
    }
}
