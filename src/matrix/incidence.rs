//! Itemset × transaction incidence matrix.
//!
//! Entry `(i, j)` is `1.0` iff transaction `j` contains itemset `i` under
//! the prefix-aligned containment rule implemented by [`contains`].

use ndarray::Array2;
use rayon::prelude::*;

use crate::index::Transaction;
use crate::mining::Itemset;

/// Containment of `itemset` in `transaction`.
///
/// Both slices are sorted ascending. The itemset is contained iff it equals
/// the contiguous run of `transaction` beginning at the position of its
/// first item. This is deliberately *not* subset containment: an itemset
/// interleaved with extra transaction items does not match. The rule is
/// part of the scoring contract and must be reproduced exactly.
pub fn contains(transaction: &[u32], itemset: &[u32]) -> bool {
    let Some(&first) = itemset.first() else {
        return false;
    };
    let Ok(start) = transaction.binary_search(&first) else {
        return false;
    };
    let end = (start + itemset.len() - 1).min(transaction.len() - 1);
    &transaction[start..=end] == itemset
}

/// Dense 0/1 incidence matrix of shape `(|itemsets|, |transactions|)`.
#[derive(Debug, Clone)]
pub struct IncidenceMatrix {
    inner: Array2<f64>,
}

impl IncidenceMatrix {
    /// Build the matrix; rows follow itemset order, columns follow
    /// transaction order. Rows are filled in parallel.
    pub fn build(itemsets: &[Itemset], transactions: &[Transaction]) -> Self {
        let rows = itemsets.len();
        let cols = transactions.len();

        let cells: Vec<f64> = itemsets
            .par_iter()
            .flat_map_iter(|itemset| {
                transactions.iter().map(move |transaction| {
                    if contains(transaction, &itemset.items) {
                        1.0
                    } else {
                        0.0
                    }
                })
            })
            .collect();

        let inner = Array2::from_shape_vec((rows, cols), cells)
            .expect("cell count matches itemset and transaction counts");
        Self { inner }
    }

    pub fn num_itemsets(&self) -> usize {
        self.inner.nrows()
    }

    pub fn num_transactions(&self) -> usize {
        self.inner.ncols()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.nrows() == 0 || self.inner.ncols() == 0
    }

    pub fn as_array(&self) -> &Array2<f64> {
        &self.inner
    }
}
