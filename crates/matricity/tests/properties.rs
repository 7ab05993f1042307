//! Property-based tests for domains and function matrices.
//!
//! Uses proptest to check the indexing and matrix identities over randomly
//! sized domains and randomly tabulated functions.

use matricity::{Domain, Factors, FiniteDomain, FunctionMatrix, MixedRadix, OneHot};
use proptest::prelude::*;

// =============================================================================
// One-hot Properties
// =============================================================================

proptest! {
    /// The dense form has one `1`, at the index.
    #[test]
    fn prop_onehot_dense((index, size) in (1usize..64).prop_flat_map(|n| (0..n, Just(n)))) {
        let v = OneHot::new(index, size);
        let dense: Vec<u64> = v.iter().collect();
        prop_assert_eq!(dense.len(), size);
        prop_assert_eq!(dense.iter().sum::<u64>(), 1);
        prop_assert_eq!(dense[index], 1);
        prop_assert_eq!(OneHot::from_dense(dense), Some(v));
    }

    /// Reversed iteration mirrors forward iteration.
    #[test]
    fn prop_onehot_reverse((index, size) in (1usize..64).prop_flat_map(|n| (0..n, Just(n)))) {
        let v = OneHot::new(index, size);
        let mut forward: Vec<u64> = v.iter().collect();
        forward.reverse();
        let backward: Vec<u64> = v.iter().rev().collect();
        prop_assert_eq!(forward, backward);
    }
}

// =============================================================================
// Indexing Properties
// =============================================================================

proptest! {
    /// split and combine are inverse on every in-range index.
    #[test]
    fn prop_radix_inverse(radices in prop::collection::vec(1usize..6, 1..5), seed: usize) {
        let radix = MixedRadix::new(radices);
        let size = radix.size().unwrap();
        let index = seed % size;
        let digits = radix.split(index).unwrap();
        prop_assert_eq!(radix.combine(&digits), Some(index));
        prop_assert_eq!(radix.split(size), None);
    }

    /// Indices of a product too large for usize still split and combine
    /// while they fit.
    #[test]
    #[cfg(target_pointer_width = "64")]
    fn prop_radix_overflowing(index: usize) {
        let radix = MixedRadix::new(vec![1 << 16; 5]);
        prop_assert_eq!(radix.size(), None);
        let digits = radix.split(index).unwrap();
        prop_assert_eq!(digits[0], 0);
        prop_assert_eq!(radix.combine(&digits), Some(index));
    }

    /// decode(i) encodes back to i for every index of a product.
    #[test]
    fn prop_product_roundtrip(a in 1u8..6, b in 1u8..6, c in 1u8..6) {
        let d = Domain::new(0..a).product(&Domain::new(0..b)).product(&Domain::new(0..c));
        for i in 0..d.size() {
            let v = d.decode(i).unwrap();
            prop_assert_eq!(d.encode(&v).unwrap(), OneHot::new(i, d.size()));
        }
        prop_assert_eq!(d.decode(d.size()), None);
    }

    /// |A × B| = |A| · |B|.
    #[test]
    fn prop_size_multiplicative(a in 0u16..20, b in 0u16..20) {
        let x = Domain::new(0..a);
        let y = Domain::new(0..b);
        prop_assert_eq!((&x * &y).size(), x.size() * y.size());
    }

    /// (A × B) × C and A × (B × C) agree element by element.
    #[test]
    fn prop_product_associative(a in 1u8..5, b in 1u8..5, c in 1u8..5) {
        let x = Domain::new(0..a);
        let y: Domain<char> = (0..b).map(|n| char::from(b'a' + n)).collect();
        let z = Domain::new([false, true]).product(&Domain::new(0..c));

        let left = x.product(&y).product(&z);
        let right = x.product(&y.product(&z));
        prop_assert_eq!(left.size(), right.size());
        for i in 0..left.size() {
            prop_assert_eq!(left.decode(i), right.decode(i));
        }
    }

    /// The last component varies fastest.
    #[test]
    fn prop_last_component_fastest(a in 1u8..6, b in 2u8..6) {
        let d = Domain::new(0..a).product(&Domain::new(0..b));
        let all: Vec<(u8, u8)> = d.elements().collect();
        for pair in all.windows(2) {
            let ((x0, y0), (x1, y1)) = (pair[0], pair[1]);
            let carried = y1 == 0 && x1 == x0 + 1 && y0 == b - 1;
            let stepped = x1 == x0 && y1 == y0 + 1;
            prop_assert!(carried || stepped, "{:?} does not follow {:?}", pair[1], pair[0]);
        }
    }
}

// =============================================================================
// Matrix Properties
// =============================================================================

/// A random table: the function maps input `i` to `table[i]`.
fn table_strategy() -> impl Strategy<Value = (Vec<u8>, u8)> {
    (1u8..8).prop_flat_map(|outputs| (prop::collection::vec(0..outputs, 1..24), Just(outputs)))
}

proptest! {
    /// Every column of a tabulated total function sums to one.
    #[test]
    fn prop_columns_total((table, outputs) in table_strategy()) {
        let input = Domain::new(0..table.len());
        let output = Domain::new(0..outputs);
        let m = FunctionMatrix::new(|i: usize| table[i], input, output);
        let rows = m.rows().unwrap();
        prop_assert!(rows.is_total());
        prop_assert_eq!(rows.width(), table.len());
        prop_assert_eq!(rows.height(), usize::from(outputs));
    }

    /// apply on e_i equals column i of rows.
    #[test]
    fn prop_apply_is_column((table, outputs) in table_strategy(), seed: usize) {
        let input = Domain::new(0..table.len());
        let output = Domain::new(0..outputs);
        let m = FunctionMatrix::new(|i: usize| table[i], input, output);
        let rows = m.rows().unwrap();

        let i = seed % table.len();
        let applied = m.apply(&OneHot::new(i, table.len())).unwrap();
        let column: Vec<u64> = rows.column(i).unwrap().iter().collect();
        prop_assert_eq!(&applied, &column);
        prop_assert_eq!(m.output().decode_dense(applied), Some(table[i]));
    }

    /// Weighted application adds up the weights of each preimage.
    #[test]
    fn prop_weighted_sums((table, outputs) in table_strategy()) {
        let input = Domain::new(0..table.len());
        let output = Domain::new(0..outputs);
        let m = FunctionMatrix::new(|i: usize| table[i], input, output);
        let weights: Vec<u64> = (1..=table.len() as u64).collect();

        let result = m.apply_weighted(weights.iter().copied()).unwrap();
        prop_assert_eq!(result.iter().sum::<u64>(), weights.iter().sum::<u64>());
        for (r, &total) in result.iter().enumerate() {
            let expected: u64 = table
                .iter()
                .zip(&weights)
                .filter(|(&out, _)| usize::from(out) == r)
                .map(|(_, &w)| w)
                .sum();
            prop_assert_eq!(total, expected);
        }
    }
}
