//! Property-based tests for element access, structure and multiplication

use llsparse::{reference_multiply, MultiplyConfig, SparseMatrix};
use proptest::prelude::*;

const MAX_DIM: usize = 6;

prop_compose! {
    fn arb_matrix_with_dims(n_rows: usize, n_cols: usize)
        (triplets in prop::collection::vec(
            (0..n_rows.max(1), 0..n_cols.max(1), -4i64..=4),
            0..=(n_rows * n_cols),
        )) -> SparseMatrix<i64>
    {
        let triplets = triplets
            .into_iter()
            .filter(|&(i, j, _)| i < n_rows && j < n_cols);
        SparseMatrix::from_triplets(n_rows, n_cols, triplets).unwrap()
    }
}

fn arb_matrix() -> impl Strategy<Value = SparseMatrix<i64>> {
    (0..=MAX_DIM, 0..=MAX_DIM).prop_flat_map(|(r, c)| arb_matrix_with_dims(r, c))
}

fn arb_product_operands() -> impl Strategy<Value = (SparseMatrix<i64>, SparseMatrix<i64>)> {
    (0..=MAX_DIM, 0..=MAX_DIM, 0..=MAX_DIM)
        .prop_flat_map(|(m, k, n)| (arb_matrix_with_dims(m, k), arb_matrix_with_dims(k, n)))
}

fn arb_matrix_and_cell() -> impl Strategy<Value = (SparseMatrix<i64>, usize, usize)> {
    (1..=MAX_DIM, 1..=MAX_DIM)
        .prop_flat_map(|(r, c)| (arb_matrix_with_dims(r, c), 0..r, 0..c))
}

fn count_non_zero_cells(mat: &SparseMatrix<i64>) -> usize {
    let mut count = 0;
    for i in 0..mat.row_count() {
        for j in 0..mat.col_count() {
            if mat.element_at(i, j).unwrap() != 0 {
                count += 1;
            }
        }
    }
    count
}

fn is_strictly_row_major(mat: &SparseMatrix<i64>) -> bool {
    let coords: Vec<_> = mat.iter().map(|(i, j, _)| (i, j)).collect();
    coords.windows(2).all(|w| w[0] < w[1])
}

proptest! {
    #[test]
    fn non_zero_count_matches_cells(mat in arb_matrix()) {
        prop_assert_eq!(mat.non_zero_count(), count_non_zero_cells(&mat));
        prop_assert!(is_strictly_row_major(&mat));
        prop_assert!(mat.iter().all(|(_, _, &v)| v != 0));
    }

    #[test]
    fn set_then_get((mut mat, i, j) in arb_matrix_and_cell(), v in -4i64..=4) {
        let had_entry = mat.element_at(i, j).unwrap() != 0;
        let before = mat.non_zero_count();
        mat.set_element(i, j, v).unwrap();

        prop_assert_eq!(mat.element_at(i, j).unwrap(), v);
        let expected = match (had_entry, v != 0) {
            (true, false) => before - 1,
            (false, true) => before + 1,
            _ => before,
        };
        prop_assert_eq!(mat.non_zero_count(), expected);
        prop_assert!(is_strictly_row_major(&mat));
    }

    #[test]
    fn out_of_bounds_always_fails(mut mat in arb_matrix(), extra in 0..3usize) {
        let (r, c) = (mat.row_count(), mat.col_count());
        let before = mat.clone();

        prop_assert!(mat.element_at(r + extra, 0).is_err());
        prop_assert!(mat.element_at(0, c + extra).is_err());
        prop_assert!(mat.set_element(r + extra, 0, 1).is_err());
        prop_assert!(mat.remove_element(0, c + extra).is_err());
        prop_assert_eq!(mat, before);
    }

    #[test]
    fn resize_grows_or_fails(mut mat in arb_matrix(), new_rows in 0..=MAX_DIM + 2, new_cols in 0..=MAX_DIM + 2) {
        let before = mat.clone();
        let shrinks = new_rows < mat.row_count() || new_cols < mat.col_count();

        match mat.resize(new_rows, new_cols) {
            Ok(()) => {
                prop_assert!(!shrinks);
                prop_assert_eq!(mat.row_count(), new_rows);
                prop_assert_eq!(mat.col_count(), new_cols);
                for (i, j, &v) in before.iter() {
                    prop_assert_eq!(mat.element_at(i, j).unwrap(), v);
                }
                prop_assert_eq!(mat.non_zero_count(), before.non_zero_count());
                prop_assert!(is_strictly_row_major(&mat));
            }
            Err(_) => {
                prop_assert!(shrinks);
                prop_assert_eq!(mat, before);
            }
        }
    }

    #[test]
    fn transpose_is_involution(mat in arb_matrix()) {
        let mut t = mat.clone();
        t.transpose();

        prop_assert_eq!(t.row_count(), mat.col_count());
        prop_assert_eq!(t.col_count(), mat.row_count());
        prop_assert!(is_strictly_row_major(&t));
        for i in 0..mat.row_count() {
            for j in 0..mat.col_count() {
                prop_assert_eq!(t.element_at(j, i).unwrap(), mat.element_at(i, j).unwrap());
            }
        }

        t.transpose();
        prop_assert_eq!(t, mat);
    }

    #[test]
    fn multiply_matches_reference((a, b) in arb_product_operands()) {
        let expected = reference_multiply(&a, &b).unwrap();

        for config in MultiplyConfig::all() {
            let c = a.multiply_with(&b, &config).unwrap();
            prop_assert_eq!(c.row_count(), a.row_count());
            prop_assert_eq!(c.col_count(), b.col_count());
            prop_assert!(is_strictly_row_major(&c));
            prop_assert_eq!(&c, &expected);
        }
    }

    #[test]
    fn multiply_rejects_mismatch(a in arb_matrix(), b in arb_matrix()) {
        prop_assert_eq!(a.multiply(&b).is_err(), a.col_count() != b.row_count());
    }
}
