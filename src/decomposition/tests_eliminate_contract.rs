// =========================================================================
// FALSIFY-EL: Elimination engine contract (echelon, det, inverse, PLU)
//
// Pivot selection is partial pivoting with exact-zero tests: the
// largest-magnitude entry wins, first occurrence breaks ties, and a
// column that is exactly zero below the pivot row is skipped. Every
// test here falsifies a consequence of that policy.
//
// References:
//   - Golub & Van Loan (2013) "Matrix Computations"
// =========================================================================

use crate::error::MatrizError;
use crate::primitives::Matrix;

/// FALSIFY-EL-001: det(I_n) = 1 for all n.
#[test]
fn falsify_el_001_det_identity() {
    for n in 0..7 {
        assert!(
            (Matrix::eye(n).det() - 1.0).abs() < 1e-12,
            "FALSIFIED EL-001: det(I_{n}) != 1"
        );
    }
}

/// FALSIFY-EL-002: a zero row forces det(A) = 0.
#[test]
fn falsify_el_002_det_zero_row() {
    let a = Matrix::from_rows(vec![
        vec![3.0, 1.0, 2.0],
        vec![0.0, 0.0, 0.0],
        vec![5.0, 4.0, 8.0],
    ])
    .expect("rectangular");
    assert!(
        (a.det() - 0.0).abs() < 1e-12,
        "FALSIFIED EL-002: det with zero row = {}",
        a.det()
    );
}

/// FALSIFY-EL-003: the non-square determinant sentinel equals the
/// genuine zero determinant — the documented ambiguity — while try_det
/// tells them apart.
#[test]
fn falsify_el_003_det_ambiguity() {
    let non_square = Matrix::zeros(2, 3);
    let singular = Matrix::from_rows(vec![vec![1.0, 1.0], vec![1.0, 1.0]]).expect("rectangular");

    assert_eq!(
        non_square.det(),
        singular.det(),
        "FALSIFIED EL-003: sentinel and genuine zero differ"
    );
    assert!(
        non_square.try_det().is_err(),
        "FALSIFIED EL-003: try_det accepted a non-square input"
    );
    assert!(
        singular.try_det().is_ok(),
        "FALSIFIED EL-003: try_det rejected a square input"
    );
}

/// FALSIFY-EL-004: echelon form is idempotent.
#[test]
fn falsify_el_004_echelon_idempotent() {
    let a = Matrix::random(4, 5, Some(21));
    let once = a.echelon_form();
    let twice = once.echelon_form();
    assert_eq!(once, twice, "FALSIFIED EL-004: echelon form not idempotent");
}

/// FALSIFY-EL-005: inverse agrees between the sentinel and checked
/// modes on every failure class.
#[test]
fn falsify_el_005_inverse_mode_agreement() {
    let non_square = Matrix::zeros(3, 2);
    assert!(non_square.inverse().is_null());
    assert!(matches!(
        non_square.try_inverse(),
        Err(MatrizError::NotSquare { rows: 3, cols: 2 })
    ));

    let singular = Matrix::from_rows(vec![
        vec![1.0, 0.0, 0.0],
        vec![0.0, 1.0, 0.0],
        vec![1.0, 1.0, 0.0],
    ])
    .expect("rectangular");
    assert!(singular.inverse().is_null());
    assert!(matches!(
        singular.try_inverse(),
        Err(MatrizError::SingularMatrix { .. })
    ));

    let regular = Matrix::from_rows(vec![vec![2.0, 1.0], vec![1.0, 1.0]]).expect("rectangular");
    assert!(!regular.inverse().is_null());
    assert!(regular.try_inverse().is_ok());
}

/// FALSIFY-EL-006: P from PLU is the permutation that maps A's rows to
/// the pivoted order: P * A = L * U.
#[test]
fn falsify_el_006_plu_identity() {
    let a = Matrix::random(4, 4, Some(5));
    let (p, l, u) = a.plu();
    let lhs = p.matmul(&a);
    let rhs = l.matmul(&u);
    for i in 0..4 {
        for j in 0..4 {
            assert!(
                (lhs.get(i, j) - rhs.get(i, j)).abs() < 1e-9,
                "FALSIFIED EL-006: (PA)[{i},{j}] != (LU)[{i},{j}]"
            );
        }
    }
}

/// FALSIFY-EL-007: tie-break takes the first (lowest-index) row of
/// maximal magnitude, so equal-magnitude rows below never swap up.
#[test]
fn falsify_el_007_pivot_tie_break() {
    let a = Matrix::from_rows(vec![vec![2.0, 1.0], vec![2.0, 5.0]]).expect("rectangular");
    let (p, _, _) = a.plu();
    assert_eq!(
        p,
        Matrix::eye(2),
        "FALSIFIED EL-007: tie-break swapped equal-magnitude rows"
    );
}

/// FALSIFY-EL-008: partial pivoting picks the larger magnitude even
/// when the current row's entry is nonzero.
#[test]
fn falsify_el_008_pivot_prefers_magnitude() {
    let a = Matrix::from_rows(vec![vec![1.0, 0.0], vec![-4.0, 1.0]]).expect("rectangular");
    let (p, _, _) = a.plu();
    assert_eq!(
        p,
        Matrix::row_swap(2, 0, 1),
        "FALSIFIED EL-008: |-4| > |1| should have swapped rows"
    );
}
