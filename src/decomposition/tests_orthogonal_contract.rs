// =========================================================================
// FALSIFY-QR: Gram-Schmidt / QR contract
//
// Gram-Schmidt skips columns whose residual is exactly zero, so a
// rank-r input yields r orthonormal columns packed left and cols - r
// trailing zero columns. QR is only defined for square inputs and
// returns null sentinels otherwise.
// =========================================================================

use crate::primitives::Matrix;

/// FALSIFY-QR-001: accepted Gram-Schmidt columns are pairwise
/// orthonormal.
#[test]
fn falsify_qr_001_orthonormal_columns() {
    let a = Matrix::random(4, 4, Some(17));
    let q = a.gram_schmidt();
    for i in 0..4 {
        for j in 0..4 {
            let expected = if i == j { 1.0 } else { 0.0 };
            let d = q.column(i).dot(&q.column(j));
            assert!(
                (d - expected).abs() < 1e-9,
                "FALSIFIED QR-001: q{i} . q{j} = {d}"
            );
        }
    }
}

/// FALSIFY-QR-002: Q * R reconstructs a full-rank A.
#[test]
fn falsify_qr_002_reconstruction() {
    let a = Matrix::from_rows(vec![
        vec![1.0, 1.0, 0.0],
        vec![1.0, 0.0, 1.0],
        vec![0.0, 1.0, 1.0],
    ])
    .expect("rectangular");
    let (q, r) = a.qr();
    let qr = q.matmul(&r);
    for i in 0..3 {
        for j in 0..3 {
            assert!(
                (qr.get(i, j) - a.get(i, j)).abs() < 1e-9,
                "FALSIFIED QR-002: (QR)[{i},{j}] != A[{i},{j}]"
            );
        }
    }
}

/// FALSIFY-QR-003: R carries no entries below the diagonal.
#[test]
fn falsify_qr_003_r_upper_triangular() {
    let a = Matrix::random(4, 4, Some(23));
    let (_, r) = a.qr();
    for i in 0..4 {
        for j in 0..i {
            assert_eq!(
                r.get(i, j),
                0.0,
                "FALSIFIED QR-003: R[{i},{j}] below diagonal"
            );
        }
    }
}

/// FALSIFY-QR-004: a rank-r input yields exactly cols - r zero output
/// columns, all trailing.
#[test]
fn falsify_qr_004_rank_deficiency_packs_left() {
    // Rank 2: column 1 duplicates column 0.
    let a = Matrix::from_rows(vec![
        vec![1.0, 1.0, 0.0],
        vec![0.0, 0.0, 2.0],
        vec![0.0, 0.0, 0.0],
    ])
    .expect("rectangular");
    let q = a.gram_schmidt();

    assert!(
        !q.column(0).is_zero() && !q.column(1).is_zero(),
        "FALSIFIED QR-004: accepted columns not packed left"
    );
    assert!(
        q.column(2).is_zero(),
        "FALSIFIED QR-004: expected a trailing zero column"
    );
}

/// FALSIFY-QR-005: non-square QR yields the null sentinel pair.
#[test]
fn falsify_qr_005_non_square_sentinels() {
    let a = Matrix::zeros(3, 4);
    let (q, r) = a.qr();
    assert!(
        q.is_null() && r.is_null(),
        "FALSIFIED QR-005: expected null Q and R"
    );
}
