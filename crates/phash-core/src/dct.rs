//! Cosine transform basis for the sample-grid projection step.
//!
//! The hashing pipeline reduces a 64-wide sample grid to 16 frequency
//! coefficients per axis by multiplying against a fixed truncated DCT-II
//! basis. Every entry is a pure function of its indices, so the table is
//! computed once per process and shared read-only afterwards.

use std::sync::OnceLock;

/// Number of frequency rows kept from the 64-point basis.
pub const BASIS_ROWS: usize = 16;

/// Number of sample columns, i.e. the downsampled grid width.
pub const BASIS_COLS: usize = 64;

/// The 16x64 cosine basis table, row-major.
pub type BasisMatrix = [[f32; BASIS_COLS]; BASIS_ROWS];

/// Pi as the reference basis evaluates it. The truncated literal is
/// load-bearing: downstream hash bits are sensitive to the basis entries.
#[allow(clippy::approx_constant)]
const BASIS_PI: f64 = 3.141_592_653_5;

static BASIS_MATRIX: OnceLock<BasisMatrix> = OnceLock::new();

/// Returns the shared 16x64 cosine basis table, computing it on first call.
///
/// Every entry is `sqrt(2/64) * cos((pi / 2 / 64) * (i + 1) * (2j + 1))`:
/// the first 16 non-constant rows of the 64-point DCT-II basis. Repeated
/// calls return the same cached table; the shared reference keeps it
/// read-only for callers.
pub fn basis_matrix() -> &'static BasisMatrix {
    BASIS_MATRIX.get_or_init(compute_basis_matrix)
}

fn compute_basis_matrix() -> BasisMatrix {
    // The reference rounds the scale factor to single precision, evaluates
    // the cosine in double, and rounds the product on store. Mirror all
    // three rounding points.
    let scale = (2.0_f64 / BASIS_COLS as f64).sqrt() as f32;

    let mut matrix = [[0.0_f32; BASIS_COLS]; BASIS_ROWS];
    for (i, row) in matrix.iter_mut().enumerate() {
        for (j, entry) in row.iter_mut().enumerate() {
            let angle =
                (BASIS_PI / 2.0 / BASIS_COLS as f64) * (i + 1) as f64 * (2 * j + 1) as f64;
            *entry = (scale as f64 * angle.cos()) as f32;
        }
    }

    matrix
}

#[cfg(test)]
mod tests {
    use std::f64::consts::PI;

    use super::*;

    #[test]
    fn test_shape() {
        let matrix = basis_matrix();
        assert_eq!(matrix.len(), BASIS_ROWS);
        assert_eq!(matrix[0].len(), BASIS_COLS);
    }

    #[test]
    fn test_repeated_calls_share_one_table() {
        let first = basis_matrix();
        let second = basis_matrix();

        assert!(std::ptr::eq(first, second));
        assert_eq!(first, second);
    }

    #[test]
    fn test_first_entry_spot_check() {
        let expected = (2.0_f64 / 64.0).sqrt() * (PI / 128.0).cos();
        let actual = basis_matrix()[0][0] as f64;

        assert!((actual - expected).abs() < 1e-6, "entry (0, 0) was {actual}");
    }

    #[test]
    fn test_matches_closed_form() {
        let scale = (2.0_f64 / BASIS_COLS as f64).sqrt();
        let matrix = basis_matrix();

        for (i, row) in matrix.iter().enumerate() {
            for (j, &entry) in row.iter().enumerate() {
                let expected = scale
                    * ((PI / 2.0 / BASIS_COLS as f64) * (i + 1) as f64 * (2 * j + 1) as f64)
                        .cos();
                assert!(
                    (entry as f64 - expected).abs() < 1e-6,
                    "entry ({i}, {j}) was {entry}, expected {expected}"
                );
            }
        }
    }

    #[test]
    fn test_row_sign_changes() {
        // Row i spans i + 1 half-periods of the cosine, one sign change each.
        for (i, row) in basis_matrix().iter().enumerate() {
            let changes = row
                .windows(2)
                .filter(|pair| (pair[0] > 0.0) != (pair[1] > 0.0))
                .count();
            assert_eq!(changes, i + 1, "row {i}");
        }
    }

    #[test]
    fn test_entries_bounded_by_scale() {
        let scale = (2.0_f32 / BASIS_COLS as f32).sqrt();

        for row in basis_matrix() {
            for &entry in row {
                assert!(entry.abs() <= scale);
            }
        }
    }
}
