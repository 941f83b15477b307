use itertools::izip;

use crate::error::RingError;
use crate::modulus::Zmod;

impl Zmod {
    /// Row-wise lift of vector addition: C[i][j] = (A[i][j] + B[i][j])
    /// mod m. Row counts and every row pair's lengths must match.
    pub fn mtx_add(&self, a: &[Vec<i64>], b: &[Vec<i64>]) -> Result<Vec<Vec<i64>>, RingError> {
        self.checked_tier()?;
        if a.len() != b.len() {
            return Err(RingError::LengthMismatch {
                lhs: a.len(),
                rhs: b.len(),
            });
        }
        izip!(a.iter(), b.iter())
            .map(|(ra, rb)| self.add(ra, rb))
            .collect()
    }

    /// Matrix product over Z/mZ: entry (i, j) is the dot product of
    /// row i of A and column j of B, under the same tiered reduction
    /// discipline as the vector dot product.
    pub fn mtx_mul(&self, a: &[Vec<i64>], b: &[Vec<i64>]) -> Result<Vec<Vec<i64>>, RingError> {
        let tier = self.checked_tier()?;
        if a.is_empty() || b.is_empty() {
            return Err(RingError::EmptyOperand);
        }
        let inner = b.len();
        let cols = b[0].len();
        if let Some(row) = b.iter().find(|r| r.len() != cols) {
            return Err(RingError::LengthMismatch {
                lhs: row.len(),
                rhs: cols,
            });
        }
        if let Some(row) = a.iter().find(|r| r.len() != inner) {
            return Err(RingError::LengthMismatch {
                lhs: row.len(),
                rhs: inner,
            });
        }
        let mut out: Vec<Vec<i64>> = Vec::with_capacity(a.len());
        for row in a {
            let mut out_row: Vec<i64> = Vec::with_capacity(cols);
            for j in 0..cols {
                let terms = izip!(row.iter(), b.iter()).map(|(&x, br)| (x, br[j]));
                out_row.push(self.dot_terms(tier, terms));
            }
            out.push(out_row);
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mtx_add_small_modulus() {
        let ring = Zmod::new(13);
        let a = vec![vec![10, 11], vec![12, 0]];
        let b = vec![vec![5, 5], vec![5, 5]];
        let c = ring.mtx_add(&a, &b).unwrap();
        assert_eq!(c, vec![vec![2, 3], vec![4, 5]]);
    }

    #[test]
    fn mtx_mul_identity() {
        let ring = Zmod::new(13);
        let a = vec![vec![3, 7], vec![11, 2]];
        let id = vec![vec![1, 0], vec![0, 1]];
        assert_eq!(ring.mtx_mul(&a, &id).unwrap(), a);
        assert_eq!(ring.mtx_mul(&id, &a).unwrap(), a);
    }

    #[test]
    fn mtx_mul_rectangular() {
        let ring = Zmod::new(13);
        // 2x3 * 3x1
        let a = vec![vec![1, 2, 3], vec![4, 5, 6]];
        let b = vec![vec![2], vec![3], vec![4]];
        // [2+6+12, 8+15+24] = [20, 47] mod 13 = [7, 8]
        assert_eq!(ring.mtx_mul(&a, &b).unwrap(), vec![vec![7], vec![8]]);
    }

    #[test]
    fn mtx_mul_double_word_tier() {
        let q = i64::MAX;
        let ring = Zmod::new(q);
        let a = vec![vec![q - 1, q - 1]];
        let b = vec![vec![q - 1], vec![q - 1]];
        // each entry is (q-1)^2 == 1 mod q, summed twice
        assert_eq!(ring.mtx_mul(&a, &b).unwrap(), vec![vec![2]]);
    }

    #[test]
    fn mtx_shape_errors() {
        let ring = Zmod::new(13);
        let a = vec![vec![1, 2], vec![3, 4]];
        let short = vec![vec![1, 2]];
        assert!(ring.mtx_add(&a, &short).unwrap_err().is_operation());

        let ragged = vec![vec![1, 2], vec![3]];
        assert!(ring.mtx_add(&a, &ragged).unwrap_err().is_operation());
        assert!(ring.mtx_mul(&ragged, &a).unwrap_err().is_operation());
        assert!(ring.mtx_mul(&a, &ragged).unwrap_err().is_operation());

        // inner dimensions must agree: 2x2 * 1x2
        assert!(ring.mtx_mul(&a, &short).unwrap_err().is_operation());

        let empty: Vec<Vec<i64>> = vec![];
        assert_eq!(
            ring.mtx_mul(&a, &empty).unwrap_err(),
            RingError::EmptyOperand
        );
    }

    #[test]
    fn mtx_rejects_non_positive_modulus() {
        let ring = Zmod::new(-1);
        let a = vec![vec![1]];
        assert!(ring.mtx_add(&a, &a).unwrap_err().is_modulo());
        assert!(ring.mtx_mul(&a, &a).unwrap_err().is_modulo());
    }
}
