use itertools::izip;

use crate::error::RingError;
use crate::modulus::{ReduceOnce, SizeTier, Zmod};

impl Zmod {
    /// Component-wise (a + b) mod m. Entries are expected to be
    /// residues in [0, m); the result always is.
    pub fn add(&self, a: &[i64], b: &[i64]) -> Result<Vec<i64>, RingError> {
        let tier = self.checked_tier()?;
        if a.len() != b.len() {
            return Err(RingError::LengthMismatch {
                lhs: a.len(),
                rhs: b.len(),
            });
        }
        let mut c: Vec<i64> = vec![0i64; a.len()];
        match tier {
            SizeTier::HalfWord | SizeTier::Word => {
                izip!(a.iter(), b.iter(), c.iter_mut())
                    .for_each(|(&a, &b, c)| *c = self.sa_add_sb(a, b));
            }
            SizeTier::DoubleWord => {
                izip!(a.iter(), b.iter(), c.iter_mut())
                    .for_each(|(&a, &b, c)| *c = self.sa_add_sb_wide(a, b));
            }
        }
        Ok(c)
    }

    /// Dot product of a and b reduced mod m, in [0, m).
    pub fn dot(&self, a: &[i64], b: &[i64]) -> Result<i64, RingError> {
        let tier = self.checked_tier()?;
        if a.len() != b.len() {
            return Err(RingError::LengthMismatch {
                lhs: a.len(),
                rhs: b.len(),
            });
        }
        let terms = izip!(a.iter(), b.iter()).map(|(&a, &b)| (a, b));
        Ok(self.dot_terms(tier, terms))
    }

    /// Tier-dispatched dot kernel over a stream of term pairs. Shared
    /// by the ambient, self-describing and matrix entry points.
    pub(crate) fn dot_terms(&self, tier: SizeTier, it: impl Iterator<Item = (i64, i64)>) -> i64 {
        match tier {
            SizeTier::HalfWord => self.dot_half_word(it),
            SizeTier::Word => self.dot_word(it),
            SizeTier::DoubleWord => self.dot_double_word(it),
        }
    }

    // Each product is reduced immediately; the running sum of reduced
    // terms is re-reduced every 15 terms, the cadence under which 15
    // terms below 2^16 stay inside a 32-bit accumulator. The native
    // accumulator is wider, which only grows the safety margin.
    fn dot_half_word(&self, it: impl Iterator<Item = (i64, i64)>) -> i64 {
        let q = self.modulus();
        let mut acc: i64 = 0;
        for (i, (a, b)) in it.enumerate() {
            acc += self.sa_mul_sb(a, b);
            if i != 0 && i % 15 == 0 {
                acc %= q;
            }
        }
        // the last block may have fewer than 15 terms
        acc % q
    }

    // Products reach 2^62 and need the full word; the sum of two
    // reduced values stays under 2q < 2^32, so reduce after every add.
    fn dot_word(&self, it: impl Iterator<Item = (i64, i64)>) -> i64 {
        let q = self.modulus();
        let mut acc: i64 = 0;
        for (a, b) in it {
            acc = (acc + self.sa_mul_sb(a, b)) % q;
        }
        acc
    }

    // Products need twice the word width (u128); the running sum is
    // kept below q with one conditional subtraction per term, valid
    // since acc + term < 2q < 2^64.
    fn dot_double_word(&self, it: impl Iterator<Item = (i64, i64)>) -> i64 {
        let q = self.modulus() as u64;
        let mut acc: u64 = 0;
        for (a, b) in it {
            acc = acc
                .wrapping_add(self.sa_mul_sb_wide(a, b) as u64)
                .reduce_once(q);
        }
        acc as i64
    }
}
