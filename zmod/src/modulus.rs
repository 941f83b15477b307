use crate::error::RingError;

/// Largest prime representable in 16 bits.
pub const HALF_WORD_MOD_MAX: i64 = 65521;
/// Largest modulus whose products still fit a single 64-bit word.
pub const WORD_MOD_MAX: i64 = i32::MAX as i64;

/// Width class of a modulus. The tier fixes which evaluation strategy
/// keeps every intermediate sum and product inside fixed-width
/// arithmetic before it is reduced.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SizeTier {
    HalfWord,
    Word,
    DoubleWord,
}

impl SizeTier {
    /// Classifies a positive modulus. Boundaries are inclusive on the
    /// lower tier: 65521 is HalfWord, `i32::MAX` is Word. `i64` bounds
    /// the domain, so no modulus above the DoubleWord tier exists.
    #[inline(always)]
    pub fn classify(m: i64) -> SizeTier {
        debug_assert!(m > 0, "classify: m={} <= 0", m);
        if m <= HALF_WORD_MOD_MAX {
            SizeTier::HalfWord
        } else if m <= WORD_MOD_MAX {
            SizeTier::Word
        } else {
            SizeTier::DoubleWord
        }
    }
}

pub trait ReduceOnce<O> {
    /// Returns self-q if self >= q else self.
    /// User must ensure that 2q fits in O.
    fn reduce_once(self, q: O) -> O;
}

impl ReduceOnce<u64> for u64 {
    #[inline(always)]
    fn reduce_once(self, q: u64) -> u64 {
        debug_assert!(q < 0x8000000000000000, "2q >= 2^64");
        self.min(self.wrapping_sub(q))
    }
}

/// Z/mZ bound to a single modulus. Construction performs no validation;
/// every operation validates positivity before touching its operands,
/// so an engine around a bad modulus fails at use, not at creation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Zmod {
    q: i64,
}

impl Zmod {
    #[inline]
    pub fn new(q: i64) -> Self {
        Self { q }
    }

    #[inline(always)]
    pub fn modulus(&self) -> i64 {
        self.q
    }

    /// Validates the modulus and fixes the tier for the whole operation.
    #[inline]
    pub(crate) fn checked_tier(&self) -> Result<SizeTier, RingError> {
        if self.q <= 0 {
            return Err(RingError::NonPositiveModulus(self.q));
        }
        Ok(SizeTier::classify(self.q))
    }

    // (a + b) mod q for HalfWord and Word moduli: the sum of two
    // residues stays under 2q <= 2^32, far inside i64.
    #[inline(always)]
    pub(crate) fn sa_add_sb(&self, a: i64, b: i64) -> i64 {
        (a + b).rem_euclid(self.q)
    }

    // (a + b) mod q for DoubleWord moduli: 2q can exceed i64, so the
    // sum runs in u64 where 2q < 2^64 holds for any q <= i64::MAX.
    #[inline(always)]
    pub(crate) fn sa_add_sb_wide(&self, a: i64, b: i64) -> i64 {
        debug_assert!(a >= 0 && a < self.q, "a={} not a residue mod {}", a, self.q);
        debug_assert!(b >= 0 && b < self.q, "b={} not a residue mod {}", b, self.q);
        (a as u64).wrapping_add(b as u64).reduce_once(self.q as u64) as i64
    }

    // (a * b) mod q with a single-word product: HalfWord products stay
    // under 2^32, Word products under 2^62.
    #[inline(always)]
    pub(crate) fn sa_mul_sb(&self, a: i64, b: i64) -> i64 {
        (a * b).rem_euclid(self.q)
    }

    // (a * b) mod q for DoubleWord moduli: the product needs twice the
    // word width and no wider native width exists, so it runs in u128.
    #[inline(always)]
    pub(crate) fn sa_mul_sb_wide(&self, a: i64, b: i64) -> i64 {
        debug_assert!(a >= 0 && a < self.q, "a={} not a residue mod {}", a, self.q);
        debug_assert!(b >= 0 && b < self.q, "b={} not a residue mod {}", b, self.q);
        ((a as u128 * b as u128) % self.q as u128) as i64
    }
}
