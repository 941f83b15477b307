use itertools::izip;

use crate::error::RingError;
use crate::modulus::{SizeTier, Zmod};

/// A residue paired with its own modulus tag. Immutable once built:
/// compatibility is a precondition checked when elements are combined,
/// never a runtime mutation of the tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ZmodElement {
    value: i64,
    modulus: i64,
}

impl ZmodElement {
    /// Builds an element, normalizing the value into [0, m) when the
    /// modulus is positive. A non-positive modulus is stored as-is and
    /// rejected by every operation that would have to use it.
    #[inline]
    pub fn new(value: i64, modulus: i64) -> Self {
        let value = if modulus > 0 {
            value.rem_euclid(modulus)
        } else {
            value
        };
        Self { value, modulus }
    }

    #[inline(always)]
    pub fn value(&self) -> i64 {
        self.value
    }

    #[inline(always)]
    pub fn modulus(&self) -> i64 {
        self.modulus
    }
}

/// Resolves the modulus shared by two element vectors. The carried
/// modulus takes precedence over any engine the caller holds, and is
/// read once from the first element of each operand: vectors mixing
/// moduli past index 0 are a caller error and are not detected here.
fn resolve(a: &[ZmodElement], b: &[ZmodElement]) -> Result<(Zmod, SizeTier), RingError> {
    if a.is_empty() || b.is_empty() {
        return Err(RingError::EmptyOperand);
    }
    if a.len() != b.len() {
        return Err(RingError::LengthMismatch {
            lhs: a.len(),
            rhs: b.len(),
        });
    }
    let (lhs, rhs) = (a[0].modulus(), b[0].modulus());
    if lhs != rhs {
        return Err(RingError::ModulusMismatch { lhs, rhs });
    }
    let ring = Zmod::new(lhs);
    let tier = ring.checked_tier()?;
    Ok((ring, tier))
}

/// Component-wise addition of self-describing vectors. Every result
/// element carries the resolved modulus.
pub fn add(a: &[ZmodElement], b: &[ZmodElement]) -> Result<Vec<ZmodElement>, RingError> {
    let (ring, tier) = resolve(a, b)?;
    let q = ring.modulus();
    let mut c: Vec<ZmodElement> = Vec::with_capacity(a.len());
    match tier {
        SizeTier::HalfWord | SizeTier::Word => {
            izip!(a.iter(), b.iter()).for_each(|(a, b)| {
                c.push(ZmodElement::new(ring.sa_add_sb(a.value(), b.value()), q));
            });
        }
        SizeTier::DoubleWord => {
            izip!(a.iter(), b.iter()).for_each(|(a, b)| {
                c.push(ZmodElement::new(
                    ring.sa_add_sb_wide(a.value(), b.value()),
                    q,
                ));
            });
        }
    }
    Ok(c)
}

/// Dot product of self-describing vectors, returned as a single
/// reduced element tagged with the resolved modulus.
pub fn dot(a: &[ZmodElement], b: &[ZmodElement]) -> Result<ZmodElement, RingError> {
    let (ring, tier) = resolve(a, b)?;
    let terms = izip!(a.iter(), b.iter()).map(|(a, b)| (a.value(), b.value()));
    Ok(ZmodElement::new(
        ring.dot_terms(tier, terms),
        ring.modulus(),
    ))
}
