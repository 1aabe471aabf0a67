use {
    crate::{IsZero, MathError, MathResult},
    bnum::types::I256,
};

/// Describes the divisibility operations that fraction normalization is built
/// on. Both operate on the magnitudes of the operands, so the results are
/// never negative.
///
/// Fraction arithmetic widens its `i128` operands into [`I256`] first (see
/// [`NextNumber`](crate::NextNumber)), where neither operation can fail. They
/// are checked because the trait accepts any `I256`: the magnitude of
/// `I256::MIN` doesn't fit, and the LCM of two large values may not either.
pub trait Integer: Sized + Copy {
    /// Greatest common divisor, by Euclid's algorithm.
    ///
    /// `gcd(a, 0) == |a|`, and in particular `gcd(0, 0) == 0`.
    fn checked_gcd(self, other: Self) -> MathResult<Self>;

    /// Least common multiple, computed as `|a| / gcd(a, b) * |b|` so the
    /// intermediate value never exceeds the result.
    ///
    /// `lcm(a, 0) == 0`.
    fn checked_lcm(self, other: Self) -> MathResult<Self>;
}

fn checked_abs(value: I256) -> MathResult<I256> {
    value
        .checked_abs()
        .ok_or_else(|| MathError::overflow_mul(value, -I256::ONE))
}

impl Integer for I256 {
    fn checked_gcd(self, other: Self) -> MathResult<Self> {
        let mut a = checked_abs(self)?;
        let mut b = checked_abs(other)?;

        while b.is_non_zero() {
            let r = a % b;
            a = b;
            b = r;
        }

        Ok(a)
    }

    fn checked_lcm(self, other: Self) -> MathResult<Self> {
        if self.is_zero() || other.is_zero() {
            return Ok(Self::ZERO);
        }

        let gcd = self.checked_gcd(other)?;

        (checked_abs(self)? / gcd)
            .checked_mul(checked_abs(other)?)
            .ok_or_else(|| MathError::overflow_mul(self, other))
    }
}

// ----------------------------------- tests -----------------------------------
