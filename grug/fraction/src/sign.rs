use crate::Fraction;

/// Describes a number that has a sign.
pub trait Sign {
    /// Return the absolute value of the number.
    fn abs(self) -> Self;

    /// Return true if the number is strictly smaller than zero.
    fn is_negative(&self) -> bool;

    /// Return true if the number is strictly greater than zero.
    fn is_positive(&self) -> bool;
}

impl Sign for Fraction {
    fn abs(self) -> Self {
        // Rebuilt from the unsigned magnitude, which is already in lowest terms.
        Self::from_parts(1, self.numerator, self.denominator)
    }

    fn is_negative(&self) -> bool {
        self.sign < 0
    }

    fn is_positive(&self) -> bool {
        self.sign > 0 && self.numerator != 0
    }
}

// ----------------------------------- tests -----------------------------------
