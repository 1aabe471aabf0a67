use {
    crate::Fraction,
    bnum::types::I256,
};

/// Describes a number that can be compared to zero.
pub trait IsZero {
    /// Return true if the number is zero; false otherwise.
    fn is_zero(&self) -> bool;

    /// Return true if the number is not zero; false otherwise.
    #[inline]
    fn is_non_zero(&self) -> bool {
        !self.is_zero()
    }
}

// --------------------------------- fraction ----------------------------------

impl IsZero for Fraction {
    fn is_zero(&self) -> bool {
        // A zero fraction is always normalized to `0/1`, so the numerator
        // alone decides.
        self.numerator == 0
    }
}

// ------------------------------- wide integers -------------------------------

impl IsZero for I256 {
    fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }
}

// ----------------------------------- tests -----------------------------------
