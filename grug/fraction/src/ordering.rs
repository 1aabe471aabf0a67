use {
    crate::{Fraction, MathResult, NextNumber},
    std::{
        cmp::Ordering,
        hash::{Hash, Hasher},
    },
};

// Fractions are always in lowest terms with a positive denominator, so two
// fractions are equal iff their parts are. The float approximation is left
// out: it is derived from the parts.

impl PartialEq for Fraction {
    fn eq(&self, other: &Self) -> bool {
        self.sign == other.sign
            && self.numerator == other.numerator
            && self.denominator == other.denominator
    }
}

impl Eq for Fraction {}

impl Hash for Fraction {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.sign.hash(state);
        self.numerator.hash(state);
        self.denominator.hash(state);
    }
}

impl Ord for Fraction {
    /// Compare by cross-multiplication, `a/b <=> c/d` iff `a*d <=> c*b`, which
    /// is exact since both denominators are positive. The products are taken
    /// in 256 bits and can't overflow.
    fn cmp(&self, other: &Self) -> Ordering {
        let lhs = self.numerator().into_next() * other.denominator.into_next();
        let rhs = other.numerator().into_next() * self.denominator.into_next();

        lhs.cmp(&rhs)
    }
}

impl PartialOrd for Fraction {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// ------------------------------- frac vs float -------------------------------

impl Fraction {
    /// Compare against a float, after converting it with
    /// [`Fraction::checked_from_f64`]. Returns the conversion error if the
    /// float can't be represented.
    pub fn checked_cmp_f64(&self, other: f64) -> MathResult<Ordering> {
        Self::checked_from_f64(other).map(|other| self.cmp(&other))
    }
}

/// A float that can't be converted to a fraction is never equal to one.
impl PartialEq<f64> for Fraction {
    fn eq(&self, other: &f64) -> bool {
        matches!(self.checked_cmp_f64(*other), Ok(Ordering::Equal))
    }
}

/// A float that can't be converted to a fraction is unordered relative to
/// all fractions.
impl PartialOrd<f64> for Fraction {
    fn partial_cmp(&self, other: &f64) -> Option<Ordering> {
        self.checked_cmp_f64(*other).ok()
    }
}

// ----------------------------------- tests -----------------------------------
