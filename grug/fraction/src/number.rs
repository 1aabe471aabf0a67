use crate::{Fraction, Integer, MathResult, NextNumber};

/// Describes the basic arithmetic operations on fractions.
///
/// Every operation returns a new, normalized value.
pub trait Number: Sized {
    fn checked_add(self, other: Self) -> MathResult<Self>;

    fn checked_sub(self, other: Self) -> MathResult<Self>;

    fn checked_mul(self, other: Self) -> MathResult<Self>;

    fn checked_div(self, other: Self) -> MathResult<Self>;
}

impl Number for Fraction {
    /// Align both operands on the least common denominator and add the scaled
    /// numerators.
    fn checked_add(self, other: Self) -> MathResult<Self> {
        let self_denominator = self.denominator.into_next();
        let other_denominator = other.denominator.into_next();

        // Denominators are below 2^127, so the LCD, the scaled numerators and
        // their sum all stay below 2^255.
        let lcd = self_denominator.checked_lcm(other_denominator)?;
        let self_numerator = self.numerator().into_next() * (lcd / self_denominator);
        let other_numerator = other.numerator().into_next() * (lcd / other_denominator);

        Self::checked_from_wide(self_numerator + other_numerator, lcd)
    }

    fn checked_sub(self, other: Self) -> MathResult<Self> {
        self.checked_add(other.negate())
    }

    fn checked_mul(self, other: Self) -> MathResult<Self> {
        let numerator = self.numerator().into_next() * other.numerator().into_next();
        let denominator = self.denominator.into_next() * other.denominator.into_next();

        Self::checked_from_wide(numerator, denominator)
    }

    /// Multiply by the reciprocal of `other`; fails with
    /// [`MathError::DivisionByZero`](crate::MathError::DivisionByZero) if
    /// `other` is zero.
    fn checked_div(self, other: Self) -> MathResult<Self> {
        self.checked_mul(other.checked_reciprocal()?)
    }
}

// ------------------------------- float operands ------------------------------

/// The float operand is first turned into a fraction with
/// [`Fraction::checked_from_f64`], so these fail wherever that does.
impl Fraction {
    pub fn checked_add_f64(self, other: f64) -> MathResult<Self> {
        self.checked_add(Self::checked_from_f64(other)?)
    }

    pub fn checked_sub_f64(self, other: f64) -> MathResult<Self> {
        self.checked_sub(Self::checked_from_f64(other)?)
    }

    pub fn checked_mul_f64(self, other: f64) -> MathResult<Self> {
        self.checked_mul(Self::checked_from_f64(other)?)
    }

    pub fn checked_div_f64(self, other: f64) -> MathResult<Self> {
        self.checked_div(Self::checked_from_f64(other)?)
    }
}

// ----------------------------------- tests -----------------------------------
