use crate::{Fraction, MathResult, Number, NumberConst};

// These apply the standard float functions to the approximation. The results
// are irrational in general, so they are returned as floats, not fractions.
impl Fraction {
    pub fn sin(&self) -> f64 {
        self.approx.sin()
    }

    pub fn cos(&self) -> f64 {
        self.approx.cos()
    }

    pub fn tan(&self) -> f64 {
        self.approx.tan()
    }

    pub fn asin(&self) -> f64 {
        self.approx.asin()
    }

    pub fn acos(&self) -> f64 {
        self.approx.acos()
    }

    pub fn atan(&self) -> f64 {
        self.approx.atan()
    }

    pub fn sinh(&self) -> f64 {
        self.approx.sinh()
    }

    pub fn cosh(&self) -> f64 {
        self.approx.cosh()
    }

    pub fn tanh(&self) -> f64 {
        self.approx.tanh()
    }

    /// Raise the fraction to a float power. See [`Fraction::checked_pow`] for
    /// an exact integer power.
    pub fn pow(&self, exponent: f64) -> f64 {
        self.approx.powf(exponent)
    }

    pub fn sqrt(&self) -> f64 {
        self.approx.sqrt()
    }

    /// Natural logarithm.
    pub fn ln(&self) -> f64 {
        self.approx.ln()
    }

    pub fn log10(&self) -> f64 {
        self.approx.log10()
    }

    /// Logarithm in an arbitrary base, as `ln(self) / ln(base)`.
    pub fn log(&self, base: f64) -> f64 {
        self.ln() / base.ln()
    }

    /// Interpret the fraction as radians and convert it to degrees.
    pub fn to_degrees(&self) -> f64 {
        self.approx.to_degrees()
    }

    /// Interpret the fraction as degrees and convert it to radians.
    pub fn to_radians(&self) -> f64 {
        self.approx.to_radians()
    }

    /// Raise the fraction to an integer power, exactly, by squaring.
    ///
    /// A negative exponent raises the reciprocal, so it fails with
    /// [`MathError::DivisionByZero`](crate::MathError::DivisionByZero) for
    /// zero. `x^0` is one for every `x`, including zero.
    pub fn checked_pow(self, exponent: i32) -> MathResult<Self> {
        let mut base = if exponent < 0 {
            self.checked_reciprocal()?
        } else {
            self
        };
        let mut exponent = exponent.unsigned_abs();
        let mut result = Self::ONE;

        while exponent > 0 {
            if exponent % 2 == 1 {
                result = result.checked_mul(base)?;
            }

            exponent /= 2;

            if exponent > 0 {
                base = base.checked_mul(base)?;
            }
        }

        Ok(result)
    }
}

// ----------------------------------- tests -----------------------------------
