use {
    crate::{
        Integer, IsZero, MathError, MathResult, NextNumber, Number, NumberConst, PrevNumber,
    },
    bnum::types::I256,
    std::{
        fmt,
        iter::{Product, Sum},
        ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign},
        str::FromStr,
    },
};

/// An exact rational number, always kept in lowest terms.
///
/// A fraction is stored as an unsigned numerator, a strictly positive
/// denominator sharing no common factor with it, and an explicit sign of `+1`
/// or `-1`. Zero is always represented as `0/1` with a positive sign. A
/// floating point approximation of the value is computed once, at
/// construction, for the transcendental functions.
///
/// Fractions are immutable: every operation returns a new value.
///
/// ## Overflow
///
/// Numerator and denominator are `i128`. Arithmetic is carried out in 256-bit
/// integers and reduced before being narrowed back, so an operation only fails
/// if the _reduced_ result doesn't fit, in which case a
/// [`MathError::OverflowConversion`] is returned. Precision is not arbitrary:
/// long chains of operations on fractions with large coprime denominators will
/// eventually hit this limit.
#[derive(Debug, Clone, Copy)]
pub struct Fraction {
    pub(crate) sign: i8,
    pub(crate) numerator: i128,
    pub(crate) denominator: i128,
    pub(crate) approx: f64,
}

impl Fraction {
    /// Create a fraction from a numerator and a denominator, reducing it to
    /// lowest terms.
    ///
    /// ```rust
    /// use grug_fraction::Fraction;
    ///
    /// let fraction = Fraction::checked_new(21, -144).unwrap();
    /// assert_eq!(fraction.numerator(), -7);
    /// assert_eq!(fraction.denominator(), 48);
    /// assert_eq!(fraction.sign(), -1);
    /// ```
    pub fn checked_new(numerator: i128, denominator: i128) -> MathResult<Self> {
        Self::checked_from_wide(numerator.into_next(), denominator.into_next())
    }

    /// Create a fraction equal to the given integer.
    pub fn checked_new_integer(value: i128) -> MathResult<Self> {
        Self::checked_new(value, 1)
    }

    /// The single normalization routine every construction path goes through.
    ///
    /// Takes the pair in 256-bit width so that the unreduced results of
    /// fraction arithmetic can be handed over without overflowing.
    pub(crate) fn checked_from_wide(numerator: I256, denominator: I256) -> MathResult<Self> {
        if denominator.is_zero() {
            #[cfg(feature = "tracing")]
            tracing::debug!(%numerator, "Rejected fraction with zero denominator");

            return Err(MathError::division_by_zero(numerator));
        }

        if numerator.is_zero() {
            return Ok(Self::ZERO);
        }

        let sign = if numerator.is_negative() == denominator.is_negative() {
            1
        } else {
            -1
        };

        // Neither value can be `I256::MIN`: they are at most products of two
        // widened `i128`s.
        let numerator = numerator.abs();
        let denominator = denominator.abs();
        let gcd = numerator.checked_gcd(denominator)?;

        let reduced = (numerator / gcd)
            .checked_into_prev()
            .and_then(|numerator| Ok((numerator, (denominator / gcd).checked_into_prev()?)));

        match reduced {
            Ok((numerator, denominator)) => Ok(Self::from_parts(sign, numerator, denominator)),
            Err(err) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(%err, "Reduced fraction does not fit in i128");

                Err(err)
            },
        }
    }

    /// Assemble a fraction from parts that are already normalized, computing
    /// the floating point approximation.
    pub(crate) fn from_parts(sign: i8, numerator: i128, denominator: i128) -> Self {
        Self {
            sign,
            numerator,
            denominator,
            approx: f64::from(sign) * (numerator as f64 / denominator as f64),
        }
    }

    /// The signed numerator.
    pub fn numerator(&self) -> i128 {
        i128::from(self.sign) * self.numerator
    }

    /// The denominator, which is always strictly positive.
    pub fn denominator(&self) -> i128 {
        self.denominator
    }

    /// The sign: `1` for zero and positive fractions, `-1` for negative ones.
    pub fn sign(&self) -> i8 {
        self.sign
    }

    /// Return true if the fraction is a whole number.
    pub fn is_integer(&self) -> bool {
        self.denominator == 1
    }

    /// Swap the numerator and the denominator.
    ///
    /// Fails with [`MathError::DivisionByZero`] if the fraction is zero.
    pub fn checked_reciprocal(self) -> MathResult<Self> {
        if self.is_zero() {
            return Err(MathError::division_by_zero(self.denominator));
        }

        // A reduced pair stays reduced when swapped.
        Ok(Self::from_parts(self.sign, self.denominator, self.numerator))
    }

    /// Flip the sign. Zero stays `0/1` with a positive sign.
    pub fn negate(self) -> Self {
        if self.is_zero() {
            return self;
        }

        Self::from_parts(-self.sign, self.numerator, self.denominator)
    }
}

impl Default for Fraction {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            f.write_str("0")
        } else if self.is_integer() {
            write!(f, "{}", self.numerator())
        } else {
            write!(f, "{}/{}", self.numerator(), self.denominator)
        }
    }
}

impl FromStr for Fraction {
    type Err = MathError;

    /// Parse a fraction of the form `<numerator>/<denominator>`, where both
    /// parts are integers with an optional sign. Whitespace, decimal points
    /// and mixed numbers are rejected.
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let parsed = input
            .split_once('/')
            .ok_or_else(|| {
                MathError::parse_number::<Self, _, _>(input, "expecting `<numerator>/<denominator>`")
            })
            .and_then(|(numerator, denominator)| {
                let numerator = numerator.parse::<i128>().map_err(|err| {
                    MathError::parse_number::<Self, _, _>(input, format!("invalid numerator: {err}"))
                })?;
                let denominator = denominator.parse::<i128>().map_err(|err| {
                    MathError::parse_number::<Self, _, _>(
                        input,
                        format!("invalid denominator: {err}"),
                    )
                })?;
                Ok((numerator, denominator))
            });

        match parsed {
            Ok((numerator, denominator)) => Self::checked_new(numerator, denominator),
            Err(err) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(input, %err, "Failed to parse fraction");

                Err(err)
            },
        }
    }
}

// --------------------------------- operators ---------------------------------

impl Neg for Fraction {
    type Output = Self;

    fn neg(self) -> Self::Output {
        self.negate()
    }
}

impl Add for Fraction {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        self.checked_add(rhs).unwrap_or_else(|err| panic!("{err}"))
    }
}

impl Sub for Fraction {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        self.checked_sub(rhs).unwrap_or_else(|err| panic!("{err}"))
    }
}

impl Mul for Fraction {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        self.checked_mul(rhs).unwrap_or_else(|err| panic!("{err}"))
    }
}

impl Div for Fraction {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        self.checked_div(rhs).unwrap_or_else(|err| panic!("{err}"))
    }
}

impl Add<f64> for Fraction {
    type Output = Self;

    fn add(self, rhs: f64) -> Self::Output {
        self.checked_add_f64(rhs).unwrap_or_else(|err| panic!("{err}"))
    }
}

impl Sub<f64> for Fraction {
    type Output = Self;

    fn sub(self, rhs: f64) -> Self::Output {
        self.checked_sub_f64(rhs).unwrap_or_else(|err| panic!("{err}"))
    }
}

impl Mul<f64> for Fraction {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self::Output {
        self.checked_mul_f64(rhs).unwrap_or_else(|err| panic!("{err}"))
    }
}

impl Div<f64> for Fraction {
    type Output = Self;

    fn div(self, rhs: f64) -> Self::Output {
        self.checked_div_f64(rhs).unwrap_or_else(|err| panic!("{err}"))
    }
}

impl AddAssign for Fraction {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for Fraction {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl MulAssign for Fraction {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl DivAssign for Fraction {
    fn div_assign(&mut self, rhs: Self) {
        *self = *self / rhs;
    }
}

impl Sum for Fraction {
    fn sum<I>(iter: I) -> Self
    where
        I: Iterator<Item = Self>,
    {
        let mut sum = Self::ZERO;
        for fraction in iter {
            sum += fraction;
        }
        sum
    }
}

impl Product for Fraction {
    fn product<I>(iter: I) -> Self
    where
        I: Iterator<Item = Self>,
    {
        let mut product = Self::ONE;
        for fraction in iter {
            product *= fraction;
        }
        product
    }
}

// ----------------------------------- tests -----------------------------------

#[cfg(test)]
mod tests {
    use {
        crate::{Fraction, Integer, IsZero, MathError, NextNumber, NumberConst, PrevNumber},
        proptest::prelude::*,
        std::str::FromStr,
        test_case::test_case,
    };

    fn gcd(a: i128, b: i128) -> i128 {
        a.into_next()
            .checked_gcd(b.into_next())
            .unwrap()
            .checked_into_prev()
            .unwrap()
    }

    #[test_case(21, 144, 7, 48, 1; "reduces")]
    #[test_case(-21, 144, -7, 48, -1; "negative numerator")]
    #[test_case(21, -144, -7, 48, -1; "negative denominator")]
    #[test_case(-21, -144, 7, 48, 1; "both negative")]
    #[test_case(0, 5, 0, 1, 1; "zero")]
    #[test_case(0, -5, 0, 1, 1; "negative zero")]
    #[test_case(73, 1, 73, 1, 1; "integer")]
    #[test_case(8, 48, 1, 6, 1; "unreduced sum")]
    #[test_case(i128::MIN, i128::MIN, 1, 1, 1; "min over min")]
    #[test_case(i128::MIN, 2, -(1 << 126), 1, -1; "halved min")]
    fn normalization(
        numerator: i128,
        denominator: i128,
        expect_numerator: i128,
        expect_denominator: i128,
        expect_sign: i8,
    ) {
        let fraction = Fraction::checked_new(numerator, denominator).unwrap();
        assert_eq!(fraction.numerator(), expect_numerator);
        assert_eq!(fraction.denominator(), expect_denominator);
        assert_eq!(fraction.sign(), expect_sign);
        assert_eq!(
            fraction.to_f64(),
            expect_numerator as f64 / expect_denominator as f64
        );
    }

    #[test]
    fn zero_denominator_is_rejected() {
        assert!(matches!(
            Fraction::checked_new(1, 0),
            Err(MathError::DivisionByZero { .. })
        ));
        assert!(matches!(
            Fraction::checked_new(0, 0),
            Err(MathError::DivisionByZero { .. })
        ));
    }

    #[test]
    fn min_does_not_fit() {
        assert!(matches!(
            Fraction::checked_new(i128::MIN, 1),
            Err(MathError::OverflowConversion { .. })
        ));
        assert!(matches!(
            Fraction::checked_new(1, i128::MIN),
            Err(MathError::OverflowConversion { .. })
        ));
        assert!(matches!(
            Fraction::checked_new_integer(i128::MIN),
            Err(MathError::OverflowConversion { .. })
        ));
    }

    #[test]
    fn default_is_zero() {
        let fraction = Fraction::default();
        assert!(fraction.is_zero());
        assert_eq!(fraction, Fraction::checked_new(0, 1).unwrap());
        assert_eq!(Fraction::checked_new_integer(73).unwrap().to_string(), "73");
    }

    #[test]
    fn reciprocal() {
        let fraction = Fraction::checked_new(-7, 48).unwrap();
        let reciprocal = fraction.checked_reciprocal().unwrap();
        assert_eq!(reciprocal.numerator(), -48);
        assert_eq!(reciprocal.denominator(), 7);

        assert!(matches!(
            Fraction::ZERO.checked_reciprocal(),
            Err(MathError::DivisionByZero { .. })
        ));
    }

    #[test]
    fn negate() {
        let fraction = Fraction::checked_new(7, 48).unwrap();
        assert_eq!(fraction.negate().numerator(), -7);
        assert_eq!(fraction.negate().negate(), fraction);
        assert_eq!(-fraction, fraction.negate());
        assert_eq!(Fraction::ZERO.negate().sign(), 1);
    }

    #[test_case(Fraction::ZERO, "0"; "zero")]
    #[test_case(Fraction::checked_new(146, 2).unwrap(), "73"; "integer")]
    #[test_case(Fraction::checked_new(-146, 2).unwrap(), "-73"; "negative integer")]
    #[test_case(Fraction::checked_new(21, 144).unwrap(), "7/48"; "proper")]
    #[test_case(Fraction::checked_new(21, -144).unwrap(), "-7/48"; "negative")]
    #[test_case(Fraction::checked_new(5, 4).unwrap(), "5/4"; "improper")]
    fn display(fraction: Fraction, expect: &str) {
        assert_eq!(fraction.to_string(), expect);
    }

    #[test_case("21/144", 7, 48; "simple")]
    #[test_case("-21/144", -7, 48; "negative numerator")]
    #[test_case("21/-144", -7, 48; "negative denominator")]
    #[test_case("+3/+6", 1, 2; "explicit plus")]
    #[test_case("0/9", 0, 1; "zero")]
    fn parsing(input: &str, numerator: i128, denominator: i128) {
        let fraction = Fraction::from_str(input).unwrap();
        assert_eq!(fraction.numerator(), numerator);
        assert_eq!(fraction.denominator(), denominator);
    }

    #[test_case("7"; "missing slash")]
    #[test_case("7/"; "missing denominator")]
    #[test_case("/7"; "missing numerator")]
    #[test_case("1.5/2"; "decimal numerator")]
    #[test_case("1/2/3"; "two slashes")]
    #[test_case(" 1/2"; "leading whitespace")]
    #[test_case("1 / 2"; "inner whitespace")]
    #[test_case("a/b"; "letters")]
    #[test_case("1 1/2"; "mixed number")]
    fn parsing_fails(input: &str) {
        assert!(matches!(
            Fraction::from_str(input),
            Err(MathError::ParseNumber { .. })
        ));
    }

    #[test]
    fn parsing_zero_denominator() {
        assert!(matches!(
            Fraction::from_str("1/0"),
            Err(MathError::DivisionByZero { .. })
        ));
    }

    #[test]
    fn operators() {
        let half = Fraction::checked_new(1, 2).unwrap();
        let third = Fraction::checked_new(1, 3).unwrap();

        assert_eq!(half + third, Fraction::checked_new(5, 6).unwrap());
        assert_eq!(half - third, Fraction::checked_new(1, 6).unwrap());
        assert_eq!(half * third, Fraction::checked_new(1, 6).unwrap());
        assert_eq!(half / third, Fraction::checked_new(3, 2).unwrap());

        assert_eq!(half + 0.25, Fraction::checked_new(3, 4).unwrap());
        assert_eq!(half - 0.25, Fraction::checked_new(1, 4).unwrap());
        assert_eq!(half * 0.5, Fraction::checked_new(1, 4).unwrap());
        assert_eq!(half / 0.5, Fraction::ONE);

        let mut running = Fraction::ZERO;
        running += half;
        running *= Fraction::TEN;
        running -= third;
        running /= third;
        assert_eq!(running, Fraction::checked_new(14, 1).unwrap());
    }

    #[test]
    #[should_panic(expected = "division by zero")]
    fn division_operator_panics_on_zero() {
        let _ = Fraction::ONE / Fraction::ZERO;
    }

    #[test]
    fn sum_and_product() {
        let fractions = (1..=4).map(|d| Fraction::checked_new(1, d).unwrap());
        assert_eq!(
            fractions.clone().sum::<Fraction>(),
            Fraction::checked_new(25, 12).unwrap()
        );
        assert_eq!(
            fractions.product::<Fraction>(),
            Fraction::checked_new(1, 24).unwrap()
        );
    }

    proptest! {
        /// Re-extracting the parts of a fraction and building it again yields
        /// the same normalized pair.
        #[test]
        fn normalization_is_idempotent(
            numerator in any::<i64>(),
            denominator in any::<i64>().prop_filter("non-zero", |d| *d != 0),
        ) {
            let fraction = Fraction::checked_new(numerator.into(), denominator.into()).unwrap();
            let again = Fraction::checked_new(fraction.numerator(), fraction.denominator()).unwrap();
            prop_assert_eq!(again.numerator(), fraction.numerator());
            prop_assert_eq!(again.denominator(), fraction.denominator());
            prop_assert_eq!(again.sign(), fraction.sign());
        }

        /// The sign is the product of the input signs, and the parts are the
        /// inputs divided by their GCD.
        #[test]
        fn sign_invariant(
            numerator in any::<i64>().prop_filter("non-zero", |n| *n != 0),
            denominator in any::<i64>().prop_filter("non-zero", |d| *d != 0),
        ) {
            let (numerator, denominator) = (i128::from(numerator), i128::from(denominator));
            let fraction = Fraction::checked_new(numerator, denominator).unwrap();
            let divisor = gcd(numerator, denominator);

            prop_assert_eq!(fraction.sign(), (numerator.signum() * denominator.signum()) as i8);
            prop_assert_eq!(fraction.numerator(), i128::from(fraction.sign()) * numerator.abs() / divisor);
            prop_assert_eq!(fraction.denominator(), denominator.abs() / divisor);
            prop_assert!(fraction.denominator() > 0);
            prop_assert_eq!(gcd(fraction.numerator(), fraction.denominator()), 1);
        }

        /// Display output with a slash parses back to the same fraction.
        #[test]
        fn display_parses_back(
            numerator in any::<i64>(),
            denominator in any::<i64>().prop_filter("non-zero", |d| *d != 0),
        ) {
            let fraction = Fraction::checked_new(numerator.into(), denominator.into()).unwrap();
            let input = format!("{}/{}", fraction.numerator(), fraction.denominator());
            prop_assert_eq!(Fraction::from_str(&input).unwrap(), fraction);
        }
    }
}
