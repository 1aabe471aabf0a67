use {
    crate::{Fraction, MathError, MathResult},
    bnum::types::I256,
    std::str::FromStr,
};

// ------------------------------- float -> frac -------------------------------

impl Fraction {
    /// Create a fraction from a float by reading the digits of its decimal
    /// representation: `1.25` becomes `125/100`, which reduces to `5/4`.
    ///
    /// The representation is Rust's shortest round-tripping one, so `0.1`
    /// becomes exactly `1/10` rather than the binary value nearest to it.
    ///
    /// Fails for NaN and infinities, and for values whose digits don't fit:
    /// magnitudes or decimal expansions that are too long (e.g. `1e300`,
    /// `5e-324`) yield [`MathError::OverflowConversion`].
    pub fn checked_from_f64(value: f64) -> MathResult<Self> {
        if !value.is_finite() {
            #[cfg(feature = "tracing")]
            tracing::debug!(value, "Rejected non-finite float");

            return Err(MathError::non_finite_float(value));
        }

        // `Display` for floats never uses scientific notation.
        let repr = value.to_string();
        let (whole, fractional) = repr.split_once('.').unwrap_or((&repr, ""));

        let numerator = I256::from_str(&format!("{whole}{fractional}")).ok();
        let denominator = u32::try_from(fractional.len())
            .ok()
            .and_then(|digits| I256::TEN.checked_pow(digits));

        let (Some(numerator), Some(denominator)) = (numerator, denominator) else {
            #[cfg(feature = "tracing")]
            tracing::debug!(value, "Float has too many digits for a fraction");

            return Err(MathError::overflow_conversion::<_, Self>(value));
        };

        Self::checked_from_wide(numerator, denominator)
    }
}

impl TryFrom<f64> for Fraction {
    type Error = MathError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::checked_from_f64(value)
    }
}

// ------------------------------- frac -> float -------------------------------

impl Fraction {
    /// The floating point approximation of the fraction.
    pub fn to_f64(&self) -> f64 {
        self.approx
    }
}

impl From<Fraction> for f64 {
    fn from(fraction: Fraction) -> Self {
        fraction.to_f64()
    }
}

// -------------------------------- int -> frac --------------------------------

macro_rules! impl_from_int {
    ($t:ty) => {
        impl From<$t> for Fraction {
            fn from(value: $t) -> Self {
                let sign = if value < <$t>::default() { -1 } else { 1 };
                // Always fits, since the type is narrower than `i128`.
                Self::from_parts(sign, i128::from(value.unsigned_abs()), 1)
            }
        }
    };
    ($($t:ty),+ $(,)?) => {
        $(
            impl_from_int!($t);
        )+
    };
}

impl_from_int! { i8, i16, i32, i64 }

macro_rules! impl_from_uint {
    ($t:ty) => {
        impl From<$t> for Fraction {
            fn from(value: $t) -> Self {
                Self::from_parts(1, i128::from(value), 1)
            }
        }
    };
    ($($t:ty),+ $(,)?) => {
        $(
            impl_from_uint!($t);
        )+
    };
}

impl_from_uint! { u8, u16, u32, u64 }

impl TryFrom<i128> for Fraction {
    type Error = MathError;

    fn try_from(value: i128) -> Result<Self, Self::Error> {
        Self::checked_new_integer(value)
    }
}

// -------------------------------- frac -> int --------------------------------

impl Fraction {
    /// Convert the fraction to an integer, rounded towards zero.
    pub fn to_integer(&self) -> i128 {
        self.numerator() / self.denominator
    }

    /// Convert the fraction to an integer, rounded towards negative infinity.
    pub fn to_integer_floor(&self) -> i128 {
        // The denominator is positive, so Euclidean division is the floor.
        self.numerator().div_euclid(self.denominator)
    }

    /// Convert the fraction to an integer, rounded towards positive infinity.
    pub fn to_integer_ceil(&self) -> i128 {
        let floor = self.to_integer_floor();

        if self.is_integer() {
            floor
        } else {
            // Can't overflow: `floor < numerator <= i128::MAX`.
            floor + 1
        }
    }
}

// ----------------------------------- tests -----------------------------------
