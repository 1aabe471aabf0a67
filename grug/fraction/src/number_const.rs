use {crate::Fraction, bnum::types::I256};

/// Describes a number's associated constants: minimum and maximum; zero, one,
/// and ten.
pub trait NumberConst {
    const MIN: Self;
    const MAX: Self;
    const ONE: Self;
    const TEN: Self;
    const ZERO: Self;
}

// --------------------------------- fraction ----------------------------------

// The stored magnitude never exceeds `i128::MAX`, so the extremes are
// `±i128::MAX / 1` rather than `i128::MIN / 1`.
impl NumberConst for Fraction {
    const MAX: Self = Self {
        sign: 1,
        numerator: i128::MAX,
        denominator: 1,
        approx: i128::MAX as f64,
    };
    const MIN: Self = Self {
        sign: -1,
        numerator: i128::MAX,
        denominator: 1,
        approx: -(i128::MAX as f64),
    };
    const ONE: Self = Self {
        sign: 1,
        numerator: 1,
        denominator: 1,
        approx: 1.0,
    };
    const TEN: Self = Self {
        sign: 1,
        numerator: 10,
        denominator: 1,
        approx: 10.0,
    };
    const ZERO: Self = Self {
        sign: 1,
        numerator: 0,
        denominator: 1,
        approx: 0.0,
    };
}

// ------------------------------- wide integers -------------------------------

macro_rules! impl_number_const {
    ($t:ty, $min:expr, $max:expr, $zero:expr, $one:expr, $ten:expr) => {
        impl NumberConst for $t {
            const MAX: Self = $max;
            const MIN: Self = $min;
            const ONE: Self = $one;
            const TEN: Self = $ten;
            const ZERO: Self = $zero;
        }

        /// A compile-time check to ensure that the constants are of the correct types.
        const _: () = {
            const fn _check_type(_: $t) {}
            _check_type($min);
            _check_type($max);
            _check_type($zero);
            _check_type($one);
            _check_type($ten);
        };
    };
}

impl_number_const! { I256, I256::MIN, I256::MAX, I256::ZERO, I256::ONE, I256::TEN }

// ----------------------------------- tests -----------------------------------
