use {std::any::type_name, thiserror::Error};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MathError {
    #[error("division by zero: {a} / 0")]
    DivisionByZero { a: String },

    #[error("failed to parse string `{value}` into {ty}: {reason}")]
    ParseNumber {
        ty: &'static str,
        value: String,
        reason: String,
    },

    #[error("conversion overflow: {source_type}({value}) > {target_type}::MAX")]
    OverflowConversion {
        source_type: &'static str,
        target_type: &'static str,
        value: String,
    },

    #[error("multiplication overflow: {a} * {b} > {ty}::MAX")]
    OverflowMul {
        ty: &'static str,
        a: String,
        b: String,
    },

    #[error("cannot represent non-finite float `{value}` as a fraction")]
    NonFiniteFloat { value: String },
}

impl MathError {
    pub fn division_by_zero(a: impl ToString) -> Self {
        Self::DivisionByZero { a: a.to_string() }
    }

    pub fn parse_number<T, V, R>(value: V, reason: R) -> Self
    where
        V: ToString,
        R: ToString,
    {
        Self::ParseNumber {
            ty: type_name::<T>(),
            value: value.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn overflow_conversion<A: ToString, B>(source: A) -> Self {
        Self::OverflowConversion {
            source_type: type_name::<A>(),
            target_type: type_name::<B>(),
            value: source.to_string(),
        }
    }

    pub fn overflow_mul<T: ToString>(a: T, b: T) -> Self {
        Self::OverflowMul {
            ty: type_name::<T>(),
            a: a.to_string(),
            b: b.to_string(),
        }
    }

    pub fn non_finite_float(value: f64) -> Self {
        Self::NonFiniteFloat {
            value: value.to_string(),
        }
    }
}

pub type MathResult<T> = core::result::Result<T, MathError>;

// ----------------------------------- tests -----------------------------------

#[cfg(test)]
mod tests {
    use {crate::MathError, bnum::types::I256};

    #[test]
    fn error_messages() {
        assert_eq!(
            MathError::division_by_zero(7).to_string(),
            "division by zero: 7 / 0"
        );
        assert_eq!(
            MathError::parse_number::<i128, _, _>("1.5", "invalid digit").to_string(),
            "failed to parse string `1.5` into i128: invalid digit"
        );
        assert_eq!(
            MathError::overflow_conversion::<_, i128>(I256::MAX).to_string(),
            format!(
                "conversion overflow: {}({}) > i128::MAX",
                std::any::type_name::<I256>(),
                I256::MAX
            )
        );
        assert_eq!(
            MathError::overflow_mul(i128::MAX, 2).to_string(),
            format!("multiplication overflow: {} * 2 > i128::MAX", i128::MAX)
        );
        assert_eq!(
            MathError::non_finite_float(f64::NAN).to_string(),
            "cannot represent non-finite float `NaN` as a fraction"
        );
    }
}
