use {
    crate::{MathError, MathResult},
    bnum::types::I256,
};

/// Describes a number type that can be cast into another type of a bigger
/// word size.
///
/// Fraction arithmetic widens `i128` operands into [`I256`], in which the
/// products and sums of two fractions can never overflow.
pub trait NextNumber {
    type Next;

    fn into_next(self) -> Self::Next;
}

/// Describes a number type that can be cast into another type of a smaller
/// word size, failing if the value doesn't fit.
pub trait PrevNumber {
    type Prev;

    fn checked_into_prev(self) -> MathResult<Self::Prev>;
}

macro_rules! impl_next {
    ($this:ty => $next:ty) => {
        impl NextNumber for $this {
            type Next = $next;

            fn into_next(self) -> Self::Next {
                <$next>::from(self)
            }
        }

        impl PrevNumber for $next {
            type Prev = $this;

            fn checked_into_prev(self) -> MathResult<Self::Prev> {
                <$this>::try_from(self).map_err(|_| MathError::overflow_conversion::<_, $this>(self))
            }
        }
    };
    ($($this:ty => $next:ty),+ $(,)?) => {
        $(
            impl_next!($this => $next);
        )+
    };
}

impl_next! {
    i128 => I256,
}

// ----------------------------------- tests -----------------------------------
