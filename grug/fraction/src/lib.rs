mod conversions;
mod error;
mod fraction;
mod integer;
mod is_zero;
mod next;
mod number;
mod number_const;
mod ordering;
mod serializers;
mod sign;
mod transcendental;

pub use {
    error::*, fraction::*, integer::*, is_zero::*, next::*, number::*, number_const::*, sign::*,
};
