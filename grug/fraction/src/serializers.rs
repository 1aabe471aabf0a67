use {
    crate::Fraction,
    borsh::{BorshDeserialize, BorshSerialize},
    serde::{de, ser},
    std::{fmt, io, str::FromStr},
};

// ----------------------------------- serde -----------------------------------

// Always written with the slash, so that the strict `FromStr` accepts it back.
impl ser::Serialize for Fraction {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: ser::Serializer,
    {
        serializer.serialize_str(&format!("{}/{}", self.numerator(), self.denominator))
    }
}

impl<'de> de::Deserialize<'de> for Fraction {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        deserializer.deserialize_str(FractionVisitor)
    }
}

struct FractionVisitor;

impl de::Visitor<'_> for FractionVisitor {
    type Value = Fraction;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a string-encoded fraction of the form `<numerator>/<denominator>`")
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Fraction::from_str(v).map_err(E::custom)
    }
}

// ----------------------------------- borsh -----------------------------------

impl BorshSerialize for Fraction {
    fn serialize<W>(&self, writer: &mut W) -> io::Result<()>
    where
        W: io::Write,
    {
        BorshSerialize::serialize(&self.numerator(), writer)?;
        BorshSerialize::serialize(&self.denominator, writer)
    }
}

impl BorshDeserialize for Fraction {
    /// Only the canonical encoding is accepted: the pair must already be in
    /// lowest terms, so that every value has exactly one byte representation.
    fn deserialize_reader<R>(reader: &mut R) -> io::Result<Self>
    where
        R: io::Read,
    {
        let numerator = i128::deserialize_reader(reader)?;
        let denominator = i128::deserialize_reader(reader)?;
        let fraction = Fraction::checked_new(numerator, denominator).map_err(io::Error::other)?;

        if fraction.numerator() != numerator || fraction.denominator != denominator {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!("fraction {numerator}/{denominator} is not in lowest terms"),
            ));
        }

        Ok(fraction)
    }
}

// ----------------------------------- tests -----------------------------------
