use std::{num::NonZeroU32, str::FromStr};

use rust_decimal::Decimal;

use crate::{AtomicNumber, IsotopeRecord, MassNumber, ParseError, parse_record};

impl IsotopeRecord {
    #[must_use]
    pub const fn atomic_number(&self) -> AtomicNumber {
        self.atomic_number
    }

    /// The element symbol, with deuterium (D) and tritium (T) already filed under H
    #[must_use]
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    #[must_use]
    pub const fn mass_number(&self) -> MassNumber {
        self.mass_number
    }

    #[must_use]
    pub const fn mass(&self) -> Decimal {
        self.mass
    }

    #[must_use]
    pub const fn abundance(&self) -> Option<Decimal> {
        self.abundance
    }

    #[must_use]
    pub fn standard_atomic_weight(&self) -> &str {
        &self.standard_atomic_weight
    }
}

impl FromStr for IsotopeRecord {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_record(s)
    }
}

impl AtomicNumber {
    #[must_use]
    pub const fn new(n: u32) -> Option<Self> {
        match NonZeroU32::new(n) {
            Some(n) => Some(Self(n)),
            None => None,
        }
    }
}

impl MassNumber {
    #[must_use]
    pub const fn new(n: u32) -> Option<Self> {
        match NonZeroU32::new(n) {
            Some(n) => Some(Self(n)),
            None => None,
        }
    }
}

// NOTE: Going through the decimal string always lands on the nearest `f64`, which `Decimal::to_f64()` doesn't promise
pub(crate) fn to_f64(decimal: Decimal) -> f64 {
    // SAFETY: The `Display` output of a `Decimal` is always a valid `f64` literal
    decimal.to_string().parse().unwrap()
}
