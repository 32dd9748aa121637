//! Folds NIST isotope records into per-element summaries with a derived atomic weight

pub mod aggregator;
mod atomic_weight;
mod elements;
pub mod errors;
pub mod export;
pub mod parsers;
mod record;
mod summary;
#[cfg(test)]
mod testing_tools;

// Standard Library Imports
use std::num::NonZeroU32;

// External Crate Imports
use ahash::HashMap;
use derive_more::{Display, FromStr, IsVariant, Unwrap};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub use aggregator::{Aggregator, process};
pub use errors::{ParseError, ParseErrorKind};
pub use parsers::{parse_catalogue, parse_record};

// ---------------------------------------------------------------------------------------------------------------------

#[derive(Clone, Eq, PartialEq, Debug)]
pub struct IsotopeRecord {
    atomic_number: AtomicNumber,
    symbol: String,
    mass_number: MassNumber,
    mass: Decimal,
    abundance: Option<Decimal>,
    standard_atomic_weight: String,
}

// NOTE: `isotopes` is only there for the atomic weight inference, so it's never exported and always comes back empty
// when a summary is read back in
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementSummary {
    atomic_number: AtomicNumber,
    symbol: String,
    standard_atomic_weight: String,
    masses: Vec<f64>,
    abundances: Vec<f64>,
    #[serde(skip)]
    isotopes: Vec<IsotopeRecord>,
    atomic_weight: AtomicWeight,
}

// NOTE: Kept in first-sighting order, which is atomic-number order for the NIST catalogue
#[derive(Clone, PartialEq, Debug, Default)]
pub struct Elements {
    summaries: Vec<ElementSummary>,
    index: HashMap<String, usize>,
}

// ---------------------------------------------------------------------------------------------------------------------

#[derive(
    Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Display, FromStr, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct AtomicNumber(NonZeroU32);

#[derive(
    Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Display, FromStr, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct MassNumber(NonZeroU32);

// MISSING: `Serialize` is written by hand, since `Unknown` needs to come out as a bare string
#[derive(Copy, Clone, PartialEq, Debug, Default, IsVariant, Unwrap, Deserialize)]
#[serde(try_from = "atomic_weight::AtomicWeightRepr")]
pub enum AtomicWeight {
    Value(f64),
    #[default]
    Unknown,
}
