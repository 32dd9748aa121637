//! Folds parsed isotope records into one [`ElementSummary`](crate::ElementSummary) per element
//!
//! Records are folded strictly in input order: the first isotope of an element fixes its atomic number, symbol, and
//! standard atomic weight, and every later isotope only adds to its mass and abundance lists. Atomic weights aren't
//! known until every isotope has been seen, so they're computed once, by [`Aggregator::finish()`].

// External Crate Imports
use tracing::{info, trace};

// Local Crate Imports
use crate::{AtomicWeight, Elements, IsotopeRecord, ParseError, parse_catalogue};

// Public API ==========================================================================================================

#[derive(Clone, Debug, Default)]
pub struct Aggregator {
    elements: Elements,
}

impl Aggregator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fold(&mut self, record: IsotopeRecord) {
        trace!(
            symbol = record.symbol(),
            mass_number = %record.mass_number(),
            "folding isotope record"
        );
        self.elements.entry_for(&record).add_isotope(record);
    }

    #[must_use]
    pub fn fold_all(mut self, records: impl IntoIterator<Item = IsotopeRecord>) -> Self {
        self.extend(records);
        self
    }

    /// Computes the atomic weight of every element folded so far
    #[must_use]
    pub fn finish(mut self) -> Elements {
        for summary in self.elements.iter_mut() {
            summary.finalize();
        }

        let unknown = self
            .elements
            .iter()
            .filter(|s| s.atomic_weight().is_unknown())
            .count();
        info!(
            elements = self.elements.len(),
            unknown_atomic_weights = unknown,
            "aggregated isotope records"
        );
        self.elements
    }
}

impl Extend<IsotopeRecord> for Aggregator {
    fn extend<T: IntoIterator<Item = IsotopeRecord>>(&mut self, iter: T) {
        for record in iter {
            self.fold(record);
        }
    }
}

/// Parses a whole NIST isotope catalogue and aggregates it by element
///
/// # Errors
///
/// Fails with the first record that couldn't be parsed, in which case nothing is aggregated.
pub fn process(text: &str) -> Result<Elements, ParseError> {
    let records = parse_catalogue(text)?;
    Ok(Elements::from_records(records))
}

// Module Tests ========================================================================================================
