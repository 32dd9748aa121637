// Standard Library Imports
use std::slice;

// External Crate Imports
use serde::{Serialize, Serializer};
use tracing::debug;

// Local Crate Imports
use crate::{Aggregator, ElementSummary, Elements, IsotopeRecord};

// Public API ==========================================================================================================

impl Elements {
    /// Folds `records` in order and finalizes every element's atomic weight
    #[must_use]
    pub fn from_records(records: impl IntoIterator<Item = IsotopeRecord>) -> Self {
        Aggregator::new().fold_all(records).finish()
    }

    #[must_use]
    pub fn get(&self, symbol: &str) -> Option<&ElementSummary> {
        self.index.get(symbol).map(|&i| &self.summaries[i])
    }

    /// Iterates over the summaries in the order their elements were first seen
    pub fn iter(&self) -> slice::Iter<'_, ElementSummary> {
        self.summaries.iter()
    }

    pub fn symbols(&self) -> impl Iterator<Item = &str> {
        self.iter().map(ElementSummary::symbol)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.summaries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.summaries.is_empty()
    }
}

impl<'e> IntoIterator for &'e Elements {
    type Item = &'e ElementSummary;
    type IntoIter = slice::Iter<'e, ElementSummary>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<IsotopeRecord> for Elements {
    fn from_iter<T: IntoIterator<Item = IsotopeRecord>>(iter: T) -> Self {
        Self::from_records(iter)
    }
}

// NOTE: A derived `Serialize` would go through the `HashMap` and lose the element order
impl Serialize for Elements {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter().map(|summary| (summary.symbol(), summary)))
    }
}

// Crate Internals =====================================================================================================

impl Elements {
    pub(crate) fn entry_for(&mut self, record: &IsotopeRecord) -> &mut ElementSummary {
        let i = if let Some(&i) = self.index.get(record.symbol()) {
            i
        } else {
            let i = self.summaries.len();
            debug!(
                symbol = record.symbol(),
                atomic_number = %record.atomic_number(),
                "found a new element"
            );
            self.summaries.push(ElementSummary::new(record));
            self.index.insert(record.symbol().to_owned(), i);
            i
        };
        &mut self.summaries[i]
    }

    pub(crate) fn iter_mut(&mut self) -> slice::IterMut<'_, ElementSummary> {
        self.summaries.iter_mut()
    }
}

// Module Tests ========================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        AtomicWeight, parse_catalogue,
        testing_tools::{DEUTERIUM, FLUORINE, HYDROGEN, TECHNETIUM, TRITIUM, catalogue, isotope},
    };

    #[test]
    fn entries_are_created_once() {
        let mut elements = Elements::default();
        let first = isotope("Po", 209, "208.9824308", "", "[209]");
        elements.entry_for(&first).add_isotope(first.clone());
        elements.entry_for(&first).add_isotope(first);
        assert_eq!(elements.len(), 1);
        assert_eq!(elements.get("Po").unwrap().isotopes().len(), 2);
        assert_eq!(elements.get("Pb"), None);
    }

    #[test]
    fn from_records() {
        let text = catalogue(&[TECHNETIUM, HYDROGEN, FLUORINE, DEUTERIUM, TRITIUM]);
        let elements = Elements::from_records(parse_catalogue(&text).unwrap());
        assert!(!elements.is_empty());
        assert_eq!(elements.symbols().collect::<Vec<_>>(), ["Tc", "H", "F"]);
        assert_eq!(elements.get("H").unwrap().isotopes().len(), 3);
        assert_eq!(
            elements.get("Tc").unwrap().atomic_weight(),
            AtomicWeight::Value(97.9072124)
        );

        let collected: Elements = parse_catalogue(&text).unwrap().into_iter().collect();
        assert_eq!(collected, elements);
    }

    #[test]
    fn iterate_in_first_sighting_order() {
        let elements: Elements = [
            isotope("Fe", 56, "55.93493633", "0.91754", "55.845"),
            isotope("Ca", 40, "39.962590863", "0.96941", "40.078"),
            isotope("Fe", 54, "53.93960899", "0.05845", "55.845"),
            isotope("Ar", 40, "39.9623831237", "0.996035", "39.948"),
        ]
        .into_iter()
        .collect();
        let symbols: Vec<_> = (&elements).into_iter().map(ElementSummary::symbol).collect();
        assert_eq!(symbols, ["Fe", "Ca", "Ar"]);
    }

    #[test]
    fn empty_elements() {
        let elements = Elements::from_records([]);
        assert!(elements.is_empty());
        assert_eq!(elements.iter().count(), 0);
        assert_eq!(serde_json::to_string(&elements).unwrap(), "{}");
    }

    #[test]
    fn serialize_in_order() {
        let elements: Elements = [
            isotope("Zn", 64, "63.92914201", "0.4917", "65.38"),
            isotope("B", 11, "11.00930536", "0.801", "[10.806,10.821]"),
        ]
        .into_iter()
        .collect();
        let json = serde_json::to_string(&elements).unwrap();
        let zinc = json.find(r#""Zn":"#).unwrap();
        let boron = json.find(r#""B":"#).unwrap();
        assert!(zinc < boron);
    }
}
