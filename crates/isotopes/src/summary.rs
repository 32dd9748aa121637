use rust_decimal::Decimal;
use tracing::debug;

use crate::{AtomicNumber, AtomicWeight, ElementSummary, IsotopeRecord, record::to_f64};

const ROUNDING_DECIMAL_PLACES: usize = 5;

impl ElementSummary {
    #[must_use]
    pub const fn atomic_number(&self) -> AtomicNumber {
        self.atomic_number
    }

    #[must_use]
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    #[must_use]
    pub fn standard_atomic_weight(&self) -> &str {
        &self.standard_atomic_weight
    }

    /// The masses of every isotope with a natural abundance, rounded to 5 decimal places
    #[must_use]
    pub fn masses(&self) -> &[f64] {
        &self.masses
    }

    /// Index-aligned with [`ElementSummary::masses()`]
    #[must_use]
    pub fn abundances(&self) -> &[f64] {
        &self.abundances
    }

    #[must_use]
    pub fn isotopes(&self) -> &[IsotopeRecord] {
        &self.isotopes
    }

    #[must_use]
    pub const fn atomic_weight(&self) -> AtomicWeight {
        self.atomic_weight
    }
}

impl ElementSummary {
    // NOTE: Only seeds the summary, so the isotope still needs adding with `add_isotope()`
    pub(crate) fn new(
        &IsotopeRecord {
            atomic_number,
            ref symbol,
            ref standard_atomic_weight,
            ..
        }: &IsotopeRecord,
    ) -> Self {
        Self {
            atomic_number,
            symbol: symbol.clone(),
            standard_atomic_weight: standard_atomic_weight.clone(),
            masses: Vec::new(),
            abundances: Vec::new(),
            isotopes: Vec::new(),
            atomic_weight: AtomicWeight::default(),
        }
    }

    pub(crate) fn add_isotope(&mut self, isotope: IsotopeRecord) {
        // NOTE: A present abundance of zero still counts as present
        if let Some(abundance) = isotope.abundance {
            self.masses.push(rounded(isotope.mass));
            self.abundances.push(rounded(abundance));
        }
        self.isotopes.push(isotope);
    }

    pub(crate) fn finalize(&mut self) {
        self.atomic_weight = if self.abundances.is_empty() {
            let masses = self.isotopes.iter().map(|i| to_f64(i.mass));
            let weight = AtomicWeight::closest_mass(&self.standard_atomic_weight, masses);
            debug!(
                symbol = self.symbol,
                standard_atomic_weight = self.standard_atomic_weight,
                %weight,
                "no natural abundances, so inferred the atomic weight from the closest isotope mass"
            );
            weight
        } else {
            AtomicWeight::weighted_sum(&self.masses, &self.abundances)
        };
    }
}

// NOTE: Rounds the exact binary value of the nearest `f64`, not the written decimal, so 0.999885 (stored as
// 0.99988500000000002...) rounds up to 0.99989
fn rounded(value: Decimal) -> f64 {
    let value = to_f64(value);
    let precision = ROUNDING_DECIMAL_PLACES;
    // SAFETY: Any finite `f64` formatted with a fixed precision is a valid `f64` literal
    format!("{value:.precision$}").parse().unwrap()
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;
    use crate::testing_tools::isotope;

    #[test]
    fn seeded_from_first_isotope() {
        let first = isotope("Po", 208, "207.9812461", "", "[209]");
        let mut polonium = ElementSummary::new(&first);
        assert_eq!(polonium.symbol(), "Po");
        assert_eq!(polonium.standard_atomic_weight(), "[209]");
        assert!(polonium.isotopes().is_empty());
        assert!(polonium.atomic_weight().is_unknown());

        polonium.add_isotope(first);
        polonium.add_isotope(isotope("Po", 209, "208.9824308", "", "[210]"));
        assert_eq!(polonium.standard_atomic_weight(), "[209]");
        assert_eq!(polonium.isotopes().len(), 2);
        assert!(polonium.masses().is_empty());
        assert!(polonium.abundances().is_empty());
    }

    #[test]
    fn only_abundant_isotopes_have_masses() {
        let hydrogen = isotope("H", 1, "1.00782503223", "0.999885", "[1.00784,1.00811]");
        let mut summary = ElementSummary::new(&hydrogen);
        summary.add_isotope(hydrogen);
        summary.add_isotope(isotope("D", 2, "2.01410177812", "0.000115", ""));
        summary.add_isotope(isotope("T", 3, "3.0160492779", "", ""));
        summary.add_isotope(isotope("H", 4, "4.02643", "0", ""));

        assert_eq!(summary.isotopes().len(), 4);
        assert_eq!(summary.masses(), [1.00783, 2.0141, 4.02643]);
        assert_eq!(summary.abundances(), [0.99989, 0.00012, 0.0]);
    }

    #[test]
    fn finalize_with_abundances() {
        let hydrogen = isotope("H", 1, "1.00782503223", "0.999885", "[1.00784,1.00811]");
        let mut summary = ElementSummary::new(&hydrogen);
        summary.add_isotope(hydrogen);
        summary.add_isotope(isotope("D", 2, "2.01410177812", "0.000115", ""));
        summary.finalize();

        let weight = summary.atomic_weight().unwrap_value();
        assert_eq!(weight, 1.00783 * 0.99989 + 2.0141 * 0.00012);
        assert!((weight - 1.007946).abs() < 1e-4);
    }

    #[test]
    fn finalize_without_abundances() {
        let first = isotope("Po", 209, "209.0", "", "209");
        let mut polonium = ElementSummary::new(&first);
        polonium.add_isotope(first);
        polonium.add_isotope(isotope("Po", 210, "210.0", "", "209"));
        polonium.finalize();
        assert_eq!(polonium.atomic_weight(), AtomicWeight::Value(209.0));

        let first = isotope("Po", 209, "209.0", "", "5");
        let mut polonium = ElementSummary::new(&first);
        polonium.add_isotope(first);
        polonium.finalize();
        assert!(polonium.atomic_weight().is_unknown());

        let first = isotope("Og", 294, "294.21392", "", "");
        let mut oganesson = ElementSummary::new(&first);
        oganesson.add_isotope(first);
        oganesson.finalize();
        assert!(oganesson.atomic_weight().is_unknown());
    }

    #[test]
    fn closest_mass_uses_full_precision() {
        let first = isotope("Tc", 98, "97.9072124", "", "[98]");
        let mut technetium = ElementSummary::new(&first);
        technetium.add_isotope(first);
        technetium.finalize();
        assert_eq!(technetium.atomic_weight(), AtomicWeight::Value(97.9072124));
    }

    #[test]
    fn rounding_to_five_places() {
        assert_eq!(rounded(dec!(1.00782503223)), 1.00783);
        assert_eq!(rounded(dec!(18.99840316273)), 18.9984);
        assert_eq!(rounded(dec!(1)), 1.0);
        // Written midpoints go whichever way their nearest `f64` lies
        assert_eq!(rounded(dec!(0.999885)), 0.99989);
        assert_eq!(rounded(dec!(0.000115)), 0.00012);
        assert_eq!(rounded(dec!(1.000005)), 1.00001);
        assert_eq!(rounded(dec!(0.123455)), 0.12345);
        assert_eq!(rounded(dec!(2.000025)), 2.00002);
    }
}
