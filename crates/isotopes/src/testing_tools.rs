use indoc::indoc;

use crate::{IsotopeRecord, parse_record};

pub const HYDROGEN: &str = indoc! {"
    Atomic Number = 1
    Atomic Symbol = H
    Mass Number = 1
    Relative Atomic Mass = 1.00782503223(9)
    Isotopic Composition = 0.999885(70)
    Standard Atomic Weight = [1.00784,1.00811]
"};

pub const DEUTERIUM: &str = indoc! {"
    Atomic Number = 1
    Atomic Symbol = D
    Mass Number = 2
    Relative Atomic Mass = 2.01410177812(12)
    Isotopic Composition = 0.000115(70)
    Standard Atomic Weight = [1.00784,1.00811]
"};

pub const TRITIUM: &str = indoc! {"
    Atomic Number = 1
    Atomic Symbol = T
    Mass Number = 3
    Relative Atomic Mass = 3.0160492779(24)
    Isotopic Composition =
    Standard Atomic Weight = [1.00784,1.00811]
"};

pub const FLUORINE: &str = indoc! {"
    Atomic Number = 9
    Atomic Symbol = F
    Mass Number = 19
    Relative Atomic Mass = 18.99840316273(92)
    Isotopic Composition = 1
    Standard Atomic Weight = 18.998403163(6)
"};

pub const TECHNETIUM: &str = indoc! {"
    Atomic Number = 43
    Atomic Symbol = Tc
    Mass Number = 97
    Relative Atomic Mass = 96.9063667(40)
    Isotopic Composition =
    Standard Atomic Weight = [98]

    Atomic Number = 43
    Atomic Symbol = Tc
    Mass Number = 98
    Relative Atomic Mass = 97.9072124(36)
    Isotopic Composition =
    Standard Atomic Weight = [98]

    Atomic Number = 43
    Atomic Symbol = Tc
    Mass Number = 99
    Relative Atomic Mass = 98.9062508(10)
    Isotopic Composition =
    Standard Atomic Weight = [98]
"};

/// Joins record blocks into a catalogue, the way NIST separates them
pub fn catalogue(blocks: &[&str]) -> String {
    blocks.join("\n")
}

/// Builds a record from bare values, for exercising the aggregator directly
pub fn isotope(
    symbol: &str,
    mass_number: u32,
    mass: &str,
    abundance: &str,
    standard_atomic_weight: &str,
) -> IsotopeRecord {
    let block = format!(
        "Atomic Number = 1\nAtomic Symbol = {symbol}\nMass Number = {mass_number}\n\
        Relative Atomic Mass = {mass}\nIsotopic Composition = {abundance}\n\
        Standard Atomic Weight = {standard_atomic_weight}"
    );
    parse_record(&block).unwrap()
}

macro_rules! assert_miette_snapshot {
    ($diag:expr, @$snapshot:literal) => {{
        use insta::{assert_snapshot, with_settings};
        use miette::{GraphicalReportHandler, GraphicalTheme};

        let mut out = String::new();
        GraphicalReportHandler::new_themed(GraphicalTheme::unicode_nocolor())
            .with_width(80)
            .render_report(&mut out, &$diag.unwrap_err())
            .unwrap();
        with_settings!({
            description => stringify!($diag)
        }, {
            assert_snapshot!(out, @$snapshot);
        });
    }};
}

pub(crate) use assert_miette_snapshot;
