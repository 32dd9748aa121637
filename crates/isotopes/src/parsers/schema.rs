// Standard Library Imports
use std::num::NonZeroU32;

// External Crate Imports
use rust_decimal::Decimal;

// Local Crate Imports
use crate::errors::ParseErrorKind;

// Public API ==========================================================================================================

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum FieldKind {
    Integer,
    Symbol,
    Decimal,
    Text,
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Field {
    pub name: &'static str,
    /// Every label accepted for this field, starting with `name`
    pub labels: &'static [&'static str],
    pub kind: FieldKind,
    pub optional: bool,
}

/// The lines of an isotope record, in the order they must appear
pub const ISOTOPE_SCHEMA: [Field; 6] = [
    Field {
        name: "Atomic Number",
        labels: &["Atomic Number"],
        kind: FieldKind::Integer,
        optional: false,
    },
    Field {
        name: "Atomic Symbol",
        labels: &["Atomic Symbol"],
        kind: FieldKind::Symbol,
        optional: false,
    },
    Field {
        name: "Mass Number",
        labels: &["Mass Number"],
        kind: FieldKind::Integer,
        optional: false,
    },
    // NOTE: Older NIST releases call this "Atomic Mass"
    Field {
        name: "Relative Atomic Mass",
        labels: &["Relative Atomic Mass", "Atomic Mass"],
        kind: FieldKind::Decimal,
        optional: false,
    },
    Field {
        name: "Isotopic Composition",
        labels: &["Isotopic Composition"],
        kind: FieldKind::Decimal,
        optional: true,
    },
    Field {
        name: "Standard Atomic Weight",
        labels: &["Standard Atomic Weight"],
        kind: FieldKind::Text,
        optional: true,
    },
];

impl Field {
    #[must_use]
    pub fn accepts(&self, label: &str) -> bool {
        self.labels.contains(&label)
    }
}

// Crate Internals =====================================================================================================

#[derive(Clone, Eq, PartialEq, Debug)]
pub(crate) enum FieldValue {
    Integer(NonZeroU32),
    Symbol(String),
    Decimal(Option<Decimal>),
    Text(String),
}

impl Field {
    // NOTE: Expects the value to already be trimmed and stripped of any uncertainty
    pub(crate) fn coerce(&self, value: &str) -> Result<FieldValue, ParseErrorKind> {
        let field = self.name;
        if value.is_empty() {
            return match (self.kind, self.optional) {
                (FieldKind::Decimal, true) => Ok(FieldValue::Decimal(None)),
                (FieldKind::Text, true) => Ok(FieldValue::Text(String::new())),
                _ => Err(ParseErrorKind::MissingValue { field }),
            };
        }

        let owned_value = || value.to_owned();
        match self.kind {
            FieldKind::Integer => value.parse().map(FieldValue::Integer).map_err(|_| {
                ParseErrorKind::InvalidInteger {
                    field,
                    value: owned_value(),
                }
            }),
            FieldKind::Symbol => element_symbol(value)
                .map(|s| FieldValue::Symbol(s.to_owned()))
                .ok_or_else(|| ParseErrorKind::InvalidSymbol {
                    field,
                    value: owned_value(),
                }),
            FieldKind::Decimal => decimal(value)
                .map(|d| FieldValue::Decimal(Some(d)))
                .ok_or_else(|| ParseErrorKind::InvalidDecimal {
                    field,
                    value: owned_value(),
                }),
            FieldKind::Text => Ok(FieldValue::Text(value.to_owned())),
        }
    }
}

// Private Helper Functions ============================================================================================

/// Element = uppercase , [ lowercase ] ;
fn element_symbol(s: &str) -> Option<&str> {
    let chrs: Vec<_> = s.chars().collect();
    match chrs[..] {
        [f] if f.is_ascii_uppercase() => Some(s),
        [f, l] if f.is_ascii_uppercase() && l.is_ascii_lowercase() => Some(s),
        _ => None,
    }
}

// NOTE: Parsed losslessly, so that rounding later on happens on the digits that were actually written
fn decimal(s: &str) -> Option<Decimal> {
    if s.contains(['e', 'E']) {
        Decimal::from_scientific(s).ok()
    } else {
        Decimal::from_str_exact(s).ok()
    }
}

// Module Tests ========================================================================================================
