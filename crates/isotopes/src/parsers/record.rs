// External Crate Imports
use tracing::trace;

// Local Crate Imports
use super::{
    primitives::{labeled_value, measurement},
    schema::{Field, FieldValue, ISOTOPE_SCHEMA},
};
use crate::{
    AtomicNumber, IsotopeRecord, MassNumber, ParseError, ParseErrorKind, errors::RecordError,
};

// Public API ==========================================================================================================

/// Parses a single isotope record, one `label = value` line per field of the
/// [`ISOTOPE_SCHEMA`](super::schema::ISOTOPE_SCHEMA)
///
/// # Errors
///
/// Fails if the block doesn't have exactly one line per schema field, if a label is out of place, or if a value can't
/// be coerced to its field's type.
pub fn parse_record(block: &str) -> Result<IsotopeRecord, ParseError> {
    isotope_record(block).map_err(|e| e.into_parse_error(block, 0, 1))
}

// Crate Internals =====================================================================================================

pub(super) fn isotope_record(block: &str) -> Result<IsotopeRecord, RecordError> {
    let lines: Vec<_> = block.lines().filter(|l| !l.trim().is_empty()).collect();
    if lines.len() != ISOTOPE_SCHEMA.len() {
        let kind = ParseErrorKind::FieldCount {
            expected: ISOTOPE_SCHEMA.len(),
            found: lines.len(),
        };
        return Err(RecordError::new(block, block.trim_end(), kind));
    }

    let values: Vec<_> = ISOTOPE_SCHEMA
        .iter()
        .zip(lines)
        .map(|(field, line)| field_value(block, field, line))
        .collect::<Result<_, _>>()?;

    // NOTE: `Field::coerce` always returns the variant matching the field's kind, and a required field is never `None`
    let Ok(
        [
            FieldValue::Integer(atomic_number),
            FieldValue::Symbol(symbol),
            FieldValue::Integer(mass_number),
            FieldValue::Decimal(Some(mass)),
            FieldValue::Decimal(abundance),
            FieldValue::Text(standard_atomic_weight),
        ],
    ) = <[FieldValue; 6]>::try_from(values)
    else {
        unreachable!("coerced values didn't line up with the isotope schema")
    };

    let record = IsotopeRecord {
        atomic_number: AtomicNumber(atomic_number),
        symbol: normalize_symbol(symbol),
        mass_number: MassNumber(mass_number),
        mass,
        abundance,
        standard_atomic_weight,
    };
    trace!(?record, "parsed isotope record");
    Ok(record)
}

// Private Helper Functions ============================================================================================

fn field_value(block: &str, field: &Field, line: &str) -> Result<FieldValue, RecordError> {
    let Ok((_, (label, raw_value))) = labeled_value(line) else {
        return Err(RecordError::new(
            block,
            line.trim(),
            ParseErrorKind::ExpectedLabeledValue,
        ));
    };

    if !field.accepts(label) {
        let kind = ParseErrorKind::UnexpectedLabel {
            expected: field.name,
            found: label.to_owned(),
        };
        return Err(RecordError::new(block, label, kind));
    }

    // NOTE: `measurement` can't actually fail, since every part of it is allowed to match nothing
    let value = measurement(raw_value).map_or(raw_value, |(_, value)| value);
    field.coerce(value).map_err(|kind| {
        let culprit = if value.is_empty() { line.trim() } else { value };
        RecordError::new(block, culprit, kind)
    })
}

// NOTE: NIST lists deuterium and tritium under their own symbols, but they're still isotopes of hydrogen
fn normalize_symbol(symbol: String) -> String {
    if matches!(symbol.as_str(), "D" | "T") {
        "H".to_owned()
    } else {
        symbol
    }
}

// Module Tests ========================================================================================================
