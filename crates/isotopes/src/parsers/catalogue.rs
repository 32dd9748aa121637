// External Crate Imports
use itertools::Itertools;
use tracing::debug;

// Local Crate Imports
use super::record::isotope_record;
use crate::{IsotopeRecord, ParseError, errors::offset_in};

// Public API ==========================================================================================================

/// Parses every blank-line-separated isotope record in `text`, stopping at the first one that's malformed
///
/// # Errors
///
/// Returns a [`ParseError`] pointing into `text` and carrying the 1-based number of the offending record.
pub fn parse_catalogue(text: &str) -> Result<Vec<IsotopeRecord>, ParseError> {
    let records: Vec<_> = record_blocks(text)
        .into_iter()
        .enumerate()
        .map(|(i, block)| {
            isotope_record(block).map_err(|e| e.into_parse_error(text, offset_in(text, block), i + 1))
        })
        .collect::<Result<_, _>>()?;
    debug!(records = records.len(), "parsed isotope catalogue");
    Ok(records)
}

// Private Helper Functions ============================================================================================

// NOTE: Each block is sliced straight out of `text` (rather than rebuilt from its lines) so that error spans can be
// traced back to the original input
fn record_blocks(text: &str) -> Vec<&str> {
    let chunks = text.lines().chunk_by(|line| line.trim().is_empty());
    let blocks = (&chunks)
        .into_iter()
        .filter_map(|(blank, mut lines)| {
            if blank {
                return None;
            }
            let first = lines.next()?;
            let last = lines.last().unwrap_or(first);
            let start = offset_in(text, first);
            let end = offset_in(text, last) + last.len();
            Some(&text[start..end])
        })
        .collect();
    blocks
}

// Module Tests ========================================================================================================
