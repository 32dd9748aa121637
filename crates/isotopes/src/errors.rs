// Standard Library Imports
use std::{fmt, iter, ops::Range};

// External Crate Imports
use miette::{Diagnostic, LabeledSpan, SourceCode, SourceSpan};
use thiserror::Error;

// Public API ==========================================================================================================

#[derive(Clone, Eq, PartialEq, Debug, Error)]
#[error("isotope record {record} could not be parsed")]
pub struct ParseError {
    full_input: String,
    span: SourceSpan,
    record: usize,
    #[source]
    kind: ParseErrorKind,
}

#[derive(Clone, Eq, PartialEq, Debug, Diagnostic, Error)]
pub enum ParseErrorKind {
    #[diagnostic(help(
        "records are separated by blank lines, and each one needs its Atomic Number, Atomic Symbol, Mass Number, \
        Relative Atomic Mass, Isotopic Composition, and Standard Atomic Weight lines in that order"
    ))]
    #[error("expected {expected} `label = value` lines, but found {found}")]
    FieldCount { expected: usize, found: usize },

    #[diagnostic(help("every line of a record should look like `Atomic Number = 1`"))]
    #[error("expected a `label = value` pair")]
    ExpectedLabeledValue,

    #[error("expected the {expected:?} field, but found {found:?}")]
    UnexpectedLabel {
        expected: &'static str,
        found: String,
    },

    #[error("the {field:?} field can't be left empty")]
    MissingValue { field: &'static str },

    #[error("expected a positive integer for {field:?}, got {value:?}")]
    InvalidInteger { field: &'static str, value: String },

    #[diagnostic(help(
        "uncertainties like the (12) in 1.00782503223(12) are fine, but everything before them must be a number"
    ))]
    #[error("expected a decimal number for {field:?}, got {value:?}")]
    InvalidDecimal { field: &'static str, value: String },

    #[diagnostic(help(
        "element symbols are an uppercase ASCII letter, optionally followed by a lowercase one, like H or He"
    ))]
    #[error("expected an element symbol for {field:?}, got {value:?}")]
    InvalidSymbol { field: &'static str, value: String },
}

impl ParseError {
    #[must_use]
    pub const fn kind(&self) -> &ParseErrorKind {
        &self.kind
    }

    /// The 1-based position of the failing record within its catalogue
    #[must_use]
    pub const fn record(&self) -> usize {
        self.record
    }
}

impl ParseErrorKind {
    const fn label(&self) -> &'static str {
        match self {
            Self::FieldCount { .. } => "wrong number of lines",
            Self::ExpectedLabeledValue => "missing '='",
            Self::UnexpectedLabel { .. } => "unexpected label",
            Self::MissingValue { .. } => "empty value",
            Self::InvalidInteger { .. } => "not a positive integer",
            Self::InvalidDecimal { .. } => "not a decimal number",
            Self::InvalidSymbol { .. } => "not an element symbol",
        }
    }
}

impl Diagnostic for ParseError {
    fn source_code(&self) -> Option<&dyn SourceCode> {
        Some(&self.full_input)
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        self.kind.help()
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let label = Some(self.kind.label().to_owned());
        Some(Box::new(iter::once(LabeledSpan::new_with_span(
            label, self.span,
        ))))
    }
}

// Crate Internals =====================================================================================================

// NOTE: Spans are relative to the block handed to the record parser, and are only anchored to the full input once the
// catalogue knows where that block lives
#[derive(Clone, Eq, PartialEq, Debug)]
pub(crate) struct RecordError {
    span: Range<usize>,
    kind: ParseErrorKind,
}

impl RecordError {
    pub(crate) fn new(block: &str, culprit: &str, kind: ParseErrorKind) -> Self {
        let start = offset_in(block, culprit);
        let span = start..start + culprit.len();
        Self { span, kind }
    }

    pub(crate) fn into_parse_error(self, full_input: &str, offset: usize, record: usize) -> ParseError {
        let Self { span, kind } = self;
        let span = SourceSpan::from(span.start + offset..span.end + offset);
        ParseError {
            full_input: full_input.to_owned(),
            span,
            record,
            kind,
        }
    }

    #[cfg(test)]
    pub(crate) const fn kind(&self) -> &ParseErrorKind {
        &self.kind
    }
}

// NOTE: Only meaningful when `substr` was sliced out of `full_input`, which is true of everything the parsers pass here
pub(crate) fn offset_in(full_input: &str, substr: &str) -> usize {
    let base_addr = full_input.as_ptr() as usize;
    let substr_addr = substr.as_ptr() as usize;
    debug_assert!(
        (base_addr..=base_addr + full_input.len()).contains(&substr_addr),
        "tried to get the offset of a non-substring!"
    );
    substr_addr - base_addr
}

// Module Tests ========================================================================================================
