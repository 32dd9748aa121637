use nom::{
    IResult,
    bytes::complete::{take_till, take_till1},
    character::complete::char,
    combinator::{map, rest},
    sequence::{separated_pair, terminated},
};

/// Labeled Value = label , "=" , value ;
///
/// Both the label and the value come back trimmed, and the value is allowed to be empty.
pub fn labeled_value(i: &str) -> IResult<&str, (&str, &str)> {
    let label = map(take_till1(|c: char| c == '='), str::trim);
    let value = map(rest, str::trim);
    separated_pair(label, char('='), value)(i)
}

/// Measurement = value , [ "(" , uncertainty , ")" ] ;
///
/// Anything from the first "(" onward is treated as an uncertainty annotation and discarded.
pub fn measurement(i: &str) -> IResult<&str, &str> {
    let value = map(take_till(|c: char| c == '('), str::trim);
    terminated(value, rest)(i)
}
