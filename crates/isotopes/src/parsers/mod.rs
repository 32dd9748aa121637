//! Turns blank-line-separated blocks of `label = value` lines into `IsotopeRecord`s

mod catalogue;
pub mod primitives;
mod record;
pub mod schema;

// Re-exports
pub use catalogue::parse_catalogue;
pub use record::parse_record;
