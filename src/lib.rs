//! Count the alphanumeric tokens of a comma-separated list and report where
//! each one occurs, least frequent first.

pub mod ast;
pub mod error;
pub mod frequency;
pub mod index;
pub mod loader;
pub mod parser;
pub mod report;

pub use ast::Token;
pub use error::{Result, TallyError};
pub use frequency::FrequencyTable;
pub use index::IndexTable;
pub use report::{Report, ReportRecord, build_report, tally, tally_file};
