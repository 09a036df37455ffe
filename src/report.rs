use std::path::Path;

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::ast::Token;
use crate::error::Result;
use crate::frequency::FrequencyTable;
use crate::index::IndexTable;
use crate::loader::{filter_tokens, load_tokens};

/// Count and positions of one distinct token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRecord {
    pub token: Token,
    pub count: usize,
    pub indices: Vec<usize>,
}

#[derive(serde::Serialize)]
struct RecordBody<'a> {
    count: usize,
    indices: &'a [usize],
}

/// Serializes as a single-key map: `{ "<token>": { "count": .., "indices": [..] } }`
impl Serialize for ReportRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(
            self.token.as_str(),
            &RecordBody {
                count: self.count,
                indices: &self.indices,
            },
        )?;
        map.end()
    }
}

/// Report records in frequency-table order
#[derive(Debug, Default, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(transparent)]
pub struct Report(Vec<ReportRecord>);

impl Report {
    /// Merge counts and positions, following the order of `frequencies`.
    ///
    /// # Panics
    ///
    /// If a counted token has no entry in `indices`. Both tables come from the
    /// same token sequence, so this only happens on a programming error.
    pub fn combine(frequencies: &FrequencyTable, indices: &IndexTable) -> Self {
        let records = frequencies
            .iter()
            .map(|(token, count)| {
                let positions = indices
                    .get(token.as_str())
                    .unwrap_or_else(|| panic!("token `{token}` is counted but has no index entry"));
                ReportRecord {
                    token: token.clone(),
                    count,
                    indices: positions.to_vec(),
                }
            })
            .collect();
        Self(records)
    }

    pub fn records(&self) -> &[ReportRecord] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Pretty-printed with 2-space indentation
    pub fn render(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Run counting, indexing and combination over an already filtered sequence
pub fn build_report(tokens: &[Token]) -> Report {
    let frequencies = FrequencyTable::from_tokens(tokens);
    let indices = IndexTable::from_tokens(tokens);
    tracing::debug!(distinct = frequencies.len(), total = frequencies.total(), "built tables");
    Report::combine(&frequencies, &indices)
}

/// Full pipeline over in-memory content
pub fn tally(source: &str) -> Result<Report> {
    let tokens = filter_tokens(source)?;
    Ok(build_report(&tokens))
}

/// Full pipeline over a file
pub fn tally_file(path: impl AsRef<Path>) -> Result<Report> {
    let tokens = load_tokens(path)?;
    Ok(build_report(&tokens))
}
