use std::collections::HashMap;

use crate::ast::Token;

/// Occurrence counts per distinct token, kept in report order:
/// count ascending, then token in byte order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FrequencyTable(Vec<(Token, usize)>);

impl FrequencyTable {
    pub fn from_tokens(tokens: &[Token]) -> Self {
        let mut counts: HashMap<&Token, usize> = HashMap::new();
        for token in tokens {
            *counts.entry(token).or_insert(0) += 1;
        }

        let mut entries: Vec<(Token, usize)> = counts
            .into_iter()
            .map(|(token, count)| (token.clone(), count))
            .collect();
        entries.sort_by(|(a, a_count), (b, b_count)| a_count.cmp(b_count).then_with(|| a.cmp(b)));

        Self(entries)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Token, usize)> {
        self.0.iter().map(|(token, count)| (token, *count))
    }

    /// Number of distinct tokens
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Sum of all counts, equal to the filtered sequence length
    pub fn total(&self) -> usize {
        self.0.iter().map(|(_, count)| count).sum()
    }

    pub fn count_of(&self, token: &str) -> Option<usize> {
        self.0
            .iter()
            .find(|(t, _)| t.as_str() == token)
            .map(|(_, count)| *count)
    }
}
