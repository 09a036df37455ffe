use std::collections::HashMap;

use crate::ast::Token;

/// Positions of each distinct token within the filtered sequence
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct IndexTable(HashMap<Token, Vec<usize>>);

impl IndexTable {
    pub fn from_tokens(tokens: &[Token]) -> Self {
        let mut positions: HashMap<Token, Vec<usize>> = HashMap::new();
        for (position, token) in tokens.iter().enumerate() {
            positions.entry(token.clone()).or_default().push(position);
        }
        Self(positions)
    }

    pub fn get(&self, token: &str) -> Option<&[usize]> {
        self.0.get(token).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
