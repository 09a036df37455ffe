use std::path::Path;

use crate::ast::Token;
use crate::error::{Result, TallyError};
use crate::parser::TallyParser;

/// Turn raw file content into the filtered token sequence.
///
/// Elements that are empty or contain anything other than ASCII letters and
/// digits after trimming are dropped without a trace. Positions compact, so
/// the result is indexed by its own order.
pub fn filter_tokens(source: &str) -> Result<Vec<Token>> {
    let elements = TallyParser::parse_elements(source).map_err(|e| TallyError::Parse(e.to_string()))?;
    tracing::debug!(elements = elements.len(), "parsed raw elements");

    let tokens: Vec<Token> = elements
        .iter()
        .filter_map(|element| Token::new(element.trimmed()))
        .collect();
    tracing::debug!(tokens = tokens.len(), "kept valid tokens");

    Ok(tokens)
}

/// Read a whole file and filter its tokens.
///
/// Invalid UTF-8 is decoded lossily, so a bad byte only spoils the element
/// it sits in.
pub fn load_tokens(path: impl AsRef<Path>) -> Result<Vec<Token>> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|source| TallyError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), bytes = bytes.len(), "read input file");
    filter_tokens(&String::from_utf8_lossy(&bytes))
}
