use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TallyError {
    #[error("Error reading the file: {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Render error: {0}")]
    Render(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, TallyError>;
