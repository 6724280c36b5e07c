pub mod assess;
pub mod sample;
pub mod schema;

use crate::assessment::PropertyInput;
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

/// Errors reading a property document.
#[derive(Debug, thiserror::Error)]
pub enum PropertyFileError {
    #[error("failed to read property file: {0}")]
    Io(#[from] io::Error),
    #[error("invalid property JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("no input received; provide a file or pipe data to stdin")]
    EmptyInput,
}

/// Read a property document (JSON) from a file, or stdin with "-".
pub fn read_property(path: &Path) -> Result<PropertyInput, PropertyFileError> {
    if path.as_os_str() == "-" {
        read_from_stdin()
    } else {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        Ok(serde_json::from_reader(reader)?)
    }
}

fn read_from_stdin() -> Result<PropertyInput, PropertyFileError> {
    let stdin = io::stdin();
    let mut reader = BufReader::new(stdin.lock());

    let mut buffer = Vec::new();
    reader.read_to_end(&mut buffer)?;

    if buffer.is_empty() {
        return Err(PropertyFileError::EmptyInput);
    }

    Ok(serde_json::from_slice(&buffer)?)
}
