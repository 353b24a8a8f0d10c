use std::{fs, path::Path};

use tracing::{debug, warn};

use crate::error::Error;

/// whitespace between header tokens, vertical tab and form feed included
fn is_separator(byte: &u8) -> bool {
    matches!(*byte, b' ' | b'\t' | b'\n' | b'\r' | b'\x0b' | b'\x0c')
}

/// split header bytes into (word, code) pairs.
/// words and codes are separated by any whitespace, a trailing word without a code is dropped.
/// words are kept as they are, they need not be UTF-8.
pub fn parse_header(text: &[u8]) -> Vec<(Vec<u8>, Vec<u8>)> {
    let mut tokens = text.split(is_separator).filter(|token| !token.is_empty());
    let mut pairs = Vec::new();
    while let Some(word) = tokens.next() {
        match tokens.next() {
            Some(code) => pairs.push((word.to_vec(), code.to_vec())),
            None => warn!(
                word = %String::from_utf8_lossy(word),
                "header ends with a word that has no code, ignoring it"
            ),
        }
    }
    pairs
}

pub fn read_header(path: &Path) -> Result<Vec<(Vec<u8>, Vec<u8>)>, Error> {
    let text = fs::read(path).map_err(|source| Error::UnableToOpen {
        path: path.to_path_buf(),
        source,
    })?;
    let pairs = parse_header(&text);
    debug!(path = %path.display(), entries = pairs.len(), "read header");
    Ok(pairs)
}
