use std::{io, path::PathBuf};

use crate::huffman::DecodingError;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// working directory is missing, or is something other than a directory
    #[error("{} is not a directory", .0.display())]
    NotADirectory(PathBuf),

    /// input file is missing, or is something other than a regular file
    #[error("{} is not a regular file", .0.display())]
    NotARegularFile(PathBuf),

    #[error("unable to open {}: {source}", .path.display())]
    UnableToOpen {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("unable to open {} for writing: {source}", .path.display())]
    UnableToOpenForWriting {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// something is wrong with the word/code pairs of the header
    #[error("failed to build Huffman tree from header: {0}")]
    InvalidHeader(#[source] DecodingError),

    /// something is wrong with the encoded bit string
    #[error("failed to decode message: {0}")]
    InvalidCodeString(#[source] DecodingError),

    /// just relaying io::Error
    #[error(transparent)]
    Io(#[from] io::Error),
}
