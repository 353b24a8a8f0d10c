use std::io::{BufReader, Read, Write};

use tracing::debug;

use crate::error::Error;
use crate::huffman::{Decoder, Tree};

/// decodes the bit string read from `bits`, writing newline separated words to `sink`
/// as soon as each one is complete. returns the number of words written.
///
/// on failure, words written before the failing bit stay in `sink`.
pub fn decode_message<R, W>(tree: &Tree, bits: R, mut sink: W) -> Result<usize, Error>
where
    R: Read,
    W: Write,
{
    let mut decoder = Decoder::new(tree);
    let mut words = 0;
    for byte in BufReader::new(bits).bytes() {
        if let Some(word) = decoder.push(byte?).map_err(Error::InvalidCodeString)? {
            if words > 0 {
                sink.write_all(b"\n")?;
            }
            sink.write_all(word)?;
            words += 1;
        }
    }
    decoder.finish().map_err(Error::InvalidCodeString)?;
    debug!(words, "decoded code string");
    Ok(words)
}
