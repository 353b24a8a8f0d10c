use std::fmt;

use bitvec::vec::BitVec;
use tracing::{debug, trace};

#[derive(Debug, thiserror::Error)]
pub enum DecodingError {
    /// code part of a header entry has something other than 0s and 1s
    #[error("code {code:?} of word {word:?} has non-binary character {found:?}")]
    InvalidCode {
        word: String,
        code: String,
        found: char,
    },

    /// there is something other than 0s, 1s and newlines in the code string
    #[error("non-binary character {:?} at {}", .0.is, .0)]
    NonBinary(IsAt<char>),

    /// bit leads off the tree, no code starts with the bits read so far
    #[error("bit '{}' at {} does not continue any code", .0.is, .0)]
    UnmappedCode(IsAt<char>),

    /// code string ends before the last code is complete
    #[error("code string ends inside the code starting at {} ({} dangling bits)", .0, .0.is)]
    Truncated(IsAt<usize>),
}

/// Where in the encoded input something was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IsAt<T> {
    /// number of lines from the top, starting at 1
    pub line: usize,
    /// number of characters from the left, starting at 1
    pub character: usize,
    pub is: T,
}

impl<T> fmt::Display for IsAt<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "line {}, character {}", self.line, self.character)
    }
}

/// represents the Huffman decoding of words, built from a header
#[derive(Debug, Default)]
pub struct Tree {
    root: Node,
}

#[derive(Debug, Default)]
struct Node {
    /// only meaningful on a leaf. kept as raw bytes, the header need not be UTF-8
    word: Option<Vec<u8>>,
    /// indexed by bit, `children[0]` is taken on '0'
    children: [Option<Box<Node>>; 2],
}

impl Node {
    fn is_leaf(&self) -> bool {
        self.children.iter().all(Option::is_none)
    }

    /// the word to emit when the cursor lands here
    fn leaf_word(&self) -> Option<&[u8]> {
        if self.is_leaf() {
            self.word.as_deref()
        } else {
            None
        }
    }
}

/// read a code of 0s and 1s, returns the first other byte on failure
fn parse_code(code: &[u8]) -> Result<BitVec, u8> {
    let mut bits = BitVec::with_capacity(code.len());
    for &byte in code {
        match byte {
            b'0' => bits.push(false),
            b'1' => bits.push(true),
            other => return Err(other),
        }
    }
    Ok(bits)
}

impl Tree {
    /// builds the tree from word/code pairs, in order.
    /// a later pair with the same code as an earlier one replaces its word.
    pub fn build<I, W, C>(pairs: I) -> Result<Self, DecodingError>
    where
        I: IntoIterator<Item = (W, C)>,
        W: Into<Vec<u8>>,
        C: AsRef<[u8]>,
    {
        let mut tree = Tree::default();
        let mut entries = 0;
        for (word, code) in pairs {
            let word: Vec<u8> = word.into();
            let code = code.as_ref();
            let bits = parse_code(code).map_err(|found| DecodingError::InvalidCode {
                word: String::from_utf8_lossy(&word).into_owned(),
                code: String::from_utf8_lossy(code).into_owned(),
                found: char::from(found),
            })?;

            let mut node = &mut tree.root;
            for bit in bits.iter().by_vals() {
                node = &mut **node.children[bit as usize].get_or_insert_with(Box::default);
            }
            if let Some(previous) = node.word.replace(word) {
                debug!(
                    code = %String::from_utf8_lossy(code),
                    previous = %String::from_utf8_lossy(&previous),
                    "code assigned twice, keeping the later word"
                );
            }
            entries += 1;
        }
        debug!(entries, "built Huffman tree");
        Ok(tree)
    }
}

/// cursor walking a [`Tree`] one input byte at a time
pub struct Decoder<'tree> {
    tree: &'tree Tree,
    node: &'tree Node,
    /// bits read since the cursor last left the root
    depth: usize,
    line: usize,
    character: usize,
    code_start: (usize, usize),
}

impl<'tree> Decoder<'tree> {
    pub fn new(tree: &'tree Tree) -> Self {
        Decoder {
            tree,
            node: &tree.root,
            depth: 0,
            line: 1,
            character: 0,
            code_start: (1, 1),
        }
    }

    fn here<T>(&self, is: T) -> IsAt<T> {
        IsAt {
            line: self.line,
            character: self.character,
            is,
        }
    }

    /// advances over one byte of the code string.
    /// newlines are skipped, a completed code yields its word and resets the cursor to the root.
    pub fn push(&mut self, byte: u8) -> Result<Option<&'tree [u8]>, DecodingError> {
        if byte == b'\n' {
            self.line += 1;
            self.character = 0;
            return Ok(None);
        }
        self.character += 1;

        let bit = match byte {
            b'0' => 0,
            b'1' => 1,
            _ => return Err(DecodingError::NonBinary(self.here(char::from(byte)))),
        };
        if self.depth == 0 {
            self.code_start = (self.line, self.character);
        }

        let node: &'tree Node = self.node;
        let child = node.children[bit]
            .as_deref()
            .ok_or_else(|| DecodingError::UnmappedCode(self.here(char::from(byte))))?;
        match child.leaf_word() {
            Some(word) => {
                trace!(word = %String::from_utf8_lossy(word), line = self.line, "decoded word");
                self.node = &self.tree.root;
                self.depth = 0;
                Ok(Some(word))
            }
            None => {
                self.node = child;
                self.depth += 1;
                Ok(None)
            }
        }
    }

    /// checks that the code string did not stop in the middle of a code
    pub fn finish(self) -> Result<(), DecodingError> {
        if self.depth == 0 {
            Ok(())
        } else {
            let (line, character) = self.code_start;
            Err(DecodingError::Truncated(IsAt {
                line,
                character,
                is: self.depth,
            }))
        }
    }
}
