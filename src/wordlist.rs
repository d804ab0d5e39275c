#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(unused_must_use)]
#![deny(unused_mut)]

//! wordlist implements the fixed 2048-word vocabulary that serves as the
//! alphabet for the 11-bit index encoding, together with the plain-text
//! format word lists are distributed in: UTF-8, one word per line, with a
//! trailing empty line from a final newline tolerated and discarded.

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::error::{MnemonicError, Result};

/// WORDLIST_SIZE is the number of words every valid word list contains. Each
/// word encodes exactly 11 bits, so the size is fixed at 2^11.
pub const WORDLIST_SIZE: usize = 2048;

const ENGLISH_WORDS: &str = include_str!("../wordlists/english.txt");

/// WordList is a bijective mapping between 2048 unique words and the indices
/// 0..=2047. Once constructed it is read-only and can be shared freely across
/// concurrent readers.
#[derive(Debug, Clone)]
pub struct WordList {
    words: Vec<String>,
    indices: HashMap<String, u16>,
}

impl WordList {
    /// new builds a word list from exactly 2048 unique words, preserving
    /// their order as the index order.
    pub fn new(words: Vec<String>) -> Result<Self> {
        if words.len() != WORDLIST_SIZE {
            return Err(MnemonicError::InvalidWordlistLength(words.len()));
        }
        let mut indices = HashMap::with_capacity(WORDLIST_SIZE);
        for (i, word) in words.iter().enumerate() {
            if indices.insert(word.clone(), i as u16).is_some() {
                return Err(MnemonicError::DuplicateWord(word.clone()));
            }
        }
        Ok(WordList { words, indices })
    }

    /// parse reads the standard word list text format. Each line is one word;
    /// an empty final line from a terminating newline is dropped. Entries
    /// containing a space are rejected, since the space is reserved for
    /// splitting mnemonics into words.
    pub fn parse(text: &str) -> Result<Self> {
        let mut lines: Vec<&str> = text.split('\n').collect();
        if lines.last() == Some(&"") {
            lines.pop();
        }
        for line in &lines {
            if line.contains(' ') {
                return Err(MnemonicError::InvalidWordlistEntry(line.to_string()));
            }
        }
        WordList::new(lines.into_iter().map(str::to_string).collect())
    }

    /// english returns the embedded English word list. The list is built on
    /// first use and shared for the life of the process.
    pub fn english() -> &'static WordList {
        static ENGLISH: OnceLock<WordList> = OnceLock::new();
        ENGLISH.get_or_init(|| {
            WordList::parse(ENGLISH_WORDS).expect("embedded english word list is well formed")
        })
    }

    /// at_index returns the word at the given index.
    pub fn at_index(&self, index: usize) -> Result<&str> {
        self.words
            .get(index)
            .map(String::as_str)
            .ok_or(MnemonicError::IndexOutOfRange(index))
    }

    /// index_of returns the index of the given word.
    pub fn index_of(&self, word: &str) -> Result<u16> {
        self.indices
            .get(word)
            .copied()
            .ok_or_else(|| MnemonicError::UnknownWord(word.to_string()))
    }

    /// contains reports whether the given word is part of the word list.
    pub fn contains(&self, word: &str) -> bool {
        self.indices.contains_key(word)
    }
}
