//! Newtype wrappers for symbol and card identities
//!
//! Symbols are numbered from 1 (their id doubles as the image file stem), while
//! cards are numbered from 0 (their index names the output document). Keeping
//! them as distinct types stops the two numbering schemes from being mixed up.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The identity of a picture symbol, in `[1, total_symbols]`.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SymbolId(u32);

impl SymbolId {
    /// Creates a new SymbolId from its raw number
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Returns the raw number of this symbol
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl From<u32> for SymbolId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl fmt::Display for SymbolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The position of a card within the deck, in `[0, card_count)`.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardIndex(usize);

impl CardIndex {
    /// Creates a new CardIndex from its raw position
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Returns the raw position of this card
    pub const fn get(self) -> usize {
        self.0
    }
}

impl From<usize> for CardIndex {
    fn from(index: usize) -> Self {
        Self(index)
    }
}

impl fmt::Display for CardIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
