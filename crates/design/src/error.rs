use dobble_types::{CardIndex, SymbolId};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DesignError {
    #[error("Invalid parameter: symbols per card must be between 2 and {max}, got {value}")]
    InvalidParameter { value: usize, max: usize },

    #[error(
        "No projective plane construction for {symbols_per_card} symbols per card: order {order} is not a prime power"
    )]
    UnsupportedOrder { order: usize, symbols_per_card: usize },

    #[error("Design violation: {0}")]
    Violation(#[from] Violation),
}

/// A broken invariant found by [`crate::verify_design`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    #[error("expected {expected} cards, found {actual}")]
    CardCount { expected: usize, actual: usize },

    #[error("card {card} holds {actual} symbols, expected {expected}")]
    CardSize {
        card: CardIndex,
        expected: usize,
        actual: usize,
    },

    #[error("card {card} lists symbol {symbol} more than once")]
    DuplicateSymbol { card: CardIndex, symbol: SymbolId },

    #[error("card {card} uses symbol {symbol}, outside 1..={max}")]
    SymbolOutOfRange {
        card: CardIndex,
        symbol: SymbolId,
        max: usize,
    },

    #[error("cards {first} and {second} share {shared} symbols instead of exactly one")]
    SharedSymbols {
        first: CardIndex,
        second: CardIndex,
        shared: usize,
    },

    #[error("symbol {symbol} appears on {actual} cards, expected {expected}")]
    SymbolFrequency {
        symbol: SymbolId,
        expected: usize,
        actual: usize,
    },
}
