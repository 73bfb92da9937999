//! Combinatorial design for spot-the-match decks.
//!
//! Decides which symbols go on which card so that any two cards share
//! exactly one symbol. Pure and deterministic: no I/O, no randomness.

pub mod error;
pub mod field;
pub mod generator;
pub mod verify;

// --- Public API ---
pub use error::{DesignError, Violation};
pub use field::GaloisField;
pub use generator::{MAX_SYMBOLS_PER_CARD, card_count, generate_cards, is_supported, symbol_count};
pub use verify::{DesignStats, verify_design};
