//! Projective-plane deck construction.
//!
//! A deck with `k` symbols per card is the projective plane of order
//! `n = k - 1`. The `n^2` affine points are laid out as an `n x n` grid of
//! symbol ids; every line of the affine plane becomes a card, and each
//! parallel class of lines is closed off by one shared point at infinity.
//! The points at infinity themselves form the last card.

use crate::error::DesignError;
use crate::field::GaloisField;
use dobble_types::{Card, CardIndex, SymbolId};

/// Largest supported symbols-per-card value (16 257 cards).
pub const MAX_SYMBOLS_PER_CARD: usize = 128;

/// Number of cards (and of distinct symbols) in a deck with `k` symbols per card.
pub const fn card_count(symbols_per_card: usize) -> usize {
    symbols_per_card * symbols_per_card - symbols_per_card + 1
}

/// Distinct symbols needed for the deck; always equal to the card count.
pub const fn symbol_count(symbols_per_card: usize) -> usize {
    card_count(symbols_per_card)
}

/// `true` if [`generate_cards`] can build a deck for this many symbols per card.
pub fn is_supported(symbols_per_card: usize) -> bool {
    check_parameter(symbols_per_card).is_ok()
}

fn check_parameter(symbols_per_card: usize) -> Result<GaloisField, DesignError> {
    if !(2..=MAX_SYMBOLS_PER_CARD).contains(&symbols_per_card) {
        return Err(DesignError::InvalidParameter {
            value: symbols_per_card,
            max: MAX_SYMBOLS_PER_CARD,
        });
    }
    let order = symbols_per_card - 1;
    GaloisField::new(order).ok_or(DesignError::UnsupportedOrder {
        order,
        symbols_per_card,
    })
}

/// Builds every card of the deck.
///
/// Cards come out in construction order: the rows of the base grid, then one
/// block per slope, then the columns of the base grid, then the card of
/// points at infinity. For a prime order the cell arithmetic is plain modular
/// arithmetic; prime-power orders use GF(n).
///
/// # Errors
///
/// - [`DesignError::InvalidParameter`] for fewer than 2 (or absurdly many) symbols per card.
/// - [`DesignError::UnsupportedOrder`] when `symbols_per_card - 1` is not a prime power.
pub fn generate_cards(symbols_per_card: usize) -> Result<Vec<Card>, DesignError> {
    let field = check_parameter(symbols_per_card)?;
    let n = field.order();

    // Symbol ids of the affine grid, and of the points at infinity.
    let grid = |row: usize, column: usize| SymbolId::new((column + 1 + row * n) as u32);
    let horizon = |offset: usize| SymbolId::new((n * n + 1 + offset) as u32);

    let mut lines: Vec<Vec<SymbolId>> = Vec::with_capacity(card_count(symbols_per_card));

    for row in 0..n {
        let mut line: Vec<SymbolId> = (0..n).map(|column| grid(row, column)).collect();
        line.push(horizon(0));
        lines.push(line);
    }

    for slope in 1..n {
        for intercept in 0..n {
            let mut line: Vec<SymbolId> = (0..n)
                .map(|i| grid(field.mul(slope, i), field.add(intercept, i)))
                .collect();
            line.push(horizon(slope + 1));
            lines.push(line);
        }
    }

    for column in 0..n {
        let mut line: Vec<SymbolId> = (0..n).map(|row| grid(row, column)).collect();
        line.push(horizon(1));
        lines.push(line);
    }

    lines.push((0..=n).map(horizon).collect());

    log::debug!(
        "Generated design of order {} ({} cards, {} symbols per card)",
        n,
        lines.len(),
        symbols_per_card
    );

    Ok(lines
        .into_iter()
        .enumerate()
        .map(|(index, symbols)| Card::new(CardIndex::new(index), symbols))
        .collect())
}
