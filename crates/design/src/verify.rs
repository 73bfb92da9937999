use crate::error::{DesignError, Violation};
use crate::generator::card_count;
use dobble_types::{Card, SymbolId};
use itertools::Itertools;
use serde::Serialize;
use std::collections::HashSet;

/// Summary of a deck that passed [`verify_design`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DesignStats {
    pub symbols_per_card: usize,
    pub card_count: usize,
    pub symbol_count: usize,
    pub pairs_checked: usize,
}

/// Checks every structural invariant of a spot-the-match deck.
///
/// Stops at the first violation: wrong card count, wrong card size, a
/// repeated or out-of-range symbol, a pair of cards not sharing exactly one
/// symbol, or a symbol not printed on exactly `symbols_per_card` cards.
///
/// Overlaps are counted through the cards holding each symbol, so a deck of
/// `N` cards costs `O(N * k^2)` rather than one set intersection per pair.
pub fn verify_design(cards: &[Card], symbols_per_card: usize) -> Result<DesignStats, DesignError> {
    let expected_cards = card_count(symbols_per_card);
    if cards.len() != expected_cards {
        return Err(Violation::CardCount {
            expected: expected_cards,
            actual: cards.len(),
        }
        .into());
    }

    // holders[id - 1]: positions of the cards printing symbol `id`, ascending
    let mut holders: Vec<Vec<usize>> = vec![Vec::new(); expected_cards];

    for (position, card) in cards.iter().enumerate() {
        if card.len() != symbols_per_card {
            return Err(Violation::CardSize {
                card: card.index,
                expected: symbols_per_card,
                actual: card.len(),
            }
            .into());
        }
        let mut seen = HashSet::with_capacity(card.len());
        for &symbol in &card.symbols {
            let id = symbol.get() as usize;
            if id == 0 || id > expected_cards {
                return Err(Violation::SymbolOutOfRange {
                    card: card.index,
                    symbol,
                    max: expected_cards,
                }
                .into());
            }
            if !seen.insert(symbol) {
                return Err(Violation::DuplicateSymbol {
                    card: card.index,
                    symbol,
                }
                .into());
            }
            holders[id - 1].push(position);
        }
    }

    let mut shared = vec![0usize; cards.len()];
    let mut touched = Vec::new();
    for (position, card) in cards.iter().enumerate() {
        for symbol in &card.symbols {
            for &other in &holders[symbol.get() as usize - 1] {
                if other <= position {
                    continue;
                }
                if shared[other] == 0 {
                    touched.push(other);
                }
                shared[other] += 1;
            }
        }

        let later = cards.len() - position - 1;
        let single = touched.iter().filter(|&&other| shared[other] == 1).count();
        if single != later
            && let Some(other) = (position + 1..cards.len()).find(|&other| shared[other] != 1)
        {
            return Err(Violation::SharedSymbols {
                first: card.index,
                second: cards[other].index,
                shared: shared[other],
            }
            .into());
        }

        for other in touched.drain(..) {
            shared[other] = 0;
        }
    }

    if let Some((position, cards_with_symbol)) = holders
        .iter()
        .find_position(|cards_with_symbol| cards_with_symbol.len() != symbols_per_card)
    {
        return Err(Violation::SymbolFrequency {
            symbol: SymbolId::new(position as u32 + 1),
            expected: symbols_per_card,
            actual: cards_with_symbol.len(),
        }
        .into());
    }

    Ok(DesignStats {
        symbols_per_card,
        card_count: cards.len(),
        symbol_count: expected_cards,
        pairs_checked: cards.len() * (cards.len() - 1) / 2,
    })
}
