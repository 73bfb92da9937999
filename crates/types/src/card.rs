use crate::ids::{CardIndex, SymbolId};
use serde::{Deserialize, Serialize};

/// One card of the deck: its position and the symbols printed on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub index: CardIndex,
    pub symbols: Vec<SymbolId>,
}

impl Card {
    pub fn new(index: CardIndex, symbols: Vec<SymbolId>) -> Self {
        Self { index, symbols }
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn contains(&self, symbol: SymbolId) -> bool {
        self.symbols.contains(&symbol)
    }
}
