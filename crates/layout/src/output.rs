//! Output types from the card packer.

use dobble_types::{CardIndex, Point, Rect, SymbolId};

/// Where and how one symbol is drawn on its card.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub symbol: SymbolId,
    /// Pre-rotation bounding box. Collision and containment were checked on this.
    pub rect: Rect,
    /// Rotation in whole degrees, `0..=359`, applied about [`Placement::pivot`].
    pub rotation: u16,
    /// Position draws spent on this symbol in the successful card attempt.
    pub draws: u32,
}

impl Placement {
    pub fn pivot(&self) -> Point {
        self.rect.center()
    }
}

/// A fully packed card, ready to be turned into a draw list.
#[derive(Debug, Clone, PartialEq)]
pub struct CardLayout {
    pub index: CardIndex,
    /// One placement per symbol, in the card's symbol order.
    pub placements: Vec<Placement>,
    /// Whole-card attempts used, counting the successful one.
    pub attempts: u32,
}
