//! Rejection-sampling placement of a card's symbols.
//!
//! Each symbol gets `k^2` random position draws. A draw is kept when all four
//! corners of its rectangle are inside the circle and the rectangle does not
//! overlap anything already placed. If a symbol runs out of draws, the whole
//! card is thrown away and packed again from its first symbol with fresh
//! draws; there is no partial backtracking.

use crate::config::LayoutConfig;
use crate::geometry::{CardGeometry, symbol_size};
use crate::output::{CardLayout, Placement};
use crate::LayoutError;
use dobble_traits::{AssetError, ImageDimensions, ImageMetadata};
use dobble_types::{Card, Rect, Size, SymbolId};
use rand::Rng;

#[derive(Debug, Clone)]
pub struct CardPacker {
    geometry: CardGeometry,
    config: LayoutConfig,
}

impl CardPacker {
    pub fn new(geometry: CardGeometry, config: LayoutConfig) -> Result<Self, LayoutError> {
        config.validate()?;
        if geometry.circle().radius <= 0.0 {
            return Err(LayoutError::InvalidConfig(format!(
                "a {}x{} canvas has no room for the card circle",
                geometry.canvas().width,
                geometry.canvas().height
            )));
        }
        Ok(Self { geometry, config })
    }

    pub fn geometry(&self) -> &CardGeometry {
        &self.geometry
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Packs every symbol of `card`, retrying the whole card until it fits.
    ///
    /// All randomness comes from `rng`, so a seeded generator replays the
    /// exact same layout.
    ///
    /// # Errors
    ///
    /// - [`LayoutError::FatalAsset`] when a symbol's image metadata cannot be read.
    /// - [`LayoutError::PackingFailed`] when `max_card_attempts` is reached.
    pub fn pack<R, M>(&self, card: &Card, metadata: &M, rng: &mut R) -> Result<CardLayout, LayoutError>
    where
        R: Rng + ?Sized,
        M: ImageMetadata + ?Sized,
    {
        let symbols = card
            .symbols
            .iter()
            .map(|&symbol| lookup(metadata, symbol).map(|dims| (symbol, dims)))
            .collect::<Result<Vec<_>, _>>()?;

        let area = self
            .geometry
            .symbol_area(card.len(), self.config.reduction_factor);
        let draws_per_symbol = (card.len() * card.len()) as u32;

        let mut attempts = 0u32;
        loop {
            attempts += 1;
            if let Some(placements) = self.attempt(&symbols, area, draws_per_symbol, rng) {
                log::debug!("Card {} packed after {} attempt(s)", card.index, attempts);
                return Ok(CardLayout {
                    index: card.index,
                    placements,
                    attempts,
                });
            }
            log::trace!("Card {} attempt {} exhausted a symbol, restarting", card.index, attempts);

            if let Some(limit) = self.config.max_card_attempts
                && attempts >= limit
            {
                log::warn!("Card {} did not fit within {} attempts", card.index, limit);
                return Err(LayoutError::PackingFailed {
                    card: card.index,
                    attempts,
                });
            }
        }
    }

    /// One pass over the card with an empty placement buffer.
    fn attempt<R: Rng + ?Sized>(
        &self,
        symbols: &[(SymbolId, ImageDimensions)],
        area: f64,
        draws_per_symbol: u32,
        rng: &mut R,
    ) -> Option<Vec<Placement>> {
        let mut placements: Vec<Placement> = Vec::with_capacity(symbols.len());
        for &(symbol, dimensions) in symbols {
            let scale = rng.random_range(self.config.scale_percent_min..=self.config.scale_percent_max);
            let size = symbol_size(area, dimensions, scale);
            let (rect, draws) = self.place(size, &placements, draws_per_symbol, rng)?;
            let rotation = rng.random_range(0..=359u16);
            placements.push(Placement {
                symbol,
                rect,
                rotation,
                draws,
            });
        }
        Some(placements)
    }

    /// Draws positions for one rectangle until one is accepted or the budget runs out.
    fn place<R: Rng + ?Sized>(
        &self,
        size: Size,
        placed: &[Placement],
        budget: u32,
        rng: &mut R,
    ) -> Option<(Rect, u32)> {
        if !self.geometry.fits_canvas(size) {
            return None;
        }
        let canvas = self.geometry.canvas();
        let max_x = i64::from(canvas.width - size.width);
        let max_y = i64::from(canvas.height - size.height);

        (1..=budget).find_map(|draw| {
            let x = rng.random_range(0..=max_x);
            let y = rng.random_range(0..=max_y);
            let rect = Rect::from_origin(x, y, size);
            let accepted = self.geometry.contains(&rect, self.config.containment)
                && !placed.iter().any(|p| p.rect.overlaps(&rect));
            accepted.then_some((rect, draw))
        })
    }
}

fn lookup<M: ImageMetadata + ?Sized>(
    metadata: &M,
    symbol: SymbolId,
) -> Result<ImageDimensions, LayoutError> {
    let dimensions = metadata
        .dimensions(symbol)
        .map_err(|source| LayoutError::FatalAsset { symbol, source })?;
    if dimensions.width == 0 || dimensions.height == 0 {
        return Err(LayoutError::FatalAsset {
            symbol,
            source: AssetError::InvalidDimensions {
                path: metadata.source(symbol).unwrap_or_else(|_| symbol.to_string()),
                width: dimensions.width,
                height: dimensions.height,
            },
        });
    }
    Ok(dimensions)
}
