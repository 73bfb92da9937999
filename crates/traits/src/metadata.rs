//! Symbol image metadata lookup.
//!
//! The layout engine never touches image bytes; it only needs each symbol's
//! pixel dimensions (for its aspect ratio) and a reference the renderer can
//! point at.

use dobble_types::SymbolId;
use std::collections::HashMap;
use std::fmt::Debug;
use thiserror::Error;

/// Pixel dimensions read from an image header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageDimensions {
    pub width: u32,
    pub height: u32,
}

impl ImageDimensions {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// `width / height`. Callers must reject zero heights first.
    pub fn aspect_ratio(&self) -> f64 {
        f64::from(self.width) / f64::from(self.height)
    }
}

/// Failure to obtain a symbol's image metadata.
///
/// Every variant is fatal to a deck run: a symbol is never silently dropped
/// from a card.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AssetError {
    #[error("No image found for symbol {symbol} (tried: {tried})")]
    NotFound { symbol: SymbolId, tried: String },

    #[error("Unsupported image format in '{path}': {message}")]
    UnsupportedFormat { path: String, message: String },

    #[error("Truncated or malformed image header in '{path}': {message}")]
    Truncated { path: String, message: String },

    #[error("Image '{path}' has unusable dimensions {width}x{height}")]
    InvalidDimensions {
        path: String,
        width: u32,
        height: u32,
    },

    #[error("I/O error reading '{path}': {message}")]
    Io { path: String, message: String },
}

/// Looks up per-symbol image information.
pub trait ImageMetadata: Send + Sync + Debug {
    /// Pixel dimensions of the symbol's image.
    fn dimensions(&self, symbol: SymbolId) -> Result<ImageDimensions, AssetError>;

    /// A reference to the symbol's image suitable for a renderer's image href.
    fn source(&self, symbol: SymbolId) -> Result<String, AssetError>;

    /// Returns a human-readable name for this lookup (for logging/debugging).
    fn name(&self) -> &'static str;
}

/// Metadata served from a fixed table, with an optional fallback for
/// symbols that were not registered.
#[derive(Debug, Clone, Default)]
pub struct FixedImageMetadata {
    entries: HashMap<SymbolId, ImageDimensions>,
    fallback: Option<ImageDimensions>,
}

impl FixedImageMetadata {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every symbol reports the same dimensions.
    pub fn uniform(dimensions: ImageDimensions) -> Self {
        Self {
            entries: HashMap::new(),
            fallback: Some(dimensions),
        }
    }

    pub fn with(mut self, symbol: SymbolId, dimensions: ImageDimensions) -> Self {
        self.entries.insert(symbol, dimensions);
        self
    }
}

impl ImageMetadata for FixedImageMetadata {
    fn dimensions(&self, symbol: SymbolId) -> Result<ImageDimensions, AssetError> {
        self.entries
            .get(&symbol)
            .copied()
            .or(self.fallback)
            .ok_or_else(|| AssetError::NotFound {
                symbol,
                tried: "fixed table".to_string(),
            })
    }

    fn source(&self, symbol: SymbolId) -> Result<String, AssetError> {
        self.dimensions(symbol)?;
        Ok(format!("{symbol}.png"))
    }

    fn name(&self) -> &'static str {
        "FixedImageMetadata"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aspect_ratio() {
        assert_eq!(ImageDimensions::new(200, 100).aspect_ratio(), 2.0);
        assert_eq!(ImageDimensions::new(50, 200).aspect_ratio(), 0.25);
    }

    #[test]
    fn test_fixed_metadata_uniform() {
        let metadata = FixedImageMetadata::uniform(ImageDimensions::new(64, 64));
        assert_eq!(
            metadata.dimensions(SymbolId::new(99)).unwrap(),
            ImageDimensions::new(64, 64)
        );
        assert_eq!(metadata.source(SymbolId::new(99)).unwrap(), "99.png");
    }

    #[test]
    fn test_fixed_metadata_entry_overrides_fallback() {
        let metadata = FixedImageMetadata::uniform(ImageDimensions::new(64, 64))
            .with(SymbolId::new(2), ImageDimensions::new(30, 10));
        assert_eq!(
            metadata.dimensions(SymbolId::new(2)).unwrap(),
            ImageDimensions::new(30, 10)
        );
    }

    #[test]
    fn test_fixed_metadata_missing_symbol() {
        let metadata = FixedImageMetadata::new();
        let err = metadata.dimensions(SymbolId::new(5)).unwrap_err();
        assert!(matches!(err, AssetError::NotFound { symbol, .. } if symbol == SymbolId::new(5)));
        assert!(metadata.source(SymbolId::new(5)).is_err());
    }
}
