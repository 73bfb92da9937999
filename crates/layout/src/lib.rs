use dobble_traits::AssetError;
use dobble_types::{CardIndex, SymbolId};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LayoutError {
    #[error("Cannot lay out symbol {symbol}: {source}")]
    FatalAsset {
        symbol: SymbolId,
        #[source]
        source: AssetError,
    },
    #[error("Card {card} could not be packed after {attempts} attempts; try a larger reduction factor")]
    PackingFailed { card: CardIndex, attempts: u32 },
    #[error("Invalid layout configuration: {0}")]
    InvalidConfig(String),
}

pub mod config;
pub mod geometry;
pub mod output;
pub mod packer;
pub mod rng;

pub use self::config::LayoutConfig;
pub use self::geometry::{CardGeometry, Containment, symbol_size};
pub use self::output::{CardLayout, Placement};
pub use self::packer::CardPacker;
pub use self::rng::card_rng;
