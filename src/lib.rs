//! Spot-the-match deck generation.
//!
//! A deck for `k` symbols per card has `k² − k + 1` cards, and any two cards
//! share exactly one symbol. [`dobble_design`] decides which symbols go on
//! which card, [`dobble_layout`] scatters each card's symbol images inside a
//! circle, and [`dobble_render`] writes the result as one SVG per card.

pub mod error;
pub mod pipeline;

pub use error::PipelineError;
pub use pipeline::{DeckPipeline, DeckReport, PipelineBuilder, PipelineConfig};

pub use dobble_design as design;
pub use dobble_layout as layout;
pub use dobble_render as render;
pub use dobble_types as types;
