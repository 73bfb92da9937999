//! Deck generation pipeline.
//!
//! - [`PipelineConfig`]: what to generate, loadable from JSON
//! - [`PipelineBuilder`]: fluent construction, filling in filesystem defaults
//! - [`DeckPipeline`]: runs design, packing and rendering
//!
//! # Example
//!
//! ```ignore
//! use dobble::PipelineBuilder;
//!
//! let report = PipelineBuilder::new()
//!     .with_symbols_per_card(8)
//!     .with_seed(42)
//!     .build()?
//!     .generate()?;
//!
//! println!("{} cards", report.cards_written());
//! ```

mod builder;
pub mod config;
mod orchestrator;

pub use builder::PipelineBuilder;
pub use config::PipelineConfig;
pub use orchestrator::{DeckPipeline, DeckReport};
