//! Rendering of laid-out cards.
//!
//! - [`DrawList`] is what a card looks like, independent of output format
//! - [`CardRenderer`] abstracts the output format
//! - [`SvgRenderer`] writes one SVG document per card

mod draw;
mod error;
mod href;
mod svg;
mod traits;

pub use draw::{CircleShape, DrawList, ImageDraw};
pub use error::RenderError;
pub use href::HrefResolver;
pub use svg::SvgRenderer;
pub use traits::CardRenderer;
