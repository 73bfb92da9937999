pub mod card;
pub mod geometry;
pub mod ids;

pub use card::Card;
pub use geometry::{Circle, Point, Rect, Size};
pub use ids::{CardIndex, SymbolId};
