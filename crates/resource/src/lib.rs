//! Symbol image providers for deck generation.
//!
//! ## Available Providers
//!
//! - [`FilesystemResourceProvider`]: Loads images from a folder on disk
//! - [`InMemoryResourceProvider`]: Pre-populated in-memory storage (re-exported)
//!
//! [`SymbolImageLibrary`] sits on top of a provider and answers the layout
//! engine's metadata queries.

mod filesystem;
mod library;
mod sniff;

pub use filesystem::FilesystemResourceProvider;
pub use library::{DEFAULT_EXTENSIONS, SymbolImageLibrary};
pub use sniff::sniff_dimensions;

pub use dobble_traits::InMemoryResourceProvider;
