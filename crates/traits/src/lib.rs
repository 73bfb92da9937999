pub mod executor;
pub mod metadata;
pub mod resource;

pub use executor::{Executor, SyncExecutor};
pub use metadata::{AssetError, FixedImageMetadata, ImageDimensions, ImageMetadata};
pub use resource::{InMemoryResourceProvider, ResourceError, ResourceProvider, SharedResourceData};
