//! Symbol id to image file resolution, with cached dimensions.

use crate::sniff::sniff_dimensions;
use dobble_traits::{AssetError, ImageDimensions, ImageMetadata, ResourceError, ResourceProvider};
use dobble_types::SymbolId;
use std::collections::HashMap;
use std::sync::RwLock;

/// Extensions tried, in order, when resolving `<id>.<ext>`.
pub const DEFAULT_EXTENSIONS: [&str; 4] = ["png", "jpg", "jpeg", "gif"];

#[derive(Debug, Clone)]
struct ResolvedImage {
    file_name: String,
    source: String,
    dimensions: ImageDimensions,
}

/// Serves [`ImageMetadata`] for symbol ids from any [`ResourceProvider`].
///
/// Symbol `7` resolves to the first of `7.png`, `7.jpg`, ... that the
/// provider has. Each image is read once; later lookups hit the cache, so the
/// library can be shared between executor threads.
#[derive(Debug)]
pub struct SymbolImageLibrary<P: ResourceProvider> {
    provider: P,
    extensions: Vec<String>,
    cache: RwLock<HashMap<SymbolId, ResolvedImage>>,
}

impl<P: ResourceProvider> SymbolImageLibrary<P> {
    pub fn new(provider: P) -> Self {
        Self::with_extensions(provider, DEFAULT_EXTENSIONS)
    }

    pub fn with_extensions<I, S>(provider: P, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            provider,
            extensions: extensions
                .into_iter()
                .map(|ext| ext.into().trim_start_matches('.').to_ascii_lowercase())
                .collect(),
            cache: RwLock::new(HashMap::new()),
        }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// The file name a symbol resolved to, e.g. `"12.jpg"`.
    pub fn file_name(&self, symbol: SymbolId) -> Result<String, AssetError> {
        self.resolve(symbol).map(|image| image.file_name)
    }

    fn resolve(&self, symbol: SymbolId) -> Result<ResolvedImage, AssetError> {
        if let Ok(cache) = self.cache.read()
            && let Some(hit) = cache.get(&symbol)
        {
            return Ok(hit.clone());
        }

        let resolved = self.load(symbol)?;
        if let Ok(mut cache) = self.cache.write() {
            cache.insert(symbol, resolved.clone());
        }
        Ok(resolved)
    }

    fn load(&self, symbol: SymbolId) -> Result<ResolvedImage, AssetError> {
        let candidates: Vec<String> = self
            .extensions
            .iter()
            .map(|ext| format!("{symbol}.{ext}"))
            .collect();

        for file_name in &candidates {
            let bytes = match self.provider.load(file_name) {
                Ok(bytes) => bytes,
                Err(ResourceError::NotFound(_)) => continue,
                Err(ResourceError::LoadFailed { path, message }) => {
                    return Err(AssetError::Io { path, message });
                }
            };

            let dimensions = sniff_dimensions(file_name, &bytes)?;
            let source = self
                .provider
                .locate(file_name)
                .map(|path| path.display().to_string())
                .unwrap_or_else(|| file_name.clone());
            log::debug!(
                "Symbol {} -> {} ({}x{})",
                symbol,
                file_name,
                dimensions.width,
                dimensions.height
            );
            return Ok(ResolvedImage {
                file_name: file_name.clone(),
                source,
                dimensions,
            });
        }

        Err(AssetError::NotFound {
            symbol,
            tried: candidates.join(", "),
        })
    }
}

impl<P: ResourceProvider> ImageMetadata for SymbolImageLibrary<P> {
    fn dimensions(&self, symbol: SymbolId) -> Result<ImageDimensions, AssetError> {
        self.resolve(symbol).map(|image| image.dimensions)
    }

    fn source(&self, symbol: SymbolId) -> Result<String, AssetError> {
        self.resolve(symbol).map(|image| image.source)
    }

    fn name(&self) -> &'static str {
        "SymbolImageLibrary"
    }
}
