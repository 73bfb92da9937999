use super::config::PipelineConfig;
use super::orchestrator::DeckPipeline;
use crate::error::PipelineError;
use dobble_executor::ExecutorImpl;
use dobble_layout::{CardGeometry, CardPacker};
use dobble_render::{CardRenderer, SvgRenderer};
use dobble_resource::{FilesystemResourceProvider, SymbolImageLibrary};
use dobble_traits::ImageMetadata;
use rand::Rng;
use std::path::Path;
use std::sync::Arc;

/// A builder for creating a `DeckPipeline`.
///
/// Anything not set explicitly is derived from the configuration: symbol
/// images come from `image_dir`, cards are rendered as SVG, and the executor
/// follows the `parallel` flag.
#[derive(Default)]
pub struct PipelineBuilder {
    config: PipelineConfig,
    metadata: Option<Arc<dyn ImageMetadata>>,
    renderer: Option<Arc<dyn CardRenderer>>,
    executor: Option<ExecutorImpl>,
}

impl PipelineBuilder {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn with_config(mut self, config: PipelineConfig) -> Self {
        self.config = config;
        self
    }

    /// Loads the configuration from a JSON file, replacing the current one.
    pub fn with_config_file<P: AsRef<Path>>(mut self, path: P) -> Result<Self, PipelineError> {
        self.config = PipelineConfig::from_json_file(path)?;
        Ok(self)
    }

    pub fn with_symbols_per_card(mut self, symbols_per_card: usize) -> Self {
        self.config.symbols_per_card = symbols_per_card;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    pub fn with_output_dir<P: AsRef<Path>>(mut self, dir: P) -> Self {
        self.config.output_dir = dir.as_ref().to_path_buf();
        self
    }

    /// Serves symbol images from somewhere other than `image_dir`.
    pub fn with_image_metadata(mut self, metadata: Arc<dyn ImageMetadata>) -> Self {
        self.metadata = Some(metadata);
        self
    }

    pub fn with_renderer(mut self, renderer: Arc<dyn CardRenderer>) -> Self {
        self.renderer = Some(renderer);
        self
    }

    pub fn with_executor(mut self, executor: ExecutorImpl) -> Self {
        self.executor = Some(executor);
        self
    }

    /// Validates the configuration and assembles the pipeline.
    pub fn build(self) -> Result<DeckPipeline, PipelineError> {
        let config = self.config;
        config.validate()?;

        let packer = CardPacker::new(CardGeometry::square(config.canvas_size), config.layout)?;
        let metadata: Arc<dyn ImageMetadata> = match self.metadata {
            Some(metadata) => metadata,
            None => {
                log::debug!("Reading symbol images from {}", config.image_dir.display());
                Arc::new(SymbolImageLibrary::with_extensions(
                    FilesystemResourceProvider::new(&config.image_dir),
                    config.image_extensions.iter().cloned(),
                ))
            }
        };
        let renderer: Arc<dyn CardRenderer> = match self.renderer {
            Some(renderer) => renderer,
            None => Arc::new(SvgRenderer::new()),
        };
        let executor = self
            .executor
            .unwrap_or_else(|| ExecutorImpl::for_parallelism(config.parallel));

        let seed = match config.seed {
            Some(seed) => seed,
            None => {
                let seed = rand::rng().random();
                log::info!("No seed configured; using {seed} (pass --seed {seed} to reproduce)");
                seed
            }
        };

        Ok(DeckPipeline::new(config, seed, packer, metadata, renderer, executor))
    }
}
