pub mod fixtures;

use dobble::PipelineConfig;
use std::path::PathBuf;
use tempfile::TempDir;

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A scratch folder with `img/` populated for a deck and an `svg/` target.
pub struct DeckWorkspace {
    pub dir: TempDir,
    pub images: PathBuf,
    pub output: PathBuf,
}

impl DeckWorkspace {
    /// Creates images for every symbol of a `symbols_per_card` deck.
    pub fn new(symbols_per_card: usize) -> std::io::Result<Self> {
        let dir = tempfile::tempdir()?;
        let images = dir.path().join("img");
        std::fs::create_dir(&images)?;
        fixtures::write_symbol_images(&images, dobble::design::symbol_count(symbols_per_card))?;
        let output = dir.path().join("svg");
        Ok(Self {
            dir,
            images,
            output,
        })
    }

    pub fn config(&self, symbols_per_card: usize, seed: u64) -> PipelineConfig {
        PipelineConfig {
            symbols_per_card,
            image_dir: self.images.clone(),
            output_dir: self.output.clone(),
            seed: Some(seed),
            ..Default::default()
        }
    }

    pub fn card_path(&self, index: usize) -> PathBuf {
        self.output.join(format!("{index}.svg"))
    }
}
