use super::config::PipelineConfig;
use crate::error::PipelineError;
use dobble_design::{generate_cards, verify_design};
use dobble_executor::{Executor, ExecutorImpl};
use dobble_layout::{CardLayout, CardPacker, card_rng};
use dobble_render::{CardRenderer, DrawList, HrefResolver, RenderError};
use dobble_traits::ImageMetadata;
use dobble_types::Card;
use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;

/// Summary of a finished deck run.
#[derive(Debug, Clone, PartialEq)]
pub struct DeckReport {
    pub symbols_per_card: usize,
    pub output_dir: PathBuf,
    /// One file per card, in card order.
    pub files: Vec<PathBuf>,
    pub seed: u64,
    /// Whole-card packing attempts across the deck.
    pub total_attempts: u64,
}

impl DeckReport {
    pub fn cards_written(&self) -> usize {
        self.files.len()
    }
}

/// Design, packing and rendering for one deck.
///
/// Build it with [`crate::PipelineBuilder`].
pub struct DeckPipeline {
    config: PipelineConfig,
    seed: u64,
    packer: Arc<CardPacker>,
    metadata: Arc<dyn ImageMetadata>,
    renderer: Arc<dyn CardRenderer>,
    executor: ExecutorImpl,
}

/// The per-card state every executor task needs.
#[derive(Clone)]
struct CardJob {
    seed: u64,
    packer: Arc<CardPacker>,
    metadata: Arc<dyn ImageMetadata>,
}

impl CardJob {
    fn pack(&self, card: &Card) -> Result<CardLayout, PipelineError> {
        let mut rng = card_rng(self.seed, card.index);
        Ok(self.packer.pack(card, self.metadata.as_ref(), &mut rng)?)
    }
}

impl DeckPipeline {
    pub(super) fn new(
        config: PipelineConfig,
        seed: u64,
        packer: CardPacker,
        metadata: Arc<dyn ImageMetadata>,
        renderer: Arc<dyn CardRenderer>,
        executor: ExecutorImpl,
    ) -> Self {
        Self {
            config,
            seed,
            packer: Arc::new(packer),
            metadata,
            renderer,
            executor,
        }
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// The base seed every card's random stream is derived from.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Generates and verifies the deck's symbol sets.
    pub fn design(&self) -> Result<Vec<Card>, PipelineError> {
        let k = self.config.symbols_per_card;
        let cards = generate_cards(k)?;
        let stats = verify_design(&cards, k)?;
        log::debug!(
            "Design verified: {} cards, {} symbols, {} card pairs",
            stats.card_count,
            stats.symbol_count,
            stats.pairs_checked
        );
        Ok(cards)
    }

    /// Packs every card without writing anything.
    ///
    /// Stops at the first card (in card order) that fails.
    pub fn layout_deck(&self) -> Result<Vec<CardLayout>, PipelineError> {
        let cards = self.design()?;
        let job = self.job();
        self.executor
            .execute_all_fallible(cards, move |card| job.pack(&card))
            .into_iter()
            .collect()
    }

    /// Runs the whole deck and writes `<output_dir>/<index>.<ext>` per card.
    ///
    /// On a fatal error the run stops. Files already written stay on disk.
    pub fn generate(&self) -> Result<DeckReport, PipelineError> {
        let start = Instant::now();
        let k = self.config.symbols_per_card;
        let cards = self.design()?;
        log::info!(
            "Generating {} cards with {} symbols each (seed {}, {})",
            cards.len(),
            k,
            self.seed,
            self.executor.name()
        );

        let output_dir = self.config.output_dir.clone();
        fs::create_dir_all(&output_dir).map_err(|e| {
            io::Error::new(
                e.kind(),
                format!("Failed to create output folder '{}': {}", output_dir.display(), e),
            )
        })?;

        let job = self.job();
        let renderer = Arc::clone(&self.renderer);
        let metadata = Arc::clone(&self.metadata);
        let geometry = *self.packer.geometry();
        let hrefs = HrefResolver::relative_to(&output_dir);
        let dir = output_dir.clone();
        let aborted = Arc::new(AtomicBool::new(false));

        let outcomes = self.executor.execute_all_fallible(cards, move |card| {
            if aborted.load(Ordering::SeqCst) {
                return Ok(None);
            }
            let written = job.pack(&card).and_then(|layout| {
                let list = DrawList::from_layout(&layout, &geometry, |symbol| {
                    Ok(hrefs.href(&metadata.source(symbol)?))
                })?;
                let path = dir.join(renderer.file_name(card.index));
                write_card(renderer.as_ref(), &list, &path)?;
                log::debug!("Card {} -> {}", card.index, path.display());
                Ok((path, u64::from(layout.attempts)))
            });
            if written.is_err() {
                aborted.store(true, Ordering::SeqCst);
            }
            written.map(Some)
        });

        let mut files = Vec::with_capacity(outcomes.len());
        let mut total_attempts = 0;
        for outcome in outcomes {
            if let Some((path, attempts)) = outcome? {
                files.push(path);
                total_attempts += attempts;
            }
        }

        log::info!(
            "Wrote {} cards to {} in {:.2?} ({} card attempts)",
            files.len(),
            output_dir.display(),
            start.elapsed(),
            total_attempts
        );
        Ok(DeckReport {
            symbols_per_card: k,
            output_dir,
            files,
            seed: self.seed,
            total_attempts,
        })
    }

    fn job(&self) -> CardJob {
        CardJob {
            seed: self.seed,
            packer: Arc::clone(&self.packer),
            metadata: Arc::clone(&self.metadata),
        }
    }
}

fn write_card(renderer: &dyn CardRenderer, list: &DrawList, path: &Path) -> Result<(), RenderError> {
    let file = fs::File::create(path).map_err(|e| {
        io::Error::new(
            e.kind(),
            format!("Failed to create '{}': {}", path.display(), e),
        )
    })?;
    let mut out = BufWriter::new(file);
    renderer.render(list, &mut out)?;
    out.flush()?;
    Ok(())
}
