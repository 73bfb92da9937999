use clap::{Args, Parser, Subcommand};
use dobble::design::{DesignStats, generate_cards, verify_design};
use dobble::layout::Containment;
use dobble::types::Card;
use dobble::{PipelineBuilder, PipelineConfig, PipelineError};
use serde::Serialize;
use std::path::PathBuf;
use std::process::ExitCode;

/// Generates a spot-the-match card deck: any two cards share exactly one symbol.
///
/// Symbol images are read from `<images>/<id>.<png|jpg|jpeg|gif>` and every
/// card is written as `<output>/<index>.svg`. Set `RUST_LOG=info` to follow
/// progress.
#[derive(Parser, Debug)]
#[command(version, about, args_conflicts_with_subcommands = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    #[command(flatten)]
    generate: GenerateArgs,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Lay out and render the whole deck (the default)
    Generate(GenerateArgs),
    /// Print which symbols go on which card, without touching any files
    Design(DesignArgs),
}

#[derive(Args, Debug, Default)]
struct GenerateArgs {
    /// Symbols per card
    #[arg(short = 'k', long = "symbols")]
    symbols_per_card: Option<usize>,

    /// Folder holding the symbol images
    #[arg(long)]
    images: Option<PathBuf>,

    /// Folder the cards are written to
    #[arg(long)]
    output: Option<PathBuf>,

    /// JSON configuration file; flags given here override its values
    #[arg(long)]
    config: Option<PathBuf>,

    /// Base seed, for reproducible decks
    #[arg(long)]
    seed: Option<u64>,

    /// Lay out cards on all cores
    #[arg(long)]
    parallel: bool,

    /// Whole-card retries before giving up (0 = retry forever)
    #[arg(long)]
    max_card_attempts: Option<u32>,

    /// Test corners against the true circle instead of the inscribed diamond
    #[arg(long)]
    euclidean: bool,

    /// Divides each symbol's share of the circle; higher means smaller symbols
    #[arg(long)]
    reduction: Option<f64>,
}

#[derive(Args, Debug)]
struct DesignArgs {
    /// Symbols per card
    #[arg(short = 'k', long = "symbols", default_value_t = 5)]
    symbols_per_card: usize,

    /// Print the deck as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct DesignListing<'a> {
    stats: DesignStats,
    cards: &'a [Card],
}

impl GenerateArgs {
    fn into_config(self) -> Result<PipelineConfig, PipelineError> {
        let mut config = match &self.config {
            Some(path) => PipelineConfig::from_json_file(path)?,
            None => PipelineConfig::default(),
        };
        if let Some(k) = self.symbols_per_card {
            config.symbols_per_card = k;
        }
        if let Some(images) = self.images {
            config.image_dir = images;
        }
        if let Some(output) = self.output {
            config.output_dir = output;
        }
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
        if self.parallel {
            config.parallel = true;
        }
        if let Some(limit) = self.max_card_attempts {
            config.layout.max_card_attempts = (limit > 0).then_some(limit);
        }
        if self.euclidean {
            config.layout.containment = Containment::Euclidean;
        }
        if let Some(reduction) = self.reduction {
            config.layout.reduction_factor = reduction;
        }
        Ok(config)
    }
}

fn generate(args: GenerateArgs) -> Result<(), PipelineError> {
    let config = args.into_config()?;
    let report = PipelineBuilder::new().with_config(config).build()?.generate()?;
    println!(
        "Success! Wrote {} cards to {}",
        report.cards_written(),
        report.output_dir.display()
    );
    Ok(())
}

fn design(args: DesignArgs) -> Result<(), PipelineError> {
    let k = args.symbols_per_card;
    let cards = generate_cards(k)?;
    let stats = verify_design(&cards, k)?;

    if args.json {
        let listing = DesignListing {
            stats,
            cards: &cards,
        };
        println!("{}", serde_json::to_string_pretty(&listing)?);
        return Ok(());
    }

    for card in &cards {
        let symbols: Vec<String> = card.symbols.iter().map(|s| s.to_string()).collect();
        println!("{:>4}: {}", card.index.get(), symbols.join(" "));
    }
    println!(
        "{} cards, {} symbols, {} per card; all {} card pairs share exactly one symbol",
        stats.card_count, stats.symbol_count, stats.symbols_per_card, stats.pairs_checked
    );
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    let cli = Cli::parse();
    let result = match cli.command {
        Some(Command::Generate(args)) => generate(args),
        Some(Command::Design(args)) => design(args),
        None => generate(cli.generate),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_bare_flags_mean_generate() {
        let cli = Cli::try_parse_from(["dobble", "-k", "8", "--seed", "3", "--parallel"]).unwrap();
        assert!(cli.command.is_none());
        let config = cli.generate.into_config().unwrap();
        assert_eq!(config.symbols_per_card, 8);
        assert_eq!(config.seed, Some(3));
        assert!(config.parallel);
    }

    #[test]
    fn test_zero_attempts_means_unbounded() {
        let cli = Cli::try_parse_from(["dobble", "generate", "--max-card-attempts", "0"]).unwrap();
        let Some(Command::Generate(args)) = cli.command else {
            panic!("expected generate subcommand");
        };
        assert_eq!(args.into_config().unwrap().layout.max_card_attempts, None);
    }

    #[test]
    fn test_layout_overrides() {
        let cli = Cli::try_parse_from(["dobble", "--euclidean", "--reduction", "6.5"]).unwrap();
        let config = cli.generate.into_config().unwrap();
        assert_eq!(config.layout.containment, Containment::Euclidean);
        assert_eq!(config.layout.reduction_factor, 6.5);
        assert_eq!(config.image_dir, PathBuf::from("img"));
    }

    #[test]
    fn test_design_subcommand() {
        let cli = Cli::try_parse_from(["dobble", "design", "-k", "3", "--json"]).unwrap();
        match cli.command {
            Some(Command::Design(args)) => {
                assert_eq!(args.symbols_per_card, 3);
                assert!(args.json);
            }
            other => panic!("unexpected {other:?}"),
        }
    }
}
