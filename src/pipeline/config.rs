use crate::error::PipelineError;
use dobble_design::{MAX_SYMBOLS_PER_CARD, is_supported};
use dobble_layout::{CardGeometry, LayoutConfig};
use dobble_resource::DEFAULT_EXTENSIONS;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Everything a deck run needs to know, loadable from a JSON file.
///
/// Missing fields take their defaults, so `{}` is a valid configuration that
/// reproduces the classic setup: 5 symbols per card, images from `img/`,
/// cards into `svg/`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    pub symbols_per_card: usize,
    pub image_dir: PathBuf,
    pub output_dir: PathBuf,
    /// Tried in order when resolving `<id>.<ext>`.
    pub image_extensions: Vec<String>,
    /// Card edge in drawing units; rendered as the same number of millimetres.
    pub canvas_size: u32,
    pub layout: LayoutConfig,
    /// Base seed for every card's random stream. Drawn at random when absent.
    pub seed: Option<u64>,
    pub parallel: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            symbols_per_card: 5,
            image_dir: PathBuf::from("img"),
            output_dir: PathBuf::from("svg"),
            image_extensions: DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
            canvas_size: 100,
            layout: LayoutConfig::default(),
            seed: None,
            parallel: false,
        }
    }
}

impl PipelineConfig {
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, PipelineError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|e| {
            PipelineError::Io(io::Error::new(
                e.kind(),
                format!("Failed to read config from '{}': {}", path.display(), e),
            ))
        })?;
        let config: Self = serde_json::from_str(&source)?;
        log::debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), PipelineError> {
        let k = self.symbols_per_card;
        if !(2..=MAX_SYMBOLS_PER_CARD).contains(&k) {
            return Err(PipelineError::Config(format!(
                "symbols per card must be between 2 and {MAX_SYMBOLS_PER_CARD}, got {k}"
            )));
        }
        if !is_supported(k) {
            return Err(PipelineError::Config(format!(
                "{k} symbols per card is not supported: {} is not a prime power (try one of 3, 4, 5, 6, 8, 9, 10, 12, 14)",
                k - 1
            )));
        }
        let radius = CardGeometry::square(self.canvas_size).circle().radius;
        if radius <= 0.0 {
            return Err(PipelineError::Config(format!(
                "canvas size {} leaves no room for the card circle (radius {radius})",
                self.canvas_size
            )));
        }
        if self.image_extensions.iter().all(|e| e.trim_start_matches('.').is_empty()) {
            return Err(PipelineError::Config(
                "at least one image extension is required".to_string(),
            ));
        }
        self.layout
            .validate()
            .map_err(|e| PipelineError::Config(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dobble_layout::Containment;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = PipelineConfig::default();
        assert_eq!(config.symbols_per_card, 5);
        assert_eq!(config.image_dir, PathBuf::from("img"));
        assert_eq!(config.output_dir, PathBuf::from("svg"));
        assert_eq!(config.image_extensions, vec!["png", "jpg", "jpeg", "gif"]);
        assert_eq!(config.canvas_size, 100);
        assert!(config.seed.is_none());
        assert!(!config.parallel);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_json_is_default() {
        let config: PipelineConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, PipelineConfig::default());
    }

    #[test]
    fn test_from_json_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{ "symbols_per_card": 8, "seed": 7, "layout": {{ "containment": "euclidean", "max_card_attempts": null }} }}"#
        )
        .unwrap();

        let config = PipelineConfig::from_json_file(file.path()).unwrap();
        assert_eq!(config.symbols_per_card, 8);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.layout.containment, Containment::Euclidean);
        assert_eq!(config.layout.max_card_attempts, None);
        assert_eq!(config.layout.reduction_factor, 4.0);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = PipelineConfig::from_json_file(dir.path().join("deck.json"));
        assert!(matches!(result, Err(PipelineError::Io(_))));
    }

    #[test]
    fn test_malformed_file_is_json_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ symbols_per_card: five }}").unwrap();
        let result = PipelineConfig::from_json_file(file.path());
        assert!(matches!(result, Err(PipelineError::Json(_))));
    }

    #[test]
    fn test_smallest_usable_canvas() {
        let config = PipelineConfig { canvas_size: 3, ..Default::default() };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_bad_values() {
        let cases = [
            PipelineConfig { symbols_per_card: 1, ..Default::default() },
            PipelineConfig { symbols_per_card: 7, ..Default::default() },
            PipelineConfig { symbols_per_card: MAX_SYMBOLS_PER_CARD + 1, ..Default::default() },
            PipelineConfig { canvas_size: 0, ..Default::default() },
            PipelineConfig { canvas_size: 1, ..Default::default() },
            PipelineConfig { canvas_size: 2, ..Default::default() },
            PipelineConfig { image_extensions: vec![], ..Default::default() },
            PipelineConfig {
                layout: LayoutConfig { reduction_factor: -2.0, ..Default::default() },
                ..Default::default()
            },
            PipelineConfig {
                layout: LayoutConfig {
                    scale_percent_min: 150,
                    ..Default::default()
                },
                ..Default::default()
            },
        ];
        for config in cases {
            assert!(
                matches!(config.validate(), Err(PipelineError::Config(_))),
                "{config:?} should be rejected"
            );
        }
    }
}
