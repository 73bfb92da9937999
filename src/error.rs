use dobble_design::DesignError;
use dobble_layout::LayoutError;
use dobble_render::RenderError;
use thiserror::Error;

/// Everything that can stop a deck run.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Design failed: {0}")]
    Design(#[from] DesignError),

    #[error("Layout failed: {0}")]
    Layout(#[from] LayoutError),

    #[error("Rendering failed: {0}")]
    Render(#[from] RenderError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid JSON configuration: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}
