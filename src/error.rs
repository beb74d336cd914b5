// Error types. Every variant states *where* things went wrong.
use thiserror::Error;

/// Rejected engine parameters. The engine is never built with one of these.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ConfigError {
    #[error("cell size must be a finite value above 0, got {0}")]
    CellSize(f32),
    #[error("decay must lie in (0, 1], got {0}")]
    Decay(f32),
    #[error("diffusion must lie in [0, 1], got {0}")]
    Diffusion(f32),
    #[error("threshold must lie in [0, 1), got {0}")]
    Threshold(f32),
    #[error("influence radius must be at most {max} cells, got {got}")]
    InfluenceRadius { got: u32, max: u32 },
    #[error("cell size {cell_size} is too small for a {width}x{height} container")]
    GridTooLarge { width: f32, height: f32, cell_size: f32 },
}

/// Application-level failures of the demo host.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Config error: {0}")]
    Config(#[from] ConfigError), // Flags failed validation
    #[error("Window init error: {0}")]
    WindowInit(String), // Creating the window failed
    #[error("Window update error: {0}")]
    WindowUpdate(String), // Updating the window buffer failed
    #[error("Image load error: {0}")]
    ImageLoad(String), // Opening/decoding the picture failed
}
