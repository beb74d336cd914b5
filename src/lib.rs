//! Heat-diffusion reveal engine.
//!
//! A coarse heat grid sits over a container. Pointer movement injects heat, heat spreads to
//! neighbouring cells and decays every tick, and every cell above a threshold shows its tile
//! of a cover-scaled picture with opacity proportional to how hot it is.
//!
//! The engine is driven by the host: call [`RevealEngine::step`] (or
//! [`RevealEngine::render`]) once per frame and feed pointer events in between.

pub mod compositor;
pub mod config;
pub mod diffuse;
pub mod engine;
pub mod error;
pub mod gamma;
pub mod grid;
pub mod inject;
pub mod logging;
pub mod surface;
pub mod types;

pub use compositor::{CoverTransform, DrawRequest, Rect};
pub use config::RevealConfig;
pub use engine::{EngineState, RevealEngine};
pub use error::{ConfigError, Error};
pub use grid::HeatGrid;
pub use inject::PointerState;
pub use surface::{SoftwareSurface, Surface};
pub use types::{FrameBuffer, ImageSource};
