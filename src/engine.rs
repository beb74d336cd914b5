// The reveal engine: owns the heat field and pointer, and turns one tick into draw requests.
// It never schedules itself; the host calls `step` (or `render`) once per frame.
//
// Per tick: inject pointer heat into the current grid → diffuse/decay into the back
// buffer and swap → compose tiles from the new grid if the picture has arrived.

use log::{debug, info, trace, warn};

use crate::compositor::{DrawRequest, compose};
use crate::config::RevealConfig;
use crate::diffuse::DoubleBuffer;
use crate::error::ConfigError;
use crate::grid::HeatGrid;
use crate::inject::{HeatStamp, PointerState, inject_heat};
use crate::surface::Surface;
use crate::types::ImageSource;

/// Whether the engine can draw yet. Heat is simulated in both states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    AwaitingImage,
    Ready,
}

pub struct RevealEngine<I: ImageSource> {
    config: RevealConfig,
    stamp: HeatStamp,
    width: f32,
    height: f32,
    grid: DoubleBuffer,
    pointer: PointerState,
    image: Option<I>,
    requests: Vec<DrawRequest>,
}

impl<I: ImageSource> RevealEngine<I> {
    /// Build an engine for a `width` x `height` container. Rejects invalid configs up front,
    /// including a cell size so small the grid would not fit in memory.
    pub fn new(width: f32, height: f32, config: RevealConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let grid = HeatGrid::for_container(width, height, config.cell_size).ok_or(
            ConfigError::GridTooLarge { width, height, cell_size: config.cell_size },
        )?;
        Ok(Self {
            stamp: HeatStamp::new(config.influence_radius),
            config,
            width,
            height,
            grid: DoubleBuffer::new(grid),
            pointer: PointerState::default(),
            image: None,
            requests: Vec::new(),
        })
    }

    /// Throw away all heat and rebuild the grid for the new container size.
    /// Image readiness is untouched. A size too large to grid leaves an empty grid.
    pub fn resize(&mut self, width: f32, height: f32) {
        let grid = HeatGrid::for_container(width, height, self.config.cell_size).unwrap_or_else(|| {
            warn!("{width}x{height} container needs too many cells; simulating an empty grid");
            HeatGrid::new(0, 0)
        });
        debug!(
            "resize {}x{} -> {width}x{height}: grid now {}x{}",
            self.width,
            self.height,
            grid.cols(),
            grid.rows()
        );
        self.width = width;
        self.height = height;
        self.grid = DoubleBuffer::new(grid);
        self.requests.clear();
    }

    /// Hand over (or replace) the picture. Heat is kept.
    pub fn set_image(&mut self, image: I) {
        info!("image ready: {}x{}", image.width(), image.height());
        self.image = Some(image);
    }

    pub fn pointer_move(&mut self, x: f32, y: f32) {
        self.pointer = PointerState { x, y, active: true };
    }

    pub fn pointer_leave(&mut self) {
        self.pointer = PointerState { active: false, ..self.pointer };
    }

    /// One tick. The returned slice is valid until the next call that mutates the engine.
    pub fn step(&mut self) -> &[DrawRequest] {
        // Pointer is read once, as a whole, at the start of the tick.
        let pointer = self.pointer;
        inject_heat(self.grid.front_mut(), &pointer, self.config.cell_size, &self.stamp);
        self.grid.step(self.config.diffusion, self.config.decay);

        let image_size = self.image.as_ref().map(|img| (img.width(), img.height()));
        compose(
            self.grid.front(),
            image_size,
            (self.width, self.height),
            self.config.cell_size,
            self.config.threshold,
            &mut self.requests,
        );
        trace!("tick: {} tiles visible", self.requests.len());
        &self.requests
    }

    /// Clear `surface`, run one tick, and draw every visible tile onto it.
    pub fn render<S: Surface<I>>(&mut self, surface: &mut S) {
        surface.clear();
        self.step();
        if let Some(image) = &self.image {
            for request in &self.requests {
                surface.draw_image(image, request);
            }
        }
    }

    pub fn state(&self) -> EngineState {
        if self.image.is_some() { EngineState::Ready } else { EngineState::AwaitingImage }
    }

    pub fn grid(&self) -> &HeatGrid {
        self.grid.front()
    }

    pub fn config(&self) -> &RevealConfig {
        &self.config
    }

    pub fn pointer(&self) -> PointerState {
        self.pointer
    }

    pub fn image(&self) -> Option<&I> {
        self.image.as_ref()
    }

    pub fn container_size(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    /// Tear down: releases the grid and the image handle. Consuming `self`
    /// means no tick or pointer event can reach the engine afterwards.
    pub fn destroy(self) {
        debug!("engine destroyed ({} cells released)", self.grid.front().len());
    }
}
