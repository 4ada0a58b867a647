//! The simulation context driven by the browser frontend.
//!
//! One [`Universe`] owns the grid, the tunable parameters, the random
//! source, the color wheel, and the packed pixel buffer the renderer
//! reads. The frontend calls [`Universe::tick`] once per animation
//! frame, pipes pointer and widget events into the setters, and blits
//! the pixel buffer; viewport gating (not painting over the control
//! panel) is its job, as is the frame pacing.

use wasm_bindgen::prelude::*;

use crate::brush;
use crate::cell::{Cell, Rgb};
use crate::color::ColorWheel;
use crate::params::SimParams;
use crate::rng::SimRng;
use crate::Grid;

/// Background pixel: opaque black, packed `0xAABBGGRR`.
const BACKGROUND: u32 = 0xFF00_0000;

/// Radius of the hue/saturation wheel widget, in display units.
const WHEEL_RADIUS: f32 = 100.0;

#[wasm_bindgen]
#[derive(Debug)]
pub struct Universe {
    grid: Grid,
    params: SimParams,
    rng: SimRng,
    wheel: ColorWheel,
    cell_size: u32,
    pixels: Vec<u32>,
}

#[wasm_bindgen]
impl Universe {
    /// Grid dimensions are derived from the viewport and the cell size
    /// and stay fixed for the lifetime of the universe.
    #[wasm_bindgen(constructor)]
    #[must_use]
    pub fn new(viewport_width: u32, viewport_height: u32, cell_size: u32, seed: u32) -> Self {
        let width = (viewport_width / cell_size) as usize;
        let height = (viewport_height / cell_size) as usize;
        Self {
            grid: Grid::new(width, height),
            params: SimParams::default(),
            rng: SimRng::seeded(u64::from(seed)),
            wheel: ColorWheel::new(WHEEL_RADIUS),
            cell_size,
            pixels: vec![BACKGROUND; width * height],
        }
    }

    /// One frame: a single physics pass, then refresh the pixel buffer.
    pub fn tick(&mut self) {
        self.grid.tick(&self.params, &mut self.rng);
        self.sync_pixels();
    }

    /// Paint with the active brush at a pointer position given in
    /// viewport pixels.
    pub fn paint_at(&mut self, px: i32, py: i32) {
        let cx = px / self.cell_size as i32;
        let cy = py / self.cell_size as i32;
        brush::paint(&mut self.grid, cx, cy, self.params.color, self.params.brush_size);
        self.sync_pixels();
    }

    /// Pick the active color from the wheel; `(dx, dy)` is the pointer
    /// offset from the wheel center. Outside the wheel the previous
    /// color is kept and `false` is returned.
    pub fn pick_color(&mut self, dx: f32, dy: f32) -> bool {
        match self.wheel.color_at(dx, dy) {
            Some(color) => {
                self.params.color = color;
                true
            }
            None => false,
        }
    }

    /// Remove every grain.
    pub fn clear(&mut self) {
        self.grid.clear();
        self.pixels.fill(BACKGROUND);
        log::debug!("grid cleared");
    }

    /// Switch between the discrete and kinetic models.
    pub fn toggle_model(&mut self) {
        self.params.model = self.params.model.toggled();
        log::debug!("physics model set to {}", self.params.model);
    }

    pub fn set_gravity(&mut self, gravity: f32) {
        self.params.gravity = gravity.max(0.0);
    }

    pub fn set_terminal_velocity(&mut self, terminal_velocity: f32) {
        self.params.terminal_velocity = terminal_velocity.max(f32::EPSILON);
    }

    pub fn set_brush_size(&mut self, brush_size: i32) {
        self.params.brush_size = brush_size.clamp(1, 10);
    }

    pub fn set_color(&mut self, r: u8, g: u8, b: u8) {
        self.params.color = Rgb::new(r, g, b);
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.grid.width as u32
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.grid.height as u32
    }

    #[must_use]
    pub fn cell_size(&self) -> u32 {
        self.cell_size
    }

    /// Number of occupied cells, for the HUD.
    #[must_use]
    pub fn occupied(&self) -> usize {
        self.grid.occupied()
    }

    #[must_use]
    pub fn model_name(&self) -> String {
        self.params.model.to_string()
    }

    /// Packed `0xAABBGGRR` pixels, one per cell, row-major. The renderer
    /// draws each occupied cell as a `cell_size` square at
    /// `(x * cell_size, y * cell_size)`.
    #[must_use]
    pub fn pixels_ptr(&self) -> *const u32 {
        self.pixels.as_ptr()
    }
}

impl Universe {
    fn sync_pixels(&mut self) {
        for (pixel, cell) in self.pixels.iter_mut().zip(&self.grid.cells) {
            *pixel = match cell {
                Cell::Grain(p) => p.color.packed(),
                Cell::Empty => BACKGROUND,
            };
        }
    }
}
