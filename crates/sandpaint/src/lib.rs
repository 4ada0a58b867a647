//! Falling sand painting engine.
//!
//! A fixed-size grid of colored grains, advanced one pass per frame by
//! either of two interchangeable physics models and painted into with a
//! square brush. The browser frontend drives everything through
//! [`Universe`]; the grid, models, brush, and color wheel are plain
//! Rust and fully testable natively.

pub mod api;
pub mod brush;
pub mod cell;
pub mod color;
pub mod models;
pub mod params;
pub mod rng;
pub mod universe;

use cell::Cell;
use params::SimParams;
use rng::RandomSource;

pub use universe::Universe;

/// 2D grid of cells, stored flat and indexed `y * width + x`.
///
/// Bounds are the caller's responsibility: `get`/`set` on out-of-range
/// coordinates are programming errors and panic. Movement code goes
/// through [`api::SandApi`], which treats out-of-bounds as blocked, and
/// [`brush::paint`] clips its footprint before writing.
#[derive(Debug)]
pub struct Grid {
    pub width: usize,
    pub height: usize,
    pub cells: Vec<Cell>,
    pub generation: u8,
}

impl Grid {
    #[must_use]
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::Empty; width * height],
            generation: 0,
        }
    }

    #[must_use]
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && (x as usize) < self.width && y >= 0 && (y as usize) < self.height
    }

    #[must_use]
    pub fn get(&self, x: i32, y: i32) -> Cell {
        debug_assert!(self.in_bounds(x, y), "grid read out of bounds: ({x}, {y})");
        self.cells[y as usize * self.width + x as usize]
    }

    pub fn set(&mut self, x: i32, y: i32, cell: Cell) {
        debug_assert!(self.in_bounds(x, y), "grid write out of bounds: ({x}, {y})");
        self.cells[y as usize * self.width + x as usize] = cell;
    }

    #[must_use]
    pub fn is_occupied(&self, x: i32, y: i32) -> bool {
        self.get(x, y).is_occupied()
    }

    /// Reset every cell to empty.
    pub fn clear(&mut self) {
        self.cells.fill(Cell::Empty);
    }

    /// Number of occupied cells.
    #[must_use]
    pub fn occupied(&self) -> usize {
        self.cells.iter().filter(|c| c.is_occupied()).count()
    }

    /// Advance the simulation by one pass of the active physics model.
    ///
    /// Scans column-major, bottom row to top row within each column, so
    /// a grain falling inside its own column always lands in rows that
    /// were already visited. A grain that crosses into a column still to
    /// be scanned is protected by its clock stamp: cells whose clock
    /// matches the current generation were written this pass and are
    /// skipped.
    pub fn tick(&mut self, params: &SimParams, rng: &mut dyn RandomSource) {
        self.generation = self.generation.wrapping_add(1);
        let gen = self.generation;
        let w = self.width as i32;
        let h = self.height as i32;

        for x in 0..w {
            for y in (0..h).rev() {
                let Some(grain) = self.get(x, y).particle() else {
                    continue;
                };
                if grain.clock == gen {
                    continue;
                }
                let mut sand_api = api::SandApi::new(self, x, y, gen);
                models::update_grain(params.model, &mut sand_api, params, rng);
            }
        }
    }
}
