//! Relative-offset API for physics model update functions.

use crate::cell::Cell;
use crate::Grid;

/// Cursor over the grain currently being updated.
///
/// Neighbor queries are relative to `(x, y)`. Out-of-bounds offsets read
/// as blocked through [`SandApi::is_open`], which is what gives the edge
/// columns and the bottom row their containment. The clock is stamped on
/// every grain write so a grain that moved into a column still to be
/// scanned is not updated twice in one pass.
#[derive(Debug)]
pub struct SandApi<'a> {
    pub grid: &'a mut Grid,
    pub x: i32,
    pub y: i32,
    pub generation: u8,
}

impl<'a> SandApi<'a> {
    pub fn new(grid: &'a mut Grid, x: i32, y: i32, generation: u8) -> Self {
        Self { grid, x, y, generation }
    }

    /// Cell at the given offset. The target must be in bounds.
    #[must_use]
    pub fn get(&self, dx: i32, dy: i32) -> Cell {
        self.grid.get(self.x + dx, self.y + dy)
    }

    /// Whether the cell at the given offset can be moved into:
    /// in bounds and currently empty.
    #[must_use]
    pub fn is_open(&self, dx: i32, dy: i32) -> bool {
        let (nx, ny) = (self.x + dx, self.y + dy);
        self.grid.in_bounds(nx, ny) && self.grid.get(nx, ny).is_empty()
    }

    /// Write the cell at the given offset, stamping the clock on grains.
    pub fn set(&mut self, dx: i32, dy: i32, cell: Cell) {
        let stamped = match cell {
            Cell::Grain(mut p) => {
                p.clock = self.generation;
                Cell::Grain(p)
            }
            Cell::Empty => Cell::Empty,
        };
        self.grid.set(self.x + dx, self.y + dy, stamped);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::{Particle, Rgb};
    use proptest::prelude::*;

    #[test]
    fn is_open_requires_in_bounds_and_empty() {
        let mut grid = Grid::new(8, 8);
        grid.set(4, 4, Cell::grain(Rgb::new(1, 2, 3)));
        grid.set(4, 5, Cell::grain(Rgb::new(1, 2, 3)));

        let api = SandApi::new(&mut grid, 4, 4, 1);
        assert!(api.is_open(1, 0));
        assert!(!api.is_open(0, 0), "own cell is occupied");
        assert!(!api.is_open(0, 1), "neighbor below is occupied");
        assert!(!api.is_open(0, 4), "below the bottom row");
        assert!(!api.is_open(4, 0), "past the right edge");
        assert!(!api.is_open(-5, 0), "past the left edge");
    }

    #[test]
    fn set_stamps_clock_on_grains_only() {
        let mut grid = Grid::new(8, 8);
        let mut api = SandApi::new(&mut grid, 3, 3, 7);

        api.set(0, 1, Cell::grain(Rgb::new(9, 9, 9)));
        assert_eq!(api.get(0, 1).particle().unwrap().clock, 7);

        api.set(0, 1, Cell::Empty);
        assert!(api.get(0, 1).is_empty());
    }

    proptest! {
        #[test]
        fn prop_get_set_round_trip_with_clock(
            base_x in 0i32..32,
            base_y in 0i32..32,
            dx in -16i32..16,
            dy in -16i32..16,
            velocity in 0.0f32..10.0,
            generation in any::<u8>(),
        ) {
            prop_assume!((0..32).contains(&(base_x + dx)) && (0..32).contains(&(base_y + dy)));

            let mut grid = Grid::new(32, 32);
            let mut api = SandApi::new(&mut grid, base_x, base_y, generation);

            let mut grain = Particle::new(Rgb::new(5, 6, 7));
            grain.velocity = velocity;
            api.set(dx, dy, Cell::Grain(grain));

            let got = api.get(dx, dy).particle().unwrap();
            prop_assert_eq!(got.color, grain.color);
            prop_assert_eq!(got.velocity, grain.velocity);
            prop_assert_eq!(got.clock, generation, "clock must be stamped on write");
        }
    }
}
