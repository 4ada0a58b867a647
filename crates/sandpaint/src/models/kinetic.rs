//! Kinetic model: gravity-integrated fall with fractional horizontal drift.
//!
//! Velocity accumulates `gravity` each tick up to `terminal_velocity`,
//! so a grain can cross several rows in one pass; only the destination
//! cell is tested, not the cells flown through. Horizontal motion is a
//! jitter accumulator: a uniform value in [-0.5, 0.5) is added each tick
//! and spills into a one-column shift whenever the accumulator crosses a
//! whole unit, which gives sub-cell drift without fractional grid
//! coordinates.
//!
//! A fall clamped away at the floor counts as "no motion intended" and
//! keeps its velocity; only a move blocked by all three destinations is
//! a stall, which resets velocity to zero.

use crate::api::SandApi;
use crate::cell::Cell;
use crate::models::slide_destination;
use crate::params::SimParams;
use crate::rng::RandomSource;

pub fn update_kinetic(api: &mut SandApi, params: &SimParams, rng: &mut dyn RandomSource) {
    let Some(mut grain) = api.get(0, 0).particle() else {
        return;
    };

    grain.velocity = (grain.velocity + params.gravity).min(params.terminal_velocity);

    grain.drift += rng.uniform(-0.5, 0.5);
    let shift = grain.drift.trunc();
    grain.drift -= shift;

    let w = api.grid.width as i32;
    let h = api.grid.height as i32;
    let target_row = ((api.y as f32 + grain.velocity).floor() as i32).min(h - 1);
    let target_col = (api.x + shift as i32).clamp(0, w - 1);

    let (dx, dy) = (target_col - api.x, target_row - api.y);
    if dx == 0 && dy == 0 {
        // No net displacement after clamping: stay, keep the updated
        // velocity and drift remainder.
        api.set(0, 0, Cell::Grain(grain));
        return;
    }

    if api.is_open(dx, dy) {
        api.set(0, 0, Cell::Empty);
        api.set(dx, dy, Cell::Grain(grain));
        return;
    }

    if let Some((sx, sy)) = slide_destination(api, dx, dy, rng) {
        api.set(0, 0, Cell::Empty);
        api.set(sx, sy, Cell::Grain(grain));
        return;
    }

    // Full stop: target and both alternatives blocked.
    grain.velocity = 0.0;
    api.set(0, 0, Cell::Grain(grain));
}
