//! Discrete model: the classic one-cell-per-frame sandpile rule.

use crate::api::SandApi;
use crate::cell::Cell;
use crate::models::slide_destination;
use crate::rng::RandomSource;

pub fn update_discrete(api: &mut SandApi, rng: &mut dyn RandomSource) {
    let me = api.get(0, 0);

    // Fall straight down
    if api.is_open(0, 1) {
        api.set(0, 0, Cell::Empty);
        api.set(0, 1, me);
        return;
    }

    // Blocked below: slide to an open lower diagonal, if any.
    if let Some((dx, dy)) = slide_destination(api, 0, 1, rng) {
        api.set(0, 0, Cell::Empty);
        api.set(dx, dy, me);
    }
}
