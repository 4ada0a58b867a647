//! Physics model update functions dispatched from the tick loop.

mod discrete;
mod kinetic;

use crate::api::SandApi;
use crate::params::{PhysicsModel, SimParams};
use crate::rng::RandomSource;

/// Advance one grain under the active model.
///
/// Empty cells and already-updated grains are skipped before this is
/// called.
pub fn update_grain(
    model: PhysicsModel,
    api: &mut SandApi,
    params: &SimParams,
    rng: &mut dyn RandomSource,
) {
    match model {
        PhysicsModel::Discrete => discrete::update_discrete(api, rng),
        PhysicsModel::Kinetic => kinetic::update_kinetic(api, params, rng),
    }
}

/// Diagonal slide rule shared by both models.
///
/// Given a blocked target at offset `(dx, dy)`, consider the two cells
/// beside it. Both open: uniform random pick. One open: that one.
/// Neither: `None`, the grain stays where it is.
pub(crate) fn slide_destination(
    api: &SandApi,
    dx: i32,
    dy: i32,
    rng: &mut dyn RandomSource,
) -> Option<(i32, i32)> {
    let left = api.is_open(dx - 1, dy);
    let right = api.is_open(dx + 1, dy);
    match (left, right) {
        (true, true) => Some(if rng.coin_flip() {
            (dx - 1, dy)
        } else {
            (dx + 1, dy)
        }),
        (true, false) => Some((dx - 1, dy)),
        (false, true) => Some((dx + 1, dy)),
        (false, false) => None,
    }
}
