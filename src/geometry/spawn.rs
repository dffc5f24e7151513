use rand::Rng;

use crate::constants::{LANE_COUNT, LANE_POSITIONS, LANE_WIDTH, SCREEN_HEIGHT};

/// X at which an entity `width` pixels wide sits centred in `lane`.
pub fn lane_x(lane: usize, width: i32) -> f32 {
    (LANE_POSITIONS[lane % LANE_COUNT] + (LANE_WIDTH - width) / 2) as f32
}

/// Every legal spawn x for an entity of the given width.
pub fn lane_xs(width: i32) -> [f32; LANE_COUNT] {
    let mut xs = [0.0; LANE_COUNT];
    for (lane, x) in xs.iter_mut().enumerate() {
        *x = lane_x(lane, width);
    }
    xs
}

pub fn random_lane_x<R: Rng + ?Sized>(rng: &mut R, width: i32) -> f32 {
    lane_x(rng.gen_range(0..LANE_COUNT), width)
}

/// Initial y somewhere up to one screen above the visible area.
pub fn spawn_y<R: Rng + ?Sized>(rng: &mut R, height: i32) -> f32 {
    (-height - rng.gen_range(0..SCREEN_HEIGHT as i32)) as f32
}
