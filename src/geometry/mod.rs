pub mod hitbox;
pub mod spawn;

pub use hitbox::HitBox;
pub use spawn::{lane_x, lane_xs, random_lane_x, spawn_y};
