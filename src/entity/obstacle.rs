use rand::Rng;

use crate::constants::{RESPAWN_SPEED_STEP, SCREEN_HEIGHT};
use crate::geometry::{random_lane_x, spawn_y, HitBox};
use crate::render::{CarModel, Renderer, Sprite};

/// Oncoming car. Scrolls down its lane and is recycled to the top once it
/// leaves the screen.
#[derive(Debug, Clone, PartialEq)]
pub struct Obstacle {
    pub x: f32,
    pub y: f32,
    pub speed: f32,
    pub model: CarModel,
}

impl Obstacle {
    pub const WIDTH: i32 = 80;
    pub const HEIGHT: i32 = 120;

    pub const COLLISION_OFFSET_X: f32 = 15.0;
    pub const COLLISION_OFFSET_Y: f32 = 20.0;

    pub fn new(x: f32, y: f32, speed: f32, model: CarModel) -> Self {
        Obstacle { x, y, speed, model }
    }

    /// Random lane above the screen, `base_speed` plus 0..=2 extra.
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R, base_speed: f32) -> Self {
        let x = random_lane_x(rng, Self::WIDTH);
        let y = spawn_y(rng, Self::HEIGHT);
        let speed = base_speed + rng.gen_range(0..3) as f32;
        Self::new(x, y, speed, CarModel::random(rng))
    }

    pub fn update<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.y += self.speed;
        if self.y > SCREEN_HEIGHT as f32 {
            self.respawn(rng);
        }
    }

    fn respawn<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.y = -Self::HEIGHT as f32;
        self.x = random_lane_x(rng, Self::WIDTH);
        self.speed += RESPAWN_SPEED_STEP;
        self.model = CarModel::random(rng);
        tracing::debug!(x = self.x, speed = self.speed, model = ?self.model, "obstacle respawned");
    }

    pub fn hit_box(&self) -> HitBox {
        HitBox::inset(
            self.x,
            self.y,
            Self::WIDTH as f32,
            Self::HEIGHT as f32,
            Self::COLLISION_OFFSET_X,
            Self::COLLISION_OFFSET_Y,
        )
    }

    pub fn check_collision(&self, player: &HitBox) -> bool {
        self.hit_box().overlaps(player)
    }

    pub fn draw<G: Renderer + ?Sized>(&self, renderer: &mut G) -> anyhow::Result<()> {
        renderer.draw_sprite(Sprite::Car(self.model), self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::lane_xs;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn spawns_in_a_lane_above_the_screen() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..50 {
            let obstacle = Obstacle::spawn(&mut rng, 3.0);
            assert!(lane_xs(Obstacle::WIDTH).contains(&obstacle.x));
            assert!(obstacle.y <= -120.0);
            assert!([3.0, 4.0, 5.0].contains(&obstacle.speed));
        }
    }

    #[test]
    fn respawns_after_leaving_the_screen() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut obstacle = Obstacle::new(160.0, 799.0, 3.0, CarModel::Compact);
        obstacle.update(&mut rng);

        assert_eq!(obstacle.y, -120.0);
        assert!(lane_xs(Obstacle::WIDTH).contains(&obstacle.x));
        assert!((obstacle.speed - 3.05).abs() < 1e-6);
    }

    #[test]
    fn stays_put_while_on_screen() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut obstacle = Obstacle::new(360.0, 797.0, 3.0, CarModel::Sedan);
        obstacle.update(&mut rng);
        // exactly on the edge is still on screen
        assert_eq!(obstacle.y, 800.0);
        assert_eq!(obstacle.x, 360.0);
        assert_eq!(obstacle.speed, 3.0);
    }

    #[test]
    fn collision_box_is_inset() {
        let obstacle = Obstacle::new(0.0, 0.0, 1.0, CarModel::Truck);
        assert_eq!(obstacle.hit_box(), HitBox::new(15.0, 20.0, 50.0, 80.0));

        let touching = HitBox::new(65.0, 20.0, 10.0, 10.0);
        assert!(!obstacle.check_collision(&touching));
        let overlapping = HitBox::new(64.0, 20.0, 10.0, 10.0);
        assert!(obstacle.check_collision(&overlapping));
    }
}
