use rand::Rng;

use crate::constants::{COIN_SPEED, SCREEN_HEIGHT};
use crate::geometry::{random_lane_x, spawn_y, HitBox};
use crate::render::{Renderer, Sprite};

#[derive(Debug, Clone, PartialEq)]
pub struct Coin {
    x: f32,
    y: f32,
    speed: f32,
    collected: bool,
}

impl Coin {
    pub const WIDTH: i32 = 20;
    pub const HEIGHT: i32 = 20;
    pub const COLLISION_PADDING: f32 = 5.0;

    pub fn new(x: f32, y: f32) -> Self {
        Coin {
            x,
            y,
            speed: COIN_SPEED,
            collected: false,
        }
    }

    pub fn spawn<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let x = random_lane_x(rng, Self::WIDTH);
        let y = spawn_y(rng, Self::HEIGHT);
        Self::new(x, y)
    }

    pub fn x(&self) -> f32 {
        self.x
    }

    pub fn y(&self) -> f32 {
        self.y
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn set_speed(&mut self, speed: f32) {
        self.speed = speed;
    }

    pub fn is_collected(&self) -> bool {
        self.collected
    }

    pub fn collect(&mut self) {
        self.collected = true;
    }

    pub fn update<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.y += self.speed;
        if self.y > SCREEN_HEIGHT as f32 {
            self.y = -Self::HEIGHT as f32;
            self.x = random_lane_x(rng, Self::WIDTH);
            self.collected = false;
        }
    }

    pub fn hit_box(&self) -> HitBox {
        HitBox::inset(
            self.x,
            self.y,
            Self::WIDTH as f32,
            Self::HEIGHT as f32,
            Self::COLLISION_PADDING,
            Self::COLLISION_PADDING,
        )
    }

    pub fn check_collision(&self, player: &HitBox) -> bool {
        !self.collected && self.hit_box().overlaps(player)
    }

    pub fn draw<G: Renderer + ?Sized>(&self, renderer: &mut G) -> anyhow::Result<()> {
        if self.collected {
            return Ok(());
        }
        renderer.draw_sprite(Sprite::Coin, self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::lane_xs;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn collect_is_one_way() {
        let mut coin = Coin::new(190.0, 0.0);
        assert!(!coin.is_collected());
        coin.collect();
        coin.collect();
        assert!(coin.is_collected());
    }

    #[test]
    fn collected_coin_never_collides() {
        let mut coin = Coin::new(0.0, 0.0);
        let player = HitBox::new(0.0, 0.0, 100.0, 100.0);
        assert!(coin.check_collision(&player));
        coin.collect();
        assert!(!coin.check_collision(&player));
    }

    #[test]
    fn padding_edge_is_exclusive() {
        let coin = Coin::new(0.0, 0.0);
        assert_eq!(coin.hit_box(), HitBox::new(5.0, 5.0, 10.0, 10.0));
        assert!(!coin.check_collision(&HitBox::new(15.0, 5.0, 10.0, 10.0)));
        assert!(coin.check_collision(&HitBox::new(14.9, 5.0, 10.0, 10.0)));
    }

    #[test]
    fn respawn_resets_collected_flag() {
        let mut rng = StdRng::seed_from_u64(9);
        let mut coin = Coin::new(390.0, 799.5);
        coin.set_speed(2.5);
        coin.collect();
        coin.update(&mut rng);

        assert_eq!(coin.y(), -20.0);
        assert!(!coin.is_collected());
        assert!(lane_xs(Coin::WIDTH).contains(&coin.x()));
        assert_eq!(coin.speed(), 2.5);
    }
}
