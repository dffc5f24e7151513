pub mod coin;
pub mod obstacle;

pub use coin::Coin;
pub use obstacle::Obstacle;

use rand::Rng;

use crate::geometry::HitBox;
use crate::render::Renderer;

/// Everything on the highway that scrolls, draws and can touch the player.
#[derive(Debug, Clone, PartialEq)]
pub enum Entity {
    Obstacle(Obstacle),
    Coin(Coin),
}

impl Entity {
    pub fn update<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        match self {
            Entity::Obstacle(obstacle) => obstacle.update(rng),
            Entity::Coin(coin) => coin.update(rng),
        }
    }

    pub fn draw<G: Renderer + ?Sized>(&self, renderer: &mut G) -> anyhow::Result<()> {
        match self {
            Entity::Obstacle(obstacle) => obstacle.draw(renderer),
            Entity::Coin(coin) => coin.draw(renderer),
        }
    }

    pub fn check_collision(&self, player: &HitBox) -> bool {
        match self {
            Entity::Obstacle(obstacle) => obstacle.check_collision(player),
            Entity::Coin(coin) => coin.check_collision(player),
        }
    }

    pub fn scale_speed(&mut self, factor: f32) {
        match self {
            Entity::Obstacle(obstacle) => obstacle.speed *= factor,
            Entity::Coin(coin) => coin.set_speed(coin.speed() * factor),
        }
    }
}

impl From<Obstacle> for Entity {
    fn from(obstacle: Obstacle) -> Self {
        Entity::Obstacle(obstacle)
    }
}

impl From<Coin> for Entity {
    fn from(coin: Coin) -> Self {
        Entity::Coin(coin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::CarModel;

    #[test]
    fn scaling_reaches_both_variants() {
        let mut car: Entity = Obstacle::new(160.0, 0.0, 4.0, CarModel::Sedan).into();
        let mut coin: Entity = Coin::new(190.0, 0.0).into();
        car.scale_speed(1.25);
        coin.scale_speed(1.25);
        match (car, coin) {
            (Entity::Obstacle(car), Entity::Coin(coin)) => {
                assert_eq!(car.speed, 5.0);
                assert_eq!(coin.speed(), 2.5);
            }
            other => panic!("variants changed: {:?}", other),
        }
    }

    #[test]
    fn collision_dispatches_to_variant() {
        let player = HitBox::new(150.0, 0.0, 100.0, 100.0);
        let car: Entity = Obstacle::new(160.0, 0.0, 4.0, CarModel::Sedan).into();
        let mut coin = Coin::new(190.0, 10.0);
        assert!(car.check_collision(&player));
        assert!(Entity::from(coin.clone()).check_collision(&player));
        coin.collect();
        assert!(!Entity::from(coin).check_collision(&player));
    }
}
