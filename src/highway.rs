// src/highway.rs - world state: traffic, coins, scrolling road, score and levels
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::constants::*;
use crate::entity::{Coin, Entity, Obstacle};
use crate::player::Player;
use crate::render::{Renderer, Sprite};

pub struct Highway<R: Rng = StdRng> {
    score: u32,
    coin_collected: u32,
    current_level: u32,
    is_game_over: bool,
    entities: Vec<Entity>,
    background_y: f32,
    base_speed: f32,
    scroll_speed: f32,
    rng: R,
}

impl Highway<StdRng> {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl Default for Highway<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> Highway<R> {
    /// Fresh level 1 road with the initial traffic and coins.
    pub fn with_rng(rng: R) -> Self {
        let mut highway = Self::empty(rng);
        highway.generate_obstacles();
        highway.spawn_coins();
        highway
    }

    /// Level 1 road with nothing on it.
    pub fn empty(rng: R) -> Self {
        Highway {
            score: 0,
            coin_collected: 0,
            current_level: 1,
            is_game_over: false,
            entities: Vec::new(),
            background_y: 0.0,
            base_speed: BASE_SPEED,
            scroll_speed: SCROLL_SPEED,
            rng,
        }
    }

    /// Resume from an earlier run's coin count and score, still at level 1.
    /// The level catches up on the next coin pickup.
    pub fn with_progress(mut self, coins: u32, score: u32) -> Self {
        self.coin_collected = self.coin_collected.max(coins);
        self.score = self.score.max(score);
        self
    }

    fn generate_obstacles(&mut self) {
        for _ in 0..INITIAL_OBSTACLE_COUNT {
            let obstacle = Obstacle::spawn(&mut self.rng, self.base_speed);
            self.entities.push(obstacle.into());
        }
    }

    fn spawn_coins(&mut self) {
        for _ in 0..INITIAL_COIN_COUNT {
            let coin = Coin::spawn(&mut self.rng);
            self.entities.push(coin.into());
        }
    }

    pub fn add(&mut self, entity: impl Into<Entity>) {
        self.entities.push(entity.into());
    }

    pub fn obstacles(&self) -> impl Iterator<Item = &Obstacle> {
        self.entities.iter().filter_map(|entity| match entity {
            Entity::Obstacle(obstacle) => Some(obstacle),
            Entity::Coin(_) => None,
        })
    }

    pub fn coins(&self) -> impl Iterator<Item = &Coin> {
        self.entities.iter().filter_map(|entity| match entity {
            Entity::Coin(coin) => Some(coin),
            Entity::Obstacle(_) => None,
        })
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.current_level
    }

    pub fn coins_collected(&self) -> u32 {
        self.coin_collected
    }

    pub fn is_game_over(&self) -> bool {
        self.is_game_over
    }

    pub fn base_speed(&self) -> f32 {
        self.base_speed
    }

    pub fn scroll_speed(&self) -> f32 {
        self.scroll_speed
    }

    pub fn background_offset(&self) -> f32 {
        self.background_y
    }

    /// Coins needed in total to leave the current level, `None` at the top level.
    pub fn coin_target(&self) -> Option<u32> {
        if self.current_level < MAX_LEVEL {
            Some(COINS_FOR_LEVEL_UP * self.current_level)
        } else {
            None
        }
    }

    pub fn update(&mut self) {
        self.background_y += self.scroll_speed;
        if self.background_y >= SCREEN_HEIGHT as f32 {
            self.background_y = 0.0;
        }

        for entity in &mut self.entities {
            entity.update(&mut self.rng);
        }

        self.score += 1;
    }

    pub fn check_collisions(&mut self, player: &Player) {
        let player_box = player.hit_box();

        let crashed = self.entities.iter().any(|entity| match entity {
            Entity::Obstacle(_) => entity.check_collision(&player_box),
            Entity::Coin(_) => false,
        });
        if crashed {
            self.is_game_over = true;
            tracing::info!(score = self.score, level = self.current_level, "crashed into traffic");
            return;
        }

        for index in 0..self.entities.len() {
            let picked_up = match &mut self.entities[index] {
                Entity::Coin(coin) if coin.check_collision(&player_box) => {
                    coin.collect();
                    true
                }
                _ => false,
            };

            if picked_up {
                self.coin_collected += 1;
                self.score += COIN_SCORE;
                tracing::debug!(coins = self.coin_collected, "coin collected");
                self.check_level_progress();
            }
        }
    }

    fn check_level_progress(&mut self) {
        if self.coin_collected >= COINS_FOR_LEVEL_UP * self.current_level
            && self.current_level < MAX_LEVEL
        {
            self.increase_level();
        }
    }

    fn increase_level(&mut self) {
        if self.current_level >= MAX_LEVEL {
            return;
        }
        self.current_level += 1;

        self.base_speed *= LEVEL_SPEED_FACTOR;
        self.scroll_speed *= LEVEL_SPEED_FACTOR;

        for entity in &mut self.entities {
            entity.scale_speed(LEVEL_SPEED_FACTOR);
        }

        self.score += LEVEL_BONUS * self.current_level;

        tracing::info!(
            level = self.current_level,
            base_speed = self.base_speed,
            scroll_speed = self.scroll_speed,
            "level up"
        );
    }

    /// Road, traffic, coins, then the bike on top.
    pub fn draw<G: Renderer + ?Sized>(&self, renderer: &mut G, player: &Player) -> anyhow::Result<()> {
        let height = SCREEN_HEIGHT as f32;
        renderer.draw_sprite(Sprite::Background, 0.0, self.background_y - height)?;
        renderer.draw_sprite(Sprite::Background, 0.0, self.background_y)?;

        for entity in &self.entities {
            if let Entity::Obstacle(_) = entity {
                entity.draw(renderer)?;
            }
        }
        for entity in &self.entities {
            if let Entity::Coin(_) = entity {
                entity.draw(renderer)?;
            }
        }

        renderer.draw_sprite(Sprite::Bike, player.x, player.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::lane_xs;

    #[test]
    fn starts_with_initial_traffic() {
        let highway = Highway::seeded(1);
        assert_eq!(highway.obstacles().count(), 5);
        assert_eq!(highway.coins().count(), 3);
        assert_eq!(highway.level(), 1);
        assert_eq!(highway.score(), 0);
        assert!(!highway.is_game_over());

        for obstacle in highway.obstacles() {
            assert!(lane_xs(Obstacle::WIDTH).contains(&obstacle.x));
            assert!(obstacle.y < 0.0);
            assert!(obstacle.speed >= BASE_SPEED && obstacle.speed <= BASE_SPEED + 2.0);
        }
        for coin in highway.coins() {
            assert!(lane_xs(Coin::WIDTH).contains(&coin.x()));
            assert!(coin.y() < 0.0);
        }
    }

    #[test]
    fn update_scores_survival() {
        let mut highway = Highway::seeded(2);
        for _ in 0..10 {
            highway.update();
        }
        assert_eq!(highway.score(), 10);
        assert_eq!(highway.background_offset(), 20.0);
    }

    #[test]
    fn level_never_exceeds_max() {
        let mut highway = Highway::empty(StdRng::seed_from_u64(0)).with_progress(10_000, 0);
        for _ in 0..10 {
            highway.check_level_progress();
        }
        assert_eq!(highway.level(), MAX_LEVEL);
        assert_eq!(highway.coin_target(), None);
    }

    #[test]
    fn increase_level_stops_at_max() {
        let mut highway = Highway::empty(StdRng::seed_from_u64(0));
        for _ in 0..5 {
            highway.increase_level();
        }
        assert_eq!(highway.level(), MAX_LEVEL);
        // only the two real level-ups pay a bonus
        assert_eq!(highway.score(), 500 * 2 + 500 * 3);
    }

    #[test]
    fn progress_never_moves_backwards() {
        let highway = Highway::empty(StdRng::seed_from_u64(0))
            .with_progress(5, 300)
            .with_progress(0, 0);
        assert_eq!(highway.coins_collected(), 5);
        assert_eq!(highway.score(), 300);
        assert_eq!(highway.level(), 1);
    }

    #[test]
    fn coin_target_is_cumulative() {
        let mut highway = Highway::empty(StdRng::seed_from_u64(0));
        assert_eq!(highway.coin_target(), Some(12));
        highway.increase_level();
        assert_eq!(highway.coin_target(), Some(24));
    }
}
