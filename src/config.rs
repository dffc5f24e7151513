use std::env;

use crate::constants::{FPS, LEVEL_UP_BANNER_TICKS};

pub const SEED_VAR: &str = "TRAFFIC_RIDER_SEED";
pub const FPS_VAR: &str = "TRAFFIC_RIDER_FPS";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetPaths {
    pub background: String,
    pub bike: String,
    pub cars: [String; 3],
    pub coin: String,
    pub font: String,
    pub music: String,
}

impl Default for AssetPaths {
    fn default() -> Self {
        Self {
            background: "assets/background.png".to_string(),
            bike: "assets/bike.png".to_string(),
            cars: [
                "assets/car1.png".to_string(),
                "assets/car2.png".to_string(),
                "assets/car3.png".to_string(),
            ],
            coin: "assets/coin.png".to_string(),
            font: "assets/fonts/font.ttf".to_string(),
            music: "assets/gamesound.mp3".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub title: String,
    pub tick_rate: u32,
    pub banner_ticks: u32,
    pub seed: Option<u64>,
    pub assets: AssetPaths,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            title: "Traffic Rider".to_string(),
            tick_rate: FPS,
            banner_ticks: LEVEL_UP_BANNER_TICKS,
            seed: None,
            assets: AssetPaths::default(),
        }
    }
}

impl GameConfig {
    /// Defaults with the seed and tick rate taken from the environment when set.
    pub fn from_env() -> Self {
        Self::default().with_overrides(env::var(SEED_VAR).ok(), env::var(FPS_VAR).ok())
    }

    pub fn with_overrides(mut self, seed: Option<String>, fps: Option<String>) -> Self {
        if let Some(raw) = seed {
            match raw.trim().parse::<u64>() {
                Ok(value) => self.seed = Some(value),
                Err(err) => tracing::warn!("ignoring {}={:?}: {}", SEED_VAR, raw, err),
            }
        }

        if let Some(raw) = fps {
            match raw.trim().parse::<u32>() {
                Ok(value) if value > 0 => self.tick_rate = value,
                Ok(_) => tracing::warn!("ignoring {}=0, keeping {}", FPS_VAR, self.tick_rate),
                Err(err) => tracing::warn!("ignoring {}={:?}: {}", FPS_VAR, raw, err),
            }
        }

        self
    }

    pub fn tick_interval(&self) -> std::time::Duration {
        std::time::Duration::from_secs_f64(1.0 / self.tick_rate.max(1) as f64)
    }
}
