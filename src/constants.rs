pub const SCREEN_WIDTH: u32 = 1000;
pub const SCREEN_HEIGHT: u32 = 800;
pub const FPS: u32 = 80;

// Lane layout: three corridors, 200px wide, starting 100px from the left edge
pub const LANE_COUNT: usize = 3;
pub const LANE_WIDTH: i32 = 200;
pub const FIRST_LANE_X: i32 = 100;
pub const LANE_POSITIONS: [i32; LANE_COUNT] = [
    FIRST_LANE_X,
    FIRST_LANE_X + LANE_WIDTH,
    FIRST_LANE_X + 2 * LANE_WIDTH,
];

// Player is kept inside this margin on both sides of the screen
pub const LANE_MARGIN: f32 = 100.0;

pub const INITIAL_OBSTACLE_COUNT: usize = 5;
pub const INITIAL_COIN_COUNT: usize = 3;

pub const BASE_SPEED: f32 = 3.0;
pub const SCROLL_SPEED: f32 = 2.0;
pub const COIN_SPEED: f32 = 2.0;
pub const RESPAWN_SPEED_STEP: f32 = 0.05;

pub const MAX_LEVEL: u32 = 3;
pub const COINS_FOR_LEVEL_UP: u32 = 12;
pub const LEVEL_SPEED_FACTOR: f32 = 1.25;
pub const COIN_SCORE: u32 = 100;
pub const LEVEL_BONUS: u32 = 500;

pub const PLAYER_SPEED: f32 = 5.0;

// 2.25 seconds at FPS
pub const LEVEL_UP_BANNER_TICKS: u32 = 180;
pub const GAME_OVER_SCREEN: std::time::Duration = std::time::Duration::from_secs(3);
