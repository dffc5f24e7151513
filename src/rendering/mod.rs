pub mod hud;

pub use hud::{coin_progress_text, draw_game_over, draw_hud, HudView};
