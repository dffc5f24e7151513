use crate::constants::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::game::SessionOutcome;
use crate::render::{Align, Color, Renderer};

/// Snapshot of what the overlay shows for one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HudView {
    pub score: u32,
    pub level: u32,
    pub coins: u32,
    pub coin_target: Option<u32>,
    pub banner_level: Option<u32>,
    pub paused: bool,
}

pub fn coin_progress_text(coins: u32, target: Option<u32>) -> String {
    match target {
        Some(target) => format!("Coins: {}/{}", coins, target),
        None => format!("Coins: {}", coins),
    }
}

pub fn draw_hud<G: Renderer + ?Sized>(renderer: &mut G, view: &HudView) -> anyhow::Result<()> {
    let center_x = SCREEN_WIDTH as f32 / 2.0;
    let center_y = SCREEN_HEIGHT as f32 / 2.0;

    renderer.draw_text(&format!("Score: {}", view.score), 10.0, 10.0, Color::WHITE, Align::Left)?;
    renderer.draw_text(&format!("Level: {}", view.level), 10.0, 30.0, Color::WHITE, Align::Left)?;
    renderer.draw_text(
        &coin_progress_text(view.coins, view.coin_target),
        10.0,
        50.0,
        Color::GOLD,
        Align::Left,
    )?;

    renderer.draw_text(
        "M - Toggle Music",
        SCREEN_WIDTH as f32 - 10.0,
        10.0,
        Color::LIGHT_GRAY,
        Align::Right,
    )?;

    if let Some(level) = view.banner_level {
        renderer.fill_rect(center_x - 120.0, center_y - 30.0, 240.0, 60.0, Color::rgba(0, 0, 0, 200))?;
        renderer.draw_text("LEVEL UP!", center_x, center_y - 10.0, Color::YELLOW, Align::Center)?;
        renderer.draw_text(&format!("Level {}", level), center_x, center_y + 10.0, Color::WHITE, Align::Center)?;
    }

    if view.paused {
        renderer.draw_text(
            "PAUSED - Press P to continue",
            center_x,
            center_y,
            Color::YELLOW,
            Align::Center,
        )?;
    }

    Ok(())
}

pub fn draw_game_over<G: Renderer + ?Sized>(renderer: &mut G, outcome: &SessionOutcome) -> anyhow::Result<()> {
    let center_x = SCREEN_WIDTH as f32 / 2.0;
    let center_y = SCREEN_HEIGHT as f32 / 2.0;

    renderer.clear(Color::BLACK)?;
    renderer.draw_text("GAME OVER", center_x, center_y - 50.0, Color::RED, Align::Center)?;
    renderer.draw_text(
        &format!("Final Score: {}", outcome.score),
        center_x,
        center_y - 20.0,
        Color::WHITE,
        Align::Center,
    )?;
    renderer.draw_text(
        &format!("Level Reached: {}", outcome.level),
        center_x,
        center_y + 10.0,
        Color::WHITE,
        Align::Center,
    )?;
    renderer.draw_text(
        &format!("Coins Collected: {}", outcome.coins),
        center_x,
        center_y + 40.0,
        Color::GOLD,
        Align::Center,
    )?;
    renderer.present();

    Ok(())
}
