// src/render.rs - drawing and audio seams between the simulation and the frontend
use rand::Rng;

use crate::constants::{SCREEN_HEIGHT, SCREEN_WIDTH};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Color { r, g, b, a }
    }

    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const GREEN: Color = Color::rgb(0, 255, 0);
    pub const YELLOW: Color = Color::rgb(255, 255, 0);
    pub const GOLD: Color = Color::rgb(255, 215, 0);
    pub const DARK_GOLD: Color = Color::rgb(200, 170, 0);
    pub const LIGHT_GRAY: Color = Color::rgb(200, 200, 200);
    pub const ROAD_BLUE: Color = Color::rgb(50, 50, 150);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CarModel {
    Compact,
    Sedan,
    Truck,
}

impl CarModel {
    pub const ALL: [CarModel; 3] = [CarModel::Compact, CarModel::Sedan, CarModel::Truck];

    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }

    pub fn index(self) -> usize {
        match self {
            CarModel::Compact => 0,
            CarModel::Sedan => 1,
            CarModel::Truck => 2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sprite {
    Background,
    Bike,
    Car(CarModel),
    Coin,
}

impl Sprite {
    pub const ALL: [Sprite; 6] = [
        Sprite::Background,
        Sprite::Bike,
        Sprite::Car(CarModel::Compact),
        Sprite::Car(CarModel::Sedan),
        Sprite::Car(CarModel::Truck),
        Sprite::Coin,
    ];

    /// On-screen size the image is scaled to.
    pub fn size(self) -> (u32, u32) {
        match self {
            Sprite::Background => (SCREEN_WIDTH, SCREEN_HEIGHT),
            Sprite::Bike => (100, 110),
            Sprite::Car(_) => (80, 120),
            Sprite::Coin => (20, 20),
        }
    }

    /// Fill used when the image cannot be loaded.
    pub fn placeholder_color(self) -> Color {
        match self {
            Sprite::Background => Color::ROAD_BLUE,
            Sprite::Bike => Color::GREEN,
            Sprite::Car(_) => Color::RED,
            Sprite::Coin => Color::GOLD,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
    Right,
}

pub trait Renderer {
    fn clear(&mut self, color: Color) -> anyhow::Result<()>;
    fn draw_sprite(&mut self, sprite: Sprite, x: f32, y: f32) -> anyhow::Result<()>;
    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Color) -> anyhow::Result<()>;
    fn draw_text(&mut self, text: &str, x: f32, y: f32, color: Color, align: Align) -> anyhow::Result<()>;
    fn present(&mut self);
}

/// Looped background music. Calls never fail; a missing track makes them no-ops.
pub trait Audio {
    fn play_looped(&mut self);
    fn stop(&mut self);
    fn is_playing(&self) -> bool;
}

/// Audio that does nothing, used when no device or track is available.
#[derive(Debug, Default)]
pub struct Silence;

impl Audio for Silence {
    fn play_looped(&mut self) {
        tracing::trace!("audio disabled, not playing");
    }

    fn stop(&mut self) {}

    fn is_playing(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn every_car_model_is_reachable() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut seen = [false; 3];
        for _ in 0..100 {
            seen[CarModel::random(&mut rng).index()] = true;
        }
        assert_eq!(seen, [true; 3]);
    }

    #[test]
    fn placeholders_match_original_palette() {
        assert_eq!(Sprite::Car(CarModel::Truck).placeholder_color(), Color::RED);
        assert_eq!(Sprite::Bike.size(), (100, 110));
        assert_eq!(Sprite::Background.size(), (1000, 800));
    }

    #[test]
    fn silence_never_plays() {
        let mut audio = Silence;
        audio.play_looped();
        assert!(!audio.is_playing());
    }
}
