// src/player.rs - the rider's bike: position, velocity and play-area clamp
use crate::constants::{LANE_MARGIN, SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::geometry::HitBox;

#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub x: f32,
    pub y: f32,
    pub velocity_x: f32,
    pub velocity_y: f32,
    pub frame_width: u32,
    pub frame_height: u32,
}

impl Player {
    pub const FRAME_WIDTH: u32 = 100;
    pub const FRAME_HEIGHT: u32 = 110;

    pub const COLLISION_OFFSET_X: f32 = 20.0;
    pub const COLLISION_OFFSET_Y: f32 = 30.0;

    pub fn new(x: f32, y: f32) -> Self {
        Player {
            x,
            y,
            velocity_x: 0.0,
            velocity_y: 0.0,
            frame_width: Self::FRAME_WIDTH,
            frame_height: Self::FRAME_HEIGHT,
        }
    }

    /// Bottom-centre of the road, 20px above the screen edge.
    pub fn at_start() -> Self {
        let x = (SCREEN_WIDTH / 2 - Self::FRAME_WIDTH / 2) as f32;
        let y = (SCREEN_HEIGHT - Self::FRAME_HEIGHT - 20) as f32;
        Self::new(x, y)
    }

    pub fn update(&mut self) {
        self.x += self.velocity_x;
        self.y += self.velocity_y;
        self.clamp();
    }

    pub fn clamp(&mut self) {
        let (min_x, max_x) = self.horizontal_bounds();
        let (min_y, max_y) = self.vertical_bounds();
        self.x = self.x.max(min_x).min(max_x);
        self.y = self.y.max(min_y).min(max_y);
    }

    pub fn horizontal_bounds(&self) -> (f32, f32) {
        (
            LANE_MARGIN,
            SCREEN_WIDTH as f32 - LANE_MARGIN - self.frame_width as f32,
        )
    }

    pub fn vertical_bounds(&self) -> (f32, f32) {
        (0.0, SCREEN_HEIGHT as f32 - self.frame_height as f32)
    }

    pub fn hit_box(&self) -> HitBox {
        HitBox::inset(
            self.x,
            self.y,
            self.frame_width as f32,
            self.frame_height as f32,
            Self::COLLISION_OFFSET_X,
            Self::COLLISION_OFFSET_Y,
        )
    }
}
