use std::collections::HashMap;

use anyhow::{anyhow, Result};
use sdl2::image::LoadTexture;
use sdl2::pixels::{Color as SdlColor, PixelFormatEnum};
use sdl2::rect::Rect;
use sdl2::render::{BlendMode, Canvas, Texture, TextureCreator};
use sdl2::surface::Surface;
use sdl2::ttf::{Font, Sdl2TtfContext};
use sdl2::video::{Window, WindowContext};

use crate::config::AssetPaths;
use crate::constants::{FIRST_LANE_X, LANE_COUNT, LANE_WIDTH};
use crate::render::{Align, Color, Renderer, Sprite};

const FONT_SIZE: u16 = 16;

struct SpriteTexture<'a> {
    texture: Texture<'a>,
    // Destination offset and size inside the sprite frame
    dest: Rect,
}

pub struct SdlRenderer<'a> {
    canvas: Canvas<Window>,
    texture_creator: &'a TextureCreator<WindowContext>,
    sprites: HashMap<Sprite, SpriteTexture<'a>>,
    font: Option<Font<'a, 'static>>,
}

impl<'a> SdlRenderer<'a> {
    pub fn new(
        mut canvas: Canvas<Window>,
        texture_creator: &'a TextureCreator<WindowContext>,
        ttf: &'a Sdl2TtfContext,
        assets: &AssetPaths,
    ) -> Result<Self> {
        canvas.set_blend_mode(BlendMode::Blend);

        let mut sprites = HashMap::new();
        for sprite in Sprite::ALL {
            let texture = Self::load_sprite(texture_creator, sprite, sprite_path(assets, sprite))?;
            sprites.insert(sprite, texture);
        }

        let font = match ttf.load_font(&assets.font, FONT_SIZE) {
            Ok(font) => Some(font),
            Err(e) => {
                tracing::warn!("failed to load font {}: {}, HUD text disabled", assets.font, e);
                None
            }
        };

        Ok(SdlRenderer {
            canvas,
            texture_creator,
            sprites,
            font,
        })
    }

    fn load_sprite(
        texture_creator: &'a TextureCreator<WindowContext>,
        sprite: Sprite,
        path: &str,
    ) -> Result<SpriteTexture<'a>> {
        let (width, height) = sprite.size();

        match texture_creator.load_texture(path) {
            Ok(texture) => {
                let query = texture.query();
                let dest = match sprite {
                    // The bike keeps its aspect ratio inside its frame
                    Sprite::Bike => fit_rect(query.width, query.height, width, height),
                    _ => Rect::new(0, 0, width, height),
                };
                Ok(SpriteTexture { texture, dest })
            }
            Err(e) => {
                tracing::warn!("failed to load {:?} image {}: {}, using fallback", sprite, path, e);
                let surface = placeholder_surface(sprite)?;
                let mut texture = texture_creator
                    .create_texture_from_surface(&surface)
                    .map_err(|e| anyhow!(e.to_string()))?;
                texture.set_blend_mode(BlendMode::Blend);
                Ok(SpriteTexture {
                    texture,
                    dest: Rect::new(0, 0, width, height),
                })
            }
        }
    }
}

impl<'a> Renderer for SdlRenderer<'a> {
    fn clear(&mut self, color: Color) -> Result<()> {
        self.canvas.set_draw_color(sdl_color(color));
        self.canvas.clear();
        Ok(())
    }

    fn draw_sprite(&mut self, sprite: Sprite, x: f32, y: f32) -> Result<()> {
        let Some(entry) = self.sprites.get(&sprite) else {
            return Ok(());
        };
        let dest = Rect::new(
            x as i32 + entry.dest.x(),
            y as i32 + entry.dest.y(),
            entry.dest.width(),
            entry.dest.height(),
        );
        self.canvas.copy(&entry.texture, None, dest).map_err(|e| anyhow!(e))
    }

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Color) -> Result<()> {
        self.canvas.set_draw_color(sdl_color(color));
        self.canvas
            .fill_rect(Rect::new(x as i32, y as i32, width as u32, height as u32))
            .map_err(|e| anyhow!(e))
    }

    fn draw_text(&mut self, text: &str, x: f32, y: f32, color: Color, align: Align) -> Result<()> {
        let Some(font) = &self.font else {
            return Ok(());
        };

        let surface = font.render(text).blended(sdl_color(color))?;
        let texture = self
            .texture_creator
            .create_texture_from_surface(&surface)
            .map_err(|e| anyhow!(e.to_string()))?;

        let (width, height) = (surface.width(), surface.height());
        let left = match align {
            Align::Left => x,
            Align::Center => x - width as f32 / 2.0,
            Align::Right => x - width as f32,
        };

        self.canvas
            .copy(&texture, None, Rect::new(left as i32, y as i32, width, height))
            .map_err(|e| anyhow!(e))
    }

    fn present(&mut self) {
        self.canvas.present();
    }
}

fn sprite_path(assets: &AssetPaths, sprite: Sprite) -> &str {
    match sprite {
        Sprite::Background => &assets.background,
        Sprite::Bike => &assets.bike,
        Sprite::Car(model) => &assets.cars[model.index()],
        Sprite::Coin => &assets.coin,
    }
}

fn sdl_color(color: Color) -> SdlColor {
    SdlColor::RGBA(color.r, color.g, color.b, color.a)
}

// Largest rect with the source aspect ratio that fits the frame, centred
fn fit_rect(src_width: u32, src_height: u32, width: u32, height: u32) -> Rect {
    if src_width == 0 || src_height == 0 {
        return Rect::new(0, 0, width, height);
    }
    let scale = (width as f32 / src_width as f32).min(height as f32 / src_height as f32);
    let scaled_width = ((src_width as f32 * scale) as u32).max(1);
    let scaled_height = ((src_height as f32 * scale) as u32).max(1);
    Rect::new(
        ((width - scaled_width) / 2) as i32,
        ((height - scaled_height) / 2) as i32,
        scaled_width,
        scaled_height,
    )
}

fn placeholder_surface(sprite: Sprite) -> Result<Surface<'static>> {
    let (width, height) = sprite.size();
    let mut surface =
        Surface::new(width, height, PixelFormatEnum::RGBA8888).map_err(|e| anyhow!(e))?;
    let fill = sdl_color(sprite.placeholder_color());

    match sprite {
        Sprite::Background => {
            surface.fill_rect(None, fill).map_err(|e| anyhow!(e))?;
            for lane in 0..=LANE_COUNT as i32 {
                let x = FIRST_LANE_X + lane * LANE_WIDTH;
                surface
                    .fill_rect(Rect::new(x - 1, 0, 2, height), sdl_color(Color::WHITE))
                    .map_err(|e| anyhow!(e))?;
            }
        }
        Sprite::Coin => {
            surface
                .fill_rect(None, SdlColor::RGBA(0, 0, 0, 0))
                .map_err(|e| anyhow!(e))?;
            let radius = (width / 2) as i32 - 2;
            fill_disc(&mut surface, radius, sdl_color(Color::DARK_GOLD))?;
            fill_disc(&mut surface, radius - 1, fill)?;
        }
        Sprite::Bike | Sprite::Car(_) => {
            surface.fill_rect(None, fill).map_err(|e| anyhow!(e))?;
        }
    }

    Ok(surface)
}

// Filled circle centred in the surface, one scanline at a time
fn fill_disc(surface: &mut Surface, radius: i32, color: SdlColor) -> Result<()> {
    let center_x = surface.width() as i32 / 2;
    let center_y = surface.height() as i32 / 2;
    for dy in -radius..=radius {
        let half = ((radius * radius - dy * dy) as f32).sqrt() as i32;
        if half == 0 {
            continue;
        }
        surface
            .fill_rect(Rect::new(center_x - half, center_y + dy, (half * 2) as u32, 1), color)
            .map_err(|e| anyhow!(e))?;
    }
    Ok(())
}
