/// Axis-aligned box in screen space, y growing downwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitBox {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl HitBox {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        HitBox { x, y, width, height }
    }

    /// Box for a sprite at (x, y) with `inset_x`/`inset_y` removed from every edge.
    pub fn inset(x: f32, y: f32, width: f32, height: f32, inset_x: f32, inset_y: f32) -> Self {
        HitBox {
            x: x + inset_x,
            y: y + inset_y,
            width: width - 2.0 * inset_x,
            height: height - 2.0 * inset_y,
        }
    }

    pub fn left(&self) -> f32 {
        self.x
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn top(&self) -> f32 {
        self.y
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    // Strict: boxes that only share an edge do not overlap
    pub fn overlaps(&self, other: &HitBox) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }
}
