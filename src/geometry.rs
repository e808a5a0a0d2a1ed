//! Integer window-space rectangles and the containment test shared by every hit-test.

use eframe::egui::{pos2, vec2, Pos2, Rect};

/// Axis-aligned rectangle in window pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BlockRect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl BlockRect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// Inclusive on all four edges.
    pub fn contains(&self, px: i32, py: i32) -> bool {
        contains(px, py, self)
    }

    pub fn center(&self) -> (i32, i32) {
        (self.x + self.w / 2, self.y + self.h / 2)
    }

    pub fn with_position(self, x: i32, y: i32) -> Self {
        Self { x, y, ..self }
    }

    /// Converts to an egui rectangle placed relative to `origin`.
    pub fn to_screen(&self, origin: Pos2) -> Rect {
        Rect::from_min_size(
            origin + vec2(self.x as f32, self.y as f32),
            vec2(self.w as f32, self.h as f32),
        )
    }
}

/// Returns true when `(px, py)` lies within `rect`, edges included.
pub fn contains(px: i32, py: i32, rect: &BlockRect) -> bool {
    px >= rect.x && px <= rect.x + rect.w && py >= rect.y && py <= rect.y + rect.h
}

/// Converts a screen position into integer window pixels relative to `origin`.
pub fn window_point(pos: Pos2, origin: Pos2) -> (i32, i32) {
    let local = pos2(pos.x - origin.x, pos.y - origin.y);
    (local.x.floor() as i32, local.y.floor() as i32)
}
