use crate::geometry::BlockRect;
use eframe::egui::Color32;

/// Immutable template in the catalog that placed blocks are copied from.
#[derive(Clone, Debug, PartialEq)]
pub struct BlockType {
    pub color: Color32,
    /// Where the template sits in the palette. New blocks start here and copy its size.
    pub origin: BlockRect,
    pub label: &'static str,
}

impl BlockType {
    pub const fn new(label: &'static str, color: Color32, origin: BlockRect) -> Self {
        Self {
            color,
            origin,
            label,
        }
    }
}

/// A block the user has placed. `type_index` points back into the catalog.
#[derive(Clone, Debug, PartialEq)]
pub struct BlockInstance {
    pub type_index: usize,
    pub rect: BlockRect,
    pub last_valid_x: i32,
    pub last_valid_y: i32,
    pub is_dragging: bool,
    /// Pointer position minus rectangle position, captured when the drag started.
    pub drag_offset: (i32, i32),
}

impl BlockInstance {
    /// Creates a block at the template's palette position.
    pub fn from_type(type_index: usize, block_type: &BlockType) -> Self {
        Self::placed(type_index, block_type.origin)
    }

    /// Creates an idle block at `rect`, treating that position as the last valid one.
    pub fn placed(type_index: usize, rect: BlockRect) -> Self {
        Self {
            type_index,
            rect,
            last_valid_x: rect.x,
            last_valid_y: rect.y,
            is_dragging: false,
            drag_offset: (0, 0),
        }
    }

    pub fn begin_drag(&mut self, px: i32, py: i32) {
        self.is_dragging = true;
        self.drag_offset = (px - self.rect.x, py - self.rect.y);
    }

    /// Moves the block so the grab point follows the pointer. Size never changes.
    pub fn drag_to(&mut self, px: i32, py: i32) {
        self.rect.x = px - self.drag_offset.0;
        self.rect.y = py - self.drag_offset.1;
    }

    pub fn end_drag(&mut self) {
        self.is_dragging = false;
    }

    /// Records the current position as the last valid workspace placement.
    pub fn commit_position(&mut self) {
        self.last_valid_x = self.rect.x;
        self.last_valid_y = self.rect.y;
    }

    pub fn snap_back(&mut self) {
        self.rect = self.rect.with_position(self.last_valid_x, self.last_valid_y);
    }

    pub fn center(&self) -> (i32, i32) {
        self.rect.center()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn motion() -> BlockType {
        BlockType::new(
            "motion",
            Color32::from_rgb(70, 150, 255),
            BlockRect::new(0, 50, 80, 50),
        )
    }

    #[test]
    fn from_type_copies_origin_and_starts_idle() {
        let block = BlockInstance::from_type(0, &motion());
        assert_eq!(block.rect, BlockRect::new(0, 50, 80, 50));
        assert_eq!((block.last_valid_x, block.last_valid_y), (0, 50));
        assert!(!block.is_dragging);
    }

    #[test]
    fn drag_keeps_grab_offset_and_size() {
        let mut block = BlockInstance::from_type(0, &motion());
        block.begin_drag(10, 60);
        assert_eq!(block.drag_offset, (10, 10));

        block.drag_to(310, 210);
        assert_eq!(block.rect, BlockRect::new(300, 200, 80, 50));
        assert_eq!((block.last_valid_x, block.last_valid_y), (0, 50));
    }

    #[test]
    fn snap_back_returns_to_committed_position() {
        let mut block = BlockInstance::placed(2, BlockRect::new(300, 200, 80, 50));
        block.begin_drag(300, 200);
        block.drag_to(800, 300);
        block.end_drag();
        block.snap_back();
        assert_eq!(block.rect, BlockRect::new(300, 200, 80, 50));

        block.begin_drag(300, 200);
        block.drag_to(400, 250);
        block.end_drag();
        block.commit_position();
        assert_eq!((block.last_valid_x, block.last_valid_y), (400, 250));
    }
}
