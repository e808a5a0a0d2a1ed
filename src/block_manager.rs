//! Ordered store of placed blocks.
//!
//! The order of the sequence is both the draw order and the interaction priority:
//! the last element is drawn on top, is hit first, and is the only block that can
//! be dragged.

use crate::block::BlockInstance;

/// Manages the placed blocks in z-order (back to front).
#[derive(Debug, Default)]
pub struct BlockManager {
    blocks: Vec<BlockInstance>,
}

impl BlockManager {
    /// Creates a new empty BlockManager.
    pub fn new() -> Self {
        Self { blocks: Vec::new() }
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Block Collection Access
    // ─────────────────────────────────────────────────────────────────────────────

    /// Returns all blocks, back to front.
    pub fn blocks(&self) -> &[BlockInstance] {
        &self.blocks
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// The frontmost block, which is also the only drag candidate.
    pub fn topmost(&self) -> Option<&BlockInstance> {
        self.blocks.last()
    }

    pub fn topmost_mut(&mut self) -> Option<&mut BlockInstance> {
        self.blocks.last_mut()
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Block CRUD Operations
    // ─────────────────────────────────────────────────────────────────────────────

    /// Appends a block on top of all others and returns it.
    pub fn push(&mut self, block: BlockInstance) -> &mut BlockInstance {
        self.blocks.push(block);
        let last = self.blocks.len() - 1;
        &mut self.blocks[last]
    }

    /// Removes and returns the frontmost block.
    pub fn pop_topmost(&mut self) -> Option<BlockInstance> {
        self.blocks.pop()
    }

    pub fn clear(&mut self) {
        self.blocks.clear();
    }

    /// Replaces the whole sequence, e.g. after loading a project.
    pub fn replace(&mut self, blocks: Vec<BlockInstance>) {
        self.blocks = blocks;
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Hit Testing and Z-Order
    // ─────────────────────────────────────────────────────────────────────────────

    /// Index of the frontmost block containing the point.
    pub fn hit_test(&self, px: i32, py: i32) -> Option<usize> {
        self.blocks.iter().rposition(|b| b.rect.contains(px, py))
    }

    /// Moves the block at `index` to the front and returns it.
    pub fn bring_to_front(&mut self, index: usize) -> Option<&mut BlockInstance> {
        if index >= self.blocks.len() {
            return None;
        }
        let block = self.blocks.remove(index);
        Some(self.push(block))
    }

    /// Returns true if the frontmost block is being dragged.
    pub fn is_dragging(&self) -> bool {
        self.topmost().is_some_and(|b| b.is_dragging)
    }
}
