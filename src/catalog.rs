//! The fixed palette of block categories available for dragging into the workspace.

use crate::block::BlockType;
use crate::constants::{CATALOG_BLOCK_HEIGHT, CATALOG_BLOCK_WIDTH, CATALOG_TOP};
use crate::geometry::BlockRect;
use eframe::egui::Color32;

const fn slot(row: i32) -> BlockRect {
    BlockRect::new(
        0,
        CATALOG_TOP + row * CATALOG_BLOCK_HEIGHT,
        CATALOG_BLOCK_WIDTH,
        CATALOG_BLOCK_HEIGHT,
    )
}

const STANDARD_TYPES: [BlockType; 8] = [
    BlockType::new("motion", Color32::from_rgb(70, 150, 255), slot(0)),
    BlockType::new("looks", Color32::from_rgb(150, 100, 255), slot(1)),
    BlockType::new("sound", Color32::from_rgb(210, 100, 210), slot(2)),
    BlockType::new("events", Color32::from_rgb(255, 210, 0), slot(3)),
    BlockType::new("control", Color32::from_rgb(255, 170, 25), slot(4)),
    BlockType::new("senses", Color32::from_rgb(90, 180, 210), slot(5)),
    BlockType::new("operators", Color32::from_rgb(90, 190, 90), slot(6)),
    BlockType::new("variables", Color32::from_rgb(255, 140, 25), slot(7)),
];

/// Read-only list of block types. Indices are stable for the whole session.
#[derive(Clone, Debug)]
pub struct Catalog {
    types: Vec<BlockType>,
}

impl Catalog {
    /// The eight built-in categories stacked down the left edge.
    pub fn standard() -> Self {
        Self {
            types: STANDARD_TYPES.to_vec(),
        }
    }

    pub fn types(&self) -> &[BlockType] {
        &self.types
    }

    pub fn get(&self, index: usize) -> Option<&BlockType> {
        self.types.get(index)
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Index of the first entry whose origin contains the point, in catalog order.
    pub fn hit_test(&self, px: i32, py: i32) -> Option<usize> {
        self.types.iter().position(|t| t.origin.contains(px, py))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn standard_catalog_has_distinct_entries() {
        let catalog = Catalog::standard();
        assert_eq!(catalog.len(), 8);

        let labels: HashSet<_> = catalog.types().iter().map(|t| t.label).collect();
        let colors: HashSet<_> = catalog.types().iter().map(|t| t.color).collect();
        assert_eq!(labels.len(), 8);
        assert_eq!(colors.len(), 8);
    }

    #[test]
    fn origins_are_stacked_without_overlap() {
        let catalog = Catalog::standard();
        for pair in catalog.types().windows(2) {
            assert_eq!(pair[0].origin.y + pair[0].origin.h, pair[1].origin.y);
            assert_eq!(pair[0].origin.x, pair[1].origin.x);
        }
        assert_eq!(catalog.get(0).map(|t| t.origin), Some(BlockRect::new(0, 50, 80, 50)));
    }

    #[test]
    fn hit_test_prefers_earlier_entry_on_shared_edge() {
        let catalog = Catalog::standard();
        assert_eq!(catalog.hit_test(40, 75), Some(0));
        assert_eq!(catalog.hit_test(40, 100), Some(0));
        assert_eq!(catalog.hit_test(40, 101), Some(1));
        assert_eq!(catalog.hit_test(40, 449), Some(7));
        assert_eq!(catalog.hit_test(81, 75), None);
        assert_eq!(catalog.hit_test(40, 20), None);
    }
}
