//! Centralized constants for window layout, panel regions, and colors.
//!
//! All rectangles are in window pixels with the origin at the top-left corner
//! of the window. The layout is fixed; the window is not resizable.

use crate::geometry::BlockRect;
use eframe::egui::Color32;
use std::time::Duration;

// =============================================================================
// WINDOW
// =============================================================================

/// Title shown in the window decoration.
pub const APP_TITLE: &str = "Block Stage";

pub const WINDOW_WIDTH: i32 = 1000;
pub const WINDOW_HEIGHT: i32 = 600;

/// Delay between repaints while idle.
pub const FRAME_DELAY: Duration = Duration::from_millis(16);

// =============================================================================
// REGIONS
// =============================================================================

/// Height of the top menu strip. Presses above this line never reach the blocks.
pub const MENU_HEIGHT: i32 = 48;

/// Palette panel behind the catalog.
pub const PALETTE_PANEL: BlockRect = BlockRect::new(80, 50, 200, 550);

/// Drops whose center lands here are kept.
pub const WORKSPACE: BlockRect = BlockRect::new(280, 50, 470, 550);

/// Drops whose center lands here snap back to their last workspace position.
pub const STAGE_PANEL: BlockRect = BlockRect::new(710, 50, 290, 550);

/// X coordinates of the vertical panel dividers.
pub const DIVIDER_XS: [i32; 2] = [280, 710];

/// Top of the panel dividers.
pub const DIVIDER_TOP: i32 = 50;

/// Size of every catalog entry, and so of every placed block.
pub const CATALOG_BLOCK_WIDTH: i32 = 80;
pub const CATALOG_BLOCK_HEIGHT: i32 = 50;

/// Top of the first catalog entry; entries stack downward from here.
pub const CATALOG_TOP: i32 = 50;

// =============================================================================
// MENU
// =============================================================================

/// The "File" toggle in the menu strip.
pub const FILE_BUTTON: BlockRect = BlockRect::new(10, 8, 60, 30);

pub const MENU_ITEM_WIDTH: i32 = 120;
pub const MENU_ITEM_HEIGHT: i32 = 28;

pub const MENU_ITEM_NEW: BlockRect =
    BlockRect::new(10, MENU_HEIGHT, MENU_ITEM_WIDTH, MENU_ITEM_HEIGHT);
pub const MENU_ITEM_SAVE: BlockRect = BlockRect::new(
    10,
    MENU_HEIGHT + MENU_ITEM_HEIGHT,
    MENU_ITEM_WIDTH,
    MENU_ITEM_HEIGHT,
);
pub const MENU_ITEM_LOAD: BlockRect = BlockRect::new(
    10,
    MENU_HEIGHT + MENU_ITEM_HEIGHT * 2,
    MENU_ITEM_WIDTH,
    MENU_ITEM_HEIGHT,
);

/// Horizontal padding for left-aligned menu labels.
pub const MENU_TEXT_PADDING: f32 = 10.0;

/// Where the logo is drawn. It deliberately overhangs the window edge.
pub const LOGO_RECT: BlockRect = BlockRect::new(-20, -35, 120, 120);

// =============================================================================
// DECORATION
// =============================================================================

pub const SPRITE_CENTER: (i32, i32) = (845, 315);
pub const SPRITE_RADIUS: f32 = 20.0;

// =============================================================================
// TEXT
// =============================================================================

/// Font size for block and menu labels.
pub const LABEL_FONT_SIZE: f32 = 18.0;

pub const DIVIDER_WIDTH: f32 = 1.0;

// =============================================================================
// COLORS
// =============================================================================

pub const COLOR_BACKGROUND: Color32 = Color32::from_rgb(220, 220, 220);

/// Menu strip fill. Slightly translucent, so the background shows through.
pub const COLOR_MENU_STRIP: Color32 = Color32::from_rgba_premultiplied(125, 55, 129, 200);

pub const COLOR_FILE_BUTTON: Color32 = Color32::from_rgb(120, 50, 130);
pub const COLOR_MENU_ITEM: Color32 = Color32::from_rgb(90, 90, 90);

pub const COLOR_PALETTE_PANEL: Color32 = Color32::from_rgb(255, 255, 255);
pub const COLOR_WORKSPACE: Color32 = Color32::from_rgb(248, 249, 255);
pub const COLOR_STAGE_PANEL: Color32 = Color32::from_rgb(240, 244, 255);

pub const COLOR_DIVIDER: Color32 = Color32::BLACK;
pub const COLOR_SPRITE: Color32 = Color32::from_rgb(255, 159, 28);
pub const COLOR_TEXT: Color32 = Color32::WHITE;
