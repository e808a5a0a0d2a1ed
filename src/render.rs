//! Per-frame drawing. Holds no state; everything is derived from the editor state.

use crate::constants::{
    COLOR_BACKGROUND, COLOR_DIVIDER, COLOR_FILE_BUTTON, COLOR_MENU_ITEM, COLOR_MENU_STRIP,
    COLOR_PALETTE_PANEL, COLOR_SPRITE, COLOR_STAGE_PANEL, COLOR_TEXT, COLOR_WORKSPACE,
    DIVIDER_TOP, DIVIDER_WIDTH, DIVIDER_XS, FILE_BUTTON, LABEL_FONT_SIZE, LOGO_RECT, MENU_HEIGHT,
    MENU_TEXT_PADDING, PALETTE_PANEL, SPRITE_CENTER, SPRITE_RADIUS, STAGE_PANEL, WINDOW_HEIGHT,
    WINDOW_WIDTH, WORKSPACE,
};
use crate::controller::EditorState;
use crate::geometry::BlockRect;
use crate::menu::MenuItem;
use eframe::egui::{self, pos2, vec2, Align2, Color32, FontId, Painter, Pos2, Rect, Stroke};

/// Draws the whole window, back to front.
pub fn paint(
    painter: &Painter,
    origin: Pos2,
    state: &EditorState,
    logo: Option<&egui::TextureHandle>,
) {
    let window = BlockRect::new(0, 0, WINDOW_WIDTH, WINDOW_HEIGHT);
    fill(painter, origin, window, COLOR_BACKGROUND);

    paint_menu_strip(painter, origin, logo);

    fill(painter, origin, PALETTE_PANEL, COLOR_PALETTE_PANEL);
    fill(painter, origin, WORKSPACE, COLOR_WORKSPACE);
    fill(painter, origin, STAGE_PANEL, COLOR_STAGE_PANEL);
    for x in DIVIDER_XS {
        painter.line_segment(
            [
                origin + vec2(x as f32, DIVIDER_TOP as f32),
                origin + vec2(x as f32, WINDOW_HEIGHT as f32),
            ],
            Stroke::new(DIVIDER_WIDTH, COLOR_DIVIDER),
        );
    }

    for block_type in state.catalog().types() {
        labeled_block(painter, origin, block_type.origin, block_type.color, block_type.label);
    }

    for block in state.blocks().blocks() {
        if let Some(block_type) = state.catalog().get(block.type_index) {
            labeled_block(painter, origin, block.rect, block_type.color, block_type.label);
        }
    }

    painter.circle_filled(
        origin + vec2(SPRITE_CENTER.0 as f32, SPRITE_CENTER.1 as f32),
        SPRITE_RADIUS,
        COLOR_SPRITE,
    );

    if state.is_file_menu_open() {
        for item in MenuItem::ALL {
            fill(painter, origin, item.rect(), COLOR_MENU_ITEM);
            left_text(painter, item.rect().to_screen(origin), item.label());
        }
    }
}

fn paint_menu_strip(painter: &Painter, origin: Pos2, logo: Option<&egui::TextureHandle>) {
    fill(
        painter,
        origin,
        BlockRect::new(0, 0, WINDOW_WIDTH, MENU_HEIGHT),
        COLOR_MENU_STRIP,
    );

    if let Some(texture) = logo {
        painter.image(
            texture.id(),
            LOGO_RECT.to_screen(origin),
            Rect::from_min_max(pos2(0.0, 0.0), pos2(1.0, 1.0)),
            Color32::WHITE,
        );
    }

    fill(painter, origin, FILE_BUTTON, COLOR_FILE_BUTTON);
    left_text(painter, FILE_BUTTON.to_screen(origin), "File");
}

fn fill(painter: &Painter, origin: Pos2, rect: BlockRect, color: Color32) {
    painter.rect_filled(rect.to_screen(origin), 0.0, color);
}

fn labeled_block(painter: &Painter, origin: Pos2, rect: BlockRect, color: Color32, label: &str) {
    let screen = rect.to_screen(origin);
    painter.rect_filled(screen, 0.0, color);
    painter.text(
        screen.center(),
        Align2::CENTER_CENTER,
        label,
        FontId::proportional(LABEL_FONT_SIZE),
        COLOR_TEXT,
    );
}

fn left_text(painter: &Painter, rect: Rect, label: &str) {
    painter.text(
        pos2(rect.min.x + MENU_TEXT_PADDING, rect.center().y),
        Align2::LEFT_CENTER,
        label,
        FontId::proportional(LABEL_FONT_SIZE),
        COLOR_TEXT,
    );
}
