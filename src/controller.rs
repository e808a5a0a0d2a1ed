//! Pointer-driven editor state: menu toggling, picking, dragging, and drop resolution.
//!
//! Only the frontmost block can be dragged. Picking a block moves it to the end of
//! the sequence, so "frontmost" and "being dragged" always refer to the same block.

use crate::block::BlockInstance;
use crate::block_manager::BlockManager;
use crate::catalog::Catalog;
use crate::constants::{FILE_BUTTON, MENU_HEIGHT, STAGE_PANEL, WORKSPACE};
use crate::dialogs::{Dialogs, NewChoice};
use crate::geometry::window_point;
use crate::menu::MenuItem;
use crate::persistence;
use eframe::egui::{self, Pos2};
use std::path::PathBuf;

/// Primary-button pointer input in window pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEvent {
    Down { x: i32, y: i32 },
    Move { x: i32, y: i32 },
    Up { x: i32, y: i32 },
}

impl PointerEvent {
    /// Translates an egui event. Anything other than primary presses and motion is ignored.
    pub fn from_egui(event: &egui::Event, origin: Pos2) -> Option<Self> {
        match event {
            egui::Event::PointerButton {
                pos,
                button: egui::PointerButton::Primary,
                pressed,
                ..
            } => {
                let (x, y) = window_point(*pos, origin);
                Some(if *pressed {
                    PointerEvent::Down { x, y }
                } else {
                    PointerEvent::Up { x, y }
                })
            }
            egui::Event::PointerMoved(pos) => {
                let (x, y) = window_point(*pos, origin);
                Some(PointerEvent::Move { x, y })
            }
            _ => None,
        }
    }
}

/// How a released block was resolved.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DropOutcome {
    /// Center in the workspace; the position becomes the new valid one.
    Committed,
    /// Center on the stage; returned to its last workspace position.
    SnappedBack,
    Removed,
}

/// Everything the editor mutates between frames.
pub struct EditorState {
    catalog: Catalog,
    blocks: BlockManager,
    file_menu_open: bool,
    project_path: PathBuf,
}

impl EditorState {
    pub fn new(catalog: Catalog, project_path: PathBuf) -> Self {
        Self {
            catalog,
            blocks: BlockManager::new(),
            file_menu_open: false,
            project_path,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn blocks(&self) -> &BlockManager {
        &self.blocks
    }

    pub fn is_file_menu_open(&self) -> bool {
        self.file_menu_open
    }

    pub fn project_path(&self) -> &std::path::Path {
        &self.project_path
    }

    pub fn handle_pointer(&mut self, event: PointerEvent, dialogs: &mut dyn Dialogs) {
        match event {
            PointerEvent::Down { x, y } => self.press(x, y, dialogs),
            PointerEvent::Move { x, y } => self.drag(x, y),
            PointerEvent::Up { x, y } => {
                if let Some(outcome) = self.release() {
                    log::debug!("Released at ({x}, {y}): {outcome:?}");
                }
            }
        }
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Pointer Handling
    // ─────────────────────────────────────────────────────────────────────────────

    fn press(&mut self, x: i32, y: i32, dialogs: &mut dyn Dialogs) {
        let mut consumed = false;

        if FILE_BUTTON.contains(x, y) {
            self.file_menu_open = !self.file_menu_open;
            log::info!("File menu toggled: {}", self.file_menu_open);
            consumed = true;
        } else if self.file_menu_open {
            self.file_menu_open = false;
            if let Some(item) = MenuItem::at(x, y) {
                self.run_menu_item(item, dialogs);
                consumed = true;
            }
        }

        if consumed || y < MENU_HEIGHT {
            return;
        }

        if let Some(index) = self.blocks.hit_test(x, y) {
            if let Some(block) = self.blocks.bring_to_front(index) {
                block.begin_drag(x, y);
                log::debug!("Picked up block of type {}", block.type_index);
            }
            return;
        }

        if let Some(type_index) = self.catalog.hit_test(x, y) {
            let Some(block_type) = self.catalog.get(type_index) else {
                return;
            };
            let block = self
                .blocks
                .push(BlockInstance::from_type(type_index, block_type));
            block.begin_drag(x, y);
            log::debug!("Created {} block", block_type.label);
        }
    }

    fn drag(&mut self, x: i32, y: i32) {
        if let Some(block) = self.blocks.topmost_mut() {
            if block.is_dragging {
                block.drag_to(x, y);
            }
        }
    }

    /// Ends the active drag, if any, and decides whether the block stays.
    fn release(&mut self) -> Option<DropOutcome> {
        let block = self.blocks.topmost_mut()?;
        if !block.is_dragging {
            return None;
        }
        block.end_drag();

        let (cx, cy) = block.center();
        let outcome = if WORKSPACE.contains(cx, cy) {
            block.commit_position();
            DropOutcome::Committed
        } else if STAGE_PANEL.contains(cx, cy) {
            block.snap_back();
            let (cx, cy) = block.center();
            if WORKSPACE.contains(cx, cy) {
                DropOutcome::SnappedBack
            } else {
                DropOutcome::Removed
            }
        } else {
            DropOutcome::Removed
        };

        if outcome == DropOutcome::Removed {
            self.blocks.pop_topmost();
        }
        Some(outcome)
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // File Menu Actions
    // ─────────────────────────────────────────────────────────────────────────────

    fn run_menu_item(&mut self, item: MenuItem, dialogs: &mut dyn Dialogs) {
        match item {
            MenuItem::New => self.new_project(dialogs),
            MenuItem::Save => {
                self.save_project(dialogs);
            }
            MenuItem::Load => {
                self.load_project(dialogs);
            }
        }
    }

    /// Clears the workspace, offering to save first when there is something to lose.
    pub fn new_project(&mut self, dialogs: &mut dyn Dialogs) {
        if self.blocks.is_empty() {
            self.blocks.clear();
            log::info!("New project");
            return;
        }

        match dialogs.confirm_new() {
            NewChoice::SaveAndClear => {
                if self.save_project(dialogs) {
                    self.blocks.clear();
                    log::info!("New project after save");
                }
            }
            NewChoice::DiscardAndClear => {
                self.blocks.clear();
                log::info!("New project, changes discarded");
            }
            NewChoice::Cancel => log::info!("New project cancelled"),
        }
    }

    /// Writes the project file and reports the outcome. Returns true on success.
    pub fn save_project(&mut self, dialogs: &mut dyn Dialogs) -> bool {
        let ok = match persistence::save(&self.project_path, self.blocks.blocks()) {
            Ok(()) => {
                log::info!("Saved {} blocks to {}", self.blocks.len(), self.project_path.display());
                true
            }
            Err(err) => {
                log::error!("Save failed: {err}");
                false
            }
        };
        let message = if ok { "Saved successfully." } else { "Save failed!" };
        dialogs.report("Save", ok, message);
        ok
    }

    /// Replaces all blocks with the project file's contents. On failure nothing changes.
    pub fn load_project(&mut self, dialogs: &mut dyn Dialogs) -> bool {
        let ok = match persistence::load(&self.project_path, self.catalog.len()) {
            Ok(blocks) => {
                log::info!("Loaded {} blocks from {}", blocks.len(), self.project_path.display());
                self.blocks.replace(blocks);
                true
            }
            Err(err) => {
                log::error!("Load failed: {err}");
                false
            }
        };
        let message = if ok { "Loaded successfully." } else { "Load failed!" };
        dialogs.report("Load", ok, message);
        ok
    }
}
