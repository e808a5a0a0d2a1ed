use crate::constants::{MENU_ITEM_LOAD, MENU_ITEM_NEW, MENU_ITEM_SAVE};
use crate::geometry::BlockRect;

/// Entries of the File dropdown, top to bottom.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuItem {
    New,
    Save,
    Load,
}

impl MenuItem {
    pub const ALL: [MenuItem; 3] = [MenuItem::New, MenuItem::Save, MenuItem::Load];

    pub fn rect(self) -> BlockRect {
        match self {
            MenuItem::New => MENU_ITEM_NEW,
            MenuItem::Save => MENU_ITEM_SAVE,
            MenuItem::Load => MENU_ITEM_LOAD,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MenuItem::New => "New",
            MenuItem::Save => "Save",
            MenuItem::Load => "Load",
        }
    }

    /// First item under the point; items share edges, so the upper one wins.
    pub fn at(px: i32, py: i32) -> Option<Self> {
        Self::ALL.into_iter().find(|item| item.rect().contains(px, py))
    }
}
