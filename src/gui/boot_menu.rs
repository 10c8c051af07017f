//! Boot Menu Screen
//!
//! The top-level render entry points: `show_menu` draws the background, the
//! currently visible window of the boot list and presents the frame;
//! `show_text` draws only chrome plus a status message, for transient states
//! like a device rescan.
//!
//! Which entries are visible is decided by the scrolling window — the one
//! piece of state that survives between frames. The window only moves when
//! the selection leaves it, so stepping through entries that are already on
//! screen never shifts the list under the user.

use crate::menu::MenuList;
use crate::surface::Surface;
use crate::theme::SLOT_HEIGHT;

use super::context::GuiContext;

/// Banner shown while bootable targets are listed.
pub const BANNER_TEXT: &str = "BOOTMENU - Linux soft-bootloader";

/// Message shown when the list holds only the "nothing found" placeholder
/// entry the scanner installs.
pub const NO_DEVICES_TEXT: &str = "No bootable devices found.\nR: Reboot  S: Rescan devices";

/// The scrolling window over the menu list: `first` is the index of the
/// entry in the top visible slot. Persisted across renders, moved only when
/// the selection leaves the window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScrollWindow {
    first: usize,
}

impl ScrollWindow {
    pub fn new() -> Self {
        ScrollWindow { first: 0 }
    }

    /// Index of the first visible entry.
    pub fn first(&self) -> usize {
        self.first
    }

    /// Moves the window so `current` is visible among `visible_slots` rows.
    ///
    /// A selection above the window scrolls up to put it in the top row; a
    /// selection below scrolls down to put it in the bottom row; a selection
    /// already inside leaves the window alone. After the call,
    /// `first <= current <= first + visible_slots - 1` holds.
    pub fn update(&mut self, current: usize, visible_slots: usize) {
        if visible_slots == 0 {
            return;
        }
        if current < self.first {
            self.first = current;
        } else if current > self.first + visible_slots - 1 {
            self.first = current - (visible_slots - 1);
        }
    }
}

impl<S: Surface> GuiContext<S> {
    /// Renders the boot list with `current` selected and presents the frame.
    ///
    /// `current` outside the populated range renders with no row highlighted
    /// and leaves the scroll window untouched.
    pub fn show_menu(&mut self, menu: &MenuList, current: usize) -> Result<(), String> {
        // One slot is held back so the last separator is never clipped.
        let visible_slots = (self.height / SLOT_HEIGHT).saturating_sub(1) as usize;

        if menu.fill() == 1 {
            self.draw_background(NO_DEVICES_TEXT)?;
        } else {
            self.draw_background(BANNER_TEXT)?;
        }

        if current < menu.fill() {
            self.scroll.update(current, visible_slots);
        }

        let mut slot = 1;
        let mut index = self.scroll.first();
        while slot <= visible_slots && index < menu.fill() {
            let icon = self.menu_icons.as_ref().and_then(|list| list.get(index));
            if let Some(item) = menu.get(index) {
                self.draw_slot(item, slot, SLOT_HEIGHT, index == current, icon)?;
            }
            slot += 1;
            index += 1;
        }

        self.surface.present();
        Ok(())
    }

    /// Renders chrome plus a status message and presents the frame.
    pub fn show_text(&mut self, text: &str) -> Result<(), String> {
        self.draw_background(text)?;
        self.surface.present();
        Ok(())
    }
}
