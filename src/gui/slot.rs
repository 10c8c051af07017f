//! Menu Slot Renderer
//!
//! Draws one fixed-height menu row: background, icon pad, optional icon,
//! label, submenu marker and the separator line. Slot numbers are 1-based;
//! the color scheme flips between normal and highlighted based on whether
//! the row holds the current selection.

use crate::icons::IconRef;
use crate::menu::MenuItem;
use crate::surface::Surface;
use crate::theme::{
    MENU_AREA_LEFT, MENU_AREA_TOP, MENU_AREA_WIDTH, PAD_ICON_LOFF, PAD_ICON_TOFF, SLOT_LINE_HEIGHT,
    SLOT_LINE_TOP, SLOT_PAD_LEFT, SLOT_PAD_TOP, SLOT_PAD_WIDTH, SLOT_TEXT_LEFT, SLOT_PAD_HEIGHT,
};

use super::context::GuiContext;

impl<S: Surface> GuiContext<S> {
    pub(crate) fn draw_slot(
        &mut self,
        item: &MenuItem,
        slot: usize,
        height: u32,
        is_current: bool,
        icon: Option<IconRef>,
    ) -> Result<(), String> {
        let scheme = if is_current {
            self.theme.highlighted
        } else {
            self.theme.normal
        };

        // Slots are numbered from 1.
        let slot_top = self.y + MENU_AREA_TOP + height as i32 * (slot as i32 - 1);

        // Draw background
        self.surface.fill_rect(
            self.x + MENU_AREA_LEFT,
            slot_top,
            MENU_AREA_WIDTH,
            height,
            scheme.background,
        )?;

        // Draw icon pad
        self.surface.fill_rounded_rect(
            self.x + SLOT_PAD_LEFT,
            slot_top + SLOT_PAD_TOP,
            SLOT_PAD_WIDTH,
            SLOT_PAD_HEIGHT,
            scheme.pad,
        )?;

        // Draw icon
        let image = icon.and_then(|r| r.resolve(&self.icons, self.loaded_icons.as_ref()));
        if let Some(image) = image {
            self.surface.blit(
                self.x + SLOT_PAD_LEFT + PAD_ICON_LOFF,
                slot_top + SLOT_PAD_TOP + PAD_ICON_TOFF,
                image,
            )?;
        }

        // Draw label, vertically centered in the slot
        let (_, text_height) = self.surface.text_size(&item.label);
        self.surface.draw_text(
            self.x + SLOT_TEXT_LEFT,
            slot_top + (height as i32 - text_height as i32) / 2,
            scheme.text,
            &item.label,
        )?;

        // Submenu marker at the right edge, only for items that have one
        if item.submenu.is_some() {
            let (marker_width, marker_height) = self.surface.text_size(">");
            self.surface.draw_text(
                self.x + MENU_AREA_LEFT + MENU_AREA_WIDTH as i32 - marker_width as i32 - 6,
                slot_top + (height as i32 - marker_height as i32) / 2,
                scheme.text,
                ">",
            )?;
        }

        // Draw separator line
        self.surface.fill_rect(
            self.x + MENU_AREA_LEFT,
            slot_top + SLOT_LINE_TOP,
            MENU_AREA_WIDTH,
            SLOT_LINE_HEIGHT,
            scheme.line,
        )
    }
}
