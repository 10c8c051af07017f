//! Background Renderer
//!
//! Paints the static chrome (background fill, header icon pad with the logo,
//! menu frame, menu area) and the status text next to the logo. Callers go
//! through `draw_background`, which restores the pre-rendered snapshot when
//! one exists and falls back to drawing from scratch when it does not — the
//! two paths must produce the same pixels.

use crate::icons::IconId;
use crate::surface::Surface;
use crate::theme::{
    FRAME_SIZE, HDR_PAD_HEIGHT, HDR_PAD_LEFT, HDR_PAD_TOP, HDR_PAD_WIDTH, MENU_AREA_HEIGHT,
    MENU_AREA_LEFT, MENU_AREA_TOP, MENU_AREA_WIDTH, MENU_FRAME_HEIGHT, MENU_FRAME_LEFT,
    MENU_FRAME_TOP, MENU_FRAME_WIDTH, PAD_ICON_LOFF, PAD_ICON_TOFF,
};

use super::context::GuiContext;

impl<S: Surface> GuiContext<S> {
    /// Draws the full chrome from scratch.
    pub(crate) fn draw_chrome(&mut self) -> Result<(), String> {
        let surface_width = self.surface.width();
        let surface_height = self.surface.height();

        // Fill background
        self.surface
            .fill_rect(0, 0, surface_width, surface_height, self.theme.background)?;

        // Draw icon pad
        self.surface.fill_rounded_rect(
            self.x + HDR_PAD_LEFT,
            self.y + HDR_PAD_TOP,
            HDR_PAD_WIDTH,
            HDR_PAD_HEIGHT,
            self.theme.header_pad,
        )?;

        // Draw logo
        if let Some(logo) = self.icons.get(IconId::Logo) {
            self.surface.blit(
                self.x + HDR_PAD_LEFT + PAD_ICON_LOFF,
                self.y + HDR_PAD_TOP + PAD_ICON_TOFF,
                logo,
            )?;
        }

        // Draw menu frame
        self.surface.fill_rounded_rect(
            self.x + MENU_FRAME_LEFT,
            self.y + MENU_FRAME_TOP,
            MENU_FRAME_WIDTH,
            MENU_FRAME_HEIGHT,
            self.theme.menu_frame,
        )?;

        // Draw menu area
        self.surface.fill_rect(
            self.x + MENU_AREA_LEFT,
            self.y + MENU_AREA_TOP,
            MENU_AREA_WIDTH,
            MENU_AREA_HEIGHT,
            self.theme.menu_background,
        )
    }

    /// Draws the status text centered between the header pad and the menu
    /// frame's right inner edge. Text wider than the available space goes
    /// negative and is clipped by the surface, not by us.
    fn draw_bg_text(&mut self, text: &str) -> Result<(), String> {
        let (text_width, text_height) = self.surface.text_size(text);

        let pad_edge = HDR_PAD_LEFT + HDR_PAD_WIDTH as i32 + 2;
        let x = self.x
            + pad_edge
            + (self.width as i32 - pad_edge * 2 - text_width as i32 - FRAME_SIZE as i32) / 2;
        let y = self.y + (MENU_FRAME_TOP - text_height as i32) / 2;

        self.surface.draw_text(x, y, self.theme.header_text, text)
    }

    /// Paints the background (from the snapshot when available) and the
    /// status text on top. This is the entry the menu and text screens use.
    pub(crate) fn draw_background(&mut self, text: &str) -> Result<(), String> {
        if self.use_bg_buffer {
            if let Some(buffer) = &self.bg_buffer {
                self.surface.restore(buffer)?;
            } else {
                self.draw_chrome()?;
                eprintln!("Background buffer is empty, drew chrome");
            }
        } else {
            self.draw_chrome()?;
        }
        self.draw_bg_text(text)
    }
}
