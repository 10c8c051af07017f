//! Menu Theme
//!
//! The fixed design: layout constants for the chrome and the menu slots,
//! plus the color schemes. All offsets are relative to the context origin,
//! which is what keeps the design independent of the actual display size and
//! orientation. Colors can be overridden from the config file; the layout
//! cannot.

use serde::Deserialize;

use crate::surface::Color;

/// Maximum design size. Larger displays get the design centered; smaller
/// displays use their full extent.
pub const MAX_WIDTH: u32 = 640;
pub const MAX_HEIGHT: u32 = 480;

/// Header icon pad (holds the logo), offset from the context origin.
pub const HDR_PAD_LEFT: i32 = 8;
pub const HDR_PAD_TOP: i32 = 4;
pub const HDR_PAD_WIDTH: u32 = 32;
pub const HDR_PAD_HEIGHT: u32 = 32;

/// Icon offset inside any icon pad (header and slot pads share it).
pub const PAD_ICON_LOFF: i32 = 8;
pub const PAD_ICON_TOFF: i32 = 8;

/// Menu frame border thickness.
pub const FRAME_SIZE: u32 = 2;

pub const MENU_FRAME_LEFT: i32 = 4;
pub const MENU_FRAME_TOP: i32 = 40;
pub const MENU_FRAME_WIDTH: u32 = MAX_WIDTH - 8;
pub const MENU_FRAME_HEIGHT: u32 = MAX_HEIGHT - MENU_FRAME_TOP as u32 - 4;

/// Menu content area, inset by the frame border.
pub const MENU_AREA_LEFT: i32 = MENU_FRAME_LEFT + FRAME_SIZE as i32;
pub const MENU_AREA_TOP: i32 = MENU_FRAME_TOP + FRAME_SIZE as i32;
pub const MENU_AREA_WIDTH: u32 = MENU_FRAME_WIDTH - 2 * FRAME_SIZE;
pub const MENU_AREA_HEIGHT: u32 = MENU_FRAME_HEIGHT - 2 * FRAME_SIZE;

/// Slot metrics. One slot is one fixed-height menu row. At the design
/// maximum, the visible slots (one is always held back) exactly fill the
/// menu area.
pub const SLOT_HEIGHT: u32 = 48;
pub const SLOT_PAD_LEFT: i32 = MENU_AREA_LEFT + 4;
pub const SLOT_PAD_TOP: i32 = 8;
pub const SLOT_PAD_WIDTH: u32 = 32;
pub const SLOT_PAD_HEIGHT: u32 = 32;
pub const SLOT_TEXT_LEFT: i32 = 52;
pub const SLOT_LINE_TOP: i32 = SLOT_HEIGHT as i32 - 1;
pub const SLOT_LINE_HEIGHT: u32 = 1;

/// Corner radius of the rounded chrome rectangles.
pub const CORNER_RADIUS: u32 = 6;

/// Colors for one slot state (normal or highlighted).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SlotScheme {
    pub background: Color,
    pub pad: Color,
    pub text: Color,
    pub line: Color,
}

impl Default for SlotScheme {
    fn default() -> Self {
        SlotScheme {
            background: Color::rgb(30, 30, 40),
            pad: Color::rgb(48, 48, 64),
            text: Color::rgb(160, 160, 170),
            line: Color::rgb(60, 60, 72),
        }
    }
}

impl SlotScheme {
    fn highlighted() -> Self {
        SlotScheme {
            background: Color::rgb(80, 100, 140),
            pad: Color::rgb(100, 120, 160),
            text: Color::rgb(255, 255, 255),
            line: Color::rgb(60, 60, 72),
        }
    }
}

/// The full color theme.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Theme {
    /// Full-surface background fill.
    pub background: Color,

    /// Header icon pad behind the logo.
    pub header_pad: Color,

    /// Banner/status text next to the logo.
    pub header_text: Color,

    /// Rounded menu frame.
    pub menu_frame: Color,

    /// Flat menu content area inside the frame.
    pub menu_background: Color,

    pub normal: SlotScheme,
    pub highlighted: SlotScheme,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            background: Color::rgb(16, 16, 24),
            header_pad: Color::rgb(48, 48, 64),
            header_text: Color::rgb(220, 220, 240),
            menu_frame: Color::rgb(100, 100, 120),
            menu_background: Color::rgb(30, 30, 40),
            normal: SlotScheme::default(),
            highlighted: SlotScheme::highlighted(),
        }
    }
}
