//! Boot Menu GUI
//!
//! The rendering engine behind the boot menu: a context that owns the pixel
//! surface and the decoded icons, a background renderer with an optional
//! pre-rendered snapshot, a per-slot renderer, and the scrolling window that
//! picks which entries are on screen.
//!
//! The external event loop drives exactly four operations:
//!
//! - [`GuiContext::initialize`] / [`GuiContext::initialize_with`]
//! - [`GuiContext::destroy`] (or just drop the context)
//! - [`GuiContext::show_menu`]
//! - [`GuiContext::show_text`]
//!
//! Everything is synchronous and single-threaded; one render completes
//! before the next begins.

pub mod background;
pub mod boot_menu;
pub mod context;
pub mod slot;

pub use boot_menu::{BANNER_TEXT, NO_DEVICES_TEXT, ScrollWindow};
pub use context::GuiContext;
