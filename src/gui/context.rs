//! GUI Context and Layout
//!
//! The process-lifetime rendering context: it owns the pixel surface, the
//! computed geometry of the UI region, the decoded icon caches and the
//! optional pre-rendered background. Created once at startup, dropped once
//! at shutdown.
//!
//! The geometry adapts a fixed design to whatever display came up: each axis
//! is capped at the design maximum and the resulting region is centered on
//! the surface. Every later draw call offsets from this origin, which is the
//! whole trick that makes the chrome orientation- and size-agnostic.

use crate::config::Config;
use crate::icons::{BorrowedIconList, IconCache, OwnedIconList};
use crate::surface::{Orientation, SavedBuffer, Surface};
use crate::theme::{self, Theme};

use super::boot_menu::ScrollWindow;

/// The rendering context. Field order fixes teardown order: the borrowed
/// icon refs go first, then the owned per-menu images, then the fixed cache,
/// and the surface is released last.
pub struct GuiContext<S: Surface> {
    pub(crate) menu_icons: Option<BorrowedIconList>,
    pub(crate) loaded_icons: Option<OwnedIconList>,
    pub(crate) icons: IconCache,
    pub(crate) bg_buffer: Option<SavedBuffer>,
    pub(crate) use_bg_buffer: bool,
    pub(crate) scroll: ScrollWindow,
    pub(crate) theme: Theme,
    pub(crate) x: i32,
    pub(crate) y: i32,
    pub(crate) width: u32,
    pub(crate) height: u32,
    pub(crate) surface: S,
}

impl<S: Surface> GuiContext<S> {
    /// Brings up the GUI for the given display orientation with default
    /// options. Fails only if the surface cannot be created; no partial
    /// context is ever returned.
    #[allow(dead_code)] // Reserved for callers without a config file
    pub fn initialize(orientation: Orientation) -> Result<Self, String> {
        let config = Config {
            orientation,
            ..Config::default()
        };
        Self::initialize_with(&config)
    }

    /// Brings up the GUI with explicit options (orientation, theme,
    /// background-cache toggle).
    pub fn initialize_with(config: &Config) -> Result<Self, String> {
        let surface = S::create(config.orientation)?;
        Self::from_surface(surface, config.theme.clone(), config.use_bg_buffer)
    }

    pub(crate) fn from_surface(
        surface: S,
        theme: Theme,
        use_bg_buffer: bool,
    ) -> Result<Self, String> {
        let surface_width = surface.width();
        let surface_height = surface.height();

        let width = surface_width.min(theme::MAX_WIDTH);
        let height = surface_height.min(theme::MAX_HEIGHT);
        let x = ((surface_width - width) / 2) as i32;
        let y = ((surface_height - height) / 2) as i32;

        // Decode failures leave empty cache slots; the drawing code is
        // aware and skips them.
        let icons = IconCache::load(surface.depth());

        let mut context = GuiContext {
            menu_icons: None,
            loaded_icons: None,
            icons,
            bg_buffer: None,
            use_bg_buffer,
            scroll: ScrollWindow::new(),
            theme,
            x,
            y,
            width,
            height,
            surface,
        };

        if use_bg_buffer {
            // Pre-render the chrome once and keep the snapshot. If the
            // surface cannot dump, every frame falls back to drawing the
            // chrome from scratch.
            context.draw_chrome()?;
            match context.surface.dump() {
                Ok(buffer) => context.bg_buffer = Some(buffer),
                Err(e) => eprintln!("Background cache unavailable: {}", e),
            }
        }

        Ok(context)
    }

    /// Tears the GUI down. Equivalent to dropping the context; provided so
    /// shutdown reads explicitly at the call site.
    pub fn destroy(self) {}

    /// Origin of the UI region on the surface.
    pub fn origin(&self) -> (i32, i32) {
        (self.x, self.y)
    }

    /// Extent of the UI region.
    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Installs the per-menu owned icon images. Replacing the list releases
    /// the previous images.
    pub fn set_loaded_icons(&mut self, icons: Option<OwnedIconList>) {
        self.loaded_icons = icons;
    }

    /// Installs the per-item icon references used by `show_menu`. `None`
    /// renders every slot without an icon.
    pub fn set_menu_icons(&mut self, icons: Option<BorrowedIconList>) {
        self.menu_icons = icons;
    }

    /// Snapshot of the currently drawn frame, for screen dumps.
    pub fn dump_screen(&mut self) -> Result<SavedBuffer, String> {
        self.surface.dump()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::icons::IconId;
    use crate::surface::mock::MockSurface;

    fn context(surface: MockSurface) -> GuiContext<MockSurface> {
        GuiContext::from_surface(surface, Theme::default(), false).unwrap()
    }

    #[test]
    fn test_small_display_uses_full_surface() {
        let ctx = context(MockSurface::new(320, 240));
        assert_eq!(ctx.size(), (320, 240));
        assert_eq!(ctx.origin(), (0, 0));
    }

    #[test]
    fn test_large_display_is_capped_and_centered() {
        let ctx = context(MockSurface::new(800, 600));
        assert_eq!(ctx.size(), (640, 480));
        assert_eq!(ctx.origin(), (80, 60));
    }

    #[test]
    fn test_one_axis_capped_the_other_exact() {
        let ctx = context(MockSurface::new(800, 480));
        assert_eq!(ctx.size(), (640, 480));
        assert_eq!(ctx.origin(), (80, 0));
    }

    #[test]
    fn test_odd_remainder_stays_on_the_low_side() {
        let ctx = context(MockSurface::new(645, 481));
        assert_eq!(ctx.size(), (640, 480));
        assert_eq!(ctx.origin(), (2, 0));
    }

    #[test]
    fn test_initialize_entry_point() {
        let ctx = GuiContext::<MockSurface>::initialize(Orientation::Normal).unwrap();
        assert_eq!(ctx.size(), (640, 480));
        assert_eq!(ctx.origin(), (0, 0));
        // Default options pre-render the background cache.
        assert!(ctx.bg_buffer.is_some());
        assert_eq!(ctx.surface.dump_calls, 1);
    }

    #[test]
    fn test_failed_dump_leaves_cache_absent_but_initializes() {
        let ctx = GuiContext::from_surface(
            MockSurface::failing_dump(640, 480),
            Theme::default(),
            true,
        )
        .unwrap();
        assert!(ctx.bg_buffer.is_none());
        assert_eq!(ctx.surface.dump_calls, 1);
    }

    #[test]
    fn test_disabled_cache_never_dumps() {
        let ctx = context(MockSurface::new(640, 480));
        assert!(ctx.bg_buffer.is_none());
        assert_eq!(ctx.surface.dump_calls, 0);
    }

    #[test]
    fn test_reinitialize_round_trip_rebuilds_the_icon_cache() {
        // The context owns every decoded icon; dropping it releases them
        // all, and a fresh initialization decodes a complete set again.
        for _ in 0..2 {
            let ctx = GuiContext::<MockSurface>::initialize(Orientation::Normal).unwrap();
            for id in IconId::ALL {
                if id != IconId::Exit {
                    assert!(ctx.icons.get(id).is_some());
                }
            }
            ctx.destroy();
        }
    }
}
