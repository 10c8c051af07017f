//! Pixel Surface Contract
//!
//! Everything the rendering core needs from a display: a flat pixel surface
//! with filled rectangles, rounded rectangles, image blits, bitmap text, a
//! whole-surface dump/restore pair and a final present. The core only ever
//! talks to the [`Surface`] trait; [`SdlSurface`] is the real backend over an
//! SDL2 window canvas.
//!
//! Creation is the one operation that may fail hard. Dump/restore may be
//! unavailable on a backend and degrade gracefully (the caller falls back to
//! redrawing from scratch). Everything else is a plain synchronous draw call.

use sdl2::pixels::PixelFormatEnum;
use sdl2::rect::Rect;
use serde::Deserialize;

use crate::font;
use crate::theme::CORNER_RADIUS;
use crate::xpm::XpmImage;

/// Display size the SDL backend opens in landscape orientation.
pub const DISPLAY_WIDTH: u32 = 640;
pub const DISPLAY_HEIGHT: u32 = 480;

/// An RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b }
    }
}

/// Display rotation selected at startup.
///
/// Rotated orientations swap the display's width and height; the drawing
/// code is unaware of the rotation because all layout happens relative to
/// the computed context origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum Orientation {
    Normal,
    Rotate90,
    Rotate180,
    Rotate270,
}

impl Orientation {
    pub fn display_size(self) -> (u32, u32) {
        match self {
            Orientation::Normal | Orientation::Rotate180 => (DISPLAY_WIDTH, DISPLAY_HEIGHT),
            Orientation::Rotate90 | Orientation::Rotate270 => (DISPLAY_HEIGHT, DISPLAY_WIDTH),
        }
    }
}

/// One horizontal run of same-colored pixels in a saved buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelRun {
    pub x: i32,
    pub y: i32,
    pub len: u32,
    pub color: Color,
}

/// A whole-surface snapshot, stored as horizontal color runs.
///
/// Chrome is mostly large flat regions, so run-length encoding keeps the
/// snapshot small and lets `restore` replay it as plain `fill_rect` calls.
#[derive(Debug, Clone)]
pub struct SavedBuffer {
    width: u32,
    height: u32,
    runs: Vec<PixelRun>,
}

impl SavedBuffer {
    /// Encodes a row-major pixel grid. `pixels` must hold `width * height`
    /// entries.
    pub fn from_pixels(width: u32, height: u32, pixels: &[Color]) -> SavedBuffer {
        let mut runs = Vec::new();
        for y in 0..height {
            let row = &pixels[(y * width) as usize..((y + 1) * width) as usize];
            let mut x = 0usize;
            while x < row.len() {
                let color = row[x];
                let mut len = 1usize;
                while x + len < row.len() && row[x + len] == color {
                    len += 1;
                }
                runs.push(PixelRun {
                    x: x as i32,
                    y: y as i32,
                    len: len as u32,
                    color,
                });
                x += len;
            }
        }
        SavedBuffer {
            width,
            height,
            runs,
        }
    }

    pub(crate) fn from_runs(width: u32, height: u32, runs: Vec<PixelRun>) -> SavedBuffer {
        SavedBuffer {
            width,
            height,
            runs,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn runs(&self) -> &[PixelRun] {
        &self.runs
    }

    /// Rasterizes the runs back into a row-major pixel grid. Pixels not
    /// covered by any run come out black.
    pub fn to_pixels(&self) -> Vec<Color> {
        let mut pixels = vec![Color::rgb(0, 0, 0); (self.width * self.height) as usize];
        for run in &self.runs {
            if run.y < 0 || run.y >= self.height as i32 {
                continue;
            }
            for i in 0..run.len {
                let x = run.x + i as i32;
                if x < 0 || x >= self.width as i32 {
                    continue;
                }
                pixels[(run.y as u32 * self.width + x as u32) as usize] = run.color;
            }
        }
        pixels
    }
}

/// The pixel-surface contract consumed by the rendering core.
///
/// Rounded rectangles, blits and text have default implementations built on
/// `fill_rect`, matching how the SDL backend renders procedurally; backends
/// and test doubles may override them.
pub trait Surface {
    /// Acquires the surface for the given orientation. The only operation
    /// whose failure is fatal to initialization.
    fn create(orientation: Orientation) -> Result<Self, String>
    where
        Self: Sized;

    fn width(&self) -> u32;
    fn height(&self) -> u32;

    /// Color depth in bits per pixel, used when decoding icons.
    fn depth(&self) -> u8;

    fn fill_rect(&mut self, x: i32, y: i32, width: u32, height: u32, color: Color)
    -> Result<(), String>;

    fn fill_rounded_rect(
        &mut self,
        x: i32,
        y: i32,
        width: u32,
        height: u32,
        color: Color,
    ) -> Result<(), String> {
        let radius = CORNER_RADIUS.min(width / 2).min(height / 2);
        for row in 0..height {
            let inset = rounded_row_inset(row, height, radius);
            self.fill_rect(x + inset as i32, y + row as i32, width - 2 * inset, 1, color)?;
        }
        Ok(())
    }

    fn blit(&mut self, x: i32, y: i32, image: &XpmImage) -> Result<(), String> {
        for py in 0..image.height() {
            for px in 0..image.width() {
                if let Some(color) = image.pixel(px, py) {
                    self.fill_rect(x + px as i32, y + py as i32, 1, 1, color)?;
                }
            }
        }
        Ok(())
    }

    /// Measures `text` in the default font. `\n` starts a new line.
    fn text_size(&self, text: &str) -> (u32, u32) {
        font::text_size(text)
    }

    fn draw_text(&mut self, x: i32, y: i32, color: Color, text: &str) -> Result<(), String> {
        let mut line_y = y;
        for line in text.split('\n') {
            for (i, c) in line.chars().enumerate() {
                let char_x = x + (i as u32 * font::CHAR_ADVANCE) as i32;
                let pattern = font::glyph(c);
                for (row, bits) in pattern.iter().enumerate() {
                    for col in 0..font::GLYPH_COLS {
                        if (bits >> (font::GLYPH_COLS - 1 - col)) & 1 == 1 {
                            self.fill_rect(
                                char_x + (col * font::FONT_SCALE) as i32,
                                line_y + (row as u32 * font::FONT_SCALE) as i32,
                                font::FONT_SCALE,
                                font::FONT_SCALE,
                                color,
                            )?;
                        }
                    }
                }
            }
            line_y += (font::LINE_HEIGHT + font::LINE_GAP) as i32;
        }
        Ok(())
    }

    /// Snapshots the whole surface. May be unavailable on a backend; the
    /// caller treats failure as "no cache" and keeps drawing from scratch.
    fn dump(&mut self) -> Result<SavedBuffer, String>;

    fn restore(&mut self, saved: &SavedBuffer) -> Result<(), String> {
        for run in saved.runs() {
            self.fill_rect(run.x, run.y, run.len, 1, run.color)?;
        }
        Ok(())
    }

    /// Flushes the finished frame to the display.
    fn present(&mut self);
}

/// Horizontal inset of `row` within a `height`-tall rounded rectangle of the
/// given corner radius. Zero outside the corner regions.
pub(crate) fn rounded_row_inset(row: u32, height: u32, radius: u32) -> u32 {
    if radius == 0 || height == 0 {
        return 0;
    }
    let dy = if row < radius {
        radius - row
    } else if row + radius >= height {
        row + radius + 1 - height
    } else {
        return 0;
    };
    radius - isqrt(radius * radius - dy * dy)
}

fn isqrt(n: u32) -> u32 {
    let mut r = 0;
    while (r + 1) * (r + 1) <= n {
        r += 1;
    }
    r
}

/// SDL2-backed surface: a window canvas drawn with procedural primitives.
pub struct SdlSurface {
    canvas: sdl2::render::Canvas<sdl2::video::Window>,
    depth: u8,
    sdl: sdl2::Sdl,
}

impl SdlSurface {
    /// The SDL event pump, for the event loop driving this surface.
    pub fn event_pump(&self) -> Result<sdl2::EventPump, String> {
        self.sdl.event_pump()
    }
}

impl Surface for SdlSurface {
    fn create(orientation: Orientation) -> Result<Self, String> {
        let sdl = sdl2::init()?;
        let video = sdl.video()?;

        let (width, height) = orientation.display_size();
        let window = video
            .window("bootmenu", width, height)
            .position_centered()
            .build()
            .map_err(|e| e.to_string())?;

        let depth = (window.window_pixel_format().byte_size_per_pixel() * 8) as u8;
        let canvas = window.into_canvas().build().map_err(|e| e.to_string())?;

        println!("Display ready: {}x{} at {} bpp", width, height, depth);

        Ok(SdlSurface { canvas, depth, sdl })
    }

    fn width(&self) -> u32 {
        self.canvas.window().size().0
    }

    fn height(&self) -> u32 {
        self.canvas.window().size().1
    }

    fn depth(&self) -> u8 {
        self.depth
    }

    fn fill_rect(
        &mut self,
        x: i32,
        y: i32,
        width: u32,
        height: u32,
        color: Color,
    ) -> Result<(), String> {
        if width == 0 || height == 0 {
            return Ok(());
        }
        self.canvas
            .set_draw_color(sdl2::pixels::Color::RGB(color.r, color.g, color.b));
        self.canvas.fill_rect(Rect::new(x, y, width, height))
    }

    fn dump(&mut self) -> Result<SavedBuffer, String> {
        let (width, height) = self.canvas.output_size()?;
        let bytes = self.canvas.read_pixels(None, PixelFormatEnum::RGB24)?;

        let mut pixels = Vec::with_capacity((width * height) as usize);
        for chunk in bytes.chunks_exact(3) {
            pixels.push(Color::rgb(chunk[0], chunk[1], chunk[2]));
        }
        if pixels.len() < (width * height) as usize {
            return Err(format!(
                "Short pixel readback: {} of {}",
                pixels.len(),
                width * height
            ));
        }
        Ok(SavedBuffer::from_pixels(width, height, &pixels))
    }

    fn present(&mut self) {
        self.canvas.present();
    }
}

#[cfg(test)]
pub(crate) mod mock {
    //! A recording surface for headless tests.

    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    pub enum Op {
        Fill {
            x: i32,
            y: i32,
            width: u32,
            height: u32,
            color: Color,
        },
        Rounded {
            x: i32,
            y: i32,
            width: u32,
            height: u32,
            color: Color,
        },
        Blit {
            x: i32,
            y: i32,
            width: u32,
            height: u32,
        },
        Text {
            x: i32,
            y: i32,
            color: Color,
            text: String,
        },
        Restore,
        Present,
    }

    pub struct MockSurface {
        width: u32,
        height: u32,
        pub ops: Vec<Op>,
        pub fail_dump: bool,
        pub dump_calls: usize,
    }

    impl MockSurface {
        pub fn new(width: u32, height: u32) -> Self {
            MockSurface {
                width,
                height,
                ops: Vec::new(),
                fail_dump: false,
                dump_calls: 0,
            }
        }

        pub fn failing_dump(width: u32, height: u32) -> Self {
            let mut surface = Self::new(width, height);
            surface.fail_dump = true;
            surface
        }

        pub fn texts(&self) -> Vec<&str> {
            self.ops
                .iter()
                .filter_map(|op| match op {
                    Op::Text { text, .. } => Some(text.as_str()),
                    _ => None,
                })
                .collect()
        }

        pub fn count(&self, pred: impl Fn(&Op) -> bool) -> usize {
            self.ops.iter().filter(|op| pred(op)).count()
        }
    }

    impl Surface for MockSurface {
        fn create(_orientation: Orientation) -> Result<Self, String> {
            Ok(MockSurface::new(DISPLAY_WIDTH, DISPLAY_HEIGHT))
        }

        fn width(&self) -> u32 {
            self.width
        }

        fn height(&self) -> u32 {
            self.height
        }

        fn depth(&self) -> u8 {
            32
        }

        fn fill_rect(
            &mut self,
            x: i32,
            y: i32,
            width: u32,
            height: u32,
            color: Color,
        ) -> Result<(), String> {
            self.ops.push(Op::Fill {
                x,
                y,
                width,
                height,
                color,
            });
            Ok(())
        }

        fn fill_rounded_rect(
            &mut self,
            x: i32,
            y: i32,
            width: u32,
            height: u32,
            color: Color,
        ) -> Result<(), String> {
            self.ops.push(Op::Rounded {
                x,
                y,
                width,
                height,
                color,
            });
            Ok(())
        }

        fn blit(&mut self, x: i32, y: i32, image: &XpmImage) -> Result<(), String> {
            self.ops.push(Op::Blit {
                x,
                y,
                width: image.width(),
                height: image.height(),
            });
            Ok(())
        }

        fn draw_text(&mut self, x: i32, y: i32, color: Color, text: &str) -> Result<(), String> {
            self.ops.push(Op::Text {
                x,
                y,
                color,
                text: text.to_string(),
            });
            Ok(())
        }

        fn dump(&mut self) -> Result<SavedBuffer, String> {
            self.dump_calls += 1;
            if self.fail_dump {
                Err(String::from("dump unavailable"))
            } else {
                Ok(SavedBuffer::from_runs(self.width, self.height, Vec::new()))
            }
        }

        fn restore(&mut self, _saved: &SavedBuffer) -> Result<(), String> {
            self.ops.push(Op::Restore);
            Ok(())
        }

        fn present(&mut self) {
            self.ops.push(Op::Present);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_length_encoding() {
        let w = Color::rgb(255, 255, 255);
        let b = Color::rgb(0, 0, 0);
        let pixels = vec![w, w, b, b, b, w, w, w, w, w, w, b];
        let saved = SavedBuffer::from_pixels(6, 2, &pixels);

        assert_eq!(
            saved.runs(),
            &[
                PixelRun { x: 0, y: 0, len: 2, color: w },
                PixelRun { x: 2, y: 0, len: 3, color: b },
                PixelRun { x: 5, y: 0, len: 1, color: w },
                PixelRun { x: 0, y: 1, len: 5, color: w },
                PixelRun { x: 5, y: 1, len: 1, color: b },
            ]
        );
    }

    #[test]
    fn test_pixels_round_trip_through_runs() {
        let a = Color::rgb(10, 20, 30);
        let b = Color::rgb(40, 50, 60);
        let pixels = vec![a, b, b, a, a, a, b, a, b];
        let saved = SavedBuffer::from_pixels(3, 3, &pixels);
        assert_eq!(saved.to_pixels(), pixels);
    }

    #[test]
    fn test_rounded_inset_zero_in_flat_region() {
        for row in 4..8 {
            assert_eq!(rounded_row_inset(row, 12, 4), 0);
        }
    }

    #[test]
    fn test_rounded_inset_is_symmetric() {
        let height = 20;
        let radius = 6;
        for row in 0..height {
            assert_eq!(
                rounded_row_inset(row, height, radius),
                rounded_row_inset(height - 1 - row, height, radius)
            );
        }
    }

    #[test]
    fn test_rounded_inset_shrinks_toward_flat_region() {
        let insets: Vec<u32> = (0..4).map(|row| rounded_row_inset(row, 12, 4)).collect();
        assert_eq!(insets[0], 4);
        for pair in insets.windows(2) {
            assert!(pair[0] >= pair[1]);
        }
    }

    #[test]
    fn test_zero_radius_has_no_inset() {
        assert_eq!(rounded_row_inset(0, 10, 0), 0);
    }
}
