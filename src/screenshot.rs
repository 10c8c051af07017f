//! Screen Dumps
//!
//! Saves a surface snapshot as a binary PPM under the user's home directory,
//! with a timestamped filename. This is a debugging aid wired to a key in
//! the event loop; it reuses the same dump path the background cache uses.

use std::fs;
use std::path::{Path, PathBuf};

use crate::surface::SavedBuffer;

/// Default screenshot directory, `~/.bootmenu/screenshots`.
pub fn default_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".bootmenu").join("screenshots"))
}

/// Writes `buffer` as a PPM file into `dir` and returns the path.
pub fn save_screenshot(buffer: &SavedBuffer, dir: impl AsRef<Path>) -> Result<PathBuf, String> {
    let dir = dir.as_ref();
    fs::create_dir_all(dir).map_err(|e| e.to_string())?;

    let timestamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
    let path = dir.join(format!("bootmenu_{}.ppm", timestamp));

    fs::write(&path, encode_ppm(buffer)).map_err(|e| e.to_string())?;
    println!("Screenshot saved to: {}", path.display());

    Ok(path)
}

/// Rasterizes the snapshot into a binary PPM (P6).
fn encode_ppm(buffer: &SavedBuffer) -> Vec<u8> {
    let pixels = buffer.to_pixels();

    let mut out = format!("P6\n{} {}\n255\n", buffer.width(), buffer.height()).into_bytes();
    out.reserve(pixels.len() * 3);
    for pixel in pixels {
        out.push(pixel.r);
        out.push(pixel.g);
        out.push(pixel.b);
    }
    out
}
