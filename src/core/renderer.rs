//! Rasterizes a cell grid into a PNG.

use crate::core::encoder::{cell_color, CellGrid, GRID_SIDE};
use crate::utils::error::Result;
use image::{ImageFormat, Rgb, RgbImage};
use std::io::Cursor;

/// Pixels per grid cell in the served image.
pub const DEFAULT_CELL_SIZE: u32 = 8;

/// Paints each assigned cell as a solid square block and serializes the
/// canvas as PNG. The canvas is `GRID_SIDE * cell_size_px` square with a
/// black background.
///
/// The fill is inclusive of the far edge of each block, clipped at the
/// canvas border, and cells are painted in assignment order. This matches
/// the historical rectangle convention the image format was defined with:
/// a painted cell bleeds one pixel into an unpainted neighbor below or to
/// its right. Interior pixels of every block are unaffected.
pub fn render(grid: &CellGrid, cell_size_px: u32) -> Result<Vec<u8>> {
    assert!(cell_size_px > 0, "cell size must be positive");
    let side = GRID_SIDE * cell_size_px;
    let mut canvas = RgbImage::new(side, side);

    for cell in grid.cells() {
        let color = Rgb(cell_color(cell.value));
        let x0 = cell.x * cell_size_px;
        let y0 = cell.y * cell_size_px;
        let x1 = ((cell.x + 1) * cell_size_px).min(side - 1);
        let y1 = ((cell.y + 1) * cell_size_px).min(side - 1);
        for py in y0..=y1 {
            for px in x0..=x1 {
                canvas.put_pixel(px, py, color);
            }
        }
    }

    let mut out = Cursor::new(Vec::new());
    canvas.write_to(&mut out, ImageFormat::Png)?;
    Ok(out.into_inner())
}
