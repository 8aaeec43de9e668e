//! Paint layouts onto pixel surfaces.

use crate::fixtures::MazeLayout;
use micromaze_core::{Direction, GridCoord};
use micromaze_sense::PixelSurface;

/// Cell edge length used by most fixtures.
pub const DEFAULT_CELL_PX: u32 = 20;

/// Walls are drawn `2 * half_thickness` pixels wide, centred on the cell
/// boundary.
pub const DEFAULT_HALF_THICKNESS: u32 = 2;

/// Draw `layout` as white walls on a black three-channel surface.
///
/// Each cell is `cell_px` square. The border is drawn `half_thickness` wide
/// along the surface edges; interior walls straddle their boundary line and
/// extend past the corner posts so adjacent walls join up.
///
/// Rays cast from cell centers rediscover the layout exactly as long as
/// `half_thickness + 3 < cell_px / 2`.
pub fn render_surface(layout: &MazeLayout, cell_px: u32, half_thickness: u32) -> PixelSurface {
    let (w, h) = (layout.width() * cell_px, layout.height() * cell_px);
    let mut s = match PixelSurface::blank(w, h, 3) {
        Ok(s) => s,
        Err(e) => panic!("cannot render a {w}x{h} surface: {e}"),
    };
    let t = half_thickness;

    // Border.
    s.fill_rect(0, 0, w, t, 255);
    s.fill_rect(0, h.saturating_sub(t), w, t, 255);
    s.fill_rect(0, 0, t, h, 255);
    s.fill_rect(w.saturating_sub(t), 0, t, h, 255);

    for y in 0..layout.height() as i32 {
        for x in 0..layout.width() as i32 {
            let cell = GridCoord::new(x, y);
            let (px, py) = (x as u32 * cell_px, y as u32 * cell_px);
            if x + 1 < layout.width() as i32 && layout.has_wall(cell, Direction::Right) {
                let bx = px + cell_px;
                s.fill_rect(bx - t, py.saturating_sub(t), 2 * t, cell_px + 2 * t, 255);
            }
            if y + 1 < layout.height() as i32 && layout.has_wall(cell, Direction::Down) {
                let by = py + cell_px;
                s.fill_rect(px.saturating_sub(t), by - t, cell_px + 2 * t, 2 * t, 255);
            }
        }
    }
    s
}
