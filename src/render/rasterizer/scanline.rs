use super::super::framebuffer::FrameBuffer;
use crate::math::vec2::Vec2;

/// Fills a screen-space triangle row by row.
///
/// The points are sorted top to bottom, and the long edge (top to bottom
/// vertex) is cut at the middle vertex's row. That gives an upper part that
/// ends on the middle row and a lower part that starts there; each is walked
/// scanline by scanline between its two edges. A part whose two ends share a
/// row has zero height and is skipped.
pub fn fill_triangle(points: &[Vec2; 3], buffer: &mut FrameBuffer, color: u32) {
    let mut sorted = points.map(|p| p.to_i32());
    sorted.sort_by_key(|&(_, y)| y);
    let [(x0, y0), (x1, y1), (x2, y2)] = sorted;

    if y0 == y2 {
        return;
    }

    let long_slope = slope((x0, y0), (x2, y2));
    // Where the long edge crosses the middle vertex's row
    let mid_x = x0 as f32 + long_slope * (y1 as f32 - y0 as f32);
    let middle_is_left = (x1 as f32) < mid_x;

    if y0 != y1 {
        let short_slope = slope((x0, y0), (x1, y1));
        let (left_slope, right_slope) = if middle_is_left {
            (short_slope, long_slope)
        } else {
            (long_slope, short_slope)
        };
        for y in visible_rows(y0, y1, buffer) {
            let dy = y as f32 - y0 as f32;
            let x_start = x0 as f32 + left_slope * dy;
            let x_end = x0 as f32 + right_slope * dy;
            buffer.fill_span(y, x_start.round() as i32, x_end.round() as i32, color);
        }
    }

    if y1 != y2 {
        let short_slope = slope((x1, y1), (x2, y2));
        let ((left_x, left_slope), (right_x, right_slope)) = if middle_is_left {
            ((x1 as f32, short_slope), (mid_x, long_slope))
        } else {
            ((mid_x, long_slope), (x1 as f32, short_slope))
        };
        for y in visible_rows(y1, y2, buffer) {
            let dy = y as f32 - y1 as f32;
            let x_start = left_x + left_slope * dy;
            let x_end = right_x + right_slope * dy;
            buffer.fill_span(y, x_start.round() as i32, x_end.round() as i32, color);
        }
    }
}

/// Inverse slope `Δx/Δy` of an edge. Computed in f32 so far off-screen
/// points cannot overflow.
#[inline]
fn slope(from: (i32, i32), to: (i32, i32)) -> f32 {
    (to.0 as f32 - from.0 as f32) / (to.1 as f32 - from.1 as f32)
}

/// Rows `top..=bottom` that actually land on the buffer.
#[inline]
fn visible_rows(top: i32, bottom: i32, buffer: &FrameBuffer) -> std::ops::RangeInclusive<i32> {
    top.max(0)..=bottom.min(buffer.height() as i32 - 1)
}
