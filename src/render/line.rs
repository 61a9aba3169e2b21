//! DDA line drawing.

use std::ops::RangeInclusive;

use super::framebuffer::FrameBuffer;

/// One DDA walk, endpoints already ordered left to right.
///
/// Positions are accumulated in f64 so endpoints far outside the buffer still
/// land on the right pixels.
struct DdaWalk {
    x0: f64,
    y0: f64,
    x_inc: f64,
    y_inc: f64,
    steps: i64,
}

impl DdaWalk {
    fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        let (x0, y0, x1, y1) = if x0 > x1 {
            (x1, y1, x0, y0)
        } else {
            (x0, y0, x1, y1)
        };

        let dx = x1 as i64 - x0 as i64;
        let dy = y1 as i64 - y0 as i64;
        let steps = dx.abs().max(dy.abs());

        let (x_inc, y_inc) = if steps == 0 {
            (0.0, 0.0)
        } else {
            (dx as f64 / steps as f64, dy as f64 / steps as f64)
        };

        Self {
            x0: x0 as f64,
            y0: y0 as f64,
            x_inc,
            y_inc,
            steps,
        }
    }

    #[inline]
    fn point(&self, i: i64) -> (i32, i32) {
        let x = self.x0 + self.x_inc * i as f64;
        let y = self.y0 + self.y_inc * i as f64;
        (x.round() as i32, y.round() as i32)
    }

    /// Steps whose point can land inside a `width` x `height` grid.
    fn visible_steps(&self, width: u32, height: u32) -> RangeInclusive<i64> {
        let x = axis_steps(self.x0, self.x_inc, width, self.steps);
        let y = axis_steps(self.y0, self.y_inc, height, self.steps);
        match (x, y) {
            (Some((x_lo, x_hi)), Some((y_lo, y_hi))) => x_lo.max(y_lo)..=x_hi.min(y_hi),
            _ => 1..=0,
        }
    }
}

/// Step range where `start + inc * i` stays within `[-1, limit]`, or `None`
/// if it never does. The one pixel of slack on each side covers rounding.
fn axis_steps(start: f64, inc: f64, limit: u32, steps: i64) -> Option<(i64, i64)> {
    let (low, high) = (-1.0, limit as f64);
    if inc == 0.0 {
        return (low..=high).contains(&start).then_some((0, steps));
    }
    let a = (low - start) / inc;
    let b = (high - start) / inc;
    let (first, last) = if a < b { (a, b) } else { (b, a) };
    let first = (first.floor() as i64).max(0);
    let last = (last.ceil() as i64).min(steps);
    (first <= last).then_some((first, last))
}

/// Pixels visited by a DDA line from `(x0, y0)` to `(x1, y1)`, both ends included.
///
/// Endpoints are swapped so the walk always runs left to right, then the
/// longer axis is stepped one pixel at a time while the other accumulates a
/// fractional increment. Yields `max(|dx|, |dy|) + 1` points.
pub fn dda_points(x0: i32, y0: i32, x1: i32, y1: i32) -> impl Iterator<Item = (i32, i32)> {
    let walk = DdaWalk::new(x0, y0, x1, y1);
    (0..=walk.steps).map(move |i| walk.point(i))
}

/// Draws the DDA line into `buffer`. Only the steps that can reach the
/// buffer are walked, so huge off-screen endpoints cost nothing extra.
pub fn draw_line_dda(buffer: &mut FrameBuffer, x0: i32, y0: i32, x1: i32, y1: i32, color: u32) {
    let walk = DdaWalk::new(x0, y0, x1, y1);
    for i in walk.visible_steps(buffer.width(), buffer.height()) {
        let (x, y) = walk.point(i);
        buffer.draw_pixel(x, y, color);
    }
}
