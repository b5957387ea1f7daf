//! Line and rectangle rasterization.

use libm::roundf;

use crate::framebuffer::{FrameBuffer, PixelState};

impl FrameBuffer {
    /// Draw a line from `(x0, y0)` to `(x1, y1)` using the integer
    /// Bresenham algorithm. Endpoints are rounded to the nearest
    /// integer first; every emitted point goes through
    /// [`set_pixel`](FrameBuffer::set_pixel) and inherits its clipping.
    ///
    /// Traversal direction follows the argument order, so swapping the
    /// endpoints may rasterize a slightly different set of pixels.
    pub fn draw_line(&mut self, x0: f32, y0: f32, x1: f32, y1: f32, state: PixelState) {
        let mut x0 = roundf(x0) as i32;
        let mut y0 = roundf(y0) as i32;
        let x1 = roundf(x1) as i32;
        let y1 = roundf(y1) as i32;

        let dx = (x1 - x0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let dy = (y1 - y0).abs();
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = if dx > dy { dx } else { -dy } / 2;

        loop {
            self.set_pixel(x0, y0, state);
            if x0 == x1 && y0 == y1 {
                break;
            }
            let e2 = err;
            if e2 > -dx {
                err -= dy;
                x0 += sx;
            }
            if e2 < dy {
                err += dx;
                y0 += sy;
            }
        }
    }

    /// Fill a `w` x `h` rectangle with `state`, one vertical line per
    /// column. Non-positive `w` or `h` draws nothing.
    pub fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, state: PixelState) {
        if w <= 0 || h <= 0 {
            return;
        }
        for i in 0..w {
            let col = (x + i) as f32;
            self.draw_line(col, y as f32, col, (y + h - 1) as f32, state);
        }
    }

    /// Outline a rectangle with four lines.
    pub fn draw_rect(&mut self, x: i32, y: i32, w: i32, h: i32, state: PixelState) {
        if w <= 0 || h <= 0 {
            return;
        }
        let (x0, y0) = (x as f32, y as f32);
        let (x1, y1) = ((x + w - 1) as f32, (y + h - 1) as f32);
        self.draw_line(x0, y0, x1, y0, state);
        self.draw_line(x1, y0, x1, y1, state);
        self.draw_line(x1, y1, x0, y1, state);
        self.draw_line(x0, y1, x0, y0, state);
    }
}
