//! `embedded-graphics` integration.
//!
//! [`FrameBuffer`] implements [`DrawTarget`] over [`BinaryColor`], so
//! the whole embedded-graphics primitive and text ecosystem can render
//! into the buffer. Dirty tracking and clipping apply exactly as with
//! the native primitives.

use embedded_graphics_core::pixelcolor::BinaryColor;
use embedded_graphics_core::prelude::*;

use crate::framebuffer::{FrameBuffer, PixelState};

impl DrawTarget for FrameBuffer {
    type Color = BinaryColor;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            let state = match color {
                BinaryColor::On => PixelState::On,
                BinaryColor::Off => PixelState::Off,
            };
            self.set_pixel(point.x, point.y, state);
        }
        Ok(())
    }
}

impl OriginDimensions for FrameBuffer {
    fn size(&self) -> Size {
        Size::new(self.columns(), self.rows())
    }
}
