//! Bitmap images and the page-batched blitter.

use core::fmt;

use alloc::vec::Vec;

use crate::framebuffer::FrameBuffer;

/// A row-major, interleaved bitmap.
///
/// `channels` selects the binarization and transparency rules applied
/// by [`FrameBuffer::draw_image`]:
///
/// - 1 channel: the sample byte itself, zero = off
/// - 2 channels: value + alpha; alpha zero skips the pixel
/// - 3 channels: on when any of the three bytes is nonzero
/// - 4 channels: like 3, with a trailing alpha plane
///
/// Glyph images produced by the font rasterizer use the 1- and
/// 2-channel forms; decoded bitmaps typically arrive as 3 or 4
/// channels. The blitter treats both identically.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    pub width: u32,
    pub height: u32,
    pub channels: u8,
    pub data: Vec<u8>,
}

impl Image {
    /// Build an image, checking that `data` holds exactly
    /// `width * height * channels` bytes.
    pub fn new(width: u32, height: u32, channels: u8, data: Vec<u8>) -> Result<Self, ImageError> {
        if !(1..=4).contains(&channels) {
            return Err(ImageError::BadChannelCount(channels));
        }
        let expected = width as usize * height as usize * channels as usize;
        if data.len() != expected {
            return Err(ImageError::SizeMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            channels,
            data,
        })
    }

    /// Whether the trailing channel is a transparency plane.
    pub fn has_alpha(&self) -> bool {
        self.channels == 2 || self.channels == 4
    }

    /// Sample at `(x, y)`: `(on, skip)` after binarization and the
    /// alpha check. Caller guarantees range.
    fn sample(&self, x: u32, y: u32) -> (bool, bool) {
        let ch = self.channels as usize;
        let base = (y as usize * self.width as usize + x as usize) * ch;
        let px = &self.data[base..base + ch];
        if self.has_alpha() && px[ch - 1] == 0 {
            return (false, true);
        }
        let on = if ch < 3 {
            px[0] != 0
        } else {
            px[0] != 0 || px[1] != 0 || px[2] != 0
        };
        (on, false)
    }
}

/// Malformed image input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageError {
    BadChannelCount(u8),
    SizeMismatch { expected: usize, actual: usize },
}

impl fmt::Display for ImageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BadChannelCount(c) => write!(f, "unsupported channel count {}", c),
            Self::SizeMismatch { expected, actual } => {
                write!(f, "image data holds {} bytes, expected {}", actual, expected)
            }
        }
    }
}

impl FrameBuffer {
    /// Blit `image` with its top-left corner at `(dx, dy)`.
    ///
    /// The source is scanned column by column; within a column, writes
    /// are batched per destination byte: the working byte is read when
    /// a page is first entered and flushed back (with dirty recording)
    /// only when the scan advances to the next page or the column
    /// ends. Transparent pixels neither set nor clear their bit.
    pub fn draw_image(&mut self, dx: i32, dy: i32, image: &Image) {
        for x in 0..image.width as i32 {
            let tx = dx + x;
            if self.column_clipped(tx) {
                continue;
            }

            let mut current_page: Option<usize> = None;
            let mut working = 0u8;

            for y in 0..image.height as i32 {
                let ty = dy + y;
                if self.clipped(tx, ty) {
                    continue;
                }
                let page = (ty / 8) as usize;
                if current_page != Some(page) {
                    if let Some(prev) = current_page {
                        self.write_byte(prev, tx as u16, working);
                    }
                    working = self.read_byte(page, tx as u16);
                    current_page = Some(page);
                }

                let (on, skip) = image.sample(x as u32, y as u32);
                if skip {
                    continue;
                }
                let mask = 1u8 << (ty % 8);
                if on {
                    working |= mask;
                } else {
                    working &= !mask;
                }
            }

            if let Some(page) = current_page {
                self.write_byte(page, tx as u16, working);
            }
        }
    }
}
