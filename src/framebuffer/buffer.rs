//! The pixel buffer and its byte-level write path.

use alloc::boxed::Box;
use alloc::vec;
use alloc::vec::Vec;

use super::dirty::DirtyRegions;
use crate::config::{ConfigError, DisplayConfig};

/// Two-valued pixel state of a monochrome display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelState {
    Off,
    On,
}

/// Caller-supplied clip predicate. Returns `true` when the pixel at
/// `(x, y)` must be skipped. Applied on top of the geometry bounds
/// check, which always stands — buffer indexing stays in range no
/// matter what the predicate does.
pub type ClipFn = dyn Fn(i32, i32) -> bool;

/// In-memory mirror of the controller RAM.
///
/// The buffer holds `columns * pages` bytes, where each byte packs 8
/// vertically stacked pixels: bit `b` of the byte at `(page, x)` is
/// the pixel at row `page * 8 + b`, column `x`.
///
/// All drawing primitives funnel through [`set_pixel`] or the
/// byte-level helpers, so change detection and dirty recording are
/// uniform across pixels, lines, rectangles, glyphs and bitmaps.
///
/// [`set_pixel`]: FrameBuffer::set_pixel
pub struct FrameBuffer {
    columns: u32,
    rows: u32,
    buf: Vec<u8>,
    dirty: DirtyRegions,
    cursor: (i32, i32),
    pub(crate) line_spacing: i32,
    pub(crate) letter_spacing: i32,
    clip: Option<Box<ClipFn>>,
}

impl FrameBuffer {
    /// Allocate a zeroed buffer for the configured geometry.
    pub fn new(config: &DisplayConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let pages = config.total_pages();
        Ok(Self {
            columns: config.width,
            rows: config.height,
            buf: vec![0; config.width as usize * pages],
            dirty: DirtyRegions::new(pages),
            cursor: (0, 0),
            line_spacing: config.line_spacing,
            letter_spacing: config.letter_spacing,
            clip: None,
        })
    }

    pub fn columns(&self) -> u32 {
        self.columns
    }

    pub fn rows(&self) -> u32 {
        self.rows
    }

    pub fn total_pages(&self) -> usize {
        (self.rows / 8) as usize
    }

    /// Raw buffer contents, page-major.
    pub fn data(&self) -> &[u8] {
        &self.buf
    }

    /// Install (or remove) a clip predicate. Pixels for which the
    /// predicate returns `true` are dropped exactly like out-of-bounds
    /// writes.
    pub fn set_clip(&mut self, clip: Option<Box<ClipFn>>) {
        self.clip = clip;
    }

    /// Move the text cursor.
    pub fn set_cursor(&mut self, x: i32, y: i32) {
        self.cursor = (x, y);
    }

    pub fn cursor(&self) -> (i32, i32) {
        self.cursor
    }

    /// True when `(x, y)` must not be drawn.
    pub(crate) fn clipped(&self, x: i32, y: i32) -> bool {
        if x < 0 || y < 0 || x >= self.columns as i32 || y >= self.rows as i32 {
            return true;
        }
        match &self.clip {
            Some(clip) => clip(x, y),
            None => false,
        }
    }

    /// Column-only clip used by the blitter to reject whole source
    /// columns before scanning their rows.
    pub(crate) fn column_clipped(&self, x: i32) -> bool {
        x < 0 || x >= self.columns as i32
    }

    /// Write one pixel. Out-of-bounds or predicate-clipped coordinates
    /// are dropped silently; nothing is recorded dirty unless the
    /// stored byte actually changes.
    pub fn set_pixel(&mut self, x: i32, y: i32, state: PixelState) {
        if self.clipped(x, y) {
            return;
        }
        let page = (y / 8) as usize;
        let mask = 1u8 << (y % 8);
        let index = x as usize + self.columns as usize * page;
        let current = self.buf[index];
        let next = match state {
            PixelState::On => current | mask,
            PixelState::Off => current & !mask,
        };
        if next != current {
            self.buf[index] = next;
            self.dirty.record(page, x as u16, next);
        }
    }

    /// Fill the whole buffer with zero.
    ///
    /// Deliberately leaves [`DirtyRegions`] untouched: a clear only
    /// reaches the device after an explicit
    /// [`send_buffer`](crate::Display::send_buffer).
    pub fn clear(&mut self) {
        self.buf.fill(0);
    }

    /// Changed-byte records accumulated since the last sync.
    pub fn dirty(&self) -> &DirtyRegions {
        &self.dirty
    }

    pub(crate) fn dirty_mut(&mut self) -> &mut DirtyRegions {
        &mut self.dirty
    }

    /// Stored byte at `(page, column)`. Caller guarantees range.
    pub(crate) fn read_byte(&self, page: usize, column: u16) -> u8 {
        self.buf[column as usize + self.columns as usize * page]
    }

    /// Store `value` at `(page, column)`, recording it dirty when it
    /// differs from the current byte. The blitter uses this to flush
    /// one batched byte per column per page.
    pub(crate) fn write_byte(&mut self, page: usize, column: u16, value: u8) {
        let index = column as usize + self.columns as usize * page;
        if self.buf[index] != value {
            self.buf[index] = value;
            self.dirty.record(page, column, value);
        }
    }

    /// Buffer bytes of `page` covering columns `first..=last`.
    pub(crate) fn page_slice(&self, page: usize, first: u16, last: u16) -> &[u8] {
        let base = self.columns as usize * page;
        &self.buf[base + first as usize..=base + last as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::boxed::Box;

    fn frame() -> FrameBuffer {
        FrameBuffer::new(&DisplayConfig::new(128, 64)).unwrap()
    }

    #[test]
    fn buffer_is_sized_to_pages_not_rows() {
        let fb = frame();
        assert_eq!(fb.data().len(), 128 * 8);
    }

    #[test]
    fn set_pixel_touches_exactly_one_bit() {
        let mut fb = frame();
        fb.set_pixel(3, 10, PixelState::On);
        // Row 10 lives in page 1, bit 2.
        assert_eq!(fb.read_byte(1, 3), 0b0000_0100);

        fb.set_pixel(3, 12, PixelState::On);
        assert_eq!(fb.read_byte(1, 3), 0b0001_0100);

        fb.set_pixel(3, 10, PixelState::Off);
        assert_eq!(fb.read_byte(1, 3), 0b0001_0000);
    }

    #[test]
    fn out_of_bounds_writes_leave_everything_unchanged() {
        let mut fb = frame();
        for (x, y) in [(-1, 0), (0, -1), (128, 0), (0, 64), (500, 500)] {
            fb.set_pixel(x, y, PixelState::On);
        }
        assert!(fb.data().iter().all(|&b| b == 0));
        assert!(fb.dirty().is_empty());
    }

    #[test]
    fn clip_predicate_rejects_like_bounds() {
        let mut fb = frame();
        fb.set_clip(Some(Box::new(|x, _| x >= 10)));
        fb.set_pixel(9, 0, PixelState::On);
        fb.set_pixel(10, 0, PixelState::On);
        assert_eq!(fb.read_byte(0, 9), 1);
        assert_eq!(fb.read_byte(0, 10), 0);
        assert_eq!(fb.dirty().columns(0).count(), 1);

        fb.set_clip(None);
        fb.set_pixel(10, 0, PixelState::On);
        assert_eq!(fb.read_byte(0, 10), 1);
    }

    #[test]
    fn unchanged_writes_record_nothing() {
        let mut fb = frame();
        fb.set_pixel(5, 5, PixelState::Off);
        assert!(fb.dirty().is_empty());

        fb.set_pixel(5, 5, PixelState::On);
        assert!(!fb.dirty().is_empty());
    }

    #[test]
    fn clear_does_not_mark_dirty() {
        let mut fb = frame();
        fb.set_pixel(1, 1, PixelState::On);
        let before: usize = (0..fb.total_pages())
            .map(|p| fb.dirty().columns(p).count())
            .sum();
        fb.clear();
        let after: usize = (0..fb.total_pages())
            .map(|p| fb.dirty().columns(p).count())
            .sum();
        assert!(fb.data().iter().all(|&b| b == 0));
        // Clearing wipes the buffer but the dirty set is untouched.
        assert_eq!(before, after);
    }

    #[test]
    fn construction_rejects_bad_geometry() {
        assert!(FrameBuffer::new(&DisplayConfig::new(128, 60)).is_err());
    }
}
