//! Cursor-driven text layout with word-wrap.

use alloc::vec::Vec;

use super::font::GlyphMap;
use crate::framebuffer::{FrameBuffer, PixelState};

impl FrameBuffer {
    /// Render `text` at the cursor using `glyphs`, advancing the
    /// cursor as it goes.
    ///
    /// The string is split on single spaces; every word but the last
    /// keeps its trailing space (empty words from consecutive spaces
    /// included), so original spacing is preserved. With `wrap`
    /// enabled a word whose worst-case width would run past the right
    /// edge triggers a line break before the word is drawn, and a
    /// break is also forced once the cursor column reaches
    /// `width - glyph_width` mid-word.
    ///
    /// `'\n'` always breaks the line without drawing. Characters with
    /// no glyph in the map are skipped without advancing the cursor.
    /// For opaque glyph maps the spacing gutters below and to the
    /// right of each glyph are erased, so redrawn text does not leave
    /// stale pixels between lines or letters.
    pub fn draw_string(&mut self, text: &str, glyphs: &GlyphMap, wrap: bool) {
        let glyph_width = glyphs.glyph_width() as i32;
        let glyph_height = glyphs.glyph_height() as i32;
        let width = self.columns() as i32;

        let parts: Vec<&str> = text.split(' ').collect();
        let last = parts.len() - 1;

        for (i, part) in parts.iter().enumerate() {
            let trailing_space = i < last;
            let word_len = part.chars().count() as i32 + i32::from(trailing_space);

            let (column, _) = self.cursor();
            if wrap && column != 0 && column + glyph_width * word_len > width {
                self.line_break(glyph_height);
            }

            for ch in part.chars().chain(trailing_space.then_some(' ')) {
                self.draw_char(ch, glyphs, wrap);
            }
        }
    }

    fn draw_char(&mut self, ch: char, glyphs: &GlyphMap, wrap: bool) {
        let glyph_width = glyphs.glyph_width() as i32;
        let glyph_height = glyphs.glyph_height() as i32;

        if ch == '\n' {
            self.line_break(glyph_height);
            return;
        }
        let Some(image) = glyphs.get(ch) else {
            // Unmapped characters are dropped without moving the cursor.
            return;
        };

        let (x, y) = self.cursor();
        self.draw_image(x, y, image);

        if !glyphs.is_transparent() {
            // Erase the spacing gutters so stale pixels from earlier
            // draws cannot survive between glyphs.
            self.fill_rect(x, y + glyph_height, glyph_width, self.line_spacing, PixelState::Off);
            self.fill_rect(x + glyph_width, y, self.letter_spacing, glyph_height, PixelState::Off);
        }

        self.set_cursor(x + glyph_width + self.letter_spacing, y);
        if wrap && self.cursor().0 >= self.columns() as i32 - glyph_width {
            self.line_break(glyph_height);
        }
    }

    fn line_break(&mut self, glyph_height: i32) {
        let (_, y) = self.cursor();
        self.set_cursor(0, y + glyph_height + self.line_spacing);
    }
}
