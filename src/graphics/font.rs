//! Packed bitmap fonts and glyph rasterization.
//!
//! A font stores every glyph as `ceil(height / 8)` byte-pages of
//! `width` bytes each, column-major: one byte per column per page,
//! bit `b` = row `page * 8 + b` within the glyph. Rasterization
//! unpacks that layout into row-major [`Image`]s so glyphs flow
//! through the same blitter as any other bitmap.

use alloc::collections::BTreeMap;
use alloc::vec::Vec;

use super::image::Image;

/// A fixed-cell packed bitmap font.
///
/// `lookup` maps characters to byte offsets into `data`; characters
/// absent from the lookup simply have no glyph.
#[derive(Debug, Clone, Copy)]
pub struct Font<'a> {
    width: u32,
    height: u32,
    lookup: &'a [(char, usize)],
    data: &'a [u8],
}

impl<'a> Font<'a> {
    pub const fn new(width: u32, height: u32, lookup: &'a [(char, usize)], data: &'a [u8]) -> Self {
        Self {
            width,
            height,
            lookup,
            data,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Byte-pages per glyph.
    fn pages_per_glyph(&self) -> usize {
        (self.height as usize).div_ceil(8)
    }

    /// Rasterize every glyph into an image map.
    ///
    /// The packed cell is `pages * 8` rows tall, which can exceed the
    /// nominal glyph height; the excess filler rows live at the bottom
    /// of the top page and are discarded so the output rows align
    /// exactly with the glyph height.
    ///
    /// With `transparent` set, glyphs get a second channel holding
    /// `0xFF` for set pixels and `0x00` otherwise, so blitting them
    /// leaves background pixels untouched. Opaque glyphs overwrite
    /// their whole cell.
    ///
    /// This is a pure function of the font definition: identical fonts
    /// produce byte-identical maps.
    pub fn glyph_map(&self, transparent: bool) -> GlyphMap {
        let pages = self.pages_per_glyph();
        let glyph_bytes = pages * self.width as usize;
        let pad_bits = (pages * 8) % self.height as usize;
        let rows = pages * 8 - pad_bits;
        let channels: u8 = if transparent { 2 } else { 1 };

        let mut glyphs = BTreeMap::new();
        for &(ch, offset) in self.lookup {
            let Some(packed) = self.data.get(offset..offset + glyph_bytes) else {
                continue;
            };
            let mut data = Vec::with_capacity(rows * self.width as usize * channels as usize);
            for page in 0..pages {
                for bit in 0..8 {
                    if page == 0 && pad_bits != 0 && bit >= 8 - pad_bits {
                        continue;
                    }
                    for column in 0..self.width as usize {
                        let value = (packed[page * self.width as usize + column] >> bit) & 1;
                        data.push(value);
                        if transparent {
                            data.push(if value != 0 { 0xFF } else { 0x00 });
                        }
                    }
                }
            }
            // Length is rows * width * channels by construction.
            if let Ok(image) = Image::new(self.width, rows as u32, channels, data) {
                glyphs.insert(ch, image);
            }
        }

        GlyphMap {
            glyph_width: self.width,
            glyph_height: rows as u32,
            transparent,
            glyphs,
        }
    }
}

/// Rasterized glyphs of one font, keyed by character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlyphMap {
    glyph_width: u32,
    glyph_height: u32,
    transparent: bool,
    glyphs: BTreeMap<char, Image>,
}

impl GlyphMap {
    pub fn glyph_width(&self) -> u32 {
        self.glyph_width
    }

    pub fn glyph_height(&self) -> u32 {
        self.glyph_height
    }

    pub fn is_transparent(&self) -> bool {
        self.transparent
    }

    pub fn get(&self, ch: char) -> Option<&Image> {
        self.glyphs.get(&ch)
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // A 2x7 font with two glyphs packed into one page each.
    // Column bytes use bit 0 as the top row; bit 7 is cell filler.
    const LOOKUP: [(char, usize); 2] = [('|', 0), ('.', 2)];
    const DATA: [u8; 4] = [
        0b0111_1111, // '|' left column: all 7 rows set (plus filler bit 7)
        0b0000_0000, // '|' right column: empty
        0b1000_0000, // '.' left column: only the filler row set
        0b1100_0000, // '.' right column: row 6 set (and filler)
    ];
    const FONT: Font<'static> = Font::new(2, 7, &LOOKUP, &DATA);

    #[test]
    fn glyphs_drop_top_page_filler_rows() {
        let map = FONT.glyph_map(false);
        assert_eq!(map.glyph_height(), 7);
        let bar = map.get('|').unwrap();
        assert_eq!(bar.height, 7);
        assert_eq!(bar.channels, 1);
        // Left column on in every surviving row; filler bit 7 gone.
        assert_eq!(bar.data.len(), 14);
        for row in 0..7 {
            assert_eq!(bar.data[row * 2], 1, "row {}", row);
            assert_eq!(bar.data[row * 2 + 1], 0);
        }

        let dot = map.get('.').unwrap();
        // Only (1, 6) survives: bit 6 of the right column.
        let mut set: alloc::vec::Vec<usize> = dot
            .data
            .iter()
            .enumerate()
            .filter(|(_, &v)| v != 0)
            .map(|(i, _)| i)
            .collect();
        set.sort_unstable();
        assert_eq!(set, [13]);
    }

    #[test]
    fn transparent_map_carries_alpha_plane() {
        let map = FONT.glyph_map(true);
        assert!(map.is_transparent());
        let bar = map.get('|').unwrap();
        assert_eq!(bar.channels, 2);
        assert_eq!(bar.data.len(), 28);
        // (0, 0) is set: value 1, alpha 0xFF.
        assert_eq!(&bar.data[0..2], &[1, 0xFF]);
        // (1, 0) is clear: value 0, alpha 0x00.
        assert_eq!(&bar.data[2..4], &[0, 0x00]);
    }

    #[test]
    fn rasterization_is_pure() {
        assert_eq!(FONT.glyph_map(false), FONT.glyph_map(false));
        assert_eq!(FONT.glyph_map(true), FONT.glyph_map(true));
    }

    #[test]
    fn missing_characters_have_no_glyph() {
        let map = FONT.glyph_map(false);
        assert!(map.get('x').is_none());
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn page_exact_heights_keep_all_rows() {
        // height 8 -> one page, no filler.
        const LOOKUP8: [(char, usize); 1] = [('#', 0)];
        const DATA8: [u8; 1] = [0xFF];
        let font = Font::new(1, 8, &LOOKUP8, &DATA8);
        let map = font.glyph_map(false);
        assert_eq!(map.glyph_height(), 8);
        assert_eq!(map.get('#').unwrap().data.len(), 8);
    }
}
