//! Built-in packed fonts.
//!
//! [`FONT_5X7`] is the classic 5x7 cell covering digits, basic
//! punctuation and the latin alphabet. Glyphs are packed column-major,
//! one byte per column, bit 0 = top row; bit 7 is cell filler and is
//! discarded by the rasterizer.

use crate::graphics::font::Font;

#[rustfmt::skip]
const FONT_5X7_DATA: [u8; 365] = [
    0x00, 0x00, 0x00, 0x00, 0x00, // ' '
    0x08, 0x08, 0x08, 0x08, 0x08, // '-'
    0x00, 0x60, 0x60, 0x00, 0x00, // '.'
    0x00, 0x80, 0x60, 0x00, 0x00, // ','
    0x00, 0x36, 0x36, 0x00, 0x00, // ':'
    0x00, 0x80, 0x66, 0x00, 0x00, // ';'
    0x20, 0x10, 0x08, 0x04, 0x02, // '/'
    0x08, 0x14, 0x22, 0x41, 0x00, // '<'
    0x00, 0x41, 0x22, 0x14, 0x08, // '>'
    0x00, 0x7F, 0x41, 0x41, 0x00, // '['
    0x00, 0x41, 0x41, 0x7F, 0x00, // ']'
    0x3E, 0x51, 0x49, 0x45, 0x3E, // '0'
    0x00, 0x42, 0x7F, 0x40, 0x00, // '1'
    0x42, 0x61, 0x51, 0x49, 0x46, // '2'
    0x21, 0x41, 0x45, 0x4B, 0x31, // '3'
    0x18, 0x14, 0x12, 0x7F, 0x10, // '4'
    0x27, 0x45, 0x45, 0x45, 0x39, // '5'
    0x3C, 0x4A, 0x49, 0x49, 0x30, // '6'
    0x01, 0x71, 0x09, 0x05, 0x03, // '7'
    0x36, 0x49, 0x49, 0x49, 0x36, // '8'
    0x06, 0x49, 0x49, 0x29, 0x1E, // '9'
    0x7E, 0x11, 0x11, 0x11, 0x7E, // 'A'
    0x7F, 0x49, 0x49, 0x49, 0x36, // 'B'
    0x3E, 0x41, 0x41, 0x41, 0x22, // 'C'
    0x7F, 0x41, 0x41, 0x22, 0x1C, // 'D'
    0x7F, 0x49, 0x49, 0x49, 0x41, // 'E'
    0x7F, 0x09, 0x09, 0x09, 0x01, // 'F'
    0x3E, 0x41, 0x49, 0x49, 0x7A, // 'G'
    0x7F, 0x08, 0x08, 0x08, 0x7F, // 'H'
    0x00, 0x41, 0x7F, 0x41, 0x00, // 'I'
    0x20, 0x40, 0x41, 0x3F, 0x01, // 'J'
    0x7F, 0x08, 0x14, 0x22, 0x41, // 'K'
    0x7F, 0x40, 0x40, 0x40, 0x40, // 'L'
    0x7F, 0x02, 0x0C, 0x02, 0x7F, // 'M'
    0x7F, 0x04, 0x08, 0x10, 0x7F, // 'N'
    0x3E, 0x41, 0x41, 0x41, 0x3E, // 'O'
    0x7F, 0x09, 0x09, 0x09, 0x06, // 'P'
    0x3E, 0x41, 0x51, 0x21, 0x5E, // 'Q'
    0x7F, 0x09, 0x19, 0x29, 0x46, // 'R'
    0x46, 0x49, 0x49, 0x49, 0x31, // 'S'
    0x01, 0x01, 0x7F, 0x01, 0x01, // 'T'
    0x3F, 0x40, 0x40, 0x40, 0x3F, // 'U'
    0x1F, 0x20, 0x40, 0x20, 0x1F, // 'V'
    0x7F, 0x20, 0x18, 0x20, 0x7F, // 'W'
    0x63, 0x14, 0x08, 0x14, 0x63, // 'X'
    0x03, 0x04, 0x78, 0x04, 0x03, // 'Y'
    0x61, 0x51, 0x49, 0x45, 0x43, // 'Z'
    0x20, 0x54, 0x54, 0x54, 0x78, // 'a'
    0x7F, 0x48, 0x44, 0x44, 0x38, // 'b'
    0x38, 0x44, 0x44, 0x44, 0x20, // 'c'
    0x38, 0x44, 0x44, 0x48, 0x7F, // 'd'
    0x38, 0x54, 0x54, 0x54, 0x18, // 'e'
    0x08, 0x7E, 0x09, 0x01, 0x02, // 'f'
    0x08, 0x14, 0x54, 0x54, 0x3C, // 'g'
    0x7F, 0x08, 0x04, 0x04, 0x78, // 'h'
    0x00, 0x44, 0x7D, 0x40, 0x00, // 'i'
    0x20, 0x40, 0x44, 0x3D, 0x00, // 'j'
    0x7F, 0x10, 0x28, 0x44, 0x00, // 'k'
    0x00, 0x41, 0x7F, 0x40, 0x00, // 'l'
    0x7C, 0x04, 0x18, 0x04, 0x78, // 'm'
    0x7C, 0x08, 0x04, 0x04, 0x78, // 'n'
    0x38, 0x44, 0x44, 0x44, 0x38, // 'o'
    0x7C, 0x14, 0x14, 0x14, 0x08, // 'p'
    0x08, 0x14, 0x14, 0x18, 0x7C, // 'q'
    0x7C, 0x08, 0x04, 0x04, 0x08, // 'r'
    0x48, 0x54, 0x54, 0x54, 0x20, // 's'
    0x04, 0x3F, 0x44, 0x40, 0x20, // 't'
    0x3C, 0x40, 0x40, 0x20, 0x7C, // 'u'
    0x1C, 0x20, 0x40, 0x20, 0x1C, // 'v'
    0x3C, 0x40, 0x30, 0x40, 0x3C, // 'w'
    0x44, 0x28, 0x10, 0x28, 0x44, // 'x'
    0x0C, 0x50, 0x50, 0x50, 0x3C, // 'y'
    0x44, 0x64, 0x54, 0x4C, 0x44, // 'z'
];

#[rustfmt::skip]
const FONT_5X7_LOOKUP: [(char, usize); 73] = [
    (' ', 0), ('-', 5), ('.', 10), (',', 15), (':', 20), (';', 25),
    ('/', 30), ('<', 35), ('>', 40), ('[', 45), (']', 50),
    ('0', 55), ('1', 60), ('2', 65), ('3', 70), ('4', 75),
    ('5', 80), ('6', 85), ('7', 90), ('8', 95), ('9', 100),
    ('A', 105), ('B', 110), ('C', 115), ('D', 120), ('E', 125),
    ('F', 130), ('G', 135), ('H', 140), ('I', 145), ('J', 150),
    ('K', 155), ('L', 160), ('M', 165), ('N', 170), ('O', 175),
    ('P', 180), ('Q', 185), ('R', 190), ('S', 195), ('T', 200),
    ('U', 205), ('V', 210), ('W', 215), ('X', 220), ('Y', 225),
    ('Z', 230),
    ('a', 235), ('b', 240), ('c', 245), ('d', 250), ('e', 255),
    ('f', 260), ('g', 265), ('h', 270), ('i', 275), ('j', 280),
    ('k', 285), ('l', 290), ('m', 295), ('n', 300), ('o', 305),
    ('p', 310), ('q', 315), ('r', 320), ('s', 325), ('t', 330),
    ('u', 335), ('v', 340), ('w', 345), ('x', 350), ('y', 355),
    ('z', 360),
];

/// 5x7 latin font.
pub const FONT_5X7: Font<'static> = Font::new(5, 7, &FONT_5X7_LOOKUP, &FONT_5X7_DATA);
