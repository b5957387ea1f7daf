//! Controller command opcodes.
//!
//! These values are wire-exact for the SH1106 command set. Commands
//! marked "two-byte" are followed by one argument byte on the bus.

/// Column address, low nibble. OR with `column & 0x0F`.
pub const COLUMN_LOW: u8 = 0x00;
/// Column address, high nibble. OR with `column >> 4`.
pub const COLUMN_HIGH: u8 = 0x10;
/// Contrast set (two-byte).
pub const CONTRAST: u8 = 0x81;
/// Segment remap, normal column order.
pub const SEGMENT_REMAP: u8 = 0xA0;
/// Resume rendering from RAM contents.
pub const ALL_PIXELS_RESUME: u8 = 0xA4;
/// Force every pixel on regardless of RAM.
pub const ALL_PIXELS_ON: u8 = 0xA5;
/// Normal polarity: RAM bit 1 lights the pixel.
pub const DISPLAY_NORMAL: u8 = 0xA6;
/// Inverted polarity.
pub const DISPLAY_INVERTED: u8 = 0xA7;
/// Multiplex ratio (two-byte).
pub const MULTIPLEX_RATIO: u8 = 0xA8;
/// Display off (sleep).
pub const DISPLAY_OFF: u8 = 0xAE;
/// Display on.
pub const DISPLAY_ON: u8 = 0xAF;
/// Page address select. OR with page index 0-7.
pub const PAGE_ADDRESS: u8 = 0xB0;
/// Display start-line offset (two-byte).
pub const DISPLAY_OFFSET: u8 = 0xD3;
/// Oscillator frequency / clock divide ratio (two-byte).
pub const CLOCK_RATIO: u8 = 0xD5;
/// Dis-/pre-charge period (two-byte).
pub const CHARGE_PERIOD: u8 = 0xD9;
/// Common pads hardware configuration (two-byte).
pub const COMMON_PADS: u8 = 0xDA;
/// VCOM deselect level (two-byte).
pub const VCOM_LEVEL: u8 = 0xDB;

/// Column-select low-nibble command for `column`.
pub fn column_low(column: u8) -> u8 {
    COLUMN_LOW | (column & 0x0F)
}

/// Column-select high-nibble command for `column`.
pub fn column_high(column: u8) -> u8 {
    COLUMN_HIGH | (column >> 4)
}

/// Page-select command for `page` (0-7).
pub fn page_address(page: u8) -> u8 {
    PAGE_ADDRESS | (page & 0x07)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn column_nibbles_cover_full_range() {
        assert_eq!(column_low(0x00), 0x00);
        assert_eq!(column_high(0x00), 0x10);
        assert_eq!(column_low(0x7B), 0x0B);
        assert_eq!(column_high(0x7B), 0x17);
        assert_eq!(column_low(0xFF), 0x0F);
        assert_eq!(column_high(0xFF), 0x1F);
    }

    #[test]
    fn page_select_ors_page_index() {
        assert_eq!(page_address(0), 0xB0);
        assert_eq!(page_address(7), 0xB7);
        // Page index is masked to the 3-bit field.
        assert_eq!(page_address(9), 0xB1);
    }
}
