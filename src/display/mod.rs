//! # Display Session Module
//!
//! [`Display`] binds a [`Transport`] to a [`FrameBuffer`] and speaks
//! the controller's addressing protocol: page select plus split column
//! nibbles, then raw page data.
//!
//! ## Session lifecycle
//!
//! A session starts uninitialized. [`Display::init`] performs the
//! fixed bring-up — hardware reset, display off, the command init
//! sequence, a full buffer push, display on — after which the control
//! and sync operations may be used freely. There is no transition
//! back; re-running `init` simply repeats the bring-up.
//!
//! All async operations share the buffer and dirty state and must be
//! awaited sequentially; drawing stays synchronous and never touches
//! the transport.

pub mod transport;

use crate::command;
use crate::config::{ConfigError, DisplayConfig};
use crate::framebuffer::FrameBuffer;
use transport::Transport;

/// Init-sequence arguments that are fixed for the controller family.
const CLOCK_RATIO_INIT: u8 = 0xF0;
const CHARGE_PERIOD_INIT: u8 = 0x22;
const VCOM_LEVEL_INIT: u8 = 0x20;

/// Contrast levels used by [`Display::dim_display`].
const CONTRAST_DIM: u8 = 0x00;
const CONTRAST_NORMAL: u8 = 0xCF;

/// A display session: frame buffer, dirty tracking and the sync
/// protocol over an injected transport.
pub struct Display<T: Transport> {
    transport: T,
    frame: FrameBuffer,
    column_offset: u8,
    multiplex_ratio: u8,
    common_pads: u8,
}

impl<T: Transport> Display<T> {
    /// Validate `config` and build the session. Fails outright on bad
    /// geometry; no partially constructed display is returned.
    pub fn new(transport: T, config: DisplayConfig) -> Result<Self, ConfigError> {
        let frame = FrameBuffer::new(&config)?;
        Ok(Self {
            transport,
            frame,
            column_offset: config.column_offset,
            multiplex_ratio: config.multiplex_ratio,
            common_pads: config.common_pads,
        })
    }

    /// The in-memory frame. All drawing goes through this.
    pub fn frame(&self) -> &FrameBuffer {
        &self.frame
    }

    pub fn frame_mut(&mut self) -> &mut FrameBuffer {
        &mut self.frame
    }

    /// Tear down the session, returning the transport.
    pub fn release(self) -> T {
        self.transport
    }

    /// Bring the panel up: hardware reset, display off, the fixed
    /// command init sequence, a full buffer push, display on.
    pub async fn init(&mut self) -> Result<(), T::Error> {
        log::debug!(
            "display init: {}x{}, column offset {}",
            self.frame.columns(),
            self.frame.rows(),
            self.column_offset
        );
        self.transport.hardware_reset().await?;
        self.transport.send_command(&[command::DISPLAY_OFF]).await?;
        self.transport
            .send_command(&[
                command::column_low(0),
                command::column_high(0),
                command::SEGMENT_REMAP,
                command::DISPLAY_NORMAL,
                command::MULTIPLEX_RATIO,
                self.multiplex_ratio,
                command::DISPLAY_OFFSET,
                0x00,
                command::CLOCK_RATIO,
                CLOCK_RATIO_INIT,
                command::CHARGE_PERIOD,
                CHARGE_PERIOD_INIT,
                command::COMMON_PADS,
                self.common_pads,
                command::VCOM_LEVEL,
                VCOM_LEVEL_INIT,
            ])
            .await?;
        self.send_buffer().await?;
        self.transport.send_command(&[command::DISPLAY_ON]).await?;
        log::debug!("display init complete");
        Ok(())
    }

    /// Address device RAM at `(page, column)`: page select plus the
    /// two column-nibble commands. The configured RAM offset is added
    /// here, so callers pass logical columns.
    async fn set_address(&mut self, page: u8, column: u8) -> Result<(), T::Error> {
        let column = column.wrapping_add(self.column_offset);
        self.transport
            .send_command(&[
                command::page_address(page),
                command::column_low(column),
                command::column_high(column),
            ])
            .await
    }

    /// Full resync: push every page of the buffer to device RAM.
    ///
    /// This is the only way a [`FrameBuffer::clear`] reaches the
    /// device, since clearing records nothing dirty.
    pub async fn send_buffer(&mut self) -> Result<(), T::Error> {
        let columns = self.frame.columns() as u16;
        log::debug!(
            "full resync: {} pages x {} columns",
            self.frame.total_pages(),
            columns
        );
        for page in 0..self.frame.total_pages() {
            self.set_address(page as u8, 0).await?;
            self.transport
                .send_data(self.frame.page_slice(page, 0, columns - 1))
                .await?;
        }
        Ok(())
    }

    /// Incremental resync: for each dirty page, in ascending page
    /// order, transfer the contiguous column span `[min, max]` touched
    /// since the last sync, then drop that page's dirty records.
    ///
    /// Untouched bytes inside the span are resent as-is — a few extra
    /// data bytes cost less than extra addressing headers.
    pub async fn update_display(&mut self) -> Result<(), T::Error> {
        for page in 0..self.frame.total_pages() {
            let Some((min, max)) = self.frame.dirty().span(page) else {
                continue;
            };
            log::trace!("page {}: updating columns {}..={}", page, min, max);
            self.set_address(page as u8, min as u8).await?;
            self.transport
                .send_data(self.frame.page_slice(page, min, max))
                .await?;
            self.frame.dirty_mut().clear_page(page);
        }
        Ok(())
    }

    pub async fn display_on(&mut self) -> Result<(), T::Error> {
        self.transport.send_command(&[command::DISPLAY_ON]).await
    }

    pub async fn display_off(&mut self) -> Result<(), T::Error> {
        self.transport.send_command(&[command::DISPLAY_OFF]).await
    }

    /// Invert (or restore) the RAM-to-pixel polarity.
    pub async fn reverse_display(&mut self, inverted: bool) -> Result<(), T::Error> {
        let opcode = if inverted {
            command::DISPLAY_INVERTED
        } else {
            command::DISPLAY_NORMAL
        };
        self.transport.send_command(&[opcode]).await
    }

    pub async fn display_contrast(&mut self, contrast: u8) -> Result<(), T::Error> {
        self.transport
            .send_command(&[command::CONTRAST, contrast])
            .await
    }

    /// Contrast shortcut: fully dimmed or the family's normal level.
    pub async fn dim_display(&mut self, dim: bool) -> Result<(), T::Error> {
        self.display_contrast(if dim { CONTRAST_DIM } else { CONTRAST_NORMAL })
            .await
    }

    /// Force every pixel on (lamp-test), or resume rendering RAM.
    pub async fn entire_display_on(&mut self, force: bool) -> Result<(), T::Error> {
        let opcode = if force {
            command::ALL_PIXELS_ON
        } else {
            command::ALL_PIXELS_RESUME
        };
        self.transport.send_command(&[opcode]).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framebuffer::PixelState;
    use alloc::vec::Vec;
    use embassy_futures::block_on;

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum Call {
        Cmd(Vec<u8>),
        Data(Vec<u8>),
        Reset,
    }

    /// In-memory transport double recording every call.
    #[derive(Default)]
    struct Recorder {
        calls: Vec<Call>,
    }

    impl Transport for Recorder {
        type Error = core::convert::Infallible;

        async fn send_command(&mut self, bytes: &[u8]) -> Result<(), Self::Error> {
            self.calls.push(Call::Cmd(bytes.to_vec()));
            Ok(())
        }

        async fn send_data(&mut self, data: &[u8]) -> Result<(), Self::Error> {
            self.calls.push(Call::Data(data.to_vec()));
            Ok(())
        }

        async fn hardware_reset(&mut self) -> Result<(), Self::Error> {
            self.calls.push(Call::Reset);
            Ok(())
        }
    }

    /// Transport that fails every transfer.
    struct Broken;

    impl Transport for Broken {
        type Error = &'static str;

        async fn send_command(&mut self, _: &[u8]) -> Result<(), Self::Error> {
            Err("command failed")
        }

        async fn send_data(&mut self, _: &[u8]) -> Result<(), Self::Error> {
            Err("data failed")
        }

        async fn hardware_reset(&mut self) -> Result<(), Self::Error> {
            Ok(())
        }
    }

    fn display() -> Display<Recorder> {
        Display::new(Recorder::default(), DisplayConfig::new(128, 64).column_offset(2)).unwrap()
    }

    #[test]
    fn init_emits_the_fixed_bring_up_sequence() {
        let mut d = display();
        block_on(d.init()).unwrap();
        let calls = &d.release().calls;

        assert_eq!(calls[0], Call::Reset);
        assert_eq!(calls[1], Call::Cmd([0xAE].to_vec()));
        assert_eq!(
            calls[2],
            Call::Cmd(
                [
                    0x00, 0x10, 0xA0, 0xA6, 0xA8, 0x3F, 0xD3, 0x00, 0xD5, 0xF0, 0xD9, 0x22, 0xDA,
                    0x12, 0xDB, 0x20
                ]
                .to_vec()
            )
        );
        // Full buffer push: 8 pages, each an address header at the RAM
        // offset followed by a 128-byte row.
        for page in 0..8usize {
            let header = &calls[3 + page * 2];
            let row = &calls[4 + page * 2];
            assert_eq!(
                *header,
                Call::Cmd([0xB0 | page as u8, 0x02, 0x10].to_vec())
            );
            match row {
                Call::Data(bytes) => assert_eq!(bytes.len(), 128),
                other => panic!("expected data, got {:?}", other),
            }
        }
        assert_eq!(*calls.last().unwrap(), Call::Cmd([0xAF].to_vec()));
    }

    #[test]
    fn update_after_full_sync_is_silent() {
        let mut d = display();
        block_on(d.send_buffer()).unwrap();
        let before = d.transport.calls.len();
        block_on(d.update_display()).unwrap();
        assert_eq!(d.transport.calls.len(), before);
    }

    #[test]
    fn update_transfers_one_contiguous_span_per_page() {
        let mut d = display();
        for x in [2, 5, 9] {
            d.frame_mut().set_pixel(x, 0, PixelState::On);
        }
        block_on(d.update_display()).unwrap();

        let calls = &d.transport.calls;
        assert_eq!(calls.len(), 2);
        // Header addresses column 2 + offset 2 = 4.
        assert_eq!(calls[0], Call::Cmd([0xB0, 0x04, 0x10].to_vec()));
        // Span 2..=9 is 8 bytes, untouched gaps included.
        match &calls[1] {
            Call::Data(bytes) => {
                assert_eq!(bytes.len(), 8);
                assert_eq!(bytes[0], 1);
                assert_eq!(bytes[3], 1);
                assert_eq!(bytes[7], 1);
                assert_eq!(bytes[1], 0);
            }
            other => panic!("expected data, got {:?}", other),
        }

        // The drained page goes quiet on the next sync.
        d.transport.calls.clear();
        block_on(d.update_display()).unwrap();
        assert!(d.transport.calls.is_empty());
    }

    #[test]
    fn dirty_pages_flush_in_ascending_numeric_order() {
        let mut d = display();
        d.frame_mut().set_pixel(0, 30, PixelState::On); // page 3
        d.frame_mut().set_pixel(0, 10, PixelState::On); // page 1
        block_on(d.update_display()).unwrap();

        let headers: Vec<u8> = d
            .transport
            .calls
            .iter()
            .filter_map(|call| match call {
                Call::Cmd(bytes) if bytes[0] & 0xB0 == 0xB0 => Some(bytes[0]),
                _ => None,
            })
            .collect();
        assert_eq!(headers, [0xB1, 0xB3]);
    }

    #[test]
    fn clear_needs_an_explicit_full_resync() {
        let mut d = display();
        d.frame_mut().set_pixel(4, 4, PixelState::On);
        block_on(d.update_display()).unwrap();
        d.transport.calls.clear();

        d.frame_mut().clear();
        block_on(d.update_display()).unwrap();
        // The clear recorded nothing dirty, so nothing was sent.
        assert!(d.transport.calls.is_empty());
    }

    #[test]
    fn control_operations_use_exact_opcodes() {
        let mut d = display();
        block_on(d.display_off()).unwrap();
        block_on(d.display_on()).unwrap();
        block_on(d.reverse_display(true)).unwrap();
        block_on(d.reverse_display(false)).unwrap();
        block_on(d.display_contrast(0x7F)).unwrap();
        block_on(d.dim_display(true)).unwrap();
        block_on(d.entire_display_on(true)).unwrap();
        block_on(d.entire_display_on(false)).unwrap();

        let expected: Vec<Call> = [
            Call::Cmd([0xAE].to_vec()),
            Call::Cmd([0xAF].to_vec()),
            Call::Cmd([0xA7].to_vec()),
            Call::Cmd([0xA6].to_vec()),
            Call::Cmd([0x81, 0x7F].to_vec()),
            Call::Cmd([0x81, 0x00].to_vec()),
            Call::Cmd([0xA5].to_vec()),
            Call::Cmd([0xA4].to_vec()),
        ]
        .to_vec();
        assert_eq!(d.transport.calls, expected);
    }

    #[test]
    fn transport_failures_propagate_unmodified() {
        let mut d = Display::new(Broken, DisplayConfig::new(128, 64)).unwrap();
        assert_eq!(block_on(d.init()), Err("command failed"));
        assert_eq!(block_on(d.send_buffer()), Err("command failed"));
        d.frame_mut().set_pixel(0, 0, PixelState::On);
        assert_eq!(block_on(d.update_display()), Err("command failed"));
        assert_eq!(block_on(d.display_contrast(1)), Err("command failed"));
    }
}
