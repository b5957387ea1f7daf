//! The injected bus transport.
//!
//! The engine never talks to hardware directly; it is handed something
//! implementing [`Transport`] and drives it from the init and sync
//! paths. A ready-made 4-wire SPI implementation is provided; tests
//! use an in-memory recorder instead.

use core::fmt;

use embedded_hal::digital::OutputPin;
use embedded_hal_async::delay::DelayNs;
use embedded_hal_async::spi::SpiDevice;

/// Asynchronous command/data channel to the display controller.
///
/// Implementations own whatever bus and pins are involved. The engine
/// performs no retries and no buffering: a failed transfer surfaces
/// unmodified to the caller, and retry policy belongs to the
/// implementation.
#[allow(async_fn_in_trait)]
pub trait Transport {
    type Error;

    /// Transfer command bytes (D/C low on 4-wire buses).
    async fn send_command(&mut self, bytes: &[u8]) -> Result<(), Self::Error>;

    /// Transfer display RAM data (D/C high on 4-wire buses).
    async fn send_data(&mut self, data: &[u8]) -> Result<(), Self::Error>;

    /// Pulse the reset line with the timing the panel requires.
    async fn hardware_reset(&mut self) -> Result<(), Self::Error>;
}

/// 4-wire SPI transport: an SPI device plus data/command and reset
/// pins and a delay provider for the reset timing.
pub struct SpiTransport<SPI, DC, RST, DELAY> {
    spi: SPI,
    dc: DC,
    rst: RST,
    delay: DELAY,
}

impl<SPI, DC, RST, DELAY> SpiTransport<SPI, DC, RST, DELAY>
where
    SPI: SpiDevice,
    DC: OutputPin,
    RST: OutputPin,
    DELAY: DelayNs,
{
    pub fn new(spi: SPI, dc: DC, rst: RST, delay: DELAY) -> Self {
        Self {
            spi,
            dc,
            rst,
            delay,
        }
    }

    /// Tear down into the underlying resources.
    pub fn release(self) -> (SPI, DC, RST, DELAY) {
        (self.spi, self.dc, self.rst, self.delay)
    }
}

impl<SPI, DC, RST, DELAY> Transport for SpiTransport<SPI, DC, RST, DELAY>
where
    SPI: SpiDevice,
    DC: OutputPin,
    RST: OutputPin,
    DELAY: DelayNs,
{
    type Error = TransportError;

    async fn send_command(&mut self, bytes: &[u8]) -> Result<(), Self::Error> {
        self.dc.set_low().map_err(|_| TransportError::Pin)?;
        self.spi
            .write(bytes)
            .await
            .map_err(|_| TransportError::Bus)
    }

    async fn send_data(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        self.dc.set_high().map_err(|_| TransportError::Pin)?;
        self.spi.write(data).await.map_err(|_| TransportError::Bus)
    }

    async fn hardware_reset(&mut self) -> Result<(), Self::Error> {
        self.rst.set_high().map_err(|_| TransportError::Pin)?;
        self.delay.delay_ms(10).await;
        self.rst.set_low().map_err(|_| TransportError::Pin)?;
        self.delay.delay_ms(10).await;
        self.rst.set_high().map_err(|_| TransportError::Pin)?;
        self.delay.delay_ms(10).await;
        Ok(())
    }
}

/// SPI transport failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportError {
    /// The SPI transfer failed.
    Bus,
    /// A control pin could not be driven.
    Pin,
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bus => write!(f, "SPI transfer failed"),
            Self::Pin => write!(f, "control pin unresponsive"),
        }
    }
}
