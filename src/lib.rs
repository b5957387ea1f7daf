//! Framebuffer and rendering engine for page-organized monochrome OLED
//! controllers (SH1106 class).
//!
//! The crate keeps an in-memory copy of the controller's RAM layout
//! (one byte per column per 8-row page), draws into it with clipped
//! primitives, tracks which bytes changed, and emits the exact
//! command/data sequences needed to bring device RAM back in sync.
//!
//! ## Layers
//!
//! - [`FrameBuffer`]: the byte buffer plus dirty tracking, cursor and
//!   clipping. All drawing primitives are synchronous, in-memory
//!   mutations — they never touch the bus.
//! - [`graphics`]: line/rectangle rasterization, the image/glyph
//!   blitter, font rasterization and word-wrapped text layout.
//! - [`Display`]: wraps a [`Transport`] and the frame buffer; owns the
//!   init sequence, full (`send_buffer`) and incremental
//!   (`update_display`) resync, and the display control commands.
//!
//! Only [`Display`] methods suspend; they must be driven sequentially.
//!
//! ```ignore
//! let config = DisplayConfig::new(128, 64).column_offset(2);
//! let mut display = Display::new(transport, config)?;
//! display.init().await?;
//!
//! let glyphs = fonts::FONT_5X7.glyph_map(false);
//! display.frame_mut().set_cursor(0, 0);
//! display.frame_mut().draw_string("hello, world", &glyphs, true);
//! display.update_display().await?;
//! ```
#![no_std]

extern crate alloc;

pub mod command;
pub mod config;
pub mod display;
#[cfg(feature = "graphics")]
mod eg;
pub mod fonts;
pub mod framebuffer;
pub mod graphics;

pub use config::{ConfigError, DisplayConfig};
pub use display::transport::{SpiTransport, Transport};
pub use display::Display;
pub use framebuffer::{FrameBuffer, PixelState};
pub use graphics::font::{Font, GlyphMap};
pub use graphics::image::{Image, ImageError};
