//! # Framebuffer Module
//!
//! In-memory mirror of the controller's page-organized RAM.
//!
//! ## Modules
//!
//! - `buffer`: [`FrameBuffer`] with pixel writes, clipping and cursor
//! - `dirty`: [`DirtyRegions`], the per-page record of changed bytes
//!
//! ## Architecture
//!
//! Drawing never talks to the bus. Every byte-level mutation goes
//! through the frame buffer, which compares against the stored value
//! and records genuinely changed bytes in [`DirtyRegions`]. The sync
//! protocol later drains those records into minimal page-span
//! transfers, so the cost of a redraw is proportional to what actually
//! changed rather than to the buffer size.

mod buffer;
mod dirty;

pub use buffer::{ClipFn, FrameBuffer, PixelState};
pub use dirty::DirtyRegions;
