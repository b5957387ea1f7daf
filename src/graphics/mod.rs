//! # Graphics Module
//!
//! Rasterization on top of the frame buffer.
//!
//! ## Modules
//!
//! - `raster`: Bresenham lines and rectangles
//! - `image`: the [`Image`](image::Image) type and the page-batched blitter
//! - `font`: packed font definitions and glyph rasterization
//! - `text`: cursor-driven string rendering with word-wrap
//!
//! Everything here is a synchronous, in-memory mutation of the
//! [`FrameBuffer`](crate::FrameBuffer); clipping and dirty tracking are
//! inherited from the pixel/byte write path.

pub mod font;
pub mod image;
pub mod raster;
pub mod text;
