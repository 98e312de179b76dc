//! # showreel-core
//!
//! Core types and primitives for the Showreel playback engine.
//! This crate contains the foundational types shared across all Showreel
//! crates: geometry values, colors, pixel frames, content hashing,
//! configuration, and error types.

pub mod color;
pub mod config;
pub mod error;
pub mod frame;
pub mod geom;
pub mod hash;

pub use color::Color;
pub use config::{ShowreelConfig, StageConfig};
pub use error::{ShowreelError, ShowreelResult};
pub use frame::{FrameBuffer, PixelFormat};
pub use geom::{Point, Rect, Size};
