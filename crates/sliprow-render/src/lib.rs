#![forbid(unsafe_code)]

//! Cell-grid rendering model: packed colors, style flags, cells, buffers,
//! and frames.

pub mod buffer;
pub mod cell;
pub mod frame;
pub mod style;

pub use buffer::Buffer;
pub use cell::{Cell, PackedRgba, StyleFlags};
pub use frame::Frame;
pub use style::Style;
