//! Terminal front end for blockfall.
//!
//! Rendering is split in two: [`GameView`] lays a snapshot out on an
//! in-memory [`FrameBuffer`] (pure, testable), and [`TerminalRenderer`]
//! pushes framebuffers to the terminal through crossterm, writing only the
//! cells that changed since the previous frame.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use fb::{palette, Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{AnchorY, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
