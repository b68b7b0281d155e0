//! Terminal clock renderer.
//!
//! Renders clock snapshots into a simple framebuffer that is flushed to the
//! terminal with crossterm. No widget toolkit is involved.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Keep the per-frame render path free of allocations
//! - Compensate for terminal glyph aspect ratio on the analog dial

pub mod clock_view;
pub mod fb;
pub mod renderer;
pub mod throttle;

pub use klingon_clock_core as core;
pub use klingon_clock_types as types;

pub use clock_view::{AnchorY, ClockView, Viewport};
pub use fb::{text_width, Cell, CellStyle, FrameBuffer, Rgb};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer, TerminalSession};
pub use throttle::FrameThrottle;
