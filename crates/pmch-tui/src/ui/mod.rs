//! Terminal UI built on ratatui.
//!
//! - `render`: frame layout, title/tab/status bars and the help overlay
//! - `input`: keyboard handling
//! - `styles`: colours and text styles
//! - `screens`: per-screen content

pub mod input;
pub mod render;
pub mod screens;
pub mod styles;
