//! Interactive TUI interface

mod app;
mod rendering;

pub use app::{App, Direction, Message, MessageStyle, run_tui};
