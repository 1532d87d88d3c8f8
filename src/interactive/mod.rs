//! Interactive TUI interface

mod app;
mod rendering;

pub use app::{App, Command, Message, MessageStyle, map_key, run_tui};
