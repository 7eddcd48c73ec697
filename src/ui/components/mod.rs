mod key_hints;
mod lifecycle_view;
mod terminal_demo;
pub mod theme;

pub use key_hints::{key_hints_line, render_key_hints};
pub use lifecycle_view::LifecycleView;
pub use terminal_demo::{TerminalDemo, DEFAULT_WINDOW_TITLE};
pub use theme::{fade, parse_hex_color, token_color, CURSOR};
