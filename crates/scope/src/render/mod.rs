//! Frame renderers

mod log;
mod terminal;

pub use self::log::LogRenderer;
pub use self::terminal::{build_chart, TerminalRenderer, FILTERED_LABEL, RAW_LABEL, TITLE};
