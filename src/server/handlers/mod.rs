//! HTTP handlers.

mod parse;
mod root;

pub use parse::parse_handler;
pub use root::root_handler;
