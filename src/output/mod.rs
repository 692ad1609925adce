pub mod formatter;

pub use formatter::{format_link, format_opened, should_use_colors};
