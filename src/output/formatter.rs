use std::io::IsTerminal;

use owo_colors::OwoColorize;

use crate::link::WebLink;

/// Line printed after a link was handed to the browser
pub fn format_opened(link: &WebLink, use_colors: bool) -> String {
    if use_colors {
        format!("{} {}", "Opening".green().bold(), link.url.underline())
    } else {
        format!("Opening {}", link.url)
    }
}

/// Bare link, for `--print` mode where the output may be piped
pub fn format_link(link: &WebLink, use_colors: bool) -> String {
    if use_colors {
        link.url.underline().to_string()
    } else {
        link.url.clone()
    }
}

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}
