use anyhow::{Context, Result};

use crate::diag_eprintln;

/// Something that can show a URL to the user
pub trait BrowserLauncher {
    /// Best effort: failures are reported, never returned
    fn open(&self, url: &str);
}

/// Opens URLs in the user's default browser
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemBrowser;

impl BrowserLauncher for SystemBrowser {
    fn open(&self, url: &str) {
        if let Err(e) = open_url(url) {
            diag_eprintln!("{:#}", e);
        }
    }
}

/// Leaves the browser closed; the caller prints the URL instead
#[derive(Debug, Clone, Copy, Default)]
pub struct PrintOnly;

impl BrowserLauncher for PrintOnly {
    fn open(&self, _url: &str) {}
}

/// Open a URL in the user's default browser
///
/// # Arguments
/// * `url` - The URL to open (e.g., a blob URL on GitHub)
///
/// # Errors
/// Returns error if browser cannot be opened (e.g., no browser available)
pub fn open_url(url: &str) -> Result<()> {
    webbrowser::open(url)
        .with_context(|| format!("Failed to open browser for URL: {}", url))?;
    Ok(())
}
