//! Utility functions

use crate::constants::APP_NAME;
use std::path::PathBuf;
use tracing::{debug, warn};

/// Get the app data directory path (settings, logs)
pub fn get_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_NAME)
}

/// Open a project or article link in the system browser
pub fn open_external(url: &str) {
    if url.trim().is_empty() {
        return;
    }
    match open::that(url) {
        Ok(()) => debug!(url, "Opened external link"),
        Err(e) => warn!(url, error = %e, "Failed to open link"),
    }
}
