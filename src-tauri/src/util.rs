use std::path::PathBuf;

/// Overrides where Scrolls keeps its config and local store.
pub const DATA_DIR_ENV: &str = "SCROLLS_DATA_DIR";

/// Expands a leading `~` in a path to the user's home directory.
/// Also normalizes path separators for the current OS.
pub fn expand_tilde(path: &str) -> String {
    let result = match path.strip_prefix("~/") {
        Some(rest) => match dirs::home_dir() {
            Some(home) => home.join(rest).to_string_lossy().to_string(),
            None => path.to_string(),
        },
        None if path == "~" => dirs::home_dir()
            .map(|h| h.to_string_lossy().to_string())
            .unwrap_or_else(|| path.to_string()),
        None => path.to_string(),
    };
    // Normalize separators for the current OS
    if cfg!(windows) {
        result.replace('/', "\\")
    } else {
        result
    }
}

/// `$SCROLLS_DATA_DIR` if set, otherwise `~/.scrolls`.
pub fn data_dir() -> Option<PathBuf> {
    match std::env::var(DATA_DIR_ENV) {
        Ok(dir) if !dir.trim().is_empty() => Some(PathBuf::from(expand_tilde(dir.trim()))),
        _ => dirs::home_dir().map(|h| h.join(".scrolls")),
    }
}
