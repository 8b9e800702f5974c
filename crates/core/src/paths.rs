//! Path expansion and display helpers for file arguments.

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Expands `~` and makes the path absolute against the current directory.
///
/// # Errors
///
/// Returns an error if the current directory cannot be determined.
pub fn expand_file_name(path: &str) -> Result<PathBuf> {
    let expanded = shellexpand::tilde(path);
    std::path::absolute(&*expanded).map_err(Error::Stdio)
}

/// Expands `path` and checks that it names an existing file.
///
/// # Errors
///
/// Returns [`Error::NotAFile`] if the expanded path is not an existing file.
pub fn validate_existing_file(path: &str) -> Result<String> {
    let expanded = expand_file_name(path)?;
    if !expanded.is_file() {
        return Err(Error::NotAFile(path.to_string()));
    }
    Ok(expanded.to_string_lossy().to_string())
}

/// Formats `path` for display: surrounding quotes removed, then relative to
/// `cwd` when below it, otherwise with the home directory abbreviated to `~`.
pub fn display_path(path: &str, cwd: Option<&Path>, home: Option<&Path>) -> String {
    let path = path.trim_matches(|c| c == '"' || c == '\'');
    let candidate = Path::new(path);

    if let Some(relative) = cwd.and_then(|cwd| candidate.strip_prefix(cwd).ok()) {
        relative.to_string_lossy().to_string()
    } else if let Some(relative) = home.and_then(|home| candidate.strip_prefix(home).ok()) {
        if relative.as_os_str().is_empty() {
            "~".to_string()
        } else {
            format!("~/{}", relative.to_string_lossy())
        }
    } else {
        path.to_string()
    }
}

/// [`display_path`] against the process's current and home directories.
pub fn display_path_here(path: &str) -> String {
    let cwd = std::env::current_dir().ok();
    let home = dirs::home_dir();
    display_path(path, cwd.as_deref(), home.as_deref())
}
