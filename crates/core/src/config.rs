//! Configuration path utilities for menu-args.
//!
//! This module provides functions for resolving configuration file paths
//! and expanding shell variables like `~` in paths.

/// Default path for the menu definitions file
const DEFAULT_CONFIG_PATH: &str = "~/.menu-args/menus.yml";

/// Resolves the configuration file path.
///
/// If a custom path is provided, uses that path. Otherwise, uses the default
/// configuration path. Shell expansions like `~` are resolved.
///
/// # Examples
///
/// ```
/// use menu_args_core::config::get_config_path;
///
/// let default_path = get_config_path(None);
/// assert!(default_path.ends_with("menus.yml"));
///
/// let custom_path = get_config_path(Some("/path/to/menus.yml"));
/// assert_eq!(custom_path, "/path/to/menus.yml");
/// ```
pub fn get_config_path(config_path_arg: Option<&str>) -> String {
    let config_path = config_path_arg.unwrap_or(DEFAULT_CONFIG_PATH);

    shellexpand::tilde(config_path).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_config_path_with_custom_path() {
        let result = get_config_path(Some("/custom/path/menus.yml"));
        assert_eq!(result, "/custom/path/menus.yml");
    }

    #[test]
    fn test_get_config_path_with_none() {
        let result = get_config_path(None);
        // Should expand the tilde in the default path
        assert!(result.ends_with(".menu-args/menus.yml"));
        assert!(!result.starts_with('~'));
    }

    #[test]
    fn test_get_config_path_with_tilde() {
        let result = get_config_path(Some("~/my-menus.yml"));
        assert!(!result.starts_with('~'));
        assert!(result.ends_with("my-menus.yml"));
    }
}
