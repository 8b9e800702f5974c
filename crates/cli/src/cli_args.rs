//! Command-line argument parsing.
//!
//! This module defines the command-line interface structure using the `clap`
//! crate and derives the host context the menu widgets start from.

use clap::Parser;
use menu_args_core::context::HostContext;
use menu_args_core::error::Result;
use menu_args_core::paths::expand_file_name;

/// Name of the buffer standing for standard input.
pub const STDIN_BUFFER: &str = "stdin";

/// Command-line arguments for the menu-args CLI tool.
///
/// # Examples
///
/// ```rust
/// use clap::Parser;
/// use menu_args_cli::cli_args::Args;
///
/// let args = Args::parse_from(["margs", "--dry-run", "report.pdf"]);
/// assert!(args.dry_run);
/// ```
#[derive(Parser, Debug)] // requires `derive` feature
#[command(term_width = 0)] // Just to make testing across clap features easier
pub struct Args {
    /// Path to the menu definition config file YAML.
    ///
    /// If not provided, defaults to `~/.menu-args/menus.yml`. When the file
    /// does not exist the built-in print menu is used.
    #[arg(long, short = 'c')]
    pub config_path: Option<String>,

    /// Perform a dry run, which just prints out the command but does not execute it.
    #[arg(long, short = 'd', action)]
    pub dry_run: bool,

    /// ID of the menu to open. Defaults to the first menu.
    #[arg(long, short = 'm')]
    pub menu: Option<String>,

    /// Files to operate on.
    ///
    /// Several files are treated as marked entries, a single file as the
    /// file backing the active buffer. Without files the buffer is standard
    /// input.
    #[arg(trailing_var_arg = true)]
    pub files: Vec<String>,
}

impl Args {
    /// Builds the host context from the file arguments.
    ///
    /// # Errors
    ///
    /// Returns an error if a file path cannot be made absolute.
    pub fn host_context(&self) -> Result<HostContext> {
        context_from_files(&self.files)
    }
}

/// Maps file arguments onto the host context, see [`Args::files`].
///
/// # Errors
///
/// Returns an error if a file path cannot be made absolute.
pub fn context_from_files(files: &[String]) -> Result<HostContext> {
    let expanded = files
        .iter()
        .map(|file| expand_file_name(file).map(|path| path.to_string_lossy().to_string()))
        .collect::<Result<Vec<_>>>()?;

    Ok(match expanded.as_slice() {
        [] => HostContext::buffer(STDIN_BUFFER),
        [single] => HostContext::file_buffer(&files[0], single),
        _ => HostContext::marked(expanded),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use menu_args_core::context::ContextProvider;

    #[test]
    fn test_args_default_values() {
        let args = Args::parse_from(["margs"]);
        assert!(args.config_path.is_none());
        assert!(!args.dry_run);
        assert!(args.menu.is_none());
        assert!(args.files.is_empty());
    }

    #[test]
    fn test_args_with_options() {
        let args = Args::parse_from(["margs", "-c", "/tmp/menus.yml", "-m", "print", "a.pdf"]);
        assert_eq!(args.config_path.as_deref(), Some("/tmp/menus.yml"));
        assert_eq!(args.menu.as_deref(), Some("print"));
        assert_eq!(args.files, vec!["a.pdf"]);
    }

    #[test]
    fn test_context_without_files() {
        let context = context_from_files(&[]).unwrap();
        assert!(!context.is_multi_selection());
        assert_eq!(context.buffer_file(), None);
        assert_eq!(context.active_buffer().0, STDIN_BUFFER);
    }

    #[test]
    fn test_context_single_file() {
        let context = context_from_files(&["/tmp/a.pdf".to_string()]).unwrap();
        assert!(!context.is_multi_selection());
        assert_eq!(context.buffer_file(), Some("/tmp/a.pdf".to_string()));
    }

    #[test]
    fn test_context_several_files() {
        let files = vec!["/tmp/b.pdf".to_string(), "/tmp/a.pdf".to_string()];
        let context = context_from_files(&files).unwrap();
        assert!(context.is_multi_selection());
        assert_eq!(context.marked_entries(), files);
    }
}
