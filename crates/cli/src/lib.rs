//! Menu Args CLI Library
//!
//! This crate provides the terminal host for menu-args: it loads a menu,
//! derives the files to operate on from the command line, lets the user set
//! widget values with single key presses and finally runs the assembled
//! command.
//!
//! # Architecture
//!
//! - [`cli_args`]: Command-line argument parsing and the host context
//! - [`selection`]: Resolving typed input against a list of choices
//! - [`prompt`]: Line-based prompts for files and choices
//! - [`ui`]: The key-driven menu screen
//!
//! # Examples
//!
//! The CLI binary (`margs`) can be used in several ways:
//!
//! ```bash
//! # Print menu for two files
//! margs report.pdf notes.pdf
//!
//! # Pick a menu from a config file
//! margs --config ~/menus.yml --menu convert photo.png
//!
//! # Print the assembled command without running it
//! margs --dry-run report.pdf
//! ```

pub mod cli_args;
pub mod prompt;
pub mod selection;
pub mod ui;
