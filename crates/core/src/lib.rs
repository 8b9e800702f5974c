//! Menu Args Core Library
//!
//! This crate provides the argument widgets of a keyboard-driven command menu:
//! a user assembles a command line by toggling switches and picking option
//! values, then runs the command.
//!
//! # Key Features
//!
//! - **Files or Buffer**: A default "what to operate on" resolved from host context
//! - **Exclusive Switches**: Cycle through mutually exclusive `(value, label)` choices
//! - **Dynamic Options**: Candidates computed on demand by a provider, optionally cached
//! - **Command Output Filters**: Candidate lists built from an external program's output
//! - **Menu Definitions**: YAML-based menus validated on load
//!
//! # Examples
//!
//! Cycling an exclusive switch:
//!
//! ```
//! use menu_args_core::format::ArgumentFormat;
//! use menu_args_core::switch::{ChoicePair, ExclusiveSwitch};
//!
//! let mut orientation = ExclusiveSwitch::new(
//!     'o',
//!     "Orientation",
//!     ArgumentFormat::parse("-oorientation-requested={value}")?,
//!     vec![ChoicePair::new("4", "90°"), ChoicePair::new("5", "-90°")],
//! )?;
//! assert_eq!(orientation.cycle(), Some("-oorientation-requested=4"));
//! # Ok::<(), menu_args_core::error::Error>(())
//! ```

pub mod builtin;
pub mod config;
pub mod context;
pub mod definitions;
pub mod display;
pub mod error;
pub mod execution;
pub mod file_handling;
pub mod files;
pub mod filter;
pub mod format;
pub mod option;
pub mod paths;
pub mod prompt;
pub mod provider;
pub mod switch;
pub mod widget;
