//! The built-in print menu, used when no configuration file exists.

use crate::definitions::MenuDefinition;
use crate::error::{Error, Result};

/// Menu ID of the built-in print menu.
pub const PRINT_MENU_ID: &str = "print";

const PRINT_MENU: &str = r#"
id: print
description: Print with lp
command: ["lp"]
widgets:
  - type: files
    key: f
    description: Files
  - type: option
    key: d
    description: Printer
    argument: "-d {value}"
    cached: true
    source:
      command: ["lpstat", "-a"]
      field: 0
  - type: switch
    key: o
    description: Orientation
    argument: "-oorientation-requested={value}"
    choices:
      - { value: "4", label: "90°" }
      - { value: "5", label: "-90°" }
      - { value: "6", label: "180°" }
  - type: switch
    key: s
    description: Sides
    argument: "-osides={value}"
    choices:
      - { value: one-sided, label: one-sided }
      - { value: two-sided-long-edge, label: long-edge }
      - { value: two-sided-short-edge, label: short-edge }
  - type: option
    key: m
    description: Media
    argument: "-omedia={value}"
    cached: true
    source:
      values: [a4, letter, legal]
  - type: option
    key: n
    description: Copies
    argument: "-n {value}"
    source:
      values: ["1", "2", "3", "4", "5"]
  - type: switch
    key: u
    description: Pages per sheet
    argument: "-onumber-up={value}"
    choices:
      - { value: "1", label: "1" }
      - { value: "2", label: "2" }
      - { value: "4", label: "4" }
      - { value: "6", label: "6" }
      - { value: "9", label: "9" }
      - { value: "16", label: "16" }
"#;

/// Parses the built-in print menu.
///
/// # Errors
///
/// Returns an error only if the embedded definition is malformed.
pub fn print_menu() -> Result<MenuDefinition> {
    serde_yaml::from_str(PRINT_MENU).map_err(|e| {
        Error::yaml_error(
            "reading".to_string(),
            "built-in menu".to_string(),
            PRINT_MENU_ID.to_string(),
            e,
        )
    })
}
