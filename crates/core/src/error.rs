use leon::{ParseError, RenderError};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("The sub process exiting with non-success code.")]
    SubProcessExit,

    #[error("Error with sub process process: {}", _0)]
    SubProcess(#[from] std::io::Error),

    #[error("Unable to launch `{}`: {}", .program, .original)]
    Launch {
        program: String,
        original: std::io::Error,
    },

    #[error("Choice provider failed: {}", .0)]
    Provider(String),

    #[error("Error {} {} file at `{}`: {}", .action, .file_description, .path, .original)]
    Yaml {
        action: String,
        file_description: String,
        path: String,
        original: serde_yaml::Error,
    },

    #[error("No menus were found in the menu definition YAML. Is `{}` empty?", .path)]
    EmptyMenuDefinition { path: String },

    #[error("IO error with {} file at path `{}`: {}", .file_description, .path, .original)]
    Io {
        file_description: String,
        path: String,
        original: std::io::Error,
    },

    #[error("Error parsing argument format: {}", .0)]
    Parse(#[from] ParseError),

    #[error("Error rendering argument format: {}", .0)]
    Render(#[from] RenderError),

    #[error("Argument format `{}` must contain exactly one placeholder, found {}", .0, .1)]
    PlaceholderCount(String, usize),

    #[error("`{}` is not an existing file", .0)]
    NotAFile(String),

    #[error("Menu `{}` not found", .0)]
    MenuNotFound(String),

    #[error("Menu `{}` has an empty command", .0)]
    EmptyCommand(String),

    #[error("Found a non-unique menu ID: `{}`", .0)]
    NonUniqueMenuId(String),

    #[error("Found a non-unique widget key in menu {}: `{}`", .0, .1)]
    NonUniqueWidgetKey(String, char),

    #[error("Invalid widget key `{}`: a key must be exactly one character", .0)]
    InvalidWidgetKey(String),

    #[error("Switch `{}` in menu {} has no choices", .1, .0)]
    NoChoices(String, String),

    #[error("Switch `{}` in menu {} has a duplicate choice value: `{}`", .1, .0, .2)]
    NonUniqueChoiceValue(String, String, String),

    #[error("Invalid ID: ID may not be empty")]
    EmptyId,

    #[error("Invalid ID `{}`: ID may not contain spaces", .0)]
    IdWithSpace(String),

    #[error("Misc error: {}", .0)]
    Misc(String),

    #[error("STDIO error: {}", .0)]
    Stdio(std::io::Error),
}

impl Error {
    pub fn empty_menu_definition(path: String) -> Self {
        Self::EmptyMenuDefinition { path }
    }

    pub fn launch_error(program: String, original: std::io::Error) -> Self {
        Self::Launch { program, original }
    }

    pub fn yaml_error(
        action: String,
        file_description: String,
        path: String,
        original: serde_yaml::Error,
    ) -> Self {
        Self::Yaml {
            action,
            file_description,
            path,
            original,
        }
    }

    pub fn io_error(file_description: String, path: String, original: std::io::Error) -> Self {
        Self::Io {
            file_description,
            path,
            original,
        }
    }
}
