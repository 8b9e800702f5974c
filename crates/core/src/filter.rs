//! Candidate lists computed from the output of external programs.
//!
//! [`filter_command_output`] runs a program to completion, splits what it
//! printed into lines and maps each line to an optional candidate.
//! [`make_command_filter`] packages the same call as a [`CommandFilter`]
//! provider for [`crate::option::DynamicChoiceOption`].

use std::fmt::{Debug, Formatter};
use std::process::{Command, Stdio};
use std::sync::Arc;

use log::{debug, warn};

use crate::error::{Error, Result};
use crate::provider::ChoiceProvider;

/// Maps one line of program output to a candidate, or `None` to omit it.
pub type LineMapper = Arc<dyn Fn(&str) -> Option<String> + Send + Sync>;

/// Splits `text` into lines and maps them, dropping empty lines and empty or
/// omitted results. Surviving results keep their line order.
pub fn filter_lines<F>(text: &str, map: F) -> Vec<String>
where
    F: Fn(&str) -> Option<String>,
{
    text.lines()
        .filter(|line| !line.is_empty())
        .filter_map(map)
        .filter(|candidate| !candidate.is_empty())
        .collect()
}

/// Runs `program` with `arguments`, waits for it, and returns the mapped lines
/// of its standard output.
///
/// A non-zero exit status is logged and otherwise ignored: listing utilities
/// commonly exit non-zero while still printing a valid listing.
///
/// # Errors
///
/// Returns [`Error::Launch`] if the program cannot be started at all.
pub fn filter_command_output<S, F>(program: &str, arguments: &[S], map: F) -> Result<Vec<String>>
where
    S: AsRef<str>,
    F: Fn(&str) -> Option<String>,
{
    debug!(
        "Running `{}` with arguments {:?}",
        program,
        arguments.iter().map(AsRef::as_ref).collect::<Vec<_>>()
    );

    let output = Command::new(program)
        .args(arguments.iter().map(AsRef::as_ref))
        .stdin(Stdio::null())
        .output()
        .map_err(|e| Error::launch_error(program.to_string(), e))?;

    if !output.status.success() {
        warn!("`{}` exited with {}, using its output anyway", program, output.status);
    }

    if !output.stderr.is_empty() {
        debug!(
            "`{}` wrote to stderr: {}",
            program,
            String::from_utf8_lossy(&output.stderr).trim_end()
        );
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    Ok(filter_lines(&stdout, map))
}

/// A program invocation whose filtered output is a list of choices.
#[derive(Clone)]
pub struct CommandFilter {
    pub program: String,
    pub arguments: Vec<String>,
    pub map: LineMapper,
}

impl CommandFilter {
    /// Runs the program and returns its filtered output.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Launch`] if the program cannot be started.
    pub fn run(&self) -> Result<Vec<String>> {
        filter_command_output(&self.program, &self.arguments, |line| (self.map)(line))
    }
}

impl ChoiceProvider for CommandFilter {
    fn invoke(&self) -> Result<Vec<String>> {
        self.run()
    }
}

impl Debug for CommandFilter {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandFilter")
            .field("program", &self.program)
            .field("arguments", &self.arguments)
            .finish_non_exhaustive()
    }
}

/// Builds a provider that calls [`filter_command_output`] each time it is
/// invoked.
pub fn make_command_filter<F>(program: &str, arguments: &[&str], map: F) -> CommandFilter
where
    F: Fn(&str) -> Option<String> + Send + Sync + 'static,
{
    CommandFilter {
        program: program.to_string(),
        arguments: arguments.iter().map(ToString::to_string).collect(),
        map: Arc::new(map),
    }
}

/// Line mapper returning the whitespace-separated field at `index`.
#[must_use]
pub fn nth_field(index: usize) -> LineMapper {
    Arc::new(move |line: &str| line.split_whitespace().nth(index).map(ToString::to_string))
}
