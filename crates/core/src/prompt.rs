//! Prompt operations supplied by the host.

use crate::error::Result;

/// Reads user input on behalf of a widget.
pub trait Prompter {
    /// Reads the path of an existing file. Hosts re-prompt until the entered
    /// path names an existing file.
    ///
    /// # Errors
    ///
    /// Returns an error if input cannot be read.
    fn read_file(&mut self, prompt: &str) -> Result<String>;

    /// Reads one value, offering `choices` as candidates. Free text is
    /// allowed. `Ok(None)` means the user kept the current value.
    ///
    /// # Errors
    ///
    /// Returns an error if input cannot be read.
    fn read_choice(
        &mut self,
        prompt: &str,
        choices: &[String],
        initial: Option<&str>,
    ) -> Result<Option<String>>;
}
