use std::fs::File;
use std::io::{stdin, stdout, BufRead, BufReader, IsTerminal, Stdout, Write};
use std::path::Path;

use log::debug;
use menu_args_core::error::{Error, Result};
use menu_args_core::paths::validate_existing_file;
use menu_args_core::prompt::Prompter;

use crate::selection::{rank_choices, select_choice};

/// Prompts on a line-oriented reader and writer.
pub struct LinePrompter<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> LinePrompter<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        let mut input = String::new();
        let read = self.reader.read_line(&mut input).map_err(Error::Stdio)?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(input.trim().to_string()))
    }
}

/// Controlling terminal, used for answers when standard input is piped.
pub const TTY_PATH: &str = "/dev/tty";

/// Where prompt answers are read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptInput {
    Stdin,
    Tty,
}

impl PromptInput {
    /// Piped standard input is the buffer handed to the command, so answers
    /// come from the terminal instead.
    pub fn detect(stdin_is_terminal: bool) -> Self {
        if stdin_is_terminal {
            PromptInput::Stdin
        } else {
            PromptInput::Tty
        }
    }
}

/// Opens the reader for `input`. Standard input is only touched for
/// [`PromptInput::Stdin`].
///
/// # Errors
///
/// Returns an error if `tty_path` cannot be opened.
pub fn open_prompt_reader(input: PromptInput, tty_path: &Path) -> Result<Box<dyn BufRead>> {
    match input {
        PromptInput::Stdin => Ok(Box::new(stdin().lock())),
        PromptInput::Tty => {
            let tty = File::open(tty_path).map_err(|e| {
                Error::io_error(
                    "terminal".to_string(),
                    tty_path.display().to_string(),
                    e,
                )
            })?;
            debug!("Reading prompt answers from `{}`", tty_path.display());
            Ok(Box::new(BufReader::new(tty)))
        }
    }
}

/// Prompter for the interactive host, writing to standard output.
///
/// # Errors
///
/// Returns an error if standard input is piped and the terminal cannot be
/// opened.
pub fn terminal_prompter() -> Result<LinePrompter<Box<dyn BufRead>, Stdout>> {
    let input = PromptInput::detect(stdin().is_terminal());
    let reader = open_prompt_reader(input, Path::new(TTY_PATH))?;
    Ok(LinePrompter::new(reader, stdout()))
}

impl<R: BufRead, W: Write> Prompter for LinePrompter<R, W> {
    fn read_file(&mut self, prompt: &str) -> Result<String> {
        loop {
            write!(self.writer, "{prompt}")?;
            self.writer.flush()?;

            let Some(input) = self.read_line()? else {
                return Err(Error::Misc("No file entered".to_string()));
            };

            if input.is_empty() {
                continue;
            }

            match validate_existing_file(&input) {
                Ok(_) => return Ok(input),
                Err(Error::NotAFile(path)) => {
                    debug!("Rejected `{}`", path);
                    writeln!(self.writer, "`{path}` is not an existing file")?;
                }
                Err(e) => return Err(e),
            }
        }
    }

    fn read_choice(
        &mut self,
        prompt: &str,
        choices: &[String],
        initial: Option<&str>,
    ) -> Result<Option<String>> {
        for (index, choice) in rank_choices("", choices).iter().enumerate() {
            writeln!(self.writer, "  {}) {}", index + 1, choice)?;
        }

        if let Some(initial) = initial {
            write!(self.writer, "{prompt}[{initial}] ")?;
        } else {
            write!(self.writer, "{prompt}")?;
        }
        self.writer.flush()?;

        let Some(input) = self.read_line()? else {
            return Ok(None);
        };

        Ok(select_choice(&input, choices))
    }
}
