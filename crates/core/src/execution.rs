use std::process::{Command, Stdio};

use log::info;

use crate::error::{Error, Result};

/// Executes an assembled command line with inherited stdio.
///
/// # Errors
///
/// Returns an error if the command is empty, cannot be started, or exits
/// with non-zero status.
pub fn execute_command(command_line: &[String]) -> Result<()> {
    let Some((program, arguments)) = command_line.split_first() else {
        return Err(Error::Misc("Cannot execute an empty command".to_string()));
    };

    info!("Executing `{}` with arguments {:?}", program, arguments);

    let subprocess_exit_success = Command::new(program)
        .args(arguments)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .spawn()
        .map_err(|e| Error::launch_error(program.clone(), e))?
        .wait()?
        .success();

    if subprocess_exit_success {
        Ok(())
    } else {
        Err(Error::SubProcessExit)
    }
}
