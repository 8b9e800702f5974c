//! The closed set of argument widgets and their shared operations.

use crate::display::Rendered;
use crate::error::Result;
use crate::files::FileOrBufferWidget;
use crate::option::DynamicChoiceOption;
use crate::prompt::Prompter;
use crate::switch::ExclusiveSwitch;

#[derive(Debug)]
pub enum Widget {
    Files(FileOrBufferWidget),
    Switch(ExclusiveSwitch),
    DynamicOption(DynamicChoiceOption),
}

impl Widget {
    #[must_use]
    pub fn key(&self) -> char {
        match self {
            Widget::Files(w) => w.key,
            Widget::Switch(w) => w.key,
            Widget::DynamicOption(w) => w.key,
        }
    }

    #[must_use]
    pub fn description(&self) -> &str {
        match self {
            Widget::Files(w) => &w.description,
            Widget::Switch(w) => &w.description,
            Widget::DynamicOption(w) => &w.description,
        }
    }

    /// Handles the widget's key being pressed. Switches cycle without
    /// prompting.
    ///
    /// # Errors
    ///
    /// Propagates prompt and provider errors.
    pub fn read(&mut self, prompter: &mut dyn Prompter) -> Result<()> {
        match self {
            Widget::Files(w) => {
                w.read(prompter)?;
            }
            Widget::Switch(w) => {
                w.cycle();
            }
            Widget::DynamicOption(w) => {
                w.read(prompter)?;
            }
        }
        Ok(())
    }

    #[must_use]
    pub fn render(&self) -> Rendered {
        match self {
            Widget::Files(w) => w.render(),
            Widget::Switch(w) => w.render(),
            Widget::DynamicOption(w) => w.render(),
        }
    }

    /// Clears the widget's value. Cached option candidates are dropped too.
    pub fn reset(&mut self) {
        match self {
            Widget::Files(w) => w.value = None,
            Widget::Switch(w) => w.reset(),
            Widget::DynamicOption(w) => {
                w.set_value(None);
                w.invalidate();
            }
        }
    }

    /// Arguments this widget contributes to the assembled command.
    ///
    /// # Errors
    ///
    /// Returns an error if an option value cannot be formatted.
    pub fn args(&self) -> Result<Vec<String>> {
        match self {
            Widget::Files(w) => Ok(w.args()),
            Widget::Switch(w) => Ok(w.args()),
            Widget::DynamicOption(w) => w.args(),
        }
    }
}

/// Assembles `command` followed by every widget's arguments. Files come last
/// so that options precede operands.
///
/// # Errors
///
/// Returns an error if an option value cannot be formatted.
pub fn assemble_command(command: &[String], widgets: &[Widget]) -> Result<Vec<String>> {
    let mut assembled = command.to_vec();
    let mut operands = Vec::new();

    for widget in widgets {
        match widget {
            Widget::Files(w) => operands.extend(w.args()),
            other => assembled.extend(other.args()?),
        }
    }

    assembled.extend(operands);
    Ok(assembled)
}
