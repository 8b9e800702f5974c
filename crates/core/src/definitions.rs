use std::fmt::{Display, Formatter};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::context::ContextProvider;
use crate::error::{Error, Result};
use crate::files::FileOrBufferWidget;
use crate::filter::{nth_field, CommandFilter};
use crate::format::ArgumentFormat;
use crate::option::DynamicChoiceOption;
use crate::provider::StaticChoices;
use crate::switch::{ChoicePair, ExclusiveSwitch};
use crate::widget::{assemble_command, Widget};

/// Where a dynamic option gets its candidates from.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(untagged)]
pub enum ChoiceSource {
    /// Run a program and keep one whitespace-separated field of every line.
    Command {
        command: Vec<String>,
        #[serde(default)]
        field: usize,
    },
    /// A literal list.
    Values { values: Vec<String> },
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum WidgetDefinition {
    Files {
        key: String,
        description: String,
        argument: Option<String>,
    },
    Switch {
        key: String,
        description: String,
        argument: String,
        choices: Vec<ChoicePair>,
    },
    Option {
        key: String,
        description: String,
        argument: String,
        #[serde(default)]
        cached: bool,
        source: ChoiceSource,
    },
}

impl WidgetDefinition {
    pub fn key(&self) -> &str {
        match self {
            WidgetDefinition::Files { key, .. }
            | WidgetDefinition::Switch { key, .. }
            | WidgetDefinition::Option { key, .. } => key,
        }
    }

    pub fn description(&self) -> &str {
        match self {
            WidgetDefinition::Files { description, .. }
            | WidgetDefinition::Switch { description, .. }
            | WidgetDefinition::Option { description, .. } => description,
        }
    }

    /// The key as a single character.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidWidgetKey`] unless the key is exactly one
    /// character.
    pub fn key_char(&self) -> Result<char> {
        let mut chars = self.key().chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Ok(c),
            _ => Err(Error::InvalidWidgetKey(self.key().to_string())),
        }
    }

    /// Instantiates the widget for one interaction session.
    ///
    /// # Errors
    ///
    /// Returns an error for invalid keys or argument formats.
    pub fn build<C: ContextProvider + ?Sized>(&self, context: &C) -> Result<Widget> {
        let key = self.key_char()?;

        Ok(match self {
            WidgetDefinition::Files {
                description,
                argument,
                ..
            } => {
                let mut widget = FileOrBufferWidget::new(key, description, argument.as_deref());
                widget.init_value(context);
                Widget::Files(widget)
            }
            WidgetDefinition::Switch {
                description,
                argument,
                choices,
                ..
            } => Widget::Switch(ExclusiveSwitch::new(
                key,
                description,
                ArgumentFormat::parse(argument)?,
                choices.clone(),
            )?),
            WidgetDefinition::Option {
                description,
                argument,
                cached,
                source,
                ..
            } => {
                let format = ArgumentFormat::parse(argument)?;
                let option = match source {
                    ChoiceSource::Command { command, field } => {
                        let Some((program, arguments)) = command.split_first() else {
                            return Err(Error::EmptyCommand(description.clone()));
                        };
                        let provider = CommandFilter {
                            program: program.clone(),
                            arguments: arguments.to_vec(),
                            map: nth_field(*field),
                        };
                        DynamicChoiceOption::new(key, description, format, provider, *cached)
                    }
                    ChoiceSource::Values { values } => DynamicChoiceOption::new(
                        key,
                        description,
                        format,
                        StaticChoices(values.clone()),
                        *cached,
                    ),
                };
                Widget::DynamicOption(option)
            }
        })
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct MenuDefinition {
    pub id: String,
    pub description: Option<String>,
    pub command: Vec<String>,
    pub widgets: Vec<WidgetDefinition>,
}

impl Display for MenuDefinition {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        match &self.description {
            Some(desc) => write!(formatter, "{} ({})", self.id, desc),
            None => formatter.write_str(&self.id),
        }
    }
}

impl MenuDefinition {
    /// Instantiates every widget of the menu for one interaction session.
    ///
    /// # Errors
    ///
    /// Returns an error if any widget definition is invalid.
    pub fn build<C: ContextProvider + ?Sized>(&self, context: &C) -> Result<Menu> {
        debug!("Building menu `{}`", self.id);
        let widgets = self
            .widgets
            .iter()
            .map(|definition| definition.build(context))
            .collect::<Result<Vec<_>>>()?;

        Ok(Menu {
            id: self.id.clone(),
            description: self.description.clone(),
            command: self.command.clone(),
            widgets,
        })
    }
}

/// Live widgets of one menu for one interaction session.
#[derive(Debug)]
pub struct Menu {
    pub id: String,
    pub description: Option<String>,
    pub command: Vec<String>,
    pub widgets: Vec<Widget>,
}

impl Menu {
    pub fn widget_mut(&mut self, key: char) -> Option<&mut Widget> {
        self.widgets.iter_mut().find(|widget| widget.key() == key)
    }

    /// The command line built from the current widget values.
    ///
    /// # Errors
    ///
    /// Returns an error if an option value cannot be formatted.
    pub fn assemble(&self) -> Result<Vec<String>> {
        assemble_command(&self.command, &self.widgets)
    }
}
