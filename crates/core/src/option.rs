//! An option whose candidate values are computed when it is read.

use std::fmt::{Debug, Formatter};

use log::debug;

use crate::display::{Rendered, Segment};
use crate::error::Result;
use crate::format::ArgumentFormat;
use crate::prompt::Prompter;
use crate::provider::ChoiceProvider;

/// Candidates of a dynamic option. `choices` is `None` until the provider
/// has been invoked for the current read, which is distinct from an empty
/// candidate list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OptionChoiceState {
    pub choices: Option<Vec<String>>,
    pub cached: bool,
}

pub struct DynamicChoiceOption {
    pub key: char,
    pub description: String,
    format: ArgumentFormat,
    provider: Box<dyn ChoiceProvider>,
    state: OptionChoiceState,
    value: Option<String>,
}

impl DynamicChoiceOption {
    pub fn new<P>(
        key: char,
        description: &str,
        format: ArgumentFormat,
        provider: P,
        cached: bool,
    ) -> Self
    where
        P: ChoiceProvider + 'static,
    {
        Self {
            key,
            description: description.to_string(),
            format,
            provider: Box::new(provider),
            state: OptionChoiceState {
                choices: None,
                cached,
            },
            value: None,
        }
    }

    pub fn state(&self) -> &OptionChoiceState {
        &self.state
    }

    /// The raw selected value, without the argument format applied.
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    pub fn set_value(&mut self, value: Option<String>) {
        self.value = value;
    }

    /// Drops cached candidates so the next read invokes the provider again.
    pub fn invalidate(&mut self) {
        self.state.choices = None;
    }

    /// Reads a value, computing the candidates first if they are not known.
    ///
    /// Uncached options forget their candidates after every read, successful
    /// or not. Cached options keep them until [`Self::invalidate`].
    ///
    /// # Errors
    ///
    /// Provider and prompt errors propagate; on a provider error no
    /// candidates are retained.
    pub fn read(&mut self, prompter: &mut dyn Prompter) -> Result<Option<&str>> {
        let result = self.read_with_choices(prompter);

        if !self.state.cached {
            self.state.choices = None;
        }

        if let Some(value) = result? {
            self.value = Some(value);
        }

        Ok(self.value.as_deref())
    }

    fn read_with_choices(&mut self, prompter: &mut dyn Prompter) -> Result<Option<String>> {
        let choices = match self.state.choices.take() {
            Some(choices) => {
                debug!("Reusing {} cached choices for `{}`", choices.len(), self.description);
                choices
            }
            None => {
                let choices = self.provider.invoke()?;
                debug!("Provider for `{}` returned {} choices", self.description, choices.len());
                choices
            }
        };
        let choices = self.state.choices.insert(choices);

        prompter.read_choice(
            &format!("{}: ", self.description),
            choices,
            self.value.as_deref(),
        )
    }

    pub fn render(&self) -> Rendered {
        match &self.value {
            Some(value) => match self.format.render(value) {
                Ok(token) => Rendered::single(Segment::active(token)),
                Err(_) => Rendered::single(Segment::active(value.clone())),
            },
            None => {
                let placeholder = self
                    .format
                    .render("")
                    .map(|prefix| prefix.trim_end().to_string())
                    .unwrap_or_else(|_| self.format.to_string());
                Rendered::single(Segment::inactive(placeholder))
            }
        }
    }

    /// Arguments contributed to the assembled command.
    ///
    /// # Errors
    ///
    /// Returns an error if the value cannot be rendered with the format.
    pub fn args(&self) -> Result<Vec<String>> {
        match &self.value {
            Some(value) => self.format.render_args(value),
            None => Ok(Vec::new()),
        }
    }
}

impl Debug for DynamicChoiceOption {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DynamicChoiceOption")
            .field("key", &self.key)
            .field("description", &self.description)
            .field("format", &self.format)
            .field("state", &self.state)
            .field("value", &self.value)
            .finish_non_exhaustive()
    }
}
