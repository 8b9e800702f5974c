//! A switch cycling through mutually exclusive values.

use serde::{Deserialize, Serialize};

use crate::display::{Rendered, Segment};
use crate::error::Result;
use crate::format::ArgumentFormat;

/// Glyph placed between the labels of an exclusive switch.
pub const CHOICE_SEPARATOR: &str = "|";

/// One choice of an exclusive switch: the value put on the command line and
/// the label shown to the user.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ChoicePair {
    pub value: String,
    pub label: String,
}

impl ChoicePair {
    pub fn new(value: &str, label: &str) -> Self {
        Self {
            value: value.to_string(),
            label: label.to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ExclusiveSwitch {
    pub key: char,
    pub description: String,
    choices: Vec<ChoicePair>,
    tokens: Vec<String>,
    value: Option<String>,
}

impl ExclusiveSwitch {
    /// Creates an unset switch, formatting every choice up front.
    ///
    /// # Errors
    ///
    /// Returns an error if a choice value cannot be rendered with `format`.
    pub fn new(
        key: char,
        description: &str,
        format: ArgumentFormat,
        choices: Vec<ChoicePair>,
    ) -> Result<Self> {
        let tokens = choices
            .iter()
            .map(|choice| format.render(&choice.value))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            key,
            description: description.to_string(),
            choices,
            tokens,
            value: None,
        })
    }

    /// The current formatted token. A stored value that matches none of the
    /// choices reads as unset.
    pub fn value(&self) -> Option<&str> {
        self.position().map(|index| self.tokens[index].as_str())
    }

    /// Sets the current value from a formatted token; returns whether the
    /// token belongs to this switch. Unknown tokens leave the switch unset.
    pub fn set_value(&mut self, token: &str) -> bool {
        if self.tokens.iter().any(|t| t == token) {
            self.value = Some(token.to_string());
            true
        } else {
            self.value = None;
            false
        }
    }

    pub fn reset(&mut self) {
        self.value = None;
    }

    fn position(&self) -> Option<usize> {
        let value = self.value.as_ref()?;
        self.tokens.iter().position(|token| token == value)
    }

    /// Advances to the next choice, wrapping after the last one. An unset
    /// switch moves to the first choice.
    pub fn cycle(&mut self) -> Option<&str> {
        if self.tokens.is_empty() {
            return None;
        }

        let next = match self.position() {
            Some(index) => (index + 1) % self.tokens.len(),
            None => 0,
        };
        self.value = Some(self.tokens[next].clone());
        self.value.as_deref()
    }

    /// Labels joined by [`CHOICE_SEPARATOR`], with the current one active.
    pub fn render(&self) -> Rendered {
        let current = self.position();
        let mut segments = Vec::with_capacity(self.choices.len() * 2);

        for (index, choice) in self.choices.iter().enumerate() {
            if index > 0 {
                segments.push(Segment::inactive(CHOICE_SEPARATOR));
            }
            if current == Some(index) {
                segments.push(Segment::active(choice.label.clone()));
            } else {
                segments.push(Segment::inactive(choice.label.clone()));
            }
        }

        Rendered(segments)
    }

    /// Arguments contributed to the assembled command.
    pub fn args(&self) -> Vec<String> {
        self.value().map(ToString::to_string).into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::Face;

    fn orientation() -> ExclusiveSwitch {
        ExclusiveSwitch::new(
            'o',
            "Orientation",
            ArgumentFormat::parse("-oorientation-requested={value}").unwrap(),
            vec![
                ChoicePair::new("4", "90°"),
                ChoicePair::new("5", "-90°"),
                ChoicePair::new("6", "180°"),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_cycle_wraps() {
        let mut switch = orientation();
        assert_eq!(switch.value(), None);
        assert_eq!(switch.cycle(), Some("-oorientation-requested=4"));
        assert_eq!(switch.cycle(), Some("-oorientation-requested=5"));
        assert_eq!(switch.cycle(), Some("-oorientation-requested=6"));
        assert_eq!(switch.cycle(), Some("-oorientation-requested=4"));
    }

    #[test]
    fn test_cycle_period() {
        for n in 1..=5 {
            let choices = (0..n)
                .map(|i| ChoicePair::new(&i.to_string(), &format!("label {i}")))
                .collect();
            let mut switch =
                ExclusiveSwitch::new('x', "x", ArgumentFormat::parse("--x={v}").unwrap(), choices)
                    .unwrap();
            let first = switch.cycle().map(ToString::to_string);
            for _ in 0..n {
                switch.cycle();
            }
            assert_eq!(switch.value().map(ToString::to_string), first);
        }
    }

    #[test]
    fn test_unknown_value_treated_as_unset() {
        let mut switch = orientation();
        switch.value = Some("-oorientation-requested=9".to_string());
        assert_eq!(switch.value(), None);
        assert_eq!(switch.cycle(), Some("-oorientation-requested=4"));
    }

    #[test]
    fn test_set_value() {
        let mut switch = orientation();
        assert!(switch.set_value("-oorientation-requested=6"));
        assert_eq!(switch.cycle(), Some("-oorientation-requested=4"));
        assert!(!switch.set_value("-oorientation-requested=7"));
        assert_eq!(switch.value(), None);
    }

    #[test]
    fn test_render_unset() {
        let switch = orientation();
        let rendered = switch.render();
        assert_eq!(rendered.to_string(), "90°|-90°|180°");
        assert!(rendered.texts_with(Face::Active).is_empty());
    }

    #[test]
    fn test_render_marks_current_choice() {
        let mut switch = orientation();
        switch.cycle();
        switch.cycle();
        let rendered = switch.render();
        assert_eq!(rendered.to_string(), "90°|-90°|180°");
        assert_eq!(rendered.texts_with(Face::Active), vec!["-90°"]);
        assert_eq!(switch.render(), rendered);
    }

    #[test]
    fn test_args() {
        let mut switch = orientation();
        assert!(switch.args().is_empty());
        switch.cycle();
        assert_eq!(switch.args(), vec!["-oorientation-requested=4"]);
    }
}
