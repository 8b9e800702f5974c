//! Styled text produced by widget renderers.
//!
//! Widgets only decide which parts of their display are active; the host maps
//! a [`Face`] to concrete terminal attributes.

use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Face {
    /// The currently selected value.
    Active,
    /// Unselected alternatives, separators and placeholders.
    Inactive,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub text: String,
    pub face: Face,
}

impl Segment {
    pub fn active(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            face: Face::Active,
        }
    }

    pub fn inactive(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            face: Face::Inactive,
        }
    }
}

/// An ordered list of styled segments.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Rendered(pub Vec<Segment>);

impl Rendered {
    pub fn single(segment: Segment) -> Self {
        Self(vec![segment])
    }

    pub fn segments(&self) -> &[Segment] {
        &self.0
    }

    /// Text of every segment carrying `face`.
    pub fn texts_with(&self, face: Face) -> Vec<&str> {
        self.0
            .iter()
            .filter(|segment| segment.face == face)
            .map(|segment| segment.text.as_str())
            .collect()
    }
}

impl Display for Rendered {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        for segment in &self.0 {
            formatter.write_str(&segment.text)?;
        }
        Ok(())
    }
}
