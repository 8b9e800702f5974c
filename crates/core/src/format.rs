//! Argument formats turn a raw widget value into a command-line token.
//!
//! A format is a `leon` template with exactly one placeholder, for example
//! `-oorientation-requested={value}` or `-d {value}`.

use std::collections::HashMap;
use std::fmt::{Display, Formatter};

use leon::Template;

use crate::error::{Error, Result};

const PLACEHOLDER_MARK: &str = "\u{0}";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArgumentFormat {
    source: String,
    placeholder: String,
}

impl ArgumentFormat {
    /// Parses a template, requiring exactly one placeholder.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Parse`] for malformed templates and
    /// [`Error::PlaceholderCount`] when the template does not have exactly one
    /// placeholder.
    pub fn parse(source: &str) -> Result<Self> {
        let template = Template::parse(source)?;

        let mut keys: Vec<String> = Vec::new();
        for key in template.keys() {
            let key = (*key).to_string();
            if !keys.contains(&key) {
                keys.push(key);
            }
        }

        if keys.len() != 1 {
            return Err(Error::PlaceholderCount(source.to_string(), keys.len()));
        }

        Ok(Self {
            source: source.to_string(),
            placeholder: keys.remove(0),
        })
    }

    /// Renders the single command-line token for `value`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Render`] if the template cannot be rendered.
    pub fn render(&self, value: &str) -> Result<String> {
        let template = Template::parse(&self.source)?;
        let mut context: HashMap<String, String> = HashMap::new();
        context.insert(self.placeholder.clone(), value.to_string());
        Ok(template.render(&context)?)
    }

    /// Renders `value` as the argument vector the command receives.
    ///
    /// When the literal text before the placeholder ends with a space
    /// (`-d {value}`), that literal becomes its own word and the rest of the
    /// token the next one. Everything else yields a single word.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Render`] if the template cannot be rendered.
    pub fn render_args(&self, value: &str) -> Result<Vec<String>> {
        let token = self.render(value)?;
        let prefix = self.literal_prefix()?;

        if prefix.ends_with(' ') && token.starts_with(&prefix) {
            let flag = prefix.trim_end();
            if !flag.is_empty() {
                return Ok(vec![flag.to_string(), token[prefix.len()..].to_string()]);
            }
        }

        Ok(vec![token])
    }

    /// Literal text in front of the first placeholder occurrence.
    fn literal_prefix(&self) -> Result<String> {
        let marked = self.render(PLACEHOLDER_MARK)?;
        Ok(match marked.find(PLACEHOLDER_MARK) {
            Some(index) => marked[..index].to_string(),
            None => marked,
        })
    }
}

impl Display for ArgumentFormat {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(&self.source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_orientation() {
        let format = ArgumentFormat::parse("-oorientation-requested={value}").unwrap();
        assert_eq!(format.render("4").unwrap(), "-oorientation-requested=4");
    }

    #[test]
    fn test_parse_without_placeholder() {
        let result = ArgumentFormat::parse("--verbose");
        assert!(matches!(result, Err(Error::PlaceholderCount(_, 0))));
    }

    #[test]
    fn test_parse_with_two_placeholders() {
        let result = ArgumentFormat::parse("{a}={b}");
        assert!(matches!(result, Err(Error::PlaceholderCount(_, 2))));
    }

    #[test]
    fn test_repeated_placeholder_counts_once() {
        let format = ArgumentFormat::parse("{v}:{v}").unwrap();
        assert_eq!(format.render("x").unwrap(), "x:x");
    }

    #[test]
    fn test_render_args_detached_value() {
        let format = ArgumentFormat::parse("-d {value}").unwrap();
        assert_eq!(
            format.render_args("Office Printer").unwrap(),
            vec!["-d", "Office Printer"]
        );
    }

    #[test]
    fn test_render_args_literal_with_space() {
        let format = ArgumentFormat::parse("-o media {value}").unwrap();
        assert_eq!(format.render_args("a4").unwrap(), vec!["-o media", "a4"]);

        let format = ArgumentFormat::parse("-o media={value}").unwrap();
        assert_eq!(format.render_args("a4").unwrap(), vec!["-o media=a4"]);
    }

    #[test]
    fn test_render_args_value_only() {
        let format = ArgumentFormat::parse(" {value}").unwrap();
        assert_eq!(format.render_args("x").unwrap(), vec![" x"]);
    }

    #[test]
    fn test_render_args_attached_value() {
        let format = ArgumentFormat::parse("-omedia={value}").unwrap();
        assert_eq!(format.render_args("a4").unwrap(), vec!["-omedia=a4"]);
    }
}
