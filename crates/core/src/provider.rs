//! Sources of candidate values for dynamic options.

use crate::error::Result;

/// A zero-argument, blocking source of candidate values.
///
/// Implemented for closures returning `Result<Vec<String>>`, for
/// [`crate::filter::CommandFilter`] and for [`StaticChoices`].
pub trait ChoiceProvider {
    /// Computes the candidate list.
    ///
    /// # Errors
    ///
    /// Returns an error if the candidates cannot be computed, for example when
    /// a backing program cannot be launched.
    fn invoke(&self) -> Result<Vec<String>>;
}

impl<F> ChoiceProvider for F
where
    F: Fn() -> Result<Vec<String>>,
{
    fn invoke(&self) -> Result<Vec<String>> {
        self()
    }
}

/// A provider returning a fixed list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticChoices(pub Vec<String>);

impl ChoiceProvider for StaticChoices {
    fn invoke(&self) -> Result<Vec<String>> {
        Ok(self.0.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_closure_provider() {
        let provider = || -> Result<Vec<String>> { Ok(vec!["a".to_string(), "b".to_string()]) };
        assert_eq!(provider.invoke().unwrap(), vec!["a", "b"]);
    }

    #[test]
    fn test_failing_closure_provider() {
        let provider = || -> Result<Vec<String>> { Err(Error::Provider("offline".to_string())) };
        assert!(matches!(provider.invoke(), Err(Error::Provider(_))));
    }

    #[test]
    fn test_static_choices() {
        let provider = StaticChoices(vec!["a4".to_string(), "letter".to_string()]);
        assert_eq!(provider.invoke().unwrap(), vec!["a4", "letter"]);
    }
}
