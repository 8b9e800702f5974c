//! Turning typed input into a choice.

use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;

/// Candidates matching `filter`, best match first. An empty filter keeps
/// every candidate in its original order.
pub fn rank_choices<'a>(filter: &str, choices: &'a [String]) -> Vec<&'a String> {
    if filter.is_empty() {
        return choices.iter().collect();
    }

    let matcher = SkimMatcherV2::default();
    let mut scored: Vec<(i64, &String)> = choices
        .iter()
        .filter_map(|choice| matcher.fuzzy_match(choice, filter).map(|score| (score, choice)))
        .collect();
    scored.sort_by(|a, b| b.0.cmp(&a.0));
    scored.into_iter().map(|(_, choice)| choice).collect()
}

/// Resolves typed input against `choices`.
///
/// Empty input keeps the current value (`None`). Otherwise, in order: an
/// exact value, a 1-based index, the only fuzzy match, or the input itself
/// as free text.
pub fn select_choice(input: &str, choices: &[String]) -> Option<String> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }

    if let Some(exact) = choices.iter().find(|choice| *choice == input) {
        return Some(exact.clone());
    }

    if let Ok(index) = input.parse::<usize>() {
        if (1..=choices.len()).contains(&index) {
            return Some(choices[index - 1].clone());
        }
    }

    let matches = rank_choices(input, choices);
    if let [only] = matches.as_slice() {
        return Some((*only).clone());
    }

    Some(input.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn printers() -> Vec<String> {
        vec!["office-laser".to_string(), "lobby-inkjet".to_string()]
    }

    #[test]
    fn test_empty_input_keeps_value() {
        assert_eq!(select_choice("  ", &printers()), None);
    }

    #[test]
    fn test_index() {
        assert_eq!(select_choice("2", &printers()), Some("lobby-inkjet".to_string()));
    }

    #[test]
    fn test_index_out_of_range_is_free_text() {
        assert_eq!(select_choice("3", &printers()), Some("3".to_string()));
    }

    #[test]
    fn test_exact_value_before_index() {
        let choices = vec!["2".to_string(), "4".to_string(), "6".to_string()];
        assert_eq!(select_choice("2", &choices), Some("2".to_string()));
        assert_eq!(select_choice("3", &choices), Some("6".to_string()));

        let choices = vec!["2".to_string(), "1".to_string()];
        assert_eq!(select_choice("1", &choices), Some("1".to_string()));
    }

    #[test]
    fn test_unique_fuzzy_match() {
        assert_eq!(select_choice("inkj", &printers()), Some("lobby-inkjet".to_string()));
    }

    #[test]
    fn test_free_text() {
        assert_eq!(select_choice("garage", &printers()), Some("garage".to_string()));
    }

    #[test]
    fn test_rank_choices_empty_filter() {
        let choices = printers();
        assert_eq!(rank_choices("", &choices).len(), 2);
    }
}
