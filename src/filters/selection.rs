use std::fmt;

use super::choice::Choice;

/// One picked value, or a comma-separated set of them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection<T> {
    Single(T),
    /// Distinct values in the order they were typed.
    Multiple(Vec<T>),
}

impl<T: Choice> Selection<T> {
    /// Parses user input against the allowed keywords of `T`.
    ///
    /// Input is trimmed and lower-cased. A comma turns the answer into a
    /// [`Selection::Multiple`]; every item must then be valid, so an empty
    /// item such as the tail of `"chicago,"` rejects the whole answer.
    pub fn parse(input: &str) -> Option<Self> {
        let input = input.trim().to_lowercase();

        if !input.contains(',') {
            return T::from_key(&input).map(Selection::Single);
        }

        let mut values = Vec::new();
        for item in input.split(',') {
            let value = T::from_key(item.trim())?;
            if !values.contains(&value) {
                values.push(value);
            }
        }

        Some(Selection::Multiple(values))
    }

    pub fn values(&self) -> &[T] {
        match self {
            Selection::Single(value) => std::slice::from_ref(value),
            Selection::Multiple(values) => values,
        }
    }

    pub fn contains(&self, value: T) -> bool {
        match self {
            Selection::Single(selected) => *selected == value,
            Selection::Multiple(selected) => selected.contains(&value),
        }
    }
}

impl<T: Choice> fmt::Display for Selection<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let keys: Vec<&str> = self.values().iter().map(|v| v.key()).collect();
        f.write_str(&keys.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::{City, Month};
    use chrono::Weekday;

    #[test]
    fn test_parse_single_is_case_and_space_insensitive() {
        assert_eq!(
            Selection::<City>::parse("  New York City "),
            Some(Selection::Single(City::NewYorkCity))
        );
    }

    #[test]
    fn test_parse_multiple_trims_each_item() {
        assert_eq!(
            Selection::<City>::parse("Chicago , washington"),
            Some(Selection::Multiple(vec![City::Chicago, City::Washington]))
        );
    }

    #[test]
    fn test_parse_multiple_drops_duplicates_keeping_first() {
        assert_eq!(
            Selection::<Month>::parse("march,january,march"),
            Some(Selection::Multiple(vec![Month::March, Month::January]))
        );
    }

    #[test]
    fn test_parse_rejects_mixed_valid_and_invalid() {
        assert_eq!(Selection::<City>::parse("chicago, boston"), None);
    }

    #[test]
    fn test_parse_rejects_empty_items() {
        assert_eq!(Selection::<City>::parse("chicago,"), None);
        assert_eq!(Selection::<City>::parse(","), None);
        assert_eq!(Selection::<City>::parse(""), None);
    }

    #[test]
    fn test_contains_and_values() {
        let single = Selection::Single(Weekday::Mon);
        assert!(single.contains(Weekday::Mon));
        assert!(!single.contains(Weekday::Tue));
        assert_eq!(single.values(), &[Weekday::Mon]);

        let multiple = Selection::Multiple(vec![Weekday::Sat, Weekday::Sun]);
        assert!(multiple.contains(Weekday::Sun));
        assert!(!multiple.contains(Weekday::Fri));
        assert_eq!(multiple.values(), &[Weekday::Sat, Weekday::Sun]);
    }

    #[test]
    fn test_display_lists_keywords() {
        let selection = Selection::Multiple(vec![Month::January, Month::June]);
        assert_eq!(selection.to_string(), "january, june");
    }
}
