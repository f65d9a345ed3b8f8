/// Substring predicate evaluated against lowercased free text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keywords {
    /// At least one keyword appears.
    Any(&'static [&'static str]),
    /// Every keyword appears.
    All(&'static [&'static str]),
}

impl Keywords {
    pub fn matches(&self, text: &str) -> bool {
        match self {
            Keywords::Any(words) => words.iter().any(|word| text.contains(word)),
            Keywords::All(words) => words.iter().all(|word| text.contains(word)),
        }
    }
}

/// One row of an ordered classification table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeywordRule<T> {
    pub keywords: Keywords,
    pub outcome: T,
}

impl<T> KeywordRule<T> {
    pub const fn any(words: &'static [&'static str], outcome: T) -> Self {
        Self {
            keywords: Keywords::Any(words),
            outcome,
        }
    }

    pub const fn all(words: &'static [&'static str], outcome: T) -> Self {
        Self {
            keywords: Keywords::All(words),
            outcome,
        }
    }
}

/// Outcome of the first row whose keywords match; table order is the priority order.
pub fn first_match<T: Copy>(rules: &[KeywordRule<T>], text: &str) -> Option<T> {
    let lowered = text.to_lowercase();
    rules
        .iter()
        .find(|rule| rule.keywords.matches(&lowered))
        .map(|rule| rule.outcome)
}

/// Outcomes of every matching row, in table order.
pub fn all_matches<T: Copy>(rules: &[KeywordRule<T>], text: &str) -> Vec<T> {
    let lowered = text.to_lowercase();
    rules
        .iter()
        .filter(|rule| rule.keywords.matches(&lowered))
        .map(|rule| rule.outcome)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const RULES: &[KeywordRule<u8>] = &[
        KeywordRule::all(&["trust", "expert"], 1),
        KeywordRule::any(&["price", "cost"], 2),
        KeywordRule::any(&["expert"], 3),
    ];

    #[test]
    fn first_match_honours_table_order() {
        assert_eq!(first_match(RULES, "Trust the EXPERT on price"), Some(1));
        assert_eq!(first_match(RULES, "expert opinion on cost"), Some(2));
        assert_eq!(first_match(RULES, "expert"), Some(3));
        assert_eq!(first_match(RULES, "undecided"), None);
    }

    #[test]
    fn all_matches_collects_every_hit() {
        assert_eq!(all_matches(RULES, "trusted expert, low cost"), vec![1, 2, 3]);
        assert!(all_matches(RULES, "").is_empty());
    }
}
