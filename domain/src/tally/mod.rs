//! Answer tally for panel voting
//!
//! Every panel model that responds contributes an ordered list of answer
//! options it believes are correct. The tally flattens those lists into a
//! multiset, counts occurrences, and keeps every option tied for the
//! maximum count. Returning *all* tied winners preserves ambiguity instead
//! of hiding it behind an arbitrary pick.

pub mod parsing;

use std::collections::BTreeMap;

/// Vote counts aggregated across all responding panel models
///
/// # Example
///
/// ```
/// use quizpanel_domain::tally::AnswerTally;
///
/// let responses = vec![
///     vec!["A".to_string()],
///     vec!["A".to_string(), "B".to_string()],
///     vec!["B".to_string()],
/// ];
///
/// let tally = AnswerTally::from_answer_lists(&responses);
/// assert_eq!(tally.max_count(), 2);
/// assert_eq!(tally.winners(), vec!["A".to_string(), "B".to_string()]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerTally {
    // BTreeMap keeps iteration order deterministic regardless of how
    // model responses arrived.
    counts: BTreeMap<String, usize>,
}

impl AnswerTally {
    /// Build a tally from the answer lists of all responding models
    ///
    /// Abstaining models must be filtered out before this point; an empty
    /// list here means the model responded and cast zero votes.
    pub fn from_answer_lists(responses: &[Vec<String>]) -> Self {
        let mut counts = BTreeMap::new();
        for answer in responses.iter().flatten() {
            *counts.entry(answer.clone()).or_insert(0usize) += 1;
        }
        Self { counts }
    }

    /// Occurrence count for a single answer option
    pub fn count(&self, answer: &str) -> usize {
        self.counts.get(answer).copied().unwrap_or(0)
    }

    /// Total number of (model, answer) votes observed
    pub fn total_votes(&self) -> usize {
        self.counts.values().sum()
    }

    /// The maximum occurrence count, 0 when no votes were cast
    pub fn max_count(&self) -> usize {
        self.counts.values().copied().max().unwrap_or(0)
    }

    /// Whether no votes were cast at all
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// All answer options tied for the maximum count, sorted
    /// lexicographically; empty when no votes were cast
    pub fn winners(&self) -> Vec<String> {
        let max = self.max_count();
        if max == 0 {
            return Vec::new();
        }
        // BTreeMap iteration is already sorted by key
        self.counts
            .iter()
            .filter(|(_, count)| **count == max)
            .map(|(answer, _)| answer.clone())
            .collect()
    }

    /// Iterate over (answer, count) pairs in sorted order
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.counts.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lists(input: &[&[&str]]) -> Vec<Vec<String>> {
        input
            .iter()
            .map(|list| list.iter().map(|s| s.to_string()).collect())
            .collect()
    }

    #[test]
    fn test_tied_winners_sorted() {
        let responses = lists(&[&["A"], &["A", "B"], &["B"]]);
        let tally = AnswerTally::from_answer_lists(&responses);

        assert_eq!(tally.max_count(), 2);
        assert_eq!(tally.winners(), vec!["A", "B"]);
    }

    #[test]
    fn test_single_winner() {
        let responses = lists(&[&["C"], &["C"], &["D"]]);
        let tally = AnswerTally::from_answer_lists(&responses);

        assert_eq!(tally.winners(), vec!["C"]);
        assert_eq!(tally.count("C"), 2);
        assert_eq!(tally.count("D"), 1);
        assert_eq!(tally.total_votes(), 3);
    }

    #[test]
    fn test_order_independence() {
        let forward = lists(&[&["A"], &["A", "B"], &["B"], &["C"]]);
        let mut reversed = forward.clone();
        reversed.reverse();

        let a = AnswerTally::from_answer_lists(&forward);
        let b = AnswerTally::from_answer_lists(&reversed);
        assert_eq!(a.winners(), b.winners());
        assert_eq!(a, b);
    }

    #[test]
    fn test_all_empty_lists_yield_empty_winners() {
        let responses = lists(&[&[], &[], &[]]);
        let tally = AnswerTally::from_answer_lists(&responses);

        assert!(tally.is_empty());
        assert_eq!(tally.max_count(), 0);
        assert!(tally.winners().is_empty());
    }

    #[test]
    fn test_no_responses_yield_empty_winners() {
        let tally = AnswerTally::from_answer_lists(&[]);
        assert!(tally.winners().is_empty());
    }

    #[test]
    fn test_duplicate_votes_within_one_response_count() {
        // A model repeating an option still casts two votes for it; the
        // tally counts occurrences, not distinct voters.
        let responses = lists(&[&["A", "A"], &["B"]]);
        let tally = AnswerTally::from_answer_lists(&responses);
        assert_eq!(tally.winners(), vec!["A"]);
    }

    #[test]
    fn test_deterministic_tie_order() {
        let responses = lists(&[&["D"], &["B"], &["C"], &["A"]]);
        let tally = AnswerTally::from_answer_lists(&responses);
        assert_eq!(tally.winners(), vec!["A", "B", "C", "D"]);
    }
}
