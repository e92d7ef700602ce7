use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// Number of terms dealt for every daily puzzle.
pub const SEQUENCE_LENGTH: usize = 9;

/// Leading terms shown before any guessing starts.
pub const VISIBLE_COUNT: usize = 6;

/// Hidden tail positions, and therefore the wrong-guess ceiling.
pub const MAX_HINTS: u8 = 3;

/// The pattern families a daily sequence can be dealt from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Pattern {
    Arithmetic,
    Geometric,
    Fibonacci,
    Square,
    Prime,
    Alternating,
    SumPrevious,
    Interleaved,
}

impl Pattern {
    /// Selection order is part of the daily draw stream; reordering this
    /// table changes every dealt puzzle.
    pub const ALL: [Pattern; 8] = [
        Pattern::Arithmetic,
        Pattern::Geometric,
        Pattern::Fibonacci,
        Pattern::Square,
        Pattern::Prime,
        Pattern::Alternating,
        Pattern::SumPrevious,
        Pattern::Interleaved,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Pattern::Arithmetic => "Arithmetic",
            Pattern::Geometric => "Geometric",
            Pattern::Fibonacci => "Fibonacci",
            Pattern::Square => "Square",
            Pattern::Prime => "Prime",
            Pattern::Alternating => "Alternating",
            Pattern::SumPrevious => "Sum of Previous",
            Pattern::Interleaved => "Interleaved",
        }
    }

    /// One-line rule description shown once a puzzle is resolved.
    pub fn explanation(&self) -> &'static str {
        match self {
            Pattern::Arithmetic => "Adds a constant number each missing step.",
            Pattern::Geometric => "Multiplies by a constant number each step.",
            Pattern::Fibonacci => "Each number is the sum of the two preceding ones.",
            Pattern::Square => "Consecutive square numbers.",
            Pattern::Prime => "Consecutive prime numbers.",
            Pattern::Alternating => "Alternates between adding two different values.",
            Pattern::SumPrevious => "Each number is the sum of the previous 3 numbers.",
            Pattern::Interleaved => "Two different arithmetic sequences interleaved.",
        }
    }
}

impl Display for Pattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// One day's dealt puzzle. Recreated from the date on every request and
/// never persisted; regenerating for the same date yields an identical
/// value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SequenceData {
    pub numbers: Vec<i64>,
    pub visible_count: usize,
    pub pattern: Pattern,
    pub explanation: String,
}

impl SequenceData {
    pub fn visible(&self) -> &[i64] {
        &self.numbers[..self.visible_count.min(self.numbers.len())]
    }

    pub fn hidden(&self) -> &[i64] {
        &self.numbers[self.visible_count.min(self.numbers.len())..]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visible_hidden_split() {
        let sequence = SequenceData {
            numbers: vec![1, 2, 3, 4, 5, 6, 7, 8, 9],
            visible_count: VISIBLE_COUNT,
            pattern: Pattern::Arithmetic,
            explanation: Pattern::Arithmetic.explanation().to_string(),
        };

        assert_eq!(sequence.visible(), &[1, 2, 3, 4, 5, 6]);
        assert_eq!(sequence.hidden(), &[7, 8, 9]);
    }

    #[test]
    fn test_pattern_names_are_stable() {
        assert_eq!(Pattern::SumPrevious.name(), "Sum of Previous");
        assert_eq!(Pattern::Arithmetic.to_string(), "Arithmetic");
    }

    #[test]
    fn test_all_patterns_listed_once() {
        for pattern in Pattern::ALL {
            assert_eq!(
                Pattern::ALL.iter().filter(|p| **p == pattern).count(),
                1,
                "pattern {} should appear exactly once",
                pattern
            );
        }
    }
}
