//! The solver seam and the registry of known days.

use std::fmt;

use crate::PuzzleError;
use crate::{y2023, y2024};

/// A puzzle answer, kept as the text that would be submitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Answer(String);

impl Answer {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

macro_rules! answer_from {
    ($($t:ty),*) => {
        $(impl From<$t> for Answer {
            fn from(value: $t) -> Self {
                Answer(value.to_string())
            }
        })*
    };
}

answer_from!(u32, u64, usize, i64, String, &str);

/// Solves both parts of one puzzle day.
pub trait Solver: Send + Sync {
    fn part_one(&self, input: &str) -> Result<Answer, PuzzleError>;

    fn part_two(&self, input: &str) -> Result<Answer, PuzzleError>;
}

/// Look up the solver registered for `year` and `day`.
pub fn solver_for(year: u32, day: u32) -> Option<&'static dyn Solver> {
    match (year, day) {
        (2023, 1) => Some(&y2023::day01::Trebuchet),
        (2024, 1) => Some(&y2024::day01::HistorianHysteria),
        (2024, 2) => Some(&y2024::day02::RedNosedReports),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registered_days() {
        assert!(solver_for(2023, 1).is_some());
        assert!(solver_for(2024, 1).is_some());
        assert!(solver_for(2024, 2).is_some());
    }

    #[test]
    fn test_unknown_day() {
        assert!(solver_for(2024, 25).is_none());
        assert!(solver_for(2015, 1).is_none());
    }

    #[test]
    fn test_answer_display() {
        assert_eq!(Answer::from(11u64).to_string(), "11");
        assert_eq!(Answer::from(-3i64).as_str(), "-3");
        assert_eq!(Answer::from("abc").as_str(), "abc");
    }
}
