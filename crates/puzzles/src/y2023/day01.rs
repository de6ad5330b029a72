//! Day 1: Trebuchet?!
//!
//! Each line's calibration value is its first and last digit read as a
//! two-digit number. Part two also counts spelled-out digits, which may
//! overlap (`eightwo` holds both 8 and 2).

use crate::{Answer, PuzzleError, Solver};

const SPELLED: [(&str, u32); 9] = [
    ("one", 1),
    ("two", 2),
    ("three", 3),
    ("four", 4),
    ("five", 5),
    ("six", 6),
    ("seven", 7),
    ("eight", 8),
    ("nine", 9),
];

pub struct Trebuchet;

impl Solver for Trebuchet {
    fn part_one(&self, input: &str) -> Result<Answer, PuzzleError> {
        calibration_sum(input, |line| line.chars().filter_map(|c| c.to_digit(10)).collect())
    }

    fn part_two(&self, input: &str) -> Result<Answer, PuzzleError> {
        calibration_sum(input, digits_with_words)
    }
}

fn calibration_sum(input: &str, digits: impl Fn(&str) -> Vec<u32>) -> Result<Answer, PuzzleError> {
    let mut total = 0u64;
    for (idx, line) in input.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let found = digits(line);
        let (Some(first), Some(last)) = (found.first(), found.last()) else {
            return Err(PuzzleError::malformed(idx, "no digits"));
        };
        total += u64::from(first * 10 + last);
    }

    Ok(total.into())
}

/// Every digit in `line`, numeric or spelled out, in order of starting position.
fn digits_with_words(line: &str) -> Vec<u32> {
    let lower = line.to_lowercase();
    let mut digits = Vec::new();

    for (pos, c) in lower.char_indices() {
        if let Some(d) = c.to_digit(10) {
            digits.push(d);
            continue;
        }

        let rest = &lower[pos..];
        if let Some((_, d)) = SPELLED.iter().find(|(word, _)| rest.starts_with(word)) {
            digits.push(*d);
        }
    }

    digits
}
