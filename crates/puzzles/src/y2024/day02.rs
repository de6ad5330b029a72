//! Day 2: Red-Nosed Reports
//!
//! A report is safe when its levels are strictly increasing or strictly
//! decreasing and every step changes by 1 to 3. With the Problem Dampener a
//! report also counts as safe if removing a single level makes it safe.

use crate::{Answer, PuzzleError, Solver};

pub struct RedNosedReports;

impl Solver for RedNosedReports {
    fn part_one(&self, input: &str) -> Result<Answer, PuzzleError> {
        let reports = parse_reports(input)?;
        Ok(reports.iter().filter(|r| is_safe(r)).count().into())
    }

    fn part_two(&self, input: &str) -> Result<Answer, PuzzleError> {
        let reports = parse_reports(input)?;
        Ok(reports.iter().filter(|r| is_safe_dampened(r)).count().into())
    }
}

fn is_safe(levels: &[i64]) -> bool {
    // A step that overflows is far outside 1..=3 either way.
    let Some(steps) = levels.windows(2).map(|w| w[1].checked_sub(w[0])).collect::<Option<Vec<i64>>>() else {
        return false;
    };
    steps.iter().all(|d| (1..=3).contains(d)) || steps.iter().all(|d| (-3..=-1).contains(d))
}

fn is_safe_dampened(levels: &[i64]) -> bool {
    is_safe(levels)
        || (0..levels.len()).any(|skip| {
            let remaining: Vec<i64> =
                levels.iter().enumerate().filter(|(i, _)| *i != skip).map(|(_, level)| *level).collect();
            is_safe(&remaining)
        })
}

fn parse_reports(input: &str) -> Result<Vec<Vec<i64>>, PuzzleError> {
    input
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(idx, line)| {
            line.split_whitespace()
                .map(|field| {
                    field.parse::<i64>().map_err(|_| PuzzleError::malformed(idx, format!("not a number: {field}")))
                })
                .collect::<Result<Vec<i64>, _>>()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "7 6 4 2 1\n1 2 7 8 9\n9 7 6 2 1\n1 3 2 4 5\n8 6 4 4 1\n1 3 6 7 9";

    #[test]
    fn test_part_one_example() {
        assert_eq!(RedNosedReports.part_one(EXAMPLE).unwrap().as_str(), "2");
    }

    #[test]
    fn test_part_two_example() {
        assert_eq!(RedNosedReports.part_two(EXAMPLE).unwrap().as_str(), "4");
    }

    #[test]
    fn test_flat_step_is_unsafe() {
        assert!(!is_safe(&[8, 6, 4, 4, 1]));
        assert!(is_safe_dampened(&[8, 6, 4, 4, 1]));
    }

    #[test]
    fn test_dampener_can_drop_first_level() {
        assert!(!is_safe(&[9, 1, 2, 3]));
        assert!(is_safe_dampened(&[9, 1, 2, 3]));
    }

    #[test]
    fn test_single_level_is_safe() {
        assert!(is_safe(&[5]));
    }

    #[test]
    fn test_extreme_levels_are_unsafe() {
        assert!(!is_safe(&[i64::MIN, i64::MAX]));
        assert!(!is_safe(&[i64::MAX, i64::MIN]));

        let input = format!("{} {} 1\n1 2 3", i64::MIN, i64::MAX);
        assert_eq!(RedNosedReports.part_one(&input).unwrap().as_str(), "1");
        assert_eq!(RedNosedReports.part_two(&input).unwrap().as_str(), "1");
    }

    #[test]
    fn test_bad_level() {
        let result = RedNosedReports.part_one("1 2 3\n4 five 6");
        assert!(matches!(result, Err(PuzzleError::Malformed { line: 2, .. })));
    }
}
