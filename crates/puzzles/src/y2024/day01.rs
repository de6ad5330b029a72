//! Day 1: Historian Hysteria
//!
//! The input is two columns of location IDs. Part one pairs the columns up
//! smallest-to-smallest and sums the distances; part two weights each left
//! ID by how often it appears on the right.

use std::collections::HashMap;

use crate::{Answer, PuzzleError, Solver};

pub struct HistorianHysteria;

impl Solver for HistorianHysteria {
    fn part_one(&self, input: &str) -> Result<Answer, PuzzleError> {
        let (mut left, mut right) = parse_columns(input)?;
        left.sort_unstable();
        right.sort_unstable();

        let total: u64 = left.iter().zip(&right).map(|(l, r)| l.abs_diff(*r)).sum();
        Ok(total.into())
    }

    fn part_two(&self, input: &str) -> Result<Answer, PuzzleError> {
        let (left, right) = parse_columns(input)?;

        let mut counts: HashMap<i64, i64> = HashMap::new();
        for id in right {
            *counts.entry(id).or_default() += 1;
        }

        let score: i64 = left.iter().map(|id| id * counts.get(id).copied().unwrap_or(0)).sum();
        Ok(score.into())
    }
}

fn parse_columns(input: &str) -> Result<(Vec<i64>, Vec<i64>), PuzzleError> {
    let mut left = Vec::new();
    let mut right = Vec::new();

    for (idx, line) in input.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }

        let fields: Vec<&str> = line.split_whitespace().collect();
        let [l, r] = fields.as_slice() else {
            return Err(PuzzleError::malformed(idx, format!("expected two columns, found {}", fields.len())));
        };

        left.push(parse_id(idx, l)?);
        right.push(parse_id(idx, r)?);
    }

    tracing::debug!("parsed {} location pairs", left.len());
    Ok((left, right))
}

fn parse_id(idx: usize, field: &str) -> Result<i64, PuzzleError> {
    field.parse().map_err(|_| PuzzleError::malformed(idx, format!("not a number: {field}")))
}
