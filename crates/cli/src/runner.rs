//! One run of the configured day: input, optional problem text, answers.

use std::io::Write;

use anyhow::{Context, Result};

use advent_client::Advent;
use advent_core::AppConfig;
use advent_puzzles::Solver;

/// Characters of input echoed after the problem text.
const INPUT_PREVIEW_CHARS: usize = 100;

pub async fn run(advent: &Advent, config: &AppConfig, solver: Option<&dyn Solver>, out: &mut impl Write) -> Result<()> {
    let (year, day) = (config.year, config.day);
    let input = advent
        .get_input(day)
        .await
        .with_context(|| format!("failed to get input for {day}/{year}"))?;

    if config.show_problem {
        let problem = advent
            .get_problem(day)
            .await
            .with_context(|| format!("failed to get problem for {day}/{year}"))?;
        writeln!(out, "Problem Description:")?;
        writeln!(out, "{problem}")?;
        writeln!(out, "\nInput Data:")?;
        writeln!(out, "{}...", preview(&input, INPUT_PREVIEW_CHARS))?;
    }

    let Some(solver) = solver else {
        tracing::warn!(year, day, "no solver registered");
        writeln!(out, "\nNo solver registered for {day}/{year}.")?;
        return Ok(());
    };

    let parts = [("first", 1, solver.part_one(&input)), ("second", 2, solver.part_two(&input))];
    for (ordinal, part, result) in parts {
        let answer = result.with_context(|| format!("part {part} of {day}/{year} failed"))?;
        writeln!(out, "\nThe {ordinal} solution for {day}/{year} is:")?;
        writeln!(out, "{answer}")?;

        if let Some(previous) = advent.get_solution(day, part)?
            && previous != answer.as_str()
        {
            tracing::info!(day, part, %previous, current = %answer, "answer changed since last run");
        }
        advent.save_solution(day, part, answer.as_str())?;
    }

    Ok(())
}

/// The first `max_chars` characters of `text`.
fn preview(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((end, _)) => &text[..end],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use advent_core::{Category, Session};
    use tempfile::TempDir;

    fn offline(show_problem: bool, year: u32, day: u32) -> (TempDir, AppConfig, Advent) {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig {
            year,
            day,
            show_problem,
            cache_dir: dir.path().join(".aoc_cache"),
            base_url: "http://127.0.0.1:9".into(),
            timeout_ms: 500,
            ..Default::default()
        };
        let advent = Advent::new(&config, Session::new("abc123")).unwrap();
        (dir, config, advent)
    }

    #[tokio::test]
    async fn test_run_prints_and_saves_answers() {
        let (_dir, config, advent) = offline(false, 2024, 1);
        advent
            .cache()
            .save(Category::Inputs, 1, "3   4\n4   3\n2   5\n1   3\n3   9\n3   3", None)
            .unwrap();

        let solver = advent_puzzles::solver_for(2024, 1);
        let mut out = Vec::new();
        run(&advent, &config, solver, &mut out).await.unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("The first solution for 1/2024 is:\n11\n"));
        assert!(text.contains("The second solution for 1/2024 is:\n31\n"));
        assert!(!text.contains("Problem Description:"));

        assert_eq!(advent.get_solution(1, 1).unwrap().as_deref(), Some("11"));
        assert_eq!(advent.get_solution(1, 2).unwrap().as_deref(), Some("31"));
    }

    #[tokio::test]
    async fn test_run_shows_problem_and_preview() {
        let (_dir, config, advent) = offline(true, 2024, 2);
        advent.cache().save(Category::Inputs, 2, "7 6 4 2 1\n1 2 7 8 9", None).unwrap();
        advent
            .cache()
            .save(Category::Problems, 2, "--- Day 2: Red-Nosed Reports ---", None)
            .unwrap();

        let mut out = Vec::new();
        run(&advent, &config, advent_puzzles::solver_for(2024, 2), &mut out)
            .await
            .unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("Problem Description:\n--- Day 2: Red-Nosed Reports ---\n"));
        assert!(text.contains("Input Data:\n7 6 4 2 1\n1 2 7 8 9...\n"));
    }

    #[tokio::test]
    async fn test_run_without_solver() {
        let (_dir, config, advent) = offline(false, 2024, 9);
        advent.cache().save(Category::Inputs, 9, "2333133121414131402", None).unwrap();

        let mut out = Vec::new();
        run(&advent, &config, None, &mut out).await.unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("No solver registered for 9/2024."));
        assert!(advent.get_solution(9, 1).unwrap().is_none());
    }

    #[tokio::test]
    async fn test_run_missing_input_fails() {
        let (_dir, config, advent) = offline(false, 2024, 1);

        let mut out = Vec::new();
        let result = run(&advent, &config, advent_puzzles::solver_for(2024, 1), &mut out).await;
        assert!(result.is_err());
        assert!(out.is_empty());
    }

    #[test]
    fn test_preview_truncates() {
        assert_eq!(preview("abcdef", 3), "abc");
        assert_eq!(preview("ab", 3), "ab");
        assert_eq!(preview("ééé", 2), "éé");
    }
}
