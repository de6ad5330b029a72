//! 2024 event.

pub mod day01;
pub mod day02;
