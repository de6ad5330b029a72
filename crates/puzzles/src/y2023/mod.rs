//! 2023 event.

pub mod day01;
