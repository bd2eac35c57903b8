//! Day 7: The Sum of Its Parts. Day 8: Memory Maneuver.

pub mod day_7;
pub mod day_8;
