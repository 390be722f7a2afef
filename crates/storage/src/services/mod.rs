pub mod achievements;
pub mod roster;
pub mod schedule;
