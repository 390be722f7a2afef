pub mod achievement;
pub mod player;
pub mod tournament;
