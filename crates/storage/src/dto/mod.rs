pub mod achievement;
pub mod home;
pub mod player;
pub mod tournament;
