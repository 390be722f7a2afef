pub mod achievements;
pub mod home;
pub mod players;
pub mod tournaments;
