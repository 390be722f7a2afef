pub mod achievement;
pub mod player;
pub mod social_link;
pub mod tournament;

pub use achievement::AchievementRecord;
pub use player::{PlayerRecord, PlayerRole};
pub use social_link::SocialLinks;
pub use tournament::{TournamentRecord, TournamentStatus};
