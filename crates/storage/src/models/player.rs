use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Jersey number used for ordering players that have none.
pub const MISSING_JERSEY_NUMBER: i32 = 9999;

/// Role assumed for players without a tag.
pub const DEFAULT_ROLE_TAG: &str = "PLAYER";

/// Status assumed for players without one.
pub const DEFAULT_STATUS: &str = "ACTIVE";

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct PlayerRecord {
    pub id: String,
    pub full_name: String,
    pub jersey_number: Option<i32>,
    pub role_tag: Option<String>,
    pub position: Option<String>,
    pub tagline: Option<String>,
    pub bio: Option<String>,
    pub photo_url: Option<String>,
    pub status: Option<String>,
    /// Full URL preferred, but handles are common in practice.
    pub instagram_url: Option<String>,
    /// Full URL or bare numeric profile id.
    pub ultiscore_url: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PlayerRole {
    Captain,
    Coach,
    Player,
}

impl PlayerRole {
    /// Missing and unrecognized tags both count as a regular player. Tags are
    /// compared exactly.
    pub fn from_tag(tag: Option<&str>) -> Self {
        match tag {
            Some("CAPTAIN") => Self::Captain,
            Some("COACH") => Self::Coach,
            _ => Self::Player,
        }
    }

    pub fn rank(&self) -> u8 {
        match self {
            Self::Captain => 0,
            Self::Coach => 1,
            Self::Player => 2,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Captain => "Captain",
            Self::Coach => "Coach",
            Self::Player => "Player",
        }
    }

    pub fn has_badge(&self) -> bool {
        matches!(self, Self::Captain | Self::Coach)
    }
}

impl PlayerRecord {
    pub fn role(&self) -> PlayerRole {
        PlayerRole::from_tag(self.role_tag.as_deref())
    }

    pub fn is_active(&self) -> bool {
        self.status.as_deref().unwrap_or(DEFAULT_STATUS) == DEFAULT_STATUS
    }

    pub fn jersey_sort_key(&self) -> i32 {
        self.jersey_number.unwrap_or(MISSING_JERSEY_NUMBER)
    }
}
