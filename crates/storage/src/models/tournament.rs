use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

pub const DEFAULT_LOCATION: &str = "TBA";
pub const DEFAULT_DIVISION: &str = "OPEN";

/// A tournament row as supplied by the row source.
///
/// Dates stay in their raw `YYYY-MM-DD` text form; they are only parsed by
/// the schedule classifier, which reports the rows it cannot read.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct TournamentRecord {
    pub id: String,
    pub name: String,
    pub start_date: String,
    pub end_date: Option<String>,
    pub location: Option<String>,
    pub division: Option<String>,
    pub status: Option<String>,
    pub is_next: Option<bool>,
    #[serde(default)]
    pub is_featured: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(into = "String")]
pub enum TournamentStatus {
    Upcoming,
    Past,
    /// Any value the source sends that is not recognized. Kept for display,
    /// never used to infer past/upcoming.
    Other(String),
}

impl TournamentStatus {
    /// Parses the raw status column. Blank and missing values carry no status.
    pub fn from_raw(raw: Option<&str>) -> Option<Self> {
        let value = raw.map(str::trim).filter(|v| !v.is_empty())?;

        match value.to_uppercase().as_str() {
            "UPCOMING" => Some(Self::Upcoming),
            "PAST" => Some(Self::Past),
            _ => Some(Self::Other(value.to_string())),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Upcoming => "UPCOMING",
            Self::Past => "PAST",
            Self::Other(value) => value,
        }
    }
}

impl From<TournamentStatus> for String {
    fn from(status: TournamentStatus) -> Self {
        status.as_str().to_string()
    }
}

impl std::fmt::Display for TournamentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
