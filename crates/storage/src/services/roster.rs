use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::PlayerRecord;
use crate::models::player::DEFAULT_ROLE_TAG;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum RosterFilter {
    #[default]
    All,
    Captains,
    /// There is no separate staff role; this selects coaches.
    CoachStaff,
    Players,
}

impl RosterFilter {
    /// Compares the raw tag, so unrecognized tags only show up under `All`
    /// even though they sort with the players.
    pub fn matches(&self, player: &PlayerRecord) -> bool {
        let tag = player.role_tag.as_deref().unwrap_or(DEFAULT_ROLE_TAG);

        match self {
            Self::All => true,
            Self::Captains => tag == "CAPTAIN",
            Self::CoachStaff => tag == "COACH",
            Self::Players => tag == "PLAYER",
        }
    }
}

/// Active players, captains first, then coaches, then everyone else, each
/// group by jersey number (players without one last).
pub fn active_roster(players: &[PlayerRecord]) -> Vec<&PlayerRecord> {
    let mut roster: Vec<&PlayerRecord> = players.iter().filter(|p| p.is_active()).collect();
    roster.sort_by_key(|p| (p.role().rank(), p.jersey_sort_key()));
    roster
}

fn matches_query(player: &PlayerRecord, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }

    let number = player
        .jersey_number
        .map(|n| n.to_string())
        .unwrap_or_default();

    player.full_name.to_lowercase().contains(query) || number.contains(query)
}

/// Search by name or jersey number, then by role group.
pub fn filter_roster<'a>(
    players: &[&'a PlayerRecord],
    query: &str,
    filter: RosterFilter,
) -> Vec<&'a PlayerRecord> {
    let query = query.trim().to_lowercase();

    players
        .iter()
        .copied()
        .filter(|p| matches_query(p, &query))
        .filter(|p| filter.matches(p))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player(name: &str, number: Option<i32>, role: Option<&str>) -> PlayerRecord {
        PlayerRecord {
            id: name.to_lowercase(),
            full_name: name.to_string(),
            jersey_number: number,
            role_tag: role.map(str::to_string),
            position: None,
            tagline: None,
            bio: None,
            photo_url: None,
            status: None,
            instagram_url: None,
            ultiscore_url: None,
        }
    }

    fn names(players: &[&PlayerRecord]) -> Vec<String> {
        players.iter().map(|p| p.full_name.clone()).collect()
    }

    fn sample() -> Vec<PlayerRecord> {
        let mut retired = player("Retired Rita", Some(1), Some("PLAYER"));
        retired.status = Some("INACTIVE".to_string());

        vec![
            player("Zoe Park", Some(7), Some("PLAYER")),
            player("Coach Carter", None, Some("COACH")),
            player("Ana Diaz", Some(21), Some("CAPTAIN")),
            player("No Number", None, None),
            player("Ben Ito", Some(3), Some("CAPTAIN")),
            player("Mystery Role", Some(2), Some("MASCOT")),
            retired,
        ]
    }

    #[test]
    fn test_active_roster_order() {
        let players = sample();
        let roster = active_roster(&players);

        assert_eq!(
            names(&roster),
            vec![
                "Ben Ito",
                "Ana Diaz",
                "Coach Carter",
                "Mystery Role",
                "Zoe Park",
                "No Number"
            ]
        );
    }

    #[test]
    fn test_search_by_name_and_number() {
        let players = sample();
        let roster = active_roster(&players);

        assert_eq!(
            names(&filter_roster(&roster, "  ZOE ", RosterFilter::All)),
            vec!["Zoe Park"]
        );
        assert_eq!(
            names(&filter_roster(&roster, "21", RosterFilter::All)),
            vec!["Ana Diaz"]
        );
        assert_eq!(filter_roster(&roster, "", RosterFilter::All).len(), roster.len());
    }

    #[test]
    fn test_role_filters() {
        let players = sample();
        let roster = active_roster(&players);

        assert_eq!(
            names(&filter_roster(&roster, "", RosterFilter::Captains)),
            vec!["Ben Ito", "Ana Diaz"]
        );
        assert_eq!(
            names(&filter_roster(&roster, "", RosterFilter::CoachStaff)),
            vec!["Coach Carter"]
        );
        assert_eq!(
            names(&filter_roster(&roster, "", RosterFilter::Players)),
            vec!["Zoe Park", "No Number"]
        );
    }

    #[test]
    fn test_unknown_role_only_listed_under_all() {
        let players = vec![player("Mystery Role", Some(2), Some("MASCOT"))];
        let roster = active_roster(&players);

        assert_eq!(roster.len(), 1);
        assert!(filter_roster(&roster, "", RosterFilter::Players).is_empty());
        assert!(filter_roster(&roster, "", RosterFilter::Captains).is_empty());
        assert!(filter_roster(&roster, "", RosterFilter::CoachStaff).is_empty());
        assert_eq!(
            names(&filter_roster(&roster, "", RosterFilter::All)),
            vec!["Mystery Role"]
        );
    }

    #[test]
    fn test_tags_compared_exactly() {
        let mut padded_status = player("Padded Status", Some(5), Some("PLAYER"));
        padded_status.status = Some(" ACTIVE".to_string());
        let players = vec![
            player("Zoe Park", Some(7), Some("PLAYER")),
            player("Padded Captain", Some(9), Some(" CAPTAIN")),
            padded_status,
        ];
        let roster = active_roster(&players);

        // " CAPTAIN" is not a captain tag: it sorts with the players.
        assert_eq!(names(&roster), vec!["Zoe Park", "Padded Captain"]);
        assert!(filter_roster(&roster, "", RosterFilter::Captains).is_empty());
    }

    #[test]
    fn test_role_labels() {
        use crate::models::PlayerRole;

        assert_eq!(PlayerRole::from_tag(Some("CAPTAIN")).label(), "Captain");
        assert_eq!(PlayerRole::from_tag(Some("COACH")).label(), "Coach");
        assert_eq!(PlayerRole::from_tag(None).label(), "Player");
        assert!(!PlayerRole::from_tag(Some("MASCOT")).has_badge());
    }
}
