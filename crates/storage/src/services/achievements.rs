use std::cmp::Ordering;

use crate::models::AchievementRecord;

pub const DEFAULT_FEATURED_ACHIEVEMENTS: usize = 4;

fn compare_sort_order(a: Option<i32>, b: Option<i32>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Featured first, then newest year, then lowest sort order.
pub fn compare_achievements(a: &AchievementRecord, b: &AchievementRecord) -> Ordering {
    b.featured()
        .cmp(&a.featured())
        .then_with(|| b.year.cmp(&a.year))
        .then_with(|| compare_sort_order(a.sort_order, b.sort_order))
}

/// The first `limit` achievements in display order. Achievements that tie on
/// every key keep their input order.
pub fn rank_achievements(achievements: &[AchievementRecord], limit: usize) -> Vec<&AchievementRecord> {
    let mut ranked: Vec<&AchievementRecord> = achievements.iter().collect();
    ranked.sort_by(|a, b| compare_achievements(a, b));
    ranked.truncate(limit);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;

    fn achievement(id: &str, year: i32, featured: bool, sort_order: Option<i32>) -> AchievementRecord {
        AchievementRecord {
            id: id.to_string(),
            year,
            title: format!("Achievement {}", id),
            description: None,
            category: None,
            is_featured: Some(featured),
            sort_order,
        }
    }

    fn ids(ranked: &[&AchievementRecord]) -> Vec<String> {
        ranked.iter().map(|a| a.id.clone()).collect()
    }

    #[test]
    fn test_featured_same_year_sorted_by_sort_order() {
        let achievements = vec![
            achievement("A", 2023, false, Some(0)),
            achievement("B", 2024, true, Some(5)),
            achievement("C", 2024, true, Some(1)),
        ];

        let ranked = rank_achievements(&achievements, 2);
        assert_eq!(ids(&ranked), vec!["C", "B"]);
    }

    #[test]
    fn test_featured_beats_newer_year() {
        let achievements = vec![
            achievement("new", 2025, false, Some(0)),
            achievement("old-featured", 2019, true, Some(9)),
        ];

        let ranked = rank_achievements(&achievements, 10);
        assert_eq!(ids(&ranked), vec!["old-featured", "new"]);
    }

    #[test]
    fn test_missing_values() {
        let mut unflagged = achievement("unflagged", 2024, false, Some(0));
        unflagged.is_featured = None;
        let achievements = vec![
            achievement("no-order", 2024, false, None),
            unflagged,
            achievement("order", 2024, false, Some(3)),
        ];

        let ranked = rank_achievements(&achievements, 10);
        assert_eq!(ids(&ranked), vec!["unflagged", "order", "no-order"]);
    }

    #[test]
    fn test_full_ties_keep_input_order() {
        let forward = vec![
            achievement("x", 2024, true, Some(1)),
            achievement("y", 2024, true, Some(1)),
            achievement("z", 2022, false, None),
        ];
        let reversed = vec![
            achievement("z", 2022, false, None),
            achievement("y", 2024, true, Some(1)),
            achievement("x", 2024, true, Some(1)),
        ];

        assert_eq!(ids(&rank_achievements(&forward, 3)), vec!["x", "y", "z"]);
        assert_eq!(ids(&rank_achievements(&reversed, 3)), vec!["y", "x", "z"]);
    }

    #[test]
    fn test_limit_zero_and_empty_input() {
        let achievements = vec![achievement("a", 2024, true, None)];

        assert!(rank_achievements(&achievements, 0).is_empty());
        assert!(rank_achievements(&[], DEFAULT_FEATURED_ACHIEVEMENTS).is_empty());
    }
}
