use chrono::{NaiveDate, NaiveDateTime};
use sqlx::PgPool;
use storage::{
    dto::tournament::{NextTournamentResponse, ScheduleQuery, ScheduleResponse, TournamentResponse},
    error::Result,
    models::TournamentRecord,
    repository::tournament::TournamentRepository,
    services::schedule::{
        Classification, ClassifiedTournament, MonthCalendar, classify_tournaments, countdown,
        filter_schedule, month_calendar, resolve_next_flags, select_next_tournament,
        select_recent_results,
    },
};

/// Fetch every tournament row and classify it against `today`
pub async fn load_schedule(pool: &PgPool, today: NaiveDate) -> Result<Classification> {
    let repo = TournamentRepository::new(pool);
    let rows = repo.list().await?;

    Ok(classify(&rows, today))
}

/// Fetch and classify a single tournament. `None` when its dates are unreadable.
pub async fn load_tournament(
    pool: &PgPool,
    id: &str,
    today: NaiveDate,
) -> Result<Option<ClassifiedTournament>> {
    let repo = TournamentRepository::new(pool);
    let row = repo.find_by_id(id).await?;

    Ok(classify_tournaments(std::slice::from_ref(&row), today)
        .tournaments
        .pop())
}

pub fn classify(rows: &[TournamentRecord], today: NaiveDate) -> Classification {
    let mut classification = classify_tournaments(rows, today);
    resolve_next_flags(&mut classification.tournaments);

    if !classification.warnings.is_empty() {
        tracing::warn!(
            "Classified {} tournaments with {} warnings",
            classification.tournaments.len(),
            classification.warnings.len()
        );
    }

    classification
}

pub fn schedule_view(classification: Classification, query: &ScheduleQuery) -> ScheduleResponse {
    let tournaments = filter_schedule(&classification.tournaments, query.filter, query.year)
        .into_iter()
        .map(TournamentResponse::from)
        .collect();

    ScheduleResponse {
        tournaments,
        warnings: classification.warnings,
    }
}

pub fn next_view(classification: &Classification, now: NaiveDateTime) -> NextTournamentResponse {
    match select_next_tournament(&classification.tournaments) {
        Some(next) => NextTournamentResponse {
            tournament: Some(TournamentResponse::from(next)),
            countdown: Some(countdown(next.start_date, now)),
        },
        None => NextTournamentResponse {
            tournament: None,
            countdown: None,
        },
    }
}

pub fn recent_view(classification: &Classification, limit: usize) -> Vec<TournamentResponse> {
    select_recent_results(&classification.tournaments, limit)
        .into_iter()
        .map(TournamentResponse::from)
        .collect()
}

pub fn calendar_view(classification: &Classification, year: i32, month: u32) -> Option<MonthCalendar> {
    month_calendar(&classification.tournaments, year, month)
}

#[cfg(test)]
mod tests {
    use super::*;
    use storage::services::schedule::ScheduleFilter;

    fn row(id: &str, start: &str, is_next: bool) -> TournamentRecord {
        TournamentRecord {
            id: id.to_string(),
            name: format!("Cup {}", id),
            start_date: start.to_string(),
            end_date: None,
            location: Some("Riverside Fields".to_string()),
            division: Some("MIXED".to_string()),
            status: None,
            is_next: Some(is_next),
            is_featured: false,
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()
    }

    #[test]
    fn test_classify_leaves_single_next_flag() {
        let rows = vec![row("a", "2025-05-01", true), row("b", "2025-03-01", true)];
        let classification = classify(&rows, today());

        let flagged: Vec<&str> = classification
            .tournaments
            .iter()
            .filter(|t| t.is_next)
            .map(|t| t.id.as_str())
            .collect();
        assert_eq!(flagged, vec!["b"]);
    }

    #[test]
    fn test_next_view_includes_countdown() {
        let rows = vec![row("a", "2025-01-03", false)];
        let classification = classify(&rows, today());
        let now = today().and_hms_opt(12, 0, 0).unwrap();

        let view = next_view(&classification, now);
        assert_eq!(view.tournament.unwrap().id, "a");
        let left = view.countdown.unwrap();
        assert_eq!((left.days, left.hours), (1, 12));
    }

    #[test]
    fn test_next_view_absent() {
        let classification = classify(&[row("old", "2024-01-03", true)], today());
        let view = next_view(&classification, today().and_hms_opt(0, 0, 0).unwrap());

        assert!(view.tournament.is_none());
        assert!(view.countdown.is_none());
    }

    #[test]
    fn test_schedule_view_carries_warnings() {
        let rows = vec![row("ok", "2025-02-01", false), row("bad", "tbd", false)];
        let classification = classify(&rows, today());
        let query = ScheduleQuery {
            filter: ScheduleFilter::Upcoming,
            year: None,
        };

        let view = schedule_view(classification, &query);
        assert_eq!(view.tournaments.len(), 1);
        assert_eq!(view.tournaments[0].status, "UPCOMING");
        assert_eq!(view.warnings.len(), 1);
    }

    #[test]
    fn test_recent_view_limit() {
        let rows = vec![
            row("a", "2024-01-01", false),
            row("b", "2024-02-01", false),
            row("c", "2024-03-01", false),
        ];
        let classification = classify(&rows, today());

        let recent = recent_view(&classification, 2);
        let ids: Vec<&str> = recent.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["c", "b"]);
    }
}
