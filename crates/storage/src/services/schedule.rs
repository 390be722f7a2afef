use chrono::{Datelike, Months, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::tournament::{DEFAULT_DIVISION, DEFAULT_LOCATION};
use crate::models::{TournamentRecord, TournamentStatus};

pub const DEFAULT_RECENT_RESULTS: usize = 3;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// A tournament row whose dates were verified and whose past/upcoming state
/// has been decided for a given day.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct ClassifiedTournament {
    pub id: String,
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    /// End date when present, otherwise start date.
    pub effective_date: NaiveDate,
    pub location: String,
    pub division: String,
    #[schema(value_type = Option<String>)]
    pub status: Option<TournamentStatus>,
    pub is_past: bool,
    pub is_next: bool,
    pub is_featured: bool,
}

impl ClassifiedTournament {
    /// Status to display: the source value when there is one, otherwise the
    /// computed state.
    pub fn status_label(&self) -> &str {
        match &self.status {
            Some(status) => status.as_str(),
            None if self.is_past => "PAST",
            None => "UPCOMING",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum DateField {
    StartDate,
    EndDate,
}

/// Anomalies found while classifying. None of them stop the batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ClassificationWarning {
    /// The record was left out of every view.
    MalformedDate {
        tournament_id: String,
        field: DateField,
        value: String,
    },
    /// Kept; the end date is still used as the effective date.
    EndBeforeStart {
        tournament_id: String,
        start_date: NaiveDate,
        end_date: NaiveDate,
    },
    /// Source says UPCOMING but the effective date has gone by. Classified
    /// as past.
    StatusConflict {
        tournament_id: String,
        status: String,
        effective_date: NaiveDate,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, ToSchema)]
pub struct Classification {
    /// Ascending by start date; equal dates keep input order.
    pub tournaments: Vec<ClassifiedTournament>,
    pub warnings: Vec<ClassificationWarning>,
}

fn parse_date(
    record: &TournamentRecord,
    field: DateField,
    raw: &str,
    warnings: &mut Vec<ClassificationWarning>,
) -> Option<NaiveDate> {
    match NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT) {
        Ok(date) => Some(date),
        Err(e) => {
            tracing::warn!(
                "Skipping tournament {}: cannot read {:?} '{}': {}",
                record.id,
                field,
                raw,
                e
            );
            warnings.push(ClassificationWarning::MalformedDate {
                tournament_id: record.id.clone(),
                field,
                value: raw.to_string(),
            });
            None
        }
    }
}

fn classify_one(
    record: &TournamentRecord,
    today: NaiveDate,
    warnings: &mut Vec<ClassificationWarning>,
) -> Option<ClassifiedTournament> {
    let start_date = parse_date(record, DateField::StartDate, &record.start_date, warnings)?;
    let end_date = match &record.end_date {
        Some(raw) => Some(parse_date(record, DateField::EndDate, raw, warnings)?),
        None => None,
    };

    if let Some(end) = end_date
        && end < start_date
    {
        tracing::warn!(
            "Tournament {} ends ({}) before it starts ({})",
            record.id,
            end,
            start_date
        );
        warnings.push(ClassificationWarning::EndBeforeStart {
            tournament_id: record.id.clone(),
            start_date,
            end_date: end,
        });
    }

    let effective_date = end_date.unwrap_or(start_date);
    let status = TournamentStatus::from_raw(record.status.as_deref());
    let date_has_passed = effective_date < today;
    let is_past = status == Some(TournamentStatus::Past) || date_has_passed;

    if status == Some(TournamentStatus::Upcoming) && date_has_passed {
        warnings.push(ClassificationWarning::StatusConflict {
            tournament_id: record.id.clone(),
            status: TournamentStatus::Upcoming.to_string(),
            effective_date,
        });
    }

    Some(ClassifiedTournament {
        id: record.id.clone(),
        name: record.name.clone(),
        start_date,
        end_date,
        effective_date,
        location: record
            .location
            .clone()
            .unwrap_or_else(|| DEFAULT_LOCATION.to_string()),
        division: record
            .division
            .clone()
            .unwrap_or_else(|| DEFAULT_DIVISION.to_string()),
        status,
        is_past,
        is_next: record.is_next.unwrap_or(false),
        is_featured: record.is_featured,
    })
}

/// Decides past/upcoming for every record relative to `today`.
///
/// A record is past when its status says `PAST`, or when its effective date
/// is strictly before `today`. Records with unreadable dates are dropped and
/// reported in [`Classification::warnings`].
pub fn classify_tournaments(records: &[TournamentRecord], today: NaiveDate) -> Classification {
    let mut warnings = Vec::new();

    let mut tournaments: Vec<ClassifiedTournament> = records
        .iter()
        .filter_map(|record| classify_one(record, today, &mut warnings))
        .collect();

    // Stable: equal start dates keep their input order.
    tournaments.sort_by_key(|t| t.start_date);

    Classification {
        tournaments,
        warnings,
    }
}

/// The tournament to count down to, if any.
///
/// Upcoming tournaments flagged as next take priority; when the source flags
/// several, the earliest start date wins. Without any flag, the earliest
/// upcoming tournament is chosen.
pub fn select_next_tournament(classified: &[ClassifiedTournament]) -> Option<&ClassifiedTournament> {
    let upcoming = || classified.iter().filter(|t| !t.is_past);

    let flagged = upcoming().filter(|t| t.is_next).count();
    if flagged > 1 {
        tracing::debug!(
            "{} upcoming tournaments flagged as next, using the earliest",
            flagged
        );
    }

    upcoming()
        .filter(|t| t.is_next)
        .min_by_key(|t| t.start_date)
        .or_else(|| upcoming().min_by_key(|t| t.start_date))
}

/// Rewrites the `is_next` flags so that at most one upcoming tournament keeps
/// it: the one [`select_next_tournament`] picks among the flagged ones.
pub fn resolve_next_flags(classified: &mut [ClassifiedTournament]) {
    let chosen = classified
        .iter()
        .enumerate()
        .filter(|(_, t)| t.is_next && !t.is_past)
        .min_by_key(|(_, t)| t.start_date)
        .map(|(index, _)| index);

    for (index, tournament) in classified.iter_mut().enumerate() {
        tournament.is_next = Some(index) == chosen;
    }
}

/// Most recent past tournaments first, at most `limit` of them.
pub fn select_recent_results(
    classified: &[ClassifiedTournament],
    limit: usize,
) -> Vec<&ClassifiedTournament> {
    let mut past: Vec<&ClassifiedTournament> = classified.iter().filter(|t| t.is_past).collect();
    past.sort_by(|a, b| b.effective_date.cmp(&a.effective_date));
    past.truncate(limit);
    past
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ScheduleFilter {
    #[default]
    All,
    Upcoming,
    Past,
}

impl ScheduleFilter {
    pub fn matches(&self, tournament: &ClassifiedTournament) -> bool {
        match self {
            Self::All => true,
            Self::Upcoming => !tournament.is_past,
            Self::Past => tournament.is_past,
        }
    }
}

/// Tournaments matching `filter` and, when given, starting in `year`.
pub fn filter_schedule(
    classified: &[ClassifiedTournament],
    filter: ScheduleFilter,
    year: Option<i32>,
) -> Vec<&ClassifiedTournament> {
    classified
        .iter()
        .filter(|t| filter.matches(t))
        .filter(|t| year.is_none_or(|y| t.start_date.year() == y))
        .collect()
}

/// Distinct start years, newest first.
pub fn available_years(classified: &[ClassifiedTournament]) -> Vec<i32> {
    let mut years: Vec<i32> = classified.iter().map(|t| t.start_date.year()).collect();
    years.sort_unstable_by(|a, b| b.cmp(a));
    years.dedup();
    years
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct CalendarDay {
    pub day: u32,
    pub tournaments: Vec<ClassifiedTournament>,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct MonthCalendar {
    pub year: i32,
    pub month: u32,
    pub days_in_month: u32,
    /// Empty cells before the 1st in a Sunday-first week.
    pub leading_blank_days: u32,
    /// Only days on which at least one tournament starts, in day order.
    pub days: Vec<CalendarDay>,
}

/// Calendar grid for one month. `None` if `year`/`month` is not a real month.
pub fn month_calendar(
    classified: &[ClassifiedTournament],
    year: i32,
    month: u32,
) -> Option<MonthCalendar> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let last = first.checked_add_months(Months::new(1))?.pred_opt()?;

    let mut days: Vec<CalendarDay> = Vec::new();
    for tournament in classified
        .iter()
        .filter(|t| t.start_date.year() == year && t.start_date.month() == month)
    {
        let day = tournament.start_date.day();
        match days.iter_mut().find(|d| d.day == day) {
            Some(entry) => entry.tournaments.push(tournament.clone()),
            None => days.push(CalendarDay {
                day,
                tournaments: vec![tournament.clone()],
            }),
        }
    }
    days.sort_by_key(|d| d.day);

    Some(MonthCalendar {
        year,
        month,
        days_in_month: last.day(),
        leading_blank_days: first.weekday().num_days_from_sunday(),
        days,
    })
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, ToSchema)]
pub struct Countdown {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

/// Time left until local midnight of `target`, all zeros once it has passed.
pub fn countdown(target: NaiveDate, now: NaiveDateTime) -> Countdown {
    let total = (target.and_time(NaiveTime::MIN) - now).num_seconds();
    if total <= 0 {
        return Countdown::default();
    }

    Countdown {
        days: total / 86_400,
        hours: (total / 3_600) % 24,
        minutes: (total / 60) % 60,
        seconds: total % 60,
    }
}
