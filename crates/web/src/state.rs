use axum::extract::FromRef;
use storage::Database;

#[derive(Debug, Clone)]
pub struct AppState {
    pub db: Database,
    pub featured_achievements_limit: usize,
}

impl FromRef<AppState> for Database {
    fn from_ref(state: &AppState) -> Self {
        state.db.clone()
    }
}

/// Local wall-clock time. The only place "now" is read; everything below the
/// handlers receives it as an argument.
pub fn local_now() -> chrono::NaiveDateTime {
    chrono::Local::now().naive_local()
}
