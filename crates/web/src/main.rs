use anyhow::Context;
use storage::Database;
use utoipa::OpenApi;

mod config;
mod error;
mod features;
mod routes;
mod state;

use config::Config;
use state::AppState;

#[derive(OpenApi)]
#[openapi(
    paths(
        features::home::handlers::get_home,
        features::tournaments::handlers::list_tournaments,
        features::tournaments::handlers::get_next_tournament,
        features::tournaments::handlers::get_recent_results,
        features::tournaments::handlers::get_years,
        features::tournaments::handlers::get_calendar,
        features::tournaments::handlers::get_tournament,
        features::achievements::handlers::list_achievements,
        features::players::handlers::list_players,
    ),
    components(
        schemas(
            storage::dto::home::HomeResponse,
            storage::dto::tournament::TournamentResponse,
            storage::dto::tournament::ScheduleResponse,
            storage::dto::tournament::NextTournamentResponse,
            storage::dto::tournament::YearsResponse,
            storage::dto::achievement::AchievementResponse,
            storage::dto::player::PlayerResponse,
            storage::dto::player::InstagramLink,
            storage::models::PlayerRole,
            storage::services::schedule::ClassificationWarning,
            storage::services::schedule::DateField,
            storage::services::schedule::ClassifiedTournament,
            storage::services::schedule::CalendarDay,
            storage::services::schedule::MonthCalendar,
            storage::services::schedule::Countdown,
            storage::services::schedule::ScheduleFilter,
            storage::services::roster::RosterFilter,
        )
    ),
    tags(
        (name = "home", description = "Landing page summary"),
        (name = "tournaments", description = "Schedule and results"),
        (name = "achievements", description = "Club achievements"),
        (name = "players", description = "Team roster"),
    )
)]
pub struct ApiDoc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    tracing::info!("Starting club site API");

    let config = Config::from_env().context("Failed to load API configuration")?;
    tracing::info!("Configuration loaded successfully");

    tracing::info!(
        "Connecting to database at: {}",
        config
            .database_url
            .split('@')
            .next_back()
            .unwrap_or("unknown")
    );
    let db = Database::new(&config.database_url)
        .await
        .context("Failed to initialize database")?;
    tracing::info!("Database connection established");

    if config.run_migrations {
        tracing::info!("Running database migrations");
        db.run_migrations()
            .await
            .context("Failed to run migrations")?;
        tracing::info!("Database migrations completed successfully");
    }

    let state = AppState {
        db,
        featured_achievements_limit: config.featured_achievements_limit,
    };

    let bind_address = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("Failed to bind {}", bind_address))?;

    tracing::info!("Starting server at http://{}", bind_address);
    tracing::info!(
        "Swagger UI available at http://{}/swagger-ui/",
        bind_address
    );

    axum::serve(listener, routes::router(state))
        .await
        .context("Server error")?;

    Ok(())
}
