use std::str::FromStr;
use std::sync::Arc;

use adboard_service::config::Config;
use adboard_service::domain::access::guards::Guards;
use adboard_service::domain::access::models::AccessPolicy;
use adboard_service::domain::advertisement::service::AdvertisementService;
use adboard_service::domain::category::service::CategoryService;
use adboard_service::domain::complaint::service::ComplaintService;
use adboard_service::domain::review::service::ReviewService;
use adboard_service::domain::user::service::UserService;
use adboard_service::inbound::http::router::create_router;
use adboard_service::inbound::http::router::AppState;
use adboard_service::outbound::alerting::AlertNotifier;
use adboard_service::outbound::alerting::TelegramNotifier;
use adboard_service::outbound::repositories::PostgresAdvertisementRepository;
use adboard_service::outbound::repositories::PostgresCategoryRepository;
use adboard_service::outbound::repositories::PostgresComplaintRepository;
use adboard_service::outbound::repositories::PostgresOwnershipProbe;
use adboard_service::outbound::repositories::PostgresReviewRepository;
use adboard_service::outbound::repositories::PostgresUserRepository;
use auth::TokenService;
use chrono::Duration;
use jsonwebtoken::Algorithm;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "adboard_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "adboard-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    // The signing algorithm has no default; an unknown name is fatal here
    let algorithm = Algorithm::from_str(&config.jwt.algorithm)
        .map_err(|_| anyhow::anyhow!("Unsupported JWT algorithm: {}", config.jwt.algorithm))?;

    tracing::info!(
        http_port = config.server.http_port,
        jwt_algorithm = %config.jwt.algorithm,
        jwt_expires_minutes = config.jwt.expires_minutes,
        "Configuration loaded"
    );

    let pg_pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&config.database.url)
        .await?;
    tracing::info!(
        max_connections = 5,
        database = "postgresql",
        "Database connection pool created"
    );

    sqlx::migrate!("./migrations").run(&pg_pool).await?;
    tracing::info!(database = "postgresql", "Database migrations completed");

    let user_repository = Arc::new(PostgresUserRepository::new(pg_pool.clone()));
    let category_repository = Arc::new(PostgresCategoryRepository::new(pg_pool.clone()));
    let advertisement_repository = Arc::new(PostgresAdvertisementRepository::new(pg_pool.clone()));
    let review_repository = Arc::new(PostgresReviewRepository::new(pg_pool.clone()));
    let complaint_repository = Arc::new(PostgresComplaintRepository::new(pg_pool.clone()));
    let ownership_probe = Arc::new(PostgresOwnershipProbe::new(pg_pool));

    let tokens = Arc::new(TokenService::new(
        config.jwt.secret.as_bytes(),
        algorithm,
        Duration::minutes(config.jwt.expires_minutes),
    ));
    let guards = Arc::new(Guards::new(ownership_probe, AccessPolicy::default()));
    let notifier: Arc<dyn AlertNotifier> = Arc::new(TelegramNotifier::new(&config.alerting));

    let state = AppState {
        user_service: Arc::new(UserService::new(Arc::clone(&user_repository))),
        category_service: Arc::new(CategoryService::new(Arc::clone(&category_repository))),
        advertisement_service: Arc::new(AdvertisementService::new(
            Arc::clone(&advertisement_repository),
            Arc::clone(&category_repository),
        )),
        review_service: Arc::new(ReviewService::new(
            Arc::clone(&review_repository),
            Arc::clone(&advertisement_repository),
        )),
        complaint_service: Arc::new(ComplaintService::new(
            Arc::clone(&complaint_repository),
            Arc::clone(&advertisement_repository),
        )),
        guards,
        tokens,
        notifier,
    };

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    axum::serve(http_listener, create_router(state)).await?;

    Ok(())
}
