use axum::routing::{get, post};
use axum::Router;
use rewards_optimizer::config::AppConfig;
use rewards_optimizer::repo::simulations_repo::SimulationsRepo;
use rewards_optimizer::service::reward_service::RewardService;
use rewards_optimizer::AppState;
use sqlx::sqlite::SqlitePoolOptions;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cfg = AppConfig::from_env();

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect(&cfg.database_url)
        .await?;

    let simulations_repo = SimulationsRepo { pool };
    simulations_repo.init().await?;

    let reward_service = RewardService {
        simulations_repo: simulations_repo.clone(),
    };

    let state = AppState {
        reward_service,
        simulations_repo,
    };

    let app = Router::new()
        .route("/health", get(rewards_optimizer::http::handlers::rewards::health))
        .route("/predict", post(rewards_optimizer::http::handlers::rewards::simulate))
        .route("/simulate", post(rewards_optimizer::http::handlers::rewards::simulate))
        .route(
            "/simulations",
            get(rewards_optimizer::http::handlers::simulations::list_recent),
        )
        .route("/ops/readiness", get(rewards_optimizer::http::handlers::ops::readiness))
        .route("/ops/liveness", get(rewards_optimizer::http::handlers::ops::liveness))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(&cfg.bind_addr).await?;
    tracing::info!("listening on {}", cfg.bind_addr);
    axum::serve(listener, app).await?;
    Ok(())
}
