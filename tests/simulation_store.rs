use rewards_optimizer::repo::simulations_repo::SimulationsRepo;
use rewards_optimizer::scoring::types::RewardInputs;
use sqlx::sqlite::SqlitePoolOptions;

// A single connection keeps every query on the same in-memory database.
async fn memory_repo() -> SimulationsRepo {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("in-memory sqlite");

    let repo = SimulationsRepo { pool };
    repo.init().await.expect("init simulations table");
    repo
}

fn inputs(amount: f64, cibil_score: i32, streak_days: i32, is_fraud: bool) -> RewardInputs {
    RewardInputs {
        amount,
        cibil_score,
        streak_days,
        is_fraud,
    }
}

#[tokio::test]
async fn init_is_idempotent() {
    let repo = memory_repo().await;
    repo.init().await.expect("second init");

    let id = repo
        .insert_simulation(&inputs(100.0, 700, 1, false), 2.2, 0.5)
        .await
        .expect("insert after re-init");
    assert!(id > 0);
}

#[tokio::test]
async fn round_trip_preserves_every_field() {
    let repo = memory_repo().await;

    let id = repo
        .insert_simulation(&inputs(1000.0, 800, 5, true), 18.0, 0.3)
        .await
        .expect("insert");

    let records = repo.list_recent(10).await.expect("list");
    assert_eq!(records.len(), 1);

    let record = &records[0];
    assert_eq!(record.id, id);
    assert_eq!(record.amount, 1000.0);
    assert_eq!(record.cibil, 800);
    assert_eq!(record.streak, 5);
    assert!(record.fraud);
    assert_eq!(record.coins, 18.0);
    assert_eq!(record.risk_score, 0.3);
    chrono::DateTime::parse_from_rfc3339(&record.timestamp).expect("ISO-8601 timestamp");
}

#[tokio::test]
async fn fraud_false_round_trips_as_zero() {
    let repo = memory_repo().await;

    repo.insert_simulation(&inputs(50.0, 650, 0, false), 1.0, 0.5)
        .await
        .expect("insert");

    let records = repo.list_recent(1).await.expect("list");
    assert!(!records[0].fraud);
}

#[tokio::test]
async fn list_recent_is_newest_first_and_respects_limit() {
    let repo = memory_repo().await;

    let mut ids = Vec::new();
    for i in 1..=3 {
        let id = repo
            .insert_simulation(&inputs(i as f64 * 100.0, 700, i, false), i as f64, 0.5)
            .await
            .expect("insert");
        ids.push(id);
    }

    assert!(ids[0] < ids[1] && ids[1] < ids[2]);

    let records = repo.list_recent(2).await.expect("list");
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].id, ids[2]);
    assert_eq!(records[1].id, ids[1]);
}

#[tokio::test]
async fn listing_twice_without_writes_is_identical() {
    let repo = memory_repo().await;

    repo.insert_simulation(&inputs(200.0, 760, 2, false), 5.76, 0.3)
        .await
        .expect("insert");
    repo.insert_simulation(&inputs(300.0, 500, 0, false), 6.0, 0.7)
        .await
        .expect("insert");

    let first = repo.list_recent(10).await.expect("first list");
    let second = repo.list_recent(10).await.expect("second list");
    assert_eq!(first, second);
}
