use crate::scoring::types::RewardInputs;
use anyhow::Result;
use sqlx::{Row, SqlitePool};

#[derive(Clone)]
pub struct SimulationsRepo {
    pub pool: SqlitePool,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct SimulationRecord {
    pub id: i64,
    pub amount: f64,
    pub cibil: i32,
    pub streak: i32,
    pub fraud: bool,
    pub coins: f64,
    pub risk_score: f64,
    pub timestamp: String,
}

impl SimulationsRepo {
    pub async fn init(&self) -> Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS simulations (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                amount REAL NOT NULL,
                cibil INTEGER NOT NULL,
                streak INTEGER NOT NULL,
                fraud INTEGER NOT NULL,
                coins REAL NOT NULL,
                risk_score REAL NOT NULL,
                timestamp TEXT NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn insert_simulation(
        &self,
        inputs: &RewardInputs,
        coins: f64,
        risk_score: f64,
    ) -> Result<i64> {
        let timestamp = chrono::Utc::now().to_rfc3339();

        let result = sqlx::query(
            r#"
            INSERT INTO simulations (amount, cibil, streak, fraud, coins, risk_score, timestamp)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
            "#,
        )
        .bind(inputs.amount)
        .bind(inputs.cibil_score)
        .bind(inputs.streak_days)
        .bind(inputs.is_fraud as i32)
        .bind(coins)
        .bind(risk_score)
        .bind(&timestamp)
        .execute(&self.pool)
        .await?;

        Ok(result.last_insert_rowid())
    }

    pub async fn list_recent(&self, limit: i64) -> Result<Vec<SimulationRecord>> {
        let rows = sqlx::query(
            r#"
            SELECT id, amount, cibil, streak, fraud, coins, risk_score, timestamp
            FROM simulations
            ORDER BY id DESC
            LIMIT ?1
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .iter()
            .map(|r| SimulationRecord {
                id: r.get("id"),
                amount: r.get("amount"),
                cibil: r.get("cibil"),
                streak: r.get("streak"),
                fraud: r.get::<i64, _>("fraud") != 0,
                coins: r.get("coins"),
                risk_score: r.get("risk_score"),
                timestamp: r.get("timestamp"),
            })
            .collect())
    }
}
