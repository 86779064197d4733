use crate::domain::reward::{ErrorEnvelope, ErrorPayload, RewardRequest, RewardResponse};
use crate::repo::simulations_repo::SimulationsRepo;
use crate::scoring::engine::{compute_reward, compute_risk};
use crate::scoring::types::RewardInputs;

#[derive(Clone)]
pub struct RewardService {
    pub simulations_repo: SimulationsRepo,
}

impl RewardService {
    pub async fn simulate(
        &self,
        req: RewardRequest,
    ) -> Result<RewardResponse, (axum::http::StatusCode, ErrorEnvelope)> {
        let inputs = RewardInputs {
            amount: req.amount,
            cibil_score: req.cibil,
            streak_days: req.streak,
            is_fraud: req.fraud,
        };

        let outcome = compute_reward(&inputs);
        let risk_score = compute_risk(req.cibil, req.days_late);

        self.simulations_repo
            .insert_simulation(&inputs, outcome.coins, risk_score)
            .await
            .map_err(storage)?;

        Ok(RewardResponse {
            coins: outcome.coins,
            risk_score,
            explanation: outcome.explanation,
        })
    }
}

fn err(code: &str, message: &str) -> ErrorEnvelope {
    ErrorEnvelope {
        error: ErrorPayload {
            code: code.to_string(),
            message: message.to_string(),
            details: None,
        },
    }
}

fn storage(e: anyhow::Error) -> (axum::http::StatusCode, ErrorEnvelope) {
    (
        axum::http::StatusCode::INTERNAL_SERVER_ERROR,
        err("STORAGE_ERROR", &e.to_string()),
    )
}
