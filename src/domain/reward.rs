use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RewardRequest {
    pub amount: f64,
    pub cibil: i32,
    pub streak: i32,
    #[serde(default)]
    pub fraud: bool,
    #[serde(default)]
    pub days_late: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RewardResponse {
    pub coins: f64,
    pub risk_score: f64,
    pub explanation: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorEnvelope {
    pub error: ErrorPayload,
}

#[derive(Debug, Serialize)]
pub struct ErrorPayload {
    pub code: String,
    pub message: String,
    pub details: Option<String>,
}
