#[derive(Debug, Clone)]
pub struct RewardInputs {
    pub amount: f64,
    pub cibil_score: i32,
    pub streak_days: i32,
    pub is_fraud: bool,
}

#[derive(Debug, Clone)]
pub struct RewardOutcome {
    pub coins: f64,
    pub explanation: String,
}
