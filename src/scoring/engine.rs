use crate::scoring::types::{RewardInputs, RewardOutcome};

pub fn clamp01(v: f64) -> f64 {
    if v < 0.0 {
        0.0
    } else if v > 1.0 {
        1.0
    } else {
        v
    }
}

/// Rounds to 2 decimal places, half away from zero.
pub fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

pub fn compute_reward(inputs: &RewardInputs) -> RewardOutcome {
    if inputs.amount <= 0.0 {
        return RewardOutcome {
            coins: 0.0,
            explanation: "Invalid amount".to_string(),
        };
    }

    let mut coins = inputs.amount * 0.02 * (1.0 + inputs.streak_days as f64 * 0.1);
    let mut explanation = format!(
        "Base coins from amount {} and streak {}. ",
        inputs.amount, inputs.streak_days
    );

    if inputs.cibil_score >= 750 {
        coins *= 1.2;
        explanation.push_str("High CIBIL bonus applied. ");
    }

    if inputs.is_fraud {
        coins *= 0.5;
        explanation.push_str("Fraud penalty applied. ");
    }

    RewardOutcome {
        coins: round2(coins),
        explanation,
    }
}

pub fn compute_risk(cibil_score: i32, days_late: i32) -> f64 {
    let mut risk = 0.5;

    if cibil_score >= 750 {
        risk -= 0.2;
    } else if cibil_score < 600 {
        risk += 0.2;
    }

    risk += days_late as f64 * 0.02;

    round2(clamp01(risk))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bonus_then_penalty_compose_multiplicatively() {
        let outcome = compute_reward(&RewardInputs {
            amount: 1000.0,
            cibil_score: 800,
            streak_days: 5,
            is_fraud: true,
        });

        assert_eq!(outcome.coins, 18.0);
        assert!(outcome.explanation.contains("High CIBIL bonus applied."));
        assert!(outcome.explanation.contains("Fraud penalty applied."));
    }

    #[test]
    fn non_positive_amount_is_a_zero_reward_result() {
        let outcome = compute_reward(&RewardInputs {
            amount: 0.0,
            cibil_score: 900,
            streak_days: 30,
            is_fraud: false,
        });

        assert_eq!(outcome.coins, 0.0);
        assert_eq!(outcome.explanation, "Invalid amount");
    }

    #[test]
    fn risk_stays_within_unit_interval() {
        assert_eq!(compute_risk(300, 1000), 1.0);
        assert_eq!(compute_risk(800, 0), 0.3);
    }
}
