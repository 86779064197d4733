use crate::scoring::engine::{compute_reward, round2};
use crate::scoring::types::RewardInputs;
use crate::session::trust::trust_score;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum SessionError {
    #[error("Please enter your name.")]
    EmptyName,
    #[error("Amount must be greater than 0.")]
    InvalidAmount,
    #[error("Not enough coins: requested {requested}, balance {available}.")]
    InsufficientBalance { requested: f64, available: f64 },
    #[error("Mock-data consent must be confirmed before contacting the backend.")]
    ConsentRequired,
}

#[derive(Debug, Clone)]
pub struct SessionEntry {
    pub user: String,
    pub amount: f64,
    pub cibil: i32,
    pub streak: i32,
    pub fraud: bool,
    pub coins: f64,
    pub trust: i32,
}

#[derive(Debug, Clone)]
pub struct LeaderboardEntry {
    pub user: String,
    pub coins: f64,
}

#[derive(Debug, Default)]
pub struct SessionContext {
    entries: Vec<SessionEntry>,
    wallet_balance: f64,
    consent: bool,
}

impl SessionContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_consent(&mut self, consent: bool) {
        self.consent = consent;
    }

    pub fn ensure_consent(&self) -> Result<(), SessionError> {
        if self.consent {
            Ok(())
        } else {
            Err(SessionError::ConsentRequired)
        }
    }

    pub fn calculate(
        &mut self,
        user: &str,
        amount: f64,
        cibil: i32,
        streak: i32,
        fraud: bool,
    ) -> Result<SessionEntry, SessionError> {
        let user = user.trim();
        if user.is_empty() {
            return Err(SessionError::EmptyName);
        }
        if amount <= 0.0 {
            return Err(SessionError::InvalidAmount);
        }

        let outcome = compute_reward(&RewardInputs {
            amount,
            cibil_score: cibil,
            streak_days: streak,
            is_fraud: fraud,
        });

        let entry = SessionEntry {
            user: user.to_string(),
            amount,
            cibil,
            streak,
            fraud,
            coins: outcome.coins,
            trust: trust_score(cibil, streak, fraud),
        };

        self.entries.push(entry.clone());
        self.wallet_balance = round2(self.wallet_balance + entry.coins);
        Ok(entry)
    }

    pub fn redeem(&mut self, amount: f64) -> Result<f64, SessionError> {
        if amount < 0.0 {
            return Err(SessionError::InvalidAmount);
        }
        if amount > self.wallet_balance {
            return Err(SessionError::InsufficientBalance {
                requested: amount,
                available: self.wallet_balance,
            });
        }

        self.wallet_balance = round2(self.wallet_balance - amount);
        Ok(self.wallet_balance)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.wallet_balance = 0.0;
    }

    pub fn wallet_balance(&self) -> f64 {
        self.wallet_balance
    }

    pub fn entries(&self) -> &[SessionEntry] {
        &self.entries
    }

    pub fn leaderboard(&self, top: usize) -> Vec<LeaderboardEntry> {
        let mut totals: Vec<LeaderboardEntry> = Vec::new();
        for entry in &self.entries {
            match totals.iter_mut().find(|t| t.user == entry.user) {
                Some(t) => t.coins = round2(t.coins + entry.coins),
                None => totals.push(LeaderboardEntry {
                    user: entry.user.clone(),
                    coins: entry.coins,
                }),
            }
        }

        totals.sort_by(|a, b| b.coins.partial_cmp(&a.coins).unwrap_or(std::cmp::Ordering::Equal));
        totals.truncate(top);
        totals
    }

    pub fn history_csv(&self) -> String {
        let mut out = String::from("User,Amount,CIBIL,Streak,Fraud,Coins,Trust\n");
        for e in &self.entries {
            out.push_str(&format!(
                "{},{},{},{},{},{},{}\n",
                e.user, e.amount, e.cibil, e.streak, e.fraud, e.coins, e.trust
            ));
        }
        out
    }
}
