use anyhow::Result;
use rewards_optimizer::config::AppConfig;
use rewards_optimizer::domain::reward::RewardResponse;
use rewards_optimizer::session::context::SessionContext;
use rewards_optimizer::session::trust::{badge_for_coins, trust_label};
use std::io::{BufRead, Write};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cfg = AppConfig::from_env();
    let client = reqwest::Client::new();
    let mut session = SessionContext::new();

    println!("Rewards Optimizer dashboard. Type 'help' for commands.");

    let stdin = std::io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("> ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next() else { break };
        let line = line?;
        let parts: Vec<&str> = line.split_whitespace().collect();
        let Some((&command, args)) = parts.split_first() else {
            continue;
        };

        match command {
            "calc" => calc(&mut session, args),
            "simulate" => backend_simulate(&client, &cfg.backend_url, &session, args).await,
            "consent" => consent(&mut session, args),
            "redeem" => redeem(&mut session, args),
            "wallet" => println!("Wallet balance: {:.2}", session.wallet_balance()),
            "history" => history(&session),
            "leaderboard" => leaderboard(&session),
            "export" => export(&session, args),
            "clear" => {
                session.clear();
                println!("Wallet cleared.");
            }
            "help" => help(),
            "quit" | "exit" => break,
            other => println!("Unknown command '{}'. Type 'help'.", other),
        }
    }

    Ok(())
}

fn calc(session: &mut SessionContext, args: &[&str]) {
    let [name, rest @ ..] = args else {
        println!("Usage: calc <name> <amount> <cibil> <streak> [fraud]");
        return;
    };

    let Some((amount, cibil, streak, fraud)) = parse_inputs(rest) else {
        println!("Usage: calc <name> <amount> <cibil> <streak> [fraud]");
        return;
    };

    match session.calculate(name, amount, cibil, streak, fraud) {
        Ok(entry) => {
            println!("Coins earned: {}", entry.coins);
            println!("Badge: {}", badge_for_coins(entry.coins));
            println!("Trust score: {}/100 ({})", entry.trust, trust_label(entry.trust));
            println!("Wallet balance: {:.2}", session.wallet_balance());
        }
        Err(e) => println!("{}", e),
    }
}

async fn backend_simulate(
    client: &reqwest::Client,
    backend_url: &str,
    session: &SessionContext,
    args: &[&str],
) {
    if let Err(e) = session.ensure_consent() {
        println!("{}", e);
        return;
    }

    let Some((amount, cibil, streak, fraud)) = parse_inputs(args) else {
        println!("Usage: simulate <amount> <cibil> <streak> [fraud]");
        return;
    };

    let body = serde_json::json!({
        "amount": amount,
        "cibil": cibil,
        "streak": streak,
        "fraud": fraud,
    });

    let response = match client
        .post(format!("{}/simulate", backend_url))
        .json(&body)
        .send()
        .await
    {
        Ok(r) => r,
        Err(_) => {
            println!("Backend not running. Start the rewards-optimizer server.");
            return;
        }
    };

    if !response.status().is_success() {
        println!("Backend validation failed ({}).", response.status());
        return;
    }

    match response.json::<RewardResponse>().await {
        Ok(data) => {
            println!("Backend coins: {}", data.coins);
            println!("Risk score: {}", data.risk_score);
            println!("{}", data.explanation);
        }
        Err(_) => println!("Backend returned an unreadable response."),
    }
}

fn consent(session: &mut SessionContext, args: &[&str]) {
    match args.first() {
        Some(&"on") => {
            session.set_consent(true);
            println!("Mock-data consent confirmed.");
        }
        Some(&"off") => {
            session.set_consent(false);
            println!("Mock-data consent withdrawn.");
        }
        _ => println!("Usage: consent <on|off>"),
    }
}

fn redeem(session: &mut SessionContext, args: &[&str]) {
    let Some(amount) = args.first().and_then(|a| a.parse::<f64>().ok()) else {
        println!("Usage: redeem <amount>");
        return;
    };

    match session.redeem(amount) {
        Ok(balance) => println!("Redeemed {} coins. Wallet balance: {:.2}", amount, balance),
        Err(e) => println!("{}", e),
    }
}

fn history(session: &SessionContext) {
    if session.entries().is_empty() {
        println!("No simulations yet.");
        return;
    }

    println!("User  Amount  CIBIL  Streak  Fraud  Coins  Trust");
    for e in session.entries() {
        println!(
            "{}  {}  {}  {}  {}  {}  {}",
            e.user, e.amount, e.cibil, e.streak, e.fraud, e.coins, e.trust
        );
    }
}

fn leaderboard(session: &SessionContext) {
    let top = session.leaderboard(5);
    if top.is_empty() {
        println!("No simulations yet.");
        return;
    }

    for (rank, entry) in top.iter().enumerate() {
        println!("{}. {} ({} coins)", rank + 1, entry.user, entry.coins);
    }
}

fn export(session: &SessionContext, args: &[&str]) {
    let path = args.first().copied().unwrap_or("wallet.csv");
    match std::fs::write(path, session.history_csv()) {
        Ok(()) => println!("Exported {} entries to {}.", session.entries().len(), path),
        Err(e) => println!("Export failed: {}", e),
    }
}

fn parse_inputs(args: &[&str]) -> Option<(f64, i32, i32, bool)> {
    let amount = args.first()?.parse().ok()?;
    let cibil = args.get(1)?.parse().ok()?;
    let streak = args.get(2)?.parse().ok()?;
    let fraud = match args.get(3) {
        Some(&"true") | Some(&"fraud") => true,
        Some(&"false") | None => false,
        Some(_) => return None,
    };

    Some((amount, cibil, streak, fraud))
}

fn help() {
    println!("Commands:");
    println!("  calc <name> <amount> <cibil> <streak> [fraud]   score locally and credit the wallet");
    println!("  simulate <amount> <cibil> <streak> [fraud]      score via the backend (needs consent)");
    println!("  consent <on|off>                                confirm the inputs are mock data");
    println!("  redeem <amount>                                 debit coins from the wallet");
    println!("  wallet                                          show the wallet balance");
    println!("  history                                         show this session's simulations");
    println!("  leaderboard                                     top users by total coins");
    println!("  export [path]                                   write session history as CSV");
    println!("  clear                                           reset history and wallet");
    println!("  quit                                            exit");
}
