pub fn trust_score(cibil: i32, streak: i32, fraud: bool) -> i32 {
    let mut score = 50;

    if cibil >= 750 {
        score += 30;
    } else if cibil >= 650 {
        score += 15;
    } else {
        score -= 10;
    }

    score += (streak * 2).min(20);

    if fraud {
        score -= 40;
    }

    score.clamp(0, 100)
}

pub fn trust_label(score: i32) -> &'static str {
    if score >= 70 {
        "High Trust"
    } else if score >= 40 {
        "Medium Trust"
    } else {
        "Low Trust"
    }
}

pub fn badge_for_coins(coins: f64) -> &'static str {
    if coins < 5.0 {
        "Bronze"
    } else if coins < 15.0 {
        "Silver"
    } else {
        "Gold"
    }
}
