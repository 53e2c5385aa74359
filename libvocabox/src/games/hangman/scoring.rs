//! Final score of a hangman round

pub const POINTS_PER_LETTER: i64 = 10;
pub const HINT_PENALTY: i64 = 5;
pub const MAX_TIME_BONUS: f64 = 20.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreParams {
    /// Letters in the word, not counting spaces or hyphens
    pub word_length: usize,
    pub lives_left: u32,
    pub max_lives: u32,
    pub hints_used: u32,
    pub time_bonus: u32,
}

/// `max(0, base + floor(lives_left / max_lives * base * 0.5) + time_bonus - hints * 5)`
/// where `base = word_length * 10`
pub fn calculate_score(params: ScoreParams) -> u32 {
    let base = params.word_length as i64 * POINTS_PER_LETTER;

    let lives_bonus = if params.max_lives == 0 {
        0
    } else {
        let ratio = f64::from(params.lives_left) / f64::from(params.max_lives);
        (ratio * base as f64 * 0.5).floor() as i64
    };

    let total = base + lives_bonus + i64::from(params.time_bonus)
        - i64::from(params.hints_used) * HINT_PENALTY;
    total.clamp(0, i64::from(u32::MAX)) as u32
}

/// Up to 20 points for time left on the clock; zero when either value is zero
pub fn time_bonus(seconds_left: u32, max_seconds: u32) -> u32 {
    if seconds_left == 0 || max_seconds == 0 {
        return 0;
    }
    let ratio = f64::from(seconds_left) / f64::from(max_seconds);
    (ratio * MAX_TIME_BONUS).floor() as u32
}
