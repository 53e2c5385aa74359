//! Points for a quiz answer

/// Points for a correct answer before speed bonus and multiplier
pub const BASE_POINTS: f64 = 10.0;
/// Largest speed bonus, earned by answering with the full timer left
pub const MAX_SPEED_BONUS: f64 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreInput {
    pub is_correct: bool,
    pub time_left: u32,
    pub seconds_per_question: u32,
    pub streak_multiplier: f64,
}

impl ScoreInput {
    pub fn new(is_correct: bool, time_left: u32, seconds_per_question: u32) -> Self {
        Self {
            is_correct,
            time_left,
            seconds_per_question,
            streak_multiplier: 1.0,
        }
    }
}

/// `round((10 + round(5 * time_left / seconds_per_question)) * multiplier)`
///
/// Wrong answers score zero.
pub fn calc_score(input: ScoreInput) -> u32 {
    if !input.is_correct {
        return 0;
    }

    let ratio = if input.seconds_per_question == 0 {
        0.0
    } else {
        f64::from(input.time_left) / f64::from(input.seconds_per_question)
    };
    let speed_bonus = (MAX_SPEED_BONUS * ratio).round();
    let total = ((BASE_POINTS + speed_bonus) * input.streak_multiplier).round();

    if total.is_finite() && total > 0.0 {
        total as u32
    } else {
        0
    }
}
