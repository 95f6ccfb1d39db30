use serde::{Deserialize, Serialize};

/// Result of an article's comprehension quiz.
///
/// `value` is the fraction of questions answered correctly, clamped to
/// `[0, 1]` on construction (NaN counts as `0`), so the score always
/// serializes as a finite number. `clamped` remembers that the supplied
/// value was out of range. A quiz with no questions is a trivial pass worth
/// `1.0`, but never counts as a perfect score.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct QuizScore {
    value: f64,
    has_questions: bool,
    #[serde(default)]
    clamped: bool,
}

impl QuizScore {
    /// Score from a fraction of correct answers on a quiz with at least one question.
    pub fn new(value: f64) -> Self {
        let fraction = if value.is_nan() {
            0.0
        } else {
            value.clamp(0.0, 1.0)
        };
        Self {
            value: fraction,
            has_questions: true,
            clamped: fraction != value,
        }
    }

    /// Score for an article whose quiz had no questions.
    pub fn no_questions() -> Self {
        Self {
            value: 1.0,
            has_questions: false,
            clamped: false,
        }
    }

    /// Score from answer counts. `total == 0` is treated as [`Self::no_questions`].
    pub fn from_answers(correct: u32, total: u32) -> Self {
        if total == 0 {
            return Self::no_questions();
        }
        Self::new(f64::from(correct) / f64::from(total))
    }

    /// The score in `[0, 1]`.
    ///
    /// Clamps again so hand-edited journals cannot push it out of range.
    pub fn fraction(&self) -> f64 {
        if self.value.is_nan() {
            0.0
        } else {
            self.value.clamp(0.0, 1.0)
        }
    }

    pub fn has_questions(&self) -> bool {
        self.has_questions
    }

    /// Whether the supplied value had to be clamped.
    pub fn is_out_of_range(&self) -> bool {
        self.clamped
    }

    /// Every question answered correctly on a quiz that had questions.
    pub fn is_perfect(&self) -> bool {
        self.has_questions && self.fraction() == 1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fraction_clamps_out_of_range_values() {
        assert_eq!(QuizScore::new(1.7).fraction(), 1.0);
        assert_eq!(QuizScore::new(-0.2).fraction(), 0.0);
        assert_eq!(QuizScore::new(f64::NAN).fraction(), 0.0);
        assert!(QuizScore::new(f64::NAN).is_out_of_range());
        assert!(!QuizScore::new(0.5).is_out_of_range());
        assert!(QuizScore::new(f64::INFINITY).is_out_of_range());
        assert_eq!(QuizScore::new(f64::NEG_INFINITY).fraction(), 0.0);
    }

    #[test]
    fn non_finite_scores_survive_json() {
        for supplied in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let score = QuizScore::new(supplied);
            let json = serde_json::to_string(&score).unwrap();
            let restored: QuizScore = serde_json::from_str(&json).unwrap();
            assert_eq!(restored, score);
            assert!(restored.is_out_of_range());
        }
    }

    #[test]
    fn empty_quiz_is_a_trivial_pass_but_not_perfect() {
        let score = QuizScore::from_answers(0, 0);
        assert_eq!(score.fraction(), 1.0);
        assert!(!score.has_questions());
        assert!(!score.is_perfect());
    }

    #[test]
    fn all_answers_correct_is_perfect() {
        assert!(QuizScore::from_answers(4, 4).is_perfect());
        assert!(!QuizScore::from_answers(3, 4).is_perfect());
        assert_eq!(QuizScore::from_answers(3, 4).fraction(), 0.75);
    }
}
