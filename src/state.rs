use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::quiz::QuestionSet;

/// Progress of a single quiz session. Owned by the engine; everything shown
/// in the header (score, accuracy, progress) is derived from it on read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizState {
    pub index: usize,
    /// question index -> chosen option text. A key is present iff that
    /// question has been answered; the first recorded answer is final.
    pub answered: HashMap<usize, String>,
    pub completed: bool,
    pub elapsed_seconds: u64,
}

impl Default for QuizState {
    fn default() -> Self {
        Self::fresh()
    }
}

impl QuizState {
    pub fn fresh() -> Self {
        Self {
            index: 0,
            answered: HashMap::new(),
            completed: false,
            elapsed_seconds: 0,
        }
    }

    pub fn is_answered(&self, index: usize) -> bool {
        self.answered.contains_key(&index)
    }

    pub fn current_answer(&self) -> Option<&str> {
        self.answered.get(&self.index).map(String::as_str)
    }
}

/// Statistics recomputed from `(answered, questions, index)` on every read.
/// Never cached, so they cannot go stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stats {
    pub score: usize,
    pub answered_count: usize,
    pub accuracy: u32,
    pub progress_percent: u32,
}

impl Stats {
    pub fn derive(state: &QuizState, questions: &QuestionSet) -> Self {
        let score = score(&state.answered, questions);
        let answered_count = state.answered.len();
        Self {
            score,
            answered_count,
            accuracy: accuracy(score, answered_count),
            progress_percent: progress_percent(state.index, questions.total()),
        }
    }
}

pub fn score(answered: &HashMap<usize, String>, questions: &QuestionSet) -> usize {
    answered
        .iter()
        .filter(|(index, choice)| {
            questions
                .get(**index)
                .is_some_and(|q| q.is_correct(choice.as_str()))
        })
        .count()
}

pub fn accuracy(score: usize, answered_count: usize) -> u32 {
    if answered_count == 0 {
        return 0;
    }
    (100.0 * score as f64 / answered_count as f64).round() as u32
}

pub fn progress_percent(index: usize, total: usize) -> u32 {
    (100.0 * (index + 1) as f64 / total as f64).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::Question;

    fn three_questions() -> QuestionSet {
        let questions = (0..3)
            .map(|i| {
                Question::new(
                    i + 1,
                    format!("question {i}"),
                    vec!["a".into(), "b".into(), "c".into(), "d".into()],
                    "a".into(),
                )
            })
            .collect();
        QuestionSet::new(questions).unwrap()
    }

    #[test]
    fn accuracy_is_zero_with_nothing_answered() {
        assert_eq!(accuracy(0, 0), 0);
    }

    #[test]
    fn accuracy_rounds_to_nearest_percent() {
        assert_eq!(accuracy(2, 3), 67);
        assert_eq!(accuracy(1, 3), 33);
        assert_eq!(accuracy(3, 3), 100);
    }

    #[test]
    fn score_counts_only_matching_answers() {
        let questions = three_questions();
        let mut answered = HashMap::new();
        answered.insert(0, "a".to_string());
        answered.insert(1, "b".to_string());
        assert_eq!(score(&answered, &questions), 1);

        // incorrect additions leave the score unchanged
        answered.insert(2, "d".to_string());
        assert_eq!(score(&answered, &questions), 1);
    }

    #[test]
    fn score_never_decreases_as_correct_answers_accumulate() {
        let questions = three_questions();
        let mut answered = HashMap::new();
        let mut previous = 0;
        for index in 0..3 {
            answered.insert(index, "a".to_string());
            let current = score(&answered, &questions);
            assert!(current >= previous);
            previous = current;
        }
        assert_eq!(previous, 3);
    }

    #[test]
    fn score_ignores_out_of_range_entries() {
        let questions = three_questions();
        let mut answered = HashMap::new();
        answered.insert(99, "a".to_string());
        assert_eq!(score(&answered, &questions), 0);
    }

    #[test]
    fn progress_covers_full_range() {
        assert_eq!(progress_percent(0, 3), 33);
        assert_eq!(progress_percent(1, 3), 67);
        assert_eq!(progress_percent(2, 3), 100);
    }

    #[test]
    fn derives_all_stats_together() {
        let questions = three_questions();
        let mut state = QuizState::fresh();
        state.answered.insert(0, "a".to_string());
        state.answered.insert(1, "c".to_string());
        state.index = 2;

        let stats = Stats::derive(&state, &questions);
        assert_eq!(stats.score, 1);
        assert_eq!(stats.answered_count, 2);
        assert_eq!(stats.accuracy, 50);
        assert_eq!(stats.progress_percent, 100);
    }
}
