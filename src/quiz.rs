use std::{error::Error, fmt, fs, path::Path};

use serde::{Deserialize, Serialize};

/// The dataset shipped inside the binary. `QUIZ_DATA_PATH` overrides it.
const EMBEDDED_QUESTIONS: &str = include_str!("../assets/questions.json");

pub(crate) const OPTIONS_PER_QUESTION: usize = 4;

/// One quiz item: four options, one of which is the designated answer.
/// Question text and options may embed math markup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    id: u32,
    question: String,
    options: Vec<String>,
    answer: String,
}

impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut options = String::new();
        for (i, option) in self.options.iter().enumerate() {
            options.push_str(&format!("{}){}\n", i + 1, option));
        }

        write!(f, "Question #{}\n{}\n{}", self.id, self.question, options)
    }
}

impl Question {
    pub fn new(id: u32, question: String, options: Vec<String>, answer: String) -> Self {
        Self {
            id,
            question,
            options,
            answer,
        }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn text(&self) -> &str {
        &self.question
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }

    pub fn is_correct(&self, choice: &str) -> bool {
        self.answer == choice
    }
}

/// The immutable, ordered question list a session runs over. Loaded once at
/// startup and validated; the engine only ever indexes into it.
#[derive(Debug, Clone)]
pub struct QuestionSet {
    questions: Vec<Question>,
}

type LoadResult = Result<QuestionSet, Box<dyn Error + Send + Sync>>;

impl QuestionSet {
    pub fn new(questions: Vec<Question>) -> LoadResult {
        if questions.is_empty() {
            return Err("question set is empty".into());
        }

        for question in &questions {
            if question.options.len() != OPTIONS_PER_QUESTION {
                return Err(format!(
                    "question #{} has {} options, expected {}",
                    question.id,
                    question.options.len(),
                    OPTIONS_PER_QUESTION
                )
                .into());
            }
            for (i, option) in question.options.iter().enumerate() {
                if question.options[..i].contains(option) {
                    return Err(
                        format!("question #{} has duplicate option '{}'", question.id, option)
                            .into(),
                    );
                }
            }
            if !question.options.contains(&question.answer) {
                return Err(format!(
                    "question #{}: answer '{}' is not one of its options",
                    question.id, question.answer
                )
                .into());
            }
        }

        Ok(Self { questions })
    }

    pub fn from_json(json: &str) -> LoadResult {
        let questions: Vec<Question> = serde_json::from_str(json)?;
        Self::new(questions)
    }

    pub fn from_file(path: impl AsRef<Path>) -> LoadResult {
        let json = fs::read_to_string(path.as_ref())?;
        Self::from_json(&json)
    }

    pub fn embedded() -> LoadResult {
        Self::from_json(EMBEDDED_QUESTIONS)
    }

    pub fn total(&self) -> usize {
        self.questions.len()
    }

    pub fn get(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(id: u32, options: [&str; 4], answer: &str) -> Question {
        Question::new(
            id,
            format!("question {id}"),
            options.iter().map(|s| s.to_string()).collect(),
            answer.to_string(),
        )
    }

    #[test]
    fn embedded_dataset_is_valid() {
        let set = QuestionSet::embedded().unwrap();
        assert!(set.total() >= 1);
        for q in set.questions() {
            assert!(q.options().contains(&q.answer().to_string()));
        }
    }

    #[test]
    fn rejects_empty_set() {
        assert!(QuestionSet::new(vec![]).is_err());
    }

    #[test]
    fn rejects_answer_not_among_options() {
        let result = QuestionSet::new(vec![question(1, ["a", "b", "c", "d"], "e")]);
        assert!(result.is_err());
    }

    #[test]
    fn rejects_wrong_option_count() {
        let q = Question::new(
            1,
            "q".into(),
            vec!["a".into(), "b".into(), "c".into()],
            "a".into(),
        );
        assert!(QuestionSet::new(vec![q]).is_err());
    }

    #[test]
    fn rejects_duplicate_options() {
        let result = QuestionSet::new(vec![question(1, ["a", "b", "b", "d"], "a")]);
        assert!(result.is_err());
    }

    #[test]
    fn parses_dataset_schema() {
        let json = r#"[{"id": 7, "question": "What is $2+2$?", "options": ["3", "4", "5", "6"], "answer": "4"}]"#;
        let set = QuestionSet::from_json(json).unwrap();
        let q = set.get(0).unwrap();
        assert_eq!(q.id(), 7);
        assert!(q.is_correct("4"));
        assert!(!q.is_correct("3"));
    }
}
