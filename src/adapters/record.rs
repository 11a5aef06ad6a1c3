use crate::domain::model::{Question, Quiz};
use crate::utils::error::{QuizError, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionRecord {
    pub prompt: String,
    #[serde(alias = "anser")]
    pub answer: String,
    #[serde(default)]
    pub wrong_answers: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizRecord {
    pub id: u64,
    #[serde(alias = "string")]
    pub name: String,
    #[serde(default)]
    pub questions: Vec<QuestionRecord>,
}

/// Everything the store persists: the quizzes plus the id counter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreDocument {
    #[serde(default, alias = "quizes", alias = "Quizes")]
    pub quizzes: Vec<QuizRecord>,
    #[serde(default, alias = "sequencegenerator", alias = "SequenceGenerator")]
    pub sequence_generator: u64,
}

impl StoreDocument {
    /// Mints the next id, stores the quiz under it and returns the id.
    /// The document is left untouched when the counter cannot advance.
    pub fn insert(&mut self, quiz: &Quiz) -> Result<u64> {
        let id = self
            .sequence_generator
            .checked_add(1)
            .ok_or(QuizError::IdSpaceExhausted {
                last_id: self.sequence_generator,
            })?;

        let mut record = QuizRecord::from(quiz);
        record.id = id;
        self.quizzes.push(record);
        self.sequence_generator = id;
        Ok(id)
    }

    pub fn find(&self, id: u64) -> Result<&QuizRecord> {
        self.quizzes
            .iter()
            .find(|q| q.id == id)
            .ok_or(QuizError::QuizNotFound { id })
    }

    pub fn replace(&mut self, quiz: &Quiz) -> Result<()> {
        let slot = self
            .quizzes
            .iter_mut()
            .find(|q| q.id == quiz.id)
            .ok_or(QuizError::QuizNotFound { id: quiz.id })?;
        *slot = QuizRecord::from(quiz);
        Ok(())
    }

    pub fn remove(&mut self, id: u64) -> Result<QuizRecord> {
        let index = self
            .quizzes
            .iter()
            .position(|q| q.id == id)
            .ok_or(QuizError::QuizNotFound { id })?;
        Ok(self.quizzes.remove(index))
    }

    pub fn to_quizzes(&self) -> Vec<Quiz> {
        self.quizzes.iter().map(Quiz::from).collect()
    }
}

impl From<&Question> for QuestionRecord {
    fn from(question: &Question) -> Self {
        Self {
            prompt: question.prompt.clone(),
            answer: question.answer.clone(),
            wrong_answers: question.wrong_answers.clone(),
        }
    }
}

impl From<&QuestionRecord> for Question {
    fn from(record: &QuestionRecord) -> Self {
        Question::new(
            record.prompt.clone(),
            record.answer.clone(),
            record.wrong_answers.clone(),
        )
    }
}

impl From<&Quiz> for QuizRecord {
    fn from(quiz: &Quiz) -> Self {
        Self {
            id: quiz.id,
            name: quiz.name.clone(),
            questions: quiz.questions.iter().map(QuestionRecord::from).collect(),
        }
    }
}

impl From<&QuizRecord> for Quiz {
    fn from(record: &QuizRecord) -> Self {
        Self {
            id: record.id,
            name: record.name.clone(),
            questions: record.questions.iter().map(Question::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_quiz() -> Quiz {
        let mut quiz = Quiz::new("Math");
        quiz.id = 7;
        quiz.questions.push(Question::new(
            "2+2?",
            "4",
            vec!["3".to_string(), "5".to_string()],
        ));
        quiz
    }

    #[test]
    fn test_quiz_record_translation_is_lossless() {
        let quiz = sample_quiz();
        let record = QuizRecord::from(&quiz);
        assert_eq!(record.id, 7);
        assert_eq!(record.questions[0].answer, "4");
        assert_eq!(Quiz::from(&record), quiz);
    }

    #[test]
    fn test_insert_never_reuses_ids() {
        let mut doc = StoreDocument::default();
        assert_eq!(doc.insert(&Quiz::new("a")).unwrap(), 1);
        assert_eq!(doc.insert(&Quiz::new("b")).unwrap(), 2);
        doc.remove(2).unwrap();
        assert_eq!(doc.insert(&Quiz::new("c")).unwrap(), 3);
        assert_eq!(doc.sequence_generator, 3);
    }

    #[test]
    fn test_insert_fails_when_counter_is_exhausted() {
        let mut doc: StoreDocument =
            serde_yaml::from_str("quizzes: []\nsequence_generator: 18446744073709551615").unwrap();
        assert_eq!(doc.sequence_generator, u64::MAX);

        assert!(matches!(
            doc.insert(&Quiz::new("x")),
            Err(QuizError::IdSpaceExhausted { last_id: u64::MAX })
        ));
        assert!(doc.quizzes.is_empty());
        assert_eq!(doc.sequence_generator, u64::MAX);
    }

    #[test]
    fn test_missing_ids_are_not_found() {
        let mut doc = StoreDocument::default();
        doc.insert(&Quiz::new("a")).unwrap();

        assert!(matches!(doc.find(9), Err(QuizError::QuizNotFound { id: 9 })));
        assert!(matches!(doc.remove(9), Err(QuizError::QuizNotFound { id: 9 })));

        let mut ghost = Quiz::new("ghost");
        ghost.id = 9;
        assert!(matches!(
            doc.replace(&ghost),
            Err(QuizError::QuizNotFound { id: 9 })
        ));
        assert_eq!(doc.quizzes.len(), 1);
    }

    #[test]
    fn test_yaml_uses_corrected_field_names() {
        let mut doc = StoreDocument::default();
        let mut quiz = sample_quiz();
        quiz.id = 0;
        doc.insert(&quiz).unwrap();

        let yaml = serde_yaml::to_string(&doc).unwrap();
        assert!(yaml.contains("quizzes:"));
        assert!(yaml.contains("name: Math"));
        assert!(yaml.contains("answer:"));
        assert!(!yaml.contains("anser"));
        assert!(yaml.contains("sequence_generator: 1"));
    }

    #[test]
    fn test_reads_legacy_field_names() {
        let legacy = r#"
quizes:
  - id: 4
    string: History
    questions:
      - prompt: "Year of the moon landing?"
        anser: "1969"
        wrong_answers: ["1970", "1968"]
sequencegenerator: 4
"#;
        let doc: StoreDocument = serde_yaml::from_str(legacy).unwrap();
        assert_eq!(doc.sequence_generator, 4);
        assert_eq!(doc.quizzes[0].name, "History");
        assert_eq!(doc.quizzes[0].questions[0].answer, "1969");
    }
}
