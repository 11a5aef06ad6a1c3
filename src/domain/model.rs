use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: u64,
    pub prompt: String,
    pub answer: String,
    pub wrong_answers: Vec<String>,
}

impl Question {
    pub fn new(
        prompt: impl Into<String>,
        answer: impl Into<String>,
        wrong_answers: Vec<String>,
    ) -> Self {
        Self {
            id: 0,
            prompt: prompt.into(),
            answer: answer.into(),
            wrong_answers,
        }
    }

    /// View of the question that does not reveal the correct option.
    ///
    /// Options are sorted so their order carries no hint about the answer.
    pub fn to_public(&self) -> PublicQuestion {
        let mut options = Vec::with_capacity(self.wrong_answers.len() + 1);
        options.push(self.answer.clone());
        options.extend(self.wrong_answers.iter().cloned());
        options.sort();

        PublicQuestion {
            id: self.id,
            prompt: self.prompt.clone(),
            options,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicQuestion {
    pub id: u64,
    pub prompt: String,
    pub options: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quiz {
    pub id: u64,
    pub name: String,
    pub questions: Vec<Question>,
}

impl Quiz {
    /// A quiz that has not been stored yet; the repository assigns the id.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: 0,
            name: name.into(),
            questions: Vec::new(),
        }
    }

    pub fn to_public(&self) -> PublicQuiz {
        PublicQuiz {
            id: self.id,
            name: self.name.clone(),
            questions: self.questions.iter().map(Question::to_public).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicQuiz {
    pub id: u64,
    pub name: String,
    pub questions: Vec<PublicQuestion>,
}
