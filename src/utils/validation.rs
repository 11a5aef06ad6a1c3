use crate::domain::model::Question;
use crate::utils::error::{QuizError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// A question is self-consistent when no option text appears twice.
impl Validate for Question {
    fn validate(&self) -> Result<()> {
        check_duplicated_answer(self)
    }
}

/// Fails if a wrong answer equals the correct answer or another wrong answer.
/// Comparison is exact: no trimming, no case folding.
pub fn check_duplicated_answer(question: &Question) -> Result<()> {
    let wrong = &question.wrong_answers;

    for (i, candidate) in wrong.iter().enumerate() {
        if *candidate == question.answer {
            return Err(QuizError::DuplicatedAnswer {
                answer: candidate.clone(),
            });
        }

        if wrong[i + 1..].contains(candidate) {
            return Err(QuizError::DuplicatedAnswer {
                answer: candidate.clone(),
            });
        }
    }

    Ok(())
}

/// Fails if `existing` already holds a question with the same prompt.
pub fn check_duplicated_question(question: &Question, existing: &[Question]) -> Result<()> {
    if existing.iter().any(|q| q.prompt == question.prompt) {
        return Err(QuizError::DuplicatedQuestion {
            prompt: question.prompt.clone(),
        });
    }
    Ok(())
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(QuizError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(QuizError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}
