use crate::core::QuizRepo;
use crate::domain::model::{Question, Quiz};
use crate::utils::error::Result;
use crate::utils::validation::{check_duplicated_question, Validate};

/// Quiz authoring operations. Holds no state besides the repository, so
/// every call sees what is currently persisted.
pub struct QuizService<R: QuizRepo> {
    repo: R,
}

impl<R: QuizRepo> QuizService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    #[cfg(test)]
    pub(crate) fn repo(&self) -> &R {
        &self.repo
    }

    /// Creates an empty quiz. Any name is accepted, including an empty one.
    pub fn add(&mut self, name: &str) -> Result<u64> {
        let id = self.repo.create(&Quiz::new(name))?;
        tracing::info!("Created quiz {} ({:?})", id, name);
        Ok(id)
    }

    pub fn add_question_to_quiz(&mut self, quiz_id: u64, question: Question) -> Result<()> {
        let mut quiz = self.repo.get_by_id(quiz_id)?;

        if let Err(e) = question
            .validate()
            .and_then(|_| check_duplicated_question(&question, &quiz.questions))
        {
            tracing::warn!("Rejected question for quiz {}: {}", quiz_id, e);
            return Err(e);
        }

        quiz.questions.push(question);
        self.repo.update(&quiz)?;

        tracing::info!(
            "Added question to quiz {} ({} questions)",
            quiz_id,
            quiz.questions.len()
        );
        Ok(())
    }

    pub fn list(&self) -> Result<Vec<Quiz>> {
        self.repo.get_all()
    }

    pub fn get(&self, quiz_id: u64) -> Result<Quiz> {
        self.repo.get_by_id(quiz_id)
    }

    pub fn delete(&mut self, quiz_id: u64) -> Result<Quiz> {
        let removed = self.repo.delete(quiz_id)?;
        tracing::info!("Deleted quiz {} ({:?})", removed.id, removed.name);
        Ok(removed)
    }
}
