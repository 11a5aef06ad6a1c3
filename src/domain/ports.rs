use crate::domain::model::Quiz;
use crate::utils::error::Result;

/// Storage contract consumed by [`crate::core::QuizService`].
///
/// Implementations must fail with `QuizError::QuizNotFound` for unknown ids
/// instead of panicking.
pub trait QuizRepo {
    /// Stores a new quiz and returns the id minted for it. The id on `quiz` is ignored.
    fn create(&mut self, quiz: &Quiz) -> Result<u64>;

    /// Replaces the stored record that has the same id as `quiz`.
    fn update(&mut self, quiz: &Quiz) -> Result<()>;

    fn get_all(&self) -> Result<Vec<Quiz>>;

    fn get_by_id(&self, id: u64) -> Result<Quiz>;

    /// Removes the quiz and hands back what was stored.
    fn delete(&mut self, id: u64) -> Result<Quiz>;
}
