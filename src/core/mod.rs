pub mod service;

pub use crate::domain::model::{PublicQuestion, PublicQuiz, Question, Quiz};
pub use crate::domain::ports::QuizRepo;
pub use crate::utils::error::Result;
pub use service::QuizService;
