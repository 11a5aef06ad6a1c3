pub mod adapters;
#[cfg(feature = "cli")]
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, Command};

pub use adapters::{FileQuizRepo, InMemoryQuizRepo};
pub use config::{Settings, TomlConfig};
pub use core::{QuizRepo, QuizService};
pub use domain::model::{PublicQuestion, PublicQuiz, Question, Quiz};
pub use utils::error::{QuizError, Result};
