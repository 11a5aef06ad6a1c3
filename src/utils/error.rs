use thiserror::Error;

#[derive(Error, Debug)]
pub enum QuizError {
    #[error("Quiz not found: {id}")]
    QuizNotFound { id: u64 },

    #[error("Duplicated answer: {answer:?}")]
    DuplicatedAnswer { answer: String },

    #[error("Duplicated question: {prompt:?}")]
    DuplicatedQuestion { prompt: String },

    #[error("No quiz ids left after {last_id}")]
    IdSpaceExhausted { last_id: u64 },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to decode store '{path}': {source}")]
    StoreDecode {
        path: String,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Failed to encode store: {0}")]
    StoreEncode(#[source] serde_yaml::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    NotFound,
    Validation,
    Storage,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    /// Bad input from the user; the store is untouched.
    Medium,
    High,
    /// The store itself could not be read or written.
    Critical,
}

impl QuizError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            QuizError::QuizNotFound { .. } => ErrorCategory::NotFound,
            QuizError::DuplicatedAnswer { .. } | QuizError::DuplicatedQuestion { .. } => {
                ErrorCategory::Validation
            }
            QuizError::IoError(_)
            | QuizError::IdSpaceExhausted { .. }
            | QuizError::StoreDecode { .. }
            | QuizError::StoreEncode(_)
            | QuizError::SerializationError(_) => ErrorCategory::Storage,
            QuizError::ConfigError { .. }
            | QuizError::ConfigValidationError { .. }
            | QuizError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::NotFound | ErrorCategory::Validation => ErrorSeverity::Medium,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Storage => ErrorSeverity::Critical,
        }
    }

    /// 提供給使用者的修復建議
    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            QuizError::QuizNotFound { .. } => "Run `quizzer list` to see the available quiz ids",
            QuizError::DuplicatedAnswer { .. } => {
                "Make every wrong answer unique and different from the correct answer"
            }
            QuizError::DuplicatedQuestion { .. } => {
                "Use a prompt that does not already exist in this quiz"
            }
            QuizError::IoError(_) => "Check that the store path exists and is writable",
            QuizError::IdSpaceExhausted { .. } => {
                "The store's sequence_generator is at its maximum; fix or move the store file aside"
            }
            QuizError::StoreDecode { .. } => {
                "The store file is corrupt or in an unknown format; fix or move it aside"
            }
            QuizError::StoreEncode(_) | QuizError::SerializationError(_) => {
                "This is likely a bug; please report it"
            }
            QuizError::ConfigError { .. }
            | QuizError::ConfigValidationError { .. }
            | QuizError::InvalidConfigValueError { .. } => {
                "Check the command-line options and the TOML configuration file"
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            QuizError::QuizNotFound { id } => format!("There is no quiz with id {}", id),
            QuizError::DuplicatedAnswer { answer } => {
                format!("The answer {:?} is listed more than once", answer)
            }
            QuizError::DuplicatedQuestion { prompt } => {
                format!("The quiz already has a question {:?}", prompt)
            }
            QuizError::StoreDecode { path, .. } => {
                format!("Could not read the quiz store at '{}'", path)
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, QuizError>;
