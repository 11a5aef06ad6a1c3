// Adapters layer: concrete QuizRepo implementations and the persisted record shapes.

pub mod file_store;
pub mod memory_store;
pub mod record;

pub use file_store::FileQuizRepo;
pub use memory_store::InMemoryQuizRepo;
pub use record::StoreDocument;
