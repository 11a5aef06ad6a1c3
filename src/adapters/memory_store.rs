use crate::adapters::record::StoreDocument;
use crate::domain::model::Quiz;
use crate::domain::ports::QuizRepo;
use crate::utils::error::Result;

/// Keeps the store document in memory; same semantics as the file store.
#[derive(Debug, Clone, Default)]
pub struct InMemoryQuizRepo {
    document: StoreDocument,
}

impl InMemoryQuizRepo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_document(document: StoreDocument) -> Self {
        Self { document }
    }

    pub fn document(&self) -> &StoreDocument {
        &self.document
    }
}

impl QuizRepo for InMemoryQuizRepo {
    fn create(&mut self, quiz: &Quiz) -> Result<u64> {
        self.document.insert(quiz)
    }

    fn update(&mut self, quiz: &Quiz) -> Result<()> {
        self.document.replace(quiz)
    }

    fn get_all(&self) -> Result<Vec<Quiz>> {
        Ok(self.document.to_quizzes())
    }

    fn get_by_id(&self, id: u64) -> Result<Quiz> {
        self.document.find(id).map(Quiz::from)
    }

    fn delete(&mut self, id: u64) -> Result<Quiz> {
        self.document.remove(id).map(|record| Quiz::from(&record))
    }
}
