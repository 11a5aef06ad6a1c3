use crate::adapters::record::StoreDocument;
use crate::domain::model::Quiz;
use crate::domain::ports::QuizRepo;
use crate::utils::error::{QuizError, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

pub const DEFAULT_STORE_PATH: &str = "repo.yaml";

/// YAML-file backed repository. Every call reads the whole document and,
/// for mutations, writes the whole document back.
#[derive(Debug, Clone)]
pub struct FileQuizRepo {
    path: PathBuf,
}

impl FileQuizRepo {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// A missing or blank file is an empty store.
    pub fn load(&self) -> Result<StoreDocument> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!("Store {} does not exist yet", self.path.display());
                return Ok(StoreDocument::default());
            }
            Err(e) => return Err(QuizError::IoError(e)),
        };

        if content.trim().is_empty() {
            return Ok(StoreDocument::default());
        }

        let document: StoreDocument =
            serde_yaml::from_str(&content).map_err(|source| QuizError::StoreDecode {
                path: self.path.display().to_string(),
                source,
            })?;

        tracing::debug!(
            "Loaded {} quizzes from {}",
            document.quizzes.len(),
            self.path.display()
        );
        Ok(document)
    }

    /// Writes to a sibling temp file first, then renames it over the store.
    pub fn save(&self, document: &StoreDocument) -> Result<()> {
        let data = serde_yaml::to_string(document).map_err(QuizError::StoreEncode)?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let mut tmp_name = self.path.as_os_str().to_owned();
        tmp_name.push(".tmp");
        let tmp_path = PathBuf::from(tmp_name);

        fs::write(&tmp_path, data)?;
        if let Err(e) = fs::rename(&tmp_path, &self.path) {
            let _ = fs::remove_file(&tmp_path);
            return Err(QuizError::IoError(e));
        }

        tracing::debug!(
            "Saved {} quizzes to {}",
            document.quizzes.len(),
            self.path.display()
        );
        Ok(())
    }
}

impl QuizRepo for FileQuizRepo {
    fn create(&mut self, quiz: &Quiz) -> Result<u64> {
        let mut document = self.load()?;
        let id = document.insert(quiz)?;
        self.save(&document)?;
        Ok(id)
    }

    fn update(&mut self, quiz: &Quiz) -> Result<()> {
        let mut document = self.load()?;
        document.replace(quiz)?;
        self.save(&document)
    }

    fn get_all(&self) -> Result<Vec<Quiz>> {
        Ok(self.load()?.to_quizzes())
    }

    fn get_by_id(&self, id: u64) -> Result<Quiz> {
        let document = self.load()?;
        document.find(id).map(Quiz::from)
    }

    fn delete(&mut self, id: u64) -> Result<Quiz> {
        let mut document = self.load()?;
        let removed = document.remove(id)?;
        self.save(&document)?;
        Ok(Quiz::from(&removed))
    }
}
