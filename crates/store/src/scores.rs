//! File-backed score history.
//!
//! The file holds a JSON array of integers, one per finished game, in the
//! order they were recorded. Every append rewrites the file through a
//! temporary sibling and a rename so a crash never leaves it half written.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::core::score_store::top_n_of;
use crate::core::ScoreStore;
use crate::error::StoreError;

#[derive(Debug)]
pub struct JsonScoreFile {
    path: PathBuf,
    scores: Vec<u32>,
}

impl JsonScoreFile {
    /// Load the history at `path`. A missing or empty file is an empty history.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let scores = match fs::read_to_string(&path) {
            Ok(text) if text.trim().is_empty() => Vec::new(),
            Ok(text) => serde_json::from_str(&text)?,
            Err(err) if err.kind() == io::ErrorKind::NotFound => Vec::new(),
            Err(err) => return Err(err.into()),
        };
        debug!(path = %path.display(), count = scores.len(), "score file opened");
        Ok(Self { path, scores })
    }

    /// Like [`JsonScoreFile::open`], but an unreadable or malformed file is
    /// logged, moved aside to `<name>.bad` and replaced by an empty history.
    pub fn open_or_empty(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        match Self::open(&path) {
            Ok(store) => store,
            Err(err) => {
                let aside = quarantine_path(&path);
                match fs::rename(&path, &aside) {
                    Ok(()) => warn!(
                        %err,
                        path = %path.display(),
                        moved_to = %aside.display(),
                        "score file unreadable, starting with an empty history"
                    ),
                    Err(rename_err) => warn!(
                        %err,
                        %rename_err,
                        path = %path.display(),
                        "score file unreadable and could not be moved aside"
                    ),
                }
                Self {
                    path,
                    scores: Vec::new(),
                }
            }
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Recorded scores in insertion order.
    pub fn scores(&self) -> &[u32] {
        &self.scores
    }

    fn persist(&self) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, serde_json::to_vec(&self.scores)?)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

fn quarantine_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".bad");
    path.with_file_name(name)
}

impl ScoreStore for JsonScoreFile {
    type Error = StoreError;

    /// The score stays in memory even if writing the file fails.
    fn append(&mut self, score: u32) -> Result<(), StoreError> {
        self.scores.push(score);
        self.persist()?;
        debug!(score, path = %self.path.display(), "score recorded");
        Ok(())
    }

    fn top_n(&self, n: usize) -> Result<Vec<u32>, StoreError> {
        Ok(top_n_of(&self.scores, n))
    }
}
