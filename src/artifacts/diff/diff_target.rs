use crate::areas::database::Database;
use crate::areas::workspace::Workspace;
use crate::artifacts::objects::object_id::ObjectId;
use derive_new::new;
use std::path::{Path, PathBuf};

/// One side of a file comparison: a stored blob, a live file, or nothing
#[derive(Debug, Clone, new)]
pub struct DiffTarget {
    pub(crate) file: PathBuf,
    pub(crate) text: String,
}

impl DiffTarget {
    pub fn from_blob(file: &Path, oid: &ObjectId, database: &Database) -> anyhow::Result<Self> {
        let blob = database.parse_object_as_blob(oid)?;

        Ok(Self::new(file.to_path_buf(), blob.text()))
    }

    pub fn from_file(file: &Path, workspace: &Workspace) -> anyhow::Result<Self> {
        let content = workspace.read_file(file)?;

        Ok(Self::new(
            file.to_path_buf(),
            String::from_utf8_lossy(&content).into_owned(),
        ))
    }

    pub fn from_nothing(file: &Path) -> Self {
        Self::new(file.to_path_buf(), String::new())
    }

    pub fn file(&self) -> &Path {
        &self.file
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}
