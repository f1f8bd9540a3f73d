use crate::areas::repository::Repository;
use crate::errors::Error;
use std::collections::BTreeSet;
use std::path::{Component, Path, PathBuf};

impl Repository {
    /// Store each file as a blob and stage it
    ///
    /// Directories expand to every file below them. Tracked files (in the HEAD
    /// manifest or the index) that no longer exist on disk are staged as
    /// removals. All paths are checked before anything is staged.
    pub fn add(&mut self, paths: &[String]) -> anyhow::Result<()> {
        let tracked = self.tracked_paths()?;

        let mut present = Vec::new();
        let mut missing = BTreeSet::new();
        for raw in paths {
            let vanished = Self::vanished_under(&tracked, &Self::normalize(raw), |path| {
                self.workspace().exists(path)
            });

            match self.workspace().list_files(Some(PathBuf::from(raw))) {
                Ok(files) => present.extend(files),
                Err(err) if vanished.is_empty() => return Err(err),
                Err(err) => match err.downcast_ref::<Error>() {
                    Some(Error::PathNotFound(_)) => {}
                    _ => return Err(err),
                },
            }
            missing.extend(vanished);
        }

        for path in present {
            let data = self.workspace().read_file(&path)?;
            let blob_id = self.database().put(data)?;

            tracing::info!(path = %path.display(), oid = %blob_id, "staged");
            self.index_mut().stage(path, blob_id)?;
        }

        let head_manifest = self.head_manifest()?;
        for path in missing {
            if head_manifest.contains_key(&path) {
                tracing::info!(path = %path.display(), "staged removal");
                self.index_mut().stage_removal(path)?;
            } else {
                tracing::info!(path = %path.display(), "unstaged");
                self.index_mut().unstage(&path)?;
            }
        }

        Ok(())
    }

    fn tracked_paths(&self) -> anyhow::Result<BTreeSet<PathBuf>> {
        let mut tracked = self.head_manifest()?.into_keys().collect::<BTreeSet<_>>();
        tracked.extend(self.index().staged_paths().cloned());

        Ok(tracked)
    }

    /// Tracked paths at or below `prefix` that are gone from the working tree
    fn vanished_under(
        tracked: &BTreeSet<PathBuf>,
        prefix: &Path,
        exists: impl Fn(&Path) -> bool,
    ) -> Vec<PathBuf> {
        tracked
            .iter()
            .filter(|path| path.starts_with(prefix))
            .filter(|path| !exists(path))
            .cloned()
            .collect()
    }

    /// Repository-relative form of a user path, `.` mapping to the root
    fn normalize(raw: &str) -> PathBuf {
        Path::new(raw)
            .components()
            .filter(|component| !matches!(component, Component::CurDir))
            .collect()
    }
}
