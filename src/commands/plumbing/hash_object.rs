use crate::areas::repository::Repository;
use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::object::Object;
use std::io::Write;
use std::path::Path;

impl Repository {
    /// Print the blob ID of a file, storing the blob when `write` is set
    pub fn hash_object(&self, object_path: &str, write: bool) -> anyhow::Result<()> {
        let object = Blob::new(self.workspace().read_file(Path::new(object_path))?);
        let object_id = object.object_id()?;

        writeln!(self.writer(), "{}", object_id)?;

        if write {
            self.database().store(&object)?;
        }

        Ok(())
    }
}
