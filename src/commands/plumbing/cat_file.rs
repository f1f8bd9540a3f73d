use crate::areas::repository::Repository;
use crate::artifacts::branch::revision::Revision;
use crate::artifacts::objects::object_id::ObjectId;
use std::io::Write;

impl Repository {
    /// Pretty-print a stored object
    ///
    /// Accepts a full object ID, or any revision naming a commit.
    pub fn cat_file(&self, object: &str) -> anyhow::Result<()> {
        let object_id = match ObjectId::try_parse(object.to_string()) {
            Ok(object_id) => object_id,
            Err(_) => Revision::try_parse(object)?.resolve(self)?,
        };

        let object = self.database().parse_object(&object_id)?;
        write!(self.writer(), "{}", object.display())?;

        Ok(())
    }
}
