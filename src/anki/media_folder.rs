use std::{
    fs,
    path::{
        Path,
        PathBuf,
    },
};

use super::{
    media_file_name,
    MediaStore,
};
use crate::core::BmaError;

/// A plain directory used as the media store, e.g. a profile's `collection.media`.
#[derive(Debug, Clone)]
pub struct MediaFolder {
    dir: PathBuf,
}

impl MediaFolder {
    pub fn open(dir: &Path) -> Result<Self, BmaError> {
        fs::create_dir_all(dir)?;
        Ok(Self { dir: dir.to_path_buf() })
    }
}

impl MediaStore for MediaFolder {
    fn dir(&self) -> Result<PathBuf, BmaError> {
        Ok(self.dir.clone())
    }

    fn add_file(&mut self, path: &Path) -> Result<String, BmaError> {
        let filename = media_file_name(path)?;
        fs::copy(path, self.dir.join(&filename))?;
        Ok(filename)
    }

    fn remove_file(&mut self, filename: &str) -> Result<(), BmaError> {
        fs::remove_file(self.dir.join(filename))?;
        Ok(())
    }
}
