use std::path::{
    Path,
    PathBuf,
};

use crate::core::{
    BmaError,
    NoteType,
    NoteTypeUpdate,
};

pub mod api;
pub mod media_folder;
pub mod memory;
pub mod types;

pub use api::AnkiConnect;
pub use media_folder::MediaFolder;
pub use memory::MemoryStore;

/// The host's note type collection, keyed by display name.
pub trait NoteTypeStore {
    fn by_name(&self, name: &str) -> Result<Option<NoteType>, BmaError>;

    /// Persist a brand new note type.
    fn add(&mut self, note_type: &NoteType) -> Result<(), BmaError>;

    /// Apply `update` to the existing note type `update.name`.
    fn save(&mut self, update: &NoteTypeUpdate) -> Result<(), BmaError>;
}

/// The host's flat media directory.
pub trait MediaStore {
    fn dir(&self) -> Result<PathBuf, BmaError>;

    fn has_file(&self, filename: &str) -> Result<bool, BmaError> {
        Ok(self.dir()?.join(filename).is_file())
    }

    /// Copy `path` into the media directory under its base name.
    fn add_file(&mut self, path: &Path) -> Result<String, BmaError>;

    fn remove_file(&mut self, filename: &str) -> Result<(), BmaError>;
}

pub(crate) fn media_file_name(path: &Path) -> Result<String, BmaError> {
    path.file_name()
        .and_then(|name| name.to_str())
        .map(|name| name.to_string())
        .ok_or_else(|| BmaError::Custom(format!("No usable file name in '{}'", path.display())))
}
