use std::{
    env,
    path::{
        Path,
        PathBuf,
    },
};

use serde::{
    Deserialize,
    Serialize,
};

pub const SETTINGS_FILE: &str = "settings.json";
pub const DEFAULT_ANKI_CONNECT_URL: &str = "http://localhost:8765/";

/// How to reach the host. The note type shapes themselves are not configurable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub anki_connect_url: String,
    /// Folder holding `templates/` and `dist/`
    pub addon_dir: PathBuf,
    /// Copy media straight into this folder instead of going through AnkiConnect
    pub media_dir: Option<PathBuf>,
    pub overwrite_media: bool,
    pub update_templates: bool,
}

/// Folder the executable was installed in, where `templates/` and `dist/` ship
/// alongside it. Falls back to the working directory.
pub fn default_addon_dir() -> PathBuf {
    env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."))
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            anki_connect_url: DEFAULT_ANKI_CONNECT_URL.to_string(),
            addon_dir: default_addon_dir(),
            media_dir: None,
            overwrite_media: false,
            update_templates: true,
        }
    }
}
