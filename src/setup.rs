use log::{
    error,
    info,
};

use crate::{
    anki::{
        MediaStore,
        NoteTypeStore,
    },
    core::{
        AddonConfig,
        BmaError,
        NoteKind,
        ReconcileOutcome,
        Settings,
    },
    media::add_folder_to_media,
    notetype::ensure_note_type,
};

/// Create or update both note types, Basic first.
pub fn setup_custom_note_types<S: NoteTypeStore>(
    store: &mut S,
    config: &AddonConfig,
    update_templates: bool,
) -> Result<Vec<(String, ReconcileOutcome)>, BmaError> {
    let mut outcomes = Vec::with_capacity(NoteKind::ALL.len());

    for kind in NoteKind::ALL {
        let name = &config.note_type(kind).name;
        let outcome = ensure_note_type(store, config, kind, update_templates)?;
        if outcome == ReconcileOutcome::Created {
            info!("✓ {} note type created successfully", name);
        }
        outcomes.push((name.clone(), outcome));
    }

    Ok(outcomes)
}

/// Runs when the user's profile opens. Never fails: errors are logged so the
/// host keeps starting up.
pub fn on_profile_opened<S: NoteTypeStore, M: MediaStore>(
    store: &mut S,
    media: &mut M,
    config: &AddonConfig,
    settings: &Settings,
) {
    if let Err(e) = setup_custom_note_types(store, config, settings.update_templates) {
        error!("Error creating note types: {}", e);
    }

    if let Err(e) = add_folder_to_media(media, &config.dist_dir, settings.overwrite_media) {
        error!("Error adding media from '{}': {}", config.dist_dir.display(), e);
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;
    use crate::{
        anki::{
            MediaFolder,
            MemoryStore,
        },
        core::config::test_support::test_config,
    };

    #[test]
    fn test_setup_creates_then_updates() {
        let temp = TempDir::new().unwrap();
        let config = test_config(temp.path());
        let mut store = MemoryStore::new();

        let first = setup_custom_note_types(&mut store, &config, false).unwrap();
        assert_eq!(
            first,
            vec![
                ("Better Markdown Anki (Basic)".to_string(), ReconcileOutcome::Created),
                ("Better Markdown Anki (Cloze)".to_string(), ReconcileOutcome::Created),
            ]
        );

        let second = setup_custom_note_types(&mut store, &config, false).unwrap();
        assert!(second.iter().all(|(_, o)| *o == ReconcileOutcome::UpToDate));
        assert_eq!(store.writes(), 2);
    }

    #[test]
    fn test_profile_opened_syncs_everything() {
        let temp = TempDir::new().unwrap();
        let config = test_config(temp.path());
        fs::create_dir_all(&config.dist_dir).unwrap();
        fs::write(config.dist_dir.join("_bma-v1.0.js"), "js").unwrap();

        let mut store = MemoryStore::new();
        let mut media = MediaFolder::open(&temp.path().join("collection.media")).unwrap();

        on_profile_opened(&mut store, &mut media, &config, &Settings::default());

        assert_eq!(store.note_types().len(), 2);
        assert!(media.has_file("_bma-v1.0.js").unwrap());
    }

    #[test]
    fn test_profile_opened_survives_missing_dist() {
        let temp = TempDir::new().unwrap();
        let config = test_config(temp.path());
        let mut store = MemoryStore::new();
        let mut media = MediaFolder::open(&temp.path().join("collection.media")).unwrap();

        // dist/ was never built; note types are still set up and nothing panics
        on_profile_opened(&mut store, &mut media, &config, &Settings::default());

        assert_eq!(store.note_types().len(), 2);
        assert_eq!(fs::read_dir(temp.path().join("collection.media")).unwrap().count(), 0);
    }

    #[test]
    fn test_profile_opened_survives_store_failure() {
        let temp = TempDir::new().unwrap();
        let config = test_config(temp.path());
        fs::create_dir_all(&config.dist_dir).unwrap();
        fs::write(config.dist_dir.join("style.css"), "css").unwrap();

        let mut store = FailingStore;
        let mut media = MediaFolder::open(&temp.path().join("collection.media")).unwrap();

        on_profile_opened(&mut store, &mut media, &config, &Settings::default());

        // Media sync still runs after the note type step failed
        assert!(media.has_file("style.css").unwrap());
    }

    struct FailingStore;

    impl NoteTypeStore for FailingStore {
        fn by_name(&self, _name: &str) -> Result<Option<crate::core::NoteType>, BmaError> {
            Err(BmaError::Custom("collection is closed".to_string()))
        }

        fn add(&mut self, _note_type: &crate::core::NoteType) -> Result<(), BmaError> {
            unreachable!()
        }

        fn save(&mut self, _update: &crate::core::NoteTypeUpdate) -> Result<(), BmaError> {
            unreachable!()
        }
    }
}
