use better_markdown_anki::{
    anki::{
        AnkiConnect,
        MediaFolder,
    },
    core::settings::SETTINGS_FILE,
    on_profile_opened,
    persistence::{
        data_file_exists,
        load_json_or_default,
        save_json,
    },
    AddonConfig,
    Settings,
};
use log::{
    error,
    info,
    warn,
};

fn setup_logging() {
    // RUST_LOG wins over the default level
    env_logger::Builder::new().filter_level(log::LevelFilter::Info).parse_default_env().init();
}

fn main() {
    setup_logging();

    let settings = load_json_or_default::<Settings>(SETTINGS_FILE);
    if !data_file_exists(SETTINGS_FILE) {
        // Leave an editable copy of the defaults behind
        if let Err(e) = save_json(&settings, SETTINGS_FILE) {
            warn!("Could not write default settings: {}", e);
        }
    }

    let config = match AddonConfig::load(&settings.addon_dir) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load templates from '{}': {}", settings.addon_dir.display(), e);
            return;
        }
    };

    let anki = AnkiConnect::new(&settings.anki_connect_url);
    match anki.version() {
        Ok(version) => info!("AnkiConnect is online. Version: {}", version),
        Err(e) => {
            error!("AnkiConnect is not reachable at {}: {}", settings.anki_connect_url, e);
            return;
        }
    }

    let mut store = anki.clone();
    match &settings.media_dir {
        Some(dir) => match MediaFolder::open(dir) {
            Ok(mut media) => on_profile_opened(&mut store, &mut media, &config, &settings),
            Err(e) => error!("Cannot open media folder '{}': {}", dir.display(), e),
        },
        None => {
            let mut media = anki;
            on_profile_opened(&mut store, &mut media, &config, &settings);
        }
    }
}
