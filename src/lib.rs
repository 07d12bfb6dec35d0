pub mod anki;
pub mod core;
pub mod media;
pub mod notetype;
pub mod persistence;
pub mod setup;
pub mod template;

pub use crate::core::{
    AddonConfig,
    BmaError,
    Settings,
};
pub use setup::on_profile_opened;
