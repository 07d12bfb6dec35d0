pub mod config;
pub mod errors;
pub mod models;
pub mod settings;

pub use config::{
    AddonConfig,
    NoteTypeConfig,
};
pub use errors::BmaError;
pub use models::{
    CardTemplate,
    NoteKind,
    NoteType,
    NoteTypeUpdate,
    ReconcileOutcome,
};
pub use settings::Settings;
