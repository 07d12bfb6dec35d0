use std::path::{
    Path,
    PathBuf,
};

use super::{
    models::{
        CardTemplate,
        NoteKind,
        NoteType,
    },
    BmaError,
};
use crate::template::{
    patch_variables_in_file,
    patch_variables_in_text,
    variables,
};

pub const TAG: &str = "DEV_TAG"; // Replace with actual release tag

pub const CARD_NAME: &str = "Better Markdown Anki ({type})";

pub const FIELDS_BASIC: &[&str] = &["Front", "Back", "Extra", "Difficulty"];
pub const FIELDS_CLOZE: &[&str] = &["Text", "Back Extra", "Difficulty"];

pub const TEMPLATE_DIR: &str = "templates";
pub const DIST_DIR: &str = "dist";

/// Desired shape of one note type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteTypeConfig {
    pub kind: NoteKind,
    pub name: String,
    pub fields: Vec<String>,
    pub template: CardTemplate,
}

/// Everything the reconciler and media sync need, built once at startup.
#[derive(Debug, Clone)]
pub struct AddonConfig {
    pub css: String,
    pub basic: NoteTypeConfig,
    pub cloze: NoteTypeConfig,
    pub dist_dir: PathBuf,
}

impl AddonConfig {
    /// Load and patch the templates under `addon_dir/templates`.
    pub fn load(addon_dir: &Path) -> Result<Self, BmaError> {
        Self::load_with_tag(addon_dir, TAG)
    }

    pub fn load_with_tag(addon_dir: &Path, tag: &str) -> Result<Self, BmaError> {
        let template_dir = addon_dir.join(TEMPLATE_DIR);
        let tag_vars = variables([("TAG", tag)]);
        let no_vars = variables([]);

        let script = patch_variables_in_file(&template_dir.join("script.html"), &tag_vars, None)?;
        let css = patch_variables_in_file(&template_dir.join("style.css"), &tag_vars, None)?;

        let load_template = |kind: NoteKind| -> Result<CardTemplate, BmaError> {
            let dir = template_dir.join(kind.label().to_lowercase());
            let front = patch_variables_in_file(&dir.join("front.html"), &no_vars, None)?;
            let back = patch_variables_in_file(&dir.join("back.html"), &no_vars, None)?;
            Ok(CardTemplate {
                name: kind.default_template_name().to_string(),
                front: front + &script,
                back: back + &script,
            })
        };

        let basic = NoteTypeConfig {
            kind: NoteKind::Basic,
            name: card_name(NoteKind::Basic),
            fields: FIELDS_BASIC.iter().map(|f| f.to_string()).collect(),
            template: load_template(NoteKind::Basic)?,
        };
        let cloze = NoteTypeConfig {
            kind: NoteKind::Cloze,
            name: card_name(NoteKind::Cloze),
            fields: FIELDS_CLOZE.iter().map(|f| f.to_string()).collect(),
            template: load_template(NoteKind::Cloze)?,
        };

        Ok(Self { css, basic, cloze, dist_dir: addon_dir.join(DIST_DIR) })
    }

    pub fn note_type(&self, kind: NoteKind) -> &NoteTypeConfig {
        match kind {
            NoteKind::Basic => &self.basic,
            NoteKind::Cloze => &self.cloze,
        }
    }

    pub fn fields_for(&self, kind: NoteKind) -> &[String] {
        &self.note_type(kind).fields
    }

    /// A fresh note type of `kind` named `name`, ready to be added to a store.
    pub fn build_note_type(&self, name: &str, kind: NoteKind) -> NoteType {
        let config = self.note_type(kind);
        NoteType {
            name: name.to_string(),
            kind,
            fields: config.fields.clone(),
            templates: vec![config.template.clone()],
            css: self.css.clone(),
        }
    }
}

pub fn card_name(kind: NoteKind) -> String {
    patch_variables_in_text(CARD_NAME, &variables([("type", kind.label())]))
}
