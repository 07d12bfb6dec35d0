use std::fmt;

/// The two note type shapes Anki knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NoteKind {
    /// Separate front/back fields (Anki type 0)
    Basic,
    /// Fill-in-the-blank over a single text field (Anki type 1)
    Cloze,
}

impl NoteKind {
    pub const ALL: [NoteKind; 2] = [NoteKind::Basic, NoteKind::Cloze];

    /// Anki stores cloze as 1 and treats everything else as standard.
    pub fn from_type_id(type_id: u8) -> Self {
        match type_id {
            1 => NoteKind::Cloze,
            _ => NoteKind::Basic,
        }
    }

    pub fn is_cloze(&self) -> bool {
        matches!(self, NoteKind::Cloze)
    }

    /// Label used in the note type display name.
    pub fn label(&self) -> &'static str {
        match self {
            NoteKind::Basic => "Basic",
            NoteKind::Cloze => "Cloze",
        }
    }

    pub fn default_template_name(&self) -> &'static str {
        match self {
            NoteKind::Basic => "Card 1",
            NoteKind::Cloze => "Cloze",
        }
    }
}

impl fmt::Display for NoteKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardTemplate {
    pub name: String,
    pub front: String, // qfmt
    pub back: String,  // afmt
}

/// A note type as the add-on sees it, independent of how the host stores it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteType {
    pub name: String,
    pub kind: NoteKind,
    pub fields: Vec<String>,
    pub templates: Vec<CardTemplate>,
    pub css: String,
}

impl NoteType {
    pub fn has_field(&self, field_name: &str) -> bool {
        self.fields.iter().any(|f| f == field_name)
    }
}

/// Changes to apply to an existing note type. Fields are only ever appended.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NoteTypeUpdate {
    pub name: String,
    pub added_fields: Vec<String>,
    pub template: Option<CardTemplate>,
    /// The note type has no template yet, so `template` is added rather than
    /// replacing the first one
    pub add_template: bool,
    pub css: Option<String>,
}

impl NoteTypeUpdate {
    pub fn new(name: &str) -> Self {
        Self { name: name.to_string(), ..Default::default() }
    }

    pub fn is_empty(&self) -> bool {
        self.added_fields.is_empty() && self.template.is_none() && self.css.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReconcileOutcome {
    Created,
    Updated { added_fields: Vec<String>, templates_updated: bool },
    UpToDate,
}
