use super::NoteTypeStore;
use crate::core::{
    BmaError,
    NoteType,
    NoteTypeUpdate,
};

/// Note type store kept in memory. Counts writes so callers can tell whether
/// anything was persisted.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    note_types: Vec<NoteType>,
    writes: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_note_types(note_types: Vec<NoteType>) -> Self {
        Self { note_types, writes: 0 }
    }

    pub fn writes(&self) -> usize {
        self.writes
    }

    pub fn note_types(&self) -> &[NoteType] {
        &self.note_types
    }
}

impl NoteTypeStore for MemoryStore {
    fn by_name(&self, name: &str) -> Result<Option<NoteType>, BmaError> {
        Ok(self.note_types.iter().find(|n| n.name == name).cloned())
    }

    fn add(&mut self, note_type: &NoteType) -> Result<(), BmaError> {
        if self.note_types.iter().any(|n| n.name == note_type.name) {
            return Err(BmaError::Custom(format!(
                "Note type '{}' already exists",
                note_type.name
            )));
        }
        self.note_types.push(note_type.clone());
        self.writes += 1;
        Ok(())
    }

    fn save(&mut self, update: &NoteTypeUpdate) -> Result<(), BmaError> {
        let note_type = self
            .note_types
            .iter_mut()
            .find(|n| n.name == update.name)
            .ok_or_else(|| BmaError::NoteTypeNotFound(update.name.clone()))?;

        for field_name in &update.added_fields {
            if !note_type.has_field(field_name) {
                note_type.fields.push(field_name.clone());
            }
        }

        if let Some(template) = &update.template {
            match note_type.templates.first_mut() {
                Some(first) if !update.add_template => {
                    first.front = template.front.clone();
                    first.back = template.back.clone();
                }
                _ => note_type.templates.push(template.clone()),
            }
        }

        if let Some(css) = &update.css {
            note_type.css = css.clone();
        }

        self.writes += 1;
        Ok(())
    }
}
