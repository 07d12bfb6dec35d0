use log::info;

use crate::{
    anki::NoteTypeStore,
    core::{
        AddonConfig,
        BmaError,
        CardTemplate,
        NoteKind,
        NoteTypeUpdate,
        ReconcileOutcome,
    },
};

/// Create note type `name` of `kind` from `config`.
///
/// Returns `Ok(false)` without touching the store when the name is already taken.
pub fn create_note_type<S: NoteTypeStore>(
    store: &mut S,
    config: &AddonConfig,
    name: &str,
    kind: NoteKind,
) -> Result<bool, BmaError> {
    if store.by_name(name)?.is_some() {
        info!("Note type '{}' already exists", name);
        return Ok(false);
    }

    let note_type = config.build_note_type(name, kind);
    store.add(&note_type)?;
    info!("Created {} note type '{}' with fields {:?}", kind, name, note_type.fields);
    Ok(true)
}

/// Bring an existing note type in line with `config`.
///
/// Missing fields are appended in configured order, fields the user added are
/// kept. With `update_templates` the first template and the stylesheet are
/// overwritten whether or not they differ. Nothing is written when there is
/// nothing to change.
pub fn update_existing_note_type<S: NoteTypeStore>(
    store: &mut S,
    config: &AddonConfig,
    name: &str,
    update_templates: bool,
) -> Result<ReconcileOutcome, BmaError> {
    let existing =
        store.by_name(name)?.ok_or_else(|| BmaError::NoteTypeNotFound(name.to_string()))?;

    // The stored type decides which field list applies
    let required_fields = config.fields_for(existing.kind);

    let mut update = NoteTypeUpdate::new(name);
    for field_name in required_fields {
        if !existing.has_field(field_name) && !update.added_fields.contains(field_name) {
            info!("Adding field '{}' to note type '{}'", field_name, name);
            update.added_fields.push(field_name.clone());
        }
    }

    if update_templates {
        let configured = &config.note_type(existing.kind).template;
        // Keep the stored template's name, the host keys templates by it
        let template_name = existing
            .templates
            .first()
            .map(|t| t.name.clone())
            .unwrap_or_else(|| configured.name.clone());

        update.template = Some(CardTemplate {
            name: template_name,
            front: configured.front.clone(),
            back: configured.back.clone(),
        });
        update.add_template = existing.templates.is_empty();
        update.css = Some(config.css.clone());
    }

    if update.is_empty() {
        info!("Note type '{}' already has all required fields and templates", name);
        return Ok(ReconcileOutcome::UpToDate);
    }

    store.save(&update)?;

    let templates_updated = update.template.is_some();
    if templates_updated {
        info!("Updated templates for note type '{}'", name);
    }
    info!("Updated note type '{}' - new cards will be generated automatically", name);

    Ok(ReconcileOutcome::Updated { added_fields: update.added_fields, templates_updated })
}

/// Create the configured note type for `kind`, or update it if it exists.
pub fn ensure_note_type<S: NoteTypeStore>(
    store: &mut S,
    config: &AddonConfig,
    kind: NoteKind,
    update_templates: bool,
) -> Result<ReconcileOutcome, BmaError> {
    let name = &config.note_type(kind).name;
    if create_note_type(store, config, name, kind)? {
        return Ok(ReconcileOutcome::Created);
    }
    update_existing_note_type(store, config, name, update_templates)
}
