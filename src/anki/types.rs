use serde::{
    Deserialize,
    Serialize,
};

use crate::core::{
    BmaError,
    CardTemplate,
    NoteKind,
    NoteType,
};

#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub result: Option<T>,
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    /// Actions like `modelFieldAdd` legitimately return a `null` result, so only
    /// the `error` slot decides failure.
    pub fn into_result(self, action: &str) -> Result<Option<T>, BmaError> {
        match self.error {
            Some(message) => Err(BmaError::AnkiConnect { action: action.to_string(), message }),
            None => Ok(self.result),
        }
    }
}

/// Model JSON as returned by `findModelsByName`. Unused keys are ignored.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ModelInfo {
    pub name: String,
    #[serde(rename = "type", default)]
    pub type_id: u8,
    #[serde(default)]
    pub flds: Vec<FieldInfo>,
    #[serde(default)]
    pub tmpls: Vec<TemplateInfo>,
    #[serde(default)]
    pub css: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct FieldInfo {
    pub name: String,
    #[serde(default)]
    pub ord: u32,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct TemplateInfo {
    pub name: String,
    #[serde(default)]
    pub qfmt: String,
    #[serde(default)]
    pub afmt: String,
    #[serde(default)]
    pub ord: u32,
}

impl From<ModelInfo> for NoteType {
    fn from(model: ModelInfo) -> Self {
        let mut flds = model.flds;
        flds.sort_by_key(|f| f.ord);
        let mut tmpls = model.tmpls;
        tmpls.sort_by_key(|t| t.ord);

        NoteType {
            name: model.name,
            kind: NoteKind::from_type_id(model.type_id),
            fields: flds.into_iter().map(|f| f.name).collect(),
            templates: tmpls
                .into_iter()
                .map(|t| CardTemplate { name: t.name, front: t.qfmt, back: t.afmt })
                .collect(),
            css: model.css,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateModelParams<'a> {
    pub model_name: &'a str,
    pub in_order_fields: &'a [String],
    pub css: &'a str,
    pub is_cloze: bool,
    pub card_templates: Vec<CardTemplateParams<'a>>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CardTemplateParams<'a> {
    pub name: &'a str,
    pub front: &'a str,
    pub back: &'a str,
}

impl<'a> From<&'a CardTemplate> for CardTemplateParams<'a> {
    fn from(template: &'a CardTemplate) -> Self {
        Self { name: &template.name, front: &template.front, back: &template.back }
    }
}

impl<'a> From<&'a NoteType> for CreateModelParams<'a> {
    fn from(note_type: &'a NoteType) -> Self {
        Self {
            model_name: &note_type.name,
            in_order_fields: &note_type.fields,
            css: &note_type.css,
            is_cloze: note_type.kind.is_cloze(),
            card_templates: note_type.templates.iter().map(CardTemplateParams::from).collect(),
        }
    }
}
