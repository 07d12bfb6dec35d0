use std::{
    cell::OnceCell,
    path::{
        Path,
        PathBuf,
    },
};

use log::debug;
use reqwest::blocking::Client;
use serde::Deserialize;
use serde_json::{
    json,
    Value,
};

use super::{
    types::{
        ApiResponse,
        CardTemplateParams,
        CreateModelParams,
        ModelInfo,
    },
    MediaStore,
    NoteTypeStore,
};
use crate::core::{
    BmaError,
    CardTemplate,
    NoteType,
    NoteTypeUpdate,
};

const API_VERSION: u32 = 6;

/// Blocking client for the AnkiConnect add-on.
#[derive(Debug, Clone)]
pub struct AnkiConnect {
    client: Client,
    url: String,
    media_dir: OnceCell<PathBuf>,
}

pub(crate) fn request_body(action: &str, params: Option<Value>) -> Value {
    let mut body = serde_json::Map::new();
    body.insert("action".to_string(), Value::String(action.to_string()));
    body.insert("version".to_string(), Value::Number(API_VERSION.into()));

    if let Some(params) = params {
        body.insert("params".to_string(), params);
    }

    Value::Object(body)
}

impl AnkiConnect {
    pub fn new(url: &str) -> Self {
        Self { client: Client::new(), url: url.to_string(), media_dir: OnceCell::new() }
    }

    fn make_request<T: for<'de> Deserialize<'de>>(
        &self,
        action: &str,
        params: Option<Value>,
    ) -> Result<Option<T>, BmaError> {
        debug!("AnkiConnect request: {}", action);
        let response: ApiResponse<T> =
            self.client.post(&self.url).json(&request_body(action, params)).send()?.json()?;

        response.into_result(action)
    }

    fn invoke<T: for<'de> Deserialize<'de>>(
        &self,
        action: &str,
        params: Option<Value>,
    ) -> Result<T, BmaError> {
        self.make_request(action, params)?.ok_or_else(|| BmaError::AnkiConnect {
            action: action.to_string(),
            message: "empty result".to_string(),
        })
    }

    fn invoke_unit(&self, action: &str, params: Option<Value>) -> Result<(), BmaError> {
        self.make_request::<Value>(action, params).map(|_| ())
    }

    //Will just use to check if ankiconnect is online
    pub fn version(&self) -> Result<u32, BmaError> {
        self.invoke("version", None)
    }

    pub fn model_names(&self) -> Result<Vec<String>, BmaError> {
        self.invoke("modelNames", None)
    }

    pub fn find_models_by_name(&self, names: &[&str]) -> Result<Vec<ModelInfo>, BmaError> {
        self.invoke("findModelsByName", Some(json!({ "modelNames": names })))
    }

    pub fn create_model(&self, note_type: &NoteType) -> Result<(), BmaError> {
        let params = serde_json::to_value(CreateModelParams::from(note_type))?;
        self.invoke_unit("createModel", Some(params))
    }

    /// Without an index AnkiConnect appends the field.
    pub fn add_model_field(&self, model_name: &str, field_name: &str) -> Result<(), BmaError> {
        self.invoke_unit(
            "modelFieldAdd",
            Some(json!({ "modelName": model_name, "fieldName": field_name })),
        )
    }

    pub fn update_model_templates(
        &self,
        model_name: &str,
        template: &CardTemplate,
    ) -> Result<(), BmaError> {
        let mut templates = serde_json::Map::new();
        templates.insert(
            template.name.clone(),
            json!({ "Front": template.front, "Back": template.back }),
        );
        let params = json!({ "model": { "name": model_name, "templates": templates } });
        self.invoke_unit("updateModelTemplates", Some(params))
    }

    pub fn add_model_template(
        &self,
        model_name: &str,
        template: &CardTemplate,
    ) -> Result<(), BmaError> {
        let params = json!({
            "modelName": model_name,
            "template": CardTemplateParams::from(template),
        });
        self.invoke_unit("modelTemplateAdd", Some(params))
    }

    pub fn update_model_styling(&self, model_name: &str, css: &str) -> Result<(), BmaError> {
        self.invoke_unit(
            "updateModelStyling",
            Some(json!({ "model": { "name": model_name, "css": css } })),
        )
    }

    pub fn media_dir_path(&self) -> Result<PathBuf, BmaError> {
        if let Some(dir) = self.media_dir.get() {
            return Ok(dir.clone());
        }
        let dir = PathBuf::from(self.invoke::<String>("getMediaDirPath", None)?);
        Ok(self.media_dir.get_or_init(|| dir).clone())
    }

    pub fn store_media_file(&self, path: &Path, filename: &str) -> Result<String, BmaError> {
        let params = json!({
            "filename": filename,
            "path": path.to_string_lossy(),
            "deleteExisting": false,
        });
        self.invoke("storeMediaFile", Some(params))
    }

    pub fn delete_media_file(&self, filename: &str) -> Result<(), BmaError> {
        self.invoke_unit("deleteMediaFile", Some(json!({ "filename": filename })))
    }
}

impl NoteTypeStore for AnkiConnect {
    fn by_name(&self, name: &str) -> Result<Option<NoteType>, BmaError> {
        // findModelsByName errors on unknown names, so check the list first
        if !self.model_names()?.iter().any(|n| n == name) {
            return Ok(None);
        }

        Ok(self
            .find_models_by_name(&[name])?
            .into_iter()
            .find(|m| m.name == name)
            .map(NoteType::from))
    }

    fn add(&mut self, note_type: &NoteType) -> Result<(), BmaError> {
        self.create_model(note_type)
    }

    fn save(&mut self, update: &NoteTypeUpdate) -> Result<(), BmaError> {
        for field_name in &update.added_fields {
            self.add_model_field(&update.name, field_name)?;
        }
        if let Some(template) = &update.template {
            if update.add_template {
                self.add_model_template(&update.name, template)?;
            } else {
                self.update_model_templates(&update.name, template)?;
            }
        }
        if let Some(css) = &update.css {
            self.update_model_styling(&update.name, css)?;
        }
        Ok(())
    }
}

impl MediaStore for AnkiConnect {
    fn dir(&self) -> Result<PathBuf, BmaError> {
        self.media_dir_path()
    }

    fn add_file(&mut self, path: &Path) -> Result<String, BmaError> {
        let filename = super::media_file_name(path)?;
        self.store_media_file(path, &filename)
    }

    fn remove_file(&mut self, filename: &str) -> Result<(), BmaError> {
        self.delete_media_file(filename)
    }
}
