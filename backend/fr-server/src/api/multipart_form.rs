use crate::ApiResult;

use std::collections::HashMap;

use axum::extract::Multipart;
use bytes::Bytes;

/// A file part of a multipart body
#[derive(Debug)]
pub struct UploadedFile {
    pub filename: String,
    pub bytes: Bytes,
}

/// A multipart body read fully into memory, split into text fields and
/// file parts. Later parts with the same name replace earlier ones.
#[derive(Debug, Default)]
pub struct MultipartForm {
    fields: HashMap<String, String>,
    files: HashMap<String, UploadedFile>,
}

impl MultipartForm {
    pub async fn read(mut multipart: Multipart) -> ApiResult<Self> {
        let mut form = Self::default();

        while let Some(field) = multipart.next_field().await? {
            let Some(name) = field.name().map(str::to_string) else {
                continue;
            };

            match field.file_name().map(str::to_string) {
                Some(filename) => {
                    let bytes = field.bytes().await?;
                    form.files.insert(name, UploadedFile { filename, bytes });
                }
                None => {
                    let text = field.text().await?;
                    form.fields.insert(name, text);
                }
            }
        }

        Ok(form)
    }

    /// Trimmed text field, `None` when absent or blank.
    pub fn text(&self, name: &str) -> Option<&str> {
        self.fields
            .get(name)
            .map(|value| value.trim())
            .filter(|value| !value.is_empty())
    }

    pub fn take_file(&mut self, name: &str) -> Option<UploadedFile> {
        self.files.remove(name)
    }
}
