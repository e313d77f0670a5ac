use crate::types::UploadedFile;
use reqwest::multipart::{Form, Part};

/// One field of a multipart form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormPart {
    Text {
        name: String,
        value: String,
    },
    File {
        name: String,
        file_name: String,
        content_type: String,
        bytes: Vec<u8>,
    },
}

impl FormPart {
    pub fn name(&self) -> &str {
        match self {
            FormPart::Text { name, .. } | FormPart::File { name, .. } => name,
        }
    }
}

/// Transport-independent multipart body.
///
/// Kept separate from `reqwest::multipart::Form` so requests can be inspected
/// in tests and reused across gateways.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormPayload {
    parts: Vec<FormPart>,
}

impl FormPayload {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a text field
    #[must_use]
    pub fn text<N: Into<String>, V: Into<String>>(mut self, name: N, value: V) -> Self {
        self.parts.push(FormPart::Text {
            name: name.into(),
            value: value.into(),
        });
        self
    }

    /// Add a plain-text file field
    #[must_use]
    pub fn file<N: Into<String>>(mut self, name: N, file: &UploadedFile) -> Self {
        self.parts.push(FormPart::File {
            name: name.into(),
            file_name: file.file_name.clone(),
            content_type: UploadedFile::CONTENT_TYPE.to_string(),
            bytes: file.bytes.clone(),
        });
        self
    }

    pub fn parts(&self) -> &[FormPart] {
        &self.parts
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// Value of the first text field called `name`
    pub fn text_value(&self, name: &str) -> Option<&str> {
        self.parts.iter().find_map(|part| match part {
            FormPart::Text { name: n, value } if n == name => Some(value.as_str()),
            _ => None,
        })
    }

    pub fn has_field(&self, name: &str) -> bool {
        self.parts.iter().any(|part| part.name() == name)
    }

    /// Convert into a reqwest multipart form
    pub fn into_multipart(self) -> Result<Form, reqwest::Error> {
        let mut form = Form::new();
        for part in self.parts {
            form = match part {
                FormPart::Text { name, value } => form.text(name, value),
                FormPart::File {
                    name,
                    file_name,
                    content_type,
                    bytes,
                } => {
                    let part = Part::bytes(bytes).file_name(file_name).mime_str(&content_type)?;
                    form.part(name, part)
                }
            };
        }
        Ok(form)
    }
}
