use crate::text_stats::TextStats;
use crate::types::{AnalysisInput, UploadedFile};

/// The input being edited before submission.
///
/// Typing replaces any attached file and attaching a file replaces the text,
/// so a submitted input never carries both.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputDraft {
    text: String,
    file: Option<UploadedFile>,
}

impl InputDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the typed text; drops any attached file
    pub fn set_text<S: Into<String>>(&mut self, text: S) {
        self.text = text.into();
        self.file = None;
    }

    /// Attach a file; drops any typed text
    pub fn attach_file(&mut self, file: UploadedFile) {
        self.file = Some(file);
        self.text.clear();
    }

    pub fn detach_file(&mut self) -> Option<UploadedFile> {
        self.file.take()
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.file = None;
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn file(&self) -> Option<&UploadedFile> {
        self.file.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty() && self.file.is_none()
    }

    /// Live counts for the typed text
    pub fn stats(&self) -> TextStats {
        TextStats::compute(&self.text)
    }

    pub fn to_input(&self) -> AnalysisInput {
        AnalysisInput {
            text: self.text.clone(),
            file: self.file.clone(),
        }
    }
}
