use crate::error::{ClientError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

/// CEFR proficiency level, ordered from A1 (lowest) to C2 (highest)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CefrLevel {
    A1,
    A2,
    B1,
    B2,
    C1,
    C2,
}

impl CefrLevel {
    pub const ALL: [CefrLevel; 6] = [
        CefrLevel::A1,
        CefrLevel::A2,
        CefrLevel::B1,
        CefrLevel::B2,
        CefrLevel::C1,
        CefrLevel::C2,
    ];

    /// Resolve the classifier's ordinal level id (1..=6)
    pub fn from_id(id: u8) -> Option<Self> {
        id.checked_sub(1)
            .and_then(|index| Self::ALL.get(usize::from(index)))
            .copied()
    }

    pub fn id(self) -> u8 {
        self as u8 + 1
    }

    pub fn label(self) -> &'static str {
        match self {
            CefrLevel::A1 => "A1",
            CefrLevel::A2 => "A2",
            CefrLevel::B1 => "B1",
            CefrLevel::B2 => "B2",
            CefrLevel::C1 => "C1",
            CefrLevel::C2 => "C2",
        }
    }

    /// Short proficiency description shown next to the level
    pub fn description(self) -> &'static str {
        match self {
            CefrLevel::A1 => "Beginner",
            CefrLevel::A2 => "Elementary",
            CefrLevel::B1 => "Intermediate",
            CefrLevel::B2 => "Upper Intermediate",
            CefrLevel::C1 => "Advanced",
            CefrLevel::C2 => "Native",
        }
    }
}

impl fmt::Display for CefrLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Classification returned by `POST /api/predict`.
///
/// Adopted verbatim from the response body; `probabilities` and `metrics` are
/// absent when the service does not provide them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    pub level_id: u8,
    pub level_label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub probabilities: Option<BTreeMap<String, f64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metrics: Option<BTreeMap<String, f64>>,
}

impl PredictionResult {
    pub fn new<S: Into<String>>(level_id: u8, level_label: S) -> Self {
        Self {
            level_id,
            level_label: level_label.into(),
            probabilities: None,
            metrics: None,
        }
    }

    /// The typed level, if `level_id` is within 1..=6
    pub fn level(&self) -> Option<CefrLevel> {
        CefrLevel::from_id(self.level_id)
    }

    pub fn metric(&self, key: &str) -> Option<f64> {
        self.metrics.as_ref().and_then(|metrics| metrics.get(key).copied())
    }

    /// Class probabilities ordered by descending probability
    pub fn ranked_probabilities(&self) -> Vec<(&str, f64)> {
        let mut ranked: Vec<(&str, f64)> = self
            .probabilities
            .iter()
            .flatten()
            .map(|(label, p)| (label.as_str(), *p))
            .collect();
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        ranked
    }
}

/// Per-level slice of the usage statistics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelStats {
    pub level_id: u8,
    pub level_label: String,
    pub count: u64,
    pub share: f64,
}

impl LevelStats {
    /// Share of all analyses rendered as a percentage with one decimal
    pub fn share_percent(&self) -> String {
        format!("{}%", crate::metrics::format_fixed(self.share * 100.0, 1))
    }
}

/// Aggregate usage statistics returned by `GET /api/stats`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatsSummary {
    pub total_count: u64,
    pub avg_text_length: f64,
    #[serde(default)]
    pub levels: Vec<LevelStats>,
}

impl StatsSummary {
    /// Levels ordered by ascending level id
    pub fn levels_sorted(&self) -> Vec<&LevelStats> {
        let mut levels: Vec<&LevelStats> = self.levels.iter().collect();
        levels.sort_by_key(|level| level.level_id);
        levels
    }

    /// Average analysed text length with two decimals
    pub fn avg_text_length_display(&self) -> String {
        crate::metrics::format_fixed(self.avg_text_length, 2)
    }
}

/// A text file selected for upload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedFile {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl UploadedFile {
    /// Only plain-text uploads are accepted by the classifier
    pub const ACCEPTED_EXTENSION: &'static str = "txt";
    pub const CONTENT_TYPE: &'static str = "text/plain";

    pub fn new<S: Into<String>>(file_name: S, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes,
        }
    }

    /// Read a `.txt` file from disk
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let is_txt = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case(Self::ACCEPTED_EXTENSION));
        if !is_txt {
            return Err(ClientError::unsupported_upload(
                path,
                "only .txt files can be analysed",
            ));
        }

        let bytes = std::fs::read(path)?;
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "upload.txt".to_string());

        Ok(Self { file_name, bytes })
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// One submission to the classifier: typed text, an uploaded file, or both.
///
/// Exclusivity of text and file is maintained by [`crate::workflow::InputDraft`];
/// this type carries whatever the caller submits.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnalysisInput {
    pub text: String,
    pub file: Option<UploadedFile>,
}

impl AnalysisInput {
    pub fn text<S: Into<String>>(text: S) -> Self {
        Self {
            text: text.into(),
            file: None,
        }
    }

    pub fn file(file: UploadedFile) -> Self {
        Self {
            text: String::new(),
            file: Some(file),
        }
    }

    /// Text with surrounding whitespace removed; this is what gets validated and sent
    pub fn trimmed_text(&self) -> &str {
        self.text.trim()
    }
}
