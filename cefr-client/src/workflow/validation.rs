use crate::messages::Message;
use crate::types::AnalysisInput;
use thiserror::Error;

/// Shortest trimmed text accepted for analysis, in characters
pub const MIN_CHARS: usize = 150;

/// Longest trimmed text accepted for analysis, in characters
pub const MAX_CHARS: usize = 8000;

/// Input rejected before any request is made
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("no text or file to analyse")]
    EmptyInput,

    #[error("text has {length} characters, at least {min} required")]
    TooShort { length: usize, min: usize },

    #[error("text has {length} characters, at most {max} allowed")]
    TooLong { length: usize, max: usize },
}

impl ValidationError {
    pub fn message(&self) -> Message {
        match *self {
            ValidationError::EmptyInput => Message::EmptyInput,
            ValidationError::TooShort { min, .. } => Message::TooShort { min_chars: min },
            ValidationError::TooLong { max, .. } => Message::TooLong { max_chars: max },
        }
    }
}

/// Check an input against the length limits.
///
/// Lengths are measured on the trimmed text. Uploaded files skip the length
/// checks because their text is only decoded by the server.
pub fn validate(input: &AnalysisInput) -> Result<(), ValidationError> {
    let trimmed = input.trimmed_text();

    if trimmed.is_empty() {
        return match input.file {
            Some(_) => Ok(()),
            None => Err(ValidationError::EmptyInput),
        };
    }

    let length = trimmed.chars().count();
    if length < MIN_CHARS {
        return Err(ValidationError::TooShort {
            length,
            min: MIN_CHARS,
        });
    }
    if length > MAX_CHARS {
        return Err(ValidationError::TooLong {
            length,
            max: MAX_CHARS,
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::UploadedFile;

    #[test]
    fn test_empty_and_whitespace_input() {
        assert_eq!(validate(&AnalysisInput::text("")), Err(ValidationError::EmptyInput));
        assert_eq!(
            validate(&AnalysisInput::text(" \n\t ")),
            Err(ValidationError::EmptyInput)
        );
    }

    #[test]
    fn test_short_boundary() {
        assert_eq!(
            validate(&AnalysisInput::text("x".repeat(149))),
            Err(ValidationError::TooShort { length: 149, min: 150 })
        );
        assert_eq!(validate(&AnalysisInput::text("x".repeat(150))), Ok(()));
    }

    #[test]
    fn test_long_boundary() {
        assert_eq!(validate(&AnalysisInput::text("x".repeat(8000))), Ok(()));
        assert_eq!(
            validate(&AnalysisInput::text("x".repeat(8001))),
            Err(ValidationError::TooLong { length: 8001, max: 8000 })
        );
    }

    #[test]
    fn test_length_is_measured_after_trimming() {
        let padded = format!("   {}   ", "x".repeat(149));
        assert!(matches!(
            validate(&AnalysisInput::text(padded)),
            Err(ValidationError::TooShort { length: 149, .. })
        ));
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        // 150 two-byte characters
        assert_eq!(validate(&AnalysisInput::text("ї".repeat(150))), Ok(()));
    }

    #[test]
    fn test_file_skips_length_checks() {
        let file = UploadedFile::new("short.txt", b"tiny".to_vec());
        assert_eq!(validate(&AnalysisInput::file(file.clone())), Ok(()));

        // typed text is still checked when a file is attached as well
        let both = AnalysisInput {
            text: "too short".to_string(),
            file: Some(file),
        };
        assert!(matches!(validate(&both), Err(ValidationError::TooShort { .. })));
    }

    #[test]
    fn test_messages() {
        assert_eq!(ValidationError::EmptyInput.message(), Message::EmptyInput);
        assert_eq!(
            ValidationError::TooLong { length: 9000, max: 8000 }.message(),
            Message::TooLong { max_chars: 8000 }
        );
    }
}
