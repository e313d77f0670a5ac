use crate::types::PredictionResult;

/// Observable state of the prediction workflow.
///
/// A single discriminated value: a result and an error can never be present at
/// the same time, and neither is present while a request is loading.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum WorkflowState {
    #[default]
    Idle,
    Loading,
    Success(PredictionResult),
    Error(String),
}

impl WorkflowState {
    pub fn is_loading(&self) -> bool {
        matches!(self, WorkflowState::Loading)
    }

    pub fn result(&self) -> Option<&PredictionResult> {
        match self {
            WorkflowState::Success(result) => Some(result),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            WorkflowState::Error(message) => Some(message),
            _ => None,
        }
    }

    /// True once an analysis has produced a result that is on display
    pub fn is_analyzed(&self) -> bool {
        self.result().is_some()
    }

    pub fn name(&self) -> &'static str {
        match self {
            WorkflowState::Idle => "idle",
            WorkflowState::Loading => "loading",
            WorkflowState::Success(_) => "success",
            WorkflowState::Error(_) => "error",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        assert_eq!(WorkflowState::default(), WorkflowState::Idle);
        assert!(WorkflowState::Loading.is_loading());
        assert!(WorkflowState::Loading.result().is_none());

        let success = WorkflowState::Success(PredictionResult::new(2, "A2"));
        assert!(success.is_analyzed());
        assert!(success.error().is_none());
        assert_eq!(success.name(), "success");

        let error = WorkflowState::Error("boom".to_string());
        assert_eq!(error.error(), Some("boom"));
        assert!(error.result().is_none());
        assert!(!error.is_loading());
    }
}
