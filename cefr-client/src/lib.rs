//! CEFR client - submit English texts to a level classifier and present the result
//!
//! This crate validates analysis input, drives a single prediction request
//! through its lifecycle and turns the service's numeric metrics into
//! localized, formatted values.

// Core modules
pub mod config;
pub mod error;
pub mod traits;
pub mod types;

// Transport
pub mod http;

// Main functionality modules
pub mod messages;
pub mod metrics;
pub mod stats;
pub mod text_stats;
pub mod workflow;

// Test doubles, also used by integration tests
pub mod testing;

// Re-export main types for convenience
pub use config::{ClientConfig, ClientConfigBuilder, Locale};
pub use error::{ClientError, GatewayError, Result};
pub use http::{FormPayload, HttpGateway};
pub use messages::{LocalizedText, Message};
pub use metrics::{MetricDescriptor, MetricGroup, MetricRegistry, RenderedMetric};
pub use stats::fetch_stats;
pub use text_stats::TextStats;
pub use traits::Gateway;
pub use types::{AnalysisInput, CefrLevel, LevelStats, PredictionResult, StatsSummary, UploadedFile};
pub use workflow::{AnalyzeError, InputDraft, PredictionWorkflow, ValidationError, WorkflowState};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_module_imports() {
        let config = ClientConfig::default();
        assert!(config.validate().is_ok());

        let workflow = PredictionWorkflow::new(testing::MockGateway::new(), config.locale);
        assert_eq!(workflow.state(), WorkflowState::Idle);
        assert_eq!(MetricRegistry::all().len(), 12);
    }

    #[test]
    fn test_error_types() {
        let error = ClientError::invalid_config("test error");
        assert!(error.to_string().contains("test error"));

        let error: ClientError = GatewayError::transport(500, "boom").into();
        assert!(matches!(error, ClientError::Gateway(_)));
    }
}
