//! The prediction request lifecycle.
//!
//! [`PredictionWorkflow`] validates input, sends at most one request at a time
//! through a [`Gateway`] and owns the resulting [`WorkflowState`]. Construct
//! one per session and pass it by reference to whatever presents it.
//!
//! Every request is tagged with a sequence token. `reset` invalidates the
//! current token without cancelling the request, so a response that arrives
//! afterwards is recognised as stale and dropped.

pub mod draft;
pub mod state;
pub mod validation;

pub use draft::InputDraft;
pub use state::WorkflowState;
pub use validation::{validate, ValidationError, MAX_CHARS, MIN_CHARS};

use crate::config::Locale;
use crate::error::GatewayError;
use crate::http::FormPayload;
use crate::messages::Message;
use crate::traits::Gateway;
use crate::types::{AnalysisInput, PredictionResult};
use std::sync::{Mutex, MutexGuard, PoisonError};
use thiserror::Error;
use tokio::sync::watch;
use tracing::{debug, error, warn};

/// Classifier endpoint, relative to the configured base URL
pub const PREDICT_PATH: &str = "/api/predict";

/// Why an `analyze` call did not produce a result
#[derive(Debug, Error)]
pub enum AnalyzeError {
    #[error("invalid input: {0}")]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Gateway(#[from] GatewayError),

    #[error("an analysis is already in flight")]
    Busy,

    #[error("response discarded because the workflow was reset while the request was in flight")]
    Superseded,
}

impl AnalyzeError {
    /// Message to show the user, if any.
    ///
    /// A superseded response has nothing to show: the state it belonged to is gone.
    pub fn user_message(&self, locale: Locale) -> Option<String> {
        match self {
            AnalyzeError::Validation(invalid) => Some(invalid.message().render(locale)),
            AnalyzeError::Gateway(failure) => Some(gateway_message(failure, locale)),
            AnalyzeError::Busy => Some(Message::Busy.render(locale)),
            AnalyzeError::Superseded => None,
        }
    }
}

/// Pick the user-facing text for a transport failure
pub fn gateway_message(error: &GatewayError, locale: Locale) -> String {
    match error {
        GatewayError::Network { .. } | GatewayError::InvalidUrl(_) => {
            Message::Unreachable.render(locale)
        }
        GatewayError::Transport { .. } => error
            .detail()
            .unwrap_or_else(|| Message::ServerError.render(locale)),
        GatewayError::Decode { .. } => Message::ServerError.render(locale),
    }
}

#[derive(Debug, Default)]
struct Sequencer {
    last_issued: u64,
    /// Token whose response will be adopted
    current: Option<u64>,
    /// A request is outstanding on the wire, adopted or not
    in_flight: bool,
}

impl Sequencer {
    fn issue(&mut self) -> u64 {
        self.last_issued += 1;
        self.current = Some(self.last_issued);
        self.in_flight = true;
        self.last_issued
    }
}

/// State machine around a single outstanding prediction request
pub struct PredictionWorkflow<G> {
    gateway: G,
    locale: Locale,
    sequencer: Mutex<Sequencer>,
    state: watch::Sender<WorkflowState>,
}

impl<G> PredictionWorkflow<G> {
    pub fn new(gateway: G, locale: Locale) -> Self {
        let (state, _) = watch::channel(WorkflowState::Idle);
        Self {
            gateway,
            locale,
            sequencer: Mutex::new(Sequencer::default()),
            state,
        }
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Snapshot of the current state
    pub fn state(&self) -> WorkflowState {
        self.state.borrow().clone()
    }

    /// Receive every state change, starting from the current state
    pub fn subscribe(&self) -> watch::Receiver<WorkflowState> {
        self.state.subscribe()
    }

    pub fn is_loading(&self) -> bool {
        self.state.borrow().is_loading()
    }

    pub fn result(&self) -> Option<PredictionResult> {
        self.state.borrow().result().cloned()
    }

    pub fn error(&self) -> Option<String> {
        self.state.borrow().error().map(str::to_string)
    }

    /// Whether a request is still outstanding, even one whose response will be discarded
    pub fn has_request_in_flight(&self) -> bool {
        self.sequencer().in_flight
    }

    /// Clear any result or error and return to idle.
    ///
    /// An in-flight request keeps running; its response will be discarded.
    pub fn reset(&self) {
        let mut sequencer = self.sequencer();
        if let Some(token) = sequencer.current.take() {
            debug!(token, "reset while a request is in flight; its response will be discarded");
        }
        self.state.send_replace(WorkflowState::Idle);
    }

    /// Drop a displayed error, e.g. once the user edits the input again
    pub fn clear_error(&self) {
        self.state.send_if_modified(|state| {
            if matches!(state, WorkflowState::Error(_)) {
                *state = WorkflowState::Idle;
                true
            } else {
                false
            }
        });
    }

    fn sequencer(&self) -> MutexGuard<'_, Sequencer> {
        self.sequencer.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<G: Gateway> PredictionWorkflow<G> {
    /// Validate `input`, send it to the classifier and record the outcome.
    ///
    /// Validation failures never reach the network. A call made while another
    /// request is outstanding is rejected with [`AnalyzeError::Busy`] and leaves
    /// the state untouched.
    pub async fn analyze(&self, input: AnalysisInput) -> Result<PredictionResult, AnalyzeError> {
        let token = {
            let mut sequencer = self.sequencer();
            if sequencer.in_flight {
                debug!("analysis rejected: a request is already in flight");
                return Err(AnalyzeError::Busy);
            }

            if let Err(invalid) = validate(&input) {
                debug!(%invalid, "input rejected before sending");
                let message = invalid.message().render(self.locale);
                self.state.send_replace(WorkflowState::Error(message));
                return Err(invalid.into());
            }

            let token = sequencer.issue();
            self.state.send_replace(WorkflowState::Loading);
            token
        };

        let form = build_form(&input);
        let guard = InFlight {
            workflow: self,
            token,
            armed: true,
        };

        debug!(token, "sending prediction request");
        let outcome = self
            .gateway
            .post_form::<PredictionResult>(PREDICT_PATH, form)
            .await;

        guard.settle(outcome)
    }
}

/// Multipart body for the classifier: trimmed text and/or the file
fn build_form(input: &AnalysisInput) -> FormPayload {
    let mut form = FormPayload::new();

    let trimmed = input.trimmed_text();
    if !trimmed.is_empty() {
        form = form.text("text", trimmed);
    }
    if let Some(file) = &input.file {
        form = form.file("file", file);
    }

    form
}

/// Marks a request as outstanding until it settles.
///
/// If the `analyze` future is dropped or unwinds before the response arrives,
/// the drop releases the in-flight slot and leaves `Loading`.
struct InFlight<'a, G> {
    workflow: &'a PredictionWorkflow<G>,
    token: u64,
    armed: bool,
}

impl<G> InFlight<'_, G> {
    fn settle(
        mut self,
        outcome: Result<PredictionResult, GatewayError>,
    ) -> Result<PredictionResult, AnalyzeError> {
        self.armed = false;
        let workflow = self.workflow;
        let mut sequencer = workflow.sequencer();
        sequencer.in_flight = false;

        if sequencer.current != Some(self.token) {
            debug!(token = self.token, "discarding response of a superseded request");
            return Err(AnalyzeError::Superseded);
        }
        sequencer.current = None;

        match outcome {
            Ok(result) => {
                debug!(token = self.token, level = %result.level_label, "prediction received");
                workflow
                    .state
                    .send_replace(WorkflowState::Success(result.clone()));
                Ok(result)
            }
            Err(failure) => {
                if failure.is_network() {
                    error!(error = %failure, "prediction service unreachable");
                } else {
                    warn!(error = %failure, "prediction request failed");
                }
                let message = gateway_message(&failure, workflow.locale);
                workflow.state.send_replace(WorkflowState::Error(message));
                Err(failure.into())
            }
        }
    }
}

impl<G> Drop for InFlight<'_, G> {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }

        let mut sequencer = self.workflow.sequencer();
        sequencer.in_flight = false;
        if sequencer.current == Some(self.token) {
            sequencer.current = None;
            warn!(token = self.token, "prediction request abandoned before it settled");
            self.workflow.state.send_replace(WorkflowState::Idle);
        }
    }
}
