use crate::error::GatewayError;
use crate::http::FormPayload;
use crate::traits::Gateway;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::sync::oneshot;

/// A request seen by [`MockGateway`]
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    pub method: &'static str,
    pub path: String,
    pub form: Option<FormPayload>,
    pub json: Option<Value>,
}

enum MockReply {
    Ready(Result<Value, GatewayError>),
    Held {
        reply: Result<Value, GatewayError>,
        release: oneshot::Receiver<()>,
    },
}

impl MockReply {
    async fn resolve<T: DeserializeOwned>(self, path: &str) -> Result<T, GatewayError> {
        let reply = match self {
            MockReply::Ready(reply) => reply,
            MockReply::Held { reply, release } => match release.await {
                Ok(()) => reply,
                Err(_) => Err(GatewayError::network(path, "mock reply abandoned")),
            },
        };

        serde_json::from_value(reply?).map_err(|e| GatewayError::decode(path, e.to_string()))
    }
}

#[derive(Default)]
struct MockState {
    replies: VecDeque<MockReply>,
    calls: Vec<RecordedCall>,
}

/// Lets a held reply from [`MockGateway::with_held_json`] complete
pub struct ReleaseHandle {
    sender: oneshot::Sender<()>,
}

impl ReleaseHandle {
    pub fn release(self) {
        // the request may already have been dropped
        let _ = self.sender.send(());
    }
}

/// Gateway double with a queue of scripted replies.
///
/// Replies are consumed in order, one per call. Clones share the queue and
/// the call log. A call with nothing queued fails with a 404 transport error.
#[derive(Clone, Default)]
pub struct MockGateway {
    state: Arc<Mutex<MockState>>,
}

impl MockGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful reply with this JSON body
    pub fn with_json(self, body: Value) -> Self {
        self.push(MockReply::Ready(Ok(body)))
    }

    /// Queue a non-2xx reply
    pub fn with_transport_error<S: Into<String>>(self, status: u16, body: S) -> Self {
        self.push(MockReply::Ready(Err(GatewayError::transport(status, body))))
    }

    /// Queue a connection failure
    pub fn with_network_error<S: Into<String>>(self, message: S) -> Self {
        self.push(MockReply::Ready(Err(GatewayError::network(
            "http://mock.invalid",
            message,
        ))))
    }

    /// Queue a reply that only completes once the returned handle is released
    pub fn with_held_json(self, body: Value) -> (Self, ReleaseHandle) {
        let (sender, release) = oneshot::channel();
        let gateway = self.push(MockReply::Held {
            reply: Ok(body),
            release,
        });
        (gateway, ReleaseHandle { sender })
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.lock().calls.clone()
    }

    pub fn call_count(&self) -> usize {
        self.lock().calls.len()
    }

    pub fn pending_replies(&self) -> usize {
        self.lock().replies.len()
    }

    fn push(self, reply: MockReply) -> Self {
        self.lock().replies.push_back(reply);
        self
    }

    fn record(&self, call: RecordedCall) -> MockReply {
        let mut state = self.lock();
        state.calls.push(call);
        state.replies.pop_front().unwrap_or_else(|| {
            MockReply::Ready(Err(GatewayError::transport(404, "no mock reply queued")))
        })
    }

    fn lock(&self) -> MutexGuard<'_, MockState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Gateway for MockGateway {
    async fn post_form<T>(&self, path: &str, form: FormPayload) -> Result<T, GatewayError>
    where
        T: DeserializeOwned + Send,
    {
        let reply = self.record(RecordedCall {
            method: "POST",
            path: path.to_string(),
            form: Some(form),
            json: None,
        });
        reply.resolve(path).await
    }

    async fn post_json<T, B>(&self, path: &str, body: &B) -> Result<T, GatewayError>
    where
        T: DeserializeOwned + Send,
        B: Serialize + Sync + ?Sized,
    {
        let json = serde_json::to_value(body).map_err(|e| GatewayError::decode(path, e.to_string()))?;
        let reply = self.record(RecordedCall {
            method: "POST",
            path: path.to_string(),
            form: None,
            json: Some(json),
        });
        reply.resolve(path).await
    }

    async fn get_json<T>(&self, path: &str) -> Result<T, GatewayError>
    where
        T: DeserializeOwned + Send,
    {
        let reply = self.record(RecordedCall {
            method: "GET",
            path: path.to_string(),
            form: None,
            json: None,
        });
        reply.resolve(path).await
    }
}

/// Fixtures shared by unit and integration tests
pub mod test_helpers {
    use serde_json::{json, Value};

    /// A text that passes the length checks
    pub fn sample_text() -> String {
        "The committee met on Tuesday to discuss the new library. Several members argued that \
         the building should stay open later in the evening, because many students work during \
         the day and cannot visit before six o'clock."
            .to_string()
    }

    /// Body of a successful `/api/predict` reply
    pub fn prediction_json(level_id: u8, level_label: &str) -> Value {
        json!({
            "level_id": level_id,
            "level_label": level_label,
            "probabilities": { "A1": 0.01, "A2": 0.04, "B1": 0.15, "B2": 0.6, "C1": 0.15, "C2": 0.05 },
            "metrics": {
                "sem_share_rare_zipf_lt_4": 0.1834,
                "syn_avg_sentence_length": 17.333,
                "morph_tense_past_share": 0.125,
                "read_fkgl": 9.8
            }
        })
    }

    /// Body of a `/api/stats` reply
    pub fn stats_json() -> Value {
        json!({
            "total_count": 8,
            "avg_text_length": 812.456,
            "levels": [
                { "level_id": 4, "level_label": "B2", "count": 3, "share": 0.375 },
                { "level_id": 1, "level_label": "A1", "count": 1, "share": 0.125 },
                { "level_id": 3, "level_label": "B1", "count": 4, "share": 0.5 }
            ]
        })
    }
}

#[cfg(test)]
mod tests {
    use super::test_helpers::*;
    use super::*;
    use crate::types::{PredictionResult, StatsSummary};

    #[tokio::test]
    async fn test_replies_are_consumed_in_order() {
        let gateway = MockGateway::new()
            .with_json(prediction_json(4, "B2"))
            .with_transport_error(500, "boom");

        let first: PredictionResult = gateway.post_form("/api/predict", FormPayload::new()).await.unwrap();
        assert_eq!(first.level_label, "B2");

        let second = gateway
            .post_form::<PredictionResult>("/api/predict", FormPayload::new())
            .await;
        assert_eq!(second, Err(GatewayError::transport(500, "boom")));

        let empty = gateway.get_json::<StatsSummary>("/api/stats").await;
        assert_eq!(empty.unwrap_err().status(), Some(404));
        assert_eq!(gateway.call_count(), 3);
    }

    #[tokio::test]
    async fn test_records_calls() {
        let gateway = MockGateway::new().with_json(stats_json()).with_json(stats_json());
        let form = FormPayload::new().text("text", "hello");

        let _: Value = gateway.post_form("/api/predict", form.clone()).await.unwrap();
        let _: Value = gateway.post_json("/api/echo", &serde_json::json!({"a": 1})).await.unwrap();

        let calls = gateway.calls();
        assert_eq!(calls[0].method, "POST");
        assert_eq!(calls[0].form, Some(form));
        assert_eq!(calls[1].json, Some(serde_json::json!({"a": 1})));
    }

    #[tokio::test]
    async fn test_mismatched_body_is_a_decode_error() {
        let gateway = MockGateway::new().with_json(serde_json::json!({"unexpected": true}));
        let result = gateway.get_json::<PredictionResult>("/api/predict").await;
        assert!(matches!(result, Err(GatewayError::Decode { .. })));
    }

    #[tokio::test]
    async fn test_held_reply_waits_for_release() {
        let (gateway, handle) = MockGateway::new().with_held_json(prediction_json(2, "A2"));

        let request = gateway.post_form::<PredictionResult>("/api/predict", FormPayload::new());
        let (result, ()) = tokio::join!(request, async move { handle.release() });
        assert_eq!(result.unwrap().level_id, 2);
    }

    #[tokio::test]
    async fn test_dropped_handle_fails_the_request() {
        let (gateway, handle) = MockGateway::new().with_held_json(prediction_json(2, "A2"));
        drop(handle);

        let result = gateway.get_json::<PredictionResult>("/api/predict").await;
        assert!(result.unwrap_err().is_network());
    }
}
