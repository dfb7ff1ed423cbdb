use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::Value;
use shopfront_domain::{ApiConfig, ResolvedRequest};
use tokio::sync::watch;

use super::{ApiClient, ApiError, SessionContext, Transport};

type Responder = Box<dyn Fn(&ResolvedRequest) -> Result<Value, ApiError> + Send + Sync>;

/// Records every request. URLs containing `slow` block until the gate opens.
pub struct MockTransport {
    requests: Mutex<Vec<ResolvedRequest>>,
    responder: Responder,
    gate: watch::Receiver<bool>,
}

impl MockTransport {
    pub fn new(
        responder: impl Fn(&ResolvedRequest) -> Result<Value, ApiError> + Send + Sync + 'static,
    ) -> (Arc<Self>, watch::Sender<bool>) {
        let (open, gate) = watch::channel(false);
        let transport =
            Arc::new(Self { requests: Mutex::new(Vec::new()), responder: Box::new(responder), gate });
        (transport, open)
    }

    pub fn urls(&self) -> Vec<String> {
        self.requests.lock().unwrap().iter().map(|request| request.url.clone()).collect()
    }

    pub fn requests(&self) -> Vec<ResolvedRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn send(&self, request: ResolvedRequest) -> Result<Value, ApiError> {
        self.requests.lock().unwrap().push(request.clone());
        if request.url.contains("slow") {
            let mut gate = self.gate.clone();
            gate.wait_for(|open| *open).await.unwrap();
        }
        (self.responder)(&request)
    }
}

pub fn session() -> Arc<SessionContext> {
    Arc::new(SessionContext::new(&ApiConfig {
        rest_endpoint: "https://shop.test/rest".into(),
        server_url: "https://shop.test".into(),
        ..Default::default()
    }))
}

pub fn client(transport: Arc<MockTransport>, session: Arc<SessionContext>) -> ApiClient {
    ApiClient::builder().transport(transport).config_provider(session).build().unwrap()
}
