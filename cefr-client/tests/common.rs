//! Shared helpers for cefr-client integration tests

#![allow(dead_code)]

use cefr_client::{ClientConfig, HttpGateway};
use wiremock::MockServer;

pub use cefr_client::testing::test_helpers::{prediction_json, sample_text, stats_json};

/// Gateway pointed at a running mock server
pub fn gateway_for(server: &MockServer) -> HttpGateway {
    let config = ClientConfig::builder()
        .base_url(server.uri())
        .timeout(5)
        .build()
        .expect("valid test config");
    HttpGateway::new(config).expect("gateway builds")
}

/// Gateway pointed at a port nothing listens on
pub fn unreachable_gateway() -> HttpGateway {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind ephemeral port");
    let port = listener.local_addr().expect("local addr").port();
    drop(listener);

    let config = ClientConfig::builder()
        .base_url(format!("http://127.0.0.1:{}", port))
        .timeout(5)
        .build()
        .expect("valid test config");
    HttpGateway::new(config).expect("gateway builds")
}
