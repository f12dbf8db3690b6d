//! Shared utilities for integration tests.

use std::net::SocketAddr;
use std::time::Duration;

use roman_service::config::ServiceConfig;
use roman_service::http::HttpServer;
use roman_service::lifecycle::Shutdown;
use tokio::net::TcpListener;

/// A service running on an ephemeral port.
pub struct TestService {
    pub addr: SocketAddr,
    pub shutdown: Shutdown,
    pub client: reqwest::Client,
}

impl TestService {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    pub async fn get(&self, path: &str) -> reqwest::Response {
        self.client
            .get(self.url(path))
            .send()
            .await
            .expect("service unreachable")
    }
}

impl Drop for TestService {
    fn drop(&mut self) {
        self.shutdown.trigger();
    }
}

/// Start the service with default configuration.
#[allow(dead_code)]
pub async fn start_service() -> TestService {
    start_service_with(ServiceConfig::default()).await
}

/// Start the service with the given configuration, ignoring its bind address.
pub async fn start_service_with(mut config: ServiceConfig) -> TestService {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    config.listener.bind_address = addr.to_string();

    let shutdown = Shutdown::new();
    let server = HttpServer::new(config);
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    // The listener is already bound, so connections queue until serve starts.
    tokio::time::sleep(Duration::from_millis(20)).await;

    let client = reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .no_proxy()
        .build()
        .unwrap();

    TestService {
        addr,
        shutdown,
        client,
    }
}
