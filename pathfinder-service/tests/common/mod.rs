#![allow(dead_code)]

use pathfinder_service::config::{GridConfig, PathfinderConfig};
use pathfinder_service::startup::Application;
use service_core::config::Config;

pub const ALLOWED_ORIGIN: &str = "http://localhost:5173";

pub struct TestApp {
    pub address: String,
    pub port: u16,
    pub client: reqwest::Client,
}

pub fn test_config() -> PathfinderConfig {
    PathfinderConfig {
        common: Config {
            host: "127.0.0.1".to_string(),
            port: 0, // Random port
            ..Config::default()
        },
        ..PathfinderConfig::default()
    }
}

impl TestApp {
    pub async fn spawn() -> Self {
        Self::spawn_with(test_config()).await
    }

    pub async fn spawn_with_grid(size: usize) -> Self {
        let mut config = test_config();
        config.grid = GridConfig { size };
        Self::spawn_with(config).await
    }

    pub async fn spawn_with(config: PathfinderConfig) -> Self {
        let app = Application::build(config)
            .await
            .expect("Failed to build test application");

        let port = app.port();
        let address = format!("http://127.0.0.1:{}", port);

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        // Wait for the server to answer its health endpoint
        let client = reqwest::Client::new();
        let health_url = format!("{}/health", address);
        for _ in 0..50 {
            if client.get(&health_url).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;
        }

        TestApp {
            address,
            port,
            client,
        }
    }

    pub async fn post_find_path(&self, body: serde_json::Value) -> reqwest::Response {
        self.client
            .post(format!("{}/find-path", self.address))
            .json(&body)
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn post_raw(&self, body: &'static str) -> reqwest::Response {
        self.client
            .post(format!("{}/find-path", self.address))
            .header("content-type", "application/json")
            .body(body)
            .send()
            .await
            .expect("Failed to execute request")
    }
}
