#![allow(dead_code)]

use catalog_management_v1::{Client, Config};
use wiremock::MockServer;

pub const TOKEN: &str = "test-token";
pub const BASE_PATH: &str = "/api/v1-beta";

pub fn config(server: &MockServer) -> Config {
    let url = format!("{}{BASE_PATH}", server.uri())
        .parse()
        .expect("mock server url is valid");
    Config::new(url).bearer_token(Some(TOKEN.to_string()))
}

pub fn init_logs() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub async fn client(server: &MockServer) -> Client {
    init_logs();
    Client::new(config(server))
        .await
        .expect("client must be created")
}

pub fn api_path(path: &str) -> String {
    format!("{BASE_PATH}{path}")
}
