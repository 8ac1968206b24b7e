use std::{collections::HashMap, sync::mpsc::channel};

use actix_web::dev::ServerHandle;
use cucumber::World;
use e2e::helpers::expand_placeholders;
use log::*;
use marketplace_server::{config::ServerConfig, server::create_server_instance};
use reqwest::{Client, Method, RequestBuilder, StatusCode};

#[derive(Debug, Clone, World)]
pub struct MarketWorld {
    pub config: ServerConfig,
    pub server_handle: Option<ServerHandle>,
    // Sent as x-api-key when set
    pub api_key: Option<String>,
    pub access_token: Option<String>,
    pub refresh_token: Option<String>,
    // Values captured from earlier responses, substituted into `{name}` placeholders in paths
    pub remembered: HashMap<String, String>,
    pub response: Option<(StatusCode, String)>,
}

impl Default for MarketWorld {
    fn default() -> Self {
        let _ = env_logger::try_init().ok();
        let config = ServerConfig::new("127.0.0.1", 20000 + rand::random::<u16>() % 10_000);
        Self {
            config,
            server_handle: None,
            api_key: None,
            access_token: None,
            refresh_token: None,
            remembered: HashMap::new(),
            response: None,
        }
    }
}

impl MarketWorld {
    pub async fn start_server(&mut self) {
        let config = self.config.clone();
        info!("🌍️ Starting server on {}:{}", config.host, config.port);
        let (tx, rx) = channel();
        tokio::spawn(async move {
            let srv = create_server_instance(config).expect("Error creating server instance");
            let _res = tx.send(srv.handle());
            match srv.await {
                Ok(_) => info!("🌍️ Server shut down"),
                Err(e) => warn!("🌍️ Server error: {e}"),
            }
        });
        let handle = rx.recv().unwrap();
        info!("🌍️ Server started");
        self.server_handle = Some(handle);
    }

    pub async fn get(&self, path: &str) -> (StatusCode, String) {
        self.request(Method::GET, path, |req| req).await
    }

    pub async fn request<F>(&self, method: Method, path: &str, req: F) -> (StatusCode, String)
    where F: FnOnce(RequestBuilder) -> RequestBuilder {
        let path = expand_placeholders(path, &self.remembered);
        let url = format!("http://{}:{}{path}", self.config.host, self.config.port);
        debug!("🌍️ {method} {url}");
        let client = Client::new();
        let mut request = req(client.request(method, url));
        if let Some(key) = &self.api_key {
            request = request.header("x-api-key", key);
        }
        if let Some(token) = &self.access_token {
            debug!("🌍️ Adding bearer token to request");
            request = request.bearer_auth(token);
        }
        let res = request.send().await.expect("Error getting response");
        let code = res.status();
        let body = res.text().await.expect("Error parsing response body");
        (code, body)
    }
}
