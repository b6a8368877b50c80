use std::net::SocketAddr;

use reqwest::Response;

/// HTTP client for the `clientip` HTTP API.
pub struct Client {
    server_addr: SocketAddr,
    reqwest: reqwest::Client,
}

impl Client {
    pub fn new(server_addr: SocketAddr) -> Self {
        Self {
            server_addr,
            // No idle connections, so the server can shut down right away.
            reqwest: reqwest::Client::builder().pool_max_idle_per_host(0).build().unwrap(),
        }
    }

    pub async fn health_check(&self) -> Response {
        self.get("health_check", &[]).await
    }

    pub async fn client_ip(&self, headers: &[(&str, &str)]) -> Response {
        self.get("client_ip", headers).await
    }

    async fn get(&self, path: &str, headers: &[(&str, &str)]) -> Response {
        let mut request = self.reqwest.get(format!("http://{}/{path}", self.server_addr));

        for (name, value) in headers {
            request = request.header(*name, *value);
        }

        request.send().await.unwrap()
    }
}
