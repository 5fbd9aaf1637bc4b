use reqwest::Method;
use shared::{ClientTransport, TransportResponse};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TransportError {
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error("Unknown method: {0}")]
    UnknownMethod(String),
}

pub struct ReqwestTransport {
    client: reqwest::Client,
    base_url: String,
}

impl ReqwestTransport {
    pub fn new(client: reqwest::Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_owned(),
        }
    }

    fn url(&self, route: &str) -> String {
        format!("{}{}", self.base_url, route)
    }
}

#[async_trait::async_trait(?Send)]
impl ClientTransport for ReqwestTransport {
    type Error = TransportError;

    async fn send_request(
        &self,
        method: &str,
        route: &str,
        body: Option<serde_json::Value>,
    ) -> Result<TransportResponse, Self::Error> {
        let method = Method::from_bytes(method.to_uppercase().as_bytes())
            .map_err(|_| TransportError::UnknownMethod(method.to_owned()))?;

        let mut req = self.client.request(method, self.url(route));
        if let Some(body) = body {
            req = req.json(&body);
        }

        let resp = req.send().await?;
        let status = resp.status();

        if !status.is_success() {
            return Ok(TransportResponse {
                status: status.as_u16(),
                body: String::new(),
            });
        }

        let body = resp.text().await?;

        Ok(TransportResponse {
            status: status.as_u16(),
            body,
        })
    }
}
