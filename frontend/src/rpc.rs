use gloo_net::http::{Method, Request};
use shared::{ClientTransport, TransportResponse};
use thiserror::Error;

#[derive(Error, Debug)]
pub(crate) enum TransportError {
    #[error(transparent)]
    Http(#[from] gloo_net::Error),
    #[error("Unknown method: {0}")]
    UnknownMethod(String),
}

/// Browser `fetch` via gloo-net.
pub(crate) struct GlooTransport;

fn parse_method(method: &str) -> Result<Method, TransportError> {
    match method.to_lowercase().as_str() {
        "get" => Ok(Method::GET),
        "post" => Ok(Method::POST),
        "put" => Ok(Method::PUT),
        "delete" => Ok(Method::DELETE),
        _ => Err(TransportError::UnknownMethod(method.to_owned())),
    }
}

#[async_trait::async_trait(?Send)]
impl ClientTransport for GlooTransport {
    type Error = TransportError;

    async fn send_request(
        &self,
        method: &str,
        route: &str,
        body: Option<serde_json::Value>,
    ) -> Result<TransportResponse, Self::Error> {
        let method = parse_method(method)?;

        // `json` also sets `Content-Type: application/json`.
        let req = if let Some(body) = body {
            Request::new(route).method(method).json(&body)?
        } else {
            Request::new(route).method(method)
        };

        let resp = req.send().await?;
        let status = resp.status();

        if !resp.ok() {
            return Ok(TransportResponse {
                status,
                body: String::new(),
            });
        }

        let body = resp.text().await?;

        Ok(TransportResponse { status, body })
    }
}
