use miette::Diagnostic;
use thiserror::Error;

use crate::{AnswerResponse, QuestionRequest};

pub const ASK_ROUTE: &str = "/ask";

/// Raw reply as seen by a transport. The body is only parsed on success.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    pub body: String,
}

impl TransportResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// HTTP plumbing behind an [`AskClient`].
///
/// Futures are `?Send` so that browser transports, whose handles are tied to
/// the JS event loop, can implement it.
#[async_trait::async_trait(?Send)]
pub trait ClientTransport {
    type Error: std::error::Error + 'static;

    async fn send_request(
        &self,
        method: &str,
        route: &str,
        body: Option<serde_json::Value>,
    ) -> Result<TransportResponse, Self::Error>;
}

#[derive(Error, Diagnostic, Debug)]
pub enum ClientError<TransportError>
where
    TransportError: std::fmt::Debug + std::error::Error + 'static,
{
    #[error(transparent)]
    Transport(TransportError),
    #[error("HTTP error! status: {0}")]
    Status(u16),
    #[error(transparent)]
    Deserialization(serde_json::Error),
    #[error(transparent)]
    Serialization(serde_json::Error),
}

pub struct AskClient<Transport> {
    transport: Transport,
    route: String,
}

impl<Transport> AskClient<Transport>
where
    Transport: ClientTransport,
{
    pub fn new(transport: Transport) -> Self {
        Self {
            transport,
            route: ASK_ROUTE.to_owned(),
        }
    }

    pub fn with_route(mut self, route: impl Into<String>) -> Self {
        self.route = route.into();
        self
    }

    pub fn route(&self) -> &str {
        &self.route
    }

    pub fn transport(&self) -> &Transport {
        &self.transport
    }

    /// One POST to the ask route. Non-2xx replies fail without reading the body.
    pub async fn ask(
        &self,
        question: &str,
    ) -> Result<AnswerResponse, ClientError<Transport::Error>> {
        let req = QuestionRequest {
            question: question.to_owned(),
        };
        let body = serde_json::to_value(req).map_err(ClientError::Serialization)?;

        let resp = self
            .transport
            .send_request("post", &self.route, Some(body))
            .await
            .map_err(ClientError::Transport)?;

        if !resp.is_success() {
            return Err(ClientError::Status(resp.status));
        }

        serde_json::from_str(&resp.body).map_err(ClientError::Deserialization)
    }
}
