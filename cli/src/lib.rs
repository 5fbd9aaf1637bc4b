use miette::{Context, IntoDiagnostic, Result};
use shared::ResultsState;

pub use crate::transport::{ReqwestTransport, TransportError};

mod transport;

static APP_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"),);

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";
pub const BASE_URL_ENV: &str = "SOCRATIC_URL";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub base_url: String,
}

impl Config {
    /// `--url` wins over `SOCRATIC_URL`, which wins over the default.
    pub fn from_env(url_flag: Option<String>) -> Result<Self> {
        let base_url = match url_flag {
            Some(url) => url,
            None => match std::env::var(BASE_URL_ENV) {
                Ok(url) => url,
                Err(std::env::VarError::NotPresent) => DEFAULT_BASE_URL.to_owned(),
                Err(e) => {
                    return Err(e)
                        .into_diagnostic()
                        .wrap_err("Could not read SOCRATIC_URL env var")
                }
            },
        };

        Ok(Self { base_url })
    }

    pub fn transport(&self) -> Result<ReqwestTransport> {
        let client = reqwest::Client::builder()
            .user_agent(APP_USER_AGENT)
            .build()
            .into_diagnostic()
            .wrap_err("Could not build reqwest client")?;

        Ok(ReqwestTransport::new(client, &self.base_url))
    }
}

/// Plain-text rendering of the results region.
pub fn render(state: &ResultsState) -> String {
    let mut out = state.answer.clone();

    for card in &state.sources {
        out.push_str(&format!("\n\n{}\n{}", card.heading(), card.excerpt));
    }

    out
}
