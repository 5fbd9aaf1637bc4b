use shared::ASK_ROUTE;

/// Settings baked into the wasm bundle at build time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Config {
    pub ask_url: String,
}

impl Config {
    pub(crate) fn from_build_env() -> Self {
        Self::with_override(option_env!("SOCRATIC_ASK_URL"))
    }

    fn with_override(ask_url: Option<&str>) -> Self {
        let ask_url = ask_url
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .unwrap_or(ASK_ROUTE);

        Self {
            ask_url: ask_url.to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_same_origin_ask() {
        assert_eq!(Config::with_override(None).ask_url, "/ask");
        assert_eq!(Config::with_override(Some("  ")).ask_url, "/ask");
    }

    #[test]
    fn override_is_used_verbatim() {
        let config = Config::with_override(Some("http://localhost:8000/ask"));

        assert_eq!(config.ask_url, "http://localhost:8000/ask");
    }
}
