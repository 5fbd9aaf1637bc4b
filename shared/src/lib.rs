use serde::{Deserialize, Serialize};

pub mod card;
pub mod client;
pub mod results;

pub use card::SourceCard;
pub use client::{AskClient, ClientError, ClientTransport, TransportResponse, ASK_ROUTE};
pub use results::{submit_question, Phase, ResultsAction, ResultsState, Ticket, TicketCounter};

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct QuestionRequest {
    pub question: String,
}

/// Body of a successful `/ask` reply.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct AnswerResponse {
    pub answer: String,
    #[serde(default)]
    pub sources: Option<Vec<SourceDoc>>,
}

impl AnswerResponse {
    /// Sources in the order the backend returned them. Absent and `null` are both empty.
    pub fn sources(&self) -> &[SourceDoc] {
        self.sources.as_deref().unwrap_or_default()
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct SourceDoc {
    pub page_content: String,
    pub metadata: SourceMetadata,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct SourceMetadata {
    pub source: String,
    /// Zero-based page index, as the document loaders report it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<u64>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn question_request_wire_shape() {
        let req = QuestionRequest {
            question: "What is virtue?".to_owned(),
        };

        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            json!({ "question": "What is virtue?" })
        );
    }

    #[test]
    fn missing_or_null_sources_are_empty() {
        let missing: AnswerResponse = serde_json::from_value(json!({ "answer": "A" })).unwrap();
        let null: AnswerResponse =
            serde_json::from_value(json!({ "answer": "A", "sources": null })).unwrap();

        assert!(missing.sources().is_empty());
        assert!(null.sources().is_empty());
    }

    #[test]
    fn metadata_keeps_unknown_keys() {
        let resp: AnswerResponse = serde_json::from_value(json!({
            "answer": "A",
            "sources": [{
                "page_content": "text",
                "metadata": { "source": "republic.pdf", "page": 4, "total_pages": 300 }
            }]
        }))
        .unwrap();

        let meta = &resp.sources()[0].metadata;
        assert_eq!(meta.source, "republic.pdf");
        assert_eq!(meta.page, Some(4));
        assert_eq!(meta.extra.get("total_pages"), Some(&json!(300)));
    }

    #[test]
    fn metadata_without_source_is_rejected() {
        let resp = serde_json::from_value::<AnswerResponse>(json!({
            "answer": "A",
            "sources": [{ "page_content": "text", "metadata": { "page": 1 } }]
        }));

        assert!(resp.is_err());
    }
}
