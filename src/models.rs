use serde::{Deserialize, Serialize};

/// A raw source unit read during ingestion. PDF files yield one document
/// per page; plain-text files yield a single document with `page = None`.
#[derive(Debug, Clone)]
pub struct Document {
    /// Origin path, relative to the knowledge directory
    pub source: String,
    /// 1-based page number for paginated formats
    pub page: Option<usize>,
    pub text: String,
}

/// A bounded slice of a document's text, the atomic unit of retrieval.
///
/// Chunks overlap their predecessor by a fixed number of characters, so
/// concatenating a document's chunks while dropping each chunk's leading
/// overlap reproduces the document text exactly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chunk {
    pub source: String,
    pub page: Option<usize>,
    /// Position of this chunk within its document
    pub chunk_index: usize,
    pub content: String,
}

/// Classified purpose of a question. The wire labels are the Spanish
/// strings the classification prompt demands from the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Intent {
    #[serde(rename = "pregunta_general")]
    GeneralQuestion,
    #[serde(rename = "reporte_de_problema")]
    ProblemReport,
    #[serde(rename = "despedida")]
    Farewell,
}

/// A persisted support ticket.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ticket {
    pub id: i64,
    pub description: String,
    pub status: String,
}

/// Query parameters of GET /ask.
#[derive(Debug, Clone, Deserialize)]
pub struct AskParams {
    pub question: String,
}

/// Response body of GET /ask. Always well-formed: every internal failure
/// is mapped to a degraded answer before it reaches this type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AskResponse {
    pub answer: String,
    /// Signals the caller to expect the user to confirm resolution
    pub follow_up_required: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intent_wire_labels() {
        assert_eq!(
            serde_json::to_value(Intent::GeneralQuestion).unwrap(),
            "pregunta_general"
        );
        assert_eq!(
            serde_json::to_value(Intent::ProblemReport).unwrap(),
            "reporte_de_problema"
        );
        assert_eq!(serde_json::to_value(Intent::Farewell).unwrap(), "despedida");
    }

    #[test]
    fn test_intent_round_trips() {
        for intent in [
            Intent::GeneralQuestion,
            Intent::ProblemReport,
            Intent::Farewell,
        ] {
            let json = serde_json::to_string(&intent).unwrap();
            let back: Intent = serde_json::from_str(&json).unwrap();
            assert_eq!(back, intent);
        }
    }

    #[test]
    fn test_unknown_intent_label_is_a_parse_error() {
        // The classifier's fallback heuristic handles this case; the enum
        // itself stays closed.
        assert!(serde_json::from_str::<Intent>("\"consulta_rara\"").is_err());
    }

    #[test]
    fn test_ask_response_shape() {
        let resp = AskResponse {
            answer: "hola".to_string(),
            follow_up_required: true,
        };
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["answer"], "hola");
        assert_eq!(json["follow_up_required"], true);
    }
}
