use graph_serialization::SerializationError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GraphError {
    #[error("request failed: {0}")]
    Http(#[from] ureq::Error),
    #[error("Graph API error {status} ({code}): {message}")]
    Api {
        status: u16,
        code: String,
        message: String,
    },
    #[error(transparent)]
    Serialization(#[from] SerializationError),
    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),
    #[error("configuration error: {0}")]
    Config(String),
}

impl GraphError {
    /// Builds a [`GraphError::Api`] from a non-2xx response, reading the
    /// OData `{"error": {"code", "message"}}` body when there is one.
    pub fn from_response(status: u16, body: &[u8]) -> Self {
        let parsed: Option<serde_json::Value> = serde_json::from_slice(body).ok();
        let field = |name: &str| {
            parsed
                .as_ref()
                .and_then(|v| v.pointer(&format!("/error/{name}")))
                .and_then(serde_json::Value::as_str)
                .map(str::to_string)
        };
        match (field("code"), field("message")) {
            (Some(code), message) => GraphError::Api {
                status,
                code,
                message: message.unwrap_or_default(),
            },
            (None, _) => GraphError::Api {
                status,
                code: "unknown".to_string(),
                message: String::from_utf8_lossy(body).into_owned(),
            },
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            GraphError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}
