use serde::{Deserialize, Serialize};

/// Error body returned by the backend on non-2xx responses.
/// Only `detail` is consumed; it is shown to the user verbatim.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Option<String>,
}

impl ErrorBody {
    /// Parse a raw response body. Validation errors arrive with a non-string
    /// `detail` (a list of issues); those carry no usable message.
    pub fn parse(body: &str) -> Self {
        let detail = serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|value| {
                value
                    .get("detail")
                    .and_then(|d| d.as_str())
                    .map(str::trim)
                    .filter(|d| !d.is_empty())
                    .map(str::to_string)
            });
        Self { detail }
    }
}
