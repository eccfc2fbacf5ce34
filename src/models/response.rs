use serde_json::Value;

/// Provider outcome as reported by the `Response` field every OMDb body carries
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProviderStatus {
    /// `"Response": "True"`
    Found,
    /// `"Response": "False"` with the provider's `Error` message, if any
    Failed(Option<String>),
    /// No recognizable `Response` field
    Unknown,
}

/// Read-only view over the provider envelope of an otherwise opaque body.
///
/// Only used for logging: the body itself is passed through untouched.
#[derive(Debug, Clone, Copy)]
pub struct Envelope<'a> {
    body: &'a Value,
}

impl<'a> Envelope<'a> {
    pub fn new(body: &'a Value) -> Self {
        Self { body }
    }

    pub fn status(&self) -> ProviderStatus {
        match self.body.get("Response").and_then(Value::as_str) {
            Some("True") => ProviderStatus::Found,
            Some("False") => ProviderStatus::Failed(self.error().map(str::to_string)),
            _ => ProviderStatus::Unknown,
        }
    }

    pub fn error(&self) -> Option<&'a str> {
        self.body.get("Error").and_then(Value::as_str)
    }

    /// `totalResults` of a search body; the provider sends it as a string
    pub fn total_results(&self) -> Option<u64> {
        match self.body.get("totalResults")? {
            Value::String(s) => s.parse().ok(),
            Value::Number(n) => n.as_u64(),
            _ => None,
        }
    }
}
