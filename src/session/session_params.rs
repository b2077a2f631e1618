use serde::{Deserialize, Serialize};

/// Parameters the consumer sends to the producer before streaming starts.
///
/// Wire form is a UTF-8 JSON object, e.g. `{"num_messages":1000000}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionParams {
    /// Logical messages the consumer intends to receive.
    #[serde(rename = "num_messages")]
    pub target_count: u64,
}

impl SessionParams {
    pub fn new(target_count: u64) -> Self {
        Self { target_count }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn from_json(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(bytes)
    }
}
