//! Backend error payload

use serde::Deserialize;

/// Error body returned by the tournament backend on non-2xx responses.
///
/// The backend is inconsistent about the field name (`message` on newer
/// endpoints, `error` on older ones), so both are accepted.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl ErrorBody {
    /// Best human-readable message in the payload, if any.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref().or(self.error.as_deref())
    }
}
