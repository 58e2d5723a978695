// Response envelope
//
// Every endpoint wraps its payload:
// `{ "success": true, "message": "...", "data": ..., "timestamp": "..." }`

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Standard response envelope around every payload.
///
/// Only `data` is required. The metadata fields may be missing or `null`;
/// an absent `success` counts as success.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub success: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub data: T,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}

impl<T> ApiResponse<T> {
    /// `false` only when the backend explicitly sent `success: false`.
    pub fn is_success(&self) -> bool {
        self.success != Some(false)
    }
}

/// Envelope shape used when only the metadata matters (DELETE responses,
/// error bodies). `data` may be absent or `null`.
#[derive(Debug, Deserialize)]
pub(crate) struct EnvelopeMeta {
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub message: Option<String>,
}

/// How a 2xx envelope carrying `success: false` is treated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EnvelopePolicy {
    /// Discard `success`/`message`/`timestamp` and return `data` regardless.
    ///
    /// Backends must signal failure with a non-2xx status.
    #[default]
    Lenient,
    /// Treat `success: false` as [`Error::Rejected`].
    Strict,
}

impl EnvelopePolicy {
    /// Unwrap an envelope according to this policy.
    pub fn unwrap<T>(self, envelope: ApiResponse<T>) -> Result<T, Error> {
        match self {
            Self::Strict if !envelope.is_success() => Err(Error::Rejected {
                message: rejection_message(envelope.message),
            }),
            _ => Ok(envelope.data),
        }
    }

    /// Check a metadata-only envelope (no payload to return).
    pub(crate) fn check(self, meta: EnvelopeMeta) -> Result<(), Error> {
        match self {
            Self::Strict if meta.success == Some(false) => Err(Error::Rejected {
                message: rejection_message(meta.message),
            }),
            _ => Ok(()),
        }
    }
}

fn rejection_message(message: Option<String>) -> String {
    message
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| "success=false".into())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde_json::json;

    use super::*;

    fn failed_envelope() -> ApiResponse<Vec<u32>> {
        serde_json::from_value(json!({
            "success": false,
            "message": "duplicate code",
            "data": [1, 2],
            "timestamp": "2024-05-01T10:00:00"
        }))
        .unwrap()
    }

    #[test]
    fn lenient_returns_data_even_when_unsuccessful() {
        let data = EnvelopePolicy::Lenient.unwrap(failed_envelope()).unwrap();
        assert_eq!(data, vec![1, 2]);
    }

    #[test]
    fn strict_rejects_unsuccessful_envelope() {
        let err = EnvelopePolicy::Strict.unwrap(failed_envelope()).unwrap_err();
        assert!(matches!(err, Error::Rejected { ref message } if message == "duplicate code"));
    }

    #[test]
    fn missing_metadata_defaults_to_success() {
        let envelope: ApiResponse<u32> = serde_json::from_value(json!({ "data": 7 })).unwrap();
        assert!(envelope.is_success());
        assert_eq!(EnvelopePolicy::Strict.unwrap(envelope).unwrap(), 7);
    }

    #[test]
    fn null_metadata_is_ignored() {
        let envelope: ApiResponse<Vec<u32>> = serde_json::from_str(
            r#"{"success":null,"message":null,"data":[1,2],"timestamp":null}"#,
        )
        .unwrap();
        assert!(envelope.is_success());
        assert_eq!(EnvelopePolicy::Strict.unwrap(envelope).unwrap(), vec![1, 2]);
    }

    #[test]
    fn strict_check_without_message_uses_placeholder() {
        let meta: EnvelopeMeta = serde_json::from_value(json!({ "success": false })).unwrap();
        let err = EnvelopePolicy::Strict.check(meta).unwrap_err();
        assert!(matches!(err, Error::Rejected { ref message } if message == "success=false"));
    }
}
