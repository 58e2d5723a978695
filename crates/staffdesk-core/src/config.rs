// ── Runtime client configuration ──
//
// Describes *how* to reach the backend. Never touches disk: the CLI (via
// staffdesk-config) builds a `ClientConfig` and hands it in.

use std::path::PathBuf;
use std::time::Duration;

use staffdesk_api::transport::{TlsMode, TransportConfig};
use staffdesk_api::EnvelopePolicy;
use url::Url;

/// TLS verification strategy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TlsVerification {
    /// System CA store (strict).
    #[default]
    SystemDefaults,
    /// Custom CA certificate file.
    CustomCa(PathBuf),
    /// Skip verification (self-signed development backends).
    DangerAcceptInvalid,
}

/// Configuration for talking to one backend.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL the endpoint paths hang off (e.g. `http://localhost:8080/api`).
    pub api_url: Url,
    /// TLS verification strategy.
    pub tls: TlsVerification,
    /// Request timeout, enforced by the transport.
    pub timeout: Duration,
    /// Treat `success: false` envelopes as errors.
    pub strict_envelope: bool,
}

impl ClientConfig {
    /// Config with default TLS, a 30s timeout, and the lenient envelope policy.
    pub fn new(api_url: Url) -> Self {
        Self {
            api_url,
            tls: TlsVerification::default(),
            timeout: Duration::from_secs(30),
            strict_envelope: false,
        }
    }

    pub fn envelope_policy(&self) -> EnvelopePolicy {
        if self.strict_envelope {
            EnvelopePolicy::Strict
        } else {
            EnvelopePolicy::Lenient
        }
    }

    /// Translate into the api crate's transport settings.
    pub fn transport(&self) -> TransportConfig {
        let tls = match &self.tls {
            TlsVerification::SystemDefaults => TlsMode::System,
            TlsVerification::CustomCa(path) => TlsMode::CustomCa(path.clone()),
            TlsVerification::DangerAcceptInvalid => TlsMode::DangerAcceptInvalid,
        };

        TransportConfig {
            tls,
            timeout: self.timeout,
            envelope: self.envelope_policy(),
        }
    }
}
