//! CLI-side configuration glue.
//!
//! Loading, saving and profile translation live in `staffdesk-config`;
//! this module layers the global flags on top.

use std::time::Duration;

use clap::ValueEnum;
use staffdesk_config::{Config, parse_api_url, profile_to_client_config};
use staffdesk_core::{ClientConfig, TlsVerification};

use crate::cli::{ColorMode, GlobalOpts, OutputFormat};
use crate::error::CliError;

pub use staffdesk_config::{config_path, load_config};

/// Fill unset `--output` / `--color` from the `[defaults]` table.
///
/// Unparseable config values are ignored in favor of the built-in defaults.
pub fn apply_defaults(global: &mut GlobalOpts, cfg: &Config) {
    if global.output.is_none() {
        global.output = OutputFormat::from_str(&cfg.defaults.output, true).ok();
    }
    if global.color.is_none() {
        global.color = ColorMode::from_str(&cfg.defaults.color, true).ok();
    }
}

/// Comma-separated profile names, for help text.
pub fn available_profiles(cfg: &Config) -> String {
    if cfg.profiles.is_empty() {
        return "(none)".into();
    }
    cfg.profiles.keys().cloned().collect::<Vec<_>>().join(", ")
}

/// Build a `ClientConfig` from the config file, profile, and CLI overrides.
///
/// Precedence per field: flag/env > profile > `[defaults]`. An explicitly
/// requested profile must exist; the default profile may be absent as long
/// as `--api-url` is given.
pub fn build_client_config(global: &GlobalOpts, cfg: &Config) -> Result<ClientConfig, CliError> {
    let requested = global.profile.as_deref();
    let profile_name = requested.or(cfg.default_profile.as_deref());
    let profile = profile_name.and_then(|name| cfg.profiles.get(name));

    if let (Some(name), None) = (requested, profile) {
        return Err(CliError::ProfileNotFound {
            name: name.into(),
            available: available_profiles(cfg),
        });
    }

    let mut client = match (profile, global.api_url.as_deref()) {
        (Some(profile), _) => profile_to_client_config(profile, &cfg.defaults)?,
        (None, Some(url)) => {
            let mut client = ClientConfig::new(parse_api_url(url)?);
            client.timeout = Duration::from_secs(cfg.defaults.timeout);
            if cfg.defaults.insecure {
                client.tls = TlsVerification::DangerAcceptInvalid;
            }
            client
        }
        (None, None) => {
            return Err(CliError::NoConfig {
                path: config_path().display().to_string(),
            });
        }
    };

    if let Some(url) = global.api_url.as_deref() {
        client.api_url = parse_api_url(url)?;
    }
    if global.insecure {
        client.tls = TlsVerification::DangerAcceptInvalid;
    }
    if let Some(secs) = global.timeout {
        client.timeout = Duration::from_secs(secs);
    }
    if global.strict_envelope {
        client.strict_envelope = true;
    }

    tracing::debug!(
        profile = profile.and(profile_name),
        api_url = %client.api_url,
        "resolved client config"
    );
    Ok(client)
}
