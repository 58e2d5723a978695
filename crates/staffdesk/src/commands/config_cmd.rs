//! Config subcommand handlers.

use std::io::IsTerminal;

use dialoguer::Input;
use staffdesk_config::{Config, ConfigError, Profile, parse_api_url, save_config, to_toml};

use crate::cli::{ConfigArgs, ConfigCommand, ConfigInit, GlobalOpts, OutputFormat};
use crate::config;
use crate::error::CliError;
use crate::output;

/// Map a dialoguer / interactive I/O failure into CliError.
fn prompt_err(e: impl std::fmt::Display) -> CliError {
    CliError::Validation {
        field: "interactive".into(),
        reason: format!("prompt failed: {e}"),
    }
}

/// The API URL from `--url`, or a prompt when attached to a terminal.
fn api_url_for(init: &ConfigInit) -> Result<String, CliError> {
    if let Some(url) = &init.url {
        return Ok(url.clone());
    }
    if !std::io::stdin().is_terminal() {
        return Err(CliError::Validation {
            field: "url".into(),
            reason: "--url is required when not running interactively".into(),
        });
    }
    Input::new()
        .with_prompt("API base URL")
        .default("http://localhost:8080/api".to_owned())
        .interact_text()
        .map_err(prompt_err)
}

fn init(mut cfg: Config, init: ConfigInit, global: &GlobalOpts) -> Result<(), CliError> {
    let api_url = api_url_for(&init)?;
    // Validate before anything is written.
    parse_api_url(&api_url)?;

    let profile = Profile {
        timeout: init.profile_timeout,
        insecure: init.profile_insecure.then_some(true),
        ca_cert: init.ca_cert,
        strict_envelope: init.profile_strict.then_some(true),
        ..Profile::new(api_url)
    };
    cfg.profiles.insert(init.profile_name.clone(), profile);

    let default_missing = cfg
        .default_profile
        .as_ref()
        .is_none_or(|name| !cfg.profiles.contains_key(name));
    if init.default || default_missing {
        cfg.default_profile = Some(init.profile_name.clone());
    }

    let path = save_config(&cfg)?;
    output::notice(
        &format!("Profile '{}' written to {}", init.profile_name, path.display()),
        global.quiet,
    );
    Ok(())
}

pub fn handle(args: ConfigArgs, global: &GlobalOpts, cfg: Config) -> Result<(), CliError> {
    match args.command {
        ConfigCommand::Init(args) => init(cfg, args, global),

        ConfigCommand::Show => {
            let out = match global.output_format() {
                OutputFormat::Json => output::render_json(&cfg, false)?,
                OutputFormat::JsonCompact => output::render_json(&cfg, true)?,
                OutputFormat::Yaml => output::render_yaml(&cfg)?,
                OutputFormat::Table | OutputFormat::Plain => to_toml(&cfg)?,
            };
            output::print_output(out.trim_end(), global.quiet);
            Ok(())
        }

        ConfigCommand::Path => {
            output::print_output(&config::config_path().display().to_string(), global.quiet);
            Ok(())
        }

        ConfigCommand::Use { name } => {
            let mut cfg = cfg;
            match cfg.set_default_profile(&name) {
                Err(ConfigError::UnknownProfile { name }) => {
                    return Err(CliError::ProfileNotFound {
                        available: config::available_profiles(&cfg),
                        name,
                    });
                }
                other => other?,
            }
            save_config(&cfg)?;
            output::notice(&format!("Default profile set to '{name}'"), global.quiet);
            Ok(())
        }
    }
}
