//! Shared helpers for command handlers.

use std::io::IsTerminal;

use staffdesk_core::{CoreError, ResourceApi, ResourceStore, StoreEntity};

use crate::error::CliError;

/// Surface a read action's recorded failure as an error.
///
/// Read actions never return their failure; the store keeps the message and
/// kind, so the view checks them after the action completes.
pub fn check_store<A>(store: &ResourceStore<A>) -> Result<(), CliError>
where
    A: ResourceApi,
    A::Entity: StoreEntity,
{
    match store.error() {
        Some(message) => Err(CliError::action_failed(message, store.error_kind())),
        None => Ok(()),
    }
}

/// Turn a write action's returned error into a CLI error, headlined by the
/// store's message.
pub fn write_failed<A>(store: &ResourceStore<A>, err: CoreError) -> CliError
where
    A: ResourceApi,
    A::Entity: StoreEntity,
{
    let kind = Some(err.kind());
    match store.error() {
        Some(message) => CliError::action_failed(message, kind),
        None => CliError::action_failed(err.to_string(), kind),
    }
}

/// Prompt for confirmation, auto-approving if `--yes` was passed.
///
/// Without a terminal to prompt on, `--yes` is required.
pub fn confirm(message: &str, yes_flag: bool) -> Result<bool, CliError> {
    if yes_flag {
        return Ok(true);
    }
    if !std::io::stdin().is_terminal() {
        return Err(CliError::NonInteractiveRequiresYes {
            action: message.into(),
        });
    }
    dialoguer::Confirm::new()
        .with_prompt(message)
        .default(false)
        .interact()
        .map_err(|e| CliError::Io(std::io::Error::other(e)))
}
