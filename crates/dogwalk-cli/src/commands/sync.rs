use dogwalk_core::{SyncOperation, SyncOutcome};

use crate::commands::common::{start_service, AppContext};
use crate::error::CliError;

pub async fn run_sync(context: &AppContext) -> Result<(), CliError> {
    if context.remote.is_none() {
        return Err(CliError::SyncNotConfigured);
    }

    let mut service = start_service(context).await?;
    let outcomes = service.wait_idle().await?;

    let fetch = outcomes
        .iter()
        .find(|outcome| outcome.operation() == SyncOperation::Fetch);
    match fetch {
        Some(SyncOutcome::Failed { error, .. }) => {
            println!(
                "Sync failed: {error}. Keeping {} local walks.",
                service.logs().len()
            );
        }
        _ => println!("Synced {} walks ({})", service.logs().len(), service.sync_state()),
    }
    Ok(())
}
