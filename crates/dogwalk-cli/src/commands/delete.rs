use crate::commands::common::{normalize_log_identifier, open_service, resolve_log, AppContext};
use crate::error::CliError;

pub async fn run_delete(id: &str, context: &AppContext) -> Result<(), CliError> {
    let query = normalize_log_identifier(id)?;
    let mut service = open_service(context).await?;
    let log = resolve_log(&query, &service)?;

    service.delete(&log).await?;
    service.wait_idle().await?;

    if let Some(id) = log.id {
        println!("{id}");
    }
    Ok(())
}
