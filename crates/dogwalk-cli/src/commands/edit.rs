use dogwalk_core::{BathroomActivity, WalkQuality};

use crate::commands::common::{normalize_log_identifier, open_service, resolve_log, AppContext};
use crate::error::CliError;

/// Fields to change on an existing walk. `notes: Some("")` clears the notes.
#[derive(Debug, Default)]
pub struct WalkEdit {
    pub quality: Option<WalkQuality>,
    pub bathroom: Option<BathroomActivity>,
    pub notes: Option<String>,
}

impl WalkEdit {
    const fn is_empty(&self) -> bool {
        self.quality.is_none() && self.bathroom.is_none() && self.notes.is_none()
    }
}

pub async fn run_edit(id: &str, edit: WalkEdit, context: &AppContext) -> Result<(), CliError> {
    let query = normalize_log_identifier(id)?;
    if edit.is_empty() {
        return Err(CliError::NothingToEdit);
    }

    let mut service = open_service(context).await?;
    let mut log = resolve_log(&query, &service)?;

    if let Some(quality) = edit.quality {
        log.quality = quality;
    }
    if let Some(bathroom) = edit.bathroom {
        log.bathroom = bathroom;
    }
    if let Some(notes) = edit.notes.as_deref() {
        log = log.with_notes(Some(notes.trim()));
    }

    let id = log.id;
    if !service.update(log).await? {
        return Err(CliError::LogNotFound(query));
    }
    service.wait_idle().await?;

    if let Some(id) = id {
        println!("{id}");
    }
    Ok(())
}
