use dogwalk_core::util::normalize_text_option;
use dogwalk_core::{BathroomActivity, WalkLog, WalkQuality};

use crate::commands::common::{open_service, AppContext};
use crate::error::CliError;

pub async fn run_add(
    quality: WalkQuality,
    bathroom: BathroomActivity,
    notes: Option<String>,
    user: Option<String>,
    context: &AppContext,
) -> Result<(), CliError> {
    let mut service = open_service(context).await?;
    let user_name = match normalize_text_option(user) {
        Some(name) => name,
        None => service.user_name().await,
    };

    let log = WalkLog::new(quality, bathroom)
        .with_notes(notes.as_deref().map(str::trim))
        .with_user_name(user_name);
    let id = log.id;

    service.add(log).await?;
    service.wait_idle().await?;

    if let Some(id) = id {
        println!("{id}");
    }
    Ok(())
}
