use chrono::Utc;
use dogwalk_core::{WalkLog, WalkQuality};

use crate::commands::common::{
    format_log_lines, log_to_list_item, open_service, AppContext, WalkListItem,
};
use crate::error::CliError;

pub async fn run_list(
    quality: Option<WalkQuality>,
    limit: usize,
    as_json: bool,
    context: &AppContext,
) -> Result<(), CliError> {
    let service = open_service(context).await?;
    let now = Utc::now();

    let logs = match quality {
        Some(quality) => service.logs_with_quality(quality),
        None => service.logs().iter().collect(),
    };
    let logs = logs.into_iter().take(limit).collect::<Vec<&WalkLog>>();

    if as_json {
        let json_items = logs
            .iter()
            .map(|log| log_to_list_item(log, now))
            .collect::<Vec<WalkListItem>>();
        println!("{}", serde_json::to_string_pretty(&json_items)?);
        return Ok(());
    }

    if logs.is_empty() {
        if quality.is_some() {
            println!("No walks match your filter");
        } else {
            println!("No walks logged yet");
        }
        return Ok(());
    }

    println!("{}", service.stats());
    for line in format_log_lines(&logs, now) {
        println!("{line}");
    }
    Ok(())
}
