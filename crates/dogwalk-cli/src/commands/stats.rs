use dogwalk_core::WalkQuality;

use crate::commands::common::{open_service, AppContext};
use crate::error::CliError;

pub async fn run_stats(as_json: bool, context: &AppContext) -> Result<(), CliError> {
    let service = open_service(context).await?;
    let stats = service.stats();

    if as_json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
        return Ok(());
    }

    println!("{} walks", stats.total);
    for quality in WalkQuality::ALL {
        println!(
            "{} {:<10} {}",
            quality.emoji(),
            quality.label(),
            stats.count(quality)
        );
    }
    Ok(())
}
