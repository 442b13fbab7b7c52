use crate::cli::ConfigCommands;
use crate::commands::common::{open_local_service, AppContext};
use crate::error::CliError;

pub async fn run_config(command: ConfigCommands, context: &AppContext) -> Result<(), CliError> {
    match command {
        ConfigCommands::Name { name: None } => {
            let service = open_local_service(&context.db_path).await?;
            println!("{}", service.user_name().await);
        }
        ConfigCommands::Name { name: Some(name) } => {
            let name = name.trim();
            if name.is_empty() {
                return Err(CliError::EmptyUserName);
            }
            let service = open_local_service(&context.db_path).await?;
            service.save_settings(name).await?;
            println!("Display name saved: {name}");
        }
    }
    Ok(())
}
