use std::env;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use dogwalk_core::db::{Database, LibSqlSettingsStore};
use dogwalk_core::{RemoteConfig, WalkLog, WalkLogBackend, WalkLogService};
use serde::Serialize;

use crate::error::CliError;

pub type CliService = WalkLogService<LibSqlSettingsStore, WalkLogBackend>;

/// Global options resolved once per invocation.
#[derive(Debug, Clone)]
pub struct AppContext {
    pub db_path: PathBuf,
    pub remote: Option<RemoteConfig>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WalkListItem {
    pub id: String,
    pub date: DateTime<Utc>,
    pub relative_time: String,
    pub quality: String,
    pub quality_label: String,
    pub bathroom: String,
    pub bathroom_label: String,
    pub user_name: String,
    pub notes: Option<String>,
}

/// Open the service and apply the startup fetch.
///
/// Waiting here keeps the startup fetch from landing after (and wiping) the
/// change the command is about to make.
pub async fn open_service(context: &AppContext) -> Result<CliService, CliError> {
    let mut service = start_service(context).await?;
    service.wait_idle().await?;
    Ok(service)
}

/// Open the service without waiting for the startup fetch.
pub async fn start_service(context: &AppContext) -> Result<CliService, CliError> {
    let db = Database::open(&context.db_path).await?;
    let backend = WalkLogBackend::from_config(context.remote.as_ref())?;
    Ok(WalkLogService::start(LibSqlSettingsStore::new(db), backend).await)
}

/// Open the service with the remote disabled, for local-only commands.
pub async fn open_local_service(db_path: &Path) -> Result<CliService, CliError> {
    let db = Database::open(db_path).await?;
    Ok(WalkLogService::start(LibSqlSettingsStore::new(db), WalkLogBackend::Offline).await)
}

pub fn resolve_log(query: &str, service: &CliService) -> Result<WalkLog, CliError> {
    let matches = service.find_by_id_prefix(query);

    match matches.as_slice() {
        [] => Err(CliError::LogNotFound(query.to_string())),
        [log] => Ok((*log).clone()),
        _ => {
            let options = matches
                .iter()
                .take(3)
                .filter_map(|log| log.id)
                .map(|id| short_id(&id.as_str()))
                .collect::<Vec<_>>()
                .join(", ");

            Err(CliError::AmbiguousLogId(format!(
                "ID prefix '{query}' is ambiguous; matches: {options}"
            )))
        }
    }
}

pub fn format_log_lines(logs: &[&WalkLog], now: DateTime<Utc>) -> Vec<String> {
    logs.iter()
        .map(|log| {
            let short_id = log.id.map_or_else(String::new, |id| short_id(&id.as_str()));
            let quality = format!("{} {}", log.quality.emoji(), log.quality.label());
            let bathroom = format!("{} {}", log.bathroom.emoji(), log.bathroom.label());
            let relative_time = format_relative_time(log.date, now);
            let line = format!(
                "{short_id:<13}  {quality:<12}  {bathroom:<9}  {relative_time:<9}  {}",
                log.user_name
            );

            match log.notes.as_deref() {
                Some(notes) => format!("{line}  {}", notes_preview(notes, 40)),
                None => line,
            }
        })
        .collect()
}

pub fn log_to_list_item(log: &WalkLog, now: DateTime<Utc>) -> WalkListItem {
    WalkListItem {
        id: log.id.map(|id| id.as_str()).unwrap_or_default(),
        date: log.date,
        relative_time: format_relative_time(log.date, now),
        quality: log.quality.as_str().to_string(),
        quality_label: log.quality.label().to_string(),
        bathroom: log.bathroom.as_str().to_string(),
        bathroom_label: log.bathroom.label().to_string(),
        user_name: log.user_name.clone(),
        notes: log.notes.clone(),
    }
}

pub fn notes_preview(notes: &str, max_chars: usize) -> String {
    let first_line = notes.lines().next().unwrap_or_default().trim();
    if first_line.chars().count() > max_chars {
        let truncated = first_line
            .chars()
            .take(max_chars.saturating_sub(3))
            .collect::<String>();
        format!("{truncated}...")
    } else {
        first_line.to_string()
    }
}

pub fn format_relative_time(date: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let diff = now.signed_duration_since(date).num_minutes().max(0);
    let hour = 60;
    let day = 24 * hour;
    let week = 7 * day;

    if diff < 1 {
        "just now".to_string()
    } else if diff < hour {
        format!("{diff}m ago")
    } else if diff < day {
        format!("{}h ago", diff / hour)
    } else if diff < week {
        format!("{}d ago", diff / day)
    } else {
        date.format("%Y-%m-%d").to_string()
    }
}

fn short_id(id: &str) -> String {
    id.chars().take(13).collect()
}

pub fn normalize_log_identifier(id: &str) -> Result<String, CliError> {
    let trimmed = id.trim();
    if trimmed.is_empty() {
        Err(CliError::EmptyLogId)
    } else {
        Ok(trimmed.to_string())
    }
}

pub fn resolve_db_path(cli_db_path: Option<PathBuf>) -> PathBuf {
    cli_db_path
        .or_else(|| env::var_os("DOGWALK_DB_PATH").map(PathBuf::from))
        .unwrap_or_else(default_db_path)
}

pub fn default_db_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("dogwalk")
        .join("dogwalk.db")
}
